use hero_timeline::aggregator::HeroAccumulator;
use hero_timeline::parser::{ItemPurchase, NetworthSample};
use pretty_assertions::assert_eq;
use serde_json::{json, Number};

fn sample(time: i64, networth: i64) -> NetworthSample {
    NetworthSample {
        time: Number::from(time),
        networth: json!(networth),
    }
}

fn interval_line(unit_hero: &str, time: i64, networth: i64, x: i64, y: i64) -> String {
    format!(
        r#"{{"time":{},"type":"interval","unit":"CDOTA_Unit_Hero_{}","networth":{},"x":{},"y":{}}}"#,
        time, unit_hero, networth, x, y
    )
}

fn purchase_line(npc_hero: &str, item: &str, time: i64) -> String {
    format!(
        r#"{{"time":{},"type":"DOTA_COMBATLOG_PURCHASE","targetname":"npc_dota_hero_{}","valuename":"{}"}}"#,
        time, npc_hero, item
    )
}

fn accumulate(lines: &[String]) -> HeroAccumulator {
    let mut acc = HeroAccumulator::new();
    for (i, line) in lines.iter().enumerate() {
        acc.process_line(line, i + 1).unwrap();
    }
    acc
}

#[test]
fn test_hero_names_collapse_case_insensitively() {
    let acc = accumulate(&[
        interval_line("Nevermore", 1, 600, 0, 0),
        interval_line("nevermore", 2, 610, 0, 0),
    ]);

    let records = acc.finalize();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hero_name, "nevermore");
    assert_eq!(records[0].positions.len(), 2);
}

#[test]
fn test_unit_and_npc_spellings_collapse() {
    // Interval records use the class name, combat log uses the npc name
    let acc = accumulate(&[
        interval_line("Queen_Of_Pain", 30, 700, 5, 5),
        purchase_line("queenofpain", "item_bottle", 40),
    ]);

    let records = acc.finalize();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hero_name, "queenofpain");
    assert_eq!(records[0].items.len(), 1);
    assert_eq!(records[0].positions.len(), 1);
}

#[test]
fn test_first_sample_in_bucket_wins_and_last_sample_trails() {
    let acc = accumulate(&[
        interval_line("Axe", 65, 500, 0, 0),
        interval_line("Axe", 90, 600, 0, 0),
    ]);

    let records = acc.finalize();

    assert_eq!(
        records[0].networths,
        vec![sample(60, 500), sample(90, 600)]
    );
}

#[test]
fn test_buckets_are_ascending_and_unique() {
    let acc = accumulate(&[
        interval_line("Axe", -30, 600, 0, 0),
        interval_line("Axe", 0, 620, 0, 0),
        interval_line("Axe", 45, 700, 0, 0),
        interval_line("Axe", 61, 900, 0, 0),
        interval_line("Axe", 185, 1500, 0, 0),
    ]);

    let records = acc.finalize();

    assert_eq!(
        records[0].networths,
        vec![
            sample(-60, 600),
            sample(0, 620),
            sample(60, 900),
            sample(180, 1500),
            sample(185, 1500),
        ]
    );
}

#[test]
fn test_float_times_bucket_like_floor_division() {
    let acc = accumulate(&[
        r#"{"time":65.0,"type":"interval","unit":"CDOTA_Unit_Hero_Axe","networth":500,"x":1,"y":2}"#
            .to_string(),
        r#"{"time":90.5,"type":"interval","unit":"CDOTA_Unit_Hero_Axe","networth":600.5,"x":1.5,"y":2}"#
            .to_string(),
    ]);

    let records = acc.finalize();

    assert_eq!(
        records[0].networths,
        vec![
            NetworthSample {
                time: Number::from_f64(60.0).unwrap(),
                networth: json!(500),
            },
            NetworthSample {
                time: Number::from_f64(90.5).unwrap(),
                networth: json!(600.5),
            },
        ]
    );
    assert_eq!(records[0].positions[1].x, json!(1.5));
}

#[test]
fn test_purchase_recorded() {
    let acc = accumulate(&[purchase_line("antimage", "item_blink", 120)]);

    let records = acc.finalize();

    assert_eq!(records[0].hero_name, "antimage");
    assert_eq!(
        records[0].items,
        vec![ItemPurchase {
            item_name: "item_blink".to_string(),
            purchase_time: json!(120),
        }]
    );
    assert!(records[0].networths.is_empty());
    assert!(records[0].positions.is_empty());
}

#[test]
fn test_purchases_keep_encounter_order() {
    let acc = accumulate(&[
        purchase_line("axe", "item_tango", -80),
        purchase_line("axe", "item_tango", -80),
        purchase_line("axe", "item_blink", 700),
        purchase_line("axe", "item_branches", 10),
    ]);

    let items: Vec<String> = acc.finalize()[0]
        .items
        .iter()
        .map(|i| i.item_name.clone())
        .collect();

    assert_eq!(items, vec!["item_tango", "item_tango", "item_blink", "item_branches"]);
}

#[test]
fn test_positions_are_never_deduplicated() {
    let lines: Vec<String> = (0..7)
        .map(|t| interval_line("Lina", t, 600, 100, 100))
        .collect();

    let records = accumulate(&lines).finalize();

    let times: Vec<Option<i64>> = records[0]
        .positions
        .iter()
        .map(|p| p.time.as_i64())
        .collect();
    assert_eq!(times, (0..7i64).map(Some).collect::<Vec<_>>());
}

#[test]
fn test_heroes_in_first_seen_order() {
    let acc = accumulate(&[
        purchase_line("zuus", "item_null_talisman", 10),
        interval_line("Axe", 11, 600, 0, 0),
        interval_line("Zuus", 12, 650, 0, 0),
        purchase_line("bane", "item_tango", 13),
    ]);

    let names: Vec<String> = acc.finalize().into_iter().map(|h| h.hero_name).collect();

    assert_eq!(names, vec!["zuus", "axe", "bane"]);
}

#[test]
fn test_failed_line_leaves_state_untouched() {
    let mut acc = HeroAccumulator::new();
    acc.process_line(&interval_line("Axe", 1, 600, 0, 0), 1).unwrap();

    assert!(acc.process_line("{broken", 2).is_err());

    assert_eq!(acc.stats().lines, 1);
    assert_eq!(acc.finalize()[0].positions.len(), 1);
}
