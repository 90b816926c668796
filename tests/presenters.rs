// tests/presenters.rs
//
// Read-side projections: metadata block, name filtering, top-N truncation.

use chrono::{NaiveDate, TimeZone, Utc};

use statdash::aggregate::PlayerStats;
use statdash::core::dates::window_from_bounds;
use statdash::model::Skater;
use statdash::present::filters::StatFilters;
use statdash::present::nhl;

fn stats_with(names_goals: &[(&str, u32)]) -> PlayerStats {
    let mut stats = PlayerStats::default();
    for (i, (name, goals)) in names_goals.iter().enumerate() {
        let mut s = Skater::zeroed(*name);
        s.team = "Sharks".into();
        s.games = 1;
        s.goals = *goals;
        s.shots = goals * 2;
        s.game_dates
            .push(Utc.with_ymd_and_hms(2021, 6, 10 + i as u32, 2, 0, 0).unwrap());
        stats.skaters.insert(s.name.clone(), s);
    }
    stats.games = names_goals.len();
    stats
}

fn window() -> statdash::core::dates::DateWindow {
    window_from_bounds(
        NaiveDate::from_ymd_opt(2021, 6, 9).unwrap(),
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
    )
    .unwrap()
}

#[test]
fn metadata_reflects_window_and_games() {
    let stats = stats_with(&[("Doe, Jane", 3)]);
    let report = nhl::present(&stats, &window(), &StatFilters::default());
    assert_eq!(report.metadata.dates.days, 7);
    assert_eq!(report.metadata.dates.start, "2021-06-09");
    assert_eq!(report.metadata.dates.end, "2021-06-15");
    assert_eq!(report.metadata.games, 1);
    assert_eq!(report.metadata.failed_sources, 0);
}

#[test]
fn name_filter_projects_matching_identities() {
    let stats = stats_with(&[("Doe, Jane", 3), ("Smith, Alex", 1)]);
    let filters = StatFilters::parse(&["name=doe".to_string()]).unwrap();
    let report = nhl::present(&stats, &window(), &filters);
    assert_eq!(report.skaters.len(), 1);
    assert!(report.skaters.contains_key("Doe, Jane"));
}

#[test]
fn top_n_keeps_highest_scorers() {
    let stats = stats_with(&[("Doe, Jane", 3), ("Smith, Alex", 1), ("Roe, Sam", 5)]);
    let filters = StatFilters::parse(&["top=2".to_string()]).unwrap();
    let report = nhl::present(&stats, &window(), &filters);
    assert_eq!(report.skaters.len(), 2);
    assert!(report.skaters.contains_key("Roe, Sam"));
    assert!(report.skaters.contains_key("Doe, Jane"));
    assert!(!report.skaters.contains_key("Smith, Alex"));
}

#[test]
fn derived_rates_appear_in_views_not_counters() {
    let stats = stats_with(&[("Doe, Jane", 3)]);
    let report = nhl::present(&stats, &window(), &StatFilters::default());
    let view = &report.skaters["Doe, Jane"];
    // 3 goals on 6 shots.
    assert_eq!(view.shooting_percentage, Some(0.5));
    // No faceoffs taken: sentinel, not zero.
    assert_eq!(view.faceoff_percentage, None);
}

#[test]
fn report_serializes_with_null_sentinels() {
    let stats = stats_with(&[("Doe, Jane", 0)]);
    let report = nhl::present(&stats, &window(), &StatFilters::default());
    let json = serde_json::to_value(&report).unwrap();
    // 0 goals on 0 shots: explicit null, never NaN or 0.
    assert!(json["skaters"]["Doe, Jane"]["shooting_percentage"].is_null());
    assert_eq!(json["metadata"]["games"], 1);
}
