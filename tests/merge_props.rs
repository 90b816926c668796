// tests/merge_props.rs
//
// Algebraic properties of the entity merge: associativity and identity for
// the additive counters, the mismatch invariant, and rate derivation from
// final totals only.

use chrono::{TimeZone, Utc};

use statdash::StatError;
use statdash::model::{Goalie, Skater};

fn skater(name: &str, team: &str, day: u32, goals: u32, shots: u32) -> Skater {
    let mut s = Skater::zeroed(name);
    s.team = team.to_string();
    s.game_dates
        .push(Utc.with_ymd_and_hms(2021, 3, day, 19, 0, 0).unwrap());
    s.games = 1;
    s.goals = goals;
    s.shots = shots;
    s.assists = goals + 1;
    s.hits = 2;
    s.faceoffs = 4;
    s.faceoffs_won = 2;
    s.plus_minus = goals as i32 - 1;
    s
}

fn counters(s: &Skater) -> (u32, u32, u32, u32, u32, i32) {
    (s.games, s.goals, s.assists, s.shots, s.hits, s.plus_minus)
}

#[test]
fn merge_is_associative_for_counters() {
    let a = skater("Doe, Jane", "Sharks", 1, 1, 3);
    let b = skater("Doe, Jane", "Sharks", 2, 2, 2);
    let c = skater("Doe, Jane", "Kings", 3, 0, 4);

    let left = a
        .clone()
        .merge(b.clone())
        .unwrap()
        .merge(c.clone())
        .unwrap();
    let right = a.merge(b.merge(c).unwrap()).unwrap();

    assert_eq!(counters(&left), counters(&right));
    assert_eq!(left.toi, right.toi);
    assert_eq!(left.positions, right.positions);
    // Team tie-break compares values, so grouping cannot change it either.
    assert_eq!(left.team, right.team);
}

#[test]
fn zero_record_is_identity_for_counters() {
    let a = skater("Doe, Jane", "Sharks", 5, 3, 7);
    let merged = a.clone().merge(Skater::zeroed("Doe, Jane")).unwrap();
    assert_eq!(counters(&merged), counters(&a));

    // And from the left as well.
    let merged = Skater::zeroed("Doe, Jane").merge(a.clone()).unwrap();
    assert_eq!(counters(&merged), counters(&a));
    assert_eq!(merged.team, a.team);
}

#[test]
fn mismatched_identities_refuse_to_merge() {
    let a = skater("Doe, Jane", "Sharks", 1, 1, 1);
    let b = skater("Smith, Alex", "Sharks", 1, 1, 1);
    assert!(matches!(
        a.merge(b),
        Err(StatError::IdentityMismatch { .. })
    ));

    let g = Goalie::zeroed("Doe, Jane");
    let h = Goalie::zeroed("Smith, Alex");
    assert!(matches!(
        g.merge(h),
        Err(StatError::IdentityMismatch { .. })
    ));
}

#[test]
fn team_follows_latest_game_date() {
    let older = skater("Doe, Jane", "Sharks", 1, 0, 0);
    let newer = skater("Doe, Jane", "Kings", 9, 0, 0);

    // Same winner regardless of operand order.
    assert_eq!(older.clone().merge(newer.clone()).unwrap().team, "Kings");
    assert_eq!(newer.merge(older).unwrap().team, "Kings");
}

#[test]
fn rates_recompute_from_totals_not_from_rates() {
    // 1/3 then 2/2: summing the two per-game percentages would give ~0.67;
    // the correct rate from totals is 3/5.
    let a = skater("Doe, Jane", "Sharks", 1, 1, 3);
    let b = skater("Doe, Jane", "Sharks", 2, 2, 2);
    let merged = a.merge(b).unwrap();
    assert_eq!(merged.shooting_percentage(), Some(0.6));

    let direct = skater("Doe, Jane", "Sharks", 3, 3, 5);
    assert_eq!(
        merged.shooting_percentage(),
        direct.shooting_percentage()
    );
}

#[test]
fn zero_shots_is_sentinel_not_zero() {
    let mut g = Goalie::zeroed("Idle, Backup");
    g.games = 1;
    assert_eq!(g.save_percentage(), None);
    assert_eq!(g.save_percentage_pp(), None);

    let s = skater("Doe, Jane", "Sharks", 1, 0, 0);
    assert_eq!(s.shooting_percentage(), None);
}

#[test]
fn goalie_counters_sum_and_rates_follow() {
    let mut a = Goalie::zeroed("Stopper, Sharp");
    a.team = "Sharks".into();
    a.game_dates
        .push(Utc.with_ymd_and_hms(2021, 3, 1, 19, 0, 0).unwrap());
    a.games = 1;
    a.wins = 1;
    a.saves = 30;
    a.shots = 30;
    a.shutouts = 1;

    let mut b = Goalie::zeroed("Stopper, Sharp");
    b.team = "Sharks".into();
    b.game_dates
        .push(Utc.with_ymd_and_hms(2021, 3, 3, 19, 0, 0).unwrap());
    b.games = 1;
    b.losses = 1;
    b.saves = 24;
    b.shots = 27;

    let merged = a.merge(b).unwrap();
    assert_eq!((merged.games, merged.wins, merged.losses), (2, 1, 1));
    assert_eq!(merged.shutouts, 1);
    // 54/57 to three places.
    assert_eq!(merged.save_percentage(), Some(0.947));
}
