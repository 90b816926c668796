// src/specs/boxscore.rs

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::core::sanitize::last_first;
use crate::error::{Result, StatError};
use crate::model::{Goalie, Skater};

/// Partial per-game records, keyed by normalized name. What one document
/// contributes to the run's cumulative totals.
#[derive(Clone, Debug, Default)]
pub struct GameStats {
    pub skaters: BTreeMap<String, Skater>,
    pub goalies: BTreeMap<String, Goalie>,
}

/* ---------------- wire schema ---------------- */

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoxscoreResponse {
    live_data: LiveData,
}

#[derive(Deserialize)]
struct LiveData {
    boxscore: Boxscore,
}

#[derive(Deserialize)]
struct Boxscore {
    teams: Sides,
}

#[derive(Deserialize)]
struct Sides {
    home: TeamBox,
    away: TeamBox,
}

#[derive(Deserialize)]
struct TeamBox {
    team: TeamInfo,
    #[serde(default)]
    players: HashMap<String, PlayerEntry>,
}

#[derive(Deserialize)]
struct TeamInfo {
    name: String,
}

#[derive(Deserialize)]
struct PlayerEntry {
    person: Person,
    position: Option<Position>,
    #[serde(default)]
    stats: PlayerSplits,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    full_name: String,
}

#[derive(Deserialize)]
struct Position {
    abbreviation: String,
}

/// A roster entry may carry a skater line, a goalie line, or neither
/// (scratches); absent lines just mean the entry contributes nothing.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerSplits {
    skater_stats: Option<SkaterLine>,
    goalie_stats: Option<GoalieLine>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SkaterLine {
    time_on_ice: Option<String>,
    assists: u32,
    goals: u32,
    shots: u32,
    hits: u32,
    power_play_goals: u32,
    power_play_assists: u32,
    penalty_minutes: u32,
    // The wire casing really is inconsistent between these two.
    face_off_wins: u32,
    faceoff_taken: u32,
    takeaways: u32,
    giveaways: u32,
    short_handed_goals: u32,
    short_handed_assists: u32,
    blocked: u32,
    plus_minus: i32,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GoalieLine {
    time_on_ice: Option<String>,
    saves: u32,
    power_play_saves: u32,
    short_handed_saves: u32,
    even_saves: u32,
    shots: u32,
    power_play_shots_against: u32,
    short_handed_shots_against: u32,
    even_shots_against: u32,
    decision: Option<String>,
}

/* ---------------- extraction ---------------- */

/// Box-score JSON → partial records. `game_time` stamps every record's
/// provenance; it is what the team tie-break compares later.
pub fn parse(url: &str, payload: &str, game_time: DateTime<Utc>) -> Result<GameStats> {
    let resp: BoxscoreResponse =
        serde_json::from_str(payload).map_err(|e| StatError::parse(url, e))?;

    let mut out = GameStats::default();
    let sides = resp.live_data.boxscore.teams;
    for side in [sides.home, sides.away] {
        let team = side.team.name;
        for entry in side.players.into_values() {
            fold_entry(&mut out, &team, entry, game_time)?;
        }
    }
    Ok(out)
}

fn fold_entry(
    out: &mut GameStats,
    team: &str,
    entry: PlayerEntry,
    game_time: DateTime<Utc>,
) -> Result<()> {
    let name = last_first(&entry.person.full_name);
    let position = entry.position.map(|p| p.abbreviation);

    if let Some(line) = entry.stats.skater_stats {
        let partial = skater_from_line(&name, team, position.as_deref(), &line, game_time);
        fold_skater(&mut out.skaters, partial)?;
    }
    if let Some(line) = entry.stats.goalie_stats {
        let partial = goalie_from_line(&name, team, &line, game_time);
        fold_goalie(&mut out.goalies, partial)?;
    }
    Ok(())
}

fn skater_from_line(
    name: &str,
    team: &str,
    position: Option<&str>,
    line: &SkaterLine,
    game_time: DateTime<Utc>,
) -> Skater {
    let mut skater = Skater::zeroed(name);
    skater.team = team.to_string();
    if let Some(pos) = position {
        if !pos.is_empty() && pos != "N/A" {
            skater.positions.insert(pos.to_string());
        }
    }
    skater.game_dates.push(game_time);
    skater.games = 1;
    skater.goals = line.goals;
    skater.assists = line.assists;
    skater.shots = line.shots;
    skater.blocks = line.blocked;
    skater.hits = line.hits;
    skater.pim = line.penalty_minutes;
    skater.giveaways = line.giveaways;
    skater.takeaways = line.takeaways;
    skater.faceoffs = line.faceoff_taken;
    skater.faceoffs_won = line.face_off_wins;
    skater.goals_pp = line.power_play_goals;
    skater.goals_sh = line.short_handed_goals;
    skater.assists_pp = line.power_play_assists;
    skater.assists_sh = line.short_handed_assists;
    skater.plus_minus = line.plus_minus;
    skater.toi = parse_toi(line.time_on_ice.as_deref());
    skater
}

fn goalie_from_line(
    name: &str,
    team: &str,
    line: &GoalieLine,
    game_time: DateTime<Utc>,
) -> Goalie {
    // Decision is the source of truth for win/loss; the counters only sum
    // from here on.
    let decision = line.decision.as_deref().unwrap_or("");
    let mut goalie = Goalie::zeroed(name);
    goalie.team = team.to_string();
    goalie.game_dates.push(game_time);
    goalie.games = 1;
    goalie.wins = u32::from(decision.eq_ignore_ascii_case("w"));
    goalie.losses = u32::from(decision.eq_ignore_ascii_case("l"));
    goalie.shutouts = u32::from(line.saves == line.shots && line.shots > 0);
    goalie.saves = line.saves;
    goalie.saves_ev = line.even_saves;
    goalie.saves_pp = line.power_play_saves;
    goalie.saves_sh = line.short_handed_saves;
    goalie.shots = line.shots;
    goalie.shots_ev = line.even_shots_against;
    goalie.shots_pp = line.power_play_shots_against;
    goalie.shots_sh = line.short_handed_shots_against;
    goalie.toi = parse_toi(line.time_on_ice.as_deref());
    goalie
}

/// "MM:SS" time-on-ice string; anything unreadable counts as zero.
fn parse_toi(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::zero();
    };
    let Some((m, s)) = raw.split_once(':') else {
        return Duration::zero();
    };
    match (m.trim().parse::<i64>(), s.trim().parse::<i64>()) {
        (Ok(m), Ok(s)) => Duration::seconds(m * 60 + s),
        _ => Duration::zero(),
    }
}

/// Two entries for one identity inside a single document still accumulate.
pub(crate) fn fold_skater(map: &mut BTreeMap<String, Skater>, partial: Skater) -> Result<()> {
    let merged = match map.remove(&partial.name) {
        Some(prev) => prev.merge(partial)?,
        None => partial,
    };
    map.insert(merged.name.clone(), merged);
    Ok(())
}

pub(crate) fn fold_goalie(map: &mut BTreeMap<String, Goalie>, partial: Goalie) -> Result<()> {
    let merged = match map.remove(&partial.name) {
        Some(prev) => prev.merge(partial)?,
        None => partial,
    };
    map.insert(merged.name.clone(), merged);
    Ok(())
}
