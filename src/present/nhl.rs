// src/present/nhl.rs

use std::collections::BTreeMap;

use chrono::Duration;
use serde::Serialize;

use crate::aggregate::PlayerStats;
use crate::core::dates::DateWindow;
use crate::model::{Goalie, Skater};
use crate::present::filters::StatFilters;

/// Serializable stats report: metadata block plus per-identity views.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub metadata: Metadata,
    pub skaters: BTreeMap<String, SkaterView>,
    pub goalies: BTreeMap<String, GoalieView>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    pub dates: DatesMeta,
    /// Source documents successfully folded in.
    pub games: usize,
    pub failed_sources: usize,
}

#[derive(Debug, Serialize)]
pub struct DatesMeta {
    pub days: i64,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct SkaterView {
    pub team: String,
    pub positions: Vec<String>,
    pub game_dates: Vec<String>,
    pub games: u32,
    pub goals: u32,
    pub assists: u32,
    pub shots: u32,
    pub blocks: u32,
    pub hits: u32,
    pub pim: u32,
    pub giveaways: u32,
    pub takeaways: u32,
    pub faceoffs: u32,
    pub faceoffs_won: u32,
    pub goals_pp: u32,
    pub goals_sh: u32,
    pub assists_pp: u32,
    pub assists_sh: u32,
    pub plus_minus: i32,
    pub toi: String,
    pub shooting_percentage: Option<f64>,
    pub faceoff_percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct GoalieView {
    pub team: String,
    pub game_dates: Vec<String>,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub shutouts: u32,
    pub saves: u32,
    pub saves_ev: u32,
    pub saves_pp: u32,
    pub saves_sh: u32,
    pub shots: u32,
    pub shots_ev: u32,
    pub shots_pp: u32,
    pub shots_sh: u32,
    pub toi: String,
    pub save_percentage: Option<f64>,
    pub save_percentage_ev: Option<f64>,
    pub save_percentage_pp: Option<f64>,
    pub save_percentage_sh: Option<f64>,
}

/// Project the run's aggregates through the filters into a report.
pub fn present(stats: &PlayerStats, window: &DateWindow, filters: &StatFilters) -> StatsReport {
    let mut skaters: Vec<&Skater> = stats
        .skaters
        .values()
        .filter(|s| filters.matches_name(&s.name))
        .collect();
    let mut goalies: Vec<&Goalie> = stats
        .goalies
        .values()
        .filter(|g| filters.matches_name(&g.name))
        .collect();

    if let Some(n) = filters.top {
        // Rank before truncating; the map shape re-sorts by identity.
        skaters.sort_by(|a, b| {
            (b.goals, b.assists, &a.name).cmp(&(a.goals, a.assists, &b.name))
        });
        goalies.sort_by(|a, b| (b.wins, b.saves, &a.name).cmp(&(a.wins, a.saves, &b.name)));
        skaters.truncate(n);
        goalies.truncate(n);
    }

    StatsReport {
        metadata: Metadata {
            dates: DatesMeta {
                days: window.days(),
                start: window.start.to_string(),
                end: window.end.to_string(),
            },
            games: stats.games,
            failed_sources: stats.failures.len(),
        },
        skaters: skaters
            .into_iter()
            .map(|s| (s.name.clone(), skater_view(s)))
            .collect(),
        goalies: goalies
            .into_iter()
            .map(|g| (g.name.clone(), goalie_view(g)))
            .collect(),
    }
}

fn skater_view(s: &Skater) -> SkaterView {
    SkaterView {
        team: s.team.clone(),
        positions: s.positions.iter().cloned().collect(),
        game_dates: s.game_dates.iter().map(|d| d.format("%m/%d").to_string()).collect(),
        games: s.games,
        goals: s.goals,
        assists: s.assists,
        shots: s.shots,
        blocks: s.blocks,
        hits: s.hits,
        pim: s.pim,
        giveaways: s.giveaways,
        takeaways: s.takeaways,
        faceoffs: s.faceoffs,
        faceoffs_won: s.faceoffs_won,
        goals_pp: s.goals_pp,
        goals_sh: s.goals_sh,
        assists_pp: s.assists_pp,
        assists_sh: s.assists_sh,
        plus_minus: s.plus_minus,
        toi: fmt_toi(s.toi),
        shooting_percentage: s.shooting_percentage(),
        faceoff_percentage: s.faceoff_percentage(),
    }
}

fn goalie_view(g: &Goalie) -> GoalieView {
    GoalieView {
        team: g.team.clone(),
        game_dates: g.game_dates.iter().map(|d| d.format("%Y/%m/%d").to_string()).collect(),
        games: g.games,
        wins: g.wins,
        losses: g.losses,
        shutouts: g.shutouts,
        saves: g.saves,
        saves_ev: g.saves_ev,
        saves_pp: g.saves_pp,
        saves_sh: g.saves_sh,
        shots: g.shots,
        shots_ev: g.shots_ev,
        shots_pp: g.shots_pp,
        shots_sh: g.shots_sh,
        toi: fmt_toi(g.toi),
        save_percentage: g.save_percentage(),
        save_percentage_ev: g.save_percentage_ev(),
        save_percentage_pp: g.save_percentage_pp(),
        save_percentage_sh: g.save_percentage_sh(),
    }
}

/// Total duration as zero-padded "MM:SS" (minutes may exceed 59).
fn fmt_toi(d: Duration) -> String {
    let total_secs = d.num_seconds().max(0);
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toi_formats_past_the_hour() {
        assert_eq!(fmt_toi(Duration::seconds(83 * 60 + 7)), "83:07");
        assert_eq!(fmt_toi(Duration::zero()), "00:00");
    }
}
