// src/model/goalie.rs

use chrono::{DateTime, Duration, Utc};

use crate::config::consts::SAVE_PCT_PLACES;
use crate::error::{Result, StatError};
use crate::model::round_rate;
use crate::model::skater::pick_team;

/// One goalie's cumulative stats. Wins, losses and shutouts are resolved from
/// the game's decision and save/shot line when the box score is parsed; after
/// that they are plain counters and only ever sum.
#[derive(Clone, Debug, PartialEq)]
pub struct Goalie {
    /// Normalized "Last, First" identity key.
    pub name: String,
    /// Team from the most recent contributing game.
    pub team: String,
    /// One entry per contributing game.
    pub game_dates: Vec<DateTime<Utc>>,

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
    pub toi: Duration,
}

impl Goalie {
    /// All-zero record carrying only identity.
    pub fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: String::new(),
            game_dates: Vec::new(),
            games: 0,
            wins: 0,
            losses: 0,
            shutouts: 0,
            saves: 0,
            saves_ev: 0,
            saves_pp: 0,
            saves_sh: 0,
            shots: 0,
            shots_ev: 0,
            shots_pp: 0,
            shots_sh: 0,
            toi: Duration::zero(),
        }
    }

    /// Fold `other` into `self`. Requires matching identity.
    pub fn merge(self, other: Goalie) -> Result<Goalie> {
        if self.name != other.name {
            return Err(StatError::IdentityMismatch {
                left: self.name,
                right: other.name,
            });
        }
        let team = pick_team(
            (&self.team, self.game_dates.iter().max()),
            (&other.team, other.game_dates.iter().max()),
        );
        let mut game_dates = self.game_dates;
        game_dates.extend(other.game_dates);

        Ok(Goalie {
            name: self.name,
            team,
            game_dates,
            games: self.games + other.games,
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            shutouts: self.shutouts + other.shutouts,
            saves: self.saves + other.saves,
            saves_ev: self.saves_ev + other.saves_ev,
            saves_pp: self.saves_pp + other.saves_pp,
            saves_sh: self.saves_sh + other.saves_sh,
            shots: self.shots + other.shots,
            shots_ev: self.shots_ev + other.shots_ev,
            shots_pp: self.shots_pp + other.shots_pp,
            shots_sh: self.shots_sh + other.shots_sh,
            toi: self.toi + other.toi,
        })
    }

    /// saves/shots from final totals; `None` until the goalie has faced a shot.
    pub fn save_percentage(&self) -> Option<f64> {
        round_rate(self.saves, self.shots, SAVE_PCT_PLACES)
    }

    pub fn save_percentage_ev(&self) -> Option<f64> {
        round_rate(self.saves_ev, self.shots_ev, SAVE_PCT_PLACES)
    }

    pub fn save_percentage_pp(&self) -> Option<f64> {
        round_rate(self.saves_pp, self.shots_pp, SAVE_PCT_PLACES)
    }

    pub fn save_percentage_sh(&self) -> Option<f64> {
        round_rate(self.saves_sh, self.shots_sh, SAVE_PCT_PLACES)
    }
}
