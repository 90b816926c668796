// src/model/skater.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};

use crate::config::consts::SHOOTING_PCT_PLACES;
use crate::error::{Result, StatError};
use crate::model::round_rate;

/// One skater's cumulative stats. Built from a single box score with
/// `games = 1`, then folded together across documents.
#[derive(Clone, Debug, PartialEq)]
pub struct Skater {
    /// Normalized "Last, First" identity key.
    pub name: String,
    /// Team from the most recent contributing game.
    pub team: String,
    pub positions: BTreeSet<String>,
    /// One entry per contributing game.
    pub game_dates: Vec<DateTime<Utc>>,

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
    pub toi: Duration,
}

impl Skater {
    /// All-zero record carrying only identity. Counter-wise this is the merge
    /// identity element.
    pub fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: String::new(),
            positions: BTreeSet::new(),
            game_dates: Vec::new(),
            games: 0,
            goals: 0,
            assists: 0,
            shots: 0,
            blocks: 0,
            hits: 0,
            pim: 0,
            giveaways: 0,
            takeaways: 0,
            faceoffs: 0,
            faceoffs_won: 0,
            goals_pp: 0,
            goals_sh: 0,
            assists_pp: 0,
            assists_sh: 0,
            plus_minus: 0,
            toi: Duration::zero(),
        }
    }

    /// Fold `other` into `self`. Counters sum; team goes to whichever operand
    /// saw the later game; positions union. Requires matching identity.
    pub fn merge(self, other: Skater) -> Result<Skater> {
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
        let mut positions = self.positions;
        positions.extend(other.positions);
        let mut game_dates = self.game_dates;
        game_dates.extend(other.game_dates);

        Ok(Skater {
            name: self.name,
            team,
            positions,
            game_dates,
            games: self.games + other.games,
            goals: self.goals + other.goals,
            assists: self.assists + other.assists,
            shots: self.shots + other.shots,
            blocks: self.blocks + other.blocks,
            hits: self.hits + other.hits,
            pim: self.pim + other.pim,
            giveaways: self.giveaways + other.giveaways,
            takeaways: self.takeaways + other.takeaways,
            faceoffs: self.faceoffs + other.faceoffs,
            faceoffs_won: self.faceoffs_won + other.faceoffs_won,
            goals_pp: self.goals_pp + other.goals_pp,
            goals_sh: self.goals_sh + other.goals_sh,
            assists_pp: self.assists_pp + other.assists_pp,
            assists_sh: self.assists_sh + other.assists_sh,
            plus_minus: self.plus_minus + other.plus_minus,
            toi: self.toi + other.toi,
        })
    }

    /// goals/shots from final totals; `None` until the skater has a shot.
    pub fn shooting_percentage(&self) -> Option<f64> {
        round_rate(self.goals, self.shots, SHOOTING_PCT_PLACES)
    }

    /// faceoffs_won/faceoffs; `None` for skaters who never took one.
    pub fn faceoff_percentage(&self) -> Option<f64> {
        round_rate(self.faceoffs_won, self.faceoffs, 2)
    }
}

/// Later max game date wins; a dateless operand loses; full tie goes right,
/// matching the pairwise fold order the aggregator uses.
pub(crate) fn pick_team(
    left: (&str, Option<&DateTime<Utc>>),
    right: (&str, Option<&DateTime<Utc>>),
) -> String {
    match (left.1, right.1) {
        (Some(a), Some(b)) if a > b => left.0.to_string(),
        (Some(_), None) => left.0.to_string(),
        _ => right.0.to_string(),
    }
}
