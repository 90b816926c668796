// src/specs/schedule.rs

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::config::consts::{SCHEDULE_PATH, STATS_URL};
use crate::core::dates::{DateWindow, game_local_date};
use crate::error::{Result, StatError};

/// One fetchable game feed. `date` is the US/Pacific calendar day the game
/// belongs to; grouping/log label only, aggregation never depends on it.
#[derive(Clone, Debug)]
pub struct GameFeed {
    pub date: NaiveDate,
    pub game_time: DateTime<Utc>,
    pub url: String,
}

pub fn schedule_url(window: &DateWindow) -> String {
    format!(
        "{STATS_URL}{SCHEDULE_PATH}?startDate={}&endDate={}",
        window.start, window.end
    )
}

#[derive(Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleDate {
    date: String,
    #[serde(default)]
    total_games: u32,
    #[serde(default)]
    games: Vec<ScheduledGame>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduledGame {
    game_date: DateTime<Utc>,
    link: String,
}

/// Schedule JSON → deduplicated feed locators.
pub fn parse(url: &str, payload: &str) -> Result<Vec<GameFeed>> {
    let resp: ScheduleResponse =
        serde_json::from_str(payload).map_err(|e| StatError::parse(url, e))?;

    let mut seen = HashSet::new();
    let mut feeds = Vec::new();
    for day in resp.dates {
        info!(date = %day.date, games = day.total_games, "collecting stats for games");
        for game in day.games {
            let feed_url = format!("{STATS_URL}{}", game.link);
            if seen.insert(feed_url.clone()) {
                feeds.push(GameFeed {
                    date: game_local_date(game.game_date),
                    game_time: game.game_date,
                    url: feed_url,
                });
            }
        }
    }
    Ok(feeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_dedups_feeds() {
        let doc = r#"{
          "dates": [
            {
              "date": "2020-03-06",
              "totalGames": 2,
              "games": [
                { "gameDate": "2020-03-07T02:00:00Z", "link": "/api/v1/game/2019021046/feed/live" },
                { "gameDate": "2020-03-07T02:00:00Z", "link": "/api/v1/game/2019021046/feed/live" },
                { "gameDate": "2020-03-07T00:00:00Z", "link": "/api/v1/game/2019021047/feed/live" }
              ]
            }
          ]
        }"#;
        let feeds = parse("sched", doc).unwrap();
        assert_eq!(feeds.len(), 2);
        assert_eq!(
            feeds[0].url,
            format!("{STATS_URL}/api/v1/game/2019021046/feed/live")
        );
        // 02:00 UTC groups to the previous Pacific day
        assert_eq!(
            feeds[0].date,
            NaiveDate::from_ymd_opt(2020, 3, 6).unwrap()
        );
    }

    #[test]
    fn empty_schedule_is_zero_feeds() {
        let feeds = parse("sched", r#"{"dates": []}"#).unwrap();
        assert!(feeds.is_empty());
    }

    #[test]
    fn malformed_schedule_is_parse_error() {
        assert!(matches!(
            parse("sched", "not json"),
            Err(StatError::Parse { .. })
        ));
    }
}
