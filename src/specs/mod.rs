// src/specs/mod.rs
//! # Document "specs" module
//!
//! One spec per remote endpoint. Each spec encodes *where the ground truth
//! lives in that document* and *how to extract it tolerantly*:
//!
//! - `schedule`: the schedule service's JSON; dated games → feed locators.
//! - `boxscore`: one game feed's JSON; box score → partial skater/goalie
//!   records keyed by normalized name.
//! - `sales`: one store's event page HTML; text-line scan of the event blob
//!   → a single `GarageSale`.
//!
//! Specs are pure `&str → records` functions so they stay testable offline
//! against captured fixtures. Fetching, fan-out and merging live in `scrape`
//! and `aggregate`; specs only read documents. Typed `serde` schemas sit at
//! the parse boundary so everything downstream is statically shaped.

pub mod boxscore;
pub mod sales;
pub mod schedule;
