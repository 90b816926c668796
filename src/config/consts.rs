// src/config/consts.rs

// Net config
pub const STATS_URL: &str = "https://statsapi.web.nhl.com";
pub const SCHEDULE_PATH: &str = "/api/v1/schedule";
pub const USER_AGENT: &str = "statdash/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Concurrency
pub const MAX_IN_FLIGHT: usize = 8; // be polite to the remote hosts

// Garage sales
pub const GARAGE_SALE_URL: &str = "https://www.rei.com/events/86150/members-only-garage-sale/";
pub const GS_BLOB_START: &str = r#""name" : "members only garage sale!","#;
pub const GS_BLOB_END: &str = r#""addresscountry" : "us""#;
pub const GS_KEY_DETAILS: [&str; 7] = [
    "name",
    "startdate",
    "enddate",
    "telephone",
    "url",
    "streetaddress",
    "addresslocality",
];

/// Store name → event page id. Names are matched lowercased.
pub const STORE_MAP: [(&str, &str); 4] = [
    ("berkeley", "269055"),
    ("concord", "265816"),
    ("saratoga", "265826"),
    ("sf", "266085"),
];

// Schedule timestamps are UTC; game dates group by US/Pacific calendar day.
// Fixed offset, no DST table: the date is a grouping label only.
pub const PACIFIC_UTC_OFFSET_HOURS: i32 = -8;

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SALES_FILE: &str = "garage_sales.json";

// Rounding
pub const SHOOTING_PCT_PLACES: i32 = 2;
pub const SAVE_PCT_PLACES: i32 = 3;
