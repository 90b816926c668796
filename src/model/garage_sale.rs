// src/model/garage_sale.rs

use chrono::NaiveDateTime;

/// One store's members-only garage sale. Non-accumulating: built once per
/// fetched event page, immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct GarageSale {
    /// "Street, City"
    pub address: String,
    /// "(NNN) NNN-NNNN"
    pub phone: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// "REI <City>"
    pub store: String,
    pub url: String,
}

impl GarageSale {
    /// "10:00 AM - 04:00 PM"
    pub fn hours(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%I:%M %p"),
            self.end.format("%I:%M %p")
        )
    }

    /// "May 30, 2021"
    pub fn date(&self) -> String {
        self.start.format("%B %d, %Y").to_string()
    }
}
