// src/specs/sales.rs
//
// Event pages embed the sale details as a structured blob in the page text.
// Reduce the HTML to text lines, scan for the blob's start/end markers,
// scrub the key detail lines in between.

use chrono::NaiveDateTime;
use scraper::Html;
use std::collections::BTreeMap;

use crate::config::consts::{
    GARAGE_SALE_URL, GS_BLOB_END, GS_BLOB_START, GS_KEY_DETAILS, STORE_MAP,
};
use crate::core::sanitize::{format_phone, scrub_key_val};
use crate::error::{Result, StatError};
use crate::model::GarageSale;

/// One fetchable sale page.
#[derive(Clone, Debug)]
pub struct SaleLocator {
    pub store: String,
    pub url: String,
}

/// Resolve store names to event page locators. Empty input means every known
/// store. All unrecognized names are collected into one error, so the caller
/// sees the complete list before anything is fetched.
pub fn store_locators(stores: &[String]) -> Result<Vec<SaleLocator>> {
    if stores.is_empty() {
        return Ok(STORE_MAP
            .iter()
            .map(|(name, id)| SaleLocator {
                store: (*name).to_string(),
                url: format!("{GARAGE_SALE_URL}{id}"),
            })
            .collect());
    }

    let mut locators = Vec::with_capacity(stores.len());
    let mut unknown = Vec::new();
    for store in stores {
        let key = store.to_lowercase();
        match STORE_MAP.iter().find(|(name, _)| *name == key) {
            Some((name, id)) => locators.push(SaleLocator {
                store: (*name).to_string(),
                url: format!("{GARAGE_SALE_URL}{id}"),
            }),
            None => unknown.push(store.clone()),
        }
    }
    if !unknown.is_empty() {
        return Err(StatError::UnknownStores(unknown));
    }
    Ok(locators)
}

/// Event page HTML → one sale record.
pub fn parse(url: &str, html: &str) -> Result<GarageSale> {
    let mut details = extract_details(html);

    let street = take(&mut details, "Streetaddress", url)?;
    let city = take(&mut details, "Addresslocality", url)?;
    let phone = format_phone(&take(&mut details, "Telephone", url)?);
    let start = parse_event_time(&take(&mut details, "Startdate", url)?, url)?;
    let end = parse_event_time(&take(&mut details, "Enddate", url)?, url)?;
    let store = take(&mut details, "Name", url)?.replace("Rei", "REI");
    let sale_url = take(&mut details, "Url", url)?.to_lowercase();

    Ok(GarageSale {
        address: format!("{street}, {city}"),
        phone,
        start,
        end,
        store,
        url: sale_url,
    })
}

/// Scan the page text for the sale blob and scrub its key detail lines.
fn extract_details(html: &str) -> BTreeMap<String, String> {
    let text = Html::parse_document(html)
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join("\n");

    let mut details = BTreeMap::new();
    let mut in_blob = false;
    for raw in text.lines() {
        let line = raw.trim().to_lowercase();
        if in_blob {
            if GS_KEY_DETAILS.iter().any(|detail| line.contains(detail)) {
                if let Some((k, v)) = scrub_key_val(&line) {
                    details.insert(k, v);
                }
            }
            if line == GS_BLOB_END {
                break;
            }
        }
        if line == GS_BLOB_START {
            in_blob = true;
        }
    }
    details
}

fn take(details: &mut BTreeMap<String, String>, key: &str, url: &str) -> Result<String> {
    details
        .remove(key)
        .ok_or_else(|| StatError::parse(url, format!("missing {key} in event blob")))
}

fn parse_event_time(raw: &str, url: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map_err(|e| StatError::parse(url, format!("bad event time {raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h1>Members Only Garage Sale</h1>
          <script type="application/ld+json">
            {
              "@type" : "Event",
              "name" : "Members Only Garage Sale!",
              "startDate" : "2021-05-30T10:00",
              "endDate" : "2021-05-30T16:00",
              "location" : {
                "name" : "REI Berkeley",
                "url" : "https://www.rei.com/stores/berkeley.html",
                "telephone" : "+15105274140",
                "address" : {
                  "streetAddress" : "1338 San Pablo Ave",
                  "addressLocality" : "Berkeley",
                  "addressCountry" : "US"
                }
              }
            }
          </script>
        </body></html>
    "#;

    #[test]
    fn parses_event_blob() {
        let gs = parse("page", PAGE).unwrap();
        assert_eq!(gs.store, "REI Berkeley");
        assert_eq!(gs.address, "1338 San Pablo Ave, Berkeley");
        assert_eq!(gs.phone, "(510) 527-4140");
        assert_eq!(gs.url, "https://www.rei.com/stores/berkeley.html");
        assert_eq!(gs.hours(), "10:00 AM - 04:00 PM");
        assert_eq!(gs.date(), "May 30, 2021");
    }

    #[test]
    fn page_without_blob_is_parse_error() {
        let err = parse("page", "<html><body>nothing here</body></html>").unwrap_err();
        assert!(matches!(err, StatError::Parse { .. }));
    }

    #[test]
    fn unknown_stores_collects_all_names() {
        let err = store_locators(&[
            "berkeley".to_string(),
            "fresno".to_string(),
            "tahoe".to_string(),
        ])
        .unwrap_err();
        match err {
            StatError::UnknownStores(names) => assert_eq!(names, vec!["fresno", "tahoe"]),
            other => panic!("expected UnknownStores, got {other:?}"),
        }
    }

    #[test]
    fn empty_selection_means_every_store() {
        let locators = store_locators(&[]).unwrap();
        assert_eq!(locators.len(), STORE_MAP.len());
        assert!(locators[0].url.starts_with(GARAGE_SALE_URL));
    }
}
