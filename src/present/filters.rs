// src/present/filters.rs

use crate::error::{Result, StatError};

/// Validated read-side filters for stats reports.
///
/// Parsed from `key=value` CLI pairs. Unknown keys and unusable values are
/// typed errors raised before any fetch happens.
#[derive(Clone, Debug, Default)]
pub struct StatFilters {
    /// Case-insensitive substring match on the identity key.
    pub name_contains: Option<String>,
    /// Keep only the N highest-ranked entities per table.
    pub top: Option<usize>,
}

impl StatFilters {
    pub fn parse(pairs: &[String]) -> Result<Self> {
        let mut filters = Self::default();
        for pair in pairs {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(StatError::InvalidFilterValue {
                    key: pair.clone(),
                    value: String::new(),
                });
            };
            match key {
                "name" => {
                    if value.is_empty() {
                        return Err(StatError::InvalidFilterValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        });
                    }
                    filters.name_contains = Some(value.to_lowercase());
                }
                "top" => {
                    let n = value.parse::<usize>().map_err(|_| {
                        StatError::InvalidFilterValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        }
                    })?;
                    filters.top = Some(n);
                }
                other => return Err(StatError::UnknownFilter(other.to_string())),
            }
        }
        Ok(filters)
    }

    pub fn matches_name(&self, identity: &str) -> bool {
        match &self.name_contains {
            Some(needle) => identity.to_lowercase().contains(needle),
            None => true,
        }
    }
}
