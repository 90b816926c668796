// src/present/sales.rs

use serde::Serialize;

use crate::scrape::SalesRun;

#[derive(Debug, Serialize)]
pub struct SaleView {
    pub address: String,
    pub date: String,
    pub hours: String,
    pub phone: String,
    pub store: String,
    pub url: String,
}

/// Project a sales run into serializable views, one per store.
pub fn present(run: &SalesRun) -> Vec<SaleView> {
    run.sales
        .iter()
        .map(|gs| SaleView {
            address: gs.address.clone(),
            date: gs.date(),
            hours: gs.hours().to_uppercase(),
            phone: gs.phone.clone(),
            store: gs.store.clone(),
            url: gs.url.clone(),
        })
        .collect()
}
