use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub id: String,
}

/// Stores of one region in listing order, keyed by their menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub key: String,
    pub name: String,
    pub stores: Vec<(String, Store)>,
}

impl Region {
    pub fn store(&self, number: &str) -> Option<&Store> {
        let number = number.trim();
        self.stores
            .iter()
            .find(|(n, _)| n == number)
            .map(|(_, store)| store)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default = "unknown_item_name")]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// Previous price, `0` when no discount is known.
    #[serde(rename = "comparePrice", default)]
    pub compare_price: f64,
    #[serde(default)]
    pub unit: String,
}

fn unknown_item_name() -> String {
    "Okänd vara".to_string()
}

impl Deal {
    pub fn new(name: &str, price: f64, compare_price: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            compare_price,
            unit: unit.to_string(),
        }
    }

    /// Negative for undiscounted items, so they sort last.
    pub fn discount(&self) -> f64 {
        self.compare_price - self.price
    }

    pub fn is_discounted(&self) -> bool {
        self.compare_price > self.price
    }
}

/// Shape of the vendor's weekly-offers response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffersResponse {
    #[serde(default)]
    pub offers: Vec<Deal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDate {
    pub week: u32,
    pub year: i32,
}

impl ReportDate {
    pub fn new(week: u32, year: i32) -> Self {
        Self { week, year }
    }

    /// Calendar year, not ISO year, matching the report headings.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            week: date.iso_week().week(),
            year: date.year(),
        }
    }

    pub fn today() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }
}

#[derive(Debug, Clone)]
pub struct StoreReport {
    pub store: Store,
    pub top_deals: Vec<Deal>,
    pub output_path: String,
}

#[derive(Debug, Clone)]
pub struct SummaryEntry {
    pub store_name: String,
    pub deal: Deal,
}

#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub stores_scanned: usize,
    pub entries: Vec<SummaryEntry>,
    pub output_path: String,
}
