use crate::domain::model::{Deal, OffersResponse};
use crate::domain::ports::DealSource;
use crate::utils::error::Result;
use async_trait::async_trait;

const WEEKLY_OFFERS: &str = include_str!("../../data/weekly_offers.json");

/// Stand-in for the weekly-offers API: every store gets the same list.
#[derive(Debug, Clone)]
pub struct MockDealSource {
    endpoint: String,
    offers: Vec<Deal>,
}

impl MockDealSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        let response: OffersResponse = serde_json::from_str(WEEKLY_OFFERS)?;
        Ok(Self::with_offers(endpoint, response.offers))
    }

    pub fn with_offers(endpoint: &str, offers: Vec<Deal>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            offers,
        }
    }

    pub fn offers_url(&self, store_id: &str) -> String {
        self.endpoint.replace("{store_id}", store_id)
    }
}

#[async_trait]
impl DealSource for MockDealSource {
    async fn fetch_deals(&self, store_id: &str) -> Result<Vec<Deal>> {
        tracing::debug!(
            "Serving {} mock offers in place of {}",
            self.offers.len(),
            self.offers_url(store_id)
        );
        Ok(self.offers.clone())
    }
}
