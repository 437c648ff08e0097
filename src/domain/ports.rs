use crate::domain::model::Deal;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the week's deals for a store come from. Fails with
/// `WatcherError::NetworkError` when the source cannot be reached.
#[async_trait]
pub trait DealSource: Send + Sync {
    async fn fetch_deals(&self, store_id: &str) -> Result<Vec<Deal>>;
}
