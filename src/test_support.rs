use crate::domain::model::Deal;
use crate::domain::ports::{DealSource, Storage};
use crate::utils::error::{Result, WatcherError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory `Storage` keyed by file name.
#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_text(&self, path: &str) -> Option<String> {
        let files = self.files.lock().await;
        files.get(path).map(|b| String::from_utf8(b.clone()).unwrap())
    }

    pub async fn file_names(&self) -> Vec<String> {
        let files = self.files.lock().await;
        let mut names: Vec<String> = files.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Storage for MockStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

/// Every fetch fails as if the offers API were unreachable.
pub struct OfflineSource;

#[async_trait]
impl DealSource for OfflineSource {
    async fn fetch_deals(&self, store_id: &str) -> Result<Vec<Deal>> {
        Err(WatcherError::NetworkError {
            store_id: store_id.to_string(),
            message: "connection refused".to_string(),
        })
    }
}
