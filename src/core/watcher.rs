use crate::core::directory::StoreDirectory;
use crate::core::ranking::{self, DEFAULT_TOP_N};
use crate::core::report;
use crate::domain::model::{ReportDate, Store, StoreReport, SummaryEntry, SummaryReport};
use crate::domain::ports::{DealSource, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// Reported by `scan_all` around each store's fetch.
#[derive(Debug, Clone, Copy)]
pub enum ScanProgress<'a> {
    Fetching(&'a Store),
    Fetched(&'a Store),
}

/// Fetches, ranks and writes reports. The week is fixed at construction so
/// every file written in one run carries the same date.
pub struct DealWatcher<D: DealSource, S: Storage> {
    source: D,
    storage: S,
    directory: StoreDirectory,
    date: ReportDate,
    top_n: usize,
    output_dir: String,
}

impl<D: DealSource, S: Storage> DealWatcher<D, S> {
    pub fn new(source: D, storage: S, directory: StoreDirectory, date: ReportDate) -> Self {
        Self {
            source,
            storage,
            directory,
            date,
            top_n: DEFAULT_TOP_N,
            output_dir: ".".to_string(),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Only used to report where files landed; writing goes through `Storage`.
    pub fn with_output_dir(mut self, output_dir: &str) -> Self {
        self.output_dir = output_dir.to_string();
        self
    }

    fn display_path(&self, filename: &str) -> String {
        Path::new(&self.output_dir).join(filename).display().to_string()
    }

    pub fn directory(&self) -> &StoreDirectory {
        &self.directory
    }

    /// Single-store mode: top deals for one store, written to `ica_deals_<id>.txt`.
    pub async fn scan_store(&self, store: &Store) -> Result<StoreReport> {
        tracing::info!("Fetching deals for {} ({})", store.name, store.id);
        let deals = self.source.fetch_deals(&store.id).await?;
        tracing::debug!("Fetched {} deals", deals.len());

        let top_deals = ranking::top_deals(&deals, self.top_n);
        let content = report::render_store_report(&store.name, &top_deals, self.date);

        let filename = report::store_report_filename(&store.id);
        self.storage.write_file(&filename, content.as_bytes()).await?;
        tracing::info!("Store report written to {}", filename);

        Ok(StoreReport {
            store: store.clone(),
            top_deals,
            output_path: self.display_path(&filename),
        })
    }

    /// Multi-store mode: best deal of every store in the directory, written
    /// to `ica_skanne_summary_v<week>.txt`. Stores without deals are skipped.
    /// An error from `on_progress` aborts the scan.
    pub async fn scan_all<F>(&self, mut on_progress: F) -> Result<SummaryReport>
    where
        F: FnMut(ScanProgress<'_>) -> Result<()>,
    {
        let stores = self.directory.all_stores();
        tracing::info!("Scanning {} stores in {}", stores.len(), self.directory.province());

        let mut entries = Vec::new();
        for (key, store) in &stores {
            on_progress(ScanProgress::Fetching(store))?;
            let deals = self.source.fetch_deals(&store.id).await?;
            on_progress(ScanProgress::Fetched(store))?;
            match ranking::best_deal(&deals) {
                Some(deal) => entries.push(SummaryEntry {
                    store_name: store.name.clone(),
                    deal,
                }),
                None => tracing::warn!("No deals for {} ({})", store.name, key),
            }
        }

        let content =
            report::render_summary_report(self.directory.province(), &entries, self.date);
        let filename = report::summary_filename(self.date);
        self.storage.write_file(&filename, content.as_bytes()).await?;
        tracing::info!("Summary of {} stores written to {}", entries.len(), filename);

        Ok(SummaryReport {
            stores_scanned: stores.len(),
            entries,
            output_path: self.display_path(&filename),
        })
    }
}
