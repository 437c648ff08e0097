pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MockDealSource};
pub use config::toml_config::WatcherConfig;
pub use core::{directory::StoreDirectory, watcher::DealWatcher};
pub use utils::error::{Result, WatcherError};
