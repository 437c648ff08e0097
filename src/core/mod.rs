pub mod directory;
pub mod ranking;
pub mod report;
pub mod watcher;

pub use crate::domain::model::{Deal, Region, ReportDate, Store};
pub use crate::domain::ports::{DealSource, Storage};
pub use crate::utils::error::Result;
