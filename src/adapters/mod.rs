// Adapters layer: concrete implementations of the domain ports.

pub mod mock_source;
pub mod storage;

pub use mock_source::MockDealSource;
pub use storage::LocalStorage;
