// Repository module structure
pub mod errors;
mod in_memory;
mod record_store;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use in_memory::InMemoryStorage;
pub use record_store::{RecordStore, RecordStoreTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use record_store::tests;
