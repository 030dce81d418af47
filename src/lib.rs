pub mod config;
pub mod modules;
pub mod services;
pub mod store;

pub use config::cleanup::{CleanupConfig, CleanupPolicy, CollectionNames};
pub use services::cleanup::{
    exit_status, run_and_close, CleanupError, CleanupRunner, CleanupStep, EXIT_CLEAN, EXIT_FAILURE,
    EXIT_WARNINGS,
};
pub use services::report::{CleanupSummary, UserDeletions, Verification};
pub use store::{Filter, MemoryStore, MongoStore, RecordStore, StoreError, StoreOperation};
