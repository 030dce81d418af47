pub mod filter;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use bson::Document;
use std::fmt;
use thiserror::Error;

pub use filter::Filter;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    Connect,
    DeleteMany,
    Find,
    CountDocuments,
    Close,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreOperation::Connect => "connect",
            StoreOperation::DeleteMany => "deleteMany",
            StoreOperation::Find => "find",
            StoreOperation::CountDocuments => "countDocuments",
            StoreOperation::Close => "close",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("Failed to decode record from {collection}: {source}")]
    Decode {
        collection: String,
        #[source]
        source: bson::de::Error,
    },
    #[error("{operation} on {collection} failed: {message}")]
    Operation {
        collection: String,
        operation: StoreOperation,
        message: String,
    },
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError>;

    async fn close(&self) -> Result<(), StoreError>;
}
