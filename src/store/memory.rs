use async_trait::async_trait;
use bson::Document;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::store::{Filter, RecordStore, StoreError, StoreOperation};

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    failures: Mutex<HashSet<(String, StoreOperation)>>,
    fail_close: AtomicBool,
    close_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_many(&self, collection: &str, records: impl IntoIterator<Item = Document>) {
        let mut collections = self.lock_collections();
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(records);
    }

    pub fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.lock_collections()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn fail_on(&self, collection: &str, operation: StoreOperation) {
        self.lock_failures()
            .insert((collection.to_string(), operation));
    }

    pub fn clear_failures(&self) {
        self.lock_failures().clear();
        self.fail_close.store(false, Ordering::SeqCst);
    }

    pub fn fail_on_close(&self) {
        self.fail_close.store(true, Ordering::SeqCst);
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    fn lock_collections(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_failures(&self) -> std::sync::MutexGuard<'_, HashSet<(String, StoreOperation)>> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self, collection: &str, operation: StoreOperation) -> Result<(), StoreError> {
        if self
            .lock_failures()
            .contains(&(collection.to_string(), operation))
        {
            return Err(StoreError::Operation {
                collection: collection.to_string(),
                operation,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.check(collection, StoreOperation::DeleteMany)?;

        let mut collections = self.lock_collections();
        let Some(records) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = records.len();
        records.retain(|record| !filter.matches(record));
        Ok((before - records.len()) as u64)
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        self.check(collection, StoreOperation::Find)?;

        Ok(self
            .lock_collections()
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_documents(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.check(collection, StoreOperation::CountDocuments)?;

        Ok(self
            .lock_collections()
            .get(collection)
            .map(|records| records.iter().filter(|record| filter.matches(record)).count() as u64)
            .unwrap_or(0))
    }

    async fn close(&self) -> Result<(), StoreError> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_close.load(Ordering::SeqCst) {
            return Err(StoreError::Operation {
                collection: "connection".to_string(),
                operation: StoreOperation::Close,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}
