use crate::store::{Filter, RecordStore, StoreError};

pub struct CustomerCrud<'a> {
    store: &'a dyn RecordStore,
    collection: &'a str,
}

impl<'a> CustomerCrud<'a> {
    pub fn new(store: &'a dyn RecordStore, collection: &'a str) -> Self {
        Self { store, collection }
    }

    pub async fn delete_all(&self) -> Result<u64, StoreError> {
        self.store.delete_many(self.collection, &Filter::All).await
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        self.store.count_documents(self.collection, &Filter::All).await
    }
}
