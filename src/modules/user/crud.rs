use bson::Bson;

use crate::modules::user::model::{UserAccount, ADMIN_ROLE};
use crate::store::{Filter, RecordStore, StoreError};

pub struct UserCrud<'a> {
    store: &'a dyn RecordStore,
    collection: &'a str,
}

impl<'a> UserCrud<'a> {
    pub fn new(store: &'a dyn RecordStore, collection: &'a str) -> Self {
        Self { store, collection }
    }

    fn non_admin() -> Filter {
        Filter::not_equals("role", ADMIN_ROLE)
    }

    pub async fn delete_by_vendor_ids(&self, vendor_ids: &[Bson]) -> Result<u64, StoreError> {
        if vendor_ids.is_empty() {
            return Ok(0);
        }

        let filter = Filter::is_in("vendor_id", vendor_ids.to_vec());
        self.store.delete_many(self.collection, &filter).await
    }

    pub async fn delete_non_admin(&self) -> Result<u64, StoreError> {
        self.store.delete_many(self.collection, &Self::non_admin()).await
    }

    pub async fn delete_vendor_linked_non_admin(&self) -> Result<u64, StoreError> {
        let filter = Filter::and(vec![Filter::is_not_null("vendor_id"), Self::non_admin()]);
        self.store.delete_many(self.collection, &filter).await
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        self.store.count_documents(self.collection, &Filter::All).await
    }

    pub async fn count_by_role(&self, role: &str) -> Result<u64, StoreError> {
        self.store
            .count_documents(self.collection, &Filter::equals("role", role))
            .await
    }

    pub async fn count_non_admin(&self) -> Result<u64, StoreError> {
        self.store.count_documents(self.collection, &Self::non_admin()).await
    }

    pub async fn find_admins(&self) -> Result<Vec<UserAccount>, StoreError> {
        self.store
            .find(self.collection, &Filter::equals("role", ADMIN_ROLE))
            .await?
            .into_iter()
            .map(|record| {
                bson::from_document(record).map_err(|source| StoreError::Decode {
                    collection: self.collection.to_string(),
                    source,
                })
            })
            .collect()
    }
}
