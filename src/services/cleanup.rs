use chrono::Utc;
use std::fmt;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::cleanup::{CleanupConfig, CleanupPolicy};
use crate::modules::customer::crud::CustomerCrud;
use crate::modules::user::crud::UserCrud;
use crate::modules::user::model::VENDOR_ROLE;
use crate::modules::vendor::crud::VendorCrud;
use crate::services::report::{CleanupSummary, UserDeletions, Verification};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupStep {
    PurgeCustomers,
    CollectVendors,
    PurgeVendors,
    PurgeUsers,
    Verify,
}

impl fmt::Display for CleanupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleanupStep::PurgeCustomers => "customer request purge",
            CleanupStep::CollectVendors => "vendor lookup",
            CleanupStep::PurgeVendors => "vendor registration purge",
            CleanupStep::PurgeUsers => "user account purge",
            CleanupStep::Verify => "verification",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Cleanup failed during {step}: {source}")]
    Step {
        step: CleanupStep,
        #[source]
        source: StoreError,
    },
    #[error("Failed to close database connection: {0}")]
    Close(#[source] StoreError),
}

impl CleanupError {
    pub fn step(&self) -> Option<CleanupStep> {
        match self {
            CleanupError::Step { step, .. } => Some(*step),
            CleanupError::Close(_) => None,
        }
    }
}

fn at(step: CleanupStep) -> impl FnOnce(StoreError) -> CleanupError {
    move |source| CleanupError::Step { step, source }
}

pub struct CleanupRunner<'a> {
    store: &'a dyn RecordStore,
    config: &'a CleanupConfig,
}

impl<'a> CleanupRunner<'a> {
    pub fn new(store: &'a dyn RecordStore, config: &'a CleanupConfig) -> Self {
        Self { store, config }
    }

    pub async fn run(&self) -> Result<CleanupSummary, CleanupError> {
        let started_at = Utc::now();
        let names = &self.config.collections;
        let customers = CustomerCrud::new(self.store, &names.customers);
        let vendors = VendorCrud::new(self.store, &names.vendors);
        let users = UserCrud::new(self.store, &names.users);

        // Step 1
        info!(collection = %names.customers, "Starting cleanup of customer requests");
        let customers_deleted = customers
            .delete_all()
            .await
            .map_err(at(CleanupStep::PurgeCustomers))?;
        info!(deleted = customers_deleted, "Deleted customer requests");

        // Step 2
        info!(collection = %names.vendors, "Starting cleanup of vendor data");
        let vendor_ids = vendors
            .find_ids()
            .await
            .map_err(at(CleanupStep::CollectVendors))?;
        info!(found = vendor_ids.len(), "Found vendor(s) to delete");

        let vendors_deleted = vendors
            .delete_all()
            .await
            .map_err(at(CleanupStep::PurgeVendors))?;
        info!(deleted = vendors_deleted, "Deleted vendor registrations");

        // Step 3
        info!(
            collection = %names.users,
            policy = %self.config.policy,
            "Starting cleanup of user accounts"
        );
        let user_deletions = match self.config.policy {
            CleanupPolicy::CascadeByVendorReference => {
                let skipped = vendor_ids.is_empty();
                if skipped {
                    warn!("No vendors found, skipping vendor user deletion");
                }
                let deleted = users
                    .delete_by_vendor_ids(&vendor_ids)
                    .await
                    .map_err(at(CleanupStep::PurgeUsers))?;
                info!(deleted, "Deleted vendor user accounts");
                UserDeletions::ByVendorReference { deleted, skipped }
            }
            CleanupPolicy::KeepAdminOnly => {
                let non_admin = users
                    .delete_non_admin()
                    .await
                    .map_err(at(CleanupStep::PurgeUsers))?;
                info!(deleted = non_admin, "Deleted non-admin user accounts");

                let vendor_linked = users
                    .delete_vendor_linked_non_admin()
                    .await
                    .map_err(at(CleanupStep::PurgeUsers))?;
                info!(deleted = vendor_linked, "Deleted remaining vendor-linked user accounts");
                UserDeletions::KeepAdminOnly {
                    non_admin,
                    vendor_linked,
                }
            }
        };

        // Step 4
        info!("Running final verification");
        let verification = self.verify(&customers, &vendors, &users).await?;
        let warnings = verification.warnings();
        if warnings.is_empty() {
            info!("All data cleaned successfully");
        } else {
            for warning in &warnings {
                warn!("{}", warning);
            }
        }

        let summary = CleanupSummary {
            policy: self.config.policy,
            customers_deleted,
            vendors_found: vendor_ids.len(),
            vendors_deleted,
            users: user_deletions,
            verification,
            started_at,
            finished_at: Utc::now(),
        };
        info!(total = summary.total_deleted(), "Cleanup finished");

        Ok(summary)
    }

    async fn verify(
        &self,
        customers: &CustomerCrud<'_>,
        vendors: &VendorCrud<'_>,
        users: &UserCrud<'_>,
    ) -> Result<Verification, CleanupError> {
        let remaining_customers = customers.count().await.map_err(at(CleanupStep::Verify))?;
        let remaining_vendors = vendors.count().await.map_err(at(CleanupStep::Verify))?;

        match self.config.policy {
            CleanupPolicy::CascadeByVendorReference => {
                let remaining_vendor_users = users
                    .count_by_role(VENDOR_ROLE)
                    .await
                    .map_err(at(CleanupStep::Verify))?;

                Ok(Verification::ByVendorReference {
                    remaining_customers,
                    remaining_vendors,
                    remaining_vendor_users,
                })
            }
            CleanupPolicy::KeepAdminOnly => {
                let remaining_non_admin_users = users
                    .count_non_admin()
                    .await
                    .map_err(at(CleanupStep::Verify))?;
                let remaining_users = users.count().await.map_err(at(CleanupStep::Verify))?;
                let admins = users.find_admins().await.map_err(at(CleanupStep::Verify))?;
                info!(remaining_users, admins = admins.len(), "Admin accounts kept");

                Ok(Verification::KeepAdminOnly {
                    remaining_customers,
                    remaining_vendors,
                    remaining_non_admin_users,
                    remaining_users,
                    admins,
                })
            }
        }
    }
}

/// Runs the cleanup and then closes the store exactly once, whatever the outcome.
///
/// A run error takes precedence over a close error; the latter is only
/// returned when the run itself succeeded. Returned errors are left for the
/// caller to log.
pub async fn run_and_close(
    store: &dyn RecordStore,
    config: &CleanupConfig,
) -> Result<CleanupSummary, CleanupError> {
    let outcome = CleanupRunner::new(store, config).run().await;

    let closed = store.close().await;
    match (outcome, closed) {
        (outcome, Ok(())) => {
            info!("Database connection closed");
            outcome
        }
        (Ok(_), Err(e)) => Err(CleanupError::Close(e)),
        (Err(run_error), Err(close_error)) => {
            error!(error = %close_error, "Failed to close database connection");
            Err(run_error)
        }
    }
}

pub const EXIT_CLEAN: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_WARNINGS: u8 = 2;

/// Process exit status for a finished run: clean, finished with
/// verification warnings, or failed.
pub fn exit_status(outcome: &Result<CleanupSummary, CleanupError>) -> u8 {
    match outcome {
        Ok(summary) if summary.is_clean() => EXIT_CLEAN,
        Ok(_) => EXIT_WARNINGS,
        Err(_) => EXIT_FAILURE,
    }
}
