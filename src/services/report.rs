use chrono::{DateTime, Utc};
use std::fmt;

use crate::config::cleanup::CleanupPolicy;
use crate::modules::user::model::UserAccount;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq)]
pub enum UserDeletions {
    ByVendorReference {
        deleted: u64,
        // No vendors existed, so the store was never asked.
        skipped: bool,
    },
    KeepAdminOnly {
        non_admin: u64,
        vendor_linked: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    ByVendorReference {
        remaining_customers: u64,
        remaining_vendors: u64,
        remaining_vendor_users: u64,
    },
    KeepAdminOnly {
        remaining_customers: u64,
        remaining_vendors: u64,
        remaining_non_admin_users: u64,
        remaining_users: u64,
        admins: Vec<UserAccount>,
    },
}

impl Verification {
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let (customers, vendors) = match self {
            Verification::ByVendorReference {
                remaining_customers,
                remaining_vendors,
                ..
            }
            | Verification::KeepAdminOnly {
                remaining_customers,
                remaining_vendors,
                ..
            } => (*remaining_customers, *remaining_vendors),
        };

        if customers > 0 {
            warnings.push(format!("{} customer request(s) still exist", customers));
        }
        if vendors > 0 {
            warnings.push(format!("{} vendor(s) still exist", vendors));
        }

        match self {
            Verification::ByVendorReference {
                remaining_vendor_users,
                ..
            } if *remaining_vendor_users > 0 => {
                warnings.push(format!("{} vendor user(s) still exist", remaining_vendor_users));
            }
            Verification::KeepAdminOnly {
                remaining_non_admin_users,
                ..
            } if *remaining_non_admin_users > 0 => {
                warnings.push(format!(
                    "{} non-admin user(s) still exist",
                    remaining_non_admin_users
                ));
            }
            _ => {}
        }

        warnings
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanupSummary {
    pub policy: CleanupPolicy,
    pub customers_deleted: u64,
    pub vendors_found: usize,
    pub vendors_deleted: u64,
    pub users: UserDeletions,
    pub verification: Verification,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CleanupSummary {
    pub fn breakdown(&self) -> Vec<(&'static str, u64)> {
        let mut rows = vec![
            ("Customer requests", self.customers_deleted),
            ("Vendor registrations", self.vendors_deleted),
        ];
        match &self.users {
            UserDeletions::ByVendorReference { deleted, .. } => {
                rows.push(("Vendor user accounts", *deleted));
            }
            UserDeletions::KeepAdminOnly {
                non_admin,
                vendor_linked,
            } => {
                rows.push(("Non-admin user accounts", *non_admin));
                rows.push(("Vendor-linked user accounts (second pass)", *vendor_linked));
            }
        }
        rows
    }

    pub fn total_deleted(&self) -> u64 {
        self.breakdown().iter().map(|(_, count)| count).sum()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.verification.warnings()
    }

    pub fn is_clean(&self) -> bool {
        self.warnings().is_empty()
    }

    fn closing_statement(&self) -> &'static str {
        match self.policy {
            CleanupPolicy::CascadeByVendorReference => {
                "Admin dashboard will now show no customer requests or vendor data."
            }
            CleanupPolicy::KeepAdminOnly => {
                "Admin dashboard will now show no customer requests, vendor data \
                 or non-admin users."
            }
        }
    }
}

impl fmt::Display for CleanupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let warnings = self.warnings();

        writeln!(f, "{}", rule)?;
        if warnings.is_empty() {
            writeln!(f, "✅ DATABASE CLEANUP COMPLETED!")?;
        } else {
            writeln!(f, "⚠️  DATABASE CLEANUP COMPLETED WITH WARNINGS")?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "Policy: {}", self.policy)?;
        writeln!(
            f,
            "Duration: {} ms",
            (self.finished_at - self.started_at).num_milliseconds()
        )?;
        writeln!(f, "📊 Total records deleted: {}", self.total_deleted())?;
        for (label, count) in self.breakdown() {
            writeln!(f, "   - {}: {}", label, count)?;
        }

        if !warnings.is_empty() {
            writeln!(f, "⚠️  Some data still exists:")?;
            for warning in &warnings {
                writeln!(f, "   - {}", warning)?;
            }
        }

        if let Verification::KeepAdminOnly {
            remaining_users,
            admins,
            ..
        } = &self.verification
        {
            writeln!(f, "👤 Remaining user accounts: {}", remaining_users)?;
            writeln!(f, "🔐 Admin accounts kept: {}", admins.len())?;
            for admin in admins {
                writeln!(
                    f,
                    "   - {} (role: {})",
                    admin.email_or_placeholder(),
                    admin.role_or_placeholder()
                )?;
            }
        }

        writeln!(f, "{}", rule)?;
        writeln!(f, "✨ {}", self.closing_statement())?;
        write!(f, "{}", rule)
    }
}
