use std::env;
use std::fmt;
use std::str::FromStr;

use crate::config::{non_empty, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPolicy {
    #[default]
    CascadeByVendorReference,
    KeepAdminOnly,
}

impl FromStr for CleanupPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "cascade" | "cascade-by-vendor-reference" => {
                Ok(CleanupPolicy::CascadeByVendorReference)
            }
            "keep-admin" | "keep-admin-only" => Ok(CleanupPolicy::KeepAdminOnly),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for CleanupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupPolicy::CascadeByVendorReference => f.write_str("cascade-by-vendor-reference"),
            CleanupPolicy::KeepAdminOnly => f.write_str("keep-admin-only"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionNames {
    pub customers: String,
    pub vendors: String,
    pub users: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            customers: "customers".to_string(),
            vendors: "vendorregisters".to_string(),
            users: "users".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CleanupConfig {
    pub policy: CleanupPolicy,
    pub collections: CollectionNames,
}

impl CleanupConfig {
    pub fn new(policy: CleanupPolicy) -> Self {
        Self {
            policy,
            collections: CollectionNames::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy: CleanupPolicy = match non_empty(&lookup, "CLEANUP_POLICY") {
            Some(raw) => raw.parse()?,
            None => CleanupPolicy::default(),
        };

        let defaults = CollectionNames::default();
        let collections = CollectionNames {
            customers: non_empty(&lookup, "CUSTOMER_COLLECTION").unwrap_or(defaults.customers),
            vendors: non_empty(&lookup, "VENDOR_COLLECTION").unwrap_or(defaults.vendors),
            users: non_empty(&lookup, "USER_COLLECTION").unwrap_or(defaults.users),
        };

        Ok(Self { policy, collections })
    }
}
