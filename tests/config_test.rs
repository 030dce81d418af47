use dashboard_reset::config::database::{self, DatabaseConfig};
use dashboard_reset::config::ConfigError;
use dashboard_reset::{CleanupConfig, CleanupPolicy, CollectionNames, StoreError, StoreOperation};
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_cleanup_config_defaults() {
    let config = CleanupConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.policy, CleanupPolicy::CascadeByVendorReference);
    assert_eq!(config.collections, CollectionNames::default());
    assert_eq!(config.collections.vendors, "vendorregisters");
}

#[test]
fn test_cleanup_policy_names() {
    assert_eq!(
        "cascade".parse::<CleanupPolicy>().unwrap(),
        CleanupPolicy::CascadeByVendorReference
    );
    assert_eq!("keep-admin".parse::<CleanupPolicy>().unwrap(), CleanupPolicy::KeepAdminOnly);
    assert_eq!("KEEP_ADMIN_ONLY".parse::<CleanupPolicy>().unwrap(), CleanupPolicy::KeepAdminOnly);
    assert_eq!(
        CleanupPolicy::KeepAdminOnly.to_string().parse::<CleanupPolicy>().unwrap(),
        CleanupPolicy::KeepAdminOnly
    );
}

#[test]
fn test_cleanup_config_rejects_unknown_policy() {
    let result = CleanupConfig::from_lookup(lookup(&[("CLEANUP_POLICY", "everything")]));

    assert!(matches!(result, Err(ConfigError::InvalidPolicy(p)) if p == "everything"));
}

#[test]
fn test_cleanup_config_collection_overrides() {
    let config = CleanupConfig::from_lookup(lookup(&[
        ("CLEANUP_POLICY", "keep-admin"),
        ("VENDOR_COLLECTION", "vendors"),
        ("USER_COLLECTION", "  "),
    ]))
    .unwrap();

    assert_eq!(config.policy, CleanupPolicy::KeepAdminOnly);
    assert_eq!(config.collections.vendors, "vendors");
    assert_eq!(config.collections.users, "users");
    assert_eq!(config.collections.customers, "customers");
}

#[test]
fn test_database_config_requires_uri() {
    let result = DatabaseConfig::from_lookup(lookup(&[("MONGODB_DATABASE", "shop")]));

    assert!(matches!(result, Err(ConfigError::MissingVar("MONGODB_URI"))));
}

#[test]
fn test_database_config_default_database() {
    let vars = [("MONGODB_URI", "mongodb://localhost:27017")];
    let config = DatabaseConfig::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.uri, "mongodb://localhost:27017");
    assert_eq!(config.database, "dashboard");
}

#[tokio::test]
async fn test_connect_reports_connect_operation() {
    let config = DatabaseConfig {
        uri: "not-a-connection-string".to_string(),
        database: "dashboard".to_string(),
    };

    let result = database::connect(&config).await;

    match result {
        Err(StoreError::Operation { collection, operation, .. }) => {
            assert_eq!(operation, StoreOperation::Connect);
            assert_eq!(collection, "dashboard");
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("connect should fail for an invalid URI"),
    }
}
