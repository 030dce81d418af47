use bson::{doc, oid::ObjectId, Bson};
use dashboard_reset::Filter;

#[test]
fn test_filter_to_document() {
    assert_eq!(Filter::All.to_document(), doc! {});
    assert_eq!(
        Filter::equals("role", "vendor").to_document(),
        doc! { "role": "vendor" }
    );
    assert_eq!(
        Filter::not_equals("role", "admin").to_document(),
        doc! { "role": { "$ne": "admin" } }
    );
    assert_eq!(
        Filter::is_not_null("vendor_id").to_document(),
        doc! { "vendor_id": { "$ne": Bson::Null } }
    );
}

#[test]
fn test_in_and_and_to_document() {
    let v1 = ObjectId::new();
    let v2 = ObjectId::new();

    let filter = Filter::is_in("vendor_id", vec![Bson::ObjectId(v1), Bson::ObjectId(v2)]);
    assert_eq!(filter.to_document(), doc! { "vendor_id": { "$in": [v1, v2] } });

    let combined = Filter::and(vec![
        Filter::is_not_null("vendor_id"),
        Filter::not_equals("role", "admin"),
    ]);
    assert_eq!(
        combined.to_document(),
        doc! { "$and": [
            { "vendor_id": { "$ne": Bson::Null } },
            { "role": { "$ne": "admin" } }
        ] }
    );
}

#[test]
fn test_not_equals_matches_missing_field() {
    let filter = Filter::not_equals("role", "admin");

    assert!(filter.matches(&doc! { "email": "nobody@example.com" }));
    assert!(filter.matches(&doc! { "role": "customer" }));
    assert!(!filter.matches(&doc! { "role": "admin" }));
}

#[test]
fn test_is_not_null_rejects_null_and_missing() {
    let filter = Filter::is_not_null("vendor_id");

    assert!(!filter.matches(&doc! { "vendor_id": Bson::Null }));
    assert!(!filter.matches(&doc! { "role": "vendor" }));
    assert!(filter.matches(&doc! { "vendor_id": ObjectId::new() }));
}

#[test]
fn test_in_with_empty_set_matches_nothing() {
    let filter = Filter::is_in("vendor_id", Vec::new());

    assert!(!filter.matches(&doc! { "vendor_id": ObjectId::new() }));
    assert!(!filter.matches(&doc! {}));
}

#[test]
fn test_equals_null_matches_missing_field() {
    let filter = Filter::equals("vendor_id", Bson::Null);

    assert!(filter.matches(&doc! { "role": "customer" }));
    assert!(filter.matches(&doc! { "vendor_id": Bson::Null }));
    assert!(!filter.matches(&doc! { "vendor_id": ObjectId::new() }));
}

#[test]
fn test_empty_and_matches_everything() {
    assert!(Filter::and(Vec::new()).matches(&doc! { "role": "admin" }));
    assert!(Filter::All.matches(&doc! {}));
}
