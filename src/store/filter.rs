use bson::{doc, Bson, Document};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Equals(String, Bson),
    NotEquals(String, Bson),
    In(String, Vec<Bson>),
    IsNotNull(String),
    And(Vec<Filter>),
}

impl Filter {
    pub fn equals(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::Equals(field.into(), value.into())
    }

    pub fn not_equals(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Filter::NotEquals(field.into(), value.into())
    }

    pub fn is_in(field: impl Into<String>, values: Vec<Bson>) -> Self {
        Filter::In(field.into(), values)
    }

    pub fn is_not_null(field: impl Into<String>) -> Self {
        Filter::IsNotNull(field.into())
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And(filters)
    }

    pub fn to_document(&self) -> Document {
        match self {
            Filter::All => doc! {},
            Filter::Equals(field, value) => doc! { field.as_str(): value.clone() },
            Filter::NotEquals(field, value) => doc! { field.as_str(): { "$ne": value.clone() } },
            Filter::In(field, values) => doc! { field.as_str(): { "$in": values.clone() } },
            Filter::IsNotNull(field) => doc! { field.as_str(): { "$ne": Bson::Null } },
            Filter::And(filters) => {
                let clauses: Vec<Bson> = filters
                    .iter()
                    .map(|f| Bson::Document(f.to_document()))
                    .collect();
                doc! { "$and": clauses }
            }
        }
    }

    /// Evaluates the filter against a single record.
    ///
    /// Follows the server's rules: a missing field compares equal to null,
    /// `$ne` matches records that lack the field, and an empty `$in` matches
    /// nothing.
    pub fn matches(&self, record: &Document) -> bool {
        match self {
            Filter::All => true,
            Filter::Equals(field, value) => field_equals(record, field, value),
            Filter::NotEquals(field, value) => !field_equals(record, field, value),
            Filter::In(field, values) => values.iter().any(|v| field_equals(record, field, v)),
            Filter::IsNotNull(field) => !field_equals(record, field, &Bson::Null),
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
        }
    }
}

fn field_equals(record: &Document, field: &str, value: &Bson) -> bool {
    match record.get(field) {
        Some(found) => found == value,
        None => *value == Bson::Null,
    }
}
