//! Filtering of section datasets.
//!
//! Filters never mutate a dataset. They produce a transient view of borrowed
//! records that lives only as long as the render or navigation call using it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{Record, field_text};

/// Apply `predicate` to `dataset`, preserving order.
pub fn filter<'a, T, P>(dataset: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    dataset.iter().filter(|item| predicate(item)).collect()
}

/// Equality constraint on a single top-level field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// Field name.
    pub field: String,
    /// Expected value (compared case-insensitively).
    pub value: String,
}

/// Filter criteria for a section: a free-text search plus field constraints.
///
/// All criteria must hold for a record to match. An empty filter matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Case-insensitive substring searched across every scalar value.
    pub search: Option<String>,
    /// Field constraints.
    pub fields: Vec<FieldMatch>,
}

impl RecordFilter {
    /// Filter by free text.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            fields: Vec::new(),
        }
    }

    /// Add a field constraint.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FieldMatch {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Whether the filter constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.fields.is_empty()
    }

    /// Check a record against every criterion.
    pub fn matches(&self, record: &Record) -> bool {
        let fields_match = self.fields.iter().all(|constraint| {
            field_text(record, &constraint.field)
                .is_some_and(|actual| {
                    actual.to_lowercase() == constraint.value.trim().to_lowercase()
                })
        });
        if !fields_match {
            return false;
        }
        match self.search_term() {
            Some(term) => contains_text(record, &term.to_lowercase()),
            None => true,
        }
    }

    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

fn contains_text(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Number(n) => n.to_string().contains(needle),
        Value::Bool(b) => b.to_string().contains(needle),
        Value::Null => false,
        Value::Array(values) => values.iter().any(|v| contains_text(v, needle)),
        Value::Object(map) => map.values().any(|v| contains_text(v, needle)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn patients() -> Vec<Record> {
        vec![
            json!({"name": "Ana Lima", "status": "active", "site": {"city": "Porto"}}),
            json!({"name": "Rui Costa", "status": "inactive", "site": {"city": "Lisboa"}}),
            json!({"name": "Marta Lima", "status": "Active", "site": {"city": "Braga"}}),
        ]
    }

    #[test]
    fn test_filter_preserves_order_and_source() {
        let data = vec![5, 1, 4, 2, 3];
        let odd = filter(&data, |n| n % 2 == 1);
        assert_eq!(odd, vec![&5, &1, &3]);
        assert_eq!(data, vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = RecordFilter::search("   ");
        assert!(filter.is_empty());
        assert!(patients().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn test_search_is_case_insensitive_and_nested() {
        let data = patients();
        let lima = RecordFilter::search("LIMA");
        assert_eq!(filter(&data, |r| lima.matches(r)).len(), 2);

        let lisboa = RecordFilter::search("lisboa");
        let found = filter(&data, |r| lisboa.matches(r));
        assert_eq!(found, vec![&data[1]]);
    }

    #[test]
    fn test_field_and_search_combine() {
        let data = patients();
        let criteria = RecordFilter::search("lima").with_field("status", "active");
        assert_eq!(filter(&data, |r| criteria.matches(r)).len(), 2);

        let criteria = RecordFilter::default().with_field("status", "inactive");
        assert_eq!(filter(&data, |r| criteria.matches(r)), vec![&data[1]]);
    }

    #[test]
    fn test_field_and_search_fold_case_alike() {
        let record = json!({"name": "Tomás"});
        assert!(RecordFilter::search("TOMÁS").matches(&record));
        assert!(RecordFilter::default().with_field("name", "TOMÁS").matches(&record));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let criteria = RecordFilter::default().with_field("role", "admin");
        assert!(!criteria.matches(&json!({"name": "Ana"})));
    }
}
