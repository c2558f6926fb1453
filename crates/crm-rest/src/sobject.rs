//! Generic record type: a named bag of ordered fields.

use serde::Serialize;
use serde_json::{Map, Value};

/// One CRM record: an object type name plus an ordered field map.
///
/// Field insertion order is preserved through serialization, and field names
/// are case-sensitive and unique (later sets replace earlier ones). Values
/// are strings or null; the server-assigned id is not a field here, it comes
/// back in the create response body.
///
/// Serializes to the bare fields object; the type name travels in the
/// request URL, not the body.
///
/// ```rust
/// use crm_rest::SObject;
///
/// let mut task = SObject::new("Task");
/// task.set_field("Priority", "High");
/// task.set_field("Status", "In Progress");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SObject {
    #[serde(skip)]
    sobject_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl SObject {
    /// Create a new, empty record of the given object type.
    pub fn new(sobject_type: impl Into<String>) -> Self {
        Self {
            sobject_type: sobject_type.into(),
            fields: Map::new(),
        }
    }

    /// Get the object type name.
    pub fn sobject_type(&self) -> &str {
        &self.sobject_type
    }

    /// Set a field to a string value, replacing any previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), Value::String(value.into()));
    }

    /// Set a field to null, replacing any previous value.
    pub fn set_field_null(&mut self, name: impl Into<String>) {
        self.fields.insert(name.into(), Value::Null);
    }

    /// Builder-style variant of [`set_field`](Self::set_field).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Get a field value, if set. Returns `Some(&Value::Null)` for a field
    /// explicitly set to null.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate over field names and values in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Number of fields set on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_fields_only_in_insertion_order() {
        let mut task = SObject::new("Task");
        task.set_field("Priority", "High");
        task.set_field("Status", "In Progress");
        task.set_field("ActivityDate", "2026-01-15");

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"Priority":"High","Status":"In Progress","ActivityDate":"2026-01-15"}"#
        );
    }

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let contact = SObject::new("Contact");
        assert!(contact.is_empty());
        assert_eq!(serde_json::to_string(&contact).unwrap(), "{}");
    }

    #[test]
    fn test_null_field() {
        let mut lead = SObject::new("Lead");
        lead.set_field("Company", "Acme");
        lead.set_field_null("Phone");

        assert_eq!(lead.field("Phone"), Some(&Value::Null));
        assert_eq!(
            serde_json::to_string(&lead).unwrap(),
            r#"{"Company":"Acme","Phone":null}"#
        );
    }

    #[test]
    fn test_set_replaces_without_reordering() {
        let mut record = SObject::new("Account")
            .with_field("Name", "Old")
            .with_field("Industry", "Retail");
        record.set_field("Name", "New");

        assert_eq!(record.len(), 2);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"Name":"New","Industry":"Retail"}"#
        );
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let record = SObject::new("Account")
            .with_field("Name", "a")
            .with_field("name", "b");
        assert_eq!(record.len(), 2);
        assert_eq!(record.field("Name"), Some(&Value::String("a".into())));
        assert_eq!(record.field("name"), Some(&Value::String("b".into())));
    }
}
