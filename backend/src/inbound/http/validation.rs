//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, Name, Subject};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn empty_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must not be empty")).with_details(json!({
        "field": field,
        "code": "empty_field",
    }))
}

pub(crate) fn parse_name(value: String, field: FieldName) -> Result<Name, Error> {
    Name::new(value).map_err(|_| empty_field_error(field))
}

pub(crate) fn parse_subject(value: String, field: FieldName) -> Result<Subject, Error> {
    Subject::new(value).map_err(|_| empty_field_error(field))
}
