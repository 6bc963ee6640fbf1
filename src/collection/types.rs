//! Collection data structures
//!
//! A collection is an ordered list of saved requests plus the metadata
//! identifying the collection itself. Records are immutable inputs to the
//! exporters; nothing here is mutated after parsing.

use serde::{Deserialize, Serialize};

/// A single HTTP header on a saved request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// One name/value pair of a URL-encoded form body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// A saved HTTP request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: String,

    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// Full URL, possibly containing unexpanded {{variables}}
    pub url: String,

    /// Request headers, in editor order
    #[serde(default)]
    pub headers: Vec<Header>,

    /// Raw body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// URL-encoded form fields
    #[serde(rename = "formData", default, skip_serializing_if = "Option::is_none")]
    pub form_data: Option<Vec<FormField>>,
}

/// Identity of the collection that owns a request list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMeta {
    pub id: String,
    pub name: String,
}

/// A stored collection as read from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub requests: Vec<RequestRecord>,
}

/// Body classification for a request record
///
/// Chosen once per record and consumed by every exporter, so the Postman
/// and HAR paths cannot disagree on which branch a record falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestBody<'a> {
    /// Non-empty URL-encoded form field list
    Form(&'a [FormField]),
    /// Non-empty raw body text
    Raw(&'a str),
    /// No body at all
    Empty,
}

impl RequestRecord {
    /// Classify the record's body
    ///
    /// Form fields win over raw text when both are present. An empty form
    /// field list and an empty raw string both count as no body.
    pub fn body(&self) -> RequestBody<'_> {
        if let Some(fields) = self.form_data.as_deref() {
            if !fields.is_empty() {
                return RequestBody::Form(fields);
            }
        }

        match self.data.as_deref() {
            Some(text) if !text.is_empty() => RequestBody::Raw(text),
            _ => RequestBody::Empty,
        }
    }
}

impl Collection {
    /// The identity handed to the Postman converter
    pub fn meta(&self) -> CollectionMeta {
        CollectionMeta {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}
