//! HAR (HTTP Archive) export
//!
//! Complies with the HAR 1.2 specification:
//! http://www.softwareishard.com/blog/har-12-spec
//!
//! Only the request side of an entry is archived; a saved request has no
//! recorded response, timings, or cache state, so that fluff is left out.

use serde::{Deserialize, Serialize};

use crate::collection::{FormField, Header, RequestBody, RequestRecord};

/// HAR format version emitted in the envelope
pub const HAR_VERSION: &str = "1.2";

/// Creator label emitted in the envelope
pub const HAR_CREATOR: &str = "RESTED REST Client";

/// Envelope comment
pub const HAR_COMMENT: &str = "An exported collection from RESTED";

/// Root HAR structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Har {
    pub log: HarLog,
}

/// HAR log containing all entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarLog {
    /// HAR format version (e.g., "1.2")
    pub version: String,

    /// Creator application label
    pub creator: String,

    /// Comment describing the archive
    pub comment: String,

    /// List of archived request entries
    pub entries: Vec<HarEntry>,
}

/// A single archived request entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
}

/// HTTP request details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// Full URL
    pub url: String,

    /// Structured header list, not the flattened text form
    pub headers: Vec<Header>,

    /// POST data
    #[serde(rename = "postData")]
    pub post_data: HarPostData,
}

/// POST data
///
/// Serializes as `{}` for a record with no body; every field is optional
/// and absent in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarPostData {
    /// MIME type; empty string when the body is not urlencoded
    #[serde(rename = "mimeType", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Form fields with non-empty names, in original order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<FormField>>,

    /// Urlencoded string, or the raw body when there is none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Convert saved requests into a HAR 1.2 archive
///
/// Returns `None` for a missing or empty request list; the JSON boundary
/// maps that to `{}`. Entries are emitted in input order.
pub fn to_har_archive(requests: &[RequestRecord]) -> Option<Har> {
    if requests.is_empty() {
        return None;
    }

    let entries = requests
        .iter()
        .map(|record| HarEntry {
            request: HarRequest {
                method: record.method.clone(),
                url: record.url.clone(),
                headers: record.headers.clone(),
                post_data: post_data(record),
            },
        })
        .collect();

    Some(Har {
        log: HarLog {
            version: HAR_VERSION.to_string(),
            creator: HAR_CREATOR.to_string(),
            comment: HAR_COMMENT.to_string(),
            entries,
        },
    })
}

/// Build the postData block for one record
///
/// Form fields with empty names contribute neither to the urlencoded string
/// nor to the params list. When the urlencoded string comes out empty the
/// text falls back to the record's raw body, which may be absent.
fn post_data(record: &RequestRecord) -> HarPostData {
    let fields: &[FormField] = match record.body() {
        RequestBody::Empty => return HarPostData::default(),
        RequestBody::Form(fields) => fields,
        RequestBody::Raw(_) => &[],
    };

    let url_encoded = fields
        .iter()
        .filter(|f| !f.name.is_empty())
        .map(|f| format!("{}={}", f.name, f.value))
        .collect::<Vec<_>>()
        .join("&");

    let params: Vec<FormField> = fields
        .iter()
        .filter(|f| !f.name.is_empty())
        .cloned()
        .collect();

    let (mime_type, text) = if url_encoded.is_empty() {
        (String::new(), record.data.clone())
    } else {
        (
            "application/x-www-form-urlencoded".to_string(),
            Some(url_encoded),
        )
    };

    HarPostData {
        mime_type: Some(mime_type),
        params: Some(params),
        text,
    }
}
