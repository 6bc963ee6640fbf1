//! Postman collection export
//!
//! Complies with the format the Postman Chrome extension uses for its
//! "download collection" feature, giving users a migration path between
//! clients. Postman requires some extra ids; the record and collection ids
//! are reused for those.

use serde::{Deserialize, Serialize};

use crate::collection::{CollectionMeta, FormField, Header, RequestBody, RequestRecord};

/// Exported Postman collection document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanCollection {
    pub id: String,
    pub name: String,
    pub requests: Vec<PostmanRequest>,
}

/// One request in a Postman collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanRequest {
    pub id: String,

    #[serde(rename = "collectionId")]
    pub collection_id: String,

    pub method: String,

    pub url: String,

    /// Newline-joined "name: value" lines
    pub headers: String,

    #[serde(rename = "dataMode")]
    pub data_mode: DataMode,

    /// Form fields when dataMode is "urlencoded", empty otherwise
    pub data: Vec<PostmanFormParam>,

    #[serde(rename = "rawModeData")]
    pub raw_mode_data: RawModeData,
}

/// Postman's discriminator for how a request body is represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Urlencoded,
    Raw,
}

/// One form field in Postman's data list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanFormParam {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub enabled: bool,
}

impl PostmanFormParam {
    fn from_field(field: &FormField) -> Self {
        Self {
            key: field.name.clone(),
            value: field.value.clone(),
            param_type: "text".to_string(),
            enabled: true,
        }
    }
}

/// Body payload for dataMode "raw": the raw body text when the record has
/// one, an empty list otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawModeData {
    Text(String),
    Entries(Vec<String>),
}

impl Default for RawModeData {
    fn default() -> Self {
        RawModeData::Entries(Vec::new())
    }
}

/// Convert saved requests into a Postman collection document
///
/// Returns `None` for a missing or empty request list; the JSON boundary
/// maps that to `{}`. Requests convert in input order. Header lists are
/// flattened through `format_headers`. Form fields map to the data list
/// unfiltered, empty names included; only the HAR path drops them.
pub fn to_postman_collection<F>(
    requests: &[RequestRecord],
    meta: &CollectionMeta,
    format_headers: F,
) -> Option<PostmanCollection>
where
    F: Fn(&[Header]) -> String,
{
    if requests.is_empty() {
        return None;
    }

    let requests = requests
        .iter()
        .map(|record| convert_request(record, meta, &format_headers))
        .collect();

    Some(PostmanCollection {
        id: meta.id.clone(),
        name: meta.name.clone(),
        requests,
    })
}

fn convert_request<F>(
    record: &RequestRecord,
    meta: &CollectionMeta,
    format_headers: &F,
) -> PostmanRequest
where
    F: Fn(&[Header]) -> String,
{
    let (data_mode, data, raw_mode_data) = match record.body() {
        RequestBody::Form(fields) => (
            DataMode::Urlencoded,
            fields.iter().map(PostmanFormParam::from_field).collect(),
            RawModeData::default(),
        ),
        RequestBody::Raw(text) => (
            DataMode::Raw,
            Vec::new(),
            RawModeData::Text(text.to_string()),
        ),
        RequestBody::Empty => (DataMode::Raw, Vec::new(), RawModeData::default()),
    };

    PostmanRequest {
        id: record.id.clone(),
        collection_id: meta.id.clone(),
        method: record.method.clone(),
        url: record.url.clone(),
        headers: format_headers(&record.headers),
        data_mode,
        data,
        raw_mode_data,
    }
}
