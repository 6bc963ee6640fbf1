//! Collection export to interchange formats
//!
//! Two converters share the body classification on [`RequestRecord`]: a
//! Postman collection document for migration to other clients, and a HAR
//! 1.2 archive for everything else that speaks HTTP Archive. Both are pure;
//! the file plumbing lives in [`run_export`].

pub mod har;
pub mod postman;

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;

use crate::cli::Args;
use crate::collection::{load_collection, CollectionMeta, RequestRecord};
use crate::errors::RestedError;
use crate::formatting::headers_to_header_string;
use crate::status::ExitStatus;

pub use har::{to_har_archive, Har};
pub use postman::{to_postman_collection, PostmanCollection};

/// Target document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Postman collection JSON
    Postman,
    /// HAR 1.2 archive JSON
    Har,
}

/// Serialize a converted document, mapping the empty-input case to `{}`
pub fn document_to_json<T: Serialize>(
    document: Option<T>,
) -> Result<serde_json::Value, RestedError> {
    match document {
        Some(doc) => Ok(serde_json::to_value(doc)?),
        None => Ok(serde_json::Value::Object(serde_json::Map::new())),
    }
}

/// Load a collection file, convert it, and write the document
pub fn run_export(args: &Args, format: ExportFormat) -> Result<ExitStatus, RestedError> {
    let collection = load_collection(&args.collection)?;
    let meta = collection.meta();

    info!(
        collection = %meta.name,
        requests = collection.requests.len(),
        format = ?format,
        "Exporting collection"
    );

    let document = convert(&collection.requests, &meta, format)?;

    let mut rendered = if args.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    rendered.push('\n');

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(ExitStatus::Success)
}

fn convert(
    requests: &[RequestRecord],
    meta: &CollectionMeta,
    format: ExportFormat,
) -> Result<serde_json::Value, RestedError> {
    match format {
        ExportFormat::Postman => document_to_json(to_postman_collection(
            requests,
            meta,
            headers_to_header_string,
        )),
        ExportFormat::Har => document_to_json(to_har_archive(requests)),
    }
}

/// Write the document to a file
/// Uses atomic write (write to temp file, then rename) to prevent partial output
fn write_output(path: &Path, content: &str) -> Result<(), RestedError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.persist(path).map_err(|e| RestedError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_to_json_maps_none_to_empty_object() {
        let value = document_to_json::<Har>(None).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_document_to_json_serializes_document() {
        let records = vec![RequestRecord {
            id: "req-1".to_string(),
            method: "GET".to_string(),
            url: "https://example.com".to_string(),
            headers: Vec::new(),
            data: None,
            form_data: None,
        }];

        let value = document_to_json(to_har_archive(&records)).unwrap();
        assert_eq!(value["log"]["version"], json!("1.2"));
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("collection.har");

        write_output(&path, "{}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
