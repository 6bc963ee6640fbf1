//! Collection file parsing
//!
//! Loads and parses collection files from disk.

use std::fs;
use std::path::Path;

use super::types::Collection;
use crate::errors::RestedError;

/// Maximum collection file size (64 MB)
const MAX_COLLECTION_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Load and parse a collection file
pub fn load_collection(path: &Path) -> Result<Collection, RestedError> {
    // Check file exists
    if !path.exists() {
        return Err(RestedError::Parse(format!(
            "Collection file not found: {}",
            path.display()
        )));
    }

    // Check file size
    let metadata = fs::metadata(path).map_err(RestedError::Io)?;

    if metadata.len() > MAX_COLLECTION_FILE_SIZE {
        return Err(RestedError::Parse(format!(
            "Collection file too large: {} bytes (max {} MB)",
            metadata.len(),
            MAX_COLLECTION_FILE_SIZE / 1024 / 1024
        )));
    }

    // Read file
    let content = fs::read_to_string(path).map_err(|e| {
        RestedError::Parse(format!("Failed to read collection file: {}", e))
    })?;

    // Parse JSON
    parse_collection(&content)
}

/// Parse a collection from a JSON string
pub fn parse_collection(json: &str) -> Result<Collection, RestedError> {
    serde_json::from_str(json).map_err(|e| {
        RestedError::Parse(format!("Invalid collection format: {}", e))
    })
}
