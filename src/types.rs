//! Shared types serialized into the final report.
//!
//! These types define the JSON schema on stdout. Field order here is field
//! order in the output, so additions must go at the end and renames are
//! breaking changes for downstream consumers.

use serde::{Deserialize, Serialize};

/// Outcome of scanning a single file.
///
/// Exactly one of two shapes, keyed by outcome:
/// - success: `format` + `data` populated (`country` too when the decoder
///   reports a likely country of origin), `error` absent;
/// - failure: `error` populated, everything else absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// Input path, exactly as supplied on the command line
    #[serde(rename = "file")]
    pub file_name: String,
    /// Symbology name (`EAN_13` or `UPC_A`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Decoded barcode text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Possible country of origin, from the EAN prefix registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Why this file produced no barcode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn success(file_name: &str, format: String, data: String, country: Option<String>) -> Self {
        Self {
            file_name: file_name.to_string(),
            format: Some(format),
            data: Some(data),
            country,
            error: None,
        }
    }

    pub fn failure(file_name: &str, error: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            format: None,
            data: None,
            country: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// The full report for one run: ordered per-file results plus an echo of the
/// effective preprocessing configuration.
///
/// `barcodes[i]` corresponds to the i-th retained input path.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    pub barcodes: Vec<FileResult>,
    pub grey: bool,
    pub scale: f64,
    pub contrast: f64,
    /// Raw `--unsharpen` string as supplied, not the parsed values
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unsharpen: String,
}
