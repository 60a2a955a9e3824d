//! Per-file processing: decode the image, run the pipeline, find the symbol.
//!
//! [`process_file`] is the isolation boundary of the whole tool: whatever
//! goes wrong with one file — unreadable path, bytes that are not an image,
//! no symbol in the picture — is captured into that file's [`FileResult`]
//! and the batch moves on. Nothing here can fail the run.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::decode;
use crate::pipeline::Pipeline;
use crate::types::FileResult;

/// Per-file failure taxonomy. The `Display` text is what lands in the
/// report's `error` field.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: String,
        source: image::ImageError,
    },
    #[error("no barcode in {path}: {source}")]
    BarcodeDecode {
        path: String,
        source: rxing::Exceptions,
    },
}

/// Scan one file and produce exactly one result, success- or failure-shaped.
pub fn process_file(file_name: &str, pipeline: &Pipeline) -> FileResult {
    match scan_file(file_name, pipeline) {
        Ok(decoded) => FileResult::success(file_name, decoded.format, decoded.text, decoded.country),
        Err(err) => FileResult::failure(file_name, err.to_string()),
    }
}

fn scan_file(file_name: &str, pipeline: &Pipeline) -> Result<decode::Decoded, ProcessError> {
    let img = load_image(file_name)?;
    let img = pipeline.apply(img);
    decode::decode(img).map_err(|source| ProcessError::BarcodeDecode {
        path: file_name.to_string(),
        source,
    })
}

/// Open and decode an image, sniffing the container format from content.
///
/// The file handle lives only for the duration of the decode; it is dropped
/// before the pipeline or the symbol search run.
fn load_image(file_name: &str) -> Result<DynamicImage, ProcessError> {
    let reader = ImageReader::open(Path::new(file_name))
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| ProcessError::FileOpen {
            path: file_name.to_string(),
            source,
        })?;
    reader.decode().map_err(|source| ProcessError::ImageDecode {
        path: file_name.to_string(),
        source,
    })
}
