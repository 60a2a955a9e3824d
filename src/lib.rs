//! # barcodescanner
//!
//! Scan a batch of image files for 1-D retail barcodes (EAN-13 and UPC-A)
//! and print one JSON report for the whole batch. Each file can optionally
//! be pushed through a preprocessing pipeline first — greyscale, resize,
//! unsharp mask, contrast — to rescue symbols from soft or low-contrast
//! photos.
//!
//! # Architecture
//!
//! ```text
//! flags ──► Pipeline::build ──► Pipeline (immutable, shared)
//!                                   │
//! files ──► batch::run ──► process_file per file (rayon) ──► Vec<FileResult>
//!                                   │
//!           output::build_report ──► BatchReport ──► JSON on stdout
//! ```
//!
//! Three properties hold everywhere:
//!
//! - **Canonical pipeline order**: operations always run greyscale → resize
//!   → unsharpen → contrast, no matter how the flags were given.
//! - **Per-file isolation**: any failure (unreadable path, undecodable
//!   bytes, no symbol) becomes that file's `error` field; the batch never
//!   aborts.
//! - **Order-preserving batch**: `barcodes[i]` in the report corresponds to
//!   the i-th input path, with input capped at [`batch::MAX_FILES`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | `Operation` transforms + canonical `Pipeline` builder |
//! | [`process`] | one file → one `FileResult`, failures captured as data |
//! | [`decode`] | rxing boundary: symbology set, decode hints, metadata |
//! | [`batch`] | capped, rayon-parallel, order-preserving fan-out |
//! | [`types`] | the serialized report schema (`FileResult`, `BatchReport`) |
//! | [`output`] | report assembly, JSON rendering, version banner |

pub mod batch;
pub mod decode;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
