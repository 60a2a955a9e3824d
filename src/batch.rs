//! Batch orchestration: cap the input list, fan out, keep the order.
//!
//! Files are independent — each opens its own handle, nothing is shared but
//! the read-only pipeline — so they are processed on the rayon pool. The
//! indexed `par_iter().map().collect()` writes each result into the slot of
//! its input, which keeps `results[i]` paired with `inputs[i]` no matter how
//! the pool schedules the work.

use rayon::prelude::*;

use crate::pipeline::Pipeline;
use crate::process::process_file;
use crate::types::FileResult;

/// Hard cap on files per run. Inputs beyond this are silently dropped —
/// no warning, no error records — and the cap bounds peak open handles and
/// decoded buffers.
pub const MAX_FILES: usize = 100;

/// Process up to [`MAX_FILES`] of the given paths, one result per retained
/// path, in input order.
pub fn run(files: &[String], pipeline: &Pipeline) -> Vec<FileResult> {
    let retained = &files[..files.len().min(MAX_FILES)];
    retained
        .par_iter()
        .map(|file_name| process_file(file_name, pipeline))
        .collect()
}
