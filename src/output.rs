//! Report assembly and everything the tool prints.
//!
//! The report on stdout is the tool's only structured output channel:
//! [`render_report`] turns the assembled [`BatchReport`] into compact or
//! pretty JSON with serde_json, and a failure there is the one unrecoverable
//! error in the program. The version banner lives here too so `main` only
//! ever hands data over.

use colored::Colorize;

use crate::pipeline::PipelineOptions;
use crate::types::{BatchReport, FileResult};

const FIGLET: &str = r#"
  _                     _
 | |_ ___ ___ ___ ___ _| |___ ___ ___ ___ ___ ___ ___ ___
 | . | .'|  _|  _| . | . | -_|_ -|  _| .'|   |   | -_|  _|
 |___|__,|_| |___|___|___|___|___|___|__,|_|_|_|_|___|_|
"#;

/// Build metadata captured at compile time and injected at process start.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
}

/// Combine the ordered results with an echo of the effective configuration.
///
/// The `unsharpen` echo is the raw CLI string — consumers see what was
/// asked for, even when it parsed to nothing.
pub fn build_report(results: Vec<FileResult>, options: &PipelineOptions) -> BatchReport {
    BatchReport {
        barcodes: results,
        grey: options.grey,
        scale: options.scale,
        contrast: options.contrast,
        unsharpen: options.unsharpen.clone(),
    }
}

/// Serialize the report, compact by default, indented when `pretty` is set.
pub fn render_report(report: &BatchReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

/// Print the logo and version line for `--version`.
pub fn print_version(build: &BuildInfo) {
    println!("{}", FIGLET.cyan());
    println!("barcodescanner v{} ({})", build.version, build.build_time);
}
