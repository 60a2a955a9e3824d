use barcodescanner::pipeline::{Pipeline, PipelineOptions};
use barcodescanner::{batch, output};
use clap::{CommandFactory, Parser};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "barcodescanner")]
#[command(about = "Scan image files for EAN-13 and UPC-A barcodes")]
#[command(long_about = "\
Scan image files for EAN-13 and UPC-A barcodes

Each FILE is decoded (bmp, gif, jpeg, png, tiff and webp are recognized by
content, not extension), optionally preprocessed, and searched for a barcode.
The result is a single JSON report on stdout with one entry per file, in
input order; a file that cannot be read or holds no barcode gets an error
entry instead of aborting the run. At most 100 files are scanned per run.

Preprocessing always applies in a fixed order, regardless of flag order:
  greyscale (--grey), resize (--scale), unsharp mask (--unsharpen),
  contrast (--contrast).")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Image files to scan (at most 100 are used)
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Convert image to greyscale. Applied first
    #[arg(long)]
    grey: bool,

    /// Factor to resize the image with. Default 1.0 has no effect. Applied second
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Apply unsharp mask. Four params comma separated: radius, sigma, amount, threshold. Applied third
    #[arg(long, default_value = "")]
    unsharpen: String,

    /// Factor to adjust the contrast. Default 1.0 has no effect. Applied last
    #[arg(long, default_value_t = 1.0)]
    contrast: f64,

    /// Pretty-print the json output
    #[arg(long)]
    pretty: bool,

    /// Display version
    #[arg(long)]
    version: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems and help both leave with status 2, the exit
            // code this tool has always used for its usage path. Help goes
            // to stderr like any other usage output.
            use clap::error::ErrorKind;
            if err.kind() == ErrorKind::DisplayHelp {
                eprint!("{err}");
            } else {
                let _ = err.print();
            }
            std::process::exit(2);
        }
    };

    if cli.version {
        output::print_version(&output::BuildInfo {
            version: version_string(),
            build_time: env!("BUILD_TIME"),
        });
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut cmd = Cli::command();
        let _ = cmd.write_help(&mut std::io::stderr());
        eprintln!();
        std::process::exit(2);
    }

    let options = PipelineOptions {
        grey: cli.grey,
        scale: cli.scale,
        contrast: cli.contrast,
        unsharpen: cli.unsharpen.clone(),
    };
    let pipeline = Pipeline::build(&options);

    let results = batch::run(&cli.files, &pipeline);
    let report = output::build_report(results, &options);

    // The only process-fatal error: there is no fallback output channel,
    // so a report that cannot be serialized ends the run with status 1.
    let json = output::render_report(&report, cli.pretty)?;
    println!("{json}");

    Ok(())
}
