//! Preprocessing operations and the canonical pipeline built from CLI flags.
//!
//! Each [`Operation`] is a pure `DynamicImage -> DynamicImage` transform.
//! [`Pipeline::build`] normalizes the raw flag values into an ordered sequence
//! holding at most one operation of each kind, always in the fixed application
//! order greyscale → resize → unsharpen → contrast. The pipeline is built once
//! per run and shared read-only across all files.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba};

/// Per-field fallback values for `--unsharpen`: radius, sigma, amount,
/// threshold. Chosen so a field that fails to parse leaves the operation
/// without visible effect (radius 0 and amount 0 are both identity).
const UNSHARPEN_DEFAULTS: [f64; 4] = [0.0, 1.0, 0.0, 1.0];

/// A single preprocessing transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Convert to single-channel luminance
    GreyScale,
    /// Resample to `round(width × scale)`, height derived to keep aspect
    Resize { scale: f64 },
    /// Unsharp mask: sharpen where original and blurred differ by more
    /// than `threshold` (on the 0.0–1.0 channel scale)
    Unsharpen {
        radius: u32,
        sigma: f64,
        amount: f64,
        threshold: f64,
    },
    /// Linear contrast around the channel midpoint
    Contrast { factor: f64 },
}

impl Operation {
    /// Position in the canonical application order.
    fn rank(&self) -> u8 {
        match self {
            Operation::GreyScale => 0,
            Operation::Resize { .. } => 1,
            Operation::Unsharpen { .. } => 2,
            Operation::Contrast { .. } => 3,
        }
    }

    /// Apply this transform. Pure: never fails, no-ops are handled here
    /// rather than by the caller.
    pub fn apply(&self, img: DynamicImage) -> DynamicImage {
        match self {
            Operation::GreyScale => img.grayscale(),
            Operation::Resize { scale } => resize_width(img, *scale),
            Operation::Unsharpen {
                radius,
                sigma,
                amount,
                threshold,
            } => unsharp_mask(img, *radius, *sigma, *amount, *threshold),
            Operation::Contrast { factor } => linear_contrast(img, *factor),
        }
    }
}

/// Resample width-wise with Lanczos3; height follows to preserve aspect.
///
/// No-op when the rounded target width equals the current width, so tiny
/// scale factors on small images do nothing rather than re-encoding pixels.
fn resize_width(img: DynamicImage, scale: f64) -> DynamicImage {
    if scale == 1.0 {
        return img;
    }
    let width = img.width();
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    if new_width == width {
        return img;
    }
    let new_height = ((f64::from(img.height()) * f64::from(new_width) / f64::from(width)).round()
        as u32)
        .max(1);
    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}

/// Unsharp mask: blur at `sigma`, then push each channel away from its
/// blurred value by `amount` wherever the difference exceeds `threshold`.
///
/// `radius == 0` or `amount == 0.0` is an identity transform — that is the
/// fallback for malformed `--unsharpen` fields.
fn unsharp_mask(
    img: DynamicImage,
    radius: u32,
    sigma: f64,
    amount: f64,
    threshold: f64,
) -> DynamicImage {
    if radius == 0 || amount == 0.0 {
        return img;
    }
    // gaussian with a non-positive sigma is degenerate
    let sigma = sigma.max(0.01);
    let blurred = img.blur(sigma as f32).to_rgba8();
    let mut out = img.to_rgba8();
    for (pixel, blur_pixel) in out.pixels_mut().zip(blurred.pixels()) {
        for channel in 0..3 {
            let original = f64::from(pixel[channel]) / 255.0;
            let softened = f64::from(blur_pixel[channel]) / 255.0;
            let diff = original - softened;
            if diff.abs() > threshold {
                let sharpened = original + amount * diff;
                pixel[channel] = (sharpened * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    DynamicImage::ImageRgba8(out)
}

/// Scale each color channel linearly around the midpoint by `factor`.
fn linear_contrast(img: DynamicImage, factor: f64) -> DynamicImage {
    let mut out = img.to_rgba8();
    for pixel in out.pixels_mut() {
        let Rgba(channels) = pixel;
        for channel in channels.iter_mut().take(3) {
            let value = f64::from(*channel) / 255.0;
            let adjusted = (value - 0.5) * factor + 0.5;
            *channel = (adjusted * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
    DynamicImage::ImageRgba8(out)
}

/// Raw preprocessing configuration as it arrives from the CLI.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub grey: bool,
    pub scale: f64,
    pub contrast: f64,
    /// `"radius,sigma,amount,threshold"`, possibly quoted, possibly malformed
    pub unsharpen: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            grey: false,
            scale: 1.0,
            contrast: 1.0,
            unsharpen: String::new(),
        }
    }
}

/// An ordered sequence of at most one operation per kind, in canonical order.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    operations: Vec<Operation>,
}

impl Pipeline {
    /// Normalize raw options into the canonical pipeline.
    ///
    /// Inclusion rules:
    /// - `GreyScale` iff `grey` is set;
    /// - `Resize` iff `scale != 1.0`;
    /// - `Unsharpen` iff the unsharpen string splits into exactly four
    ///   comma-separated fields (see [`parse_unsharpen`]);
    /// - `Contrast` iff `contrast != 1.0`.
    pub fn build(options: &PipelineOptions) -> Self {
        let mut operations = Vec::new();
        if options.grey {
            operations.push(Operation::GreyScale);
        }
        if options.scale != 1.0 {
            operations.push(Operation::Resize {
                scale: options.scale,
            });
        }
        if let Some(op) = parse_unsharpen(&options.unsharpen) {
            operations.push(op);
        }
        if options.contrast != 1.0 {
            operations.push(Operation::Contrast {
                factor: options.contrast,
            });
        }
        // Application order is fixed no matter how the options arrived.
        operations.sort_by_key(Operation::rank);
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Run every operation over the image, in canonical order.
    pub fn apply(&self, img: DynamicImage) -> DynamicImage {
        self.operations.iter().fold(img, |img, op| op.apply(img))
    }
}

/// Parse an `--unsharpen` value into an operation.
///
/// Surrounding single/double quotes are stripped (shells sometimes hand the
/// quoted string through verbatim) and each field is trimmed. The operation
/// is produced only when splitting on `,` yields exactly four fields; any
/// other count silently yields no operation. A field that fails numeric
/// parsing falls back to its entry in [`UNSHARPEN_DEFAULTS`] instead of
/// rejecting the whole operation.
pub fn parse_unsharpen(spec: &str) -> Option<Operation> {
    let trimmed = spec.trim_matches(|c| c == '\'' || c == '"');
    let fields: Vec<&str> = trimmed.split(',').collect();
    if fields.len() != 4 {
        return None;
    }
    let mut values = UNSHARPEN_DEFAULTS;
    for (value, field) in values.iter_mut().zip(&fields) {
        if let Ok(parsed) = field.trim().parse::<f64>() {
            *value = parsed;
        }
    }
    Some(Operation::Unsharpen {
        radius: values[0].max(0.0) as u32,
        sigma: values[1],
        amount: values[2],
        threshold: values[3],
    })
}
