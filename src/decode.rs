//! Barcode decoder boundary.
//!
//! Thin wrapper around [rxing](https://docs.rs/rxing), the Rust port of
//! zxing. The decoder is always restricted to the two retail symbologies
//! this tool targets (EAN-13, UPC-A) and always runs with the `TryHarder`
//! (exhaustive search) and `AlsoInverted` (light-on-dark symbols) hints.
//! Everything upstream of this module deals only in [`Decoded`] values and
//! error strings; no rxing types leak out.

use std::collections::HashSet;

use image::DynamicImage;
use rxing::common::HybridBinarizer;
use rxing::{
    BarcodeFormat, BinaryBitmap, BufferedImageLuminanceSource, DecodeHintValue, DecodeHints,
    Exceptions, MultiFormatReader, Reader,
};

/// A successfully decoded symbol.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Symbology name: `EAN_13` or `UPC_A`
    pub format: String,
    /// The decoded digits
    pub text: String,
    /// Possible country of origin from the EAN prefix registry, when the
    /// decoder reports one
    pub country: Option<String>,
}

fn scan_hints() -> DecodeHints {
    DecodeHints::default()
        .with(DecodeHintValue::PossibleFormats(HashSet::from([
            BarcodeFormat::EAN_13,
            BarcodeFormat::UPC_A,
        ])))
        .with(DecodeHintValue::TryHarder(true))
        .with(DecodeHintValue::AlsoInverted(true))
}

/// Map a format to its stable report name.
///
/// Matched explicitly so the report schema cannot drift with upstream
/// `Display` changes.
fn format_name(format: &BarcodeFormat) -> String {
    match format {
        BarcodeFormat::EAN_13 => "EAN_13".to_string(),
        BarcodeFormat::UPC_A => "UPC_A".to_string(),
        other => other.to_string(),
    }
}

/// Search a processed image for an EAN-13 or UPC-A symbol.
///
/// The image is reduced to a luminance plane and binarized; the reader then
/// scans rows for a symbol, exhaustively (and against inverted polarity)
/// per the fixed hints. Errors are the decoder's own (`NotFound`, checksum
/// failures) and are reported per file, never fatally.
pub fn decode(img: DynamicImage) -> Result<Decoded, Exceptions> {
    let hints = scan_hints();
    let source = BufferedImageLuminanceSource::new(img);
    let mut bitmap = BinaryBitmap::new(HybridBinarizer::new(source));
    let mut reader = MultiFormatReader::default();
    let result = reader.decode_with_hints(&mut bitmap, &hints)?;

    let country = result
        .getRXingResultMetadata()
        .get(&rxing::RXingResultMetadataType::POSSIBLE_COUNTRY)
        .and_then(|value| match value {
            rxing::RXingResultMetadataValue::PossibleCountry(country) => Some(country.clone()),
            _ => None,
        });

    Ok(Decoded {
        format: format_name(result.getBarcodeFormat()),
        text: result.getText().to_string(),
        country,
    })
}
