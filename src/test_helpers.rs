//! Shared test utilities: synthetic barcode fixtures.
//!
//! Renders clean EAN-13 / UPC-A symbols from the standard module tables so
//! decode tests never depend on binary fixtures checked into the repo. The
//! symbols are drawn at 4px per module with generous quiet zones — easy
//! pickings for the decoder, which is the point: these tests exercise the
//! plumbing around the decoder, not its robustness.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma};

/// Left-hand odd-parity (L) patterns, one 7-module pattern per digit.
const L_PATTERNS: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

/// Left-hand even-parity (G) patterns.
const G_PATTERNS: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];

/// Parity sequence for the six left digits, selected by the first digit.
/// `true` = G pattern.
const PARITIES: [[bool; 6]; 10] = [
    [false, false, false, false, false, false],
    [false, false, true, false, true, true],
    [false, false, true, true, false, true],
    [false, false, true, true, true, false],
    [false, true, false, false, true, true],
    [false, true, true, false, false, true],
    [false, true, true, true, false, false],
    [false, true, false, true, false, true],
    [false, true, false, true, true, false],
    [false, true, true, false, true, false],
];

const MODULE_PX: u32 = 4;
const BAR_HEIGHT: u32 = 60;
const QUIET_MODULES: u32 = 12;

fn push_pattern(modules: &mut Vec<bool>, pattern: &str, invert: bool) {
    for c in pattern.chars() {
        modules.push((c == '1') != invert);
    }
}

/// The 95-module sequence for a full 13-digit code (check digit included).
fn ean13_modules(digits: &[u8]) -> Vec<bool> {
    assert_eq!(digits.len(), 13, "EAN-13 needs 13 digits");
    let parities = &PARITIES[digits[0] as usize];
    let mut modules = Vec::with_capacity(95);

    push_pattern(&mut modules, "101", false);
    for (i, &digit) in digits[1..7].iter().enumerate() {
        let table = if parities[i] { &G_PATTERNS } else { &L_PATTERNS };
        push_pattern(&mut modules, table[digit as usize], false);
    }
    push_pattern(&mut modules, "01010", false);
    for &digit in &digits[7..13] {
        // right-hand (R) patterns are the bitwise complement of L
        push_pattern(&mut modules, L_PATTERNS[digit as usize], true);
    }
    push_pattern(&mut modules, "101", false);

    assert_eq!(modules.len(), 95);
    modules
}

fn render(modules: &[bool]) -> DynamicImage {
    let width = (modules.len() as u32 + 2 * QUIET_MODULES) * MODULE_PX;
    let mut img = GrayImage::from_pixel(width, BAR_HEIGHT, Luma([255u8]));
    for (i, &dark) in modules.iter().enumerate() {
        if !dark {
            continue;
        }
        let x0 = (QUIET_MODULES + i as u32) * MODULE_PX;
        for x in x0..x0 + MODULE_PX {
            for y in 0..BAR_HEIGHT {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
    }
    DynamicImage::ImageLuma8(img)
}

/// Render a full 13-digit EAN-13 code (check digit included) as an image.
pub fn ean13_image(code: &str) -> DynamicImage {
    let digits: Vec<u8> = code
        .chars()
        .map(|c| c.to_digit(10).expect("EAN-13 codes are all digits") as u8)
        .collect();
    render(&ean13_modules(&digits))
}

/// Render a 12-digit UPC-A code (check digit included) as an image.
///
/// UPC-A is EAN-13 with an implied leading zero; decoders report it as
/// `UPC_A` with the zero stripped.
pub fn upca_image(code: &str) -> DynamicImage {
    assert_eq!(code.len(), 12, "UPC-A needs 12 digits");
    ean13_image(&format!("0{code}"))
}

/// Save a fixture image as PNG and return its path as a string.
pub fn write_png(dir: &Path, name: &str, img: &DynamicImage) -> String {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path.to_str().unwrap().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_sequence_has_guards_in_place() {
        let modules = ean13_modules(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3, 1]);
        // start and end guards
        assert_eq!(&modules[..3], &[true, false, true]);
        assert_eq!(&modules[92..], &[true, false, true]);
        // center guard
        assert_eq!(&modules[45..50], &[false, true, false, true, false]);
    }

    #[test]
    fn rendered_fixture_has_quiet_zones() {
        let img = ean13_image("4006381333931").to_luma8();
        // leftmost and rightmost quiet-zone columns stay white
        assert_eq!(img.get_pixel(0, 30)[0], 255);
        assert_eq!(img.get_pixel(img.width() - 1, 30)[0], 255);
    }
}
