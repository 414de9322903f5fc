//! Image transformation catalog: ten pure, stateless operations.
//!
//! Every operation maps one [`Image`] (plus optional numeric parameters)
//! to a brand-new [`Image`]; input grids are never mutated or aliased.
//! Per-pixel filters keep the input shape, rotation transposes it, and
//! enlarge scales it.
//!
//! # Arithmetic
//!
//! The filters reproduce the arithmetic of the classic filter definitions
//! bit for bit: channel averages use integer division, and fractional
//! intermediate values are truncated toward zero before being clamped to
//! the 8-bit range.
//!
//! # Dispatch
//!
//! [`Operation`] is a closed set of variants with embedded parameters;
//! [`apply`] selects the matching function. No dynamic dispatch needed.

mod enlarge;
mod filters;
mod rotate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::Image;

pub use enlarge::enlarge;
pub use filters::{clarendon, darken, grayscale, high_contrast, lighten, posterize, vignette};
pub use rotate::{rotate90, rotate_quarter_turns};

/// Errors that can occur when applying a transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The input grid has zero rows or zero-length rows.
    #[error("Cannot transform an empty image")]
    EmptyImage,

    /// Enlarge scales must both be at least 1.
    #[error("Invalid enlarge scale {x_scale}x{y_scale}: both factors must be at least 1")]
    InvalidScale { x_scale: u32, y_scale: u32 },
}

/// One transform selection with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Darken toward the corners.
    Vignette,
    /// Darks darker and lights lighter by `factor` (typical 0.3).
    Clarendon { factor: f64 },
    /// Replace every channel with the integer channel average.
    Grayscale,
    /// Rotate 90 degrees clockwise.
    Rotate90,
    /// Rotate by `turns` quarter turns clockwise; negative counts turn
    /// counter-clockwise.
    RotateMultiple { turns: i32 },
    /// Nearest-neighbor enlargement by integer factors.
    Enlarge { x_scale: u32, y_scale: u32 },
    /// Threshold to pure black and white.
    HighContrast,
    /// Move every channel toward white by `factor`.
    Lighten { factor: f64 },
    /// Move every channel toward black by `factor`.
    Darken { factor: f64 },
    /// Quantize to black, white, red, green, or blue.
    Posterize,
}

impl Operation {
    /// Human-readable name, as shown in the menu.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Vignette => "Vignette",
            Operation::Clarendon { .. } => "Clarendon",
            Operation::Grayscale => "Grayscale",
            Operation::Rotate90 => "Rotate 90 degrees",
            Operation::RotateMultiple { .. } => "Rotate multiple 90 degrees",
            Operation::Enlarge { .. } => "Enlarge",
            Operation::HighContrast => "High contrast",
            Operation::Lighten { .. } => "Lighten",
            Operation::Darken { .. } => "Darken",
            Operation::Posterize => "Black, white, red, green, blue",
        }
    }
}

/// Apply one operation from the catalog.
pub fn apply(image: &Image, operation: &Operation) -> Result<Image, TransformError> {
    match *operation {
        Operation::Vignette => vignette(image),
        Operation::Clarendon { factor } => clarendon(image, factor),
        Operation::Grayscale => grayscale(image),
        Operation::Rotate90 => rotate90(image),
        Operation::RotateMultiple { turns } => rotate_quarter_turns(image, turns),
        Operation::Enlarge { x_scale, y_scale } => enlarge(image, x_scale, y_scale),
        Operation::HighContrast => high_contrast(image),
        Operation::Lighten { factor } => lighten(image, factor),
        Operation::Darken { factor } => darken(image, factor),
        Operation::Posterize => posterize(image),
    }
}

/// Reject degenerate grids before any pixel loop runs.
pub(crate) fn ensure_non_empty(image: &Image) -> Result<(), TransformError> {
    if image.is_empty() {
        Err(TransformError::EmptyImage)
    } else {
        Ok(())
    }
}

/// Quantize an intermediate channel value back to 8 bits.
///
/// Truncates toward zero (matching integer assignment of a float), then
/// clamps to [0, 255].
#[inline]
pub(crate) fn quantize_channel(value: f64) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> Image {
        let mut img = Image::blank(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                img.set_pixel(x, y, [(x * 40) as u8, (y * 90) as u8, 120]);
            }
        }
        img
    }

    #[test]
    fn test_apply_dispatches_every_operation() {
        let img = test_image();
        let operations = [
            Operation::Vignette,
            Operation::Clarendon { factor: 0.3 },
            Operation::Grayscale,
            Operation::Rotate90,
            Operation::RotateMultiple { turns: 2 },
            Operation::Enlarge {
                x_scale: 2,
                y_scale: 2,
            },
            Operation::HighContrast,
            Operation::Lighten { factor: 0.5 },
            Operation::Darken { factor: 0.5 },
            Operation::Posterize,
        ];

        for op in &operations {
            let result = apply(&img, op);
            assert!(result.is_ok(), "{} failed", op.name());
            assert!(!result.unwrap().is_empty());
        }
    }

    #[test]
    fn test_empty_image_rejected_by_every_operation() {
        let empty = Image::new(0, 0, vec![]);
        let operations = [
            Operation::Vignette,
            Operation::Clarendon { factor: 0.3 },
            Operation::Grayscale,
            Operation::Rotate90,
            Operation::RotateMultiple { turns: 1 },
            Operation::Enlarge {
                x_scale: 2,
                y_scale: 2,
            },
            Operation::HighContrast,
            Operation::Lighten { factor: 0.5 },
            Operation::Darken { factor: 0.5 },
            Operation::Posterize,
        ];

        for op in &operations {
            assert_eq!(
                apply(&empty, op),
                Err(TransformError::EmptyImage),
                "{} accepted an empty image",
                op.name()
            );
        }
    }

    #[test]
    fn test_transforms_do_not_mutate_input() {
        let img = test_image();
        let before = img.clone();
        let _ = apply(&img, &Operation::Grayscale).unwrap();
        let _ = apply(&img, &Operation::Rotate90).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_quantize_channel() {
        assert_eq!(quantize_channel(0.0), 0);
        assert_eq!(quantize_channel(199.9), 199); // truncation, not rounding
        assert_eq!(quantize_channel(255.0), 255);
        assert_eq!(quantize_channel(300.0), 255);
        assert_eq!(quantize_channel(-12.5), 0);
    }
}
