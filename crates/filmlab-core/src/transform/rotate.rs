//! Quarter-turn rotations.
//!
//! A single clockwise quarter turn maps input row `r`, column `c` to
//! output row `c`, column `height - 1 - r`, transposing the image shape.
//! Multi-turn rotation normalizes the count with `rem_euclid(4)` so
//! negative counts turn counter-clockwise instead of hitting
//! platform-specific modulo behavior.

use crate::decode::Image;

use super::{ensure_non_empty, TransformError};

/// Rotate 90 degrees clockwise. The output shape is (width, height)
/// transposed.
pub fn rotate90(image: &Image) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.height, image.width);
    for y in 0..image.height {
        for x in 0..image.width {
            out.set_pixel(image.height - 1 - y, x, image.pixel(x, y));
        }
    }
    Ok(out)
}

/// Rotate by `turns` clockwise quarter turns.
///
/// `turns` is reduced modulo 4 with Euclidean semantics, so -1 behaves
/// as 3 and any multiple of 4 is the identity.
pub fn rotate_quarter_turns(image: &Image, turns: i32) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut result = image.clone();
    for _ in 0..turns.rem_euclid(4) {
        result = rotate90(&result)?;
    }
    Ok(result)
}
