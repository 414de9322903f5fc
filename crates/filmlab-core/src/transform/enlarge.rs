//! Nearest-neighbor enlargement by integer factors.

use crate::decode::Image;

use super::{ensure_non_empty, TransformError};

/// Enlarge an image by integer scale factors.
///
/// The output shape is (width * x_scale, height * y_scale) and each
/// output pixel replicates `input[y / y_scale][x / x_scale]` — plain
/// nearest-neighbor replication, no interpolation. Scales of 1 in both
/// directions make this the identity transform; a zero scale is rejected.
pub fn enlarge(image: &Image, x_scale: u32, y_scale: u32) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;
    if x_scale == 0 || y_scale == 0 {
        return Err(TransformError::InvalidScale { x_scale, y_scale });
    }

    let width = image.width * x_scale;
    let height = image.height * y_scale;

    let mut out = Image::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            out.set_pixel(x, y, image.pixel(x / x_scale, y / y_scale));
        }
    }
    Ok(out)
}
