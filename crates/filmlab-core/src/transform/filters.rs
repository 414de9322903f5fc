//! Per-pixel filters: vignette, clarendon, grayscale, high contrast,
//! lighten, darken, and five-color posterize.
//!
//! All seven keep the input shape and touch each pixel independently.
//! Channel averages use integer division and fractional results are
//! truncated toward zero, matching the classic filter arithmetic.

use crate::decode::Image;

use super::{ensure_non_empty, quantize_channel, TransformError};

/// Apply one scalar function to all three channels of a pixel.
#[inline]
fn map_rgb(rgb: [u8; 3], f: impl Fn(f64) -> f64) -> [u8; 3] {
    [
        quantize_channel(f(rgb[0] as f64)),
        quantize_channel(f(rgb[1] as f64)),
        quantize_channel(f(rgb[2] as f64)),
    ]
}

/// Integer average of the three channels.
#[inline]
fn channel_average(rgb: [u8; 3]) -> u32 {
    (rgb[0] as u32 + rgb[1] as u32 + rgb[2] as u32) / 3
}

/// Darken pixels toward the corners.
///
/// The scale for a pixel is `(width - distance) / width` where `distance`
/// is the Euclidean distance to the center point. The center inherits a
/// width/height swap from the original filter definition: columns are
/// measured against `height / 2` and rows against `width / 2`. Kept
/// verbatim for bit compatibility; see DESIGN.md.
pub fn vignette(image: &Image) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let width = image.width;
    let height = image.height;
    let center_x = (height / 2) as f64;
    let center_y = (width / 2) as f64;

    let mut out = Image::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f64 - center_x;
            let dy = y as f64 - center_y;
            let distance = (dx * dx + dy * dy).sqrt();
            let scale = (width as f64 - distance) / width as f64;

            out.set_pixel(x, y, map_rgb(image.pixel(x, y), |c| c * scale));
        }
    }
    Ok(out)
}

/// Darks darker and lights lighter.
///
/// Pixels with an integer channel average of at least 170 are pulled
/// toward white, pixels averaging below 90 are pulled toward black, and
/// everything in between passes through unchanged. `factor` is the
/// caller-supplied strength (typical 0.3).
pub fn clarendon(image: &Image, factor: f64) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let rgb = image.pixel(x, y);
            let average = channel_average(rgb);

            let result = if average >= 170 {
                map_rgb(rgb, |c| 255.0 - (255.0 - c) * factor)
            } else if average < 90 {
                map_rgb(rgb, |c| c * factor)
            } else {
                rgb
            };
            out.set_pixel(x, y, result);
        }
    }
    Ok(out)
}

/// Replace every channel with the integer channel average.
pub fn grayscale(image: &Image) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let gray = channel_average(image.pixel(x, y)) as u8;
            out.set_pixel(x, y, [gray, gray, gray]);
        }
    }
    Ok(out)
}

/// Threshold to pure black and white at an average of 127 (255/2).
pub fn high_contrast(image: &Image) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let rgb = if channel_average(image.pixel(x, y)) >= 255 / 2 {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            };
            out.set_pixel(x, y, rgb);
        }
    }
    Ok(out)
}

/// Move every channel toward white: `255 - (255 - c) * factor`.
///
/// Unlike [`clarendon`] this applies uniformly, with no brightness branch.
pub fn lighten(image: &Image, factor: f64) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            out.set_pixel(
                x,
                y,
                map_rgb(image.pixel(x, y), |c| 255.0 - (255.0 - c) * factor),
            );
        }
    }
    Ok(out)
}

/// Move every channel toward black: `c * factor`.
pub fn darken(image: &Image, factor: f64) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            out.set_pixel(x, y, map_rgb(image.pixel(x, y), |c| c * factor));
        }
    }
    Ok(out)
}

/// Quantize every pixel to black, white, red, green, or blue.
///
/// Channel sums of 550 and above go white, 150 and below go black.
/// Otherwise the strictly greatest channel wins, with blue as the
/// tie-break default.
pub fn posterize(image: &Image) -> Result<Image, TransformError> {
    ensure_non_empty(image)?;

    let mut out = Image::blank(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = image.pixel(x, y);
            let color_sum = r as u32 + g as u32 + b as u32;

            let result = if color_sum >= 550 {
                [255, 255, 255]
            } else if color_sum <= 150 {
                [0, 0, 0]
            } else if r > g && r > b {
                [255, 0, 0]
            } else if g > r && g > b {
                [0, 255, 0]
            } else {
                [0, 0, 255]
            };
            out.set_pixel(x, y, result);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Image {
        let mut img = Image::blank(width, height);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(x, y, rgb);
            }
        }
        img
    }

    #[test]
    fn test_grayscale_integer_average() {
        let img = solid(1, 1, [10, 20, 40]);
        let result = grayscale(&img).unwrap();
        // (10 + 20 + 40) / 3 = 23 with integer division
        assert_eq!(result.pixel(0, 0), [23, 23, 23]);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut img = Image::blank(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                img.set_pixel(x, y, [(x * 60) as u8, (y * 60) as u8, 200]);
            }
        }
        let once = grayscale(&img).unwrap();
        let twice = grayscale(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_high_contrast_threshold() {
        // Average 126 -> black, 127 -> white
        let dark = solid(1, 1, [126, 126, 126]);
        assert_eq!(high_contrast(&dark).unwrap().pixel(0, 0), [0, 0, 0]);

        let light = solid(1, 1, [127, 127, 127]);
        assert_eq!(high_contrast(&light).unwrap().pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_high_contrast_idempotent_and_binary() {
        let mut img = Image::blank(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                img.set_pixel(x, y, [(x * 100) as u8, (y * 100) as u8, 77]);
            }
        }
        let once = high_contrast(&img).unwrap();
        let twice = high_contrast(&once).unwrap();
        assert_eq!(once, twice);
        for &channel in &once.pixels {
            assert!(channel == 0 || channel == 255);
        }
    }

    #[test]
    fn test_clarendon_branches() {
        // Bright pixel: 255 - (255 - 200) * 0.3 = 238.5 -> 238
        let bright = solid(1, 1, [200, 200, 200]);
        assert_eq!(
            clarendon(&bright, 0.3).unwrap().pixel(0, 0),
            [238, 238, 238]
        );

        // Dark pixel: 30 * 0.3 = 9
        let dark = solid(1, 1, [30, 30, 30]);
        assert_eq!(clarendon(&dark, 0.3).unwrap().pixel(0, 0), [9, 9, 9]);

        // Midtone pixel passes through unchanged
        let mid = solid(1, 1, [120, 130, 140]);
        assert_eq!(clarendon(&mid, 0.3).unwrap().pixel(0, 0), [120, 130, 140]);
    }

    #[test]
    fn test_clarendon_boundary_averages() {
        // Average exactly 170 takes the lighten branch
        let at_170 = solid(1, 1, [170, 170, 170]);
        // 255 - (255 - 170) * 0.3 = 229.5 -> 229
        assert_eq!(clarendon(&at_170, 0.3).unwrap().pixel(0, 0), [229, 229, 229]);

        // Average exactly 90 is a midtone
        let at_90 = solid(1, 1, [90, 90, 90]);
        assert_eq!(clarendon(&at_90, 0.3).unwrap().pixel(0, 0), [90, 90, 90]);
    }

    #[test]
    fn test_lighten_values() {
        // 255 - (255 - 100) * 0.5 = 177.5 -> 177
        let img = solid(1, 1, [100, 0, 255]);
        assert_eq!(lighten(&img, 0.5).unwrap().pixel(0, 0), [177, 127, 255]);

        // Factor 1.0 is the identity
        assert_eq!(lighten(&img, 1.0).unwrap().pixel(0, 0), [100, 0, 255]);
    }

    #[test]
    fn test_darken_values() {
        // 101 * 0.5 = 50.5 -> 50
        let img = solid(1, 1, [101, 255, 0]);
        assert_eq!(darken(&img, 0.5).unwrap().pixel(0, 0), [50, 127, 0]);

        // Factor 0.0 blacks everything out
        assert_eq!(darken(&img, 0.0).unwrap().pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_vignette_center_unscaled() {
        // 3x3: center point is (1, 1), distance 0, scale 1
        let img = solid(3, 3, [200, 100, 50]);
        let result = vignette(&img).unwrap();
        assert_eq!(result.pixel(1, 1), [200, 100, 50]);
    }

    #[test]
    fn test_vignette_corner_darkened() {
        let img = solid(3, 3, [200, 200, 200]);
        let result = vignette(&img).unwrap();
        // Corner distance sqrt(2); scale (3 - sqrt(2)) / 3; 200 * scale
        // = 105.719... -> 105 after truncation
        assert_eq!(result.pixel(0, 0), [105, 105, 105]);
    }

    #[test]
    fn test_vignette_center_axis_swap() {
        // 4x2: the inherited swap puts the center at column height/2 = 1,
        // row width/2 = 2 (off the bottom edge for this shape)
        let img = solid(4, 2, [100, 100, 100]);
        let result = vignette(&img).unwrap();

        // Pixel (1, 0): distance 2, scale (4 - 2) / 4 = 0.5
        assert_eq!(result.pixel(1, 0), [50, 50, 50]);
        // Pixel (0, 0): distance sqrt(5), scale (4 - sqrt(5)) / 4,
        // 100 * scale = 44.09... -> 44
        assert_eq!(result.pixel(0, 0), [44, 44, 44]);
    }

    #[test]
    fn test_posterize_classes() {
        // Sum 220, red strictly greatest
        let red = solid(1, 1, [200, 10, 10]);
        assert_eq!(posterize(&red).unwrap().pixel(0, 0), [255, 0, 0]);

        // Sum 750 >= 550
        let white = solid(1, 1, [250, 250, 250]);
        assert_eq!(posterize(&white).unwrap().pixel(0, 0), [255, 255, 255]);

        // Sum exactly 150 <= 150
        let black = solid(1, 1, [50, 50, 50]);
        assert_eq!(posterize(&black).unwrap().pixel(0, 0), [0, 0, 0]);

        // Green strictly greatest
        let green = solid(1, 1, [100, 150, 140]);
        assert_eq!(posterize(&green).unwrap().pixel(0, 0), [0, 255, 0]);

        // Green ties blue: falls through to blue
        let tie = solid(1, 1, [100, 150, 150]);
        assert_eq!(posterize(&tie).unwrap().pixel(0, 0), [0, 0, 255]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
