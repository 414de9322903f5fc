//! Core types for bitmap decoding.

use thiserror::Error;

/// Error types for bitmap decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer is too short to hold what the header describes.
    #[error("Truncated bitmap: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// The declared file size disagrees with the pixel-array geometry.
    #[error("Malformed bitmap: declared file size {declared} does not match computed size {computed}")]
    SizeMismatch { declared: u64, computed: u64 },

    /// Only uncompressed 24-bit and 32-bit bitmaps are supported.
    #[error("Unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// A decoded image with RGB pixel data.
///
/// Rows are indexed top-to-bottom regardless of the bottom-up storage
/// order used on disk. Every decode and every transform produces a fresh
/// `Image`; nothing mutates one in place after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create a new Image with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an all-black image of the given dimensions.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 3],
        }
    }

    /// Get the RGB triple at column `x`, row `y` (origin top-left).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Set the RGB triple at column `x`, row `y`.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = ((y * self.width + x) * 3) as usize;
        self.pixels[idx] = rgb[0];
        self.pixels[idx + 1] = rgb[1];
        self.pixels[idx + 2] = rgb[2];
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let img = Image::new(100, 50, pixels);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_image_empty() {
        let img = Image::new(0, 0, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_pixel_accessors() {
        let mut img = Image::blank(4, 3);
        img.set_pixel(2, 1, [10, 20, 30]);

        assert_eq!(img.pixel(2, 1), [10, 20, 30]);
        assert_eq!(img.pixel(0, 0), [0, 0, 0]);

        // Flat buffer index: row 1, column 2
        let idx = (4 + 2) * 3;
        assert_eq!(&img.pixels[idx..idx + 3], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::SizeMismatch {
            declared: 100,
            computed: 154,
        };
        assert_eq!(
            err.to_string(),
            "Malformed bitmap: declared file size 100 does not match computed size 154"
        );

        let err = DecodeError::UnsupportedBitDepth(8);
        assert_eq!(err.to_string(), "Unsupported bit depth: 8 bits per pixel");
    }
}
