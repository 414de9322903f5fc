//! Uncompressed BMP decoding.
//!
//! Header fields are read by absolute byte offset, little-endian, so the
//! parse never depends on a running stream position. Pixel rows are stored
//! bottom-to-top on disk in blue-green-red order; decoding flips them into
//! the top-to-bottom, RGB in-memory layout of [`Image`].

use std::path::Path;

use log::debug;

use super::types::{DecodeError, Image};

/// Byte offsets of the header fields consumed during decoding.
const FILE_SIZE_OFFSET: usize = 2;
const PIXEL_ARRAY_OFFSET: usize = 10;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const BITS_PER_PIXEL_OFFSET: usize = 28;

/// Smallest buffer that can hold the BMP and DIB headers.
const HEADER_BYTES: usize = 54;

/// Read a little-endian u32 at an absolute offset.
#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Read a little-endian u16 at an absolute offset.
#[inline]
fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Decode an uncompressed 24-bit or 32-bit BMP byte stream.
///
/// # Validation
///
/// The declared file size must equal
/// `pixel_array_start + (scanline_bytes + padding) * height`. A mismatch
/// returns [`DecodeError::SizeMismatch`]; malformed or truncated input is
/// always a recoverable error value, never a panic.
///
/// # Channel handling
///
/// Pixels are read blue-green-red. For 32-bit input the fourth (alpha)
/// byte is discarded.
pub fn decode_bmp(bytes: &[u8]) -> Result<Image, DecodeError> {
    if bytes.len() < HEADER_BYTES {
        return Err(DecodeError::Truncated {
            needed: HEADER_BYTES,
            actual: bytes.len(),
        });
    }

    let file_size = read_u32_le(bytes, FILE_SIZE_OFFSET);
    let start = read_u32_le(bytes, PIXEL_ARRAY_OFFSET) as u64;
    let width = read_u32_le(bytes, WIDTH_OFFSET);
    let height = read_u32_le(bytes, HEIGHT_OFFSET);
    let bits_per_pixel = read_u16_le(bytes, BITS_PER_PIXEL_OFFSET);

    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(DecodeError::UnsupportedBitDepth(bits_per_pixel));
    }

    let bytes_per_pixel = (bits_per_pixel / 8) as u64;
    // Scan lines must occupy multiples of four bytes.
    let scanline_bytes = width as u64 * bytes_per_pixel;
    let padding = (4 - scanline_bytes % 4) % 4;
    let stride = scanline_bytes + padding;

    let computed = start + stride * height as u64;
    if file_size as u64 != computed {
        return Err(DecodeError::SizeMismatch {
            declared: file_size as u64,
            computed,
        });
    }
    if (bytes.len() as u64) < computed {
        return Err(DecodeError::Truncated {
            needed: computed as usize,
            actual: bytes.len(),
        });
    }

    let mut image = Image::blank(width, height);

    // BMP rows run bottom-to-top; destination row 0 is the top of the image.
    for row in 0..height {
        let disk_row = height - 1 - row;
        let row_start = start + disk_row as u64 * stride;
        for col in 0..width {
            let offset = (row_start + col as u64 * bytes_per_pixel) as usize;
            let blue = bytes[offset];
            let green = bytes[offset + 1];
            let red = bytes[offset + 2];
            image.set_pixel(col, row, [red, green, blue]);
        }
    }

    debug!("Decoded {}x{} {}-bit bitmap", width, height, bits_per_pixel);
    Ok(image)
}

/// Read and decode a BMP file from disk.
pub fn read_bmp<P: AsRef<Path>>(path: P) -> Result<Image, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::IoError(e.to_string()))?;
    decode_bmp(&bytes)
}
