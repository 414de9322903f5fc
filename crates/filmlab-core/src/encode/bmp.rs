//! Uncompressed 24-bit BMP encoding.
//!
//! The encoder always emits 24 bits per pixel regardless of the bit depth
//! of whatever the image was decoded from. Rows are written bottom-to-top
//! in blue-green-red order, each scanline zero-padded to a multiple of
//! four bytes.

use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::decode::Image;

const BMP_HEADER_SIZE: usize = 14;
const DIB_HEADER_SIZE: usize = 40;
/// Offset of the pixel array: the two headers are written back to back.
const PIXEL_ARRAY_START: usize = BMP_HEADER_SIZE + DIB_HEADER_SIZE;
/// Print resolution written into the DIB header (2835 px/m ~ 72 DPI).
const PRINT_RESOLUTION: u32 = 2835;

/// Errors that can occur during BMP encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The image has zero width or zero height.
    #[error("Cannot encode an empty image")]
    EmptyImage,

    /// The destination could not be opened or written.
    #[error("I/O error: {0}")]
    IoError(String),
}

#[inline]
fn put_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn put_u16_le(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Encode an image as an uncompressed 24-bit BMP byte stream.
///
/// For any non-empty image this cannot fail, and decoding the result
/// yields the image back pixel-for-pixel.
pub fn encode_bmp(image: &Image) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::EmptyImage);
    }

    let width = image.width as usize;
    let height = image.height as usize;

    // Scan lines must occupy multiples of four bytes.
    let scanline_bytes = width * 3;
    let padding = (4 - scanline_bytes % 4) % 4;
    let array_bytes = (scanline_bytes + padding) * height;
    let file_size = PIXEL_ARRAY_START + array_bytes;

    let mut out = vec![0u8; PIXEL_ARRAY_START];
    out.reserve(array_bytes);

    // BMP header
    out[0] = b'B';
    out[1] = b'M';
    put_u32_le(&mut out, 2, file_size as u32);
    // Bytes 6-9 are reserved and stay zero
    put_u32_le(&mut out, 10, PIXEL_ARRAY_START as u32);

    // DIB header
    put_u32_le(&mut out, 14, DIB_HEADER_SIZE as u32);
    put_u32_le(&mut out, 18, image.width);
    put_u32_le(&mut out, 22, image.height);
    put_u16_le(&mut out, 26, 1); // color planes
    put_u16_le(&mut out, 28, 24); // bits per pixel
    put_u32_le(&mut out, 30, 0); // compression (0 = BI_RGB)
    put_u32_le(&mut out, 34, array_bytes as u32);
    put_u32_le(&mut out, 38, PRINT_RESOLUTION);
    put_u32_le(&mut out, 42, PRINT_RESOLUTION);
    put_u32_le(&mut out, 46, 0); // palette colors
    put_u32_le(&mut out, 50, 0); // important colors

    // Pixel array: bottom row first, blue-green-red
    for row in (0..height).rev() {
        for col in 0..width {
            let [r, g, b] = image.pixel(col as u32, row as u32);
            out.push(b);
            out.push(g);
            out.push(r);
        }
        out.extend(std::iter::repeat(0u8).take(padding));
    }

    debug!(
        "Encoded {}x{} image into {} bytes",
        image.width,
        image.height,
        out.len()
    );
    Ok(out)
}

/// Encode an image and write it to a BMP file.
///
/// Destination availability is the only failure mode for a non-empty
/// image; a write failure happens before any bytes are committed.
pub fn write_bmp<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), EncodeError> {
    let bytes = encode_bmp(image)?;
    std::fs::write(path, bytes).map_err(|e| EncodeError::IoError(e.to_string()))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
