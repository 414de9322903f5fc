//! Bitmap encoding for Filmlab.
//!
//! This module provides functionality for:
//! - Encoding images as uncompressed 24-bit BMP byte streams
//! - Writing BMP files to disk
//!
//! # Examples
//!
//! ```ignore
//! use filmlab_core::decode::Image;
//! use filmlab_core::encode::encode_bmp;
//!
//! let image = Image::blank(100, 100);
//! let bytes = encode_bmp(&image).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod bmp;

pub use bmp::{encode_bmp, write_bmp, EncodeError};
