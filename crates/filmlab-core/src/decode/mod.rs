//! Bitmap decoding for Filmlab.
//!
//! This module provides functionality for:
//! - Decoding uncompressed 24-bit and 32-bit BMP byte streams
//! - Reading BMP files from disk
//!
//! # Architecture
//!
//! Decoding is synchronous and single-threaded. Each call parses the byte
//! stream fresh and produces a new [`Image`]; nothing is cached or shared
//! between calls.
//!
//! # Examples
//!
//! ```ignore
//! use filmlab_core::decode::{decode_bmp, Image};
//!
//! let bytes = std::fs::read("photo.bmp").unwrap();
//! let image = decode_bmp(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod bmp;
mod types;

pub use bmp::{decode_bmp, read_bmp};
pub use types::{DecodeError, Image};
