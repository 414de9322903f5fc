//! Filmlab Core - BMP image processing library
//!
//! This crate provides the core image processing functionality for
//! Filmlab: a codec for uncompressed BMP files and a catalog of ten pure
//! pixel and geometric transforms.
//!
//! # Pipeline
//!
//! ```ignore
//! use filmlab_core::{decode_bmp, encode_bmp, transform};
//!
//! let bytes = std::fs::read("in.bmp")?;
//! let image = decode_bmp(&bytes)?;
//! let result = transform::apply(&image, &transform::Operation::Grayscale)?;
//! std::fs::write("out.bmp", encode_bmp(&result)?)?;
//! ```
//!
//! Every stage produces a fresh [`Image`]; nothing is shared or mutated
//! in place, so decode, transform, and encode compose freely.

pub mod decode;
pub mod encode;
pub mod transform;

pub use decode::{decode_bmp, read_bmp, DecodeError, Image};
pub use encode::{encode_bmp, write_bmp, EncodeError};
pub use transform::{apply, Operation, TransformError};
