#![deny(missing_docs)]
//! Pixel buffer types for 8-bit four channel images

/// strided pixel buffer representation.
pub mod image;

/// colours and channel byte orders.
pub mod color;

/// Error types for the image module.
pub mod error;

pub use crate::color::{PixelFormat, Rgba8};
pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer, CHANNELS};
