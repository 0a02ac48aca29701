#![deny(missing_docs)]
//! Image types used by the tile padding pipeline.

/// image representation for spritesheet processing.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
