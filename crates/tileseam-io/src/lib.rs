#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures
/// and image construction.
pub mod error;

/// Registry of the codecs available for reading and writing.
///
/// Formats are looked up by file extension, see [`format::decoder_for`] and
/// [`format::encoder_for`].
pub mod format;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_any`] for content based decoding.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::GenericImage;
pub use image::ImageFormat;
