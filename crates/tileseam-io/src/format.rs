use std::path::Path;

use image::ImageFormat;

/// Every file extension a decoder is available for.
///
/// The list is built from the codecs compiled into the `image` crate, so it
/// follows the enabled cargo features.
pub fn decodable_extensions() -> Vec<&'static str> {
    extensions(ImageFormat::reading_enabled)
}

/// Every file extension an encoder is available for.
pub fn encodable_extensions() -> Vec<&'static str> {
    extensions(ImageFormat::writing_enabled)
}

fn extensions(enabled: fn(&ImageFormat) -> bool) -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| enabled(format))
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

/// Find the format able to decode files with the given extension.
///
/// The lookup is case insensitive.
///
/// # Example
///
/// ```
/// use tileseam_io::{format::decoder_for, ImageFormat};
///
/// assert_eq!(decoder_for("PNG"), Some(ImageFormat::Png));
/// assert_eq!(decoder_for("txt"), None);
/// ```
pub fn decoder_for(extension: &str) -> Option<ImageFormat> {
    ImageFormat::from_extension(extension).filter(ImageFormat::reading_enabled)
}

/// Find the format able to encode files with the given extension.
pub fn encoder_for(extension: &str) -> Option<ImageFormat> {
    ImageFormat::from_extension(extension).filter(ImageFormat::writing_enabled)
}

/// Extension of a path: everything after the first `.` of the file name.
///
/// # Example
///
/// ```
/// use tileseam_io::format::file_extension;
///
/// assert_eq!(file_extension("assets/v1.2/tiles.png"), Some("png"));
/// assert_eq!(file_extension("tiles.sheet.png"), Some("sheet.png"));
/// assert_eq!(file_extension("tiles"), None);
/// ```
pub fn file_extension<P: AsRef<Path> + ?Sized>(path: &P) -> Option<&str> {
    path.as_ref()
        .file_name()?
        .to_str()?
        .split_once('.')
        .map(|(_, extension)| extension)
}
