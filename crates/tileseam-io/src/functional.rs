use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel};
use tileseam_image::{Image, ImageSize};

use crate::error::IoError;

/// A generic image type that can be any of the supported pixel layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
    /// 32-bit float RGB image
    Rgb32F(Image<f32, 3>),
    /// 32-bit float RGB image with alpha channel
    Rgba32F(Image<f32, 4>),
}

macro_rules! with_image {
    ($generic:expr, $image:ident => $body:expr) => {
        match $generic {
            GenericImage::L8($image) => $body,
            GenericImage::La8($image) => $body,
            GenericImage::Rgb8($image) => $body,
            GenericImage::Rgba8($image) => $body,
            GenericImage::L16($image) => $body,
            GenericImage::La16($image) => $body,
            GenericImage::Rgb16($image) => $body,
            GenericImage::Rgba16($image) => $body,
            GenericImage::Rgb32F($image) => $body,
            GenericImage::Rgba32F($image) => $body,
        }
    };
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        with_image!(self, image => image.size())
    }

    /// Get the number of channels of the pixel layout.
    pub fn num_channels(&self) -> usize {
        with_image!(self, image => image.num_channels())
    }

    /// Short name of the pixel layout, e.g. `rgba8`.
    pub fn layout(&self) -> &'static str {
        match self {
            GenericImage::L8(_) => "l8",
            GenericImage::La8(_) => "la8",
            GenericImage::Rgb8(_) => "rgb8",
            GenericImage::Rgba8(_) => "rgba8",
            GenericImage::L16(_) => "l16",
            GenericImage::La16(_) => "la16",
            GenericImage::Rgb16(_) => "rgb16",
            GenericImage::Rgba16(_) => "rgba16",
            GenericImage::Rgb32F(_) => "rgb32f",
            GenericImage::Rgba32F(_) => "rgba32f",
        }
    }
}

impl TryFrom<DynamicImage> for GenericImage {
    type Error = IoError;

    fn try_from(img: DynamicImage) -> Result<Self, Self::Error> {
        let size = ImageSize {
            width: img.width() as usize,
            height: img.height() as usize,
        };

        let image = match img {
            DynamicImage::ImageLuma8(buf) => GenericImage::L8(Image::new(size, buf.into_raw())?),
            DynamicImage::ImageLumaA8(buf) => GenericImage::La8(Image::new(size, buf.into_raw())?),
            DynamicImage::ImageRgb8(buf) => GenericImage::Rgb8(Image::new(size, buf.into_raw())?),
            DynamicImage::ImageRgba8(buf) => {
                GenericImage::Rgba8(Image::new(size, buf.into_raw())?)
            }
            DynamicImage::ImageLuma16(buf) => GenericImage::L16(Image::new(size, buf.into_raw())?),
            DynamicImage::ImageLumaA16(buf) => {
                GenericImage::La16(Image::new(size, buf.into_raw())?)
            }
            DynamicImage::ImageRgb16(buf) => {
                GenericImage::Rgb16(Image::new(size, buf.into_raw())?)
            }
            DynamicImage::ImageRgba16(buf) => {
                GenericImage::Rgba16(Image::new(size, buf.into_raw())?)
            }
            DynamicImage::ImageRgb32F(buf) => {
                GenericImage::Rgb32F(Image::new(size, buf.into_raw())?)
            }
            DynamicImage::ImageRgba32F(buf) => {
                GenericImage::Rgba32F(Image::new(size, buf.into_raw())?)
            }
            other => {
                log::warn!(
                    "pixel layout {:?} has no direct mapping, converting to rgba8",
                    other.color()
                );
                GenericImage::Rgba8(Image::new(size, other.into_rgba8().into_raw())?)
            }
        };

        Ok(image)
    }
}

impl TryFrom<&GenericImage> for DynamicImage {
    type Error = IoError;

    fn try_from(image: &GenericImage) -> Result<Self, Self::Error> {
        let dynamic = match image {
            GenericImage::L8(img) => DynamicImage::ImageLuma8(to_buffer(img)?),
            GenericImage::La8(img) => DynamicImage::ImageLumaA8(to_buffer(img)?),
            GenericImage::Rgb8(img) => DynamicImage::ImageRgb8(to_buffer(img)?),
            GenericImage::Rgba8(img) => DynamicImage::ImageRgba8(to_buffer(img)?),
            GenericImage::L16(img) => DynamicImage::ImageLuma16(to_buffer(img)?),
            GenericImage::La16(img) => DynamicImage::ImageLumaA16(to_buffer(img)?),
            GenericImage::Rgb16(img) => DynamicImage::ImageRgb16(to_buffer(img)?),
            GenericImage::Rgba16(img) => DynamicImage::ImageRgba16(to_buffer(img)?),
            GenericImage::Rgb32F(img) => DynamicImage::ImageRgb32F(to_buffer(img)?),
            GenericImage::Rgba32F(img) => DynamicImage::ImageRgba32F(to_buffer(img)?),
        };

        Ok(dynamic)
    }
}

fn to_buffer<P, const C: usize>(
    image: &Image<P::Subpixel, C>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, IoError>
where
    P: Pixel,
{
    let [width, height]: [u32; 2] = image.size().into();
    ImageBuffer::from_raw(width, height, image.as_slice().to_vec())
        .ok_or(IoError::InvalidBuffer(image.size()))
}

/// Reads an image from the given file path.
///
/// The format is guessed from the file content, so the extension only matters
/// to the caller's own checks.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image, keeping the pixel layout of the file.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let image = GenericImage::try_from(img)?;

    log::debug!(
        "decoded {} as {} ({})",
        file_path.display(),
        image.layout(),
        image.size()
    );

    Ok(image)
}

/// Writes an image to the given file path.
///
/// The image is fully encoded in memory first, so a failed encoding never
/// leaves a partial file behind.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `image` - The image to encode.
/// * `format` - The format to encode to, see [`crate::format::encoder_for`].
pub fn write_image_any(
    file_path: impl AsRef<Path>,
    image: &GenericImage,
    format: ImageFormat,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let dynamic = DynamicImage::try_from(image)?;

    let mut bytes = std::io::Cursor::new(Vec::new());
    dynamic
        .write_to(&mut bytes, format)
        .map_err(IoError::ImageEncodeError)?;

    std::fs::write(file_path, bytes.into_inner())?;

    log::debug!(
        "encoded {} as {:?} ({})",
        file_path.display(),
        format,
        image.size()
    );

    Ok(())
}
