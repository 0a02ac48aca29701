//! Seam-free spritesheets.
//!
//! Every tile of a spritesheet receives a one pixel border copied from its own
//! edge pixels, so texture filtering near a tile edge never samples the
//! neighbouring tile.
//!
//! ```
//! use tileseam::image::{Image, ImageSize};
//! use tileseam::imgproc::{seam::pad_tiles, tile::TileSize};
//!
//! let sheet = Image::<u8, 1>::new(ImageSize { width: 4, height: 4 }, vec![7; 16]).unwrap();
//! let padded = pad_tiles(&sheet, TileSize::square(2).unwrap()).unwrap();
//!
//! assert_eq!(padded.size(), ImageSize { width: 8, height: 8 });
//! ```

#[doc(inline)]
pub use tileseam_image as image;

#[doc(inline)]
pub use tileseam_imgproc as imgproc;

#[doc(inline)]
pub use tileseam_io as io;
