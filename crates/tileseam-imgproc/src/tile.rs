use tileseam_image::{ImageError, ImageSize};

/// Width of the border added on every side of a tile.
pub const BORDER: usize = 1;

/// Nominal size of a tile in pixels.
///
/// Both dimensions are at least one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSize {
    width: usize,
    height: usize,
}

impl TileSize {
    /// Create a new tile size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidTileSize`] if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidTileSize(width, height));
        }
        Ok(Self { width, height })
    }

    /// Create a square tile size.
    pub fn square(side: usize) -> Result<Self, ImageError> {
        Self::new(side, side)
    }

    /// Tile width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Tile height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis aligned rectangle in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left column.
    pub x: usize,
    /// Top row.
    pub y: usize,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

/// The grid of tiles covering an image.
///
/// The grid is a view computed from the image size and the tile size. Tiles on
/// the right and bottom edges are clipped when the image size is not a multiple
/// of the tile size.
///
/// # Example
///
/// ```
/// use tileseam_image::ImageSize;
/// use tileseam_imgproc::tile::{TileGrid, TileSize};
///
/// let grid = TileGrid::new(
///     ImageSize { width: 5, height: 4 },
///     TileSize::square(2).unwrap(),
/// );
///
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.tile_rect(2, 0).width, 1);
/// assert_eq!(grid.padded_size(), ImageSize { width: 11, height: 8 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGrid {
    image: ImageSize,
    tile: TileSize,
}

impl TileGrid {
    /// Create the grid for an image of the given size.
    pub fn new(image: ImageSize, tile: TileSize) -> Self {
        Self { image, tile }
    }

    /// Nominal tile size.
    pub fn tile_size(&self) -> TileSize {
        self.tile
    }

    /// Number of tile columns, counting a clipped last column.
    pub fn cols(&self) -> usize {
        self.image.width.div_ceil(self.tile.width)
    }

    /// Number of tile rows, counting a clipped last row.
    pub fn rows(&self) -> usize {
        self.image.height.div_ceil(self.tile.height)
    }

    /// Width of the tiles in column `col`.
    pub fn tile_width(&self, col: usize) -> usize {
        clipped_extent(col, self.tile.width, self.image.width)
    }

    /// Height of the tiles in row `row`.
    pub fn tile_height(&self, row: usize) -> usize {
        clipped_extent(row, self.tile.height, self.image.height)
    }

    /// Source rectangle covered by the tile at `(col, row)`.
    pub fn tile_rect(&self, col: usize, row: usize) -> Rect {
        Rect {
            x: col * self.tile.width,
            y: row * self.tile.height,
            width: self.tile_width(col),
            height: self.tile_height(row),
        }
    }

    /// Top-left corner of the padded cell `(col, row)` in the destination.
    ///
    /// The tile itself starts one pixel to the right and below this corner.
    pub fn cell_origin(&self, col: usize, row: usize) -> (usize, usize) {
        (
            col * (self.tile.width + 2 * BORDER),
            row * (self.tile.height + 2 * BORDER),
        )
    }

    /// Size of the image once every tile received its border.
    pub fn padded_size(&self) -> ImageSize {
        ImageSize {
            width: self.image.width + 2 * BORDER * self.cols(),
            height: self.image.height + 2 * BORDER * self.rows(),
        }
    }

    /// Map a source coordinate to its destination in the padded image.
    pub fn padded_position(&self, x: usize, y: usize) -> (usize, usize) {
        (
            x + BORDER + 2 * BORDER * (x / self.tile.width),
            y + BORDER + 2 * BORDER * (y / self.tile.height),
        )
    }
}

fn clipped_extent(index: usize, nominal: usize, total: usize) -> usize {
    let start = index * nominal;
    if start >= total {
        return 0;
    }
    nominal.min(total - start)
}
