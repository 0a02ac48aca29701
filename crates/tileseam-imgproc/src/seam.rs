use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};
use tileseam_image::{Image, ImageError, ImageSize};

use crate::tile::{TileGrid, TileSize};

/// Compute the size of an image after every tile received a 1 pixel border.
///
/// # Example
///
/// ```
/// use tileseam_image::ImageSize;
/// use tileseam_imgproc::{seam::padded_size, tile::TileSize};
///
/// let size = padded_size(
///     ImageSize { width: 64, height: 30 },
///     TileSize::new(16, 16).unwrap(),
/// );
///
/// assert_eq!(size, ImageSize { width: 72, height: 34 });
/// ```
pub fn padded_size(size: ImageSize, tile: TileSize) -> ImageSize {
    TileGrid::new(size, tile).padded_size()
}

/// Add a border to every tile of a spritesheet, duplicating the tile edges.
///
/// Each tile is moved into its own cell of `(tile_width + 2) x (tile_height + 2)`
/// pixels and the outermost rows and columns of the tile are copied one pixel
/// outwards. Corners receive the diagonal corner pixel of the tile. Clipped
/// tiles on the right and bottom edges keep their true size.
///
/// # Arguments
///
/// * `src` - The spritesheet to fix.
/// * `tile` - The nominal tile size.
///
/// # Returns
///
/// A new image of size [`padded_size`] with the same pixel layout as `src`.
///
/// # Example
///
/// ```
/// use tileseam_image::{Image, ImageSize};
/// use tileseam_imgproc::{seam::pad_tiles, tile::TileSize};
///
/// let src = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![10, 20],
/// ).unwrap();
///
/// let dst = pad_tiles(&src, TileSize::square(1).unwrap()).unwrap();
///
/// assert_eq!(dst.size(), ImageSize { width: 6, height: 3 });
/// assert_eq!(dst.as_slice(), &[
///     10, 10, 10, 20, 20, 20,
///     10, 10, 10, 20, 20, 20,
///     10, 10, 10, 20, 20, 20,
/// ]);
/// ```
pub fn pad_tiles<T, const C: usize>(
    src: &Image<T, C>,
    tile: TileSize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let mut dst = Image::from_size_val(padded_size(src.size(), tile), T::default())?;
    pad_tiles_into(src, &mut dst, tile)?;
    Ok(dst)
}

/// Same as [`pad_tiles`] but writes into a preallocated destination.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `dst` does not have the size
/// returned by [`padded_size`].
pub fn pad_tiles_into<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    tile: TileSize,
) -> Result<(), ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let grid = TileGrid::new(src.size(), tile);
    let expected = grid.padded_size();

    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    log::debug!(
        "padding {} tiles of {} ({}x{} grid) into {}",
        grid.cols() * grid.rows(),
        tile,
        grid.cols(),
        grid.rows(),
        expected
    );

    // pixels outside any tile or border keep the background value
    dst.as_slice_mut().fill(T::default());

    if dst.width() == 0 || dst.height() == 0 {
        return Ok(());
    }

    place_tiles(src, dst, &grid);

    // the row pass reads the columns written here to fill the corners
    replicate_columns(dst, &grid);
    replicate_rows(dst, &grid);

    Ok(())
}

/// Source row feeding the destination row `dst_y`, `None` for border rows.
fn source_row(grid: &TileGrid, dst_y: usize) -> Option<usize> {
    let tile_height = grid.tile_size().height();
    let cell = dst_y / (tile_height + 2);
    let local = dst_y % (tile_height + 2);

    if local == 0 || local > grid.tile_height(cell) {
        return None;
    }

    Some(cell * tile_height + local - 1)
}

fn place_tiles<T, const C: usize>(src: &Image<T, C>, dst: &mut Image<T, C>, grid: &TileGrid)
where
    T: Copy + Send + Sync,
{
    let src_stride = src.cols() * C;
    let dst_stride = dst.cols() * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_stride)
        .enumerate()
        .for_each(|(dst_y, dst_row)| {
            let Some(src_y) = source_row(grid, dst_y) else {
                return;
            };
            let src_row = &src_data[src_y * src_stride..(src_y + 1) * src_stride];

            for col in 0..grid.cols() {
                let rect = grid.tile_rect(col, 0);
                let (cell_x, _) = grid.cell_origin(col, 0);

                let src_span = rect.x * C..(rect.x + rect.width) * C;
                let dst_x = (cell_x + 1) * C;

                dst_row[dst_x..dst_x + src_span.len()].copy_from_slice(&src_row[src_span]);
            }
        });
}

fn replicate_columns<T, const C: usize>(dst: &mut Image<T, C>, grid: &TileGrid)
where
    T: Copy + Send + Sync,
{
    let stride = dst.cols() * C;

    dst.as_slice_mut()
        .par_chunks_exact_mut(stride)
        .for_each(|row| {
            for col in 0..grid.cols() {
                let (x0, _) = grid.cell_origin(col, 0);
                let width = grid.tile_width(col);

                // left border from the first tile column
                row.copy_within((x0 + 1) * C..(x0 + 2) * C, x0 * C);

                // right border from the last tile column
                row.copy_within(
                    (x0 + width) * C..(x0 + width + 1) * C,
                    (x0 + width + 1) * C,
                );
            }
        });
}

fn replicate_rows<T, const C: usize>(dst: &mut Image<T, C>, grid: &TileGrid)
where
    T: Copy,
{
    let stride = dst.cols() * C;
    let data = dst.as_slice_mut();

    for row in 0..grid.rows() {
        let (_, y0) = grid.cell_origin(0, row);
        let height = grid.tile_height(row);

        data.copy_within((y0 + 1) * stride..(y0 + 2) * stride, y0 * stride);
        data.copy_within(
            (y0 + height) * stride..(y0 + height + 1) * stride,
            (y0 + height + 1) * stride,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(width: usize, height: usize) -> TileSize {
        TileSize::new(width, height).unwrap()
    }

    #[test]
    fn test_pad_tiles_single_color() -> Result<(), ImageError> {
        let color = [200u8, 30, 60, 255];
        let src = Image::<u8, 4>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            color.repeat(16),
        )?;

        let dst = pad_tiles(&src, tile(2, 2))?;

        assert_eq!(dst.size(), ImageSize { width: 8, height: 8 });
        for px in dst.as_slice().chunks_exact(4) {
            assert_eq!(px, &color);
        }

        Ok(())
    }

    #[test]
    fn test_pad_tiles_2x2_blocks() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = Image::<u8, 1>::new(
            ImageSize { width: 4, height: 4 },
            vec![
                1, 2, 3, 4,
                5, 6, 7, 8,
                9, 10, 11, 12,
                13, 14, 15, 16,
            ],
        )?;

        let dst = pad_tiles(&src, tile(2, 2))?;

        #[rustfmt::skip]
        let expected = vec![
            1, 1, 2, 2, 3, 3, 4, 4,
            1, 1, 2, 2, 3, 3, 4, 4,
            5, 5, 6, 6, 7, 7, 8, 8,
            5, 5, 6, 6, 7, 7, 8, 8,
            9, 9, 10, 10, 11, 11, 12, 12,
            9, 9, 10, 10, 11, 11, 12, 12,
            13, 13, 14, 14, 15, 15, 16, 16,
            13, 13, 14, 14, 15, 15, 16, 16,
        ];
        assert_eq!(dst.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_pad_tiles_clipped_column() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = Image::<u8, 1>::new(
            ImageSize { width: 3, height: 2 },
            vec![
                1, 2, 3,
                4, 5, 6,
            ],
        )?;

        let dst = pad_tiles(&src, tile(2, 2))?;

        assert_eq!(dst.size(), ImageSize { width: 7, height: 4 });

        #[rustfmt::skip]
        let expected = vec![
            1, 1, 2, 2, 3, 3, 3,
            1, 1, 2, 2, 3, 3, 3,
            4, 4, 5, 5, 6, 6, 6,
            4, 4, 5, 5, 6, 6, 6,
        ];
        assert_eq!(dst.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_pad_tiles_unit_tiles() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;

        let dst = pad_tiles(&src, tile(1, 1))?;

        assert_eq!(dst.size(), ImageSize { width: 6, height: 6 });
        for y in 0..6 {
            for x in 0..6 {
                let expected = 1 + (x / 3) + 2 * (y / 3);
                assert_eq!(*dst.get_pixel(x, y, 0)?, expected as u8);
            }
        }

        Ok(())
    }

    #[test]
    fn test_pad_tiles_tile_larger_than_image() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new([2, 1].into(), vec![7, 9])?;

        let dst = pad_tiles(&src, tile(32, 32))?;

        assert_eq!(dst.size(), ImageSize { width: 4, height: 3 });
        assert_eq!(dst.as_slice(), &[7, 7, 9, 9, 7, 7, 9, 9, 7, 7, 9, 9]);

        Ok(())
    }

    #[test]
    fn test_pad_tiles_rectangular_tiles() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = Image::<u8, 1>::new(
            ImageSize { width: 2, height: 2 },
            vec![
                1, 2,
                3, 4,
            ],
        )?;

        let dst = pad_tiles(&src, tile(2, 1))?;

        #[rustfmt::skip]
        let expected = vec![
            1, 1, 2, 2,
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ];
        assert_eq!(dst.size(), ImageSize { width: 4, height: 6 });
        assert_eq!(dst.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn test_pad_tiles_keeps_layout() -> Result<(), ImageError> {
        let src = Image::<u16, 2>::new([3, 1].into(), vec![1, 65535, 2, 0, 3, 1000])?;
        let dst: Image<u16, 2> = pad_tiles(&src, tile(3, 1))?;
        assert_eq!(dst.pixel(1, 1)?, &[1, 65535]);
        assert_eq!(dst.pixel(4, 2)?, &[3, 1000]);

        let src = Image::<f32, 3>::new([1, 1].into(), vec![0.25, 0.5, 1.0])?;
        let dst: Image<f32, 3> = pad_tiles(&src, tile(1, 1))?;
        for px in dst.as_slice().chunks_exact(3) {
            assert_eq!(px, &[0.25, 0.5, 1.0]);
        }

        Ok(())
    }

    #[test]
    fn test_pad_tiles_into_size_mismatch() -> Result<(), ImageError> {
        let src = Image::<u8, 3>::from_size_val([4, 4].into(), 1)?;
        let mut dst = Image::<u8, 3>::from_size_val([7, 8].into(), 0)?;

        let res = pad_tiles_into(&src, &mut dst, tile(2, 2));
        assert_eq!(res, Err(ImageError::InvalidImageSize(7, 8, 8, 8)));

        Ok(())
    }

    #[test]
    fn test_pad_tiles_into_clears_destination() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::from_size_val([2, 2].into(), 5)?;
        let mut dst = Image::<u8, 1>::from_size_val([4, 4].into(), 99)?;

        pad_tiles_into(&src, &mut dst, tile(2, 2))?;

        assert_eq!(dst.as_slice(), &[5u8; 16]);

        Ok(())
    }

    #[test]
    fn test_source_row() -> Result<(), ImageError> {
        let grid = TileGrid::new([1, 5].into(), tile(1, 3));
        let rows = (0..8).map(|y| source_row(&grid, y)).collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![None, Some(0), Some(1), Some(2), None, None, Some(3), Some(4)]
        );
        Ok(())
    }
}
