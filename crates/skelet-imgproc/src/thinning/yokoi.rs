use skelet_image::{Image, ImageError};

use super::grid::{PaddedGrid, BACKGROUND};

/// Connectivity number of a foreground pixel whose four corner groups are all filled.
pub const INTERIOR: u8 = 5;

/// Classification of one corner group around a foreground pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YokoiSymbol {
    /// The edge neighbour differs from the center.
    Edge,
    /// The edge neighbour, the corner and the following edge neighbour all match the center.
    Regular,
    /// The edge neighbour matches the center but the corner group is not complete.
    Corner,
}

/// Classify a corner group given the center `b`, the edge neighbour `c`, the corner `d` and
/// the following edge neighbour `e`.
#[inline]
pub fn yokoi_h(b: u8, c: u8, d: u8, e: u8) -> YokoiSymbol {
    if b != c {
        YokoiSymbol::Edge
    } else if b == d && b == e {
        YokoiSymbol::Regular
    } else {
        YokoiSymbol::Corner
    }
}

/// Reduce the four corner symbols to a connectivity number.
///
/// Returns [`INTERIOR`] when every group is regular, otherwise the number of corner groups.
#[inline]
pub fn yokoi_f(symbols: &[YokoiSymbol; 4]) -> u8 {
    if symbols.iter().all(|s| *s == YokoiSymbol::Regular) {
        return INTERIOR;
    }
    symbols.iter().filter(|s| **s == YokoiSymbol::Corner).count() as u8
}

/// Connectivity number of the pixel at `(row, col)`, regardless of its value.
pub fn connectivity_number(grid: &PaddedGrid, row: usize, col: usize) -> u8 {
    let symbols = grid
        .neighborhood(row, col)
        .map(|[b, c, d, e]| yokoi_h(b, c, d, e));
    yokoi_f(&symbols)
}

/// Compute the connectivity number of every pixel of a padded grid.
///
/// Background pixels get 0; foreground pixels get a value in `0..=5`.
pub fn connectivity_map_from_grid(grid: &PaddedGrid) -> Result<Image<u8, 1>, ImageError> {
    let mut labels = Vec::with_capacity(grid.rows() * grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let label = if grid.get(row as isize, col as isize) == BACKGROUND {
                0
            } else {
                connectivity_number(grid, row, col)
            };
            labels.push(label);
        }
    }

    Image::new(
        skelet_image::ImageSize {
            width: grid.cols(),
            height: grid.rows(),
        },
        labels,
    )
}

/// Compute the Yokoi connectivity number of every pixel of a binary image.
///
/// The image is padded with one ring of background before classification, so border pixels
/// see the outside of the image as background.
///
/// # Example
///
/// ```
/// use skelet_image::{Image, ImageSize};
/// use skelet_imgproc::thinning::connectivity_map;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     vec![255; 9],
/// ).unwrap();
///
/// let labels = connectivity_map(&image).unwrap();
/// assert_eq!(labels.as_slice(), &[1, 1, 1, 1, 5, 1, 1, 1, 1]);
/// ```
pub fn connectivity_map(image: &Image<u8, 1>) -> Result<Image<u8, 1>, ImageError> {
    connectivity_map_from_grid(&PaddedGrid::from_image(image)?)
}
