use skelet_image::{Image, ImageError};

use super::error::ThinningError;
use super::grid::{PaddedGrid, BACKGROUND};
use super::pair::Mark;

/// Where the shrink pass reads neighbours from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShrinkUpdate {
    /// Read the working grid. A pixel removed earlier in the pass, in raster order, is seen
    /// as background by the pixels visited after it.
    #[default]
    Sequential,
    /// Read a copy of the grid taken at the start of the pass; removals only become visible
    /// in the next pass.
    Snapshot,
}

/// Whether a corner group supports removing the center `b`.
///
/// It does when the edge neighbour `c` matches the center and the corner `d` or the following
/// edge neighbour `e` does not.
#[inline]
pub fn shrink_h(b: u8, c: u8, d: u8, e: u8) -> bool {
    b == c && (b != d || b != e)
}

/// New value of a pixel given the support of its four corner groups.
///
/// The pixel becomes background when exactly one group supports removal, otherwise it keeps
/// `value`.
#[inline]
pub fn shrink_f(supports: &[bool; 4], value: u8) -> u8 {
    if supports.iter().filter(|s| **s).count() == 1 {
        BACKGROUND
    } else {
        value
    }
}

/// Run one connected shrink pass over `image` in raster order.
///
/// Only pixels marked [`Mark::Removable`] are visited. Returns the number of pixels set to
/// background; zero means the image reached a fixed point.
///
/// # Errors
///
/// Returns an error if `marks` and `image` differ in size.
pub fn connected_shrink(
    image: &mut Image<u8, 1>,
    marks: &Image<Mark, 1>,
    update: ShrinkUpdate,
) -> Result<usize, ThinningError> {
    if marks.size() != image.size() {
        return Err(ImageError::InvalidImageSize(
            marks.width(),
            marks.height(),
            image.width(),
            image.height(),
        )
        .into());
    }

    let mut working = PaddedGrid::from_image(image)?;
    let snapshot = match update {
        ShrinkUpdate::Snapshot => Some(working.clone()),
        ShrinkUpdate::Sequential => None,
    };

    let cols = image.cols();
    let mut removed = 0;

    for (idx, mark) in marks.as_slice().iter().enumerate() {
        if *mark != Mark::Removable {
            continue;
        }
        let (row, col) = (idx / cols, idx % cols);

        let source = snapshot.as_ref().unwrap_or(&working);
        let supports = source
            .neighborhood(row, col)
            .map(|[b, c, d, e]| shrink_h(b, c, d, e));

        let value = working.get(row as isize, col as isize);
        let next = shrink_f(&supports, value);
        if next != value {
            working.set(row, col, next);
            removed += 1;
        }
    }

    if removed > 0 {
        *image = working.to_image()?;
    }

    Ok(removed)
}
