use skelet_image::{Image, ImageError};

/// Per-pixel mark produced by the pair relationship operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    /// Pixel with connectivity number 0, never touched by the shrink step.
    #[default]
    Unmarked,
    /// Boundary pixel next to another boundary pixel, may be removed in this pass.
    Removable,
    /// Any other labelled pixel, kept in this pass.
    Retained,
}

/// 4-neighbour offsets `(row, col)`: north, south, west, east.
const EDGE_NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Mark the pixels of a connectivity map that are candidates for removal.
///
/// A pixel with connectivity number 1 with at least one 4-neighbour also numbered 1 is
/// [`Mark::Removable`]. Every other pixel with a non-zero number is [`Mark::Retained`];
/// pixels numbered 0 stay [`Mark::Unmarked`]. Neighbours outside the map do not count.
///
/// # Example
///
/// ```
/// use skelet_image::{Image, ImageSize};
/// use skelet_imgproc::thinning::{pair_relation, Mark};
///
/// let labels = Image::<u8, 1>::new(ImageSize { width: 3, height: 1 }, vec![1, 1, 2]).unwrap();
/// let marks = pair_relation(&labels).unwrap();
///
/// assert_eq!(marks.as_slice(), &[Mark::Removable, Mark::Removable, Mark::Retained]);
/// ```
pub fn pair_relation(labels: &Image<u8, 1>) -> Result<Image<Mark, 1>, ImageError> {
    let cols = labels.cols();
    let mut marks = Image::<Mark, 1>::from_size_val(labels.size(), Mark::Unmarked)?;

    let is_boundary = |row: isize, col: isize| -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        labels.get([row as usize, col as usize, 0]) == Some(&1)
    };

    for (idx, (&label, mark)) in labels
        .as_slice()
        .iter()
        .zip(marks.as_slice_mut().iter_mut())
        .enumerate()
    {
        if label == 0 {
            continue;
        }
        let (row, col) = ((idx / cols) as isize, (idx % cols) as isize);
        let paired = label == 1
            && EDGE_NEIGHBORS
                .iter()
                .any(|&(dr, dc)| is_boundary(row + dr, col + dc));

        *mark = if paired {
            Mark::Removable
        } else {
            Mark::Retained
        };
    }

    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skelet_image::ImageSize;

    #[test]
    fn block_boundary_is_removable() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let labels = Image::<u8, 1>::new(
            ImageSize { width: 5, height: 5 },
            vec![
                0, 0, 0, 0, 0,
                0, 1, 1, 1, 0,
                0, 1, 5, 1, 0,
                0, 1, 1, 1, 0,
                0, 0, 0, 0, 0,
            ],
        )?;

        let marks = pair_relation(&labels)?;

        let (u, p, q) = (Mark::Unmarked, Mark::Removable, Mark::Retained);
        #[rustfmt::skip]
        let expected = [
            u, u, u, u, u,
            u, p, p, p, u,
            u, p, q, p, u,
            u, p, p, p, u,
            u, u, u, u, u,
        ];
        assert_eq!(marks.as_slice(), &expected);

        Ok(())
    }

    #[test]
    fn lone_boundary_pixel_is_retained() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let labels = Image::<u8, 1>::new(
            ImageSize { width: 5, height: 3 },
            vec![
                0, 0, 0, 0, 0,
                1, 2, 2, 2, 1,
                0, 0, 0, 0, 0,
            ],
        )?;

        let marks = pair_relation(&labels)?;
        assert!(marks.as_slice()[5..10].iter().all(|m| *m == Mark::Retained));
        assert!(marks.as_slice()[..5].iter().all(|m| *m == Mark::Unmarked));

        Ok(())
    }

    #[test]
    fn diagonal_neighbours_do_not_pair() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let labels = Image::<u8, 1>::new(
            ImageSize { width: 2, height: 2 },
            vec![
                1, 0,
                0, 1,
            ],
        )?;

        let marks = pair_relation(&labels)?;
        assert_eq!(
            marks.as_slice(),
            &[Mark::Retained, Mark::Unmarked, Mark::Unmarked, Mark::Retained]
        );

        Ok(())
    }
}
