use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skelet_image::{Image, ImageSize};
use skelet_imgproc::thinning::{
    connectivity_map, skeletonize, skeletonize_with, ShrinkUpdate, ThinningConfig,
    ThinningError, BACKGROUND, FOREGROUND,
};

fn blank(width: usize, height: usize) -> Image<u8, 1> {
    Image::from_size_val(ImageSize { width, height }, BACKGROUND).unwrap()
}

fn fill_rect(image: &mut Image<u8, 1>, rows: Range<usize>, cols: Range<usize>) {
    for y in rows {
        for x in cols.clone() {
            image.set_pixel(x, y, 0, FOREGROUND).unwrap();
        }
    }
}

/// Square ring centered in an `n x n` image, foreground where the chessboard distance to the
/// center lies in `inner..=outer`.
fn square_ring(n: usize, inner: usize, outer: usize) -> Image<u8, 1> {
    let mut image = blank(n, n);
    let c = (n / 2) as isize;
    for y in 0..n {
        for x in 0..n {
            let d = (y as isize - c).abs().max((x as isize - c).abs()) as usize;
            if (inner..=outer).contains(&d) {
                image.set_pixel(x, y, 0, FOREGROUND).unwrap();
            }
        }
    }
    image
}

fn random_binary(rng: &mut StdRng, width: usize, height: usize) -> Image<u8, 1> {
    let data = (0..width * height)
        .map(|_| if rng.random_bool(0.6) { FOREGROUND } else { BACKGROUND })
        .collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

fn foreground(image: &Image<u8, 1>) -> Vec<(usize, usize)> {
    image
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, &v)| v != BACKGROUND)
        .map(|(i, _)| (i / image.cols(), i % image.cols()))
        .collect()
}

/// Count connected components of pixels equal to `value`.
fn count_components(image: &Image<u8, 1>, value: u8, eight: bool) -> usize {
    let (rows, cols) = (image.rows() as isize, image.cols() as isize);
    let mut seen = vec![false; image.as_slice().len()];
    let offsets: &[(isize, isize)] = if eight {
        &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)]
    } else {
        &[(-1, 0), (1, 0), (0, -1), (0, 1)]
    };

    let mut count = 0;
    for start in 0..image.as_slice().len() {
        if seen[start] || image.as_slice()[start] != value {
            continue;
        }
        count += 1;
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(idx) = queue.pop_front() {
            let (y, x) = ((idx as isize) / cols, (idx as isize) % cols);
            for (dy, dx) in offsets {
                let (ny, nx) = (y + dy, x + dx);
                if ny < 0 || nx < 0 || ny >= rows || nx >= cols {
                    continue;
                }
                let n = (ny * cols + nx) as usize;
                if !seen[n] && image.as_slice()[n] == value {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
    }
    count
}

fn snapshot() -> ThinningConfig {
    ThinningConfig {
        update: ShrinkUpdate::Snapshot,
        ..Default::default()
    }
}

#[test]
fn block_5x5_sequential() -> Result<(), ThinningError> {
    let mut image = blank(9, 9);
    fill_rect(&mut image, 2..7, 2..7);

    let (skeleton, report) = skeletonize_with(&image, &ThinningConfig::default())?;

    assert_eq!(foreground(&skeleton), vec![(4, 4), (5, 4), (5, 5), (6, 5)]);
    assert_eq!(report.iterations, 3);
    assert_eq!(report.removed, 21);
    assert!(report.converged);

    Ok(())
}

#[test]
fn block_5x5_snapshot_keeps_center() -> Result<(), ThinningError> {
    let mut image = blank(9, 9);
    fill_rect(&mut image, 2..7, 2..7);

    let (skeleton, report) = skeletonize_with(&image, &snapshot())?;

    assert_eq!(foreground(&skeleton), vec![(4, 4)]);
    // two passes remove pixels, the third confirms the fixed point
    assert_eq!(report.iterations, 3);
    assert_eq!(report.removed, 24);

    Ok(())
}

#[test]
fn isolated_pixel_is_kept() -> Result<(), ThinningError> {
    let mut image = blank(5, 5);
    image.set_pixel(2, 2, 0, FOREGROUND)?;

    assert!(connectivity_map(&image)?.as_slice().iter().all(|&v| v == 0));

    let (skeleton, report) = skeletonize_with(&image, &ThinningConfig::default())?;
    assert_eq!(skeleton, image);
    assert_eq!(report.iterations, 1);

    Ok(())
}

#[test]
fn thin_line_is_a_fixed_point() -> Result<(), ThinningError> {
    let mut image = blank(7, 3);
    fill_rect(&mut image, 1..2, 1..6);

    assert_eq!(skeletonize(&image)?, image);

    Ok(())
}

#[test]
fn bars_converge_within_half_thickness() -> Result<(), ThinningError> {
    for k in 0..4 {
        let mut image = blank(14, 2 * k + 5);
        fill_rect(&mut image, 2..2 * k + 3, 2..12);

        for config in [ThinningConfig::default(), snapshot()] {
            let (skeleton, report) = skeletonize_with(&image, &config)?;
            assert!(
                report.iterations <= k + 1,
                "k = {k}, {:?}: {} iterations",
                config.update,
                report.iterations
            );
            assert!(!foreground(&skeleton).is_empty());
            assert_eq!(count_components(&skeleton, FOREGROUND, true), 1);
        }
    }

    Ok(())
}

#[test]
fn thick_rings_stay_single_loops() -> Result<(), ThinningError> {
    for (n, inner, outer) in [(13, 2, 4), (15, 3, 5), (17, 3, 6), (21, 4, 8)] {
        let image = square_ring(n, inner, outer);
        let skeleton = skeletonize(&image)?;

        assert!(!foreground(&skeleton).is_empty());
        assert_eq!(count_components(&skeleton, FOREGROUND, true), 1);
        // the hole is still enclosed
        assert_eq!(count_components(&skeleton, BACKGROUND, false), 2);
    }

    Ok(())
}

#[test]
fn snapshot_reads_can_erase_a_ring() -> Result<(), ThinningError> {
    let image = square_ring(17, 3, 6);

    let (skeleton, _) = skeletonize_with(&image, &snapshot())?;
    assert!(foreground(&skeleton).is_empty());

    let skeleton = skeletonize(&image)?;
    assert_eq!(count_components(&skeleton, FOREGROUND, true), 1);

    Ok(())
}

#[test]
fn random_images_properties() -> Result<(), ThinningError> {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let width = rng.random_range(3..16);
        let height = rng.random_range(3..16);
        let image = random_binary(&mut rng, width, height);

        for config in [ThinningConfig::default(), snapshot()] {
            let (skeleton, _) = skeletonize_with(&image, &config)?;

            assert_eq!(skeleton.size(), image.size());
            assert!(skeleton
                .as_slice()
                .iter()
                .all(|&v| v == BACKGROUND || v == FOREGROUND));

            // pixels are only ever removed
            assert!(skeleton
                .as_slice()
                .iter()
                .zip(image.as_slice())
                .all(|(&s, &i)| s == BACKGROUND || i == FOREGROUND));

            let (again, report) = skeletonize_with(&skeleton, &config)?;
            assert_eq!(again, skeleton);
            assert_eq!(report.iterations, 1);
            assert_eq!(report.removed, 0);
        }
    }

    Ok(())
}
