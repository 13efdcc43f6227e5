use skelet_image::{Image, ImageError, ImageSize};

use crate::parallel;

/// Compute the output size of [`downsample`] for a given input size and step.
///
/// Trailing rows and columns that do not fill a whole step are dropped.
pub fn downsample_size(size: ImageSize, step: usize) -> Result<ImageSize, ImageError> {
    if step == 0 {
        return Err(ImageError::InvalidDownsampleStep(step));
    }
    Ok(ImageSize {
        width: size.width / step,
        height: size.height / step,
    })
}

/// Uniformly subsample an image keeping the top-left pixel of every `step x step` block.
///
/// `dst[y, x] = src[y * step, x * step]` for every channel.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, of size [`downsample_size`] of the input.
/// * `step` - The subsampling step in pixels, must be greater than zero.
///
/// # Errors
///
/// Returns an error if `step` is zero or `dst` does not have the expected size.
///
/// # Example
///
/// ```
/// use skelet_image::{Image, ImageSize};
/// use skelet_imgproc::resize::{downsample, downsample_size};
///
/// let src = Image::<u8, 1>::new(
///     ImageSize { width: 4, height: 2 },
///     vec![1, 2, 3, 4, 5, 6, 7, 8],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 1>::from_size_val(downsample_size(src.size(), 2).unwrap(), 0).unwrap();
/// downsample(&src, &mut dst, 2).unwrap();
///
/// assert_eq!(dst.as_slice(), &[1, 3]);
/// ```
pub fn downsample<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    step: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    let expected = downsample_size(src.size(), step)?;
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let src_stride = src.cols() * C;
    let src_data = src.as_slice();

    parallel::par_iter_dst_rows(dst, |y, dst_row| {
        let src_row = &src_data[y * step * src_stride..(y * step + 1) * src_stride];
        for (x, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let src_idx = x * step * C;
            dst_pixel.copy_from_slice(&src_row[src_idx..src_idx + C]);
        }
    });

    Ok(())
}
