use skelet_image::ImageError;

/// Errors reported by the thinning operators.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ThinningError {
    /// The input image has zero width or height.
    #[error("Input image is empty")]
    EmptyImage,

    /// The input image holds a value other than background or foreground.
    #[error("Pixel ({x}, {y}) has value {value}, expected 0 or 255")]
    NonBinaryPixel {
        /// Column of the offending pixel.
        x: usize,
        /// Row of the offending pixel.
        y: usize,
        /// The offending value.
        value: u8,
    },

    /// Error from an underlying image operation.
    #[error(transparent)]
    Image(#[from] ImageError),
}
