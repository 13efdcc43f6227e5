use skelet_image::{Image, ImageError};

use crate::padding::{spatial_padding, Padding2D};

/// Pixel value of the background in a binary image.
pub const BACKGROUND: u8 = 0;

/// Pixel value of the foreground in a binary image.
pub const FOREGROUND: u8 = 255;

/// Offsets `(row, col)` of the `(c, d, e)` neighbours for each of the four corner groups.
///
/// The groups are visited in this order everywhere: east edge turning north, north edge
/// turning west, west edge turning south, south edge turning east. `c` is the edge
/// neighbour, `d` the corner and `e` the following edge neighbour.
pub const CORNER_TRIPLES: [[(isize, isize); 3]; 4] = [
    [(0, 1), (-1, 1), (-1, 0)],
    [(-1, 0), (-1, -1), (0, -1)],
    [(0, -1), (1, -1), (1, 0)],
    [(1, 0), (1, 1), (0, 1)],
];

/// A binary image surrounded by a one pixel border of background.
///
/// Reads outside the active area return the border fill, so neighbourhood lookups never
/// branch on the image edges. Writes are restricted to the active area.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddedGrid {
    padded: Image<u8, 1>,
    rows: usize,
    cols: usize,
    fill: u8,
}

impl PaddedGrid {
    /// Copy `image` into a new grid with a [`BACKGROUND`] border.
    pub fn from_image(image: &Image<u8, 1>) -> Result<Self, ImageError> {
        Self::with_fill(image, BACKGROUND)
    }

    /// Copy `image` into a new grid whose border holds `fill`.
    ///
    /// Any fill different from the foreground value behaves as background for the
    /// classification rules, which only test pixels for equality with the center.
    pub fn with_fill(image: &Image<u8, 1>, fill: u8) -> Result<Self, ImageError> {
        let padding = Padding2D::uniform(1);
        let mut padded = Image::from_size_val(padding.padded_size(image.size()), fill)?;
        spatial_padding(image, &mut padded, padding, [fill])?;

        Ok(Self {
            padded,
            rows: image.rows(),
            cols: image.cols(),
            fill,
        })
    }

    /// Number of rows of the active area.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the active area.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of the border.
    pub fn fill(&self) -> u8 {
        self.fill
    }

    /// Read the pixel at `(row, col)` of the active area.
    ///
    /// The one pixel ring around the active area is read from the border. Any coordinate
    /// further out reads as the border fill.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> u8 {
        let (row, col) = (row + 1, col + 1);
        if row < 0 || col < 0 || row > self.rows as isize + 1 || col > self.cols as isize + 1 {
            return self.fill;
        }
        self.padded_at(row as usize, col as usize)
    }

    #[inline]
    fn padded_at(&self, row: usize, col: usize) -> u8 {
        self.padded.as_slice()[row * (self.cols + 2) + col]
    }

    /// Write the pixel at `(row, col)` of the active area.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the active area.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(
            row < self.rows && col < self.cols,
            "write at ({row}, {col}) outside the {}x{} grid",
            self.rows,
            self.cols
        );
        let idx = (row + 1) * (self.cols + 2) + col + 1;
        self.padded.as_slice_mut()[idx] = value;
    }

    /// The `(b, c, d, e)` values of the four corner groups around `(row, col)`, in
    /// [`CORNER_TRIPLES`] order. `b` is the center pixel.
    ///
    /// Neighbours are read straight from the padded buffer, with no edge checks.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the active area.
    pub fn neighborhood(&self, row: usize, col: usize) -> [[u8; 4]; 4] {
        assert!(
            row < self.rows && col < self.cols,
            "neighborhood of ({row}, {col}) outside the {}x{} grid",
            self.rows,
            self.cols
        );
        // center in padded coordinates
        let (row, col) = (row + 1, col + 1);
        let b = self.padded_at(row, col);
        CORNER_TRIPLES.map(|triple| {
            let [c, d, e] = triple.map(|(dr, dc)| {
                self.padded_at(row.wrapping_add_signed(dr), col.wrapping_add_signed(dc))
            });
            [b, c, d, e]
        })
    }

    /// Copy the active area back into an image.
    pub fn to_image(&self) -> Result<Image<u8, 1>, ImageError> {
        let stride = self.cols + 2;
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            let start = (row + 1) * stride + 1;
            data.extend_from_slice(&self.padded.as_slice()[start..start + self.cols]);
        }
        Image::new(
            skelet_image::ImageSize {
                width: self.cols,
                height: self.rows,
            },
            data,
        )
    }
}
