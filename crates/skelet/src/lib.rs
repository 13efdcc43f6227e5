//! Binary image thinning and skeletonization.
//!
//! ```
//! use skelet::image::{Image, ImageSize};
//! use skelet::imgproc::thinning::skeletonize;
//!
//! let image = Image::<u8, 1>::from_size_val(ImageSize { width: 8, height: 8 }, 255).unwrap();
//! let skeleton = skeletonize(&image).unwrap();
//!
//! assert_eq!(skeleton.size(), image.size());
//! ```

#[doc(inline)]
pub use skelet_image as image;

#[doc(inline)]
pub use skelet_imgproc as imgproc;

#[doc(inline)]
pub use skelet_io as io;
