#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// one-ring border padding used by neighborhood operations.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// uniform subsampling of images.
pub mod resize;

/// binary image thinning (skeletonization) module.
pub mod thinning;

/// operations to threshold images.
pub mod threshold;
