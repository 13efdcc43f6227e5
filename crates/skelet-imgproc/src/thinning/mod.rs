//! Binary image thinning.
//!
//! Reduces the foreground of a binary image (0 background, 255 foreground) to a one pixel
//! wide skeleton. Every pass:
//!
//! 1. computes the Yokoi connectivity number of each foreground pixel ([`connectivity_map`]),
//! 2. marks boundary pixels touching another boundary pixel ([`pair_relation`]),
//! 3. removes the marked pixels whose removal keeps the shape connected ([`connected_shrink`]).
//!
//! Passes repeat until one removes nothing. See [`skeletonize`] and [`Thinning`].

mod controller;
pub use controller::*;

/// Error types used by the thinning operators.
pub mod error;
pub use error::ThinningError;

mod grid;
pub use grid::*;

mod pair;
pub use pair::*;

mod shrink;
pub use shrink::*;

mod yokoi;
pub use yokoi::*;
