use skelet_image::Image;

use super::error::ThinningError;
use super::grid::{BACKGROUND, FOREGROUND};
use super::pair::pair_relation;
use super::shrink::{connected_shrink, ShrinkUpdate};
use super::yokoi::connectivity_map;

/// Parameters of the thinning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinningConfig {
    /// Neighbour read discipline of the shrink pass.
    pub update: ShrinkUpdate,
    /// Optional upper bound on the number of passes. The loop always reaches a fixed point on
    /// binary input, so this only guards callers that want a hard stop.
    pub max_iterations: Option<usize>,
    /// Reject inputs holding values other than 0 and 255.
    pub validate_binary: bool,
}

impl Default for ThinningConfig {
    fn default() -> Self {
        Self {
            update: ShrinkUpdate::Sequential,
            max_iterations: None,
            validate_binary: true,
        }
    }
}

/// State of the [`Thinning`] iteration controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinningState {
    /// The last pass removed at least one pixel, or no pass ran yet.
    Running,
    /// The last pass removed nothing. Terminal.
    Converged,
}

/// Summary of a thinning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinningReport {
    /// Number of passes executed, including the final pass that changed nothing.
    pub iterations: usize,
    /// Total number of pixels set to background.
    pub removed: usize,
    /// False only when `max_iterations` stopped the loop before a fixed point.
    pub converged: bool,
}

/// Iteration controller of the thinning algorithm.
///
/// Each call to [`Thinning::step`] rebuilds the connectivity map from the current image,
/// marks the removable pixels and runs one shrink pass. The controller converges when a pass
/// removes nothing.
///
/// # Example
///
/// ```
/// use skelet_image::{Image, ImageSize};
/// use skelet_imgproc::thinning::{Thinning, ThinningConfig, ThinningState};
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 4, height: 4 }, 255).unwrap();
/// let mut thinning = Thinning::new(image, ThinningConfig::default()).unwrap();
///
/// while thinning.step().unwrap() == ThinningState::Running {}
///
/// assert!(thinning.iterations() > 1);
/// ```
#[derive(Debug, Clone)]
pub struct Thinning {
    image: Image<u8, 1>,
    config: ThinningConfig,
    state: ThinningState,
    iterations: usize,
    removed: usize,
}

impl Thinning {
    /// Create a controller owning `image`.
    ///
    /// # Errors
    ///
    /// Returns [`ThinningError::EmptyImage`] for an image with no pixels and, when
    /// `config.validate_binary` is set, [`ThinningError::NonBinaryPixel`] for the first pixel
    /// in raster order that is neither 0 nor 255.
    pub fn new(image: Image<u8, 1>, config: ThinningConfig) -> Result<Self, ThinningError> {
        validate_input(&image, config.validate_binary)?;
        Ok(Self {
            image,
            config,
            state: ThinningState::Running,
            iterations: 0,
            removed: 0,
        })
    }

    /// Run a single pass.
    ///
    /// Returns the state after the pass. Calling `step` on a converged controller is a no-op.
    pub fn step(&mut self) -> Result<ThinningState, ThinningError> {
        if self.state == ThinningState::Converged {
            return Ok(self.state);
        }

        let labels = connectivity_map(&self.image)?;
        let marks = pair_relation(&labels)?;
        let removed = connected_shrink(&mut self.image, &marks, self.config.update)?;

        self.iterations += 1;
        self.removed += removed;
        log::debug!("Iteration: {} removed {} pixels", self.iterations, removed);

        if removed == 0 {
            self.state = ThinningState::Converged;
            log::debug!(
                "Thinning converged in {} iterations, {} pixels removed",
                self.iterations,
                self.removed
            );
        }

        Ok(self.state)
    }

    /// Run passes until a fixed point, or until `max_iterations` passes ran.
    pub fn run(&mut self) -> Result<ThinningReport, ThinningError> {
        while self.state == ThinningState::Running {
            if let Some(max_iterations) = self.config.max_iterations {
                if self.iterations >= max_iterations {
                    log::warn!(
                        "Thinning stopped after {} iterations without converging",
                        self.iterations
                    );
                    break;
                }
            }
            self.step()?;
        }

        Ok(self.report())
    }

    /// Summary of the passes run so far.
    pub fn report(&self) -> ThinningReport {
        ThinningReport {
            iterations: self.iterations,
            removed: self.removed,
            converged: self.state == ThinningState::Converged,
        }
    }

    /// Current state.
    pub fn state(&self) -> ThinningState {
        self.state
    }

    /// Number of passes run so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The image as of the last pass.
    pub fn image(&self) -> &Image<u8, 1> {
        &self.image
    }

    /// Consume the controller and return the image.
    pub fn into_image(self) -> Image<u8, 1> {
        self.image
    }
}

fn validate_input(image: &Image<u8, 1>, validate_binary: bool) -> Result<(), ThinningError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ThinningError::EmptyImage);
    }

    if validate_binary {
        let cols = image.cols();
        if let Some((idx, &value)) = image
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, &v)| v != BACKGROUND && v != FOREGROUND)
        {
            return Err(ThinningError::NonBinaryPixel {
                x: idx % cols,
                y: idx / cols,
                value,
            });
        }
    }

    Ok(())
}

/// Thin a binary image down to its skeleton with the default [`ThinningConfig`].
///
/// The input must hold only 0 (background) and 255 (foreground). The output has the same
/// size and value domain.
///
/// # Example
///
/// ```
/// use skelet_image::{Image, ImageSize};
/// use skelet_imgproc::thinning::skeletonize;
///
/// #[rustfmt::skip]
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 5, height: 3 },
///     vec![
///         0,   0,   0,   0, 0,
///         0, 255, 255, 255, 0,
///         0,   0,   0,   0, 0,
///     ],
/// ).unwrap();
///
/// // a one pixel wide line is already a skeleton
/// assert_eq!(skeletonize(&image).unwrap(), image);
/// ```
pub fn skeletonize(image: &Image<u8, 1>) -> Result<Image<u8, 1>, ThinningError> {
    let (skeleton, _) = skeletonize_with(image, &ThinningConfig::default())?;
    Ok(skeleton)
}

/// Thin a binary image with an explicit configuration.
///
/// Returns the skeleton together with a [`ThinningReport`].
pub fn skeletonize_with(
    image: &Image<u8, 1>,
    config: &ThinningConfig,
) -> Result<(Image<u8, 1>, ThinningReport), ThinningError> {
    let mut thinning = Thinning::new(image.clone(), *config)?;
    let report = thinning.run()?;
    Ok((thinning.into_image(), report))
}
