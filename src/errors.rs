//! Everything that can go wrong while plotting.  All of these are
//! caller errors detected before any per-point work starts, except
//! for `WorkerPanic`, which means an evaluator thread died.

/// The error type shared by the grid builder, the evaluator and the
/// renderers.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelbrotError {
    /// The region bounds are inverted or degenerate, or the pixel
    /// density leaves one of the grid dimensions at zero.
    #[fail(display = "invalid region: {}", _0)]
    InvalidRegion(String),

    /// Fewer than one iteration was requested.
    #[fail(display = "iteration budget must be at least 1, got {}", _0)]
    InvalidIterationBudget(usize),

    /// Fewer than one sample per unit length was requested.
    #[fail(display = "pixel density must be at least 1, got {}", _0)]
    InvalidDensity(u32),

    /// The scatter canvas needs a finite, positive number of pixels
    /// per unit length.
    #[fail(display = "canvas scale must be finite and positive, got {}", _0)]
    InvalidScale(f64),

    /// The threaded evaluator needs at least one worker.
    #[fail(display = "thread count must be at least 1, got {}", _0)]
    InvalidThreadCount(usize),

    /// A mask was paired with a grid of a different shape.
    #[fail(
        display = "mask is {}x{} but the grid is {}x{}",
        mask_width, mask_height, grid_width, grid_height
    )]
    MaskShapeMismatch {
        /// Width of the grid.
        grid_width: usize,
        /// Height of the grid.
        grid_height: usize,
        /// Width of the mask.
        mask_width: usize,
        /// Height of the mask.
        mask_height: usize,
    },

    /// Painting types are "dots" or "normal".
    #[fail(display = "unknown painting type \"{}\", expected dots or normal", _0)]
    UnknownPaintType(String),

    /// One of the evaluator's worker threads panicked.
    #[fail(display = "an evaluator thread panicked")]
    WorkerPanic,
}
