//! Plot settings and the pipeline that turns them into an image:
//! build the grid, evaluate it, paint it.
//!
//! Density and iteration defaults depend on the painting type.  A
//! scatter is coarse and cheap, while a filled mask needs a much finer
//! grid and a longer orbit to give the boundary a crisp edge.  Those
//! defaults live in the table below and are applied here, before the
//! evaluator is called; the evaluator itself knows nothing about
//! painting types.

use std::time::Instant;

use image::GrayImage;

use errors::MandelbrotError;
use escape::{evaluate, evaluate_threaded};
use grid::{build_grid, Region, DEFAULT_REGION};
use render::{PaintType, Renderer};

/// The default filename template.  `%(pixel_density)d` is replaced by
/// the density of the plot.
pub const DEFAULT_NAME: &str = "mandelbrot_%(pixel_density)d.jpg";

const DENSITY_PLACEHOLDER: &str = "%(pixel_density)d";

/// The largest density the command line accepts.  The default region
/// at this density is a 5120x6144 grid, inside `grid::MAX_SAMPLES`.
pub const MAX_PIXEL_DENSITY: u32 = 2048;

/// Grid density and iteration budget used when the caller does not
/// name them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PaintDefaults {
    /// Samples per unit length.
    pub pixel_density: u32,
    /// Orbit length per sample.
    pub iterations: usize,
}

const DOTS_DEFAULTS: PaintDefaults = PaintDefaults {
    pixel_density: 21,
    iterations: 20,
};

const NORMAL_DEFAULTS: PaintDefaults = PaintDefaults {
    pixel_density: 512,
    iterations: 100,
};

impl PaintType {
    /// The density and iteration budget a painting type starts from.
    pub fn defaults(self) -> PaintDefaults {
        match self {
            PaintType::Dots => DOTS_DEFAULTS,
            PaintType::Normal => NORMAL_DEFAULTS,
        }
    }
}

/// Everything needed to produce one picture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plot {
    /// The part of the complex plane to paint.
    pub region: Region,
    /// Scatter or filled mask.
    pub paint_type: PaintType,
    /// Samples per unit length.
    pub pixel_density: u32,
    /// Orbit length per sample.
    pub iterations: usize,
    /// Number of evaluator threads.
    pub threads: usize,
}

impl Plot {
    /// A single-threaded plot of the default region with the
    /// painting type's default density and iteration budget.
    pub fn new(paint_type: PaintType) -> Plot {
        let defaults = paint_type.defaults();
        Plot {
            region: DEFAULT_REGION,
            paint_type,
            pixel_density: defaults.pixel_density,
            iterations: defaults.iterations,
            threads: 1,
        }
    }

    /// Paint another region.
    pub fn region(mut self, region: Region) -> Plot {
        self.region = region;
        self
    }

    /// Override the default density.
    pub fn pixel_density(mut self, pixel_density: u32) -> Plot {
        self.pixel_density = pixel_density;
        self
    }

    /// Override the default iteration budget.
    pub fn iterations(mut self, iterations: usize) -> Plot {
        self.iterations = iterations;
        self
    }

    /// Spread the evaluation over `threads` threads.
    pub fn threads(mut self, threads: usize) -> Plot {
        self.threads = threads;
        self
    }

    /// Run the whole pipeline.  All the settings are checked before
    /// any orbit is iterated.
    pub fn render(&self) -> Result<GrayImage, MandelbrotError> {
        if self.iterations < 1 {
            return Err(MandelbrotError::InvalidIterationBudget(self.iterations));
        }
        if self.threads < 1 {
            return Err(MandelbrotError::InvalidThreadCount(self.threads));
        }

        info!(
            "painting {} at density {} with {} iterations",
            self.paint_type, self.pixel_density, self.iterations
        );
        let grid = build_grid(self.region, self.pixel_density)?;

        let started = Instant::now();
        let mask = if self.threads == 1 {
            evaluate(&grid, self.iterations)?
        } else {
            evaluate_threaded(&grid, self.iterations, self.threads)?
        };
        debug!(
            "{} of {} samples stable after {:?}",
            mask.count(),
            grid.len(),
            started.elapsed()
        );

        let image = Renderer::for_paint_type(self.paint_type).produce_image(&grid, &mask)?;
        info!("produced a {}x{} image", image.width(), image.height());
        Ok(image)
    }
}

/// Expand the `%(pixel_density)d` placeholder of a filename template.
pub fn output_name(template: &str, pixel_density: u32) -> String {
    template.replace(DENSITY_PLACEHOLDER, &pixel_density.to_string())
}
