//! The escape-time evaluator.  Every sample point `c` is iterated
//! under `z = z * z + c`, starting from zero, and is kept if its orbit
//! is still inside the circle of radius two when the iteration budget
//! runs out.

use crossbeam;
use num::Complex;

use errors::MandelbrotError;
use grid::Grid;

/// Is `c` stable, i.e. is `|z| <= 2` after `iterations` rounds of
/// `z = z * z + c`?
///
/// The loop leaves early once the orbit has passed the bailout radius:
/// from there it only diverges, so the final magnitude would fail the
/// test anyway.  Infinite or NaN magnitudes compare as unstable.
#[inline]
pub fn is_stable(c: Complex<f64>, iterations: usize) -> bool {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for _ in 0..iterations {
        z = z * z + c;
        if !(z.norm_sqr() <= 4.0) {
            return false;
        }
    }
    z.norm_sqr() <= 4.0
}

/// One boolean per grid sample: `true` where the orbit stayed bounded.
/// Same shape and order as the grid it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Mask {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `row`, `col`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Every cell, in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The mask, one row slice at a time.
    pub fn rows(&self) -> ::std::slice::Chunks<bool> {
        self.cells.chunks(self.width)
    }

    /// How many samples are stable.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    pub(crate) fn check_shape(&self, grid: &Grid) -> Result<(), MandelbrotError> {
        if self.width == grid.width() && self.height == grid.height() {
            Ok(())
        } else {
            Err(MandelbrotError::MaskShapeMismatch {
                grid_width: grid.width(),
                grid_height: grid.height(),
                mask_width: self.width,
                mask_height: self.height,
            })
        }
    }
}

fn check_budget(iterations: usize) -> Result<(), MandelbrotError> {
    if iterations < 1 {
        Err(MandelbrotError::InvalidIterationBudget(iterations))
    } else {
        Ok(())
    }
}

/// Fill `cells` with the stability of the matching `points`.
fn evaluate_band(points: &[Complex<f64>], cells: &mut [bool], iterations: usize) {
    for (cell, point) in cells.iter_mut().zip(points) {
        *cell = is_stable(*point, iterations);
    }
}

/// The single-threaded evaluator.
pub fn evaluate(grid: &Grid, iterations: usize) -> Result<Mask, MandelbrotError> {
    check_budget(iterations)?;
    let mut cells = vec![false; grid.len()];
    evaluate_band(grid.points(), &mut cells, iterations);
    Ok(Mask {
        width: grid.width(),
        height: grid.height(),
        cells,
    })
}

/// A multi-threaded version of `evaluate`.  The rows of the grid are
/// cut into one contiguous band per thread; each thread only writes
/// the mask cells of its own band, so no locking is needed and the
/// result is identical to the single-threaded one.
pub fn evaluate_threaded(
    grid: &Grid,
    iterations: usize,
    threads: usize,
) -> Result<Mask, MandelbrotError> {
    check_budget(iterations)?;
    if threads < 1 {
        return Err(MandelbrotError::InvalidThreadCount(threads));
    }

    let rows_per_band = (grid.height() + threads - 1) / threads;
    let band_size = rows_per_band * grid.width();
    let mut cells = vec![false; grid.len()];
    debug!(
        "evaluating {} rows in bands of {} on {} threads",
        grid.height(),
        rows_per_band,
        threads
    );

    crossbeam::scope(|spawner| {
        let bands = grid.points().chunks(band_size).zip(cells.chunks_mut(band_size));
        for (points, band) in bands {
            spawner.spawn(move |_| evaluate_band(points, band, iterations));
        }
    })
    .map_err(|_| MandelbrotError::WorkerPanic)?;

    Ok(Mask {
        width: grid.width(),
        height: grid.height(),
        cells,
    })
}

/// The points of `grid` whose mask cell is set, in row-major order.
pub fn extract_members(grid: &Grid, mask: &Mask) -> Result<Vec<Complex<f64>>, MandelbrotError> {
    mask.check_shape(grid)?;
    Ok(grid
        .points()
        .iter()
        .zip(mask.cells())
        .filter(|&(_, stable)| *stable)
        .map(|(point, _)| *point)
        .collect())
}
