//! Builds the sampling grid: a rectangle of the complex plane cut
//! into evenly spaced sample points, `density` of them per unit of
//! length along each axis.
use num::Complex;

use errors::MandelbrotError;

/// The most samples a grid or a canvas may hold, about 67 million.
/// The densest default plot (1280x1536) is well under it.
pub const MAX_SAMPLES: usize = 1 << 26;

/// The rectangle of the complex plane being plotted, treating the
/// real part as the x-component and the imaginary part as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

/// The classic view of the set: the whole cardioid and its bulbs.
pub const DEFAULT_REGION: Region = Region {
    real_min: -2.0,
    real_max: 0.5,
    imag_min: -1.5,
    imag_max: 1.5,
};

impl Region {
    /// Constructor.  The minimum of each axis must be strictly less
    /// than its maximum.
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Region, MandelbrotError> {
        // Written as negations so that NaN bounds are rejected too.
        if !(real_min < real_max) {
            return Err(MandelbrotError::InvalidRegion(format!(
                "real axis runs from {} to {}",
                real_min, real_max
            )));
        }
        if !(imag_min < imag_max) {
            return Err(MandelbrotError::InvalidRegion(format!(
                "imaginary axis runs from {} to {}",
                imag_min, imag_max
            )));
        }
        Ok(Region {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Left-lower corner, as a complex number.
    pub fn leftlower(&self) -> Complex<f64> {
        Complex::new(self.real_min, self.imag_min)
    }

    /// Right-upper corner, as a complex number.
    pub fn rightupper(&self) -> Complex<f64> {
        Complex::new(self.real_max, self.imag_max)
    }

    /// Extent along the real axis.
    pub fn width(&self) -> f64 {
        self.real_max - self.real_min
    }

    /// Extent along the imaginary axis.
    pub fn height(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    /// Number of samples along each axis at the given density.  The
    /// products are truncated toward zero, never rounded.
    pub fn dimensions(&self, pixel_density: u32) -> (usize, usize) {
        let density = f64::from(pixel_density);
        (
            (self.width() * density) as usize,
            (self.height() * density) as usize,
        )
    }
}

impl Default for Region {
    fn default() -> Region {
        DEFAULT_REGION
    }
}

/// `count` evenly spaced values from `start` to `stop`, both ends
/// included.  The last value is pinned to `stop` exactly.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (stop - start) / ((count - 1) as f64);
    (0..count)
        .map(|i| {
            if i == count - 1 {
                stop
            } else {
                start + (i as f64) * step
            }
        })
        .collect()
}

/// A row-major grid of complex sample points.  Row 0 lies on the
/// region's minimum imaginary value, column 0 on its minimum real
/// value.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    region: Region,
    width: usize,
    height: usize,
    points: Vec<Complex<f64>>,
}

impl Grid {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of sample points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Describes that the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The region this grid samples.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The sample at `row`, `col`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<Complex<f64>> {
        if row < self.height && col < self.width {
            Some(self.points[row * self.width + col])
        } else {
            None
        }
    }

    /// Every sample, in row-major order.
    pub fn points(&self) -> &[Complex<f64>] {
        &self.points
    }

    /// The grid, one row slice at a time.
    pub fn rows(&self) -> ::std::slice::Chunks<Complex<f64>> {
        self.points.chunks(self.width)
    }
}

/// Cut `region` into a grid with `pixel_density` samples per unit
/// length along each axis.
pub fn build_grid(region: Region, pixel_density: u32) -> Result<Grid, MandelbrotError> {
    if pixel_density < 1 {
        return Err(MandelbrotError::InvalidDensity(pixel_density));
    }

    let (width, height) = region.dimensions(pixel_density);
    if width == 0 || height == 0 {
        return Err(MandelbrotError::InvalidRegion(format!(
            "a density of {} leaves a {}x{} grid",
            pixel_density, width, height
        )));
    }
    match width.checked_mul(height) {
        Some(samples) if samples <= MAX_SAMPLES => {}
        _ => {
            return Err(MandelbrotError::InvalidRegion(format!(
                "a density of {} asks for a {}x{} grid, more than {} samples",
                pixel_density, width, height, MAX_SAMPLES
            )));
        }
    }

    let real = linspace(region.real_min, region.real_max, width);
    let imag = linspace(region.imag_min, region.imag_max, height);

    let mut points = Vec::with_capacity(width * height);
    for im in &imag {
        for re in &real {
            points.push(Complex::new(*re, *im));
        }
    }

    debug!(
        "built a {}x{} grid at density {}",
        width, height, pixel_density
    );

    Ok(Grid {
        region,
        width,
        height,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_fails_on_inverted_axes() {
        assert!(Region::new(0.5, -2.0, -1.5, 1.5).is_err());
        assert!(Region::new(-2.0, 0.5, 1.5, -1.5).is_err());
        assert!(Region::new(-2.0, -2.0, -1.5, 1.5).is_err());
    }

    #[test]
    fn region_fails_on_nan() {
        assert!(Region::new(::std::f64::NAN, 0.5, -1.5, 1.5).is_err());
    }

    #[test]
    fn region_passes_on_good_shape() {
        let region = Region::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        assert_eq!(region.leftlower(), Complex::new(-1.0, -1.0));
        assert_eq!(region.rightupper(), Complex::new(1.0, 1.0));
    }

    #[test]
    fn dimensions_truncate_instead_of_rounding() {
        // 2.5 * 21 = 52.5 and 3 * 21 = 63
        assert_eq!(DEFAULT_REGION.dimensions(21), (52, 63));
        assert_eq!(DEFAULT_REGION.dimensions(512), (1280, 1536));
        let region = Region::new(0.0, 0.99, 0.0, 1.0).unwrap();
        assert_eq!(region.dimensions(2), (1, 2));
    }

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(-1.5, 1.5, 2), vec![-1.5, 1.5]);
    }

    #[test]
    fn linspace_of_one_is_the_start() {
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn grid_corners_are_the_region_corners() {
        let grid = build_grid(DEFAULT_REGION, 21).unwrap();
        assert_eq!(grid.width(), 52);
        assert_eq!(grid.height(), 63);
        assert_eq!(grid.len(), 52 * 63);
        assert_eq!(grid.points()[0], Complex::new(-2.0, -1.5));
        assert_eq!(grid.points()[grid.len() - 1], Complex::new(0.5, 1.5));
        assert_eq!(grid.get(62, 51), Some(Complex::new(0.5, 1.5)));
        assert_eq!(grid.get(63, 0), None);
    }

    #[test]
    fn grid_is_an_outer_sum_in_row_major_order() {
        let region = Region::new(0.0, 2.0, 0.0, 1.0).unwrap();
        let grid = build_grid(region, 2).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        let expected: Vec<Complex<f64>> = vec![
            Complex::new(0.0, 0.0),
            Complex::new(2.0 / 3.0, 0.0),
            Complex::new(4.0 / 3.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(2.0 / 3.0, 1.0),
            Complex::new(4.0 / 3.0, 1.0),
            Complex::new(2.0, 1.0),
        ];
        assert_eq!(grid.points(), &expected[..]);
        let rows: Vec<&[Complex<f64>]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].iter().all(|c| c.im == 1.0));
    }

    #[test]
    fn grid_fails_on_zero_density() {
        assert_eq!(
            build_grid(DEFAULT_REGION, 0),
            Err(MandelbrotError::InvalidDensity(0))
        );
    }

    #[test]
    fn grid_fails_past_the_sample_limit() {
        for density in &[u32::max_value(), 4_000_000_000, 3000] {
            match build_grid(DEFAULT_REGION, *density) {
                Err(MandelbrotError::InvalidRegion(_)) => {}
                other => panic!("expected InvalidRegion, got {:?}", other.map(|g| g.len())),
            }
        }
        let huge = Region::new(-1e10, 1e10, -1e10, 1e10).unwrap();
        assert!(build_grid(huge, 1).is_err());
        let unbounded = Region::new(::std::f64::MIN, ::std::f64::MAX, -1.0, 1.0).unwrap();
        assert!(build_grid(unbounded, 1).is_err());
    }

    #[test]
    fn grid_at_the_largest_cli_density_fits() {
        let (width, height) = DEFAULT_REGION.dimensions(2048);
        assert!(width * height <= MAX_SAMPLES);
    }

    #[test]
    fn grid_fails_when_a_dimension_truncates_to_zero() {
        let region = Region::new(0.0, 0.5, 0.0, 1.0).unwrap();
        match build_grid(region, 1) {
            Err(MandelbrotError::InvalidRegion(_)) => {}
            other => panic!("expected InvalidRegion, got {:?}", other),
        }
    }
}
