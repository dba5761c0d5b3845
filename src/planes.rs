//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! (the canvas) and a region of the complex plane.  The scatter
//! renderer uses it to drop each member point onto its pixel.
use num::Complex;

use errors::MandelbrotError;
use grid::{Region, MAX_SAMPLES};

/// Describes the x, y of a pixel on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps points of a complex region onto an integral canvas, using the
/// same scale on both axes so the picture is never stretched.  Row 0
/// of the canvas lies on the region's minimum imaginary value, like
/// row 0 of the sampling grid.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Width and height of the canvas, in pixels.
    pub canvas: (usize, usize),
    /// The region of the complex plane spread over the canvas.
    pub region: Region,
    // Pixels per unit length, on both axes.
    scale: f64,
}

impl PlaneMapper {
    /// Constructor.  The canvas is just large enough that the region's
    /// right-upper corner still lands on a pixel: `floor(extent *
    /// scale) + 1` along each axis.  The scale must be finite and
    /// positive, and the canvas must fit in `u32` sides and
    /// `MAX_SAMPLES` pixels.
    pub fn new(region: Region, scale: f64) -> Result<PlaneMapper, MandelbrotError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(MandelbrotError::InvalidScale(scale));
        }

        let limit = f64::from(u32::max_value());
        let width = (region.width() * scale).floor();
        let height = (region.height() * scale).floor();
        if !(width < limit && height < limit) {
            return Err(MandelbrotError::InvalidRegion(format!(
                "a scale of {} gives a canvas wider than {} pixels",
                scale, limit
            )));
        }

        let canvas = (width as usize + 1, height as usize + 1);
        match canvas.0.checked_mul(canvas.1) {
            Some(pixels) if pixels <= MAX_SAMPLES => {}
            _ => {
                return Err(MandelbrotError::InvalidRegion(format!(
                    "a scale of {} gives a {}x{} canvas, more than {} pixels",
                    scale, canvas.0, canvas.1, MAX_SAMPLES
                )));
            }
        }

        Ok(PlaneMapper {
            canvas,
            region,
            scale,
        })
    }

    /// The total number of pixels on the canvas.
    pub fn len(&self) -> usize {
        self.canvas.0 * self.canvas.1
    }

    /// Describes that the canvas holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a complex number inside the region, return the pixel it
    /// falls on.  Points outside the region have no pixel.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let origin = self.region.leftlower();
        let left = (point.re - origin.re) * self.scale;
        let top = (point.im - origin.im) * self.scale;
        if !(left >= 0.0 && top >= 0.0) {
            return None;
        }
        let (left, top) = (left as usize, top as usize);
        if left >= self.canvas.0 || top >= self.canvas.1 {
            return None;
        }
        Some(Pixel(left, top))
    }

    /// Given a pixel on the canvas, return the complex number at its
    /// left-lower corner.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let origin = self.region.leftlower();
        Complex::new(
            origin.re + (pixel.0 as f64) / self.scale,
            origin.im + (pixel.1 as f64) / self.scale,
        )
    }

    /// Linear offset of `point` from the root of a row-major canvas
    /// buffer.
    pub fn point_to_offset(&self, point: &Complex<f64>) -> Option<usize> {
        self.point_to_pixel(point)
            .map(|Pixel(left, top)| top * self.canvas.0 + left)
    }
}
