//! The two ways of painting the set.  "dots" scatters the member
//! points over a canvas; "normal" paints the stability mask itself,
//! one pixel per sample.  Neither draws axes or borders, and neither
//! writes anything anywhere: they hand back an in-memory image.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use image::{GrayImage, Luma};
use itertools::iproduct;
use num::Complex;

use errors::MandelbrotError;
use escape::{extract_members, Mask};
use grid::{Grid, Region};
use planes::{Pixel, PlaneMapper};

fn black() -> Luma<u8> {
    Luma([0])
}

fn white() -> Luma<u8> {
    Luma([255])
}

/// Canvas pixels per unit length for the scatter renderer.
pub const DEFAULT_DOTS_SCALE: f64 = 256.0;

/// The painting type selected on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaintType {
    /// A scatter of the stable points.
    Dots,
    /// A filled black-and-white image of the stability mask.
    Normal,
}

impl FromStr for PaintType {
    type Err = MandelbrotError;

    fn from_str(s: &str) -> Result<PaintType, MandelbrotError> {
        match s {
            "dots" => Ok(PaintType::Dots),
            "normal" => Ok(PaintType::Normal),
            _ => Err(MandelbrotError::UnknownPaintType(s.to_string())),
        }
    }
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PaintType::Dots => write!(f, "dots"),
            PaintType::Normal => write!(f, "normal"),
        }
    }
}

/// Plots every member point as a single black pixel on a white
/// canvas whose size follows the region at `scale` pixels per unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DotsRenderer {
    scale: f64,
}

impl DotsRenderer {
    /// A scatter renderer with a custom scale.
    pub fn with_scale(scale: f64) -> DotsRenderer {
        DotsRenderer { scale }
    }

    /// Scatter `points` over a canvas covering `region`.  Points
    /// outside the region are dropped.  Fails when the scale is not a
    /// finite positive number or the canvas would be too large.
    pub fn produce_image(
        &self,
        region: &Region,
        points: &[Complex<f64>],
    ) -> Result<GrayImage, MandelbrotError> {
        let plane = PlaneMapper::new(*region, self.scale)?;
        let (width, height) = match (u32::try_from(plane.canvas.0), u32::try_from(plane.canvas.1)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(MandelbrotError::InvalidRegion(format!(
                    "a {}x{} canvas does not fit an image",
                    plane.canvas.0, plane.canvas.1
                )))
            }
        };
        let mut image = GrayImage::from_pixel(width, height, white());
        for point in points {
            if let Some(Pixel(left, top)) = plane.point_to_pixel(point) {
                image.put_pixel(left as u32, top as u32, black());
            }
        }
        Ok(image)
    }
}

impl Default for DotsRenderer {
    fn default() -> DotsRenderer {
        DotsRenderer::with_scale(DEFAULT_DOTS_SCALE)
    }
}

/// Paints the mask directly: stable cells black, the rest white, cell
/// `[row][col]` on pixel `(col, row)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MaskRenderer;

impl MaskRenderer {
    /// A `width` by `height` image of the mask.
    pub fn produce_image(&self, mask: &Mask) -> GrayImage {
        let mut image = GrayImage::from_pixel(mask.width() as u32, mask.height() as u32, white());
        for (row, col) in iproduct!(0..mask.height(), 0..mask.width()) {
            if mask.get(row, col) == Some(true) {
                image.put_pixel(col as u32, row as u32, black());
            }
        }
        image
    }
}

/// One renderer per painting type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Renderer {
    /// See `DotsRenderer`.
    Dots(DotsRenderer),
    /// See `MaskRenderer`.
    Normal(MaskRenderer),
}

impl Renderer {
    /// The default renderer for a painting type.
    pub fn for_paint_type(paint_type: PaintType) -> Renderer {
        match paint_type {
            PaintType::Dots => Renderer::Dots(DotsRenderer::default()),
            PaintType::Normal => Renderer::Normal(MaskRenderer),
        }
    }

    /// The painting type this renderer implements.
    pub fn paint_type(&self) -> PaintType {
        match *self {
            Renderer::Dots(_) => PaintType::Dots,
            Renderer::Normal(_) => PaintType::Normal,
        }
    }

    /// Paint `mask`, which must have been evaluated over `grid`.  The
    /// scatter renderer first projects the mask onto the grid.
    pub fn produce_image(&self, grid: &Grid, mask: &Mask) -> Result<GrayImage, MandelbrotError> {
        match *self {
            Renderer::Dots(ref dots) => {
                let members = extract_members(grid, mask)?;
                debug!("scattering {} member points", members.len());
                dots.produce_image(grid.region(), &members)
            }
            Renderer::Normal(ref normal) => {
                mask.check_shape(grid)?;
                Ok(normal.produce_image(mask))
            }
        }
    }
}

/// Paint `mask` over `grid` the way `paint_type` asks for.
pub fn render(paint_type: PaintType, grid: &Grid, mask: &Mask) -> Result<GrayImage, MandelbrotError> {
    Renderer::for_paint_type(paint_type).produce_image(grid, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape::evaluate;
    use grid::{build_grid, DEFAULT_REGION};
    use itertools::iproduct;

    fn black_pixels(image: &GrayImage) -> usize {
        image.pixels().filter(|p| **p == black()).count()
    }

    #[test]
    fn paint_types_parse_and_print() {
        assert_eq!("dots".parse::<PaintType>(), Ok(PaintType::Dots));
        assert_eq!("normal".parse::<PaintType>(), Ok(PaintType::Normal));
        assert_eq!(
            "Dots".parse::<PaintType>(),
            Err(MandelbrotError::UnknownPaintType("Dots".to_string()))
        );
        assert_eq!(PaintType::Normal.to_string(), "normal");
    }

    #[test]
    fn renderer_follows_the_paint_type() {
        for paint_type in &[PaintType::Dots, PaintType::Normal] {
            assert_eq!(Renderer::for_paint_type(*paint_type).paint_type(), *paint_type);
        }
    }

    #[test]
    fn mask_image_has_the_mask_shape() {
        let grid = build_grid(DEFAULT_REGION, 21).unwrap();
        let mask = evaluate(&grid, 20).unwrap();
        let image = render(PaintType::Normal, &grid, &mask).unwrap();
        assert_eq!(image.dimensions(), (52, 63));
        assert_eq!(black_pixels(&image), mask.count());
        for (row, col) in iproduct!(0..mask.height(), 0..mask.width()) {
            let expected = if mask.get(row, col).unwrap() { black() } else { white() };
            assert_eq!(*image.get_pixel(col as u32, row as u32), expected);
        }
    }

    #[test]
    fn mask_columns_run_along_the_real_axis() {
        // Samples -0.5, 0.83, 2.17 and 3.5; only the first two are
        // within two of the origin.
        let grid = build_grid(Region::new(-0.5, 3.5, -0.5, 0.5).unwrap(), 1).unwrap();
        let mask = evaluate(&grid, 1).unwrap();
        let image = MaskRenderer.produce_image(&mask);
        assert_eq!(image.dimensions(), (4, 1));
        let row: Vec<Luma<u8>> = (0..4).map(|x| *image.get_pixel(x, 0)).collect();
        assert_eq!(row, vec![black(), black(), white(), white()]);
    }

    #[test]
    fn mask_row_zero_is_the_minimum_imaginary_value() {
        let grid = build_grid(Region::new(-0.5, 0.5, -0.5, 3.5).unwrap(), 1).unwrap();
        let mask = evaluate(&grid, 1).unwrap();
        let image = MaskRenderer.produce_image(&mask);
        assert_eq!(image.dimensions(), (1, 4));
        let column: Vec<Luma<u8>> = (0..4).map(|y| *image.get_pixel(0, y)).collect();
        assert_eq!(column, vec![black(), black(), white(), white()]);
    }

    #[test]
    fn dots_image_keeps_the_region_aspect_ratio() {
        let grid = build_grid(DEFAULT_REGION, 21).unwrap();
        let mask = evaluate(&grid, 20).unwrap();
        let image = render(PaintType::Dots, &grid, &mask).unwrap();
        assert_eq!(image.dimensions(), (641, 769));
        // Samples are about a dozen pixels apart, so none share a pixel.
        assert_eq!(black_pixels(&image), mask.count());
    }

    #[test]
    fn dots_land_on_their_coordinates() {
        let region = Region::new(0.0, 4.0, 0.0, 2.0).unwrap();
        let image = DotsRenderer::with_scale(2.0)
            .produce_image(
                &region,
                &[Complex::new(0.0, 0.0), Complex::new(1.5, 0.5), Complex::new(4.0, 2.0)],
            )
            .unwrap();
        assert_eq!(image.dimensions(), (9, 5));
        assert_eq!(black_pixels(&image), 3);
        assert_eq!(*image.get_pixel(0, 0), black());
        assert_eq!(*image.get_pixel(3, 1), black());
        assert_eq!(*image.get_pixel(8, 4), black());
    }

    #[test]
    fn dots_refuse_a_bad_scale() {
        let points = [Complex::new(0.0, 0.0)];
        for scale in &[::std::f64::INFINITY, ::std::f64::NAN, 0.0, -1.0] {
            match DotsRenderer::with_scale(*scale).produce_image(&DEFAULT_REGION, &points) {
                Err(MandelbrotError::InvalidScale(_)) => {}
                other => panic!("expected InvalidScale, got {:?}", other.map(|i| i.dimensions())),
            }
        }
        assert!(DotsRenderer::with_scale(1.0e12)
            .produce_image(&DEFAULT_REGION, &points)
            .is_err());
    }

    #[test]
    fn renderers_refuse_a_foreign_mask() {
        let grid = build_grid(DEFAULT_REGION, 21).unwrap();
        let other = build_grid(DEFAULT_REGION, 10).unwrap();
        let mask = evaluate(&other, 20).unwrap();
        assert!(render(PaintType::Dots, &grid, &mask).is_err());
        assert!(render(PaintType::Normal, &grid, &mask).is_err());
    }
}
