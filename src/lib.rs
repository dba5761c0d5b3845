#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot plotter
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit of zero under `z = z * z + c` never runs off to
//! infinity.  Once an orbit leaves the circle of radius two around the
//! origin it is guaranteed to escape, so a point is considered a
//! member if, after a fixed number of iterations, it is still inside
//! that circle.
//!
//! The work happens in three steps.  A region of the complex plane is
//! cut into a grid of sample points (`grid`); every sample is iterated
//! and marked stable or not in a boolean mask (`escape`); and the
//! result is painted (`render`), either as a scatter of the stable
//! points ("dots") or as a black-and-white picture of the mask itself
//! ("normal").  `plot` ties the three together and knows the defaults
//! for each painting type.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod errors;
pub mod escape;
pub mod grid;
pub mod planes;
pub mod plot;
pub mod render;

pub use errors::MandelbrotError;
pub use escape::{evaluate, evaluate_threaded, extract_members, is_stable, Mask};
pub use grid::{build_grid, Grid, Region, DEFAULT_REGION, MAX_SAMPLES};
pub use plot::{output_name, PaintDefaults, Plot, DEFAULT_NAME, MAX_PIXEL_DENSITY};
pub use render::{render, DotsRenderer, MaskRenderer, PaintType, Renderer};
