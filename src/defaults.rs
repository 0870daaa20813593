//! Default sizes and paint settings for freshly constructed primitives

use crate::types::{Extent, Point, Rgba};

pub const LINE_WIDTH: f64 = 2.0;
pub const STROKE: Rgba = Rgba::BLACK;
pub const ELEMENT_WIDTH: Extent = Extent::new_unchecked(10.0);
pub const ELEMENT_HEIGHT: Extent = Extent::new_unchecked(10.0);
/// Tail of a new line; the head sits at the local origin.
pub const LINE_END: Point = Point::new(10.0, 10.0);
