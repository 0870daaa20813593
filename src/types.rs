//! Geometric value types shared by the primitives.
//!
//! Positions are plain `glam` vectors; the newtypes here exist where a raw
//! `f64` would let an illegal state through (negative extents, colors outside
//! the unit range) or where the persisted coefficient order matters.

use std::fmt;

use glam::{DAffine2, DMat2, DVec2};

/// A position in item-local coordinates.
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

/// A non-negative, finite length (width or height of a primitive).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Extent(f64);

impl Extent {
    pub const ZERO: Extent = Extent(0.0);

    /// Unchecked constructor for crate-internal defaults.
    #[inline]
    pub(crate) const fn new_unchecked(val: f64) -> Extent {
        Extent(val)
    }

    /// Create an Extent with validation (rejects NaN, infinite, negative)
    pub fn try_new(val: f64) -> Result<Extent, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Extent(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Half of this extent, the semi-axis of an ellipse.
    #[inline]
    pub fn half(self) -> f64 {
        self.0 / 2.0
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Affine transform from item-local to parent coordinates.
///
/// Coefficients are stored and persisted in the order
/// `(xx, yx, xy, yy, x0, y0)`: the two basis columns followed by the
/// translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix(DAffine2);

impl Matrix {
    pub const IDENTITY: Matrix = Matrix(DAffine2::IDENTITY);

    pub fn from_coefficients(c: [f64; 6]) -> Self {
        Matrix(DAffine2::from_cols_array(&c))
    }

    pub fn coefficients(&self) -> [f64; 6] {
        self.0.to_cols_array()
    }

    /// This transform followed by a translation in local coordinates.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Matrix(self.0 * DAffine2::from_translation(DVec2::new(dx, dy)))
    }

    /// This transform followed by a scale in local coordinates.
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Matrix(self.0 * DAffine2::from_mat2(DMat2::from_diagonal(DVec2::new(sx, sy))))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

/// RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}
