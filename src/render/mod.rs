//! Paint contract for the drawing aids
//!
//! This module is organized into submodules:
//! - `path`: path construction shared by the primitives
//! - `recording`: a surface that records every call, for assertions
//!
//! Primitives only ever call into a [`Surface`]; they never decide colors
//! themselves. The ambient [`StyleResolver`] turns the current [`DrawState`]
//! into a concrete [`Style`].

pub mod path;
pub mod recording;

pub use recording::{DrawOp, RecordingSurface};

use crate::defaults;
use crate::types::{Point, Rgba};

/// Low-level 2-D drawing backend
pub trait Surface {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn curve_to(&mut self, c1: Point, c2: Point, end: Point);
    fn rectangle(&mut self, origin: Point, width: f64, height: f64);
    fn close_path(&mut self);
    fn set_source_rgba(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Stroke and clear the current path.
    fn stroke(&mut self);
}

/// Resolved paint for one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// `None` means the item is not stroked with a color of its own.
    pub stroke: Option<Rgba>,
    /// Carried for completeness; the drawing aids never fill.
    pub fill: Option<Rgba>,
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some(defaults::STROKE),
            fill: None,
            line_width: defaults::LINE_WIDTH,
        }
    }
}

/// Interaction state of the item being drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawState {
    pub selected: bool,
    pub focused: bool,
    pub hovered: bool,
}

/// Turns paint and theme state into a concrete style
pub trait StyleResolver {
    fn resolve(&self, state: &DrawState) -> Style;
}

/// A resolver that ignores interaction state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedStyle(pub Style);

impl StyleResolver for FixedStyle {
    fn resolve(&self, _state: &DrawState) -> Style {
        self.0
    }
}

/// Everything a primitive needs to paint itself
pub struct DrawContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub style: &'a dyn StyleResolver,
    pub state: DrawState,
}

impl<'a> DrawContext<'a> {
    pub fn new(surface: &'a mut dyn Surface, style: &'a dyn StyleResolver) -> Self {
        Self {
            surface,
            style,
            state: DrawState::default(),
        }
    }

    pub fn with_state(mut self, state: DrawState) -> Self {
        self.state = state;
        self
    }

    pub fn combined_style(&self) -> Style {
        self.style.resolve(&self.state)
    }

    /// Select the resolved stroke color (if any) and line width.
    pub(crate) fn apply_stroke_style(&mut self) {
        let style = self.combined_style();
        if let Some(color) = style.stroke {
            self.surface.set_source_rgba(color);
        }
        self.surface.set_line_width(style.line_width);
    }
}
