//! A surface that keeps every call as a [`DrawOp`].

use crate::types::{Point, Rgba};

use super::Surface;

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Rectangle { origin: Point, width: f64, height: f64 },
    ClosePath,
    SourceRgba(Rgba),
    LineWidth(f64),
    Stroke,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// True if any color was selected.
    pub fn selected_color(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, DrawOp::SourceRgba(_)))
    }
}

impl Surface for RecordingSurface {
    fn move_to(&mut self, p: Point) {
        self.ops.push(DrawOp::MoveTo(p))
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(DrawOp::LineTo(p))
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.ops.push(DrawOp::CurveTo(c1, c2, end))
    }

    fn rectangle(&mut self, origin: Point, width: f64, height: f64) {
        self.ops.push(DrawOp::Rectangle { origin, width, height })
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath)
    }

    fn set_source_rgba(&mut self, color: Rgba) {
        self.ops.push(DrawOp::SourceRgba(color))
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width))
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke)
    }
}
