//! Ellipse drawing aid: a `width` × `height` ellipse centered on the local origin.
//!
//! The bounding box carries the same corner handles and edge ports as a box,
//! kept symmetric about the origin.

use crate::canvas::Owner;
use crate::errors::LoadError;
use crate::literal::Literal;
use crate::log::debug;
use crate::render::{DrawContext, path};
use crate::types::{Extent, Matrix, NumericError, Point};

use super::element::{Corner, Frame};
use super::handle::{Handle, LinePort};
use super::{ItemKind, SimpleItem, persist};

#[derive(Debug)]
pub struct Ellipse {
    id: Option<String>,
    owner: Owner,
    matrix: Matrix,
    frame: Frame,
}

impl Ellipse {
    pub fn new(id: Option<String>) -> Self {
        let mut ellipse = Self {
            id,
            owner: Owner::default(),
            matrix: Matrix::IDENTITY,
            frame: Frame::new(Point::ZERO),
        };
        ellipse.center();
        ellipse
    }

    pub fn handle(&self, corner: Corner) -> &Handle {
        self.frame.handle(corner)
    }

    pub fn handles(&self) -> &[Handle] {
        self.frame.handles()
    }

    pub fn ports(&self) -> &[LinePort] {
        self.frame.ports()
    }

    pub fn width(&self) -> Extent {
        self.frame.width()
    }

    pub fn height(&self) -> Extent {
        self.frame.height()
    }

    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), NumericError> {
        self.frame.set_width(Extent::try_new(width)?);
        self.center();
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), NumericError> {
        self.frame.set_height(Extent::try_new(height)?);
        self.center();
        Ok(())
    }

    /// Drag a corner to `pos`. The ellipse stays centered, so the opposite
    /// corner mirrors it through the origin.
    pub fn set_handle_pos(&mut self, pos: Point) -> Result<(), NumericError> {
        self.frame.span(pos, -pos)
    }

    fn center(&mut self) {
        let half = Point::new(self.width().half(), self.height().half());
        self.frame.place(-half);
    }
}

impl SimpleItem for Ellipse {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Ellipse
    }

    fn matrix(&self) -> Matrix {
        self.matrix
    }

    fn save(&self, emit: &mut dyn FnMut(&str, Literal)) {
        emit("matrix", self.matrix.into());
        emit("width", self.width().raw().into());
        emit("height", self.height().raw().into());
    }

    fn load(&mut self, name: &str, value: &str) -> Result<(), LoadError> {
        match name {
            "matrix" => self.matrix = persist::matrix(name, value)?,
            "width" => {
                self.frame.set_width(persist::extent(name, value)?);
                self.center();
            }
            "height" => {
                self.frame.set_height(persist::extent(name, value)?);
                self.center();
            }
            _ => {
                debug!(attribute = name, "ignoring unknown ellipse attribute");
            }
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let rx = self.width().half();
        let ry = self.height().half();
        path::ellipse(ctx.surface, Point::ZERO, rx, ry);
        ctx.apply_stroke_style();
        ctx.surface.stroke();
    }

    fn owner_mut(&mut self) -> &mut Owner {
        &mut self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, FixedStyle, RecordingSurface, Style};

    fn draw_ops(ellipse: &Ellipse, style: Style) -> Vec<DrawOp> {
        let style = FixedStyle(style);
        let mut surface = RecordingSurface::new();
        ellipse.draw(&mut DrawContext::new(&mut surface, &style));
        surface.into_ops()
    }

    #[test]
    fn path_starts_at_rightmost_point() {
        let mut e = Ellipse::new(None);
        e.set_width(40.0).unwrap();
        e.set_height(20.0).unwrap();
        let ops = draw_ops(&e, Style::default());
        assert_eq!(ops[0], DrawOp::MoveTo(Point::new(20.0, 0.0)));
        assert_eq!(ops.iter().filter(|op| matches!(op, DrawOp::CurveTo(..))).count(), 4);
        assert_eq!(ops.last(), Some(&DrawOp::Stroke));
    }

    #[test]
    fn degenerate_ellipse_draws_without_error() {
        let mut e = Ellipse::new(None);
        e.load("width", "0.0").unwrap();
        e.load("height", "0").unwrap();
        let ops = draw_ops(&e, Style::default());
        for op in &ops {
            match op {
                DrawOp::MoveTo(p) => assert_eq!(*p, Point::ZERO),
                DrawOp::CurveTo(a, b, c) => {
                    assert_eq!([*a, *b, *c], [Point::ZERO; 3]);
                }
                _ => {}
            }
        }
        assert_eq!(ops.last(), Some(&DrawOp::Stroke));
    }

    #[test]
    fn stroke_color_is_optional() {
        let e = Ellipse::new(None);
        let ops = draw_ops(&e, Style { stroke: None, ..Style::default() });
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::SourceRgba(_))));
        assert!(ops.contains(&DrawOp::LineWidth(2.0)));
    }

    #[test]
    fn corners_surround_origin() {
        let mut e = Ellipse::new(None);
        assert_eq!(e.handle(Corner::NW).pos, Point::new(-5.0, -5.0));
        e.load("width", "40.0").unwrap();
        e.load("height", "20.0").unwrap();
        assert_eq!(e.handle(Corner::NW).pos, Point::new(-20.0, -10.0));
        assert_eq!(e.handle(Corner::SE).pos, Point::new(20.0, 10.0));
        assert_eq!(e.handles().len(), 4);
        assert_eq!(e.ports()[1], LinePort::new(Point::new(20.0, -10.0), Point::new(20.0, 10.0)));
    }

    #[test]
    fn dragging_a_corner_stays_centered() {
        let mut e = Ellipse::new(None);
        e.set_handle_pos(Point::new(15.0, -4.0)).unwrap();
        assert_eq!((e.width().raw(), e.height().raw()), (30.0, 8.0));
        assert_eq!(e.handle(Corner::NW).pos, Point::new(-15.0, -4.0));

        let ops = draw_ops(&e, Style::default());
        assert_eq!(ops[0], DrawOp::MoveTo(Point::new(15.0, 0.0)));
    }

    #[test]
    fn port_glues_to_bounding_box() {
        let e = Ellipse::new(None);
        let (p, d) = e.ports()[0].glue(Point::new(1.0, -8.0));
        assert_eq!(p, Point::new(1.0, -5.0));
        assert_eq!(d, 3.0);
    }

    #[test]
    fn load_rejects_bool_width() {
        let mut e = Ellipse::new(None);
        assert!(matches!(
            e.load("width", "True"),
            Err(LoadError::WrongShape { .. })
        ));
    }
}
