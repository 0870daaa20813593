//! Box drawing aid
//!
//! Anchored at its NW corner: the other three corners follow from NW plus
//! `width`/`height`.

use crate::canvas::Owner;
use crate::errors::LoadError;
use crate::literal::Literal;
use crate::log::debug;
use crate::render::DrawContext;
use crate::types::{Extent, Matrix, NumericError, Point};

use super::element::{Corner, Frame};
use super::handle::{Handle, LinePort};
use super::{ItemKind, SimpleItem, persist};

#[derive(Debug)]
pub struct BoxItem {
    id: Option<String>,
    owner: Owner,
    matrix: Matrix,
    frame: Frame,
}

impl BoxItem {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            owner: Owner::default(),
            matrix: Matrix::IDENTITY,
            frame: Frame::new(Point::ZERO),
        }
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
        self.sync_corners();
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), NumericError> {
        self.frame.set_height(Extent::try_new(height)?);
        self.sync_corners();
        Ok(())
    }

    /// Move the box so its NW corner sits at `pos`, keeping its size.
    pub fn set_nw(&mut self, pos: Point) {
        self.frame.place(pos);
    }

    /// Drag one corner to `pos`. The opposite corner stays put.
    pub fn set_handle_pos(&mut self, corner: Corner, pos: Point) -> Result<(), NumericError> {
        let anchor = self.frame.handle(corner.opposite()).pos;
        self.frame.span(pos, anchor)
    }

    fn sync_corners(&mut self) {
        let nw = self.frame.nw();
        self.frame.place(nw);
    }
}

impl SimpleItem for BoxItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Box
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
                self.sync_corners();
            }
            "height" => {
                self.frame.set_height(persist::extent(name, value)?);
                self.sync_corners();
            }
            _ => {
                debug!(attribute = name, "ignoring unknown box attribute");
            }
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        let nw = self.frame.nw();
        ctx.surface.rectangle(nw, self.width().raw(), self.height().raw());
        ctx.apply_stroke_style();
        ctx.surface.stroke();
    }

    fn owner_mut(&mut self) -> &mut Owner {
        &mut self.owner
    }
}
