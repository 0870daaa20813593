//! Corner handles and edge ports shared by the box and the ellipse
//!
//! ```text
//! NW +---+ NE
//!    |   |
//! SW +---+ SE
//! ```
//!
//! A [`Frame`] keeps the four corners consistent with `width`/`height`. Where
//! the frame sits is up to the owning primitive: a box is anchored at its NW
//! corner, an ellipse is centered on the local origin.

use crate::defaults;
use crate::types::{Extent, NumericError, Point};

use super::handle::{Handle, HandleIds, LinePort};

/// Corner handle indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NW = 0,
    NE = 1,
    SE = 2,
    SW = 3,
}

impl Corner {
    pub fn opposite(self) -> Corner {
        match self {
            Corner::NW => Corner::SE,
            Corner::NE => Corner::SW,
            Corner::SE => Corner::NW,
            Corner::SW => Corner::NE,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Frame {
    handles: [Handle; 4],
    ports: [LinePort; 4],
    width: Extent,
    height: Extent,
}

impl Frame {
    /// A default-sized frame with its NW corner at `nw`.
    pub(crate) fn new(nw: Point) -> Self {
        let mut ids = HandleIds::default();
        let mut corner = || Handle::new(ids.next(), nw, false);
        let handles = [corner(), corner(), corner(), corner()];
        let mut frame = Self {
            handles,
            ports: [LinePort::new(nw, nw); 4],
            width: defaults::ELEMENT_WIDTH,
            height: defaults::ELEMENT_HEIGHT,
        };
        frame.place(nw);
        frame
    }

    pub(crate) fn handle(&self, corner: Corner) -> &Handle {
        &self.handles[corner as usize]
    }

    pub(crate) fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub(crate) fn ports(&self) -> &[LinePort] {
        &self.ports
    }

    pub(crate) fn width(&self) -> Extent {
        self.width
    }

    pub(crate) fn height(&self) -> Extent {
        self.height
    }

    pub(crate) fn nw(&self) -> Point {
        self.handle(Corner::NW).pos
    }

    pub(crate) fn set_width(&mut self, width: Extent) {
        self.width = width;
    }

    pub(crate) fn set_height(&mut self, height: Extent) {
        self.height = height;
    }

    /// Resize to the rectangle spanned by `a` and `b`.
    ///
    /// Corners keep their compass names, so dragging a corner past its
    /// opposite swaps which handle ends up where.
    pub(crate) fn span(&mut self, a: Point, b: Point) -> Result<(), NumericError> {
        let size = (a - b).abs();
        let width = Extent::try_new(size.x)?;
        let height = Extent::try_new(size.y)?;
        self.width = width;
        self.height = height;
        self.place(a.min(b));
        Ok(())
    }

    /// Put the NW corner at `nw` and derive the rest from the current size.
    pub(crate) fn place(&mut self, nw: Point) {
        let (w, h) = (self.width.raw(), self.height.raw());
        self.handles[Corner::NW as usize].pos = nw;
        self.handles[Corner::NE as usize].pos = nw + Point::new(w, 0.0);
        self.handles[Corner::SE as usize].pos = nw + Point::new(w, h);
        self.handles[Corner::SW as usize].pos = nw + Point::new(0.0, h);

        let p = |c: Corner| self.handles[c as usize].pos;
        self.ports = [
            LinePort::new(p(Corner::NW), p(Corner::NE)),
            LinePort::new(p(Corner::NE), p(Corner::SE)),
            LinePort::new(p(Corner::SE), p(Corner::SW)),
            LinePort::new(p(Corner::SW), p(Corner::NW)),
        ];
    }
}
