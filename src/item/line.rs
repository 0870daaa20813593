//! Polyline drawing aid
//!
//! A line is an ordered run of handles. The first and last handles are the
//! path endpoints and never connectable; interior handles are. The number of
//! handles is not fixed: loading a longer `points` list grows the run by
//! inserting after the head, so the endpoint handles keep their ids.
//!
//! # Orthogonal routing
//!
//! With `orthogonal` set, segments alternate between vertical and horizontal
//! (the first one is horizontal when `horizontal` is set). Applying that
//! rewrites interior handle positions, so it only makes sense once every
//! handle is in place. During a load the flag is parked and applied in
//! `postload`, whatever order the attributes arrive in.

use crate::canvas::Owner;
use crate::defaults;
use crate::errors::{ConstraintError, LoadError};
use crate::literal::Literal;
use crate::log::debug;
use crate::render::{DrawContext, path};
use crate::types::{Matrix, Point};

use super::handle::{Handle, HandleIds, LinePort};
use super::{ItemKind, SimpleItem, persist};

#[derive(Debug)]
pub struct Line {
    id: Option<String>,
    owner: Owner,
    matrix: Matrix,
    handles: Vec<Handle>,
    ports: Vec<LinePort>,
    ids: HandleIds,
    orthogonal: bool,
    horizontal: bool,
    /// `orthogonal` as loaded, waiting for `postload`.
    pending_orthogonal: Option<bool>,
}

impl Line {
    pub fn new(id: Option<String>) -> Self {
        let mut ids = HandleIds::default();
        let handles = vec![
            Handle::new(ids.next(), Point::ZERO, false),
            Handle::new(ids.next(), defaults::LINE_END, false),
        ];
        let mut line = Self {
            id,
            owner: Owner::default(),
            matrix: Matrix::IDENTITY,
            handles,
            ports: Vec::new(),
            ids,
            orthogonal: false,
            horizontal: false,
            pending_orthogonal: None,
        };
        line.update_ports();
        line
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn ports(&self) -> &[LinePort] {
        &self.ports
    }

    pub fn set_matrix(&mut self, matrix: Matrix) {
        self.matrix = matrix;
    }

    pub fn orthogonal(&self) -> bool {
        self.orthogonal
    }

    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Enable or disable orthogonal routing.
    ///
    /// Enabling needs at least three handles: with only two there is no
    /// interior point to bend at.
    pub fn set_orthogonal(&mut self, orthogonal: bool) -> Result<(), ConstraintError> {
        if orthogonal && self.handles.len() < 3 {
            return Err(ConstraintError::TooFewHandles {
                count: self.handles.len(),
            });
        }
        self.orthogonal = orthogonal;
        self.apply_constraints();
        Ok(())
    }

    /// Choose whether the first segment is horizontal. Re-routes an orthogonal line.
    pub fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
        self.apply_constraints();
    }

    /// Move one handle, then re-route and refresh the ports.
    ///
    /// Returns `false` if there is no handle at `index`.
    pub fn set_handle_pos(&mut self, index: usize, pos: Point) -> bool {
        let Some(handle) = self.handles.get_mut(index) else {
            return false;
        };
        handle.pos = pos;
        self.apply_constraints();
        true
    }

    fn apply_constraints(&mut self) {
        if self.orthogonal {
            self.route_orthogonal();
        }
        self.update_ports();
    }

    /// Snap interior handles so segments alternate vertical/horizontal.
    /// Endpoints never move.
    fn route_orthogonal(&mut self) {
        let n = self.handles.len();
        if n < 3 {
            return;
        }
        let rest = usize::from(self.horizontal);
        let vertical = |segment: usize| segment % 2 == rest;

        // Walk forward, each handle taking one coordinate from its predecessor
        for segment in 0..n - 2 {
            let anchor = self.handles[segment].pos;
            let next = &mut self.handles[segment + 1].pos;
            if vertical(segment) {
                next.x = anchor.x;
            } else {
                next.y = anchor.y;
            }
        }

        // The last segment ends at a fixed handle, so its start gives way
        let last = n - 2;
        let end = self.handles[n - 1].pos;
        let before = &mut self.handles[n - 2].pos;
        if vertical(last) {
            before.x = end.x;
        } else {
            before.y = end.y;
        }
    }

    fn update_ports(&mut self) {
        self.ports = self
            .handles
            .windows(2)
            .map(|pair| LinePort::new(pair[0].pos, pair[1].pos))
            .collect();
    }

    /// Make the handle count match `count`, keeping both endpoints.
    fn resize_handles(&mut self, count: usize) {
        let current = self.handles.len();
        if count > current {
            let added = count - current;
            debug!(added, "growing line");
            let fresh: Vec<Handle> = (0..added)
                .map(|_| Handle::new(self.ids.next(), Point::ZERO, true))
                .collect();
            self.handles.splice(1..1, fresh);
        } else if count < current {
            debug!(removed = current - count, "shrinking line");
            self.handles.drain(1..1 + (current - count));
        }
    }

    fn load_points(&mut self, name: &str, value: &str) -> Result<(), LoadError> {
        let points = persist::points(name, value)?;
        if points.len() < 2 {
            return Err(LoadError::TooFewPoints {
                count: points.len(),
            });
        }
        self.resize_handles(points.len());
        for (handle, pos) in self.handles.iter_mut().zip(points) {
            handle.pos = pos;
        }
        if self.orthogonal && self.handles.len() < 3 {
            debug!(count = self.handles.len(), "too few handles, dropping orthogonal");
            self.orthogonal = false;
        }
        self.apply_constraints();
        Ok(())
    }
}

impl SimpleItem for Line {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Line
    }

    fn matrix(&self) -> Matrix {
        self.matrix
    }

    fn save(&self, emit: &mut dyn FnMut(&str, Literal)) {
        emit("matrix", self.matrix.into());
        emit("orthogonal", self.orthogonal.into());
        emit("horizontal", self.horizontal.into());
        emit("points", Literal::points(self.handles.iter().map(|h| &h.pos)));
    }

    fn load(&mut self, name: &str, value: &str) -> Result<(), LoadError> {
        match name {
            "matrix" => self.matrix = persist::matrix(name, value)?,
            "points" => self.load_points(name, value)?,
            "horizontal" => self.set_horizontal(persist::boolean(name, value)?),
            "orthogonal" => self.pending_orthogonal = Some(persist::boolean(name, value)?),
            _ => {
                debug!(attribute = name, "ignoring unknown line attribute");
            }
        }
        Ok(())
    }

    fn postload(&mut self) -> Result<(), LoadError> {
        if let Some(orthogonal) = self.pending_orthogonal.take() {
            debug!(orthogonal, "applying deferred orthogonal");
            self.set_orthogonal(orthogonal)?;
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>) {
        ctx.apply_stroke_style();
        path::polyline(ctx.surface, self.handles.iter().map(|h| h.pos));
        ctx.surface.stroke();
    }

    fn owner_mut(&mut self) -> &mut Owner {
        &mut self.owner
    }
}
