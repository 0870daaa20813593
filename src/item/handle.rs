//! Handles (control points) and the ports derived from them

use crate::types::Point;

/// Identity of a handle within its primitive.
///
/// Positions in the handle sequence may shift when a polyline grows; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u32);

/// A movable control point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    id: HandleId,
    pub pos: Point,
    /// Whether other items may anchor onto this handle.
    pub connectable: bool,
}

impl Handle {
    pub fn new(id: HandleId, pos: Point, connectable: bool) -> Self {
        Self { id, pos, connectable }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }
}

/// Hands out handle ids for one primitive
#[derive(Debug, Clone, Default)]
pub(crate) struct HandleIds {
    next: u32,
}

impl HandleIds {
    pub(crate) fn next(&mut self) -> HandleId {
        let id = HandleId(self.next);
        self.next += 1;
        id
    }
}

/// A straight segment other items can glue onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePort {
    pub start: Point,
    pub end: Point,
}

impl LinePort {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Nearest point on the segment to `pos`, and its distance.
    pub fn glue(&self, pos: Point) -> (Point, f64) {
        let seg = self.end - self.start;
        let len2 = seg.length_squared();
        let point = if len2 == 0.0 {
            self.start
        } else {
            let t = ((pos - self.start).dot(seg) / len2).clamp(0.0, 1.0);
            self.start + seg * t
        };
        (point, point.distance(pos))
    }
}
