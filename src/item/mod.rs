//! The drawing aids and their shared lifecycle
//!
//! Every primitive implements [`SimpleItem`]: it writes its geometry through
//! `save`, reads it back one attribute at a time through `load`, settles
//! order-dependent state in `postload`, and leaves its canvas through
//! `detach`. [`Item`] wraps the three primitives for code that handles them
//! uniformly, such as a document loader.

mod box_item;
mod element;
mod ellipse;
mod handle;
mod line;
pub(crate) mod persist;

pub use box_item::BoxItem;
pub use element::Corner;
pub use ellipse::Ellipse;
pub use handle::{Handle, HandleId, LinePort};
pub use line::Line;

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::canvas::Owner;
use crate::errors::LoadError;
use crate::literal::Literal;
use crate::render::DrawContext;
use crate::types::Matrix;

/// Save/load/paint contract shared by the drawing aids
#[enum_dispatch]
pub trait SimpleItem {
    /// Identifier assigned by the document layer, if any.
    fn id(&self) -> Option<&str>;

    fn kind(&self) -> ItemKind;

    fn matrix(&self) -> Matrix;

    /// Emit every persisted attribute exactly once.
    fn save(&self, emit: &mut dyn FnMut(&str, Literal));

    /// Apply one previously saved attribute. Unknown names are ignored.
    fn load(&mut self, name: &str, value: &str) -> Result<(), LoadError>;

    /// Called once after the last `load` for this instance.
    fn postload(&mut self) -> Result<(), LoadError> {
        Ok(())
    }

    fn draw(&self, ctx: &mut DrawContext<'_>);

    fn owner_mut(&mut self) -> &mut Owner;

    /// Remove the item from its canvas. A no-op when it has none.
    fn detach(&mut self) {
        self.owner_mut().release();
    }
}

/// Type names as stored by the document layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Line,
    Box,
    Ellipse,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Line => "Line",
            ItemKind::Box => "Box",
            ItemKind::Ellipse => "Ellipse",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Line" => Ok(ItemKind::Line),
            "Box" => Ok(ItemKind::Box),
            "Ellipse" => Ok(ItemKind::Ellipse),
            _ => Err(LoadError::UnknownKind { kind: s.to_string() }),
        }
    }
}

/// Any of the drawing aids
#[enum_dispatch(SimpleItem)]
#[derive(Debug)]
pub enum Item {
    Line(Line),
    Box(BoxItem),
    Ellipse(Ellipse),
}

impl Item {
    /// A bare primitive with default geometry.
    pub fn new(kind: ItemKind, id: Option<String>) -> Item {
        match kind {
            ItemKind::Line => Item::Line(Line::new(id)),
            ItemKind::Box => Item::Box(BoxItem::new(id)),
            ItemKind::Ellipse => Item::Ellipse(Ellipse::new(id)),
        }
    }

    /// Saved attributes as `(name, text)` pairs, in emit order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.save(&mut |name: &str, value: Literal| out.push((name.to_string(), value.to_string())));
        out
    }

    /// Construct a primitive and run the full load sequence on it.
    pub fn restore<'a>(
        kind: ItemKind,
        id: Option<String>,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Item, LoadError> {
        let mut item = Item::new(kind, id);
        for (name, value) in attributes {
            item.load(name, value)?;
        }
        item.postload()?;
        Ok(item)
    }
}
