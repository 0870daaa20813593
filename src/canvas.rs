//! Canvas membership.
//!
//! The canvas owns placement, z-order and handle machinery; the primitives only
//! remember which canvas they belong to so that [`SimpleItem::detach`] can remove
//! them again. The back-reference is weak: a primitive never keeps its canvas
//! alive, and detaching from a canvas that is already gone does nothing.
//!
//! [`SimpleItem::detach`]: crate::item::SimpleItem::detach

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::item::SimpleItem;
use crate::log::{debug, warn};

/// Identifies one member of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

/// The owning canvas, as seen from a primitive
pub trait Canvas {
    fn remove(&mut self, key: ItemKey);
}

/// A primitive's membership in a canvas
#[derive(Default)]
pub struct Owner {
    membership: Option<(Weak<RefCell<dyn Canvas>>, ItemKey)>,
}

impl Owner {
    pub fn attach(&mut self, canvas: Weak<RefCell<dyn Canvas>>, key: ItemKey) {
        self.membership = Some((canvas, key));
    }

    pub fn key(&self) -> Option<ItemKey> {
        self.membership.as_ref().map(|(_, key)| *key)
    }

    pub fn is_attached(&self) -> bool {
        self.membership
            .as_ref()
            .is_some_and(|(canvas, _)| canvas.strong_count() > 0)
    }

    /// Remove the item from its canvas, if it has one. Safe to call repeatedly.
    pub fn release(&mut self) {
        let Some((canvas, key)) = self.membership.take() else {
            return;
        };
        let Some(canvas) = canvas.upgrade() else {
            debug!(?key, "canvas already dropped");
            return;
        };
        let Ok(mut canvas) = canvas.try_borrow_mut() else {
            warn!(?key, "canvas busy, item not removed");
            return;
        };
        canvas.remove(key);
    }
}

impl fmt::Debug for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owner")
            .field("key", &self.key())
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// A minimal canvas tracking its members in insertion order
#[derive(Debug, Default)]
pub struct Diagram {
    members: Vec<ItemKey>,
    next_key: u64,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// A diagram ready to hand out weak references to its items.
    pub fn shared() -> Rc<RefCell<Diagram>> {
        Rc::new(RefCell::new(Diagram::new()))
    }

    /// Add `item` to the diagram, detaching it from any previous canvas first.
    pub fn add(this: &Rc<RefCell<Diagram>>, item: &mut dyn SimpleItem) -> ItemKey {
        item.detach();
        let key = {
            let mut diagram = this.borrow_mut();
            diagram.next_key += 1;
            let key = ItemKey(diagram.next_key);
            diagram.members.push(key);
            key
        };
        let weak = Rc::downgrade(this);
        let weak: Weak<RefCell<dyn Canvas>> = weak;
        item.owner_mut().attach(weak, key);
        key
    }

    pub fn contains(&self, key: ItemKey) -> bool {
        self.members.contains(&key)
    }

    pub fn members(&self) -> &[ItemKey] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Canvas for Diagram {
    fn remove(&mut self, key: ItemKey) {
        self.members.retain(|k| *k != key);
    }
}
