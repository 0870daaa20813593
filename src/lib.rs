//! Trivial drawing aids for diagram canvases: a polyline, a box and an ellipse.
//!
//! These primitives carry no model semantics. Each one owns its geometry,
//! writes it out as `(name, literal)` attribute pairs, reads those pairs back,
//! and paints itself onto an abstract [`render::Surface`].
//!
//! ```
//! use drawaid::{Item, ItemKind, SimpleItem};
//!
//! let saved = Item::new(ItemKind::Box, Some("b1".into())).attributes();
//! let pairs = saved.iter().map(|(n, v)| (n.as_str(), v.as_str()));
//! let restored = Item::restore(ItemKind::Box, Some("b1".into()), pairs).unwrap();
//! assert_eq!(restored.id(), Some("b1"));
//! ```

use pest_derive::Parser;

pub mod canvas;
pub mod defaults;
pub mod errors;
pub mod item;
pub mod literal;
pub mod log;
pub mod render;
pub mod types;

#[derive(Parser)]
#[grammar = "literal.pest"]
pub struct LiteralParser;

pub use canvas::{Canvas, Diagram, ItemKey, Owner};
pub use errors::{ConstraintError, LiteralError, LoadError};
pub use item::{BoxItem, Corner, Ellipse, Handle, HandleId, Item, ItemKind, Line, LinePort, SimpleItem};
pub use literal::Literal;
pub use render::{DrawContext, DrawState, Style, StyleResolver, Surface};
pub use types::{Extent, Matrix, NumericError, Point, Rgba};

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_matrix_tuple() {
        let input = "(1.0, 0.0, 0.0, 1.0, 20.0, 30.0)";
        let result = LiteralParser::parse(Rule::literal, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_point_list() {
        let input = "[(0.0, 0.0), (10.0, 10.0)]";
        let result = LiteralParser::parse(Rule::literal, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_booleans() {
        for input in ["True", "False", "true", "false"] {
            let result = LiteralParser::parse(Rule::literal, input);
            assert!(result.is_ok(), "Failed to parse {}: {:?}", input, result.err());
        }
    }

    #[test]
    fn parse_exponent_float() {
        let result = LiteralParser::parse(Rule::float, "1e-7");
        assert!(result.is_ok(), "Failed to parse float: {:?}", result.err());
    }

    #[test]
    fn reject_trailing_garbage() {
        assert!(LiteralParser::parse(Rule::literal, "(1.0, 2.0) x").is_err());
        assert!(LiteralParser::parse(Rule::literal, "Truely").is_err());
    }
}
