//! Persisted attribute literals.
//!
//! Attribute values travel through the document as text such as
//! `(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)` or `[(0.0, 0.0), (10.0, 10.0)]`.
//! [`parse`] reads that text with the pest grammar in `literal.pest`;
//! the [`Display`](fmt::Display) impl writes it back so that
//! `parse(&lit.to_string())` yields `lit` again.

use std::fmt;

use pest::Parser;
use pest::iterators::Pair;

use crate::errors::LiteralError;
use crate::types::{Matrix, Point};
use crate::{LiteralParser, Rule};

/// A parsed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Float(f64),
    Int(i64),
    Bool(bool),
    None,
    Tuple(Vec<Literal>),
    List(Vec<Literal>),
}

impl Literal {
    /// Numeric value; integers widen, booleans do not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Float(v) => Some(*v),
            Literal::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Elements of a tuple or list.
    pub fn as_sequence(&self) -> Option<&[Literal]> {
        match self {
            Literal::Tuple(items) | Literal::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short description used in shape-mismatch errors
    pub fn describe(&self) -> String {
        match self {
            Literal::Float(_) => "a float".to_string(),
            Literal::Int(_) => "an int".to_string(),
            Literal::Bool(_) => "a bool".to_string(),
            Literal::None => "None".to_string(),
            Literal::Tuple(items) => format!("a tuple of {}", items.len()),
            Literal::List(items) => format!("a list of {}", items.len()),
        }
    }

    /// A list of `(x, y)` tuples.
    pub fn points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        Literal::List(
            points
                .into_iter()
                .map(|p| Literal::Tuple(vec![Literal::Float(p.x), Literal::Float(p.y)]))
                .collect(),
        )
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<Matrix> for Literal {
    fn from(m: Matrix) -> Self {
        Literal::Tuple(m.coefficients().into_iter().map(Literal::Float).collect())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug keeps the shortest round-trip digits and always marks a float
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::None => f.write_str("None"),
            Literal::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Literal::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Parse a persisted attribute value
pub fn parse(text: &str) -> Result<Literal, LiteralError> {
    let pairs =
        LiteralParser::parse(Rule::literal, text).map_err(|e| LiteralError::syntax(text, e))?;

    // literal = { SOI ~ value ~ EOI }: the first inner pair is the value
    let value = pairs
        .flat_map(|pair| pair.into_inner())
        .find(|pair| pair.as_rule() != Rule::EOI);

    match value {
        Some(pair) => build(pair, text),
        None => Err(LiteralError::Syntax {
            message: "expected a value".to_string(),
            src: miette::NamedSource::new("<value>", text.to_string()),
            span: (0, text.len()).into(),
        }),
    }
}

fn build(pair: Pair<'_, Rule>, text: &str) -> Result<Literal, LiteralError> {
    let start = pair.as_span().start();
    match pair.as_rule() {
        Rule::float => {
            let token = pair.as_str();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Literal::Float(value)),
                _ => Err(LiteralError::number(text, token, start)),
            }
        }
        Rule::int => {
            let token = pair.as_str();
            token
                .parse::<i64>()
                .map(Literal::Int)
                .map_err(|_| LiteralError::number(text, token, start))
        }
        Rule::boolean => Ok(Literal::Bool(matches!(pair.as_str(), "True" | "true"))),
        Rule::none => Ok(Literal::None),
        Rule::list => {
            let items = pair
                .into_inner()
                .map(|inner| build(inner, text))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Literal::List(items))
        }
        Rule::tuple => {
            let mut items = Vec::new();
            let mut trailing = false;
            for inner in pair.into_inner() {
                if inner.as_rule() == Rule::trailing {
                    trailing = true;
                } else {
                    items.push(build(inner, text)?);
                }
            }
            // `(x)` is a grouping, `(x,)` is a one-tuple
            if items.len() == 1 && !trailing {
                Ok(items.remove(0))
            } else {
                Ok(Literal::Tuple(items))
            }
        }
        rule => Err(LiteralError::Syntax {
            message: format!("unexpected {:?}", rule),
            src: miette::NamedSource::new("<value>", text.to_string()),
            span: (start, pair.as_str().len()).into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matrix() {
        let lit = parse("(1.0, 0.0, 0.0, 1.0, 20, -3.5)").unwrap();
        let items = lit.as_sequence().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[4], Literal::Int(20));
        assert_eq!(items[5].as_f64(), Some(-3.5));
    }

    #[test]
    fn parse_points_list() {
        let lit = parse("[(0.0, 0.0), (5.0, 7.5), (10.0, 10.0)]").unwrap();
        let items = lit.as_sequence().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Literal::Tuple(vec![Literal::Float(5.0), Literal::Float(7.5)]));
    }

    #[test]
    fn parse_bools_and_none() {
        assert_eq!(parse("True").unwrap(), Literal::Bool(true));
        assert_eq!(parse(" false ").unwrap(), Literal::Bool(false));
        assert_eq!(parse("None").unwrap(), Literal::None);
    }

    #[test]
    fn grouping_is_not_a_tuple() {
        assert_eq!(parse("(4.0)").unwrap(), Literal::Float(4.0));
        assert_eq!(parse("(4.0,)").unwrap(), Literal::Tuple(vec![Literal::Float(4.0)]));
        assert_eq!(parse("()").unwrap(), Literal::Tuple(vec![]));
        assert_eq!(parse("[1, 2,]").unwrap(), Literal::List(vec![Literal::Int(1), Literal::Int(2)]));
    }

    #[test]
    fn floats_keep_their_kind() {
        assert_eq!(parse("10.0").unwrap(), Literal::Float(10.0));
        assert_eq!(parse("10").unwrap(), Literal::Int(10));
        assert_eq!(parse("1e-7").unwrap(), Literal::Float(1e-7));
        assert_eq!(parse(".5").unwrap(), Literal::Float(0.5));
    }

    #[test]
    fn bool_is_not_a_number() {
        assert_eq!(parse("True").unwrap().as_f64(), None);
    }

    #[test]
    fn display_formats() {
        let m: Literal = Matrix::IDENTITY.translated(20.0, 30.5).into();
        insta::assert_snapshot!(m.to_string(), @"(1.0, 0.0, 0.0, 1.0, 20.0, 30.5)");

        let pts = Literal::points(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        insta::assert_snapshot!(pts.to_string(), @"[(0.0, 0.0), (10.0, 10.0)]");

        let one = Literal::Tuple(vec![Literal::Bool(true)]);
        insta::assert_snapshot!(one.to_string(), @"(True,)");
    }

    #[test]
    fn display_parses_back() {
        let values = [
            Literal::Float(0.1 + 0.2),
            Literal::Float(1e21),
            Literal::Float(-0.0),
            Literal::points(&[Point::new(1.0 / 3.0, 2.0 / 3.0)]),
            Literal::Bool(false),
        ];
        for value in values {
            assert_eq!(parse(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn syntax_error_points_at_column() {
        let err = parse("(1.0, 2.0").unwrap_err();
        match err {
            LiteralError::Syntax { span, .. } => assert_eq!(span.offset(), 9),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn int_overflow_is_a_number_error() {
        let err = parse("99999999999999999999").unwrap_err();
        assert!(matches!(err, LiteralError::Number { .. }));
    }

    #[test]
    fn float_overflow_is_a_number_error() {
        let err = parse("(1e400, 0.0)").unwrap_err();
        match err {
            LiteralError::Number { token, span, .. } => {
                assert_eq!(token, "1e400");
                assert_eq!(span.offset(), 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(parse("-1e400").is_err());
        assert_eq!(parse("1e300").unwrap(), Literal::Float(1e300));
    }
}
