//! Decoding persisted attribute text into typed values

use crate::errors::LoadError;
use crate::literal::{self, Literal};
use crate::types::{Extent, Matrix, Point};

/// Parse `text` as a literal, tagging failures with the attribute name
pub(crate) fn decode(attribute: &str, text: &str) -> Result<Literal, LoadError> {
    literal::parse(text).map_err(|source| LoadError::Malformed {
        attribute: attribute.to_string(),
        source,
    })
}

fn wrong_shape(attribute: &str, expected: &'static str, found: &Literal) -> LoadError {
    LoadError::WrongShape {
        attribute: attribute.to_string(),
        expected,
        found: found.describe(),
    }
}

fn number(attribute: &str, lit: &Literal) -> Result<f64, LoadError> {
    lit.as_f64().ok_or_else(|| wrong_shape(attribute, "a number", lit))
}

pub(crate) fn boolean(attribute: &str, text: &str) -> Result<bool, LoadError> {
    let lit = decode(attribute, text)?;
    lit.as_bool().ok_or_else(|| wrong_shape(attribute, "a bool", &lit))
}

pub(crate) fn extent(attribute: &str, text: &str) -> Result<Extent, LoadError> {
    let value = number(attribute, &decode(attribute, text)?)?;
    Extent::try_new(value).map_err(|reason| LoadError::InvalidExtent {
        attribute: attribute.to_string(),
        reason,
    })
}

pub(crate) fn matrix(attribute: &str, text: &str) -> Result<Matrix, LoadError> {
    let lit = decode(attribute, text)?;
    let items = lit
        .as_sequence()
        .filter(|items| items.len() == 6)
        .ok_or_else(|| wrong_shape(attribute, "6 coefficients", &lit))?;
    let mut coefficients = [0.0; 6];
    for (slot, item) in coefficients.iter_mut().zip(items) {
        *slot = number(attribute, item)?;
    }
    Ok(Matrix::from_coefficients(coefficients))
}

pub(crate) fn points(attribute: &str, text: &str) -> Result<Vec<Point>, LoadError> {
    let lit = decode(attribute, text)?;
    let items = lit
        .as_sequence()
        .ok_or_else(|| wrong_shape(attribute, "a sequence of points", &lit))?;
    items
        .iter()
        .map(|item| match item.as_sequence() {
            Some([x, y]) => Ok(Point::new(number(attribute, x)?, number(attribute, y)?)),
            _ => Err(wrong_shape(attribute, "an (x, y) pair", item)),
        })
        .collect()
}
