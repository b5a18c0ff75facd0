//! Argument parsers for unit-suffixed angles and `x,y` vectors.
//!
//! Angles: `30deg`, `30°`, `0.5rad`, `25%`; a bare number is degrees.
//! Vectors: `x,y` with optional surrounding parentheses, e.g. `(3, -7)`.

use std::fmt;

use planar::{Angle, Vec2d};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseArgError {
    /// Nothing left after trimming.
    Empty,
    /// A scalar that `f64::from_str` rejects.
    InvalidNumber { input: String },
    /// NaN or an infinity; JSON output has no encoding for them.
    NonFinite { input: String },
    /// Vector without exactly two comma-separated components.
    ComponentCount { input: String, found: usize },
}

impl fmt::Display for ParseArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseArgError::Empty => write!(f, "empty argument"),
            ParseArgError::InvalidNumber { input } => write!(f, "invalid number: {input:?}"),
            ParseArgError::NonFinite { input } => write!(f, "number must be finite: {input:?}"),
            ParseArgError::ComponentCount { input, found } => write!(
                f,
                "expected two components `x,y`, found {found} in {input:?}"
            ),
        }
    }
}

impl std::error::Error for ParseArgError {}

/// Finite `f64`; NaN and infinities are rejected.
pub fn parse_scalar(s: &str) -> Result<f64, ParseArgError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseArgError::Empty);
    }
    let v = s.parse::<f64>().map_err(|_| ParseArgError::InvalidNumber {
        input: s.to_string(),
    })?;
    if !v.is_finite() {
        return Err(ParseArgError::NonFinite {
            input: s.to_string(),
        });
    }
    Ok(v)
}

pub fn parse_angle(s: &str) -> Result<Angle, ParseArgError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseArgError::Empty);
    }
    if let Some(v) = s.strip_suffix("rad") {
        return parse_scalar(v).map(Angle::from_radians);
    }
    if let Some(v) = s.strip_suffix('%') {
        return parse_scalar(v).map(Angle::from_percent);
    }
    let v = s
        .strip_suffix("deg")
        .or_else(|| s.strip_suffix('°'))
        .unwrap_or(s);
    parse_scalar(v).map(Angle::from_degrees)
}

pub fn parse_vec(s: &str) -> Result<Vec2d, ParseArgError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseArgError::Empty);
    }
    let inner = s
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(s);
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 2 {
        return Err(ParseArgError::ComponentCount {
            input: s.to_string(),
            found: parts.len(),
        });
    }
    Ok(Vec2d::new(parse_scalar(parts[0])?, parse_scalar(parts[1])?))
}
