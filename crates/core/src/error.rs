//! Error types for colormath.

use std::fmt;
use thiserror::Error;

/// The argument of [`color_from_ahsb`](crate::convert::color_from_ahsb) that
/// failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Alpha,
    Hue,
    Saturation,
    Brightness,
}

impl Param {
    /// Lowercase parameter name as it appears in the converter's signature.
    pub fn name(self) -> &'static str {
        match self {
            Param::Alpha => "alpha",
            Param::Hue => "hue",
            Param::Saturation => "saturation",
            Param::Brightness => "brightness",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by color operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A converter argument fell outside its documented domain.
    ///
    /// `value` is widened to `f64` so integer alpha and float HSB values
    /// share one representation.
    #[error("{message}: {param} = {value} is out of range")]
    OutOfRange {
        param: Param,
        value: f64,
        message: &'static str,
    },

    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A relationship name was not recognized.
    #[error("unknown relationship: {0}")]
    UnknownRelationship(String),
}

impl ColorError {
    /// Returns the offending parameter for range errors.
    pub fn param(&self) -> Option<Param> {
        match self {
            ColorError::OutOfRange { param, .. } => Some(*param),
            _ => None,
        }
    }
}
