//! Fixed color-wheel relationships.
//!
//! Every relationship is a hue rotation by a constant offset with alpha,
//! saturation and brightness unchanged. The offsets all lie within one
//! half-turn, so after the single hue wrap the result is always a valid hue
//! and these operations cannot fail.

use crate::adjust::wrap_hue_once;
use crate::color::Color;
use crate::convert::ahsb_to_color;
use crate::error::ColorError;
use crate::hsb::to_hsb;

/// A named color-wheel relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Complement,
    LeftAnalogous,
    RightAnalogous,
    LeftTriad,
    RightTriad,
    LeftSplitComplement,
    RightSplitComplement,
}

impl Relationship {
    /// All relationships in declaration order.
    pub const ALL: [Relationship; 7] = [
        Relationship::Complement,
        Relationship::LeftAnalogous,
        Relationship::RightAnalogous,
        Relationship::LeftTriad,
        Relationship::RightTriad,
        Relationship::LeftSplitComplement,
        Relationship::RightSplitComplement,
    ];

    /// Hue offset in degrees.
    ///
    /// Left and right analogous share the same +30° offset.
    // TODO: decide whether RightAnalogous should be -30 once callers relying
    // on the current pairing are audited.
    pub fn offset(self) -> i32 {
        match self {
            Relationship::Complement => 180,
            Relationship::LeftAnalogous => 30,
            Relationship::RightAnalogous => 30,
            Relationship::LeftTriad => 120,
            Relationship::RightTriad => -120,
            Relationship::LeftSplitComplement => 150,
            Relationship::RightSplitComplement => -150,
        }
    }

    /// Kebab-case name, as accepted by [`Relationship::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Relationship::Complement => "complement",
            Relationship::LeftAnalogous => "left-analogous",
            Relationship::RightAnalogous => "right-analogous",
            Relationship::LeftTriad => "left-triad",
            Relationship::RightTriad => "right-triad",
            Relationship::LeftSplitComplement => "left-split-complement",
            Relationship::RightSplitComplement => "right-split-complement",
        }
    }

    /// Looks up a relationship by its kebab-case name.
    ///
    /// Returns `ColorError::UnknownRelationship` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ColorError::UnknownRelationship(name.to_string()))
    }

    /// Returns all relationship names in declaration order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.name()).collect()
    }

    /// Derives the related color.
    pub fn apply(self, color: Color) -> Color {
        let hsb = to_hsb(color);
        let hue = wrap_hue_once(self.offset() as f32 + hsb.hue);
        ahsb_to_color(color.alpha, hue, hsb.saturation, hsb.brightness)
    }
}

pub fn get_complement(color: Color) -> Color {
    Relationship::Complement.apply(color)
}

pub fn get_left_analogous(color: Color) -> Color {
    Relationship::LeftAnalogous.apply(color)
}

pub fn get_right_analogous(color: Color) -> Color {
    Relationship::RightAnalogous.apply(color)
}

pub fn get_left_triad(color: Color) -> Color {
    Relationship::LeftTriad.apply(color)
}

pub fn get_right_triad(color: Color) -> Color {
    Relationship::RightTriad.apply(color)
}

pub fn get_left_split_complement(color: Color) -> Color {
    Relationship::LeftSplitComplement.apply(color)
}

pub fn get_right_split_complement(color: Color) -> Color {
    Relationship::RightSplitComplement.apply(color)
}

/// Every relationship of `color`, in [`Relationship::ALL`] order.
pub fn harmonies(color: Color) -> Vec<(Relationship, Color)> {
    Relationship::ALL
        .into_iter()
        .map(|r| (r, r.apply(color)))
        .collect()
}
