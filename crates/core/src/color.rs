//! The 8-bit ARGB color value type.
//!
//! `Color` is a plain `Copy` value. Every operation in this crate takes it
//! by value and returns a new one; nothing mutates a color in place. The
//! methods here are thin wrappers over the free functions in [`hsb`],
//! [`convert`], [`adjust`], [`relation`] and [`hex`], which remain the
//! primary API.
//!
//! [`hsb`]: crate::hsb
//! [`convert`]: crate::convert
//! [`adjust`]: crate::adjust
//! [`relation`]: crate::relation
//! [`hex`]: crate::hex

use crate::adjust;
use crate::convert;
use crate::error::ColorError;
use crate::hex;
use crate::hsb::{self, Hsb};
use crate::relation::Relationship;

/// ARGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const LIME: Color = Color::from_rgb(0, 255, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    /// Also the complement of [`Color::RED`].
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::from_rgb(255, 0, 255);

    /// Creates a color from alpha, red, green and blue channels.
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Creates a fully opaque color.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(255, red, green, blue)
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn from_u32(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        Self::from_argb(alpha, red, green, blue)
    }

    /// Packs the channels as `0xAARRGGBB`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }

    /// Returns the same color with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Rebuilds a color from an HSB triple, keeping `alpha`.
    pub fn from_hsb(alpha: u8, hsb: Hsb) -> Result<Self, ColorError> {
        convert::color_from_ahsb(
            i32::from(alpha),
            hsb.hue,
            hsb.saturation,
            hsb.brightness,
        )
    }

    /// Hue in degrees, [0, 360).
    pub fn hue(self) -> f32 {
        hsb::hue(self)
    }

    /// Saturation in [0, 1].
    pub fn saturation(self) -> f32 {
        hsb::saturation(self)
    }

    /// Brightness in [0, 1].
    pub fn brightness(self) -> f32 {
        hsb::brightness(self)
    }

    pub fn to_hsb(self) -> Hsb {
        hsb::to_hsb(self)
    }

    pub fn change_brightness(self, amount: i32) -> Self {
        adjust::change_brightness(self, amount)
    }

    pub fn change_saturation(self, amount: i32) -> Self {
        adjust::change_saturation(self, amount)
    }

    pub fn change_hue(self, degrees: i32) -> Result<Self, ColorError> {
        adjust::change_hue(self, degrees)
    }

    /// Derives a related color on the hue wheel.
    pub fn relate(self, relationship: Relationship) -> Self {
        relationship.apply(self)
    }

    pub fn complement(self) -> Self {
        self.relate(Relationship::Complement)
    }

    pub fn left_analogous(self) -> Self {
        self.relate(Relationship::LeftAnalogous)
    }

    pub fn right_analogous(self) -> Self {
        self.relate(Relationship::RightAnalogous)
    }

    pub fn left_triad(self) -> Self {
        self.relate(Relationship::LeftTriad)
    }

    pub fn right_triad(self) -> Self {
        self.relate(Relationship::RightTriad)
    }

    pub fn left_split_complement(self) -> Self {
        self.relate(Relationship::LeftSplitComplement)
    }

    pub fn right_split_complement(self) -> Self {
        self.relate(Relationship::RightSplitComplement)
    }

    /// Formats as 8 uppercase hex digits, `AARRGGBB`.
    pub fn to_hex_string(self) -> String {
        hex::to_hex_string(self)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_u32(argb)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_is_opaque() {
        let c = Color::from_rgb(1, 2, 3);
        assert_eq!(c.alpha, 255);
        assert_eq!((c.red, c.green, c.blue), (1, 2, 3));
    }

    #[test]
    fn u32_packing_puts_alpha_in_high_byte() {
        let c = Color::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_u32(), 0x1234_5678);
        assert_eq!(Color::from_u32(0x1234_5678), c);
    }

    #[test]
    fn u32_conversions_are_inverse() {
        let c = Color::from(0x80FF_0000_u32);
        assert_eq!(c, Color::from_argb(0x80, 0xFF, 0, 0));
        assert_eq!(u32::from(c), 0x80FF_0000);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::RED.with_alpha(10);
        assert_eq!(c, Color::from_argb(10, 255, 0, 0));
    }

    #[test]
    fn named_constants_have_expected_channels() {
        assert_eq!(Color::CYAN, Color::from_argb(255, 0, 255, 255));
        assert_eq!(Color::TRANSPARENT.to_u32(), 0);
        assert_eq!(Color::WHITE.to_u32(), 0xFFFF_FFFF);
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn methods_return_new_values_without_touching_input() {
        let original = Color::from_rgb(200, 40, 40);
        let copy = original;
        let _ = original.change_brightness(20);
        let _ = original.complement();
        assert_eq!(original, copy);
    }

    #[test]
    fn from_hsb_rebuilds_color() {
        let c = Color::from_rgb(0, 128, 255);
        let rebuilt = Color::from_hsb(c.alpha, c.to_hsb()).unwrap();
        assert!(rebuilt.red.abs_diff(c.red) <= 1);
        assert!(rebuilt.green.abs_diff(c.green) <= 1);
        assert!(rebuilt.blue.abs_diff(c.blue) <= 1);
    }

    #[test]
    fn complement_of_red_via_method() {
        let hue = Color::RED.complement().hue();
        assert!((hue - 180.0).abs() < 1e-3, "got {hue}");
    }
}
