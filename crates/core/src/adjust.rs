//! Brightness, saturation and hue adjustments.
//!
//! Each operation extracts the current HSB triple, changes exactly one
//! component and converts back, keeping alpha and the other two components.

use crate::color::Color;
use crate::convert::{ahsb_to_color, color_from_ahsb};
use crate::error::ColorError;
use crate::hsb::to_hsb;

/// Clamps `x` into [0, 1].
pub fn clamp01(x: f32) -> f32 {
    if x > 1.0 {
        1.0
    } else if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// Shifts brightness by `amount` percentage points, clamped to [0, 1].
pub fn change_brightness(color: Color, amount: i32) -> Color {
    let hsb = to_hsb(color);
    let brightness = clamp01((f64::from(amount) * 0.01) as f32 + hsb.brightness);
    ahsb_to_color(color.alpha, hsb.hue, hsb.saturation, brightness)
}

/// Shifts saturation by `amount` percentage points, clamped to [0, 1].
pub fn change_saturation(color: Color, amount: i32) -> Color {
    let hsb = to_hsb(color);
    let saturation = clamp01(amount as f32 * 0.01 + hsb.saturation);
    ahsb_to_color(color.alpha, hsb.hue, saturation, hsb.brightness)
}

/// Rotates hue by `degrees`.
///
/// The sum is wrapped at most once: above 360 it loses 360, below 0 it gains
/// 360. A rotation of more than a full turn can therefore leave the hue out
/// of range, in which case the converter's [`ColorError::OutOfRange`] is
/// returned.
pub fn change_hue(color: Color, degrees: i32) -> Result<Color, ColorError> {
    let hsb = to_hsb(color);
    let hue = wrap_hue_once(degrees as f32 + hsb.hue);
    color_from_ahsb(i32::from(color.alpha), hue, hsb.saturation, hsb.brightness)
}

pub(crate) fn wrap_hue_once(mut hue: f32) -> f32 {
    if hue > 360.0 {
        hue -= 360.0;
    }
    if hue < 0.0 {
        hue += 360.0;
    }
    hue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Param;

    fn assert_close(actual: Color, expected: Color) {
        let ok = actual.alpha == expected.alpha
            && actual.red.abs_diff(expected.red) <= 1
            && actual.green.abs_diff(expected.green) <= 1
            && actual.blue.abs_diff(expected.blue) <= 1;
        assert!(ok, "expected ~{expected:?}, got {actual:?}");
    }

    // -- clamp01 --

    #[test]
    fn clamp01_limits_both_ends() {
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(-0.25), 0.0);
        assert_eq!(clamp01(0.3), 0.3);
        assert_eq!(clamp01(1.0), 1.0);
        assert_eq!(clamp01(0.0), 0.0);
    }

    // -- change_brightness --

    #[test]
    fn brightening_red_moves_toward_white() {
        let c = change_brightness(Color::RED, 25);
        assert_close(c, Color::from_rgb(255, 128, 128));
    }

    #[test]
    fn darkening_red_moves_toward_black() {
        let c = change_brightness(Color::RED, -25);
        assert_close(c, Color::from_rgb(128, 0, 0));
    }

    #[test]
    fn brightness_clamps_at_white_and_black() {
        let c = Color::from_argb(90, 10, 120, 200);
        let up = change_brightness(c, 500);
        assert_eq!(up.brightness(), 1.0);
        assert_eq!(up, Color::from_argb(90, 255, 255, 255));
        let down = change_brightness(c, -500);
        assert_eq!(down.brightness(), 0.0);
        assert_eq!(down, Color::from_argb(90, 0, 0, 0));
    }

    #[test]
    fn zero_brightness_change_is_near_identity() {
        let c = Color::from_rgb(33, 66, 99);
        assert_close(change_brightness(c, 0), c);
    }

    // -- change_saturation --

    #[test]
    fn desaturating_fully_yields_gray() {
        let c = change_saturation(Color::RED, -100);
        assert_eq!(c, Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn half_desaturated_red() {
        let c = change_saturation(Color::RED, -50);
        assert_close(c, Color::from_rgb(191, 64, 64));
    }

    #[test]
    fn saturation_clamps_at_one() {
        let c = change_saturation(Color::from_rgb(150, 100, 100), 400);
        assert!((c.saturation() - 1.0).abs() < 1e-6, "got {}", c.saturation());
    }

    #[test]
    fn saturating_gray_keeps_hue_zero() {
        // Gray has hue 0, so adding saturation pushes toward red.
        let c = change_saturation(Color::from_rgb(128, 128, 128), 100);
        assert!(c.red > c.green && c.green == c.blue, "got {c:?}");
    }

    // -- change_hue --

    #[test]
    fn hue_shift_moves_red_to_lime() {
        assert_eq!(change_hue(Color::RED, 120).unwrap(), Color::LIME);
    }

    #[test]
    fn negative_hue_shift_wraps_once() {
        assert_eq!(change_hue(Color::RED, -120).unwrap(), Color::BLUE);
    }

    #[test]
    fn hue_shift_keeps_alpha() {
        let c = change_hue(Color::RED.with_alpha(40), 60).unwrap();
        assert_eq!(c, Color::YELLOW.with_alpha(40));
    }

    #[test]
    fn hue_shift_to_exactly_360_is_allowed() {
        // 0 + 360 is not > 360, so it stays at 360 and maps to red.
        assert_eq!(change_hue(Color::RED, 360).unwrap(), Color::RED);
    }

    #[test]
    fn double_half_turn_restores_hue() {
        let c = Color::from_rgb(220, 80, 30);
        let back = change_hue(change_hue(c, 180).unwrap(), 180).unwrap();
        let diff = (back.hue() - c.hue()).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        assert!(diff < 1.0, "hue drifted by {diff}");
    }

    #[test]
    fn more_than_a_full_turn_is_not_normalized() {
        let err = change_hue(Color::RED, 800).unwrap_err();
        assert_eq!(err.param(), Some(Param::Hue));
        let err = change_hue(Color::RED, -800).unwrap_err();
        assert_eq!(err.param(), Some(Param::Hue));
    }

    #[test]
    fn exactly_two_turns_on_red_lands_on_360() {
        // 0 + 720 wraps once to 360, still in range.
        assert_eq!(change_hue(Color::RED, 720).unwrap(), Color::RED);
    }

    #[test]
    fn wrap_hue_once_applies_single_correction() {
        assert_eq!(wrap_hue_once(370.0), 10.0);
        assert_eq!(wrap_hue_once(-10.0), 350.0);
        assert_eq!(wrap_hue_once(730.0), 370.0);
        assert_eq!(wrap_hue_once(360.0), 360.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn brightness_never_leaves_unit_range(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                amount in -300_i32..=300,
            ) {
                let c = change_brightness(Color::from_rgb(r, g, b), amount);
                let bright = c.brightness();
                prop_assert!((0.0..=1.0).contains(&bright), "brightness {}", bright);
            }

            #[test]
            fn saturated_brightness_is_exact(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let c = Color::from_rgb(r, g, b);
                prop_assert_eq!(change_brightness(c, 200).brightness(), 1.0);
                prop_assert_eq!(change_brightness(c, -200).brightness(), 0.0);
            }

            #[test]
            fn hue_shift_within_a_turn_never_fails(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                degrees in -360_i32..=360,
            ) {
                prop_assert!(change_hue(Color::from_rgb(r, g, b), degrees).is_ok());
            }
        }
    }
}
