//! AHSB to RGB conversion.
//!
//! The hue wheel is split into six 60° sectors. Within a sector one channel
//! sits at the upper extreme, one at the lower extreme, and one is
//! interpolated between them. The converter computes the two extremes and
//! the interpolated value once, then routes them to the output channels
//! through [`SECTOR_CHANNELS`].

use crate::color::Color;
use crate::error::{ColorError, Param};
use tracing::{debug, trace};

/// One of the three values computed by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// The interpolated value.
    Mid,
    /// The upper extreme.
    High,
    /// The lower extreme.
    Low,
}

/// Output `[red, green, blue]` sources, indexed by sector.
///
/// Hue exactly 360 yields sector 6, which takes the sector 0 row.
const SECTOR_CHANNELS: [[Slot; 3]; 6] = [
    [Slot::High, Slot::Mid, Slot::Low],
    [Slot::Mid, Slot::High, Slot::Low],
    [Slot::Low, Slot::High, Slot::Mid],
    [Slot::Low, Slot::Mid, Slot::High],
    [Slot::Mid, Slot::Low, Slot::High],
    [Slot::High, Slot::Low, Slot::Mid],
];

/// Builds a color from alpha plus a hue/saturation/brightness triple.
///
/// `alpha` must lie in [0, 255], `hue` in [0, 360], `saturation` and
/// `brightness` in [0, 1]. Nothing is clamped: the first argument outside
/// its range (checked in signature order) is reported as
/// [`ColorError::OutOfRange`]. NaN is always out of range.
pub fn color_from_ahsb(
    alpha: i32,
    hue: f32,
    saturation: f32,
    brightness: f32,
) -> Result<Color, ColorError> {
    check_range(Param::Alpha, f64::from(alpha), 255.0, "Invalid Alpha")?;
    check_range(Param::Hue, f64::from(hue), 360.0, "Invalid Hue")?;
    check_range(
        Param::Saturation,
        f64::from(saturation),
        1.0,
        "Invalid Saturation",
    )?;
    check_range(
        Param::Brightness,
        f64::from(brightness),
        1.0,
        "Invalid Brightness",
    )?;

    // The range check above guarantees 0..=255.
    let alpha = alpha as u8;
    Ok(ahsb_to_color(alpha, hue, saturation, brightness))
}

fn check_range(
    param: Param,
    value: f64,
    max: f64,
    message: &'static str,
) -> Result<(), ColorError> {
    if (0.0..=max).contains(&value) {
        return Ok(());
    }
    debug!(%param, value, "rejected out-of-range argument");
    Err(ColorError::OutOfRange {
        param,
        value,
        message,
    })
}

/// Conversion without validation. Callers guarantee the documented ranges.
pub(crate) fn ahsb_to_color(alpha: u8, hue: f32, saturation: f32, brightness: f32) -> Color {
    if saturation == 0.0 {
        let gray = to_channel(brightness);
        return Color::from_argb(alpha, gray, gray, gray);
    }

    let (high, low) = if brightness > 0.5 {
        (
            brightness - brightness * saturation + saturation,
            brightness + brightness * saturation - saturation,
        )
    } else {
        (
            brightness + brightness * saturation,
            brightness - brightness * saturation,
        )
    };

    let sector = (hue / 60.0).floor() as usize;

    let mut h = hue;
    if h >= 300.0 {
        h -= 360.0;
    }
    h /= 60.0;
    h -= 2.0 * (((sector + 1) % 6) as f32 / 2.0).floor();

    let mid = if sector % 2 == 0 {
        h * (high - low) + low
    } else {
        low - h * (high - low)
    };

    trace!(sector, high, mid, low, "interpolated sector extremes");

    let value = |slot: Slot| match slot {
        Slot::Mid => to_channel(mid),
        Slot::High => to_channel(high),
        Slot::Low => to_channel(low),
    };
    let [r, g, b] = SECTOR_CHANNELS
        .get(sector)
        .copied()
        .unwrap_or(SECTOR_CHANNELS[0]);

    Color::from_argb(alpha, value(r), value(g), value(b))
}

/// Scales a [0, 1] value to a channel, rounding half to even.
///
/// Float error can push an interpolated value a hair outside [0, 1]; the
/// cast saturates.
fn to_channel(v: f32) -> u8 {
    (v * 255.0).round_ties_even() as u8
}
