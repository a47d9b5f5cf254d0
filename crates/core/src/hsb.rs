//! Hue/saturation/brightness extraction from 8-bit RGB.
//!
//! Brightness here is the HSL lightness `(max + min) / 2`, not the HSV value.
//! All arithmetic is single precision.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A hue/saturation/brightness triple.
///
/// `hue` is in degrees, `saturation` and `brightness` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

/// Channels normalized to [0, 1] with their max and min.
struct Normalized {
    r: f32,
    g: f32,
    b: f32,
    max: f32,
    min: f32,
}

fn normalize(c: Color) -> Normalized {
    let r = f32::from(c.red) / 255.0;
    let g = f32::from(c.green) / 255.0;
    let b = f32::from(c.blue) / 255.0;
    Normalized {
        r,
        g,
        b,
        max: r.max(g).max(b),
        min: r.min(g).min(b),
    }
}

/// Hue in degrees, normalized into [0, 360). Achromatic colors have hue 0.
pub fn hue(c: Color) -> f32 {
    let n = normalize(c);
    let delta = n.max - n.min;
    if delta == 0.0 {
        return 0.0;
    }

    let sextant = if n.max == n.r {
        ((n.g - n.b) / delta).rem_euclid(6.0)
    } else if n.max == n.g {
        (n.b - n.r) / delta + 2.0
    } else {
        (n.r - n.g) / delta + 4.0
    };

    let h = sextant * 60.0;
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}

/// Saturation in [0, 1]. Achromatic colors have saturation 0.
pub fn saturation(c: Color) -> f32 {
    let n = normalize(c);
    if n.max == n.min {
        return 0.0;
    }
    let delta = n.max - n.min;
    if (n.max + n.min) / 2.0 <= 0.5 {
        delta / (n.max + n.min)
    } else {
        delta / (2.0 - n.max - n.min)
    }
}

/// Brightness in [0, 1], the midpoint of the largest and smallest channel.
pub fn brightness(c: Color) -> f32 {
    let n = normalize(c);
    (n.max + n.min) / 2.0
}

/// Extracts all three components at once.
pub fn to_hsb(c: Color) -> Hsb {
    Hsb {
        hue: hue(c),
        saturation: saturation(c),
        brightness: brightness(c),
    }
}
