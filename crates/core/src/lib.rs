#![deny(unsafe_code)]
//! Color math for 8-bit ARGB colors.
//!
//! Provides the `Color` value type, HSB extraction (`hsb`), the AHSB to RGB
//! converter (`convert`), brightness/saturation/hue adjustments (`adjust`),
//! the seven fixed color-wheel relationships (`relation`), and `AARRGGBB`
//! hex formatting (`hex`).
//!
//! ```
//! use colormath_core::{color_from_ahsb, get_complement, to_hex_string, Color};
//!
//! let teal = get_complement(Color::RED);
//! assert_eq!(to_hex_string(teal), "FF00FFFF");
//! assert!(color_from_ahsb(256, 0.0, 0.0, 0.0).is_err());
//! ```

pub mod adjust;
pub mod color;
pub mod convert;
pub mod error;
pub mod hex;
pub mod hsb;
pub mod relation;

pub use adjust::{change_brightness, change_hue, change_saturation, clamp01};
pub use color::Color;
pub use convert::color_from_ahsb;
pub use error::{ColorError, Param};
pub use hex::{from_hex_string, to_hex_string};
pub use hsb::{brightness, hue, saturation, to_hsb, Hsb};
pub use relation::{
    get_complement, get_left_analogous, get_left_split_complement, get_left_triad,
    get_right_analogous, get_right_split_complement, get_right_triad, harmonies, Relationship,
};
