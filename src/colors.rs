//! Color constants and conversion helpers.
//!
//! All colors are `palette::Srgba` with `f32` components in the 0.0-1.0 range.
//! The fully transparent value doubles as the "off" marker for an LED; every
//! other value is a lit LED showing that color.

use palette::{FromColor, Hsv, Srgb, Srgba};

/// The "off" color. An LED showing this value is considered off.
pub const TRANSPARENT: Srgba = Srgba::new(0.0, 0.0, 0.0, 0.0);

/// Default color for an LED that is switched on without a color choice.
pub const WHITE: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);

/// Alpha used for the dark half of a blink cycle (50 out of 255).
pub const DIM_ALPHA: f32 = 50.0 / 255.0;

/// Returns true if `color` is the "off" marker.
#[inline]
pub fn is_transparent(color: Srgba) -> bool {
    color == TRANSPARENT
}

/// Same RGB as `color` with the blink alpha applied.
#[inline]
pub fn dimmed(color: Srgba) -> Srgba {
    Srgba::new(color.red, color.green, color.blue, DIM_ALPHA)
}

/// Creates an opaque color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgba {
    let hsv = Hsv::new(hue, saturation, value);
    let rgb = Srgb::from_color(hsv);
    Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)
}

/// Creates an opaque color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgba {
    hsv(hue, 1.0, 1.0)
}

/// Formats the RGB part of `color` as `#rrggbb`.
pub fn hex_name(color: Srgba) -> String {
    let rgb: Srgb<u8> = color.color.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}
