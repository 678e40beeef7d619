//! # Color Module
//!
//! Plain sRGB color values: construction from 8-bit components, packed
//! integers and hex strings, hex rendering, inversion, lightening and
//! random colors.
//!
//! Colors here are values only. Nothing is resolved against a display or an
//! environment.
//!
//! ```
//! use flowkit_color::Srgb;
//!
//! let accent: Srgb = "#2196F3".parse()?;
//! assert_eq!(accent.to_rgb8(), [0x21, 0x96, 0xF3]);
//! assert_eq!(accent.inverted().to_hex(), "#DE690C");
//! # Ok::<(), flowkit_color::HexColorError>(())
//! ```

mod srgb;
pub use srgb::Srgb;

use core::ops::{Deref, DerefMut};

/// Represents a color with an opacity/alpha value applied.
///
/// This wrapper type allows applying a specific opacity to any color type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithOpacity<T> {
    color: T,
    opacity: f32,
}

impl<T> WithOpacity<T> {
    /// Creates a new color with the specified opacity applied.
    ///
    /// # Arguments
    /// * `color` - The base color
    /// * `opacity` - Opacity value, clamped to 0.0 (transparent) ..= 1.0 (opaque)
    #[must_use]
    pub fn new(color: T, opacity: f32) -> Self {
        Self {
            color,
            opacity: clamp_unit(opacity),
        }
    }

    /// The applied opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Drops the opacity and returns the base color.
    pub fn into_inner(self) -> T {
        self.color
    }
}

impl<T> Deref for WithOpacity<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.color
    }
}

impl<T> DerefMut for WithOpacity<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.color
    }
}

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The provided string does not have the expected 6 hexadecimal digits.
    #[error("expected exactly 6 hexadecimal digits")]
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

mod parse;

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(Srgb::WHITE.with_opacity(1.5).opacity(), 1.0);
        assert_eq!(Srgb::WHITE.with_opacity(-0.5).opacity(), 0.0);
        assert_eq!(Srgb::WHITE.with_opacity(f32::NAN).opacity(), 0.0);
    }

    #[test]
    fn with_opacity_derefs_to_color() {
        let faded = Srgb::new_u8(10, 20, 30).with_opacity(0.25);
        assert_eq!(faded.to_rgb8(), [10, 20, 30]);
        assert_eq!(faded.into_inner(), Srgb::new_u8(10, 20, 30));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            HexColorError::InvalidDigit(3).to_string(),
            "invalid hexadecimal digit at byte index 3"
        );
        assert_eq!(
            HexColorError::InvalidLength.to_string(),
            "expected exactly 6 hexadecimal digits"
        );
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(0.2, 0.8, 0.0), 0.2);
        assert_eq!(lerp(0.0, 1.0, 0.5), 0.5);
    }
}
