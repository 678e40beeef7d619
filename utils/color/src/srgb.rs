use core::fmt::{self, Display};
use core::str::FromStr;

use rand::Rng;

use crate::{
    HexColorError, WithOpacity, clamp_unit, lerp,
    parse::{parse_hex_color, parse_hex_color_runtime},
};

/// Represents a color in the sRGB color space.
///
/// sRGB is the standard RGB color space used in most displays and web content.
/// Component values are in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red component (0.0 to 1.0)
    pub red: f32,
    /// Green component (0.0 to 1.0)
    pub green: f32,
    /// Blue component (0.0 to 1.0)
    pub blue: f32,
}

impl Default for Srgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Srgb {
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");

    /// Creates a new sRGB color from red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0.0 to 1.0)
    /// * `green` - Green component (0.0 to 1.0)
    /// * `blue` - Blue component (0.0 to 1.0)
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Creates a new sRGB color from 8-bit red, green, and blue components.
    ///
    /// # Arguments
    /// * `red` - Red component (0-255)
    /// * `green` - Green component (0-255)
    /// * `blue` - Blue component (0-255)
    #[must_use]
    pub const fn new_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Creates a new sRGB color from a hexadecimal color string.
    ///
    /// Meant for constants; use [`Srgb::try_from_hex`] for input.
    ///
    /// # Panics
    ///
    /// Panics if `hex` is not six hex digits with an optional `#` or `0x`
    /// prefix.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let (red, green, blue) = parse_hex_color(hex);
        Self::new_u8(red, green, blue)
    }

    /// Attempts to create a new sRGB color from a hexadecimal string without panicking.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly six hexadecimal digits
    /// or contains invalid characters.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        let (red, green, blue) = parse_hex_color_runtime(hex)?;
        Ok(Self::new_u8(red, green, blue))
    }

    /// Creates a new sRGB color from a packed 0xRRGGBB value.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new_u8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// A color with uniformly random components.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// A color with uniformly random components drawn from `rng`.
    #[must_use]
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        )
    }

    /// The 8-bit `[red, green, blue]` components.
    ///
    /// Components are clamped to 0.0..=1.0 and rounded to the nearest step.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(&self) -> [u8; 3] {
        let channel = |value: f32| (clamp_unit(value) * 255.0).round() as u8;
        [channel(self.red), channel(self.green), channel(self.blue)]
    }

    /// The color packed as 0xRRGGBB.
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        let [red, green, blue] = self.to_rgb8();
        (u32::from(red) << 16) | (u32::from(green) << 8) | u32::from(blue)
    }

    /// Uppercase `#RRGGBB` rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// The complementary color, `255 - c` per 8-bit component.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let [red, green, blue] = self.to_rgb8();
        Self::new_u8(255 - red, 255 - green, 255 - blue)
    }

    /// Mixes the color with white by `amount`.
    ///
    /// `amount <= 0` (or NaN) leaves the color unchanged and `amount >= 1`
    /// gives white.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        if amount.is_nan() || amount <= 0.0 {
            return self;
        }
        if amount >= 1.0 {
            return Self::WHITE;
        }
        Self::new(
            lerp(self.red, 1.0, amount),
            lerp(self.green, 1.0, amount),
            lerp(self.blue, 1.0, amount),
        )
    }

    /// Creates a color with the specified opacity applied.
    ///
    /// # Arguments
    /// * `opacity` - Opacity value (0.0 = transparent, 1.0 = opaque)
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> WithOpacity<Self> {
        WithOpacity::new(self, opacity)
    }
}

impl Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.to_rgb8();
        write!(f, "#{red:02X}{green:02X}{blue:02X}")
    }
}

impl From<(u8, u8, u8)> for Srgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new_u8(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new_u8(value[0], value[1], value[2])
    }
}

impl From<(f32, f32, f32)> for Srgb {
    fn from(value: (f32, f32, f32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<[f32; 3]> for Srgb {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromStr for Srgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn hex_parsing_accepts_prefixes() {
        let direct = Srgb::from_hex("#1A2B3C");
        let prefixed = Srgb::from_hex("0x1A2B3C");
        let bare = Srgb::from_hex("1A2B3C");

        assert_eq!(direct, prefixed);
        assert_eq!(direct, bare);
        assert_eq!(direct.to_rgb8(), [0x1A, 0x2B, 0x3C]);
    }

    #[test]
    fn try_hex_reports_errors() {
        assert!(matches!(
            Srgb::try_from_hex("#GGGGGG"),
            Err(HexColorError::InvalidDigit(1))
        ));

        assert!(matches!(
            Srgb::try_from_hex("#123"),
            Err(HexColorError::InvalidLength)
        ));
        assert!("not a color".parse::<Srgb>().is_err());
    }

    #[test]
    fn packed_values() {
        let color = Srgb::from_u32(0xFF_12_34_56);
        assert_eq!(color.to_rgb8(), [0x12, 0x34, 0x56]);
        assert_eq!(color.to_u32(), 0x12_34_56);
        assert_eq!(Srgb::from([0x12_u8, 0x34, 0x56]), color);
    }

    #[test]
    fn hex_rendering_is_uppercase() {
        assert_eq!(Srgb::new_u8(171, 205, 239).to_hex(), "#ABCDEF");
        assert_eq!(Srgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn out_of_range_components_are_clamped_when_rendered() {
        assert_eq!(Srgb::new(1.5, -0.2, f32::NAN).to_rgb8(), [255, 0, 0]);
    }

    #[test]
    fn inversion() {
        assert_eq!(Srgb::BLACK.inverted(), Srgb::WHITE);
        assert_eq!(Srgb::new_u8(10, 100, 250).inverted().to_rgb8(), [245, 155, 5]);
    }

    #[test]
    fn lighten_bounds() {
        let base = Srgb::new_u8(40, 80, 120);
        assert_eq!(base.lighten(0.0), base);
        assert_eq!(base.lighten(-1.0), base);
        assert_eq!(base.lighten(f32::NAN), base);
        assert_eq!(base.lighten(1.0), Srgb::WHITE);
        assert_eq!(base.lighten(3.0), Srgb::WHITE);
    }

    #[test]
    fn lighten_mixes_with_white() {
        let half = Srgb::BLACK.lighten(0.5);
        assert!(approx_eq(half.red, 0.5, EPSILON));
        assert!(approx_eq(half.green, 0.5, EPSILON));
        assert!(approx_eq(half.blue, 0.5, EPSILON));

        let base = Srgb::new(0.2, 0.4, 0.6);
        let lighter = base.lighten(0.25);
        assert!(lighter.red > base.red && lighter.green > base.green && lighter.blue > base.blue);
        assert!(approx_eq(lighter.blue, 0.7, EPSILON));
    }

    #[test]
    fn random_components_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let color = Srgb::random_with(&mut rng);
            for c in [color.red, color.green, color.blue] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
        let a = Srgb::random_with(&mut StdRng::seed_from_u64(42));
        let b = Srgb::random_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
