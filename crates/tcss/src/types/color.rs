//! RGBA color type with parsing and manipulation.
//!
//! This module provides the [`RgbaColor`] type used by themes and palettes.
//! Colors are stored as straight (non-premultiplied) sRGB channels plus an
//! alpha value, which is exactly what CSS `rgba()` expresses.
//!
//! ## Supported Color Formats
//!
//! - **Hex**: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **Named**: common CSS color names like `red`, `rebeccapurple`
//! - **Special**: `transparent`
//!
//! ## Output
//!
//! `Display` renders opaque colors as `#rrggbb` and translucent ones as
//! `rgba(r, g, b, a)`. [`RgbaColor::channel`] renders the space-separated
//! channel triple consumed by `rgba(var(--x-channel) / a)` expressions.

use std::fmt;

/// Error returned when color parsing fails.
///
/// Contains a descriptive message about what went wrong.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParseError {
    /// Human-readable description of the parsing error.
    pub message: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

/// An sRGB color with straight alpha.
///
/// # Examples
///
/// ```
/// use tcss::types::RgbaColor;
///
/// let blue = RgbaColor::parse("#1976d2").unwrap();
/// assert_eq!(blue, RgbaColor::rgb(25, 118, 210));
///
/// let faded = blue.with_alpha(0.4);
/// assert_eq!(faded.to_string(), "rgba(25, 118, 210, 0.4)");
/// assert_eq!(faded.channel(), "25 118 210");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaColor {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl RgbaColor {
    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Returns a fully transparent color.
    pub fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Parses a hex color string (e.g., "#ff0000").
    ///
    /// Panics if the hex string is invalid. Only meant for literals baked into
    /// built-in themes; for fallible parsing, use `parse()`.
    pub fn hex(hex: &str) -> Self {
        Self::parse(hex).expect("invalid hex color")
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Returns a copy of this color with its alpha replaced by `alpha`.
    ///
    /// The color channels are left untouched: the result is the same sRGB
    /// color at the requested opacity, not a blend against any background.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Returns true if the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Space-separated channel triple, e.g. `"25 118 210"`.
    pub fn channel(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb` form, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Calculates the relative luminance of this color.
    ///
    /// Uses the sRGB luminance formula (ITU-R BT.709).
    /// Returns a value between 0.0 (black) and 1.0 (white).
    pub fn luminance(&self) -> f32 {
        let r = Self::srgb_to_linear(self.r as f32 / 255.0);
        let g = Self::srgb_to_linear(self.g as f32 / 255.0);
        let b = Self::srgb_to_linear(self.b as f32 / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Black or white text, whichever reads better on this color.
    pub fn contrast_text(&self) -> Self {
        if self.luminance() > 0.5 {
            Self::rgba(0, 0, 0, 0.87)
        } else {
            Self::white()
        }
    }

    /// Increases HSL lightness by `amount` (0.0..=1.0), keeping alpha.
    pub fn lighten(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).clamp(0.0, 1.0), self.a)
    }

    /// Decreases HSL lightness by `amount` (0.0..=1.0), keeping alpha.
    pub fn darken(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).clamp(0.0, 1.0), self.a)
    }

    /// Parse a color string in various formats.
    ///
    /// Supported formats:
    /// - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
    /// - RGB: `rgb(r,g,b)`, `rgba(r,g,b,a)`
    /// - HSL: `hsl(h,s%,l%)`, `hsla(h,s%,l%,a)`
    /// - Named: CSS color names like `red`, `blue`, `coral`
    /// - Special: `transparent`
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError {
                message: "empty color string".to_string(),
            });
        }

        let lower = input.to_lowercase();

        if lower == "transparent" {
            return Ok(Self::transparent());
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if lower.starts_with("rgb") {
            return Self::parse_rgb_func(&lower);
        }

        if lower.starts_with("hsl") {
            return Self::parse_hsl_func(&lower);
        }

        Self::parse_named(&lower)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let chars: Vec<char> = hex.chars().collect();

        match chars.len() {
            3 | 4 => {
                // #RGB(A) -> #RRGGBB(AA)
                let r = Self::parse_hex_digit(chars[0])? * 17;
                let g = Self::parse_hex_digit(chars[1])? * 17;
                let b = Self::parse_hex_digit(chars[2])? * 17;
                let a = match chars.get(3) {
                    Some(c) => (Self::parse_hex_digit(*c)? * 17) as f32 / 255.0,
                    None => 1.0,
                };
                Ok(Self::rgba(r, g, b, a))
            }
            6 | 8 => {
                let r = Self::parse_hex_pair(chars[0], chars[1])?;
                let g = Self::parse_hex_pair(chars[2], chars[3])?;
                let b = Self::parse_hex_pair(chars[4], chars[5])?;
                let a = if chars.len() == 8 {
                    Self::parse_hex_pair(chars[6], chars[7])? as f32 / 255.0
                } else {
                    1.0
                };
                Ok(Self::rgba(r, g, b, a))
            }
            n => Err(ColorParseError {
                message: format!("invalid hex color length: {}", n),
            }),
        }
    }

    fn parse_hex_digit(c: char) -> Result<u8, ColorParseError> {
        c.to_digit(16).map(|d| d as u8).ok_or_else(|| ColorParseError {
            message: format!("invalid hex digit: {}", c),
        })
    }

    fn parse_hex_pair(c1: char, c2: char) -> Result<u8, ColorParseError> {
        Ok(Self::parse_hex_digit(c1)? * 16 + Self::parse_hex_digit(c2)?)
    }

    /// Splits `name(a, b, c)` into its comma-separated arguments.
    fn function_args<'a>(input: &'a str, name: &str) -> Result<Vec<&'a str>, ColorParseError> {
        let start = input.find('(').ok_or_else(|| ColorParseError {
            message: format!("missing '(' in {} function", name),
        })?;
        let end = input.rfind(')').ok_or_else(|| ColorParseError {
            message: format!("missing ')' in {} function", name),
        })?;
        if end < start {
            return Err(ColorParseError {
                message: format!("malformed {} function", name),
            });
        }

        let parts: Vec<&str> = input[start + 1..end].split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(ColorParseError {
                message: format!("{} requires at least 3 components", name),
            });
        }
        Ok(parts)
    }

    fn parse_rgb_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "rgb")?;

        let r = Self::parse_u8(parts[0])?;
        let g = Self::parse_u8(parts[1])?;
        let b = Self::parse_u8(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => Self::parse_f32(alpha)?,
            None => 1.0,
        };

        Ok(Self::rgba(r, g, b, a))
    }

    fn parse_hsl_func(input: &str) -> Result<Self, ColorParseError> {
        let parts = Self::function_args(input, "hsl")?;

        let h: f32 = parts[0].parse().map_err(|_| ColorParseError {
            message: format!("invalid hue: {}", parts[0]),
        })?;
        let s = Self::parse_percentage(parts[1])?;
        let l = Self::parse_percentage(parts[2])?;
        let a = match parts.get(3) {
            Some(alpha) => Self::parse_f32(alpha)?,
            None => 1.0,
        };

        Ok(Self::from_hsl(h, s, l, a))
    }

    fn parse_u8(s: &str) -> Result<u8, ColorParseError> {
        let val: i32 = s.parse().map_err(|_| ColorParseError {
            message: format!("invalid number: {}", s),
        })?;
        u8::try_from(val).map_err(|_| ColorParseError {
            message: format!("value out of range (0-255): {}", val),
        })
    }

    fn parse_f32(s: &str) -> Result<f32, ColorParseError> {
        s.parse().map_err(|_| ColorParseError {
            message: format!("invalid float: {}", s),
        })
    }

    fn parse_percentage(s: &str) -> Result<f32, ColorParseError> {
        let s = s.trim_end_matches('%');
        let val: f32 = s.parse().map_err(|_| ColorParseError {
            message: format!("invalid percentage: {}", s),
        })?;
        Ok(val / 100.0)
    }

    /// Converts to (hue degrees, saturation, lightness).
    fn to_hsl(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + (if g < b { 6.0 } else { 0.0 })
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0 * 360.0, s, l)
    }

    /// Creates an RgbaColor from HSL values.
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        let h = h / 360.0;
        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                Self::hue_to_rgb(p, q, h + 1.0 / 3.0),
                Self::hue_to_rgb(p, q, h),
                Self::hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::rgba(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a,
        )
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        let (r, g, b) = match name {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" | "aqua" => (0, 255, 255),
            "magenta" | "fuchsia" => (255, 0, 255),
            "gray" | "grey" => (128, 128, 128),
            "silver" => (192, 192, 192),
            "maroon" => (128, 0, 0),
            "olive" => (128, 128, 0),
            "navy" => (0, 0, 128),
            "purple" => (128, 0, 128),
            "teal" => (0, 128, 128),
            "orange" => (255, 165, 0),
            "coral" => (255, 127, 80),
            "crimson" => (220, 20, 60),
            "dodgerblue" => (30, 144, 255),
            "firebrick" => (178, 34, 34),
            "forestgreen" => (34, 139, 34),
            "gold" => (255, 215, 0),
            "hotpink" => (255, 105, 180),
            "indigo" => (75, 0, 130),
            "royalblue" => (65, 105, 225),
            "seagreen" => (46, 139, 87),
            "slategray" | "slategrey" => (112, 128, 144),
            "steelblue" => (70, 130, 180),
            "tomato" => (255, 99, 71),
            "rebeccapurple" => (102, 51, 153),
            _ => {
                return Err(ColorParseError {
                    message: format!("unknown color name: {}", name),
                });
            }
        };
        Ok(Self::rgb(r, g, b))
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::str::FromStr for RgbaColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_short_and_long_forms() {
        assert_eq!(RgbaColor::parse("#f00").unwrap(), RgbaColor::rgb(255, 0, 0));
        assert_eq!(
            RgbaColor::parse("#abc").unwrap(),
            RgbaColor::rgb(0xaa, 0xbb, 0xcc)
        );
        assert_eq!(
            RgbaColor::parse("#1976D2").unwrap(),
            RgbaColor::rgb(25, 118, 210)
        );
        assert_eq!(
            RgbaColor::parse("#ff000080").unwrap(),
            RgbaColor::rgba(255, 0, 0, 0x80 as f32 / 255.0)
        );
        assert_eq!(
            RgbaColor::parse("#0000").unwrap(),
            RgbaColor::rgba(0, 0, 0, 0.0)
        );
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(
            RgbaColor::parse("rgb(25, 118, 210)").unwrap(),
            RgbaColor::rgb(25, 118, 210)
        );
        let color = RgbaColor::parse("rgba(0,0,0,0.87)").unwrap();
        assert_eq!((color.r, color.g, color.b), (0, 0, 0));
        assert!((color.a - 0.87).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hsl_basic() {
        assert_eq!(
            RgbaColor::parse("hsl(0, 100%, 50%)").unwrap(),
            RgbaColor::rgb(255, 0, 0)
        );
        assert_eq!(
            RgbaColor::parse("hsl(240,100%,50%)").unwrap(),
            RgbaColor::rgb(0, 0, 255)
        );
        let gray = RgbaColor::parse("hsla(0, 0%, 50%, 0.5)").unwrap();
        assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
        assert!((gray.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_named_and_special() {
        assert_eq!(RgbaColor::parse("Coral").unwrap(), RgbaColor::rgb(255, 127, 80));
        assert!(RgbaColor::parse("transparent").unwrap().is_transparent());
        assert!(RgbaColor::parse("notacolor").is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(RgbaColor::parse("").is_err());
        assert!(RgbaColor::parse("   ").is_err());
        assert!(RgbaColor::parse("#12345").is_err());
        assert!(RgbaColor::parse("#ggg").is_err());
        assert!(RgbaColor::parse("rgb(256, 0, 0)").is_err());
        assert!(RgbaColor::parse("rgb(1, 2)").is_err());
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let base = RgbaColor::rgb(25, 118, 210);
        let faded = base.with_alpha(0.4);
        assert_eq!((faded.r, faded.g, faded.b), (25, 118, 210));
        assert!((faded.a - 0.4).abs() < f32::EPSILON);

        // Alpha is replaced, not multiplied.
        let text = RgbaColor::rgba(0, 0, 0, 0.87).with_alpha(0.4);
        assert!((text.a - 0.4).abs() < f32::EPSILON);

        assert_eq!(base.with_alpha(3.0).a, 1.0);
        assert_eq!(base.with_alpha(-1.0).a, 0.0);
    }

    #[test]
    fn test_display_and_channel() {
        assert_eq!(RgbaColor::rgb(25, 118, 210).to_string(), "#1976d2");
        assert_eq!(
            RgbaColor::rgb(25, 118, 210).with_alpha(0.4).to_string(),
            "rgba(25, 118, 210, 0.4)"
        );
        assert_eq!(RgbaColor::rgb(25, 118, 210).channel(), "25 118 210");
    }

    #[test]
    fn test_display_parses_back() {
        let color = RgbaColor::rgb(156, 39, 176).with_alpha(0.4);
        let parsed = RgbaColor::parse(&color.to_string()).unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_lighten_darken() {
        let gray = RgbaColor::rgb(128, 128, 128);
        let lighter = gray.lighten(0.2);
        let darker = gray.darken(0.2);
        assert!(lighter.r > gray.r);
        assert!(darker.r < gray.r);
        assert_eq!(RgbaColor::white().lighten(0.5), RgbaColor::white());
        assert_eq!(RgbaColor::black().darken(0.5), RgbaColor::black());
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(RgbaColor::rgb(25, 118, 210).contrast_text(), RgbaColor::white());
        let on_yellow = RgbaColor::rgb(255, 235, 59).contrast_text();
        assert_eq!((on_yellow.r, on_yellow.g, on_yellow.b), (0, 0, 0));
    }
}
