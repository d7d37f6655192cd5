//! Color value types for the picker.
//!
//! Three equivalent representations with pure conversions between them:
//! hex strings (`#rrggbb`), [`Rgb`] with 8-bit channels, and [`Hsv`] with
//! integer degrees/percentages. All rounding happens at the HSV boundary;
//! hex↔RGB is exact in both directions.

use crate::math;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One RGB channel, for targeted edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// An HSV color with integer components.
///
/// Hue is in degrees (0..=360, where 360 wraps to 0), saturation and
/// value are percentages (0..=100). Hue is 0 when saturation is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// True when `s` is `#` followed by exactly six hex digits.
///
/// This is the gate for recomputing HSV from typed hex text; the
/// permissive [`Rgb::from_hex`] accepts more than this.
pub fn is_strict_hex(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parse a 6-digit hex string, `#` optional, case-insensitive.
    ///
    /// Anything that doesn't match yields black rather than an error;
    /// transient states while the user types hex text hit this path.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::BLACK;
        }
        let parse = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        Self {
            r: parse(0),
            g: parse(2),
            b: parse(4),
        }
    }

    /// Build from possibly out-of-range channels, clamping each to 0..=255.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        let clamp = |n: i64| n.clamp(0, 255) as u8;
        Self {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn get(self, ch: Channel) -> u8 {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy with one channel replaced.
    pub fn with(self, ch: Channel, val: u8) -> Self {
        let mut out = self;
        match ch {
            Channel::Red => out.r = val,
            Channel::Green => out.g = val,
            Channel::Blue => out.b = val,
        }
        out
    }
}

impl Hsv {
    /// Standard max/min-channel decomposition, rounded to integers.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (h, s, v) = math::rgb_to_hsv(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        );
        Self {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            v: (v * 100.0).round() as u8,
        }
    }

    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(Rgb::from_hex(hex))
    }

    /// Sector-based inverse, each channel rounded to the nearest 8-bit value.
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = math::hsv_to_rgb(
            self.h as f64 / 360.0,
            self.s as f64 / 100.0,
            self.v as f64 / 100.0,
        );
        Rgb {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Copy with saturation and value replaced, hue preserved.
    pub fn with_sat_val(self, s: u8, v: u8) -> Self {
        Self { s, v, ..self }
    }

    /// Copy with hue replaced, saturation and value preserved.
    pub fn with_hue(self, h: u16) -> Self {
        Self { h, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_diff(a: Rgb, b: Rgb) -> u8 {
        let d = |x: u8, y: u8| x.abs_diff(y);
        d(a.r, b.r).max(d(a.g, b.g)).max(d(a.b, b.b))
    }

    #[test]
    fn hex_round_trip_is_exact() {
        // 16^3 grid over all channels; hex -> rgb -> hex must be identity.
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                    assert_eq!(Rgb::from_hex(&hex).to_hex(), hex);
                }
            }
        }
    }

    #[test]
    fn hex_parse_is_case_insensitive_and_prefix_optional() {
        let expected = Rgb {
            r: 0xab,
            g: 0xcd,
            b: 0xef,
        };
        assert_eq!(Rgb::from_hex("#AbCdEf"), expected);
        assert_eq!(Rgb::from_hex("abcdef"), expected);
        assert_eq!(Rgb::from_hex("ABCDEF").to_hex(), "#abcdef");
    }

    #[test]
    fn malformed_hex_falls_back_to_black() {
        for bad in ["", "#", "#12345", "#1234567", "zzzzzz", "#12g456", "#ffff"] {
            assert_eq!(Rgb::from_hex(bad), Rgb::BLACK);
        }
    }

    #[test]
    fn strict_pattern() {
        assert!(is_strict_hex("#abcdef"));
        assert!(is_strict_hex("#ABCDEF"));
        assert!(is_strict_hex("#001122"));
        assert!(!is_strict_hex("abcdef"));
        assert!(!is_strict_hex("#abcde"));
        assert!(!is_strict_hex("#abcdefa"));
        assert!(!is_strict_hex("#abcdeg"));
        assert!(!is_strict_hex(""));
    }

    #[test]
    fn channels_clamp() {
        assert_eq!(Rgb::from_channels(-10, 300, 128).to_hex(), "#00ff80");
        assert_eq!(Rgb::from_channels(0, 255, 128).to_hex(), "#00ff80");
    }

    #[test]
    fn achromatic_gray() {
        let hsv = Hsv::from_rgb(Rgb {
            r: 128,
            g: 128,
            b: 128,
        });
        assert_eq!(hsv.h, 0);
        assert_eq!(hsv.s, 0);
        assert_eq!(hsv.v, 50);
    }

    #[test]
    fn pure_hue_boundaries() {
        let full = |h| Hsv { h, s: 100, v: 100 }.to_rgb();
        assert_eq!(full(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(full(120), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(full(240), Rgb { r: 0, g: 0, b: 255 });
        // 360 wraps to 0
        assert_eq!(full(360), full(0));
    }

    #[test]
    fn known_decompositions() {
        assert_eq!(
            Hsv::from_hex("#112233"),
            Hsv { h: 210, s: 67, v: 20 }
        );
        assert_eq!(
            Hsv::from_hex("#ff0000"),
            Hsv { h: 0, s: 100, v: 100 }
        );
        assert_eq!(
            Hsv::from_hex("#abcdef"),
            Hsv { h: 210, s: 28, v: 94 }
        );
    }

    #[test]
    fn hsv_round_trip_is_near_identity() {
        // Integer HSV quantizes s and v to percent steps, so the
        // reconstruction can be off by up to two 8-bit steps per channel.
        for hex in ["#abcdef", "#112233", "#808080", "#ff8040", "#00ff80", "#ffffff", "#000000"] {
            let original = Rgb::from_hex(hex);
            let back = Hsv::from_rgb(original).to_rgb();
            assert!(
                channel_diff(original, back) <= 2,
                "{hex} reconstructed as {}",
                back.to_hex()
            );
        }
    }

    #[test]
    fn merge_helpers_preserve_other_components() {
        let hsv = Hsv { h: 210, s: 28, v: 94 };
        assert_eq!(hsv.with_sat_val(100, 50), Hsv { h: 210, s: 100, v: 50 });
        assert_eq!(hsv.with_hue(10), Hsv { h: 10, s: 28, v: 94 });
    }
}
