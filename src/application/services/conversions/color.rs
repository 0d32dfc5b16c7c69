use crate::application::dto::conversions::{HslColor, RgbColor};

/// Parses `#rrggbb` (the hash is optional, hex digits case-insensitive).
/// Returns `None` for anything else — shorthand and alpha forms included.
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(RgbColor { r, g, b })
}

pub fn rgb_to_hex(color: RgbColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// RGB to HSL, with hue rounded to whole degrees (wrapped positive) and
/// saturation/lightness rounded to whole percent.
pub fn rgb_to_hsl(color: RgbColor) -> HslColor {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let mut hue = 0.0;
    if diff != 0.0 {
        hue = if max == r {
            ((g - b) / diff) % 6.0
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
    }
    let mut hue = (hue * 60.0).round();
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (max + min) / 2.0;
    let saturation = if diff == 0.0 {
        0.0
    } else {
        diff / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    HslColor {
        h: hue as u16,
        s: (saturation * 100.0).round() as u8,
        l: (lightness * 100.0).round() as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_the_hash() {
        let expected = RgbColor { r: 255, g: 107, b: 53 };
        assert_eq!(hex_to_rgb("#ff6b35"), Some(expected));
        assert_eq!(hex_to_rgb("ff6b35"), Some(expected));
        assert_eq!(hex_to_rgb("#FF6B35"), Some(expected));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#ff6b3"), None);
        assert_eq!(hex_to_rgb("#ff6b355"), None);
        assert_eq!(hex_to_rgb("#gg6b35"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        let rgb = hex_to_rgb("#1a2b3c").unwrap();
        assert_eq!(rgb_to_hex(rgb), "#1a2b3c");
    }

    #[test]
    fn converts_a_saturated_orange_to_hsl() {
        let hsl = rgb_to_hsl(RgbColor { r: 255, g: 107, b: 53 });
        assert_eq!(hsl, HslColor { h: 16, s: 100, l: 60 });
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(
            rgb_to_hsl(RgbColor { r: 128, g: 128, b: 128 }),
            HslColor { h: 0, s: 0, l: 50 }
        );
        assert_eq!(
            rgb_to_hsl(RgbColor { r: 0, g: 0, b: 0 }),
            HslColor { h: 0, s: 0, l: 0 }
        );
        assert_eq!(
            rgb_to_hsl(RgbColor { r: 255, g: 255, b: 255 }),
            HslColor { h: 0, s: 0, l: 100 }
        );
    }

    #[test]
    fn a_negative_hue_wraps_positive() {
        // Pure magenta sits at 300 degrees via the negative branch.
        assert_eq!(
            rgb_to_hsl(RgbColor { r: 255, g: 0, b: 255 }),
            HslColor { h: 300, s: 100, l: 50 }
        );
    }
}
