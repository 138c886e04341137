/// HSL components used when the accent color cannot be parsed (`#3b82f6`).
pub const FALLBACK_HSL: &str = "217 91% 60%";

/// Convert `#rrggbb` (the `#` is optional, hex digits are case-insensitive) into
/// `"H S% L%"` with each component rounded to an integer.
pub fn hex_to_hsl(hex: &str) -> String {
    let Some([r, g, b]) = parse_rgb(hex) else {
        return FALLBACK_HSL.to_string();
    };

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    format!(
        "{} {}% {}%",
        (h * 360.0).round() as i64,
        (s * 100.0).round() as i64,
        (l * 100.0).round() as i64
    )
}

/// Whether `hex` is a color [`hex_to_hsl`] can convert.
pub fn is_hex_color(hex: &str) -> bool {
    parse_rgb(hex).is_some()
}

fn parse_rgb(hex: &str) -> Option<[f64; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_default_accent() {
        assert_eq!(hex_to_hsl("#3b82f6"), "217 91% 60%");
    }

    #[test]
    fn hash_is_optional_and_case_is_ignored() {
        assert_eq!(hex_to_hsl("3B82F6"), "217 91% 60%");
    }

    #[test]
    fn greys_have_no_hue_or_saturation() {
        assert_eq!(hex_to_hsl("#ffffff"), "0 0% 100%");
        assert_eq!(hex_to_hsl("#000000"), "0 0% 0%");
    }

    #[test]
    fn primaries() {
        assert_eq!(hex_to_hsl("#ff0000"), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00ff00"), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000ff"), "240 100% 50%");
    }

    #[test]
    fn invalid_input_falls_back() {
        assert_eq!(hex_to_hsl("#fff"), FALLBACK_HSL);
        assert_eq!(hex_to_hsl("blue"), FALLBACK_HSL);
        assert_eq!(hex_to_hsl(""), FALLBACK_HSL);
        assert_eq!(hex_to_hsl("#gg0000"), FALLBACK_HSL);
        assert!(!is_hex_color("#gg0000"));
        assert!(is_hex_color("#3B82F6"));
    }
}
