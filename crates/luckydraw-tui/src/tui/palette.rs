// Per-entry colors for the pool view.
//
// Each entry gets a stable pastel color derived from its value, so the same
// name keeps its color as the pool reshuffles.

use luckydraw_core::Entry;
use ratatui::style::Color;

/// Numeric seed for an entry: its leading integer if non-zero, otherwise the
/// code of its first character.
pub fn seed_value(entry: &Entry) -> f64 {
    let text = entry.to_string();
    match leading_integer(&text) {
        Some(n) if n != 0 => n as f64,
        _ => text.chars().next().map(|c| c as u32 as f64).unwrap_or(0.0),
    }
}

/// Fractional part of `sin(seed) * 10000`, in `[0, 1)`.
pub fn hue_fraction(seed: f64) -> f64 {
    let s = seed.sin() * 10000.0;
    s - s.floor()
}

/// Pastel color for an entry: `hsl(hue, 100%, 75%)`.
pub fn entry_color(entry: &Entry) -> Color {
    let hue = hue_fraction(seed_value(entry)) * 360.0;
    hsl_to_rgb(hue, 1.0, 0.75)
}

/// Parse an optional sign followed by digits at the start of `text`,
/// after leading whitespace. `None` when there are no digits.
fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Too many digits to fit: fall back to the character code.
    digits.parse::<i64>().ok().map(|n| sign * n)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_uses_leading_integer() {
        assert_eq!(seed_value(&Entry::Number(42)), 42.0);
        assert_eq!(seed_value(&Entry::text("12 Alice")), 12.0);
        assert_eq!(seed_value(&Entry::text("-3")), -3.0);
    }

    #[test]
    fn seed_falls_back_to_first_char() {
        assert_eq!(seed_value(&Entry::text("Alice")), 'A' as u32 as f64);
        // Zero is not a usable seed.
        assert_eq!(seed_value(&Entry::text("0")), '0' as u32 as f64);
        assert_eq!(seed_value(&Entry::Number(0)), '0' as u32 as f64);
    }

    #[test]
    fn hue_fraction_in_unit_range() {
        for seed in [1.0, 2.0, 48.0, 65.0, 1000.0, -7.0] {
            let h = hue_fraction(seed);
            assert!((0.0..1.0).contains(&h), "seed {seed} gave {h}");
        }
    }

    #[test]
    fn same_entry_same_color() {
        assert_eq!(entry_color(&Entry::text("Bob")), entry_color(&Entry::text("Bob")));
        assert_eq!(entry_color(&Entry::Number(7)), entry_color(&Entry::text("7")));
    }

    #[test]
    fn colors_are_pastel() {
        match entry_color(&Entry::Number(5)) {
            Color::Rgb(r, g, b) => {
                // Lightness 75% keeps every channel at or above half.
                assert!(r >= 127 && g >= 127 && b >= 127, "({r}, {g}, {b})");
                assert!(r.max(g).max(b) == 255);
            }
            other => panic!("expected Rgb, got {other:?}"),
        }
    }

    #[test]
    fn hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.75), Color::Rgb(255, 128, 128));
    }
}
