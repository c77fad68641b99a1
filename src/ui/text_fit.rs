//! Shrink-to-fit font sizing for the profile name

use serde::{Deserialize, Serialize};

/// Font size range (px) and the safety margin kept free in the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitBounds {
    pub min_px: u32,
    pub max_px: u32,
    pub margin_px: f64,
}

impl Default for FitBounds {
    fn default() -> Self {
        Self {
            min_px: 12,
            max_px: 18,
            margin_px: 10.0,
        }
    }
}

/// Largest size in `[min_px, max_px]` whose measured width fits
/// `inner_width - margin_px`, or `min_px` when none does.
///
/// Walks down from `max_px` one pixel at a time. `measure` returns the
/// rendered text width at a given font size.
pub fn fit_font_size(bounds: &FitBounds, inner_width: f64, mut measure: impl FnMut(u32) -> f64) -> u32 {
    let limit = inner_width - bounds.margin_px;
    let mut size = bounds.max_px;
    while size > bounds.min_px {
        if measure(size) <= limit {
            break;
        }
        size -= 1;
    }
    size.max(bounds.min_px)
}

/// Parse a CSS pixel length the way `parseInt` does ("12.7px" → 12).
/// Anything without a leading number counts as 0.
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().map(|n| sign * n).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Text width grows linearly with font size
    fn linear(px_per_size: f64) -> impl Fn(u32) -> f64 {
        move |size| size as f64 * px_per_size
    }

    #[test]
    fn test_wide_container_keeps_max() {
        let bounds = FitBounds::default();
        assert_eq!(fit_font_size(&bounds, 1000.0, linear(6.0)), 18);
    }

    #[test]
    fn test_narrow_container_floors_at_min() {
        let bounds = FitBounds::default();
        assert_eq!(fit_font_size(&bounds, 20.0, linear(6.0)), 12);
    }

    #[test]
    fn test_shrinks_to_first_fit() {
        let bounds = FitBounds::default();
        // width = size * 6; limit = 110 - 10 = 100 → 16px (96)
        assert_eq!(fit_font_size(&bounds, 110.0, linear(6.0)), 16);
    }

    #[test]
    fn test_exact_fit_counts() {
        let bounds = FitBounds::default();
        // size 15 → 90 == 100 - 10
        assert_eq!(fit_font_size(&bounds, 100.0, linear(6.0)), 15);
    }

    #[test]
    fn test_min_size_is_never_measured() {
        let bounds = FitBounds::default();
        let mut measured = Vec::new();
        fit_font_size(&bounds, 0.0, |size| {
            measured.push(size);
            f64::MAX
        });
        assert_eq!(measured, [18, 17, 16, 15, 14, 13]);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("16px"), 16.0);
        assert_eq!(parse_px("12.7px"), 12.0);
        assert_eq!(parse_px(" -4px"), -4.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
    }

    proptest! {
        #[test]
        fn chosen_size_is_largest_fitting(
            widths in proptest::collection::vec(0.0f64..400.0, 7),
            inner in 0.0f64..400.0,
        ) {
            let bounds = FitBounds::default();
            let measure = |size: u32| widths[(size - 12) as usize];
            let chosen = fit_font_size(&bounds, inner, measure);

            let limit = inner - bounds.margin_px;
            let expected = (12..=18u32)
                .rev()
                .find(|&s| measure(s) <= limit)
                .unwrap_or(12);
            prop_assert_eq!(chosen, expected);
        }

        #[test]
        fn fitting_is_idempotent(px_per_size in 1.0f64..40.0, inner in 0.0f64..600.0) {
            let bounds = FitBounds::default();
            let first = fit_font_size(&bounds, inner, linear(px_per_size));
            let second = fit_font_size(&bounds, inner, linear(px_per_size));
            prop_assert_eq!(first, second);
            prop_assert!((12..=18).contains(&first));
        }
    }
}
