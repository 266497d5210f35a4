//! WCAG contrast ratios expressed in tones.
//!
//! Contrast between two colors depends only on their relative luminance,
//! and tone is a function of luminance alone, so every question here can be
//! answered with tones.

use crate::{cie, utils};

/// The lowest possible contrast ratio, a color against itself.
pub const RATIO_MIN: f64 = 1.0;
/// Minimum contrast for large text and non-text elements.
pub const RATIO_30: f64 = 3.0;
/// Minimum contrast for body text.
pub const RATIO_45: f64 = 4.5;
/// Enhanced contrast for body text.
pub const RATIO_70: f64 = 7.0;
/// The highest possible contrast ratio, black against white.
pub const RATIO_MAX: f64 = 21.0;

/// Accepted shortfall between the requested and the achieved ratio.
const CONTRAST_RATIO_EPSILON: f64 = 0.04;

/// Added to (or subtracted from) a solved tone so that gamut mapping, which
/// may move L* by up to this much, cannot drop the ratio below the target.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Contrast ratio of two tones. Tones are clamped to `[0, 100]`.
pub fn ratio_of_tones(t1: f64, t2: f64) -> f64 {
    ratio_of_ys(
        cie::y_from_lstar(utils::clamp_f64(0.0, 100.0, t1)),
        cie::y_from_lstar(utils::clamp_f64(0.0, 100.0, t2)),
    )
}

/// Contrast ratio of two relative luminances (0 to 100).
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// A tone at least as light as `tone` that reaches `ratio` against it.
///
/// Returns `None` when `tone` is outside `[0, 100]` or when no tone is
/// light enough.
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let dark_y = cie::y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    if !(0.0..=100.0).contains(&light_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = cie::lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// A tone at least as dark as `tone` that reaches `ratio` against it.
///
/// Returns `None` when `tone` is outside `[0, 100]` or when no tone is
/// dark enough.
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let light_y = cie::y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    if !(0.0..=100.0).contains(&dark_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = cie::lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// [`lighter`], falling back to white (100) when unreachable.
pub fn lighter_or_max(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// [`darker`], falling back to black (0) when unreachable.
pub fn darker_or_min(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).map_or(0.0, |t| t.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_bounds() {
        assert!((ratio_of_tones(0.0, 100.0) - RATIO_MAX).abs() < 1e-9);
        assert!((ratio_of_tones(100.0, 0.0) - RATIO_MAX).abs() < 1e-9);
        assert_eq!(ratio_of_tones(42.0, 42.0), RATIO_MIN);
        assert_eq!(ratio_of_tones(-20.0, 0.0), RATIO_MIN);
        assert_eq!(ratio_of_tones(120.0, 100.0), RATIO_MIN);
    }

    #[test]
    fn test_unreachable_is_none() {
        assert_eq!(lighter(100.0, 2.0), None);
        assert_eq!(darker(0.0, 2.0), None);
        assert_eq!(lighter(50.0, RATIO_45), None);
        assert_eq!(lighter(-1.0, 1.5), None);
        assert_eq!(darker(101.0, 1.5), None);
    }

    #[test]
    fn test_known_tones() {
        let d = darker(50.0, RATIO_45).unwrap_or(f64::NAN);
        assert!((d - 1.444).abs() < 0.01);
        let l = lighter(50.0, RATIO_30).unwrap_or(f64::NAN);
        assert!((l - 85.0155).abs() < 0.01);
        let d = darker(50.0, RATIO_30).unwrap_or(f64::NAN);
        assert!((d - 18.85).abs() < 0.01);
        let l = lighter(20.0, RATIO_45).unwrap_or(f64::NAN);
        assert!((l - 62.87).abs() < 0.01);
        let d = darker(90.0, RATIO_45).unwrap_or(f64::NAN);
        assert!((d - 42.46).abs() < 0.01);
    }

    #[test]
    fn test_solved_tones_reach_ratio() {
        for tone in (0..=100).step_by(5) {
            let tone = f64::from(tone);
            for ratio in [RATIO_30, RATIO_45, RATIO_70] {
                if let Some(light) = lighter(tone, ratio) {
                    assert!(ratio_of_tones(light, tone) >= ratio - CONTRAST_RATIO_EPSILON);
                }
                if let Some(dark) = darker(tone, ratio) {
                    assert!(ratio_of_tones(dark, tone) >= ratio - CONTRAST_RATIO_EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(lighter_or_max(90.0, RATIO_70), 100.0);
        assert_eq!(darker_or_min(10.0, RATIO_70), 0.0);
    }
}
