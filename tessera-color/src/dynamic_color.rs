//! Color roles whose tone depends on the scheme they are resolved in.
//!
//! A [`DynamicColor`] is a recipe: which palette to draw from, the tone to
//! use at standard contrast, what it is drawn on top of, and how far it must
//! stay from a related role. Resolving it against a [`DynamicScheme`]
//! applies the scheme's contrast level and then enforces the contrast and
//! tone-delta requirements in that order.
//!
//! Role definitions live in [`crate::roles`]; this module holds the
//! resolution algorithm.

use crate::{
    Argb, DynamicScheme, Hct, Role,
    contrast::{self, RATIO_30, RATIO_45, RATIO_70, RATIO_MAX, RATIO_MIN},
    utils,
};

/// Which of the scheme's six palettes a role draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    /// Primary accent palette.
    Primary,
    /// Secondary accent palette.
    Secondary,
    /// Tertiary accent palette.
    Tertiary,
    /// Neutral palette.
    Neutral,
    /// Neutral variant palette.
    NeutralVariant,
    /// Error palette.
    Error,
}

/// Direction in which a role is pushed away from its `keep_away` role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TonePolarity {
    /// The `keep_away` role ends up darker than this role.
    Darker,
    /// The `keep_away` role ends up lighter than this role.
    Lighter,
    /// Either direction; the side of the standard tones decides.
    NoPreference,
}

/// Minimum tone distance between two roles that are often adjacent, such
/// as an accent and its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneDeltaConstraint {
    /// Required tone distance.
    pub delta: f64,
    /// The role to keep away from.
    pub keep_away: Role,
    /// Which side `keep_away` stays on.
    pub polarity: TonePolarity,
}

/// Selects the tone of a role under one of the contrast extremes, or the
/// fully resolved tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ToneKind {
    Standard,
    MinContrast,
    MaxContrast,
    Resolved,
}

/// The definition of a color role.
///
/// Definitions are `'static` data; all per-scheme state lives in the
/// [`DynamicScheme`] they are resolved against.
#[derive(Debug, Clone, Copy)]
pub struct DynamicColor {
    /// Snake-case role name, e.g. `on_primary_container`.
    pub name: &'static str,
    /// The role this definition belongs to.
    pub role: Role,
    /// Palette the final color is taken from.
    pub palette: PaletteRole,
    /// Tone at standard contrast.
    pub tone: fn(&DynamicScheme) -> f64,
    /// The role this one is drawn on, if any.
    pub background: Option<fn(&DynamicScheme) -> Role>,
    /// Distance to keep from a related role, if any.
    pub tone_delta_constraint: Option<fn(&DynamicScheme) -> ToneDeltaConstraint>,
}

impl DynamicColor {
    /// The definition this role is drawn on in `scheme`.
    pub fn background(&self, scheme: &DynamicScheme) -> Option<&'static DynamicColor> {
        self.background.map(|background| background(scheme).definition())
    }

    /// Tone at standard contrast.
    pub fn standard_tone(&self, scheme: &DynamicScheme) -> f64 {
        scheme.memoized_tone(self.role, ToneKind::Standard, || (self.tone)(scheme))
    }

    /// Tone at contrast level -1.
    pub fn min_contrast_tone(&self, scheme: &DynamicScheme) -> f64 {
        scheme.memoized_tone(self.role, ToneKind::MinContrast, || {
            self.calculate_dynamic_tone(
                scheme,
                ToneKind::MinContrast,
                |standard_ratio, background_tone| {
                    if standard_ratio >= RATIO_70 {
                        contrasting_tone(background_tone, RATIO_45)
                    } else if standard_ratio >= RATIO_45 {
                        contrasting_tone(background_tone, RATIO_30)
                    } else if self.background_has_background(scheme) {
                        contrasting_tone(background_tone, standard_ratio)
                    } else {
                        self.standard_tone(scheme)
                    }
                },
                |standard_ratio| (RATIO_MIN, standard_ratio),
            )
        })
    }

    /// Tone at contrast level 1.
    pub fn max_contrast_tone(&self, scheme: &DynamicScheme) -> f64 {
        scheme.memoized_tone(self.role, ToneKind::MaxContrast, || {
            self.calculate_dynamic_tone(
                scheme,
                ToneKind::MaxContrast,
                |standard_ratio, background_tone| {
                    if self.background_has_background(scheme) {
                        contrasting_tone(background_tone, RATIO_70)
                    } else {
                        contrasting_tone(background_tone, RATIO_70.max(standard_ratio))
                    }
                },
                |_| (RATIO_MIN, RATIO_MAX),
            )
        })
    }

    /// The resolved tone at the scheme's contrast level.
    pub fn get_tone(&self, scheme: &DynamicScheme) -> f64 {
        scheme.memoized_tone(self.role, ToneKind::Resolved, || self.resolve_tone(scheme))
    }

    /// The resolved color as HCT.
    pub fn get_hct(&self, scheme: &DynamicScheme) -> Hct {
        scheme.palette(self.palette).hct(self.get_tone(scheme))
    }

    /// The resolved color.
    pub fn get_argb(&self, scheme: &DynamicScheme) -> Argb {
        self.get_hct(scheme).to_argb()
    }

    pub(crate) fn tone_of_kind(&self, scheme: &DynamicScheme, kind: ToneKind) -> f64 {
        match kind {
            ToneKind::Standard => self.standard_tone(scheme),
            ToneKind::MinContrast => self.min_contrast_tone(scheme),
            ToneKind::MaxContrast => self.max_contrast_tone(scheme),
            ToneKind::Resolved => self.get_tone(scheme),
        }
    }

    fn background_has_background(&self, scheme: &DynamicScheme) -> bool {
        self.background(scheme)
            .is_some_and(|background| background.background.is_some())
    }

    fn resolve_tone(&self, scheme: &DynamicScheme) -> f64 {
        let standard = self.standard_tone(scheme);
        let level = scheme.contrast_level();
        let decreasing = level < 0.0;

        let answer = if level == 0.0 {
            standard
        } else {
            let end = if decreasing {
                self.min_contrast_tone(scheme)
            } else {
                self.max_contrast_tone(scheme)
            };
            standard + (end - standard) * level.abs()
        };

        let bounds = match self.background(scheme) {
            None => (RATIO_MIN, RATIO_MAX),
            Some(background) => {
                let background_has_background = background.background.is_some();
                let standard_ratio =
                    contrast::ratio_of_tones(standard, background.standard_tone(scheme));
                if decreasing {
                    let min_ratio = contrast::ratio_of_tones(
                        self.min_contrast_tone(scheme),
                        background.min_contrast_tone(scheme),
                    );
                    let min = if background_has_background {
                        min_ratio
                    } else {
                        RATIO_MIN
                    };
                    (min, standard_ratio)
                } else {
                    let max_ratio = contrast::ratio_of_tones(
                        self.max_contrast_tone(scheme),
                        background.max_contrast_tone(scheme),
                    );
                    if background_has_background {
                        (max_ratio.min(standard_ratio), max_ratio.max(standard_ratio))
                    } else {
                        (RATIO_MIN, RATIO_MAX)
                    }
                }
            }
        };

        self.calculate_dynamic_tone(scheme, ToneKind::Resolved, |_, _| answer, |_| bounds)
    }

    /// Core of tone resolution.
    ///
    /// `desired` maps (standard ratio, background tone) to a candidate
    /// tone, and `ratio_bounds` maps the standard ratio to the allowed
    /// contrast range. Backgrounds are judged by the same `kind` of tone.
    fn calculate_dynamic_tone(
        &self,
        scheme: &DynamicScheme,
        kind: ToneKind,
        desired: impl Fn(f64, f64) -> f64,
        ratio_bounds: impl Fn(f64) -> (f64, f64),
    ) -> f64 {
        let standard = self.standard_tone(scheme);
        let Some(background) = self.background(scheme) else {
            return standard;
        };

        let standard_ratio = contrast::ratio_of_tones(standard, background.standard_tone(scheme));
        let background_tone = background.tone_of_kind(scheme, kind);
        let my_desired_tone = desired(standard_ratio, background_tone);
        let current_ratio = contrast::ratio_of_tones(background_tone, my_desired_tone);
        let (min_ratio, max_ratio) = ratio_bounds(standard_ratio);
        let desired_ratio = utils::clamp_f64(min_ratio, max_ratio, current_ratio);

        let mut answer = if desired_ratio == current_ratio {
            my_desired_tone
        } else {
            contrasting_tone(background_tone, desired_ratio)
        };
        if background.background.is_none() {
            answer = enable_light_foreground(answer);
        }
        self.ensure_tone_delta(scheme, answer, standard, kind)
    }

    fn ensure_tone_delta(
        &self,
        scheme: &DynamicScheme,
        tone: f64,
        standard: f64,
        kind: ToneKind,
    ) -> f64 {
        let Some(constraint) = self.tone_delta_constraint else {
            return tone;
        };
        let constraint = constraint(scheme);
        let keep_away = constraint.keep_away.definition();
        let keep_away_tone = keep_away.tone_of_kind(scheme, kind);
        let delta = (tone - keep_away_tone).abs();
        if delta >= constraint.delta {
            return tone;
        }
        match constraint.polarity {
            TonePolarity::Darker => {
                utils::clamp_f64(0.0, 100.0, keep_away_tone + constraint.delta)
            }
            TonePolarity::Lighter => {
                utils::clamp_f64(0.0, 100.0, keep_away_tone - constraint.delta)
            }
            TonePolarity::NoPreference => {
                let prefer_lighten = standard > keep_away.standard_tone(scheme);
                let alter_amount = (delta - constraint.delta).abs();
                let lighten = if prefer_lighten {
                    tone + alter_amount <= 100.0
                } else {
                    tone < alter_amount
                };
                if lighten {
                    tone + alter_amount
                } else {
                    tone - alter_amount
                }
            }
        }
    }
}

/// The lighter or darker tone that reaches `ratio` against `background`,
/// preferring the side a foreground on that background naturally sits on.
///
/// When neither side reaches the ratio, the side with more contrast wins.
pub fn contrasting_tone(background: f64, ratio: f64) -> f64 {
    let lighter_tone = contrast::lighter_or_max(background, ratio);
    let darker_tone = contrast::darker_or_min(background, ratio);
    let lighter_ratio = contrast::ratio_of_tones(lighter_tone, background);
    let darker_ratio = contrast::ratio_of_tones(darker_tone, background);

    if tone_prefers_light_foreground(background) {
        // Both sides fall short by about the same amount.
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

/// Tones under 60 read better with a light foreground.
///
/// Contrast ratio alone would put the crossover near 50, but people prefer
/// white text on mid tones.
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether a light foreground can actually reach legible contrast on this
/// tone.
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

/// Darkens tones in the 50 to 59 band to 49 so they can host a light
/// foreground. Other tones are unchanged.
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        49.0
    } else {
        tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_foreground_band() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(59.5));
        assert!(tone_allows_light_foreground(49.4));
        assert!(!tone_allows_light_foreground(49.5));
        assert_eq!(enable_light_foreground(55.0), 49.0);
        assert_eq!(enable_light_foreground(45.0), 45.0);
        assert_eq!(enable_light_foreground(70.0), 70.0);
    }

    #[test]
    fn test_contrasting_tone_sides() {
        // Dark background: a lighter foreground.
        let on_dark = contrasting_tone(10.0, RATIO_45);
        assert!(on_dark > 10.0);
        assert!(contrast::ratio_of_tones(on_dark, 10.0) >= RATIO_45 - 0.04);
        // Light background: a darker foreground.
        let on_light = contrasting_tone(90.0, RATIO_45);
        assert!(on_light < 90.0);
        assert!(contrast::ratio_of_tones(on_light, 90.0) >= RATIO_45 - 0.04);
    }

    #[test]
    fn test_contrasting_tone_falls_back_to_extremes() {
        // Mid gray cannot reach 21:1 on either side.
        let tone = contrasting_tone(50.0, RATIO_MAX);
        assert!(tone == 0.0 || tone == 100.0);
    }
}
