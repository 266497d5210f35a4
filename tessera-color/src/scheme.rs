//! Dynamic schemes: a seed, a variant, a brightness and a contrast level.

mod variant;

pub use variant::{ChromaRule, HueRule, PaletteRule, Variant, VariantPolicy};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{
    Argb, Hct, Role, TonalPalette,
    dynamic_color::{PaletteRole, ToneKind},
};

/// Hue of the error palette.
const ERROR_HUE: f64 = 25.0;
/// Chroma of the error palette.
const ERROR_CHROMA: f64 = 84.0;

/// Everything needed to resolve color roles for one theme.
///
/// A scheme owns six tonal palettes built from its source color according
/// to its [`Variant`], plus a memo of every tone resolved so far. Resolving
/// the same role twice is cheap and returns bit-identical results.
///
/// ```
/// use tessera_color::{Argb, DynamicScheme, Role, Variant};
///
/// let scheme = DynamicScheme::from_argb(Argb(0xff0000ff), Variant::Neutral, false, 0.0);
/// assert_eq!(scheme.get_argb(Role::Primary), Argb(0xff5d5d6c));
/// ```
#[derive(Debug)]
pub struct DynamicScheme {
    source_color_hct: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    primary_palette: TonalPalette,
    secondary_palette: TonalPalette,
    tertiary_palette: TonalPalette,
    neutral_palette: TonalPalette,
    neutral_variant_palette: TonalPalette,
    error_palette: TonalPalette,
    tones: RwLock<FxHashMap<(Role, ToneKind), f64>>,
}

impl DynamicScheme {
    /// Builds a scheme for `source`.
    ///
    /// `contrast_level` runs from -1 (reduced) through 0 (standard) to 1
    /// (high); values outside that range are clamped and NaN is treated as
    /// standard contrast.
    #[tracing::instrument(level = "trace", skip(source), fields(source = %source.to_argb()))]
    pub fn new(source: Hct, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        let policy = variant.policy();
        let scheme = Self {
            source_color_hct: source,
            variant,
            is_dark,
            contrast_level: sanitize_contrast_level(contrast_level),
            primary_palette: policy.primary.palette(&source),
            secondary_palette: policy.secondary.palette(&source),
            tertiary_palette: policy.tertiary.palette(&source),
            neutral_palette: policy.neutral.palette(&source),
            neutral_variant_palette: policy.neutral_variant.palette(&source),
            error_palette: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
            tones: RwLock::new(FxHashMap::default()),
        };
        debug!(
            primary_hue = scheme.primary_palette.hue(),
            primary_chroma = scheme.primary_palette.chroma(),
            tertiary_hue = scheme.tertiary_palette.hue(),
            "built scheme palettes"
        );
        scheme
    }

    /// Builds a scheme for a seed color. Alpha is ignored.
    pub fn from_argb(seed: Argb, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::new(Hct::from_argb(seed), variant, is_dark, contrast_level)
    }

    /// The source color.
    pub fn source_color_hct(&self) -> Hct {
        self.source_color_hct
    }

    /// The source color as ARGB.
    pub fn source_color_argb(&self) -> Argb {
        self.source_color_hct.to_argb()
    }

    /// The variant this scheme was built with.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether this is a dark theme.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Contrast level in `[-1, 1]`.
    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// Whether container roles follow the source color's tone.
    pub fn is_source_faithful(&self) -> bool {
        self.variant.is_source_faithful()
    }

    /// One of the six palettes.
    pub fn palette(&self, palette: PaletteRole) -> &TonalPalette {
        match palette {
            PaletteRole::Primary => &self.primary_palette,
            PaletteRole::Secondary => &self.secondary_palette,
            PaletteRole::Tertiary => &self.tertiary_palette,
            PaletteRole::Neutral => &self.neutral_palette,
            PaletteRole::NeutralVariant => &self.neutral_variant_palette,
            PaletteRole::Error => &self.error_palette,
        }
    }

    /// Primary accent palette.
    pub fn primary_palette(&self) -> &TonalPalette {
        &self.primary_palette
    }

    /// Secondary accent palette.
    pub fn secondary_palette(&self) -> &TonalPalette {
        &self.secondary_palette
    }

    /// Tertiary accent palette.
    pub fn tertiary_palette(&self) -> &TonalPalette {
        &self.tertiary_palette
    }

    /// Neutral palette.
    pub fn neutral_palette(&self) -> &TonalPalette {
        &self.neutral_palette
    }

    /// Neutral variant palette.
    pub fn neutral_variant_palette(&self) -> &TonalPalette {
        &self.neutral_variant_palette
    }

    /// Error palette.
    pub fn error_palette(&self) -> &TonalPalette {
        &self.error_palette
    }

    /// Resolved tone of a role.
    pub fn tone(&self, role: Role) -> f64 {
        role.definition().get_tone(self)
    }

    /// Resolved color of a role as HCT.
    pub fn get_hct(&self, role: Role) -> Hct {
        role.definition().get_hct(self)
    }

    /// Resolved color of a role.
    pub fn get_argb(&self, role: Role) -> Argb {
        role.definition().get_argb(self)
    }

    /// Returns the memoized tone for `(role, kind)`, computing it with
    /// `compute` on a miss. No lock is held while `compute` runs, as it
    /// resolves other roles through this same memo.
    pub(crate) fn memoized_tone(
        &self,
        role: Role,
        kind: ToneKind,
        compute: impl FnOnce() -> f64,
    ) -> f64 {
        if let Some(tone) = self.tones.read().get(&(role, kind)) {
            return *tone;
        }
        let tone = compute();
        self.tones.write().insert((role, kind), tone);
        tone
    }
}

fn sanitize_contrast_level(level: f64) -> f64 {
    if level.is_nan() {
        warn!("contrast level is NaN, using standard contrast");
        return 0.0;
    }
    if !(-1.0..=1.0).contains(&level) {
        warn!(level, "contrast level out of range, clamping to [-1, 1]");
        return level.clamp(-1.0, 1.0);
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_follow_policy() {
        let source = Hct::from_argb(Argb(0xff0000ff));
        let scheme = DynamicScheme::new(source, Variant::Neutral, false, 0.0);
        assert_eq!(scheme.primary_palette().chroma(), 12.0);
        assert_eq!(scheme.secondary_palette().chroma(), 8.0);
        assert_eq!(scheme.tertiary_palette().chroma(), 16.0);
        assert_eq!(scheme.neutral_palette().chroma(), 2.0);
        assert_eq!(scheme.neutral_variant_palette().chroma(), 2.0);
        assert_eq!(scheme.error_palette().hue(), 25.0);
        assert_eq!(scheme.error_palette().chroma(), 84.0);
        assert_eq!(scheme.primary_palette().hue(), source.hue());
    }

    #[test]
    fn test_contrast_level_is_sanitized() {
        let seed = Argb(0xff6750a4);
        assert_eq!(
            DynamicScheme::from_argb(seed, Variant::TonalSpot, false, 3.0).contrast_level(),
            1.0
        );
        assert_eq!(
            DynamicScheme::from_argb(seed, Variant::TonalSpot, false, -1.5).contrast_level(),
            -1.0
        );
        assert_eq!(
            DynamicScheme::from_argb(seed, Variant::TonalSpot, false, f64::NAN).contrast_level(),
            0.0
        );
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = DynamicScheme::from_argb(Argb(0xff4285f4), Variant::TonalSpot, true, 0.0);
        let clear = DynamicScheme::from_argb(Argb(0x004285f4), Variant::TonalSpot, true, 0.0);
        for role in Role::ALL {
            assert_eq!(opaque.get_argb(role), clear.get_argb(role));
        }
    }

    #[test]
    fn test_resolution_is_memoized_and_stable() {
        let scheme = DynamicScheme::from_argb(Argb(0xff4285f4), Variant::Content, false, 0.5);
        let first: Vec<Argb> = Role::ALL.iter().map(|&r| scheme.get_argb(r)).collect();
        let second: Vec<Argb> = Role::ALL.iter().map(|&r| scheme.get_argb(r)).collect();
        assert_eq!(first, second);
        assert!(scheme.tones.read().contains_key(&(Role::Primary, ToneKind::Resolved)));
    }

    #[test]
    fn test_shared_across_threads() {
        let scheme = std::sync::Arc::new(DynamicScheme::from_argb(
            Argb(0xff6750a4),
            Variant::Vibrant,
            true,
            1.0,
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scheme = scheme.clone();
                std::thread::spawn(move || {
                    Role::ALL.iter().map(|&r| scheme.get_argb(r)).collect::<Vec<_>>()
                })
            })
            .collect();
        let expected: Vec<Argb> = Role::ALL.iter().map(|&r| scheme.get_argb(r)).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
