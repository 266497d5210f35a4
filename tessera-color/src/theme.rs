//! Resolved themes, theme options and the process-wide current theme.
//!
//! A [`ResolvedTheme`] is the flat result of resolving every [`Role`] of a
//! [`DynamicScheme`]: plain ARGB values that are cheap to copy around and
//! hand to widgets. [`apply`] turns a seed color and a set of
//! [`ThemeOptions`] into one, and [`set_global_theme`] publishes it for the
//! rest of the process.

use std::{
    fmt,
    ops::Index,
    sync::{Arc, OnceLock},
};

use derive_builder::Builder;
use parking_lot::RwLock;
use tracing::debug;

use crate::{Argb, DynamicScheme, Role, Variant};

/// Seed of the default theme.
pub const DEFAULT_SEED: Argb = Argb(0xff6750a4);

/// Every color role resolved for one scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    source: Argb,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    colors: [Argb; Role::COUNT],
}

impl ResolvedTheme {
    /// Resolves every role of `scheme`.
    pub fn from_scheme(scheme: &DynamicScheme) -> Self {
        Self {
            source: scheme.source_color_argb(),
            variant: scheme.variant(),
            is_dark: scheme.is_dark(),
            contrast_level: scheme.contrast_level(),
            colors: Role::ALL.map(|role| scheme.get_argb(role)),
        }
    }

    /// Builds a scheme for `seed` and resolves it.
    pub fn from_seed(seed: Argb, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::from_scheme(&DynamicScheme::from_argb(seed, variant, is_dark, contrast_level))
    }

    /// The color of `role`.
    #[inline]
    pub fn get(&self, role: Role) -> Argb {
        self.colors[role.index()]
    }

    /// Every role with its color, in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Argb)> + '_ {
        Role::ALL.into_iter().zip(self.colors.iter().copied())
    }

    /// The seed color, with full alpha.
    pub fn source(&self) -> Argb {
        self.source
    }

    /// The variant the theme was built with.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether this is a dark theme.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// The contrast level the theme was resolved at, in `[-1, 1]`.
    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }
}

impl Default for ResolvedTheme {
    /// Light, standard-contrast tonal spot theme for [`DEFAULT_SEED`].
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED, Variant::TonalSpot, false, 0.0)
    }
}

impl Index<Role> for ResolvedTheme {
    type Output = Argb;

    fn index(&self, role: Role) -> &Argb {
        &self.colors[role.index()]
    }
}

/// Reasons a serialized theme cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeFormatError {
    /// A color is keyed by a name that is not a role.
    #[error("unknown color role `{0}`")]
    UnknownRole(String),
    /// A role has no color.
    #[error("missing color for role `{0}`")]
    MissingRole(Role),
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    use super::{ResolvedTheme, ThemeFormatError};
    use crate::{Argb, Role, Variant};

    #[derive(Serialize, Deserialize)]
    struct ResolvedThemeRepr {
        source: Argb,
        variant: Variant,
        is_dark: bool,
        contrast_level: f64,
        colors: BTreeMap<String, Argb>,
    }

    impl ResolvedThemeRepr {
        fn into_theme(self) -> Result<ResolvedTheme, ThemeFormatError> {
            if let Some(name) = self.colors.keys().find(|name| Role::from_name(name).is_none()) {
                return Err(ThemeFormatError::UnknownRole(name.clone()));
            }
            let mut colors = [Argb::BLACK; Role::COUNT];
            for role in Role::ALL {
                colors[role.index()] = *self
                    .colors
                    .get(role.name())
                    .ok_or(ThemeFormatError::MissingRole(role))?;
            }
            Ok(ResolvedTheme {
                source: self.source,
                variant: self.variant,
                is_dark: self.is_dark,
                contrast_level: self.contrast_level,
                colors,
            })
        }
    }

    impl Serialize for ResolvedTheme {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            ResolvedThemeRepr {
                source: self.source,
                variant: self.variant,
                is_dark: self.is_dark,
                contrast_level: self.contrast_level,
                colors: self
                    .iter()
                    .map(|(role, argb)| (role.name().to_owned(), argb))
                    .collect(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ResolvedTheme {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            ResolvedThemeRepr::deserialize(deserializer)?
                .into_theme()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// How [`apply`] builds a theme from a seed color.
///
/// ```
/// use tessera_color::{ThemeOptionsBuilder, Variant};
///
/// let options = ThemeOptionsBuilder::default()
///     .variant(Variant::Vibrant)
///     .is_dark(true)
///     .contrast_level(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(options.variant, Variant::Vibrant);
/// ```
#[derive(Builder, Clone)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct ThemeOptions {
    /// Scheme style.
    #[builder(default)]
    pub variant: Variant,
    /// Whether to build a dark theme.
    #[builder(default = "false")]
    pub is_dark: bool,
    /// Contrast level in `[-1, 1]`.
    #[builder(default = "0.0")]
    pub contrast_level: f64,
    /// Decides whether a seed is themed at all. Seeds it rejects make
    /// [`apply`] return `None`.
    #[builder(default = "Arc::new(|_| true)")]
    pub precondition: Arc<dyn Fn(Argb) -> bool + Send + Sync>,
    /// Called with every theme [`apply`] produces.
    #[builder(default = "Arc::new(|_| {})")]
    pub on_applied: Arc<dyn Fn(&ResolvedTheme) + Send + Sync>,
}

impl ThemeOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.contrast_level {
            Some(level) if !(-1.0..=1.0).contains(&level) => {
                Err(format!("contrast level {level} is outside [-1, 1]"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            is_dark: false,
            contrast_level: 0.0,
            precondition: Arc::new(|_| true),
            on_applied: Arc::new(|_| {}),
        }
    }
}

impl fmt::Debug for ThemeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeOptions")
            .field("variant", &self.variant)
            .field("is_dark", &self.is_dark)
            .field("contrast_level", &self.contrast_level)
            .finish_non_exhaustive()
    }
}

/// Builds the theme for `seed` under `options`.
///
/// Returns `None` when the options' precondition rejects the seed; the
/// `on_applied` callback only runs for themes that were built.
#[tracing::instrument(level = "trace", skip_all, fields(seed = %seed, variant = ?options.variant))]
pub fn apply(seed: Argb, options: &ThemeOptions) -> Option<ResolvedTheme> {
    if !(options.precondition)(seed) {
        debug!("precondition rejected seed");
        return None;
    }
    let theme = ResolvedTheme::from_seed(
        seed,
        options.variant,
        options.is_dark,
        options.contrast_level,
    );
    (options.on_applied)(&theme);
    Some(theme)
}

/// Like [`apply`], and also makes the result the global theme.
pub fn apply_global(seed: Argb, options: &ThemeOptions) -> Option<ResolvedTheme> {
    let theme = apply(seed, options)?;
    set_global_theme(theme.clone());
    Some(theme)
}

static GLOBAL_THEME: OnceLock<RwLock<ResolvedTheme>> = OnceLock::new();

fn global() -> &'static RwLock<ResolvedTheme> {
    GLOBAL_THEME.get_or_init(|| RwLock::new(ResolvedTheme::default()))
}

/// The current process-wide theme. Starts as [`ResolvedTheme::default`].
pub fn global_theme() -> ResolvedTheme {
    global().read().clone()
}

/// Replaces the process-wide theme.
pub fn set_global_theme(theme: ResolvedTheme) {
    debug!(source = %theme.source(), dark = theme.is_dark(), "global theme replaced");
    *global().write() = theme;
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    // Tests that touch the global theme run one at a time.
    static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_theme_matches_scheme() {
        init_tracing();
        let scheme = DynamicScheme::from_argb(Argb(0xff4285f4), Variant::TonalSpot, true, 0.0);
        let theme = ResolvedTheme::from_scheme(&scheme);
        for (role, argb) in theme.iter() {
            assert_eq!(argb, scheme.get_argb(role));
            assert_eq!(theme[role], argb);
        }
        assert_eq!(theme.iter().count(), Role::COUNT);
        assert_eq!(theme.get(Role::Primary), Argb(0xffadc6ff));
        assert_eq!(theme.get(Role::Surface), Argb(0xff111318));
        assert!(theme.is_dark());
        assert_eq!(theme.variant(), Variant::TonalSpot);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = ResolvedTheme::from_seed(Argb(0xff0000ff), Variant::Content, false, 0.3);
        let second = ResolvedTheme::from_seed(Argb(0xff0000ff), Variant::Content, false, 0.3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_source_drops_alpha() {
        let theme = ResolvedTheme::from_seed(Argb(0x804285f4), Variant::TonalSpot, false, 0.0);
        assert_eq!(theme.source(), Argb(0xff4285f4));
        assert_eq!(theme.get(Role::Primary), Argb(0xff445e91));
    }

    #[test]
    fn test_builder_defaults() {
        let options = ThemeOptionsBuilder::default().build().unwrap();
        assert_eq!(options.variant, Variant::TonalSpot);
        assert!(!options.is_dark);
        assert_eq!(options.contrast_level, 0.0);
        assert!((options.precondition)(Argb::BLACK));

        let default = ThemeOptions::default();
        assert_eq!(default.variant, options.variant);
        assert_eq!(default.contrast_level, options.contrast_level);
    }

    #[test]
    fn test_builder_rejects_contrast_out_of_range() {
        for level in [1.5, -2.0, f64::NAN, f64::INFINITY] {
            let result = ThemeOptionsBuilder::default().contrast_level(level).build();
            assert!(matches!(result, Err(ThemeOptionsBuilderError::ValidationError(_))));
        }
        assert!(ThemeOptionsBuilder::default().contrast_level(-1.0).build().is_ok());
    }

    #[test]
    fn test_apply_respects_precondition() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let options = ThemeOptionsBuilder::default()
            .variant(Variant::Neutral)
            .precondition(Arc::new(|seed: Argb| seed.blue() > seed.red()))
            .on_applied(Arc::new(move |_: &ResolvedTheme| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .build()
            .unwrap();

        assert!(apply(Argb(0xffff0000), &options).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let theme = apply(Argb(0xff0000ff), &options).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(theme.get(Role::Primary), Argb(0xff5d5d6c));
        assert_eq!(theme.variant(), Variant::Neutral);
    }

    #[test]
    fn test_global_theme() {
        let _guard = GLOBAL_LOCK.lock().unwrap();
        let initial = global_theme();
        assert_eq!(initial.source(), DEFAULT_SEED);

        let options = ThemeOptionsBuilder::default().is_dark(true).build().unwrap();
        let applied = apply_global(Argb(0xff4285f4), &options).unwrap();
        assert_eq!(global_theme(), applied);
        assert!(global_theme().is_dark());

        set_global_theme(initial.clone());
        assert_eq!(global_theme(), initial);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let theme = ResolvedTheme::from_seed(Argb(0xff4285f4), Variant::Expressive, true, 0.0);
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"primary\":\"#ff9bd595\""));
        assert!(json.contains("\"variant\":\"expressive\""));
        let back: ResolvedTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_unknown_role() {
        let theme = ResolvedTheme::default();
        let mut value = serde_json::to_value(&theme).unwrap();
        value["colors"]["primary_fixed"] = serde_json::json!("#ff000000");
        let err = serde_json::from_value::<ResolvedTheme>(value).unwrap_err();
        assert!(err.to_string().contains("primary_fixed"));
    }
}
