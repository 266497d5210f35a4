//! The Material color roles and their definitions.
//!
//! Each [`Role`] maps to one `'static` [`DynamicColor`]. Most roles use a
//! fixed tone per brightness; source-faithful variants replace the
//! container tones with ones derived from the seed color.

use std::fmt;

use crate::{
    DynamicScheme, Hct,
    contrast::RATIO_45,
    dislike,
    dynamic_color::{
        DynamicColor, PaletteRole, ToneDeltaConstraint, TonePolarity, contrasting_tone,
        enable_light_foreground, tone_allows_light_foreground, tone_prefers_light_foreground,
    },
    hct::ViewingConditions,
};

use PaletteRole::{Error, Neutral, NeutralVariant, Primary, Secondary, Tertiary};

/// A named color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// App background.
    Background,
    /// Content on [`Role::Background`].
    OnBackground,
    /// Default surface.
    Surface,
    /// Dimmest surface.
    SurfaceDim,
    /// Brightest surface.
    SurfaceBright,
    /// Lowest-emphasis container surface.
    SurfaceContainerLowest,
    /// Low-emphasis container surface.
    SurfaceContainerLow,
    /// Default container surface.
    SurfaceContainer,
    /// High-emphasis container surface.
    SurfaceContainerHigh,
    /// Highest-emphasis container surface.
    SurfaceContainerHighest,
    /// Text and icons on surfaces.
    OnSurface,
    /// Alternate surface.
    SurfaceVariant,
    /// Content on [`Role::SurfaceVariant`].
    OnSurfaceVariant,
    /// Surface with inverted brightness, e.g. snackbars.
    InverseSurface,
    /// Content on [`Role::InverseSurface`].
    InverseOnSurface,
    /// Borders and dividers that need contrast.
    Outline,
    /// Decorative borders and dividers.
    OutlineVariant,
    /// Elevation shadows.
    Shadow,
    /// Modal scrims.
    Scrim,
    /// Elevation tint over surfaces.
    SurfaceTint,
    /// Primary accent.
    Primary,
    /// Content on [`Role::Primary`].
    OnPrimary,
    /// Container in the primary palette.
    PrimaryContainer,
    /// Content on [`Role::PrimaryContainer`].
    OnPrimaryContainer,
    /// Primary accent on [`Role::InverseSurface`].
    InversePrimary,
    /// Secondary accent.
    Secondary,
    /// Content on [`Role::Secondary`].
    OnSecondary,
    /// Container in the secondary palette.
    SecondaryContainer,
    /// Content on [`Role::SecondaryContainer`].
    OnSecondaryContainer,
    /// Tertiary accent.
    Tertiary,
    /// Content on [`Role::Tertiary`].
    OnTertiary,
    /// Container in the tertiary palette.
    TertiaryContainer,
    /// Content on [`Role::TertiaryContainer`].
    OnTertiaryContainer,
    /// Error accent.
    Error,
    /// Content on [`Role::Error`].
    OnError,
    /// Container in the error palette.
    ErrorContainer,
    /// Content on [`Role::ErrorContainer`].
    OnErrorContainer,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 37;

    /// Every role, in declaration order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::SurfaceTint,
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::InversePrimary,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
    ];

    /// The definition of this role.
    #[inline]
    pub fn definition(self) -> &'static DynamicColor {
        &DEFINITIONS[self as usize]
    }

    /// Snake-case name, e.g. `on_primary_container`.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Looks a role up by its snake-case name.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Index of this role in [`Role::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn light_dark(scheme: &DynamicScheme, light: f64, dark: f64) -> f64 {
    if scheme.is_dark() { dark } else { light }
}

/// The surface with the most contrast against light or dark foregrounds.
fn highest_surface(scheme: &DynamicScheme) -> Role {
    if scheme.is_dark() {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    }
}

/// Viewing conditions of a color sitting on the scheme's surfaces.
fn surface_viewing_conditions(scheme: &DynamicScheme) -> ViewingConditions {
    ViewingConditions::with_background_lstar(if scheme.is_dark() { 30.0 } else { 80.0 })
}

/// Tone a color appears to have on the scheme's surfaces, kept usable as
/// a background for light foregrounds when the original tone was.
fn perceived_tone(prealbers: &Hct, scheme: &DynamicScheme) -> f64 {
    let albers = prealbers.in_viewing_conditions(&surface_viewing_conditions(scheme));
    if tone_prefers_light_foreground(prealbers.tone())
        && !tone_allows_light_foreground(albers.tone())
    {
        enable_light_foreground(prealbers.tone())
    } else {
        enable_light_foreground(albers.tone())
    }
}

/// Steps the tone one unit at a time toward the side where the palette
/// reaches `chroma`, stopping once chroma stops improving.
fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest = Hct::new(hue, chroma, tone);
    if closest.chroma() < chroma {
        let mut chroma_peak = closest.chroma();
        while closest.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let potential = Hct::new(hue, chroma, answer);
            if chroma_peak > potential.chroma() {
                break;
            }
            if (potential.chroma() - chroma).abs() < 0.4 {
                break;
            }
            let potential_delta = (potential.chroma() - chroma).abs();
            let current_delta = (closest.chroma() - chroma).abs();
            if potential_delta < current_delta {
                closest = potential;
            }
            chroma_peak = chroma_peak.max(potential.chroma());
        }
    }
    answer
}

fn accent_tone(scheme: &DynamicScheme) -> f64 {
    light_dark(scheme, 40.0, 80.0)
}

fn accent_constraint(scheme: &DynamicScheme, container: Role) -> ToneDeltaConstraint {
    ToneDeltaConstraint {
        delta: 15.0,
        keep_away: container,
        polarity: if scheme.is_dark() {
            TonePolarity::Darker
        } else {
            TonePolarity::Lighter
        },
    }
}

fn primary_container_tone(scheme: &DynamicScheme) -> f64 {
    if !scheme.is_source_faithful() {
        return light_dark(scheme, 90.0, 30.0);
    }
    perceived_tone(&scheme.source_color_hct(), scheme)
}

fn secondary_container_tone(scheme: &DynamicScheme) -> f64 {
    let initial_tone = light_dark(scheme, 90.0, 30.0);
    if !scheme.is_source_faithful() {
        return initial_tone;
    }
    let palette = scheme.secondary_palette();
    let tone = find_desired_chroma_by_tone(
        palette.hue(),
        palette.chroma(),
        initial_tone,
        !scheme.is_dark(),
    );
    perceived_tone(&palette.hct(tone), scheme)
}

fn tertiary_container_tone(scheme: &DynamicScheme) -> f64 {
    if !scheme.is_source_faithful() {
        return light_dark(scheme, 90.0, 30.0);
    }
    let palette = scheme.tertiary_palette();
    let albers_tone = perceived_tone(&palette.hct(scheme.source_color_hct().tone()), scheme);
    dislike::fix_if_disliked(palette.hct(albers_tone)).tone()
}

fn on_container_tone(scheme: &DynamicScheme, container: Role) -> f64 {
    if !scheme.is_source_faithful() {
        return light_dark(scheme, 10.0, 90.0);
    }
    contrasting_tone(container.definition().get_tone(scheme), RATIO_45)
}

const fn fixed(
    role: Role,
    name: &'static str,
    palette: PaletteRole,
    tone: fn(&DynamicScheme) -> f64,
) -> DynamicColor {
    DynamicColor {
        name,
        role,
        palette,
        tone,
        background: None,
        tone_delta_constraint: None,
    }
}

const fn on(
    role: Role,
    name: &'static str,
    palette: PaletteRole,
    tone: fn(&DynamicScheme) -> f64,
    background: fn(&DynamicScheme) -> Role,
) -> DynamicColor {
    DynamicColor {
        name,
        role,
        palette,
        tone,
        background: Some(background),
        tone_delta_constraint: None,
    }
}

const fn accent(
    role: Role,
    name: &'static str,
    palette: PaletteRole,
    constraint: fn(&DynamicScheme) -> ToneDeltaConstraint,
) -> DynamicColor {
    DynamicColor {
        name,
        role,
        palette,
        tone: accent_tone,
        background: Some(highest_surface),
        tone_delta_constraint: Some(constraint),
    }
}

static DEFINITIONS: [DynamicColor; Role::COUNT] = [
    fixed(Role::Background, "background", Neutral, |s| {
        light_dark(s, 98.0, 6.0)
    }),
    on(
        Role::OnBackground,
        "on_background",
        Neutral,
        |s| light_dark(s, 10.0, 90.0),
        |_| Role::Background,
    ),
    fixed(Role::Surface, "surface", Neutral, |s| light_dark(s, 98.0, 6.0)),
    fixed(Role::SurfaceDim, "surface_dim", Neutral, |s| {
        light_dark(s, 87.0, 6.0)
    }),
    fixed(Role::SurfaceBright, "surface_bright", Neutral, |s| {
        light_dark(s, 98.0, 24.0)
    }),
    fixed(
        Role::SurfaceContainerLowest,
        "surface_container_lowest",
        Neutral,
        |s| light_dark(s, 100.0, 4.0),
    ),
    fixed(
        Role::SurfaceContainerLow,
        "surface_container_low",
        Neutral,
        |s| light_dark(s, 96.0, 10.0),
    ),
    fixed(Role::SurfaceContainer, "surface_container", Neutral, |s| {
        light_dark(s, 94.0, 12.0)
    }),
    fixed(
        Role::SurfaceContainerHigh,
        "surface_container_high",
        Neutral,
        |s| light_dark(s, 92.0, 17.0),
    ),
    fixed(
        Role::SurfaceContainerHighest,
        "surface_container_highest",
        Neutral,
        |s| light_dark(s, 90.0, 22.0),
    ),
    on(
        Role::OnSurface,
        "on_surface",
        Neutral,
        |s| light_dark(s, 10.0, 90.0),
        highest_surface,
    ),
    fixed(Role::SurfaceVariant, "surface_variant", NeutralVariant, |s| {
        light_dark(s, 90.0, 30.0)
    }),
    on(
        Role::OnSurfaceVariant,
        "on_surface_variant",
        NeutralVariant,
        |s| light_dark(s, 30.0, 80.0),
        |_| Role::SurfaceVariant,
    ),
    fixed(Role::InverseSurface, "inverse_surface", Neutral, |s| {
        light_dark(s, 20.0, 90.0)
    }),
    on(
        Role::InverseOnSurface,
        "inverse_on_surface",
        Neutral,
        |s| light_dark(s, 95.0, 20.0),
        |_| Role::InverseSurface,
    ),
    on(
        Role::Outline,
        "outline",
        NeutralVariant,
        |s| light_dark(s, 50.0, 60.0),
        highest_surface,
    ),
    on(
        Role::OutlineVariant,
        "outline_variant",
        NeutralVariant,
        |s| light_dark(s, 80.0, 30.0),
        highest_surface,
    ),
    fixed(Role::Shadow, "shadow", Neutral, |_| 0.0),
    fixed(Role::Scrim, "scrim", Neutral, |_| 0.0),
    fixed(Role::SurfaceTint, "surface_tint", Primary, |s| {
        light_dark(s, 40.0, 80.0)
    }),
    // Primary
    accent(Role::Primary, "primary", Primary, |s| {
        accent_constraint(s, Role::PrimaryContainer)
    }),
    on(
        Role::OnPrimary,
        "on_primary",
        Primary,
        |s| light_dark(s, 100.0, 20.0),
        |_| Role::Primary,
    ),
    on(
        Role::PrimaryContainer,
        "primary_container",
        Primary,
        primary_container_tone,
        highest_surface,
    ),
    on(
        Role::OnPrimaryContainer,
        "on_primary_container",
        Primary,
        |s| on_container_tone(s, Role::PrimaryContainer),
        |_| Role::PrimaryContainer,
    ),
    on(
        Role::InversePrimary,
        "inverse_primary",
        Primary,
        |s| light_dark(s, 80.0, 40.0),
        |_| Role::InverseSurface,
    ),
    // Secondary
    accent(Role::Secondary, "secondary", Secondary, |s| {
        accent_constraint(s, Role::SecondaryContainer)
    }),
    on(
        Role::OnSecondary,
        "on_secondary",
        Secondary,
        |s| light_dark(s, 100.0, 20.0),
        |_| Role::Secondary,
    ),
    on(
        Role::SecondaryContainer,
        "secondary_container",
        Secondary,
        secondary_container_tone,
        highest_surface,
    ),
    on(
        Role::OnSecondaryContainer,
        "on_secondary_container",
        Secondary,
        |s| on_container_tone(s, Role::SecondaryContainer),
        |_| Role::SecondaryContainer,
    ),
    // Tertiary
    accent(Role::Tertiary, "tertiary", Tertiary, |s| {
        accent_constraint(s, Role::TertiaryContainer)
    }),
    on(
        Role::OnTertiary,
        "on_tertiary",
        Tertiary,
        |s| light_dark(s, 100.0, 20.0),
        |_| Role::Tertiary,
    ),
    on(
        Role::TertiaryContainer,
        "tertiary_container",
        Tertiary,
        tertiary_container_tone,
        highest_surface,
    ),
    on(
        Role::OnTertiaryContainer,
        "on_tertiary_container",
        Tertiary,
        |s| on_container_tone(s, Role::TertiaryContainer),
        |_| Role::TertiaryContainer,
    ),
    // Error
    accent(Role::Error, "error", Error, |s| {
        accent_constraint(s, Role::ErrorContainer)
    }),
    on(
        Role::OnError,
        "on_error",
        Error,
        |s| light_dark(s, 100.0, 20.0),
        |_| Role::Error,
    ),
    on(
        Role::ErrorContainer,
        "error_container",
        Error,
        |s| light_dark(s, 90.0, 30.0),
        highest_surface,
    ),
    on(
        Role::OnErrorContainer,
        "on_error_container",
        Error,
        |s| light_dark(s, 10.0, 90.0),
        |_| Role::ErrorContainer,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Argb, Variant,
        contrast::{RATIO_70, RATIO_MAX, ratio_of_tones},
    };

    #[test]
    fn test_table_matches_enum() {
        for (index, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), index);
            assert_eq!(role.definition().role, role);
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("primary_fixed"), None);
        assert_eq!(Role::OnPrimaryContainer.to_string(), "on_primary_container");
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Role::COUNT);
    }

    #[test]
    fn test_desired_chroma_search_moves_toward_chroma() {
        // Yellow reaches high chroma only at light tones.
        let tone = find_desired_chroma_by_tone(100.0, 80.0, 30.0, false);
        assert!(tone > 30.0);
        // Chroma that is already reachable keeps the tone.
        assert_eq!(find_desired_chroma_by_tone(100.0, 5.0, 30.0, false), 30.0);
    }

    type Fixture = (bool, f64, Role, u32);

    fn check_fixtures(variant: Variant, fixtures: &[Fixture]) {
        for &(is_dark, contrast_level, role, expected) in fixtures {
            let scheme =
                DynamicScheme::from_argb(Argb(0xff0000ff), variant, is_dark, contrast_level);
            assert_eq!(
                scheme.get_argb(role),
                Argb(expected),
                "{variant:?} {role} dark={is_dark} contrast={contrast_level}"
            );
        }
    }

    #[test]
    fn test_neutral_blue() {
        check_fixtures(
            Variant::Neutral,
            &[
                (false, -1.0, Role::Primary, 0xff737383),
                (false, 0.0, Role::Primary, 0xff5d5d6c),
                (false, 1.0, Role::Primary, 0xff21212e),
                (false, -1.0, Role::PrimaryContainer, 0xffe2e1f3),
                (false, 0.0, Role::PrimaryContainer, 0xffe2e1f3),
                (false, 1.0, Role::PrimaryContainer, 0xff414250),
                (false, -1.0, Role::OnPrimaryContainer, 0xff636372),
                (false, 0.0, Role::OnPrimaryContainer, 0xff1a1b27),
                (false, 1.0, Role::OnPrimaryContainer, 0xffd9d8ea),
                (false, -1.0, Role::Surface, 0xfffcf8fa),
                (false, 0.0, Role::Surface, 0xfffcf8fa),
                (false, 1.0, Role::Surface, 0xfffcf8fa),
                (true, -1.0, Role::Primary, 0xff737383),
                (true, 0.0, Role::Primary, 0xffc6c5d6),
                (true, 1.0, Role::Primary, 0xfff6f4ff),
                (true, -1.0, Role::PrimaryContainer, 0xff454654),
                (true, 0.0, Role::PrimaryContainer, 0xff454654),
                (true, 1.0, Role::PrimaryContainer, 0xffcac9da),
                (true, -1.0, Role::OnPrimaryContainer, 0xffb5b3c4),
                (true, 0.0, Role::OnPrimaryContainer, 0xffe2e1f3),
                (true, 1.0, Role::OnPrimaryContainer, 0xff373846),
                (true, -1.0, Role::OnTertiaryContainer, 0xffb3b3cb),
                (true, 0.0, Role::OnTertiaryContainer, 0xffe1e0f9),
                (true, 1.0, Role::OnTertiaryContainer, 0xff37374b),
                (true, -1.0, Role::Surface, 0xff131315),
                (true, 0.0, Role::Surface, 0xff131315),
                (true, 1.0, Role::Surface, 0xff131315),
            ],
        );
    }

    #[test]
    fn test_vibrant_blue() {
        check_fixtures(
            Variant::Vibrant,
            &[
                (false, -1.0, Role::Primary, 0xff5660ff),
                (false, 0.0, Role::Primary, 0xff343dff),
                (false, 1.0, Role::Primary, 0xff000181),
                (false, -1.0, Role::PrimaryContainer, 0xffe0e0ff),
                (false, 0.0, Role::PrimaryContainer, 0xffe0e0ff),
                (false, 1.0, Role::PrimaryContainer, 0xff0000e3),
                (false, -1.0, Role::OnPrimaryContainer, 0xff3e47ff),
                (false, 0.0, Role::OnPrimaryContainer, 0xff00006e),
                (false, 1.0, Role::OnPrimaryContainer, 0xffd6d6ff),
                (false, -1.0, Role::Surface, 0xfffbf8ff),
                (false, 0.0, Role::Surface, 0xfffbf8ff),
                (false, 1.0, Role::Surface, 0xfffbf8ff),
                (true, -1.0, Role::Primary, 0xff5660ff),
                (true, 0.0, Role::Primary, 0xffbec2ff),
                (true, 1.0, Role::Primary, 0xfff6f4ff),
                (true, -1.0, Role::PrimaryContainer, 0xff0000ef),
                (true, 0.0, Role::PrimaryContainer, 0xff0000ef),
                (true, 1.0, Role::PrimaryContainer, 0xffc4c6ff),
                (true, -1.0, Role::OnPrimaryContainer, 0xffa9afff),
                (true, 0.0, Role::OnPrimaryContainer, 0xffe0e0ff),
                (true, 1.0, Role::OnPrimaryContainer, 0xff0001c6),
                (true, -1.0, Role::OnTertiaryContainer, 0xffc9a9df),
                (true, 0.0, Role::OnTertiaryContainer, 0xfff2daff),
                (true, 1.0, Role::OnTertiaryContainer, 0xff472e5b),
                (true, -1.0, Role::Surface, 0xff12131a),
                (true, 0.0, Role::Surface, 0xff12131a),
                (true, 1.0, Role::Surface, 0xff12131a),
            ],
        );
    }

    #[test]
    fn test_variants_for_google_blue() {
        const ROLES: [Role; 6] = [
            Role::Primary,
            Role::OnPrimary,
            Role::PrimaryContainer,
            Role::OnPrimaryContainer,
            Role::TertiaryContainer,
            Role::Surface,
        ];
        let cases: [(Variant, bool, [u32; 6]); 10] = [
            (
                Variant::TonalSpot,
                false,
                [0xff445e91, 0xffffffff, 0xffd8e2ff, 0xff001a41, 0xfffbd7fc, 0xfff9f9ff],
            ),
            (
                Variant::TonalSpot,
                true,
                [0xffadc6ff, 0xff102f60, 0xff2b4678, 0xffd8e2ff, 0xff583e5b, 0xff111318],
            ),
            (
                Variant::Monochrome,
                false,
                [0xff5e5e5e, 0xffffffff, 0xffe2e2e2, 0xff1b1b1b, 0xffe2e2e2, 0xfff9f9f9],
            ),
            (
                Variant::Monochrome,
                true,
                [0xffc6c6c6, 0xff303030, 0xff474747, 0xffe2e2e2, 0xff474747, 0xff131313],
            ),
            (
                Variant::Fidelity,
                false,
                [0xff004da6, 0xffeef1ff, 0xff2771df, 0xfffefcff, 0xffb35e00, 0xfff9f9ff],
            ),
            (
                Variant::Fidelity,
                true,
                [0xffadc6ff, 0xff002e69, 0xff2771df, 0xfffefcff, 0xffb35e00, 0xff11131a],
            ),
            (
                Variant::Content,
                false,
                [0xff004da6, 0xffeef1ff, 0xff2771df, 0xfffefcff, 0xffa751bc, 0xfff9f9ff],
            ),
            (
                Variant::Content,
                true,
                [0xffadc6ff, 0xff002e69, 0xff2771df, 0xfffefcff, 0xffa751bc, 0xff11131a],
            ),
            (
                Variant::Expressive,
                false,
                [0xff356a35, 0xffffffff, 0xffb6f2af, 0xff002204, 0xffdfe0ff, 0xfffbf8ff],
            ),
            (
                Variant::Expressive,
                true,
                [0xff9bd595, 0xff00390a, 0xff1c511f, 0xffb6f2af, 0xff3e4372, 0xff12131a],
            ),
        ];
        for (variant, is_dark, expected) in cases {
            let scheme = DynamicScheme::from_argb(Argb(0xff4285f4), variant, is_dark, 0.0);
            for (role, argb) in ROLES.into_iter().zip(expected) {
                assert_eq!(
                    scheme.get_argb(role),
                    Argb(argb),
                    "{variant:?} {role} dark={is_dark}"
                );
            }
        }
    }

    const SEEDS: [u32; 5] = [0xff0000ff, 0xff4285f4, 0xffff0000, 0xff00ff00, 0xffffff00];

    fn background_ratio(scheme: &DynamicScheme, role: Role) -> Option<f64> {
        let background = role.definition().background(scheme)?;
        Some(ratio_of_tones(scheme.tone(role), scheme.tone(background.role)))
    }

    #[test]
    fn test_high_contrast_reaches_seven() {
        for seed in SEEDS {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    let scheme = DynamicScheme::from_argb(Argb(seed), variant, is_dark, 1.0);
                    for role in Role::ALL {
                        if let Some(ratio) = background_ratio(&scheme, role) {
                            assert!(ratio >= RATIO_70 - 0.04, "{variant:?} {role} {ratio}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_foregrounds_reach_standard_contrast() {
        for seed in SEEDS {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    let scheme = DynamicScheme::from_argb(Argb(seed), variant, is_dark, 0.0);
                    for role in Role::ALL.into_iter().filter(|r| r.name().starts_with("on_")) {
                        let ratio = background_ratio(&scheme, role).unwrap_or(RATIO_MAX);
                        assert!(ratio >= RATIO_45 - 0.04, "{variant:?} {role} {ratio}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_container_snaps_to_light_foreground_band() {
        // At level 0.5 the primary container lands on 49 and white is the
        // best foreground it can host, short of the 7:1 target.
        for variant in [Variant::Neutral, Variant::TonalSpot, Variant::Monochrome] {
            let scheme = DynamicScheme::from_argb(Argb(0xff0000ff), variant, false, 0.5);
            assert_eq!(scheme.tone(Role::PrimaryContainer), 49.0);
            assert!((scheme.tone(Role::OnPrimaryContainer) - 100.0).abs() < 1e-6);
            let ratio = background_ratio(&scheme, Role::OnPrimaryContainer).unwrap_or(RATIO_MAX);
            assert!(ratio > 4.6 && ratio < RATIO_70, "{variant:?} {ratio}");
        }
    }

    #[test]
    fn test_contrast_grows_with_level_on_surfaces() {
        const ROLES: [Role; 13] = [
            Role::OnBackground,
            Role::OnSurface,
            Role::OnSurfaceVariant,
            Role::InverseOnSurface,
            Role::InversePrimary,
            Role::Outline,
            Role::OutlineVariant,
            Role::PrimaryContainer,
            Role::Secondary,
            Role::SecondaryContainer,
            Role::TertiaryContainer,
            Role::Error,
            Role::ErrorContainer,
        ];
        for seed in SEEDS {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    let schemes: Vec<DynamicScheme> = [-1.0, -0.5, 0.0, 0.5, 1.0]
                        .into_iter()
                        .map(|level| DynamicScheme::from_argb(Argb(seed), variant, is_dark, level))
                        .collect();
                    for role in ROLES {
                        let ratios: Vec<f64> = schemes
                            .iter()
                            .filter_map(|scheme| background_ratio(scheme, role))
                            .collect();
                        assert!(
                            ratios.windows(2).all(|w| w[1] >= w[0] - 1e-9),
                            "{variant:?} {role} dark={is_dark} {ratios:?}"
                        );
                    }
                }
            }
        }
    }
}
