//! Scheme variants and the palette policy behind each one.

use crate::{Hct, TonalPalette, dislike, temperature::TemperatureCache, utils};

/// Hue boundaries used by [`Variant::Vibrant`] rotations.
const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] = [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

/// Hue boundaries used by [`Variant::Expressive`] rotations.
const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// The style of a dynamic scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// All grays.
    Monochrome,
    /// Close to grayscale, a hint of the seed.
    Neutral,
    /// Calm, medium chroma; the default Material look.
    #[default]
    TonalSpot,
    /// Maximum chroma primary, hue-rotated accents.
    Vibrant,
    /// Playful: the primary is rotated away from the seed.
    Expressive,
    /// Keeps the seed's own chroma, with a temperature-complement tertiary.
    Fidelity,
    /// Keeps the seed's own chroma, with an analogous tertiary.
    Content,
    /// Colorful accents over gray surfaces.
    Rainbow,
    /// Accents rotated away from the seed.
    FruitSalad,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 9] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    /// The palette policy of this variant.
    pub fn policy(self) -> &'static VariantPolicy {
        match self {
            Variant::Monochrome => &MONOCHROME,
            Variant::Neutral => &NEUTRAL,
            Variant::TonalSpot => &TONAL_SPOT,
            Variant::Vibrant => &VIBRANT,
            Variant::Expressive => &EXPRESSIVE,
            Variant::Fidelity => &FIDELITY,
            Variant::Content => &CONTENT,
            Variant::Rainbow => &RAINBOW,
            Variant::FruitSalad => &FRUIT_SALAD,
        }
    }

    /// Whether container roles follow the seed's own tone instead of fixed
    /// tones.
    pub fn is_source_faithful(self) -> bool {
        self.policy().source_faithful
    }
}

/// How a palette's hue is derived from the source hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HueRule {
    /// The source hue.
    Source,
    /// The source hue rotated by a fixed number of degrees.
    Rotate(f64),
    /// A rotation chosen by which segment of the hue wheel the source falls
    /// in. A source hue exactly on a boundary is not rotated.
    Segmented {
        /// Ascending segment boundaries, from 0 to 360.
        hues: &'static [f64],
        /// Rotation for each segment.
        rotations: &'static [f64],
    },
}

impl HueRule {
    /// The hue this rule produces for `source_hue`.
    pub fn apply(&self, source_hue: f64) -> f64 {
        match *self {
            HueRule::Source => source_hue,
            HueRule::Rotate(degrees) => utils::sanitize_degrees(source_hue + degrees),
            HueRule::Segmented { hues, rotations } => {
                if rotations.len() == 1 {
                    return utils::sanitize_degrees(source_hue + rotations[0]);
                }
                hues.windows(2)
                    .zip(rotations)
                    .find(|(bounds, _)| bounds[0] < source_hue && source_hue < bounds[1])
                    .map_or(source_hue, |(_, rotation)| {
                        utils::sanitize_degrees(source_hue + rotation)
                    })
            }
        }
    }
}

/// How a palette's chroma is derived from the source chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromaRule {
    /// A fixed chroma.
    Fixed(f64),
    /// `source * factor + offset`.
    Scaled {
        /// Multiplier on the source chroma.
        factor: f64,
        /// Added after scaling.
        offset: f64,
    },
    /// `max(source - minus, source * factor)`.
    Reduced {
        /// Subtracted from the source chroma.
        minus: f64,
        /// Lower bound as a fraction of the source chroma.
        factor: f64,
    },
}

impl ChromaRule {
    /// The source chroma unchanged.
    pub const SOURCE: ChromaRule = ChromaRule::Scaled {
        factor: 1.0,
        offset: 0.0,
    };

    /// The chroma this rule produces for `source_chroma`.
    pub fn apply(&self, source_chroma: f64) -> f64 {
        match *self {
            ChromaRule::Fixed(chroma) => chroma,
            ChromaRule::Scaled { factor, offset } => source_chroma * factor + offset,
            ChromaRule::Reduced { minus, factor } => {
                (source_chroma - minus).max(source_chroma * factor)
            }
        }
    }
}

/// How one of the five seed-derived palettes is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteRule {
    /// Independent hue and chroma rules.
    Tonal {
        /// Hue rule.
        hue: HueRule,
        /// Chroma rule.
        chroma: ChromaRule,
    },
    /// Hue and chroma of the source's temperature complement, with disliked
    /// colors repaired.
    TemperatureComplement,
    /// Hue and chroma of the third of three analogous colors (six
    /// divisions), with disliked colors repaired.
    Analogous,
}

impl PaletteRule {
    const fn tonal(hue: HueRule, chroma: f64) -> Self {
        PaletteRule::Tonal {
            hue,
            chroma: ChromaRule::Fixed(chroma),
        }
    }

    /// Builds the palette for a source color.
    pub fn palette(&self, source: &Hct) -> TonalPalette {
        match self {
            PaletteRule::Tonal { hue, chroma } => TonalPalette::from_hue_and_chroma(
                hue.apply(source.hue()),
                chroma.apply(source.chroma()),
            ),
            PaletteRule::TemperatureComplement => {
                let complement = TemperatureCache::new(*source).complement();
                TonalPalette::from_hct(&dislike::fix_if_disliked(complement))
            }
            PaletteRule::Analogous => {
                let analogous = TemperatureCache::new(*source).analogous(3, 6);
                let third = analogous.get(2).copied().unwrap_or(*source);
                TonalPalette::from_hct(&dislike::fix_if_disliked(third))
            }
        }
    }
}

/// The palette rules of one [`Variant`].
///
/// The error palette is not part of the policy; it is always hue 25,
/// chroma 84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantPolicy {
    /// Primary palette.
    pub primary: PaletteRule,
    /// Secondary palette.
    pub secondary: PaletteRule,
    /// Tertiary palette.
    pub tertiary: PaletteRule,
    /// Neutral palette, used by surfaces.
    pub neutral: PaletteRule,
    /// Neutral variant palette, used by outlines and variant surfaces.
    pub neutral_variant: PaletteRule,
    /// Container roles track the source tone.
    pub source_faithful: bool,
}

static MONOCHROME: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Source, 0.0),
    secondary: PaletteRule::tonal(HueRule::Source, 0.0),
    tertiary: PaletteRule::tonal(HueRule::Source, 0.0),
    neutral: PaletteRule::tonal(HueRule::Source, 0.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 0.0),
    source_faithful: false,
};

static NEUTRAL: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Source, 12.0),
    secondary: PaletteRule::tonal(HueRule::Source, 8.0),
    tertiary: PaletteRule::tonal(HueRule::Source, 16.0),
    neutral: PaletteRule::tonal(HueRule::Source, 2.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 2.0),
    source_faithful: false,
};

static TONAL_SPOT: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Source, 36.0),
    secondary: PaletteRule::tonal(HueRule::Source, 16.0),
    tertiary: PaletteRule::tonal(HueRule::Rotate(60.0), 24.0),
    neutral: PaletteRule::tonal(HueRule::Source, 6.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 8.0),
    source_faithful: false,
};

static VIBRANT: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Source, 200.0),
    secondary: PaletteRule::tonal(
        HueRule::Segmented {
            hues: &VIBRANT_HUES,
            rotations: &VIBRANT_SECONDARY_ROTATIONS,
        },
        24.0,
    ),
    tertiary: PaletteRule::tonal(
        HueRule::Segmented {
            hues: &VIBRANT_HUES,
            rotations: &VIBRANT_TERTIARY_ROTATIONS,
        },
        32.0,
    ),
    neutral: PaletteRule::tonal(HueRule::Source, 8.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 12.0),
    source_faithful: false,
};

static EXPRESSIVE: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Rotate(240.0), 40.0),
    secondary: PaletteRule::tonal(
        HueRule::Segmented {
            hues: &EXPRESSIVE_HUES,
            rotations: &EXPRESSIVE_SECONDARY_ROTATIONS,
        },
        24.0,
    ),
    tertiary: PaletteRule::tonal(
        HueRule::Segmented {
            hues: &EXPRESSIVE_HUES,
            rotations: &EXPRESSIVE_TERTIARY_ROTATIONS,
        },
        32.0,
    ),
    neutral: PaletteRule::tonal(HueRule::Rotate(15.0), 8.0),
    neutral_variant: PaletteRule::tonal(HueRule::Rotate(15.0), 12.0),
    source_faithful: false,
};

const SOURCE_FAITHFUL_SECONDARY: PaletteRule = PaletteRule::Tonal {
    hue: HueRule::Source,
    chroma: ChromaRule::Reduced {
        minus: 32.0,
        factor: 0.5,
    },
};

const SOURCE_FAITHFUL_NEUTRAL: PaletteRule = PaletteRule::Tonal {
    hue: HueRule::Source,
    chroma: ChromaRule::Scaled {
        factor: 1.0 / 8.0,
        offset: 0.0,
    },
};

const SOURCE_FAITHFUL_NEUTRAL_VARIANT: PaletteRule = PaletteRule::Tonal {
    hue: HueRule::Source,
    chroma: ChromaRule::Scaled {
        factor: 1.0 / 8.0,
        offset: 4.0,
    },
};

static FIDELITY: VariantPolicy = VariantPolicy {
    primary: PaletteRule::Tonal {
        hue: HueRule::Source,
        chroma: ChromaRule::SOURCE,
    },
    secondary: SOURCE_FAITHFUL_SECONDARY,
    tertiary: PaletteRule::TemperatureComplement,
    neutral: SOURCE_FAITHFUL_NEUTRAL,
    neutral_variant: SOURCE_FAITHFUL_NEUTRAL_VARIANT,
    source_faithful: true,
};

static CONTENT: VariantPolicy = VariantPolicy {
    primary: PaletteRule::Tonal {
        hue: HueRule::Source,
        chroma: ChromaRule::SOURCE,
    },
    secondary: SOURCE_FAITHFUL_SECONDARY,
    tertiary: PaletteRule::Analogous,
    neutral: SOURCE_FAITHFUL_NEUTRAL,
    neutral_variant: SOURCE_FAITHFUL_NEUTRAL_VARIANT,
    source_faithful: true,
};

static RAINBOW: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Source, 48.0),
    secondary: PaletteRule::tonal(HueRule::Source, 16.0),
    tertiary: PaletteRule::tonal(HueRule::Rotate(60.0), 24.0),
    neutral: PaletteRule::tonal(HueRule::Source, 0.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 0.0),
    source_faithful: false,
};

static FRUIT_SALAD: VariantPolicy = VariantPolicy {
    primary: PaletteRule::tonal(HueRule::Rotate(-50.0), 48.0),
    secondary: PaletteRule::tonal(HueRule::Rotate(-50.0), 36.0),
    tertiary: PaletteRule::tonal(HueRule::Source, 36.0),
    neutral: PaletteRule::tonal(HueRule::Source, 10.0),
    neutral_variant: PaletteRule::tonal(HueRule::Source, 16.0),
    source_faithful: false,
};
