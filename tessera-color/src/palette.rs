//! Tonal palettes: one hue and chroma, every tone.

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{Argb, Hct};

/// A hue and chroma pair that can be evaluated at any tone.
///
/// Integral tones are memoized, so repeated lookups of the same tone only
/// run the HCT solver once. The cache is safe to share between threads.
///
/// ```
/// use tessera_color::{Argb, TonalPalette};
///
/// let palette = TonalPalette::from_hue_and_chroma(270.0, 36.0);
/// assert_eq!(palette.tone(100), Argb::WHITE);
/// assert_eq!(palette.tone(0), Argb::BLACK);
/// ```
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    cache: RwLock<FxHashMap<u8, Argb>>,
}

impl TonalPalette {
    /// A palette with the given hue (degrees) and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            cache: RwLock::new(FxHashMap::default()),
        }
    }

    /// A palette sharing the hue and chroma of `argb`.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(&Hct::from_argb(argb))
    }

    /// A palette sharing the hue and chroma of `hct`.
    pub fn from_hct(hct: &Hct) -> Self {
        Self::from_hue_and_chroma(hct.hue(), hct.chroma())
    }

    /// Hue of the palette in degrees.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Requested chroma of the palette. Individual tones may achieve less.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The palette color at an integral tone. Tones above 100 are clamped.
    pub fn tone(&self, tone: u8) -> Argb {
        let tone = tone.min(100);
        if let Some(argb) = self.cache.read().get(&tone) {
            return *argb;
        }
        let argb = self.hct(f64::from(tone)).to_argb();
        self.cache.write().insert(tone, argb);
        argb
    }

    /// The palette color at a fractional tone, not memoized.
    pub fn hct(&self, tone: f64) -> Hct {
        Hct::new(self.hue, self.chroma, tone)
    }
}

impl Clone for TonalPalette {
    fn clone(&self) -> Self {
        Self {
            hue: self.hue,
            chroma: self.chroma,
            cache: RwLock::new(self.cache.read().clone()),
        }
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.chroma == other.chroma
    }
}

impl fmt::Debug for TonalPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TonalPalette")
            .field("hue", &self.hue)
            .field("chroma", &self.chroma)
            .finish_non_exhaustive()
    }
}
