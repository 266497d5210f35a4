//! Detection and repair of widely disliked colors.
//!
//! Dark yellow-greens ("bile" colors) test poorly across cultures. Schemes
//! that derive a tertiary color from the seed run it through
//! [`fix_if_disliked`] before building a palette from it.

use crate::Hct;

/// Returns `true` for dark, chromatic yellow-greens.
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lightens a disliked color to tone 70; other colors are returned as is.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::new(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}
