//! HCT: hue, chroma and tone.
//!
//! HCT pairs CAM16 hue and chroma with CIE L* as tone. Tone differences map
//! directly to contrast ratios, which is what lets schemes reason about
//! legibility in terms of tone alone.
//!
//! ```
//! use tessera_color::{Argb, Hct};
//!
//! let blue = Hct::from_argb(Argb(0xff0000ff));
//! assert!((blue.hue() - 282.788).abs() < 0.01);
//!
//! let lighter = blue.with_tone(80.0);
//! assert!((lighter.tone() - 80.0).abs() < 0.5);
//! ```

mod cam16;
mod solver;
mod viewing_conditions;

pub use cam16::Cam16;
pub use solver::solve_to_argb;
pub use viewing_conditions::ViewingConditions;

use crate::{Argb, cie};

/// A color in HCT coordinates.
///
/// An `Hct` always stores the in-gamut sRGB color it resolved to, and its
/// hue, chroma and tone describe that stored color. Requesting a chroma the
/// gamut cannot hold therefore yields a lower [`Hct::chroma`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Creates the closest in-gamut color to the requested coordinates.
    ///
    /// `hue` is in degrees and wraps, `chroma` is unbounded above and
    /// `tone` is in `[0, 100]`.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solver::solve_to_argb(hue, chroma, tone))
    }

    /// The HCT coordinates of an ARGB color. Alpha is ignored.
    pub fn from_argb(argb: Argb) -> Self {
        let argb = argb.opaque();
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: cie::lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue angle in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Achieved chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone, identical to L*.
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The resolved opaque color.
    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Same chroma and tone, new hue.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Same hue and tone, new chroma.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Same hue and chroma, new tone.
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// How this color appears when viewed under `vc`, expressed back in the
    /// standard viewing conditions.
    ///
    /// Used to model a color sitting on a dark or light background.
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let cam = Cam16::from_argb(self.argb);
        let viewed = cam.xyz_in_viewing_conditions(vc);
        let recast = Cam16::from_xyz_in_viewing_conditions(viewed, ViewingConditions::standard());
        Self::new(recast.hue, recast.chroma, cie::lstar_from_y(viewed[1]))
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.argb
    }
}

/// Shorthand for [`Hct::new`] followed by [`Hct::to_argb`].
pub fn argb_from_hct(hue: f64, chroma: f64, tone: f64) -> Argb {
    solver::solve_to_argb(hue, chroma, tone)
}

/// Shorthand for [`Hct::from_argb`].
pub fn hct_from_argb(argb: Argb) -> Hct {
    Hct::from_argb(argb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils;

    #[test]
    fn test_blue_coordinates() {
        let hct = Hct::from_argb(Argb(0xff0000ff));
        assert!((hct.hue() - 282.788).abs() < 1e-3);
        assert!((hct.chroma() - 87.2307).abs() < 1e-3);
        assert!((hct.tone() - 32.3026).abs() < 1e-3);
    }

    #[test]
    fn test_alpha_is_ignored() {
        assert_eq!(
            Hct::from_argb(Argb(0x400000ff)),
            Hct::from_argb(Argb(0xff0000ff))
        );
    }

    #[test]
    fn test_argb_round_trip_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let argb = Argb::from_rgb(r, g, b);
                    let hct = Hct::from_argb(argb);
                    let solved = Hct::new(hct.hue(), hct.chroma(), hct.tone());
                    assert_eq!(solved.to_argb(), argb, "round trip of {argb}");
                }
            }
        }
    }

    #[test]
    fn test_requested_tone_and_hue_are_kept() {
        for hue in (0..360).step_by(5) {
            for tone in (30..=70).step_by(10) {
                let hct = Hct::new(f64::from(hue), 40.0, f64::from(tone));
                assert!((hct.tone() - f64::from(tone)).abs() < 0.5);
                if hct.chroma() >= 38.0 {
                    assert!(utils::difference_degrees(hct.hue(), f64::from(hue)) < 1.0);
                }
            }
        }
    }

    #[test]
    fn test_chroma_is_clipped_to_gamut() {
        let hct = Hct::new(120.0, 200.0, 50.0);
        assert!(hct.chroma() < 60.0);
        assert!(hct.chroma() > 45.0);
        assert!((hct.tone() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_setters_preserve_other_dimensions() {
        let hct = Hct::new(200.0, 30.0, 60.0);
        let toned = hct.with_tone(30.0);
        assert!((toned.tone() - 30.0).abs() < 0.5);
        assert!(utils::difference_degrees(toned.hue(), 200.0) < 2.0);
        let hued = hct.with_hue(20.0);
        assert!(utils::difference_degrees(hued.hue(), 20.0) < 2.0);
        assert!((hued.tone() - 60.0).abs() < 0.5);
    }

    #[test]
    fn test_viewing_conditions_shift_tone() {
        let hct = Hct::new(280.0, 40.0, 40.0);
        assert_eq!(hct.in_viewing_conditions(ViewingConditions::standard()), hct);
        // A dark surround makes colors look lighter, so the matching tone drops.
        let on_dark = hct.in_viewing_conditions(&ViewingConditions::with_background_lstar(30.0));
        let on_light = hct.in_viewing_conditions(&ViewingConditions::with_background_lstar(80.0));
        assert!(on_dark.tone() < hct.tone());
        assert!(on_light.tone() > hct.tone());
        assert!(on_dark.tone() < on_light.tone());
    }
}
