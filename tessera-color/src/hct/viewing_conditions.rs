//! Environment parameters for the CAM16 appearance model.

use std::{f64::consts::PI, sync::OnceLock};

use crate::{
    cie::{self, WHITE_POINT_D65},
    utils,
};

use super::cam16::XYZ_TO_CAM16RGB;

/// Precomputed CAM16 viewing conditions.
///
/// Constructing these is comparatively expensive, so the default set is
/// built once and shared through [`ViewingConditions::standard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    pub(crate) n: f64,
    pub(crate) aw: f64,
    pub(crate) nbb: f64,
    pub(crate) ncb: f64,
    pub(crate) c: f64,
    pub(crate) nc: f64,
    pub(crate) rgb_d: [f64; 3],
    pub(crate) fl: f64,
    pub(crate) fl_root: f64,
    pub(crate) z: f64,
}

static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();

impl ViewingConditions {
    /// Builds viewing conditions from physical parameters.
    ///
    /// * `white_point` - XYZ of the adopted white.
    /// * `adapting_luminance` - luminance of the adapting field in cd/m².
    /// * `background_lstar` - L* of the background; values under 0.1 are
    ///   raised to 0.1.
    /// * `surround` - 0 is dark, 1 is dim and 2 is average.
    /// * `discounting_illuminant` - whether the eye fully adapts to the
    ///   illuminant.
    pub fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let rgb_w = [0, 1, 2].map(|i| {
            let row = XYZ_TO_CAM16RGB[i];
            white_point[0] * row[0] + white_point[1] * row[1] + white_point[2] * row[2]
        });

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            utils::lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            utils::lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = utils::clamp_f64(0.0, 1.0, d);
        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = cie::y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = [0, 1, 2].map(|i| {
            let factor = (fl * rgb_d[i] * rgb_w[i] / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like conditions: D65 white, a 50 L* gray background, average
    /// surround and an adapting luminance of about 11.7 cd/m².
    pub fn standard() -> &'static Self {
        STANDARD.get_or_init(|| Self::with_background_lstar(50.0))
    }

    /// Standard conditions with a custom background lightness.
    ///
    /// Dynamic schemes use this to model how a color reads against a dark
    /// or light surface.
    pub fn with_background_lstar(lstar: f64) -> Self {
        Self::make(
            WHITE_POINT_D65,
            200.0 / PI * cie::y_from_lstar(50.0) / 100.0,
            lstar,
            2.0,
            false,
        )
    }

    /// Background luminance relative to the white point.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Achromatic response of the white point.
    pub fn aw(&self) -> f64 {
        self.aw
    }

    /// Luminance-level adaptation factor.
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// Exponential nonlinearity.
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        *Self::standard()
    }
}
