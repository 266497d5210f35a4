//! The CAM16 color appearance model.
//!
//! CAM16 supplies the hue and chroma dimensions of HCT. It also provides
//! the UCS coordinates (`jstar`, `astar`, `bstar`) used for perceptual
//! distance.

use crate::{Argb, cie, utils};

use super::ViewingConditions;

/// XYZ to the CAM16 cone-like RGB space.
pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// CAM16 RGB back to XYZ.
pub(crate) const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

/// A color in CAM16 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f64,
    /// Colorfulness relative to a neutral of the same lightness.
    pub chroma: f64,
    /// Lightness.
    pub j: f64,
    /// Brightness.
    pub q: f64,
    /// Colorfulness.
    pub m: f64,
    /// Saturation.
    pub s: f64,
    /// CAM16-UCS lightness.
    pub jstar: f64,
    /// CAM16-UCS a coordinate.
    pub astar: f64,
    /// CAM16-UCS b coordinate.
    pub bstar: f64,
}

impl Cam16 {
    /// CAM16 of a color under the standard viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in_viewing_conditions(argb, ViewingConditions::standard())
    }

    /// CAM16 of a color under the given viewing conditions.
    pub fn from_argb_in_viewing_conditions(argb: Argb, vc: &ViewingConditions) -> Self {
        Self::from_xyz_in_viewing_conditions(cie::xyz_from_argb(argb), vc)
    }

    /// CAM16 of an XYZ value under the given viewing conditions.
    pub fn from_xyz_in_viewing_conditions(xyz: [f64; 3], vc: &ViewingConditions) -> Self {
        let rgb_t = utils::matrix_multiply(xyz, &XYZ_TO_CAM16RGB);
        let rgb_a = [0, 1, 2].map(|i| {
            let discounted = vc.rgb_d[i] * rgb_t[i];
            let af = (vc.fl * discounted.abs() / 100.0).powf(0.42);
            utils::signum(discounted) * 400.0 * af / (af + 27.13)
        });
        let [r_a, g_a, b_a] = rgb_a;

        // Redness-greenness and yellowness-blueness.
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(vc.n)).powf(0.73) * t.powf(0.9);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Builds a CAM16 color from lightness, chroma and hue under the given
    /// viewing conditions.
    pub fn from_jch_in_viewing_conditions(
        j: f64,
        chroma: f64,
        hue: f64,
        vc: &ViewingConditions,
    ) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let hue_radians = hue.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// XYZ of this color when seen under the given viewing conditions.
    pub fn xyz_in_viewing_conditions(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let hue_radians = self.hue.to_radians();

        let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let h_sin = hue_radians.sin();
        let h_cos = hue_radians.cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let rgb_f = [r_a, g_a, b_a].map(|adapted| {
            let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
            utils::signum(adapted) * (100.0 / vc.fl) * base.powf(1.0 / 0.42)
        });
        let rgb = [0, 1, 2].map(|i| rgb_f[i] / vc.rgb_d[i]);

        utils::matrix_multiply(rgb, &CAM16RGB_TO_XYZ)
    }

    /// The color under the given viewing conditions, packed as ARGB.
    pub fn to_argb_in_viewing_conditions(&self, vc: &ViewingConditions) -> Argb {
        cie::argb_from_xyz(self.xyz_in_viewing_conditions(vc))
    }

    /// The color under the standard viewing conditions, packed as ARGB.
    pub fn to_argb(&self) -> Argb {
        self.to_argb_in_viewing_conditions(ViewingConditions::standard())
    }

    /// Perceptual distance to `other` in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }
}

impl From<Argb> for Cam16 {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blue() {
        let cam = Cam16::from_argb(Argb(0xff0000ff));
        assert!((cam.hue - 282.788).abs() < 1e-3);
        assert!((cam.chroma - 87.2307).abs() < 1e-3);
    }

    #[test]
    fn test_gray_has_no_chroma() {
        let cam = Cam16::from_argb(Argb(0xff777777));
        assert!(cam.chroma < 3.0);
    }

    #[test]
    fn test_round_trip_through_xyz() {
        for argb in [0xff0000ff_u32, 0xffff0000, 0xff00ff00, 0xff4285f4, 0xff6750a4] {
            let argb = Argb(argb);
            assert_eq!(Cam16::from_argb(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(Argb(0xffff0000));
        let blue = Cam16::from_argb(Argb(0xff0000ff));
        assert_eq!(red.distance(&red), 0.0);
        assert!(red.distance(&blue) > 10.0);
        assert!((red.distance(&blue) - blue.distance(&red)).abs() < 1e-9);
    }
}
