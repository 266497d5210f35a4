//! Conversions between sRGB, linear RGB, CIE XYZ, CIE L*a*b* and L*.
//!
//! Linear RGB components and XYZ values are on a 0 to 100 scale, matching
//! the D65 white point in [`WHITE_POINT_D65`].

use crate::{Argb, utils};

/// sRGB (linear) to XYZ, rows are X, Y and Z.
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// XYZ to sRGB (linear), rows are R, G and B.
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
];

/// Standard D65 white point.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Converts an 8-bit sRGB channel into linear RGB on a 0 to 100 scale.
#[inline]
pub fn linearized(rgb_component: u8) -> f64 {
    let normalized = f64::from(rgb_component) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Like [`linearized`] but accepts fractional channel values.
#[inline]
pub(crate) fn linearized_f64(rgb_component: f64) -> f64 {
    let normalized = rgb_component / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Converts a linear RGB component (0 to 100) back to a fractional 8-bit
/// sRGB value, without rounding or clamping.
#[inline]
pub fn true_delinearized(rgb_component: f64) -> f64 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

/// Converts a linear RGB component (0 to 100) into an 8-bit sRGB channel.
#[inline]
pub fn delinearized(rgb_component: f64) -> u8 {
    utils::clamp_f64(0.0, 255.0, true_delinearized(rgb_component).round()) as u8
}

/// Packs linear RGB components into an opaque [`Argb`].
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// CIE XYZ of a color.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    let linear = [
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    ];
    utils::matrix_multiply(linear, &SRGB_TO_XYZ)
}

/// Opaque color closest to the given CIE XYZ value.
pub fn argb_from_xyz(xyz: [f64; 3]) -> Argb {
    argb_from_linrgb(utils::matrix_multiply(xyz, &XYZ_TO_SRGB))
}

/// CIE L*a*b* of a color.
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let xyz = xyz_from_argb(argb);
    let fx = lab_f(xyz[0] / WHITE_POINT_D65[0]);
    let fy = lab_f(xyz[1] / WHITE_POINT_D65[1]);
    let fz = lab_f(xyz[2] / WHITE_POINT_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Opaque color closest to the given CIE L*a*b* value.
pub fn argb_from_lab(lab: [f64; 3]) -> Argb {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = lab[1] / 500.0 + fy;
    let fz = fy - lab[2] / 200.0;
    argb_from_xyz([
        lab_invf(fx) * WHITE_POINT_D65[0],
        lab_invf(fy) * WHITE_POINT_D65[1],
        lab_invf(fz) * WHITE_POINT_D65[2],
    ])
}

/// L* of a color.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    let y = xyz_from_argb(argb)[1];
    116.0 * lab_f(y / 100.0) - 16.0
}

/// The gray whose L* is `lstar`.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

/// Relative luminance Y (0 to 100) for an L* value.
#[inline]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* for a relative luminance Y (0 to 100).
#[inline]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > LAB_EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / LAB_KAPPA
    }
}
