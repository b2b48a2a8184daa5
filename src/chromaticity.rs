//! This module contains the two coordinate systems Duv is computed in: CIE 1931 xy chromaticity,
//! which is what measurement devices and datasheets report, and the CIE 1960 UCS (u, v) diagram,
//! which is the more perceptually uniform plane that the blackbody locus approximation lives in.

use num::Float;

use crate::consts::{LOCUS_COEFFICIENTS, LOCUS_ORIGIN_U, LOCUS_ORIGIN_V};

/// A point in the CIE 1931 xy chromaticity diagram. Describes the hue and saturation of a light
/// source without its brightness. No range checking is done: any pair of floats is accepted, and
/// nonsense in gives nonsense (or NaN) out.
/// # Example
///
/// ```
/// # use duv::chromaticity::Chromaticity;
/// let warm_white = Chromaticity { x: 0.4525, y: 0.4037 };
/// assert_eq!(format!("{:.4}", warm_white.duv()), "-0.0019");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Chromaticity {
    /// The x chromaticity coordinate.
    pub x: f64,
    /// The y chromaticity coordinate.
    pub y: f64,
}

/// A point in the CIE 1960 UCS diagram.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct UCSCoord {
    /// The u coordinate.
    pub u: f64,
    /// The v coordinate.
    pub v: f64,
}

impl From<(f64, f64)> for Chromaticity {
    fn from((x, y): (f64, f64)) -> Chromaticity {
        Chromaticity { x, y }
    }
}

impl Chromaticity {
    /// Projects onto the CIE 1960 UCS diagram. If `-2x + 12y + 3` is zero, both coordinates come
    /// out non-finite.
    /// # Example
    /// ```
    /// # use duv::chromaticity::Chromaticity;
    /// let uv = Chromaticity { x: 0.3127, y: 0.3290 }.to_ucs();
    /// assert!((uv.u - 0.19783).abs() <= 1e-5);
    /// assert!((uv.v - 0.31221).abs() <= 1e-5);
    /// ```
    pub fn to_ucs(&self) -> UCSCoord {
        let denom = -2.0 * self.x + 12.0 * self.y + 3.0;
        UCSCoord {
            u: 4.0 * self.x / denom,
            v: 6.0 * self.y / denom,
        }
    }
    /// The Duv of this chromaticity. See [`duv`].
    pub fn duv(&self) -> f64 {
        duv(*self)
    }
}

/// Evaluates the blackbody locus polynomial `k0 + k1·a + ... + k6·a⁶` at the angle `a`, in radians.
pub fn locus_polynomial<T: Float>(coefficients: &[T], a: T) -> T {
    coefficients
        .iter()
        .enumerate()
        .fold(T::zero(), |sum, (i, &k)| sum + k * a.powi(i as i32))
}

/// Computes Duv: the signed distance in the CIE 1960 UCS diagram between the given chromaticity and
/// the blackbody locus. Positive values lie above the locus (greenish), negative values below it
/// (pinkish).
///
/// Nothing is checked here. A zero denominator in the UCS projection, or a point sitting exactly on
/// the reference point, gives NaN or an infinity instead of a panic.
/// # Example
/// ```
/// # use duv::chromaticity::{duv, Chromaticity};
/// let d = duv(Chromaticity { x: 0.4356, y: 0.4118 });
/// assert!((d - 0.0032537).abs() <= 1e-6);
/// ```
pub fn duv(xy: Chromaticity) -> f64 {
    let uv = xy.to_ucs();
    let du = uv.u - LOCUS_ORIGIN_U;
    let dv = uv.v - LOCUS_ORIGIN_V;
    // distance from the reference point, then the angle around it
    let lfp = (du.powi(2) + dv.powi(2)).sqrt();
    let a = (du / lfp).acos();
    let lbb = locus_polynomial(&LOCUS_COEFFICIENTS, a);
    lfp - lbb
}
