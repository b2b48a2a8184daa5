//! Constants for the blackbody locus approximation. The locus is modelled in CIE 1960 UCS as a
//! distance from a fixed reference point near the locus, given as a 6th-degree polynomial in the
//! angle around that point. Source for the fit: [Waveform
//! Lighting](https://www.waveformlighting.com/tech/calculate-duv-from-cie-1931-xy-coordinates).

/// The u coordinate of the reference point the angle is measured around.
pub const LOCUS_ORIGIN_U: f64 = 0.292;

/// The v coordinate of the reference point the angle is measured around.
pub const LOCUS_ORIGIN_V: f64 = 0.24;

/// Polynomial coefficients for the locus distance, lowest degree first: `[k0, k1, ..., k6]`.
pub const LOCUS_COEFFICIENTS: [f64; 7] = [
    -0.471106,
    1.925865,
    -2.4243787,
    1.5317403,
    -0.5179722,
    0.0893944,
    -0.00616793,
];
