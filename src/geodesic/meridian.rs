//! Meridian arc length through the distance series.
//!
//! A meridian is the geodesic with `cos(alpha0) = 1`, so `k² = e'²` and the
//! expansion parameter is the third flattening n. The arc from the equator is
//! `b (1 + A1) (β + B1(β))` with β the reduced latitude.

use crate::series::{evaluate_a1, evaluate_c1_coeffs, Coeffs, SeriesOrder, C1};

use super::ellipsoid::Ellipsoid;

/// Precomputed meridian series for one ellipsoid.
#[derive(Clone, Debug)]
pub struct MeridianArc {
    /// `b * (1 + A1)`
    scale: f64,
    /// `1 - f`, for the reduced latitude
    f1: f64,
    c1: Coeffs<C1>,
}

impl MeridianArc {
    pub fn new(ellipsoid: &Ellipsoid, order: SeriesOrder) -> Self {
        let eps = ellipsoid.meridian_eps();
        Self {
            scale: ellipsoid.b * (1.0 + evaluate_a1(order, eps)),
            f1: 1.0 - ellipsoid.f,
            c1: evaluate_c1_coeffs(order, eps),
        }
    }

    /// Distance (metres) along the meridian from the equator to latitude `lat` (radians).
    pub fn distance(&self, lat: f64) -> f64 {
        let (sin_phi, cos_phi) = lat.sin_cos();
        // tan(beta) = (1 - f) tan(phi), kept as a normalised (sin, cos) pair.
        let (sy, cx) = (self.f1 * sin_phi, cos_phi);
        let h = sy.hypot(cx);
        let (sin_beta, cos_beta) = (sy / h, cx / h);
        let beta = sin_beta.atan2(cos_beta);
        self.scale * (beta + self.c1.sum(sin_beta, cos_beta))
    }

    /// Length of the quarter meridian, equator to pole.
    pub fn quarter(&self) -> f64 {
        self.scale * std::f64::consts::FRAC_PI_2
    }
}

/// Distance (metres) along the meridian from the equator to latitude `lat` (radians).
pub fn meridian_distance(ellipsoid: &Ellipsoid, order: SeriesOrder, lat: f64) -> f64 {
    MeridianArc::new(ellipsoid, order).distance(lat)
}
