//! Precomputed expansions for the three geodesic integrals.
//!
//! [`GeodesicSeries`] holds what depends only on the ellipsoid; a
//! [`LineSeries`] adds what depends on one geodesic's eps. Both are read-only
//! after construction and can be shared across threads.

use tracing::debug;

use crate::series::{
    evaluate_a1, evaluate_a2, evaluate_a3_coeffs, evaluate_c1_coeffs, evaluate_c1p_coeffs,
    evaluate_c2_coeffs, evaluate_c3_coeffs, evaluate_c3x_coeffs, Coeffs, SeriesOrder, A3, C1,
    C1p, C2, C3, C3x,
};

use super::ellipsoid::{Ellipsoid, WGS84};

/// Per-ellipsoid part: A3 and C3x polynomials evaluated at the third flattening.
#[derive(Clone, Debug)]
pub struct GeodesicSeries {
    ellipsoid: Ellipsoid,
    order: SeriesOrder,
    a3x: Coeffs<A3>,
    c3x: Coeffs<C3x>,
}

impl GeodesicSeries {
    pub fn new(ellipsoid: Ellipsoid, order: SeriesOrder) -> Self {
        let n = ellipsoid.n;
        let a3x = evaluate_a3_coeffs(order, n);
        let c3x = evaluate_c3x_coeffs(order, n);
        debug!(
            order = order.get(),
            n,
            c3x_len = c3x.len(),
            "Precomputed geodesic series"
        );
        Self {
            ellipsoid,
            order,
            a3x,
            c3x,
        }
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    pub fn a3x(&self) -> &Coeffs<A3> {
        &self.a3x
    }

    pub fn c3x(&self) -> &Coeffs<C3x> {
        &self.c3x
    }

    /// Series for a geodesic with expansion parameter `eps`.
    pub fn line(&self, eps: f64) -> LineSeries {
        LineSeries {
            eps,
            a1m1: evaluate_a1(self.order, eps),
            a2m1: evaluate_a2(self.order, eps),
            a3: self.a3x.evaluate(eps),
            c1: evaluate_c1_coeffs(self.order, eps),
            c1p: evaluate_c1p_coeffs(self.order, eps),
            c2: evaluate_c2_coeffs(self.order, eps),
            c3: evaluate_c3_coeffs(&self.c3x, eps),
        }
    }

    /// Series for the geodesic whose azimuth at the equator is `alpha0`,
    /// given as `cos(alpha0)`.
    pub fn line_for(&self, cos_alpha0: f64) -> LineSeries {
        self.line(self.ellipsoid.eps_for(cos_alpha0))
    }
}

impl Default for GeodesicSeries {
    fn default() -> Self {
        Self::new(WGS84, SeriesOrder::DEFAULT)
    }
}

/// Scale factors and harmonic sets of one geodesic.
#[derive(Clone, Debug)]
pub struct LineSeries {
    pub eps: f64,
    /// A1 − 1
    pub a1m1: f64,
    /// A2 − 1
    pub a2m1: f64,
    pub a3: f64,
    pub c1: Coeffs<C1>,
    pub c1p: Coeffs<C1p>,
    pub c2: Coeffs<C2>,
    pub c3: Coeffs<C3>,
}

impl LineSeries {
    /// `I1(σ) = ∫ sqrt(1 + k² sin²σ) dσ`, the distance integral (in units of b).
    pub fn i1(&self, sin_sigma: f64, cos_sigma: f64, sigma: f64) -> f64 {
        (1.0 + self.a1m1) * (sigma + self.c1.sum(sin_sigma, cos_sigma))
    }

    /// `I2(σ) = ∫ 1 / sqrt(1 + k² sin²σ) dσ`.
    pub fn i2(&self, sin_sigma: f64, cos_sigma: f64, sigma: f64) -> f64 {
        (1.0 + self.a2m1) * (sigma + self.c2.sum(sin_sigma, cos_sigma))
    }

    /// `I3(σ) = ∫ (2 − f) / (1 + (1 − f) sqrt(1 + k² sin²σ)) dσ`.
    pub fn i3(&self, sin_sigma: f64, cos_sigma: f64, sigma: f64) -> f64 {
        self.a3 * (sigma + self.c3.sum(sin_sigma, cos_sigma))
    }

    /// Invert `τ = σ + B1(σ)` for σ, via the C1p series.
    pub fn sigma_from_tau(&self, sin_tau: f64, cos_tau: f64, tau: f64) -> f64 {
        tau + self.c1p.sum(sin_tau, cos_tau)
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeodesicSeries>();
    assert_send_sync::<LineSeries>();
};
