use crate::error::SeriesError;

/// An oblate ellipsoid of revolution and the derived quantities the series
/// expansions are parameterised by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Flattening (dimensionless)
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: f * (2 - f)
    pub e2: f64,
    /// Second eccentricity squared: e^2 / (1 - e^2)
    pub ep2: f64,
    /// Third flattening: f / (2 - f)
    pub n: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = f * (2.0 - f);
        let ep2 = e2 / ((1.0 - f) * (1.0 - f));
        let n = f / (2.0 - f);
        Self {
            a,
            f,
            b,
            e2,
            ep2,
            n,
        }
    }

    /// Like [`Ellipsoid::new`], but rejects a non-positive axis and flattening
    /// outside `[0, 1)`. Prolate ellipsoids are not supported by the series.
    pub fn try_new(a: f64, f: f64) -> Result<Self, SeriesError> {
        if !(a.is_finite() && a > 0.0) {
            return Err(SeriesError::InvalidParameter(format!(
                "semi-major axis must be positive, got {a}"
            )));
        }
        if !(0.0..1.0).contains(&f) {
            return Err(SeriesError::InvalidParameter(format!(
                "flattening must be in [0, 1), got {f}"
            )));
        }
        Ok(Self::new(a, f))
    }

    /// A sphere of radius `r`.
    pub const fn sphere(r: f64) -> Self {
        Self::new(r, 0.0)
    }

    /// First eccentricity `e`. Not stored, since `sqrt` is not const.
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// Expansion parameter of a geodesic with Clairaut constant `cos(alpha0)`.
    pub fn eps_for(&self, cos_alpha0: f64) -> f64 {
        eps_from_k2(self.ep2 * cos_alpha0 * cos_alpha0)
    }

    /// Expansion parameter along a meridian. Equal to the third flattening.
    pub fn meridian_eps(&self) -> f64 {
        self.n
    }
}

/// `eps = (sqrt(1 + k²) − 1) / (sqrt(1 + k²) + 1)`, written without cancellation.
pub fn eps_from_k2(k2: f64) -> f64 {
    k2 / (2.0 * (1.0 + (1.0 + k2).sqrt()) + k2)
}

/// `k² = 4 eps / (1 − eps)²`, the inverse of [`eps_from_k2`].
pub fn k2_from_eps(eps: f64) -> f64 {
    4.0 * eps / ((1.0 - eps) * (1.0 - eps))
}

pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_222_101);

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}
