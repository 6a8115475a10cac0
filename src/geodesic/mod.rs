//! Ellipsoid parameters and the geodesic integrals built on the series engine.

pub mod ellipsoid;
pub mod meridian;
pub mod series;

pub use ellipsoid::{eps_from_k2, k2_from_eps, Ellipsoid, GRS80, WGS84};
pub use meridian::{meridian_distance, MeridianArc};
pub use series::{GeodesicSeries, LineSeries};
