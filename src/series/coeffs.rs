//! Length-tagged coefficient sequences, one type per series family.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use crate::error::SeriesError;

use super::clenshaw::sin_cos_series;
use super::order::SeriesOrder;

/// A series family: fixes the sequence length for a given order.
pub trait Family {
    const NAME: &'static str;

    fn len(order: SeriesOrder) -> usize;
}

/// Families whose entry `l` is the coefficient of `sin(2 l x)` (entry 0 unused).
pub trait Fourier: Family {}

macro_rules! family {
    ($(#[$doc:meta])* $ty:ident, $name:literal, |$n:ident| $len:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $ty {}

        impl Family for $ty {
            const NAME: &'static str = $name;

            fn len(order: SeriesOrder) -> usize {
                let $n = order.get();
                $len
            }
        }
    };
}

family!(
    /// A3 coefficients of eps^j, each a polynomial in n.
    A3, "A3", |n| n
);
family!(
    /// Fourier coefficients of B1 (distance integral).
    C1, "C1", |n| n + 1
);
family!(
    /// Fourier coefficients of the inverse of B1.
    C1p, "C1p", |n| n + 1
);
family!(
    /// Fourier coefficients of B2 (reduced-length integral).
    C2, "C2", |n| n + 1
);
family!(
    /// Triangular table of C3 polynomials in n.
    C3x, "C3x", |n| n * n.saturating_sub(1) / 2
);
family!(
    /// Fourier coefficients of B3 (longitude integral).
    C3, "C3", |n| n
);

impl Fourier for C1 {}
impl Fourier for C1p {}
impl Fourier for C2 {}
impl Fourier for C3 {}

/// Runtime name for a family, for callers that select one by string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesFamily {
    A1,
    A2,
    A3,
    C1,
    C1p,
    C2,
    C3x,
    C3,
}

impl SeriesFamily {
    /// Parse from a string name (case-insensitive).
    pub fn from_name(s: &str) -> Result<Self, SeriesError> {
        match s.to_lowercase().as_str() {
            "a1" => Ok(Self::A1),
            "a2" => Ok(Self::A2),
            "a3" => Ok(Self::A3),
            "c1" => Ok(Self::C1),
            "c1p" => Ok(Self::C1p),
            "c2" => Ok(Self::C2),
            "c3x" => Ok(Self::C3x),
            "c3" => Ok(Self::C3),
            _ => Err(SeriesError::UnknownFamily(s.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => A3::NAME,
            Self::C1 => C1::NAME,
            Self::C1p => C1p::NAME,
            Self::C2 => C2::NAME,
            Self::C3x => C3x::NAME,
            Self::C3 => C3::NAME,
        }
    }

    /// Length of the family's sequence at `order`; the scalar families report 1.
    pub fn len(&self, order: SeriesOrder) -> usize {
        match self {
            Self::A1 | Self::A2 => 1,
            Self::A3 => A3::len(order),
            Self::C1 => C1::len(order),
            Self::C1p => C1p::len(order),
            Self::C2 => C2::len(order),
            Self::C3x => C3x::len(order),
            Self::C3 => C3::len(order),
        }
    }
}

impl fmt::Display for SeriesFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coefficient sequence of family `F`, generated at a fixed order.
///
/// The length always equals `F::len(order)`. Values are immutable once built,
/// so one sequence can be shared across any number of evaluating threads.
pub struct Coeffs<F: Family> {
    order: SeriesOrder,
    values: Vec<f64>,
    _family: PhantomData<F>,
}

impl<F: Family> Coeffs<F> {
    /// Wrap values produced by a generator. Length is guaranteed by the caller.
    pub(crate) fn from_generated(order: SeriesOrder, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), F::len(order), "{} length", F::NAME);
        Self {
            order,
            values,
            _family: PhantomData,
        }
    }

    /// Wrap externally supplied values, checking the length against `order`.
    pub fn from_vec(order: SeriesOrder, values: Vec<f64>) -> Result<Self, SeriesError> {
        let expected = F::len(order);
        if values.len() != expected {
            return Err(SeriesError::LengthMismatch {
                family: F::NAME,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self::from_generated(order, values))
    }

    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Coeffs<A3>>();
    assert_send_sync::<Coeffs<C1>>();
    assert_send_sync::<Coeffs<C1p>>();
    assert_send_sync::<Coeffs<C2>>();
    assert_send_sync::<Coeffs<C3x>>();
    assert_send_sync::<Coeffs<C3>>();
};

impl<F: Fourier> Coeffs<F> {
    /// `sum(c[l] * sin(2 l x))` for the angle with sine `sinx` and cosine `cosx`.
    #[inline]
    pub fn sum(&self, sinx: f64, cosx: f64) -> f64 {
        sin_cos_series(sinx, cosx, &self.values)
    }
}

impl<F: Family> Clone for Coeffs<F> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            values: self.values.clone(),
            _family: PhantomData,
        }
    }
}

impl<F: Family> PartialEq for Coeffs<F> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.values == other.values
    }
}

impl<F: Family> fmt::Debug for Coeffs<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coeffs")
            .field("family", &F::NAME)
            .field("order", &self.order)
            .field("values", &self.values)
            .finish()
    }
}

impl<F: Family> Index<usize> for Coeffs<F> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl<F: Family> AsRef<[f64]> for Coeffs<F> {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
