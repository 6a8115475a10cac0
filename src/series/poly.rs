//! Polynomial helpers shared by the coefficient generators.

use num_traits::Float;

/// Evaluate a polynomial with coefficients in ascending powers of `x`.
///
/// Runs Horner's method from the highest-degree coefficient down. An empty
/// slice evaluates to zero.
pub fn horner<T: Float>(x: T, coeffs: &[T]) -> T {
    let mut it = coeffs.iter().rev();
    let Some(&top) = it.next() else {
        return T::zero();
    };
    it.fold(top, |acc, &c| acc * x + c)
}

/// A polynomial with integer coefficients over an integer denominator.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rational {
    /// Numerator coefficients, ascending powers.
    pub num: &'static [f64],
    pub den: f64,
}

pub(crate) const fn r(num: &'static [f64], den: f64) -> Rational {
    Rational { num, den }
}

impl Rational {
    /// `P(x) / D`
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        horner(x, self.num) / self.den
    }

    /// `scale * P(x) / D`, multiplying before the division.
    #[inline]
    pub fn eval_scaled(&self, scale: f64, x: f64) -> f64 {
        scale * horner(x, self.num) / self.den
    }
}
