// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coefficient triple of a quadratic equation.

use core::fmt;
use core::ops::Mul;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use crate::libm_polyfill::FloatFuncs as _;

/// The coefficients of the equation `a·x² + b·x + c = 0`.
///
/// This is a plain value type; the only invariant is that the fields are
/// IEEE-754 doubles, possibly NaN or infinite. `a` may be zero, in which
/// case the equation is linear, and `b` may be zero too, in which case it
/// is constant. [`Coeffs::roots`] classifies all of those cases.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coeffs {
    /// The coefficient of the quadratic term.
    pub a: f64,
    /// The coefficient of the linear term.
    pub b: f64,
    /// The constant term.
    pub c: f64,
}

impl Coeffs {
    /// The identically zero equation, `0 = 0`.
    pub const ZERO: Coeffs = Coeffs::new(0., 0., 0.);

    /// Create a new coefficient triple for `a·x² + b·x + c = 0`.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Coeffs { a, b, c }
    }

    /// Evaluate the left-hand side `a·x² + b·x + c` at `x`.
    ///
    /// ```
    /// use quadroots::Coeffs;
    ///
    /// let eq = Coeffs::new(1.0, -3.0, 2.0);
    /// assert_eq!(eq.eval(1.0), 0.0);
    /// assert_eq!(eq.eval(0.0), 2.0);
    /// ```
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// The discriminant `b² − 4ac`.
    ///
    /// Its sign, compared against zero with the crate's tolerance, decides
    /// the root multiplicity of a non-degenerate quadratic.
    #[inline]
    pub fn discriminant(self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// The largest absolute value of any coefficient.
    ///
    /// Always non-negative, or NaN if some coefficient is NaN. Useful for
    /// scaling error thresholds when checking residuals.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.a.abs().max(self.b.abs()).max(self.c.abs())
    }

    /// Are all three coefficients finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Is any coefficient NaN?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.a.is_nan() || self.b.is_nan() || self.c.is_nan()
    }
}

impl Mul<f64> for Coeffs {
    type Output = Coeffs;

    /// Scale every coefficient. The root set of the scaled equation is
    /// unchanged for any finite nonzero factor, up to the comparison
    /// tolerance.
    #[inline]
    fn mul(self, factor: f64) -> Coeffs {
        Coeffs::new(self.a * factor, self.b * factor, self.c * factor)
    }
}

impl Mul<Coeffs> for f64 {
    type Output = Coeffs;

    #[inline]
    fn mul(self, coeffs: Coeffs) -> Coeffs {
        coeffs * self
    }
}

impl fmt::Debug for Coeffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}x^2 + {:?}x + {:?} = 0", self.a, self.b, self.c)
    }
}

impl fmt::Display for Coeffs {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.a, formatter)?;
        write!(formatter, "x^2 + ")?;
        fmt::Display::fmt(&self.b, formatter)?;
        write!(formatter, "x + ")?;
        fmt::Display::fmt(&self.c, formatter)?;
        write!(formatter, " = 0")
    }
}
