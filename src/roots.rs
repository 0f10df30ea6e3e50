// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root classification for quadratic and linear equations.

use core::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::common::{fuzzy_cmp, fuzzy_eq};
use crate::Coeffs;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use crate::libm_polyfill::FloatFuncs as _;

/// The real solutions of `a·x² + b·x + c = 0`.
///
/// Every variant carries exactly the data that is meaningful for it, so
/// there is never a question of whether a root field holds a real value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Roots {
    /// No real number satisfies the equation.
    None,
    /// Exactly one real solution.
    One(f64),
    /// Two distinct real solutions, in increasing order.
    Two(f64, f64),
    /// Every real number satisfies the equation; the fully degenerate
    /// `0 = 0` case.
    All,
    /// The input was not a well-formed real-coefficient equation (a
    /// coefficient was NaN, or the discriminant overflowed to NaN), so no
    /// classification is possible.
    Undefined,
}

impl Roots {
    /// The root values, in increasing order.
    ///
    /// [`Roots::None`], [`Roots::All`] and [`Roots::Undefined`] all yield an
    /// empty vector; callers that need to tell those cases apart should
    /// match on `Roots` itself.
    ///
    /// ```
    /// use quadroots::solve;
    ///
    /// assert_eq!(solve(1.0, -3.0, 2.0).values().as_slice(), &[1.0, 2.0]);
    /// assert!(solve(0.0, 0.0, 0.0).values().is_empty());
    /// ```
    pub fn values(self) -> ArrayVec<f64, 2> {
        let mut vals = ArrayVec::new();
        match self {
            Roots::One(x) => vals.push(x),
            Roots::Two(x1, x2) => {
                vals.push(x1);
                vals.push(x2);
            }
            Roots::None | Roots::All | Roots::Undefined => {}
        }
        vals
    }

    /// The number of solutions, when that number is finite.
    ///
    /// Returns `None` for [`Roots::All`] (infinitely many solutions) and
    /// [`Roots::Undefined`] (no count is defined).
    pub fn count(self) -> Option<usize> {
        match self {
            Roots::None => Some(0),
            Roots::One(_) => Some(1),
            Roots::Two(..) => Some(2),
            Roots::All | Roots::Undefined => None,
        }
    }

    /// Whether classification failed because the input was not well-formed.
    #[inline]
    pub fn is_undefined(self) -> bool {
        matches!(self, Roots::Undefined)
    }

    /// Whether every real number solves the equation.
    #[inline]
    pub fn is_all(self) -> bool {
        matches!(self, Roots::All)
    }
}

impl Coeffs {
    /// Classify and compute the real roots of this equation.
    ///
    /// Comparisons against zero are tolerant, using [`crate::common::EPSILON`]
    /// as an absolute tolerance: a coefficient within ε of zero is treated
    /// as zero, and likewise for the discriminant. A discriminant within ε
    /// of zero yields the single root `−b / (2a)`, the vertex of the
    /// parabola; the discriminant itself is used as computed, with no
    /// snapping. In the two-root case the values `(−b ∓ √d) / (2a)` are
    /// computed in the cancellation-free form and returned in increasing
    /// order, regardless of the sign of `a`.
    ///
    /// NaN anywhere in the input means [`Roots::Undefined`]. Infinite
    /// coefficients are not rejected; they flow through the arithmetic, and
    /// classify as [`Roots::Undefined`] when they make the discriminant NaN.
    ///
    /// ```
    /// use quadroots::{Coeffs, Roots};
    ///
    /// assert_eq!(Coeffs::new(1.0, 2.0, 1.0).roots(), Roots::One(-1.0));
    /// // Negative leading coefficient; roots still come back ascending.
    /// assert_eq!(Coeffs::new(-1.0, 3.0, -2.0).roots(), Roots::Two(1.0, 2.0));
    /// ```
    pub fn roots(self) -> Roots {
        let Coeffs { a, b, c } = self;
        if self.is_nan() {
            return Roots::Undefined;
        }
        if fuzzy_eq(a, 0.0) {
            // Degenerate: b·x + c = 0.
            return match (fuzzy_eq(b, 0.0), fuzzy_eq(c, 0.0)) {
                (true, true) => Roots::All,
                (true, false) => Roots::None,
                (false, _) => Roots::One(-c / b),
            };
        }
        let d = self.discriminant();
        match fuzzy_cmp(d, 0.0) {
            Some(Ordering::Less) => Roots::None,
            Some(Ordering::Equal) => Roots::One(-b / (2.0 * a)),
            Some(Ordering::Greater) => {
                // Stable evaluation of (-b ± √d) / (2a).
                let q = -0.5 * (b + d.sqrt().copysign(b));
                let x1 = q / a;
                let x2 = c / q;
                Roots::Two(x1.min(x2), x1.max(x2))
            }
            // d is NaN. Only infinite coefficients can get here, since NaN
            // coefficients were rejected above.
            None => Roots::Undefined,
        }
    }
}

/// Solve `a·x² + b·x + c = 0` over the reals.
///
/// Free-function form of [`Coeffs::roots`]; see there for the comparison
/// tolerance, the ordering convention and the NaN handling.
///
/// ```
/// use quadroots::{solve, Roots};
///
/// assert_eq!(solve(0.0, 2.0, -4.0), Roots::One(2.0));
/// ```
#[inline]
pub fn solve(a: f64, b: f64, c: f64) -> Roots {
    Coeffs::new(a, b, c).roots()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EPSILON;

    #[test]
    fn two_roots() {
        assert_eq!(solve(1.0, -3.0, 2.0), Roots::Two(1.0, 2.0));
        assert_eq!(solve(1.0, 0.0, -4.0), Roots::Two(-2.0, 2.0));
        assert_eq!(solve(2.0, -10.0, 12.0), Roots::Two(2.0, 3.0));
    }

    #[test]
    fn two_roots_negative_leading_coefficient() {
        // The ascending order holds even though (-b - √d) / (2a) is the
        // larger root when a < 0.
        assert_eq!(solve(-1.0, 3.0, -2.0), Roots::Two(1.0, 2.0));
        assert_eq!(solve(-2.0, 0.0, 8.0), Roots::Two(-2.0, 2.0));
    }

    #[test]
    fn one_root() {
        assert_eq!(solve(1.0, 2.0, 1.0), Roots::One(-1.0));
        assert_eq!(solve(1.0, -2.0, 1.0), Roots::One(1.0));
        assert_eq!(solve(4.0, 4.0, 1.0), Roots::One(-0.5));
    }

    #[test]
    fn no_roots() {
        assert_eq!(solve(1.0, 0.0, 1.0), Roots::None);
        assert_eq!(solve(5.0, 0.0, 1.0), Roots::None);
        assert_eq!(solve(-1.0, 1.0, -1.0), Roots::None);
    }

    #[test]
    fn linear() {
        assert_eq!(solve(0.0, 2.0, -4.0), Roots::One(2.0));
        assert_eq!(solve(0.0, -0.5, 1.0), Roots::One(2.0));
        assert_eq!(solve(0.0, 4.0, 0.0), Roots::One(0.0));
    }

    #[test]
    fn constant() {
        assert_eq!(solve(0.0, 0.0, 0.0), Roots::All);
        assert_eq!(solve(0.0, 0.0, 5.0), Roots::None);
        assert_eq!(solve(0.0, 0.0, -5.0), Roots::None);
        assert!(solve(0.0, 0.0, 0.0).is_all());
    }

    #[test]
    fn tolerant_classification() {
        // A leading coefficient within ε of zero degrades to linear.
        assert_eq!(solve(EPSILON / 2.0, 2.0, -4.0), Roots::One(2.0));
        assert_eq!(solve(-EPSILON / 2.0, 2.0, -4.0), Roots::One(2.0));
        // All three within ε of zero is the fully degenerate case.
        assert_eq!(solve(EPSILON / 2.0, -EPSILON / 2.0, EPSILON / 2.0), Roots::All);
        // A discriminant within ε of zero counts as a double root. Here
        // d = 1 - 4·0.25·(1 ± ε) computes to exactly ∓ε, inside the band,
        // and the root is the vertex -b / (2a).
        assert_eq!(solve(0.25, 1.0, 1.0 + EPSILON), Roots::One(-2.0));
        assert_eq!(solve(0.25, 1.0, 1.0 - EPSILON), Roots::One(-2.0));
    }

    #[test]
    fn nan_input_is_undefined() {
        assert_eq!(solve(f64::NAN, 1.0, 1.0), Roots::Undefined);
        assert_eq!(solve(1.0, f64::NAN, 1.0), Roots::Undefined);
        assert_eq!(solve(1.0, 1.0, f64::NAN), Roots::Undefined);
        assert_eq!(solve(f64::NAN, f64::NAN, f64::NAN), Roots::Undefined);
        assert!(solve(f64::NAN, 0.0, 0.0).is_undefined());
    }

    #[test]
    fn nan_discriminant_is_undefined() {
        // b² and 4ac both overflow, so the discriminant is inf - inf.
        assert_eq!(solve(1e200, 1e200, 1e200), Roots::Undefined);
    }

    #[test]
    fn values_and_count() {
        assert_eq!(solve(1.0, -3.0, 2.0).values().as_slice(), &[1.0, 2.0]);
        assert_eq!(solve(1.0, 2.0, 1.0).values().as_slice(), &[-1.0]);
        assert!(solve(1.0, 0.0, 1.0).values().is_empty());
        assert!(solve(0.0, 0.0, 0.0).values().is_empty());
        assert!(solve(f64::NAN, 0.0, 0.0).values().is_empty());

        assert_eq!(solve(1.0, 0.0, 1.0).count(), Some(0));
        assert_eq!(solve(0.0, 2.0, -4.0).count(), Some(1));
        assert_eq!(solve(1.0, -3.0, 2.0).count(), Some(2));
        assert_eq!(solve(0.0, 0.0, 0.0).count(), None);
        assert_eq!(solve(f64::NAN, 0.0, 0.0).count(), None);
    }

    #[test]
    fn classification_matches_discriminant_sign() {
        let cases = [
            (1.0, -3.0, 2.0),
            (1.0, 2.0, 1.0),
            (1.0, 0.0, 1.0),
            (-3.0, 1.0, 0.25),
            (2.0, 7.0, -4.0),
            (0.5, -1.0, 0.5),
        ];
        for (a, b, c) in cases {
            let eq = Coeffs::new(a, b, c);
            let expected = match fuzzy_cmp(eq.discriminant(), 0.0).unwrap() {
                Ordering::Less => Some(0),
                Ordering::Equal => Some(1),
                Ordering::Greater => Some(2),
            };
            assert_eq!(eq.roots().count(), expected, "wrong class for {eq:?}");
        }
    }

    #[test]
    fn root_evaluation() {
        arbtest::arbtest(|u| {
            let eq = crate::arbitrary::coeffs(u)?;
            let magnitude = eq.magnitude().max(1.0);
            for r in eq.roots().values() {
                let r_magnitude = r.abs().max(1.0);
                let threshold = r_magnitude * 1e-12 * r_magnitude * magnitude;
                let y = eq.eval(r);
                assert!(
                    y.abs() <= threshold,
                    "residual {y} at root {r} of {eq:?}"
                );
            }
            Ok(())
        })
        .budget_ms(5_000);
    }

    #[test]
    fn nan_anywhere_is_never_classified() {
        arbtest::arbtest(|u| {
            let eq = crate::arbitrary::any_coeffs(u)?;
            if eq.is_nan() {
                assert!(eq.roots().is_undefined(), "classified NaN input {eq:?}");
            }
            Ok(())
        })
        .budget_ms(1_000);
    }
}
