// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utilities for fuzz and/or property testing using `arbitrary`.

use ::arbitrary::{Error, Unstructured};

use crate::Coeffs;

/// An arbitrary finite float.
pub fn finite_float(u: &mut Unstructured<'_>) -> Result<f64, Error> {
    let f: f64 = u.arbitrary()?;
    if f.is_finite() {
        Ok(f)
    } else {
        Err(Error::IncorrectFormat)
    }
}

/// An exact power of two in `2^-8 ..= 2^8`, built from the exponent bits.
fn pow2(e: i32) -> f64 {
    f64::from_bits(((1023 + e) as u64) << 52)
}

/// A well-conditioned coefficient: an integer mantissa in `-1000 ..= 1000`
/// times an exact power of two.
///
/// Coefficients on this grid are either exactly zero or far from the
/// comparison tolerance, and discriminants computed from them are exact.
/// That keeps residual checks meaningful; a coefficient sitting right at
/// the tolerance boundary would make the classification itself the main
/// source of error.
pub fn coeff(u: &mut Unstructured<'_>) -> Result<f64, Error> {
    let mantissa: i32 = u.int_in_range(-1000..=1000)?;
    let exponent: i32 = u.int_in_range(-8..=8)?;
    Ok(mantissa as f64 * pow2(exponent))
}

/// Generate a well-conditioned coefficient triple; see [`coeff`].
pub fn coeffs(u: &mut Unstructured<'_>) -> Result<Coeffs, Error> {
    Ok(Coeffs::new(coeff(u)?, coeff(u)?, coeff(u)?))
}

/// Generate a completely arbitrary coefficient triple, NaN and infinities
/// included.
pub fn any_coeffs(u: &mut Unstructured<'_>) -> Result<Coeffs, Error> {
    Ok(Coeffs::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?))
}
