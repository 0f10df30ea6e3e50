// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of the real roots of quadratic and linear equations.
//!
//! The quadroots library answers one question: given `f64` coefficients
//! `a`, `b` and `c`, what are the real solutions of `a·x² + b·x + c = 0`?
//! The answer is a proper sum type, [`Roots`], covering every case the
//! closed form can produce: no solution, one solution, two solutions, every
//! real number, or no classification at all because a coefficient was NaN.
//!
//! Coefficients are compared against zero with a fixed absolute tolerance
//! ([`common::EPSILON`]) rather than bitwise, so an `a` that is zero up to
//! rounding noise degrades the equation to a linear one instead of producing
//! wildly large roots. See [`common::fuzzy_cmp`] for the limitations of this
//! scheme.
//!
//! # Examples
//!
//! ```
//! use quadroots::{solve, Coeffs, Roots};
//!
//! assert_eq!(solve(1.0, -3.0, 2.0), Roots::Two(1.0, 2.0));
//! assert_eq!(solve(1.0, 2.0, 1.0), Roots::One(-1.0));
//! assert_eq!(solve(1.0, 0.0, 1.0), Roots::None);
//!
//! // The same thing, as a method on the coefficient triple.
//! let linear = Coeffs::new(0.0, 2.0, -4.0);
//! assert_eq!(linear.roots(), Roots::One(2.0));
//!
//! // Fully degenerate cases are classified, not guessed at.
//! assert_eq!(solve(0.0, 0.0, 0.0), Roots::All);
//! assert_eq!(solve(0.0, 0.0, 5.0), Roots::None);
//! assert!(solve(f64::NAN, 1.0, 1.0).is_undefined());
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quadroots requires either the `std` or `libm` feature");

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod coeffs;
pub mod common;
#[cfg(feature = "libm")]
mod libm_polyfill;
mod roots;

pub use crate::coeffs::Coeffs;
pub use crate::roots::{solve, Roots};
