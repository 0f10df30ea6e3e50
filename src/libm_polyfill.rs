// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[allow(dead_code)]
pub(crate) trait FloatFuncs: Sized {
    fn abs(self) -> Self;
    fn copysign(self, sign: Self) -> Self;
    fn sqrt(self) -> Self;
}

impl FloatFuncs for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}
