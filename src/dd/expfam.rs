/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Exponential and logarithm family: [`exp`], [`expm1`], [`log`], [`log1p`],
//! and integer [`pow`].
use crate::dd::classify::isnan;
use crate::dd::constants::{EXP_HALVES, EXP_SIXTEENS};
use crate::dd::core::{DDouble, reciprocal};
use crate::dd::limits::NAN;
use crate::math::common::rintk;

/// `exp(x) ≈ 709.78271289338397`, the host `f64` overflow threshold.
const EXP_OVERFLOW: f64 = 709.782712893384;
/// Below this, `exp(x)` underflows the smallest denormal `DDouble`.
const EXP_UNDERFLOW: f64 = -745.1332191019411;

/// Decomposes `x = n16*16 + r/2 + z` with `n16`, `r` integers and `|z| ≤ 1/4`,
/// then assembles `exp(x)` from the two precomputed tables `EXP_SIXTEENS` and
/// `EXP_HALVES` and the continued-fraction kernel on the residual `z`.
pub fn exp(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi() >= EXP_OVERFLOW {
        return DDouble::from_f64(f64::INFINITY);
    }
    if x.hi() <= EXP_UNDERFLOW {
        return DDouble::from_f64(0.0);
    }

    let y = rintk(2.0 * x.hi()) as i64;
    let yf = y as f64;
    let z = x - DDouble::new(yf, 0.0) * 0.5;

    let n16 = rintk(yf / 32.0) as i64;
    let r = y - n16 * 32;

    let mut result = DDouble::from_f64(1.0) + expm1_kernel(z);

    if r != 0 {
        let half = EXP_HALVES[(r.unsigned_abs() - 1) as usize];
        result = if r > 0 { result * half } else { result / half };
    }
    if n16 != 0 {
        let sixteen = EXP_SIXTEENS[(n16.unsigned_abs() - 1) as usize];
        result = if n16 > 0 {
            result * sixteen
        } else {
            result / sixteen
        };
    }
    result
}

/// Continued-fraction kernel for `exp(z) - 1`, `|z| < 0.3`, error ≤ 2u².
fn expm1_kernel(z: DDouble) -> DDouble {
    let xsq = z * z;
    let mut r = xsq / 34.0 + 30.0;
    for &c in &[26.0, 22.0, 18.0, 14.0, 10.0, 6.0] {
        r = xsq / r + c;
    }
    r = (xsq / r) - z + 2.0;
    (z + z) / r
}

/// `exp(x) - 1`. Uses the continued-fraction kernel directly for `|x| < 1/4`
/// (where the naive `exp(x) - 1` would cancel), otherwise falls back to
/// `exp(x) - 1`, short-circuiting to plain `exp(x)` once `x` is large enough
/// that subtracting 1 cannot change any representable bit.
pub fn expm1(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi().abs() < 0.25 {
        return expm1_kernel(x);
    }
    if x.hi() > 72.0 {
        return exp(x);
    }
    exp(x) - 1.0
}

/// One Newton step using `log(x) - log(x0) ≈ 2(x - x0)/(x + x0)` with
/// `x0 = exp(log(x.hi()))`.
pub fn log(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    let l0 = x.hi().ln();
    if !l0.is_finite() {
        return DDouble::from_f64(l0);
    }
    let x0 = exp(DDouble::from_f64(l0));
    let diff = x - x0;
    let correction = (diff + diff) / (x + x0);
    DDouble::from_f64(l0) + correction
}

/// One Newton step using `log1p(x) - log1p(x0) ≈ 2(x - x0)/(2 + x + x0)`
/// with `x0 = expm1(log1p(x.hi()))`.
pub fn log1p(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    let l0 = x.hi().ln_1p();
    if !l0.is_finite() {
        return DDouble::from_f64(l0);
    }
    let x0 = expm1(DDouble::from_f64(l0));
    let diff = x - x0;
    let correction = (diff + diff) / (DDouble::from_f64(2.0) + x + x0);
    DDouble::from_f64(l0) + correction
}

/// Signed repeated squaring. `pow(x, 0) == 1`; negative `n` inverts the
/// result of `pow(x, -n)`.
pub fn pow(x: DDouble, n: i32) -> DDouble {
    if n == 0 {
        return DDouble::from_f64(1.0);
    }
    let neg = n < 0;
    let mut remaining = (n as i64).unsigned_abs();
    let mut base = x;
    let mut result = DDouble::from_f64(1.0);
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result * base;
        }
        base = base * base;
        remaining >>= 1;
    }
    if neg { reciprocal(result) } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_of_zero_is_one() {
        assert!((exp(DDouble::from_f64(0.0)).to_f64() - 1.0).abs() < 1e-30);
    }

    #[test]
    fn exp_of_one_matches_e() {
        let e = exp(DDouble::from_f64(1.0));
        assert!((e.to_f64() - std::f64::consts::E).abs() < 1e-15);
    }

    #[test]
    fn exp_overflows_to_infinity() {
        assert_eq!(exp(DDouble::from_f64(800.0)).hi(), f64::INFINITY);
    }

    #[test]
    fn exp_underflows_to_zero() {
        assert_eq!(exp(DDouble::from_f64(-800.0)).to_f64(), 0.0);
    }

    #[test]
    fn exp_log_round_trip() {
        for &v in &[0.001, 0.5, 1.0, 2.0, 10.0, 100.0, 300.0] {
            let x = DDouble::from_f64(v);
            let back = log(exp(x));
            let rel = (back.to_f64() - v).abs() / v.abs().max(1.0);
            assert!(rel < 3e-30, "v={v} rel={rel}");
        }
    }

    #[test]
    fn log_exp_round_trip() {
        for &v in &[0.001, 0.5, 1.0, 2.0, 10.0, 100.0] {
            let x = DDouble::from_f64(v);
            let back = exp(log(x));
            let rel = (back.to_f64() - v).abs() / v.abs().max(1.0);
            assert!(rel < 3e-30, "v={v} rel={rel}");
        }
    }

    #[test]
    fn log_of_zero_is_neg_infinity() {
        assert_eq!(log(DDouble::from_f64(0.0)).hi(), f64::NEG_INFINITY);
    }

    #[test]
    fn log_of_negative_is_nan() {
        assert!(log(DDouble::from_f64(-1.0)).hi().is_nan());
    }

    #[test]
    fn log1p_matches_log_of_one_plus() {
        let x = DDouble::from_f64(0.001);
        let a = log1p(x);
        let b = log(DDouble::from_f64(1.0) + x);
        assert!((a.to_f64() - b.to_f64()).abs() < 1e-20);
    }

    #[test]
    fn log1p_of_negative_one_is_neg_infinity() {
        assert_eq!(log1p(DDouble::from_f64(-1.0)).hi(), f64::NEG_INFINITY);
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        let x = DDouble::from_f64(5.0);
        assert_eq!(pow(x, 0).to_f64(), 1.0);
    }

    #[test]
    fn pow_negative_exponent_inverts() {
        let x = DDouble::from_f64(2.0);
        let p = pow(x, 10);
        let n = pow(x, -10);
        let product = p * n;
        assert!((product.to_f64() - 1.0).abs() < 1e-28);
    }

    #[test]
    fn pow_round_trip() {
        let x = DDouble::from_f64(1.5);
        for n in [1, 2, 3, 5, 7, 20] {
            let prod = pow(x, n) * pow(x, -n);
            assert!((prod.to_f64() - 1.0).abs() < 1e-27);
        }
    }
}
