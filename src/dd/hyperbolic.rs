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
//! Hyperbolic family: [`sinh`], [`cosh`], [`tanh`], [`asinh`], [`acosh`],
//! [`atanh`].
use crate::dd::classify::{abs, copysign, isnan};
use crate::dd::constants::INV_FACT;
use crate::dd::core::{DDouble, reciprocal};
use crate::dd::expfam::{exp, log, log1p};
use crate::dd::limits::NAN;
use crate::dd::root::{hypot, sqrt};

/// Taylor series to `x^17`: `sinh(x) = x + x^3/3! + ... + x^17/17!`.
fn sinh_kernel(z: DDouble) -> DDouble {
    let zz = z * z;
    let mut acc = DDouble::from_f64(0.0);
    for k in (1..=8).rev() {
        acc = acc * zz + INV_FACT[2 * k - 1];
    }
    z * (DDouble::from_f64(1.0) + zz * acc)
}

/// Abramowitz & Stegun 4.5.70 continued fraction, depth 10:
/// `tanh(x) = x / (1 + x²/(3 + x²/(5 + ... + x²/19)))`.
fn tanh_kernel(x: DDouble) -> DDouble {
    let xx = x * x;
    let mut r = DDouble::from_f64(19.0);
    for &d in &[17.0, 15.0, 13.0, 11.0, 9.0, 7.0, 5.0, 3.0] {
        r = DDouble::from_f64(d) + xx / r;
    }
    r = DDouble::from_f64(1.0) + xx / r;
    x / r
}

/// `cosh(x) = ½(e^|x| + 1/e^|x|)`; the reciprocal term is only added while
/// `|x| < 36.5` (beyond that it cannot change the result).
pub fn cosh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    let ax = abs(x);
    let e = exp(ax);
    if ax.hi() < 36.5 {
        (e + reciprocal(e)) * 0.5
    } else {
        e * 0.5
    }
}

/// Taylor series for `|x| < 0.15`; otherwise `½(e^|x| - 1/e^|x|)` with the
/// sign of `x` restored at the end.
pub fn sinh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi().abs() < 0.15 {
        return sinh_kernel(x);
    }
    let ax = abs(x);
    let e = exp(ax);
    let magnitude = if ax.hi() < 36.5 {
        (e - reciprocal(e)) * 0.5
    } else {
        e * 0.5
    };
    copysign(magnitude, x.hi())
}

/// Continued-fraction kernel for `|x| < 0.2`; `copysign(1, x)` for
/// `|x| > 36.5`; the naive `sinh(x)/cosh(x)` in between.
pub fn tanh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi().abs() > 36.5 {
        return copysign(DDouble::from_f64(1.0), x.hi());
    }
    if x.hi().abs() < 0.2 {
        return tanh_kernel(x);
    }
    sinh(x) / cosh(x)
}

/// `acosh(x) = log(x + √(x² - 1))`, with the square root argument clipped to
/// `2x` once `x ≥ 1e16` to avoid squaring overflow. `x < 1` is out of domain
/// (`NaN`).
pub fn acosh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi() < 1.0 {
        return NAN;
    }
    if x.hi() == 1.0 {
        return DDouble::from_f64(0.0);
    }
    if x.hi() >= 1e16 {
        return log(x * 2.0);
    }
    log(x + sqrt(x * x - 1.0))
}

/// For `|x| < 1`, a Taylor step around the host `asinh(x.hi())` using
/// `cosh(y0) = hypot(1, sinh(y0))`. For larger `|x|`, the log-sum-exp form
/// with the same `2|x|` overflow clamp as [`acosh`].
pub fn asinh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi().abs() < 1.0 {
        let y0 = x.hi().asinh();
        let sh = y0.sinh();
        let ch = hypot(DDouble::from_f64(1.0), DDouble::from_f64(sh));
        let correction = (x - DDouble::from_f64(sh)) / ch;
        return DDouble::from_f64(y0) + correction;
    }
    let ax = abs(x);
    let magnitude = if ax.hi() >= 1e16 {
        log(ax * 2.0)
    } else {
        log(ax + sqrt(ax * ax + 1.0))
    };
    copysign(magnitude, x.hi())
}

/// `atanh(x) = ½ log1p(2x/(1-x))`; `±1` map to `±∞`; outside `[-1, 1]`,
/// `NaN`.
pub fn atanh(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi() == 1.0 {
        return DDouble::from_f64(f64::INFINITY);
    }
    if x.hi() == -1.0 {
        return DDouble::from_f64(f64::NEG_INFINITY);
    }
    if x.hi() > 1.0 || x.hi() < -1.0 {
        return NAN;
    }
    log1p((x * 2.0) / (1.0 - x)) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosh_sinh_identity() {
        for &v in &[0.01, 0.1, 0.5, 1.0, 5.0, 20.0, 40.0] {
            let x = DDouble::from_f64(v);
            let c = cosh(x);
            let s = sinh(x);
            let diff = (c * c - s * s).to_f64() - 1.0;
            assert!(diff.abs() < 1e-20, "v={v} diff={diff}");
        }
    }

    #[test]
    fn sinh_is_odd() {
        let x = DDouble::from_f64(0.3);
        assert!((sinh(x).to_f64() + sinh(-x).to_f64()).abs() < 1e-30);
    }

    #[test]
    fn cosh_is_even() {
        let x = DDouble::from_f64(0.3);
        assert!((cosh(x).to_f64() - cosh(-x).to_f64()).abs() < 1e-30);
    }

    #[test]
    fn tanh_saturates_for_large_argument() {
        assert!((tanh(DDouble::from_f64(50.0)).to_f64() - 1.0).abs() < 1e-30);
        assert!((tanh(DDouble::from_f64(-50.0)).to_f64() + 1.0).abs() < 1e-30);
    }

    #[test]
    fn tanh_matches_sinh_over_cosh() {
        let x = DDouble::from_f64(0.3);
        let t = tanh(x);
        let ratio = sinh(x).to_f64() / cosh(x).to_f64();
        assert!((t.to_f64() - ratio).abs() < 1e-14);
    }

    #[test]
    fn acosh_domain() {
        assert!(acosh(DDouble::from_f64(0.5)).hi().is_nan());
        assert_eq!(acosh(DDouble::from_f64(1.0)).to_f64(), 0.0);
    }

    #[test]
    fn acosh_cosh_round_trip() {
        for &v in &[1.5, 2.0, 10.0, 1e8] {
            let back = cosh(acosh(DDouble::from_f64(v)));
            let rel = (back.to_f64() - v).abs() / v;
            assert!(rel < 1e-13, "v={v} rel={rel}");
        }
    }

    #[test]
    fn asinh_sinh_round_trip() {
        for &v in &[-10.0, -0.5, 0.0, 0.5, 10.0, 1e8] {
            let back = sinh(asinh(DDouble::from_f64(v)));
            let rel = (back.to_f64() - v).abs() / v.abs().max(1.0);
            assert!(rel < 1e-13, "v={v} rel={rel}");
        }
    }

    #[test]
    fn atanh_boundary_values() {
        assert_eq!(atanh(DDouble::from_f64(1.0)).hi(), f64::INFINITY);
        assert_eq!(atanh(DDouble::from_f64(-1.0)).hi(), f64::NEG_INFINITY);
        assert!(atanh(DDouble::from_f64(1.5)).hi().is_nan());
    }

    #[test]
    fn atanh_tanh_round_trip() {
        for &v in &[-0.9, -0.3, 0.0, 0.3, 0.9] {
            let back = tanh(atanh(DDouble::from_f64(v)));
            assert!((back.to_f64() - v).abs() < 1e-14, "v={v}");
        }
    }
}
