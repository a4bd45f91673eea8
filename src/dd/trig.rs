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
//! Trigonometric family with range reduction: [`sin`], [`cos`], [`tan`],
//! [`sincos`], [`asin`], [`acos`], [`atan`], [`atan2`].
use crate::dd::classify::{copysign, isnan};
use crate::dd::constants::{INV_FACT, PI, PI_2};
use crate::dd::core::DDouble;
use crate::dd::limits::NAN;

/// Reduces `x` into a sector `{0,1,2,3}` and a residual `|r| ≤ π/4`, per
/// `n = round(x/(π/2))`, `sector = n mod 4`, `r = x - n*(π/2)`.
///
/// As the design notes record: a single `x/(π/2)` quotient loses precision
/// for `|x| ≳ 1e16`; this crate does not claim accuracy beyond that.
fn reduce(x: DDouble) -> (u8, DDouble) {
    let q = x / PI_2;
    let n = crate::dd::classify::round(q).to_f64();
    let sector = (((n as i64).rem_euclid(4)) as u8) & 3;
    let r = x - PI_2 * n;
    (sector, r)
}

/// Taylor series truncated at `z^27`: `sin(z) = Σ (-1)^k z^(2k+1)/(2k+1)!`,
/// valid for `|z| ≤ π/4`.
fn sin_kernel(z: DDouble) -> DDouble {
    let zz = z * z;
    let mut acc = DDouble::from_f64(0.0);
    for k in (1..=13).rev() {
        let coeff = INV_FACT[2 * k - 1];
        let signed = if k % 2 == 0 { coeff } else { -coeff };
        acc = acc * zz + signed;
    }
    z * (DDouble::from_f64(1.0) + zz * acc)
}

/// Taylor series truncated at `z^26`: `cos(z) = Σ (-1)^k z^(2k)/(2k)!`.
fn cos_kernel(z: DDouble) -> DDouble {
    let zz = z * z;
    let mut acc = DDouble::from_f64(0.0);
    for k in (1..=13).rev() {
        let coeff = INV_FACT[2 * k - 2];
        let signed = if k % 2 == 0 { coeff } else { -coeff };
        acc = acc * zz + signed;
    }
    DDouble::from_f64(1.0) + zz * acc
}

/// `sin = sin_kernel, cos_kernel, -sin_kernel, -cos_kernel` for
/// sector `0, 1, 2, 3`.
pub fn sin(x: DDouble) -> DDouble {
    if isnan(x) || !x.hi().is_finite() {
        return NAN;
    }
    let (sector, r) = reduce(x);
    match sector {
        0 => sin_kernel(r),
        1 => cos_kernel(r),
        2 => -sin_kernel(r),
        _ => -cos_kernel(r),
    }
}

/// `cos` is `sin` shifted by one sector.
pub fn cos(x: DDouble) -> DDouble {
    if isnan(x) || !x.hi().is_finite() {
        return NAN;
    }
    let (sector, r) = reduce(x);
    match sector {
        0 => cos_kernel(r),
        1 => -sin_kernel(r),
        2 => -cos_kernel(r),
        _ => sin_kernel(r),
    }
}

/// Computes `sin` and `cos` together, sharing one range reduction.
pub fn sincos(x: DDouble) -> (DDouble, DDouble) {
    if isnan(x) || !x.hi().is_finite() {
        return (NAN, NAN);
    }
    let (sector, r) = reduce(x);
    let s = sin_kernel(r);
    let c = cos_kernel(r);
    match sector {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// `sin(x) / cos(x)`.
pub fn tan(x: DDouble) -> DDouble {
    let (s, c) = sincos(x);
    s / c
}

/// Taylor step around the host-float result: `asin(x) ≈ y0 + (x - sin(y0)) /
/// cos(y0)`. `asin(±1) = ±π/2` exactly; outside `[-1, 1]`, `NaN`.
pub fn asin(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi() > 1.0 || x.hi() < -1.0 {
        return NAN;
    }
    if x.hi() == 1.0 {
        return PI_2;
    }
    if x.hi() == -1.0 {
        return -PI_2;
    }
    let y0 = x.hi().asin();
    let s0 = y0.sin();
    let c0 = y0.cos();
    let correction = (x - DDouble::from_f64(s0)) / c0;
    DDouble::from_f64(y0) + correction
}

/// `acos(x) = π/2 - asin(x)`; inherits `asin`'s domain handling, giving
/// `acos(1) = 0` and `acos(-1) = π` exactly.
pub fn acos(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    PI_2 - asin(x)
}

/// Taylor step around the host-float result for `|x| ≤ 1`; for `|x| > 1`,
/// `atan(x) = sign(x)*π/2 - atan(1/x)`.
pub fn atan(x: DDouble) -> DDouble {
    if isnan(x) {
        return NAN;
    }
    if x.hi().abs() > 1.0 {
        let sign_half_pi = copysign(PI_2, x.hi());
        return sign_half_pi - atan(1.0 / x);
    }
    let y0 = x.hi().atan();
    let s0 = y0.sin();
    let c0 = y0.cos();
    let t0 = s0 / c0;
    let correction = (x - DDouble::from_f64(t0)) * (c0 * c0);
    DDouble::from_f64(y0) + correction
}

/// NaN propagates; `atan2(0, 0) = 0`; `y = 0 ⇒ 0 or π` by sign of `x`;
/// `x = 0 ⇒ ±π/2`; otherwise `atan(y/x)` shifted by `copysign(π, y)` when
/// `x.hi() < 0`.
pub fn atan2(y: DDouble, x: DDouble) -> DDouble {
    if isnan(x) || isnan(y) {
        return NAN;
    }
    if y.hi() == 0.0 {
        return if x.hi() == 0.0 {
            DDouble::from_f64(0.0)
        } else if x.hi() > 0.0 {
            copysign(DDouble::from_f64(0.0), y.hi())
        } else {
            copysign(PI, y.hi())
        };
    }
    if x.hi() == 0.0 {
        return copysign(PI_2, y.hi());
    }
    let base = atan(y / x);
    if x.hi() < 0.0 {
        base + copysign(PI, y.hi())
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_cos_pythagorean_identity() {
        let mut x = -1_000_000.0f64;
        while x <= 1_000_000.0 {
            let v = DDouble::from_f64(x);
            let s = sin(v);
            let c = cos(v);
            let id = (s * s + c * c).to_f64() - 1.0;
            assert!(id.abs() < 5e-30, "x={x} id={id}");
            x += 137_173.0;
        }
    }

    #[test]
    fn sin_of_zero_is_zero() {
        assert_eq!(sin(DDouble::from_f64(0.0)).to_f64(), 0.0);
    }

    #[test]
    fn cos_of_zero_is_one() {
        assert!((cos(DDouble::from_f64(0.0)).to_f64() - 1.0).abs() < 1e-30);
    }

    #[test]
    fn sin_of_pi_half_is_one() {
        let s = sin(PI_2);
        assert!((s.to_f64() - 1.0).abs() < 1e-28);
    }

    #[test]
    fn sincos_matches_separate_calls() {
        let x = DDouble::from_f64(1.2345);
        let (s, c) = sincos(x);
        assert!((s.to_f64() - sin(x).to_f64()).abs() < 1e-28);
        assert!((c.to_f64() - cos(x).to_f64()).abs() < 1e-28);
    }

    #[test]
    fn asin_sin_round_trip_on_range() {
        let mut t = -1.5f64;
        while t <= 1.5 {
            let back = asin(sin(DDouble::from_f64(t)));
            let rel = (back.to_f64() - t).abs();
            assert!(rel < 1e-28, "t={t} back={}", back.to_f64());
            t += 0.1;
        }
    }

    #[test]
    fn asin_boundary_values() {
        assert!((asin(DDouble::from_f64(1.0)).to_f64() - PI_2.to_f64()).abs() < 1e-30);
        assert!((asin(DDouble::from_f64(-1.0)).to_f64() + PI_2.to_f64()).abs() < 1e-30);
        assert!(asin(DDouble::from_f64(1.5)).hi().is_nan());
    }

    #[test]
    fn acos_boundary_values() {
        assert_eq!(acos(DDouble::from_f64(1.0)).to_f64(), 0.0);
        assert!((acos(DDouble::from_f64(-1.0)).to_f64() - PI.to_f64()).abs() < 1e-30);
    }

    #[test]
    fn atan_of_large_argument_uses_reflection() {
        let a = atan(DDouble::from_f64(1e10));
        assert!((a.to_f64() - PI_2.to_f64()).abs() < 1e-9);
    }

    #[test]
    fn atan2_zero_zero_is_zero() {
        assert_eq!(
            atan2(DDouble::from_f64(0.0), DDouble::from_f64(0.0)).to_f64(),
            0.0
        );
    }

    #[test]
    fn atan2_matches_quadrants() {
        let p2 = PI_2.to_f64();
        assert!(
            (atan2(DDouble::from_f64(1.0), DDouble::from_f64(0.0)).to_f64() - p2).abs() < 1e-14
        );
        let three_quarter_pi = 3.0 * PI.to_f64() / 4.0;
        assert!(
            (atan2(DDouble::from_f64(1.0), DDouble::from_f64(-1.0)).to_f64() - three_quarter_pi)
                .abs()
                < 1e-14
        );
    }
}
