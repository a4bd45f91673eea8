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
//! Root and hypotenuse kernels: [`sqrt`], [`hypot`], [`trig_complement`].
use crate::dd::classify::isnan;
use crate::dd::core::{DDouble, ExDouble};
use crate::math::common::f_fmla;

/// One Newton-Raphson step on `1/√a`. For `a ≤ 0` or non-finite `a`, falls
/// back to the host `sqrt` (giving `NaN` for negative `a`, `+∞` for `+∞`,
/// `NaN` for `-∞`). Error ≤ 1u².
#[inline]
pub fn sqrt(a: DDouble) -> DDouble {
    if a.hi() <= 0.0 || !a.hi().is_finite() {
        return DDouble::from_f64(a.hi().sqrt());
    }
    let y0 = a.hi().sqrt();
    let delta = (0.5 / y0) * (f_fmla(-y0, y0, a.hi()) + a.lo());
    let (s, t) = crate::dd::eft::fast_two_sum(y0, delta);
    DDouble::new(s, t)
}

/// NaN if either operand is NaN (resolves the spec's Open Question in favor
/// of the draft that rejects NaN outright, matching the host `hypot`'s own
/// IEEE-754-2008 contract rather than falling through to the naive formula).
/// Scales by a fixed power of two around over/underflow of the naive
/// `x*x + y*y`, then computes `√((x*x).add_small(y*y))`.
pub fn hypot(x: DDouble, y: DDouble) -> DDouble {
    if isnan(x) || isnan(y) {
        return crate::dd::limits::NAN;
    }
    let (mut x, mut y) = if crate::dd::eft::greater_in_magnitude(x.hi(), y.hi()) {
        (x, y)
    } else {
        (y, x)
    };
    x = crate::dd::classify::abs(x);
    y = crate::dd::classify::abs(y);

    if isnan(x) || isnan(y) {
        return crate::dd::limits::NAN;
    }
    if !x.hi().is_finite() || !y.hi().is_finite() {
        return DDouble::from_f64(f64::INFINITY);
    }
    if x.hi() == 0.0 {
        return DDouble::from_f64(0.0);
    }

    // `E` here is the host float's max binary exponent (1023); scale by
    // `2^(-E/2)` before squaring when `x` could overflow, rescale after.
    const HALF_MAX_EXP: i32 = 511;
    let xe = crate::dd::classify::ilogb(x);
    if xe > 510 {
        let small = crate::dd::core::PowerOfTwo::from_exponent(-HALF_MAX_EXP);
        let large = crate::dd::core::PowerOfTwo::from_exponent(HALF_MAX_EXP);
        let xs = x * small;
        let ys = y * small;
        let r = sqrt((xs * xs).add_small(ys * ys));
        return r * large;
    }
    if xe < -510 {
        let small = crate::dd::core::PowerOfTwo::from_exponent(-HALF_MAX_EXP);
        let large = crate::dd::core::PowerOfTwo::from_exponent(HALF_MAX_EXP);
        let xs = x * large;
        let ys = y * large;
        let r = sqrt((xs * xs).add_small(ys * ys));
        return r * small;
    }

    let xx = ExDouble(x.hi()) * x;
    let yy = ExDouble(y.hi()) * y;
    sqrt(xx.add_small(yy))
}

/// `√(1 - x²)`, accurate near `|x| ≈ 1` where the naive formula cancels
/// catastrophically. Outside `|x| ≤ 0.5` the direct formula already has
/// enough headroom; inside, expand around `x.hi()`.
pub fn trig_complement(x: DDouble) -> DDouble {
    if x.hi().abs() > 0.5 {
        return sqrt(1.0 - x * x);
    }
    let xh = x.hi();
    let y0 = (1.0 - xh * xh).sqrt();
    let dy = -xh * x.lo() / y0;
    DDouble::from_f64(y0).add_small_f64(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(sqrt(DDouble::from_f64(-1.0)).hi().is_nan());
    }

    #[test]
    fn sqrt_of_positive_infinity_is_infinity() {
        assert_eq!(sqrt(DDouble::from_f64(f64::INFINITY)).hi(), f64::INFINITY);
    }

    #[test]
    fn sqrt_of_negative_infinity_is_nan() {
        assert!(sqrt(DDouble::from_f64(f64::NEG_INFINITY)).hi().is_nan());
    }

    #[test]
    fn sqrt_two_squared_is_two() {
        let s = sqrt(DDouble::from_f64(2.0));
        let sq = s * s;
        assert!((sq.to_f64() - 2.0).abs() < 1e-31);
    }

    #[test]
    fn hypot_pythagorean_triple() {
        let h = hypot(DDouble::from_f64(3.0), DDouble::from_f64(4.0));
        assert!((h.to_f64() - 5.0).abs() < 1e-28);
    }

    #[test]
    fn hypot_propagates_nan() {
        assert!(hypot(DDouble::from_f64(f64::NAN), DDouble::from_f64(1.0)).hi().is_nan());
    }

    #[test]
    fn hypot_handles_large_magnitudes_without_overflow() {
        let h = hypot(DDouble::from_f64(1e300), DDouble::from_f64(1e300));
        assert!(h.to_f64().is_finite());
        assert!((h.to_f64() / (1e300 * 2f64.sqrt()) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn trig_complement_near_one() {
        let x = DDouble::from_f64(1.0) - DDouble::new(0.0, 1e-20);
        let y = trig_complement(x);
        assert!(y.to_f64() >= 0.0);
        assert!(y.to_f64() < 1e-8);
    }

    #[test]
    fn trig_complement_matches_naive_away_from_one() {
        let x = DDouble::from_f64(0.3);
        let y = trig_complement(x);
        assert!((y.to_f64() - (1.0 - 0.09f64).sqrt()).abs() < 1e-14);
    }
}
