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
//! Comparison, classification, rounding and scaling over [`DDouble`].
use crate::dd::core::DDouble;
use std::cmp::Ordering;
use std::num::FpCategory;

impl Eq for DDouble {}

impl PartialOrd for DDouble {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.hi().is_nan() || other.hi().is_nan() {
            return None;
        }
        match self.hi().partial_cmp(&other.hi()) {
            Some(Ordering::Equal) => self.lo().partial_cmp(&other.lo()),
            other => other,
        }
    }
}

/// True iff both `hi` parts are finite (i.e. not NaN/±∞). Consults `hi` only.
#[inline(always)]
pub fn isfinite(x: DDouble) -> bool {
    x.hi().is_finite()
}

/// Consults `hi` only.
#[inline(always)]
pub fn isinf(x: DDouble) -> bool {
    x.hi().is_infinite()
}

/// Consults `hi` only.
#[inline(always)]
pub fn isnan(x: DDouble) -> bool {
    x.hi().is_nan()
}

/// `hi == 0` implies the whole value is zero under the non-overlap invariant.
#[inline(always)]
pub fn iszero(x: DDouble) -> bool {
    x.hi() == 0.0
}

/// Denormalization in a double-double is a strange concept, since `lo` may be
/// a denormalized host float even while the whole number is "normal". This
/// requires both `hi` and `hi * eps` to be normal host floats, i.e. `lo` has
/// room to hold a full mantissa without itself being subnormal.
#[inline]
pub fn isnormal(x: DDouble) -> bool {
    const EPS: f64 = f64::EPSILON;
    (x.hi() * EPS).classify() == FpCategory::Normal
}

/// Consults `hi` only — this also correctly classifies zero.
#[inline(always)]
pub fn fpclassify(x: DDouble) -> FpCategory {
    x.hi().classify()
}

#[inline(always)]
pub fn signbit(x: DDouble) -> bool {
    x.hi().is_sign_negative()
}

/// Flips the sign of both hunks together iff `signbit(mag) != signbit(sgn)`;
/// never applies `copysign` to `lo` independently, because `sign(lo)` may
/// legitimately differ from `sign(hi)`.
#[inline]
pub fn copysign(mag: DDouble, sgn: f64) -> DDouble {
    if signbit(mag) != sgn.is_sign_negative() {
        -mag
    } else {
        mag
    }
}

#[inline(always)]
pub fn copysign_dd(mag: DDouble, sgn: DDouble) -> DDouble {
    copysign(mag, sgn.hi())
}

#[inline(always)]
pub fn copysign_f64(mag: f64, sgn: DDouble) -> DDouble {
    DDouble::from_f64(mag.copysign(sgn.hi()))
}

#[inline(always)]
pub fn abs(x: DDouble) -> DDouble {
    if signbit(x) { -x } else { x }
}

/// Alias kept for parity with the host `fabs` naming used throughout C-family
/// math libraries.
#[inline(always)]
pub fn fabs(x: DDouble) -> DDouble {
    abs(x)
}

#[inline(always)]
pub fn swap(x: &mut DDouble, y: &mut DDouble) {
    std::mem::swap(x, y);
}

/// Scales both hunks by `2ⁿ`.
#[inline]
pub fn ldexp(a: DDouble, n: i32) -> DDouble {
    DDouble::new(libm_ldexp(a.hi(), n), libm_ldexp(a.lo(), n))
}

/// Alias for `ldexp`, matching the host-float naming convention.
#[inline(always)]
pub fn scalbn(a: DDouble, n: i32) -> DDouble {
    ldexp(a, n)
}

/// Unbiased binary exponent of `hi`, as an integer.
#[inline]
pub fn ilogb(a: DDouble) -> i32 {
    ((a.hi().to_bits() >> 52) & 0x7ff) as i32 - 0x3ff
}

/// Unbiased binary exponent of `hi`, as a `DDouble` (matches `logb`'s
/// host-float return type of `f64`, promoted here for interface symmetry).
#[inline]
pub fn logb(a: DDouble) -> f64 {
    ilogb(a) as f64
}

#[inline(always)]
fn libm_ldexp(x: f64, n: i32) -> f64 {
    x * 2f64.powi(n)
}

/// Truncates `hi`; if `hi` was already integral, truncates `lo` toward the
/// value that rounds the compound number toward zero, then re-normalizes.
#[inline]
pub fn trunc(x: DDouble) -> DDouble {
    let hi_t = x.hi().trunc();
    if hi_t == x.hi() {
        let lo_t = if x.hi().is_sign_negative() {
            x.lo().ceil()
        } else {
            x.lo().floor()
        };
        x.add_small_f64(lo_t - x.lo())
    } else {
        DDouble::from_f64(hi_t).add_small_f64(0.0)
    }
}

#[inline]
pub fn ceil(x: DDouble) -> DDouble {
    let hi_c = x.hi().ceil();
    if hi_c == x.hi() {
        let lo_c = x.lo().ceil();
        x.add_small_f64(lo_c - x.lo())
    } else {
        DDouble::from_f64(hi_c)
    }
}

#[inline]
pub fn floor(x: DDouble) -> DDouble {
    let hi_f = x.hi().floor();
    if hi_f == x.hi() {
        let lo_f = x.lo().floor();
        x.add_small_f64(lo_f - x.lo())
    } else {
        DDouble::from_f64(hi_f)
    }
}

#[inline]
pub fn round(x: DDouble) -> DDouble {
    trunc(x + copysign(DDouble::from_f64(0.5), x.hi()))
}

/// One ULP step on `lo` toward `y`, re-normalizing through `fast_two_sum`.
pub fn nextafter(x: DDouble, y: DDouble) -> DDouble {
    if isnan(x) || isnan(y) {
        return DDouble::from_f64(f64::NAN);
    }
    if x == y {
        return y;
    }
    let stepped_lo = if y > x {
        next_up(x.lo())
    } else {
        next_down(x.lo())
    };
    x.add_small_f64(stepped_lo - x.lo())
}

fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    let next = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(next)
}

fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return x;
    }
    if x == 0.0 {
        return -f64::from_bits(1);
    }
    let bits = x.to_bits();
    let next = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(next)
}

/// Returns `(trunc(x), x - trunc(x))`.
#[inline]
pub fn modf(x: DDouble) -> (DDouble, DDouble) {
    let i = trunc(x);
    (i, x.add_small(-i))
}

/// Propagates the non-NaN operand; if both are NaN, returns NaN.
#[inline]
pub fn fmin(a: DDouble, b: DDouble) -> DDouble {
    if a <= b || isnan(b) { a } else { b }
}

/// Propagates the non-NaN operand; if both are NaN, returns NaN.
#[inline]
pub fn fmax(a: DDouble, b: DDouble) -> DDouble {
    if a <= b || isnan(a) { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic_ordering() {
        let a = DDouble::new(1.0, 1e-20);
        let b = DDouble::new(1.0, 2e-20);
        assert!(a < b);
        let c = DDouble::new(2.0, -1.0);
        assert!(a < c);
    }

    #[test]
    fn trunc_across_integer_boundary() {
        let x = DDouble::new(2f64.powi(61), 0.5);
        let r = round(x);
        assert_eq!(r, DDouble::new(2f64.powi(61), 1.0));
        let nx = -x;
        let rn = round(nx);
        assert_eq!(rn, DDouble::new(-(2f64.powi(61)), -1.0));
    }

    #[test]
    fn idempotent_rounding() {
        let x = DDouble::new(3.75, 1e-20);
        assert_eq!(trunc(trunc(x)), trunc(x));
        assert_eq!(ceil(ceil(x)), ceil(x));
        assert_eq!(floor(floor(x)), floor(x));
        assert_eq!(round(round(x)), round(x));
    }

    #[test]
    fn classification() {
        assert!(isfinite(DDouble::from_f64(1.0)));
        assert!(isinf(DDouble::from_f64(f64::INFINITY)));
        assert!(isnan(DDouble::from_f64(f64::NAN)));
        assert!(iszero(DDouble::from_f64(0.0)));
        assert!(isnormal(DDouble::from_f64(1.0)));
    }

    #[test]
    fn nextafter_toward_infinity_hits_max() {
        let max = crate::dd::limits::MAX;
        let beyond = nextafter(max, DDouble::from_f64(f64::INFINITY));
        assert!(beyond.hi() >= max.hi());
    }

    #[test]
    fn modf_splits_integer_and_fraction() {
        let x = DDouble::new(3.0, 0.5);
        let (i, f) = modf(x);
        assert_eq!(i, DDouble::from_f64(3.0));
        assert!((f.to_f64() - 0.5).abs() < 1e-30);
    }
}
