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
//! Core double-double type and its arithmetic, built entirely out of the
//! error-free transformations in [`crate::dd::eft`].
//!
//! Algorithm numbers in comments refer to M. Joldes et al., ACM Trans. Math.
//! Softw. 44, 1-27 (2018).
use crate::dd::eft::{fast_two_sum, is_power_of_two, two_prod, two_sum};
use crate::error::DDoubleError;
use crate::math::common::f_fmla;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A value wrapping a single host float, marking it for promotion into
/// double-double arithmetic without paying for a full [`DDouble`] operation.
///
/// `ExDouble` is never stored; it exists only at call sites where an operand
/// is known, by construction, to be the larger-magnitude one (its
/// [`ExDouble::add_small`] skips the general `two_sum`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExDouble(pub f64);

impl ExDouble {
    #[inline(always)]
    pub const fn new(x: f64) -> Self {
        ExDouble(x)
    }

    /// True iff `self`'s exponent is at least that of `b` — the precondition
    /// `add_small` requires of its argument.
    #[inline(always)]
    pub(crate) const fn is_small(self, b: f64) -> bool {
        const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
        (self.0.to_bits() & EXP_MASK) >= (b.to_bits() & EXP_MASK)
    }

    /// Add a value known to be smaller in magnitude than `self`.
    /// Algorithm 1: 3 flops. Caller owes the precondition.
    #[inline(always)]
    pub(crate) const fn add_small(self, b: f64) -> DDouble {
        let (s, t) = fast_two_sum(self.0, b);
        DDouble { hi: s, lo: t }
    }
}

impl Neg for ExDouble {
    type Output = ExDouble;
    #[inline(always)]
    fn neg(self) -> ExDouble {
        ExDouble(-self.0)
    }
}

impl Add<ExDouble> for ExDouble {
    type Output = DDouble;
    /// Algorithm 2: 6 flops.
    #[inline(always)]
    fn add(self, rhs: ExDouble) -> DDouble {
        let (s, t) = two_sum(self.0, rhs.0);
        DDouble { hi: s, lo: t }
    }
}

impl Add<f64> for ExDouble {
    type Output = DDouble;
    #[inline(always)]
    fn add(self, rhs: f64) -> DDouble {
        self + ExDouble(rhs)
    }
}

impl Mul<ExDouble> for ExDouble {
    type Output = DDouble;
    /// Algorithm 3: 2 flops, requires a correctly rounded FMA.
    #[inline(always)]
    fn mul(self, rhs: ExDouble) -> DDouble {
        let (p, r) = two_prod(self.0, rhs.0);
        DDouble { hi: p, lo: r }
    }
}

impl Mul<f64> for ExDouble {
    type Output = DDouble;
    #[inline(always)]
    fn mul(self, rhs: f64) -> DDouble {
        self * ExDouble(rhs)
    }
}

/// One Newton step from `1/y` for the `ExDouble` special case (the low part
/// of the reciprocand is zero). Part of Algorithm 18.
#[inline(always)]
pub(crate) fn reciprocal_ex(y: ExDouble) -> DDouble {
    let th = 1.0 / y.0;
    let rh = f_fmla(-y.0, th, 1.0);
    let delta = ExDouble(rh) * th;
    delta + th
}

/// A value wrapping a host float the caller asserts is `0` or `±2ⁿ`.
/// Multiplying/dividing a [`DDouble`] by a `PowerOfTwo` is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerOfTwo(f64);

impl PowerOfTwo {
    /// Validates that `x` is `0` or `±2ⁿ`. This is the only fallible
    /// constructor path in the crate's core.
    pub fn new(x: f64) -> Result<Self, DDoubleError> {
        if x == 0.0 || is_power_of_two(x) {
            Ok(PowerOfTwo(x))
        } else {
            Err(DDoubleError::NotPowerOfTwo)
        }
    }

    /// Builds a `PowerOfTwo` from a caller-controlled exponent via
    /// `2^n`, which is exact by construction and needs no runtime check.
    #[inline(always)]
    pub const fn from_exponent(n: i32) -> Self {
        PowerOfTwo(f64::from_bits((n.wrapping_add(0x3ff) as u64) << 52))
    }

    #[inline(always)]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<PowerOfTwo> for PowerOfTwo {
    type Output = PowerOfTwo;
    #[inline(always)]
    fn mul(self, rhs: PowerOfTwo) -> PowerOfTwo {
        PowerOfTwo(self.0 * rhs.0)
    }
}

impl Div<PowerOfTwo> for PowerOfTwo {
    type Output = PowerOfTwo;
    #[inline(always)]
    fn div(self, rhs: PowerOfTwo) -> PowerOfTwo {
        PowerOfTwo(self.0 / rhs.0)
    }
}

/// A real number represented as the unevaluated sum `hi + lo` of two host
/// floats, satisfying the non-overlap invariant `|lo| ≤ ½·ulp(hi)` (or
/// `hi = lo = 0`). Roughly doubles the mantissa precision of `f64` while
/// keeping its exponent range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DDouble {
    pub(crate) hi: f64,
    pub(crate) lo: f64,
}

impl DDouble {
    /// Builds a `DDouble` from an exact host float (`lo = 0`).
    #[inline(always)]
    pub const fn from_f64(x: f64) -> Self {
        DDouble { hi: x, lo: 0.0 }
    }

    /// Builds a `DDouble` directly from its two hunks.
    ///
    /// The caller must ensure `|lo| ≤ ½·ulp(hi)` (or both are zero); this
    /// constructor does not renormalize.
    #[inline(always)]
    pub const fn new(hi: f64, lo: f64) -> Self {
        DDouble { hi, lo }
    }

    #[inline(always)]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    #[inline(always)]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    #[inline(always)]
    pub const fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Add a value known to be smaller in magnitude than `self`.
    /// Algorithm 4 modified: 7 flops, error 2u².
    #[inline(always)]
    pub fn add_small_f64(self, y: f64) -> DDouble {
        let s = ExDouble(self.hi).add_small(y);
        let v = self.lo + s.lo;
        ExDouble(s.hi).add_small(v)
    }

    /// Add a `DDouble` known to be smaller in magnitude than `self`.
    /// Algorithm 6 modified: 17 flops, error 3u² + 13u³.
    #[inline(always)]
    pub fn add_small(self, y: DDouble) -> DDouble {
        let s = ExDouble(self.hi).add_small(y.hi);
        let t = ExDouble(self.lo) + y.lo;
        let c = s.lo + t.hi;
        let v = ExDouble(s.hi).add_small(c);
        let w = t.lo + v.lo;
        ExDouble(v.hi).add_small(w)
    }
}

impl Neg for DDouble {
    type Output = DDouble;
    #[inline(always)]
    fn neg(self) -> DDouble {
        DDouble {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add<f64> for DDouble {
    type Output = DDouble;
    /// Algorithm 4: 10 flops, error 2u².
    #[inline(always)]
    fn add(self, y: f64) -> DDouble {
        let s = ExDouble(self.hi) + y;
        let v = self.lo + s.lo;
        ExDouble(s.hi).add_small(v)
    }
}

impl Add<DDouble> for f64 {
    type Output = DDouble;
    #[inline(always)]
    fn add(self, y: DDouble) -> DDouble {
        y + self
    }
}

impl Add<DDouble> for DDouble {
    type Output = DDouble;
    /// Algorithm 6: 20 flops, error 3u² + 13u³.
    #[inline(always)]
    fn add(self, y: DDouble) -> DDouble {
        let s = ExDouble(self.hi) + y.hi;
        let t = ExDouble(self.lo) + y.lo;
        let c = s.lo + t.hi;
        let v = ExDouble(s.hi).add_small(c);
        let w = t.lo + v.lo;
        ExDouble(v.hi).add_small(w)
    }
}

impl Sub<f64> for DDouble {
    type Output = DDouble;
    #[inline(always)]
    fn sub(self, y: f64) -> DDouble {
        self + (-y)
    }
}

impl Sub<DDouble> for f64 {
    type Output = DDouble;
    #[inline(always)]
    fn sub(self, y: DDouble) -> DDouble {
        self + (-y)
    }
}

impl Sub<DDouble> for DDouble {
    type Output = DDouble;
    #[inline(always)]
    fn sub(self, y: DDouble) -> DDouble {
        self + (-y)
    }
}

impl Mul<f64> for DDouble {
    type Output = DDouble;
    /// Algorithm 9: 6 flops, error 2u².
    #[inline(always)]
    fn mul(self, y: f64) -> DDouble {
        let c = ExDouble(self.hi) * y;
        let cl3 = f_fmla(self.lo, y, c.lo);
        ExDouble(c.hi).add_small(cl3)
    }
}

impl Mul<DDouble> for f64 {
    type Output = DDouble;
    #[inline(always)]
    fn mul(self, y: DDouble) -> DDouble {
        y * self
    }
}

impl Mul<DDouble> for DDouble {
    type Output = DDouble;
    /// Algorithm 12: 9 flops, error 4u².
    #[inline(always)]
    fn mul(self, y: DDouble) -> DDouble {
        let c = ExDouble(self.hi) * y.hi;
        let tl0 = self.lo * y.lo;
        let tl1 = f_fmla(self.hi, y.lo, tl0);
        let cl2 = f_fmla(self.lo, y.hi, tl1);
        let cl3 = c.lo + cl2;
        ExDouble(c.hi).add_small(cl3)
    }
}

impl Div<f64> for DDouble {
    type Output = DDouble;
    /// Algorithm 15: 10 flops, error 3u².
    #[inline(always)]
    fn div(self, y: f64) -> DDouble {
        let th = ExDouble(self.hi / y);
        let pi = th * y;
        let delta_h = self.hi - pi.hi;
        let delta_tee = delta_h - pi.lo;
        let delta = delta_tee + self.lo;
        let tl = delta / y;
        th.add_small(tl)
    }
}

impl Div<DDouble> for f64 {
    type Output = DDouble;
    /// Algorithm 18: `x * reciprocal(y)`.
    #[inline(always)]
    fn div(self, y: DDouble) -> DDouble {
        self * reciprocal(y)
    }
}

impl Div<DDouble> for DDouble {
    type Output = DDouble;
    /// Algorithm 18: 31 flops, analytic bound 10u² (6u² largest observed).
    #[inline(always)]
    fn div(self, y: DDouble) -> DDouble {
        self * reciprocal(y)
    }
}

/// One Newton step from `1/y.hi()`. Part of Algorithm 18: 22 flops, error
/// 2.3u².
#[inline(always)]
pub fn reciprocal(y: DDouble) -> DDouble {
    let th = 1.0 / y.hi;
    let rh = f_fmla(-y.hi, th, 1.0);
    let rl = -y.lo * th;
    let e = ExDouble(rh).add_small(rl);
    let delta = e * th;
    delta + th
}

impl Mul<PowerOfTwo> for DDouble {
    type Output = DDouble;
    #[inline(always)]
    fn mul(self, y: PowerOfTwo) -> DDouble {
        DDouble::new(self.hi * y.value(), self.lo * y.value())
    }
}

impl Mul<DDouble> for PowerOfTwo {
    type Output = DDouble;
    #[inline(always)]
    fn mul(self, y: DDouble) -> DDouble {
        y * self
    }
}

impl Div<PowerOfTwo> for DDouble {
    type Output = DDouble;
    #[inline(always)]
    fn div(self, y: PowerOfTwo) -> DDouble {
        DDouble::new(self.hi / y.value(), self.lo / y.value())
    }
}

impl From<f64> for DDouble {
    #[inline(always)]
    fn from(x: f64) -> DDouble {
        DDouble::from_f64(x)
    }
}

impl std::ops::AddAssign<f64> for DDouble {
    #[inline(always)]
    fn add_assign(&mut self, y: f64) {
        *self = *self + y;
    }
}
impl std::ops::AddAssign<DDouble> for DDouble {
    #[inline(always)]
    fn add_assign(&mut self, y: DDouble) {
        *self = *self + y;
    }
}
impl std::ops::SubAssign<f64> for DDouble {
    #[inline(always)]
    fn sub_assign(&mut self, y: f64) {
        *self = *self - y;
    }
}
impl std::ops::SubAssign<DDouble> for DDouble {
    #[inline(always)]
    fn sub_assign(&mut self, y: DDouble) {
        *self = *self - y;
    }
}
impl std::ops::MulAssign<f64> for DDouble {
    #[inline(always)]
    fn mul_assign(&mut self, y: f64) {
        *self = *self * y;
    }
}
impl std::ops::MulAssign<DDouble> for DDouble {
    #[inline(always)]
    fn mul_assign(&mut self, y: DDouble) {
        *self = *self * y;
    }
}
impl std::ops::DivAssign<f64> for DDouble {
    #[inline(always)]
    fn div_assign(&mut self, y: f64) {
        *self = *self / y;
    }
}
impl std::ops::DivAssign<DDouble> for DDouble {
    #[inline(always)]
    fn div_assign(&mut self, y: DDouble) {
        *self = *self / y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_small_agrees_with_full_add() {
        let x = DDouble::new(1e10, 1e-6);
        let y = DDouble::new(1.0, 1e-20);
        let a = x + y;
        let b = x.add_small(y);
        assert_eq!(a.hi, b.hi);
        assert!((a.lo - b.lo).abs() < 1e-25);
    }

    #[test]
    fn reciprocal_of_integer() {
        let x = DDouble::from_f64(137.0);
        let r = reciprocal(x);
        let product = x * r;
        assert!((product.to_f64() - 1.0).abs() < 1e-30);
    }

    #[test]
    fn division_stress_literal() {
        let x = DDouble::new(4528288502329187.0, 1125391118633487.0 * 2f64.powi(-51));
        let y = DDouble::new(4522593432466394.0, -9006008290016505.0 * 2f64.powi(-54));
        let q = x / y;
        assert!(q.to_f64().is_finite());
    }

    #[test]
    fn product_stress_literal() {
        let x = DDouble::new(
            2251799825991851.0 * 2f64.powi(-51),
            9007199203085987.0 * 2f64.powi(-106),
        );
        let y = DDouble::new(
            4503599627471459.0 * 2f64.powi(-52),
            4503599627284651.0 * 2f64.powi(-105),
        );
        let p = x * y;
        assert!(p.to_f64().is_finite());
    }

    #[test]
    fn power_of_two_scaling_is_exact() {
        let x = DDouble::new(3.0, 1e-17);
        let p = PowerOfTwo::from_exponent(4);
        let y = x * p;
        assert_eq!(y.hi, x.hi * 16.0);
        assert_eq!(y.lo, x.lo * 16.0);
    }

    #[test]
    fn power_of_two_rejects_non_power() {
        assert!(PowerOfTwo::new(3.0).is_err());
        assert!(PowerOfTwo::new(8.0).is_ok());
        assert!(PowerOfTwo::new(0.0).is_ok());
    }

    #[test]
    fn associativity_bounded() {
        let u2 = 2f64.powi(-106);
        let x = DDouble::from_f64(1.0 / 3.0);
        let y = DDouble::from_f64(1.0 / 7.0);
        let z = DDouble::from_f64(1.0 / 11.0);
        let left = (x + y) + z;
        let right = x + (y + z);
        let diff = (left - right).to_f64().abs();
        assert!(diff <= 5.0 * u2 * left.to_f64().abs().max(1.0));
    }
}
