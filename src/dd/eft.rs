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
//! Host-float helpers and error-free transformations (EFTs).
//!
//! `fast_two_sum`/`two_sum`/`two_prod` are exact decompositions of the host
//! `+`/`*` into a (result, round-off) pair; everything above this module is
//! built out of them.
use crate::math::common::f_fmla;

/// True iff the magnitude of `x` is greater than or equal to the magnitude
/// of `y`. NaN and infinity count as maximum magnitude, zero as minimum.
#[inline(always)]
pub(crate) const fn greater_in_magnitude(x: f64, y: f64) -> bool {
    (x.to_bits() << 1) >= (y.to_bits() << 1)
}

/// True iff the mantissa bits of `x` are all zero, i.e. `x` is `0` or `±2ⁿ`.
#[inline(always)]
pub(crate) const fn is_power_of_two(x: f64) -> bool {
    const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
    (x.to_bits() & MANTISSA_MASK) == 0
}

/// Requires `|a| ≥ |b|`. Returns `(s, t)` with `s + t = a + b` exactly and
/// `s = round(a + b)`. 3 flops (Joldes et al., Algorithm 1).
#[inline(always)]
pub(crate) const fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let z = s - a;
    let t = b - z;
    (s, t)
}

/// No precondition on the relative magnitude of `a`, `b`. 6 flops
/// (Joldes et al., Algorithm 2).
#[inline(always)]
pub(crate) const fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let aprime = s - b;
    let bprime = s - aprime;
    let delta_a = a - aprime;
    let delta_b = b - bprime;
    let t = delta_a + delta_b;
    (s, t)
}

/// Returns `(p, r)` with `p + r = a*b` exactly and `p = round(a*b)`.
/// 2 flops using a correctly rounded FMA (Joldes et al., Algorithm 3).
#[inline(always)]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let r = f_fmla(a, b, -p);
    (p, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sum_exact_for_arbitrary_magnitude() {
        let (s, t) = two_sum(1.0, 1e-20);
        assert_eq!(s, 1.0);
        assert!((t - 1e-20).abs() < 1e-36);
    }

    #[test]
    fn fast_two_sum_matches_two_sum_when_ordered() {
        let (s1, t1) = fast_two_sum(5.0, 1e-20);
        let (s2, t2) = two_sum(5.0, 1e-20);
        assert_eq!(s1, s2);
        assert_eq!(t1, t2);
    }

    #[test]
    fn two_prod_reconstructs_product() {
        let (p, r) = two_prod(0.1, 0.2);
        assert!(((p + r) - 0.1 * 0.2).abs() < 1e-30);
    }

    #[test]
    fn power_of_two_detection() {
        assert!(is_power_of_two(0.0));
        assert!(is_power_of_two(1.0));
        assert!(is_power_of_two(8.0));
        assert!(is_power_of_two(0.25));
        assert!(!is_power_of_two(3.0));
    }

    #[test]
    fn magnitude_ordering() {
        assert!(greater_in_magnitude(2.0, 1.0));
        assert!(greater_in_magnitude(-3.0, 2.0));
        assert!(greater_in_magnitude(f64::INFINITY, 1e300));
        assert!(greater_in_magnitude(1.0, 0.0));
    }
}
