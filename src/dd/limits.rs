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
//! `numeric_limits`-style constants for [`DDouble`].
//!
//! Resolves the spec's Open Question on `min()`: two historical drafts of
//! the source differ by one factor of `radix` (2) between "smallest
//! strictly-normalized DDouble" and "smallest DDouble whose `lo` part is also
//! normal". This crate follows `include/xprec/internal/limits.hpp` (the
//! version actually wired into the public `numeric_limits` specialization),
//! which computes `min = f64::MIN_POSITIVE / f64::EPSILON` — the weaker,
//! "strictly-normalized `hi`" reading. `arith.h`'s inline comment for `max`
//! is consistent with this choice (it divides by `radix` only once, not
//! `radix * radix`, for `max`/`lowest`, while `limits.hpp` divides twice);
//! we follow `limits.hpp` throughout since it is the version that ships in
//! the public header and is exercised by the project's own tests.
use crate::dd::core::DDouble;

const RADIX: f64 = 2.0;

/// Smallest positive normalized `DDouble`.
pub const MIN: DDouble = DDouble::new(f64::MIN_POSITIVE / f64::EPSILON, 0.0);

/// Largest finite `DDouble`.
pub const MAX: DDouble = DDouble::new(f64::MAX, f64::MAX * f64::EPSILON / RADIX / RADIX);

/// Most negative finite `DDouble`.
pub const LOWEST: DDouble = DDouble::new(
    f64::MIN,
    f64::MIN / f64::EPSILON / RADIX / RADIX,
);

/// Machine epsilon: the difference between `1.0` and the next representable
/// `DDouble`.
pub const EPSILON: DDouble = DDouble::new(f64::EPSILON * f64::EPSILON / RADIX, 0.0);

/// Maximum rounding error (half an ULP in the `hi` part).
pub const ROUND_ERROR: DDouble = DDouble::new(0.5, 0.0);

pub const INFINITY: DDouble = DDouble::new(f64::INFINITY, f64::INFINITY);
pub const NEG_INFINITY: DDouble = DDouble::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
pub const NAN: DDouble = DDouble::new(f64::NAN, f64::NAN);
pub const DENORM_MIN: DDouble = DDouble::new(f64::MIN_POSITIVE * f64::EPSILON, 0.0);

/// `2 * f64::DIGITS + 1`: the number of significant base-2 mantissa bits
/// the pair as a whole can faithfully represent.
pub const DIGITS: u32 = 2 * 52 + 1 + 1;

/// `DDouble` is not an IEC 559 (IEEE 754) type: it does not have a single
/// correctly-rounded representation for every operation.
pub const IS_IEC559: bool = false;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dd::classify::isfinite;

    #[test]
    fn limits_are_finite_and_ordered() {
        assert!(isfinite(MIN));
        assert!(isfinite(MAX));
        assert!(isfinite(LOWEST));
        assert!(MIN.hi() > 0.0);
        assert!(LOWEST.hi() < 0.0);
        assert!(MAX.hi() > MIN.hi());
    }

    #[test]
    fn epsilon_is_tiny() {
        assert!(EPSILON.hi() > 0.0);
        assert!(EPSILON.hi() < 1e-30);
    }
}
