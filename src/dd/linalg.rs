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
//! Registers [`DDouble`] as a scalar field for out-of-crate linear-algebra
//! collaborators: a real, non-integer, signed scalar with relative
//! operation costs that reflect its compound arithmetic.
use crate::dd::core::DDouble;

/// Numeric-trait contract a linear-algebra crate can use to decide how to
/// schedule work over a scalar type, without depending on `DDouble`
/// directly. Costs are relative, `read = 1` as the unit; a `DDouble`
/// addition runs the ten-flop `two_sum` EFT plus renormalization (about
/// `20`), and a multiplication runs `two_prod`'s FMA plus cross terms
/// (about `9`).
pub trait ScalarField: Copy {
    /// Relative cost of loading one value from memory.
    const COST_READ: u32;
    /// Relative cost of one addition.
    const COST_ADD: u32;
    /// Relative cost of one multiplication.
    const COST_MUL: u32;

    fn is_real() -> bool;
    fn is_integer() -> bool;
    fn is_signed() -> bool;
    /// Whether values of this type must be constructed through a
    /// non-trivial initializer before use (as opposed to being valid from
    /// an all-zero bit pattern).
    fn needs_init() -> bool;

    fn zero() -> Self;
    fn one() -> Self;
}

impl ScalarField for DDouble {
    const COST_READ: u32 = 1;
    const COST_ADD: u32 = 20;
    const COST_MUL: u32 = 9;

    #[inline(always)]
    fn is_real() -> bool {
        true
    }

    #[inline(always)]
    fn is_integer() -> bool {
        false
    }

    #[inline(always)]
    fn is_signed() -> bool {
        true
    }

    #[inline(always)]
    fn needs_init() -> bool {
        false
    }

    #[inline(always)]
    fn zero() -> Self {
        DDouble::from_f64(0.0)
    }

    #[inline(always)]
    fn one() -> Self {
        DDouble::from_f64(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddouble_reports_as_real_signed_non_integer() {
        assert!(DDouble::is_real());
        assert!(!DDouble::is_integer());
        assert!(DDouble::is_signed());
        assert!(!DDouble::needs_init());
    }

    #[test]
    fn addition_costs_more_than_reading_a_value() {
        assert!(DDouble::COST_ADD > DDouble::COST_READ);
        assert!(DDouble::COST_MUL > DDouble::COST_READ);
    }

    #[test]
    fn zero_and_one_are_additive_multiplicative_identities() {
        let x = DDouble::new(3.25, 1e-20);
        assert_eq!(x + DDouble::zero(), x);
        assert_eq!(x * DDouble::one(), x);
    }
}
