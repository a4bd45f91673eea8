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
//! Plain-data C ABI surface for [`DDouble`].
//!
//! `DDoubleRaw` has the same layout as `DDouble` (`#[repr(C)]`, two `f64`
//! fields) so it can cross an `extern "C"` boundary; callers on the other
//! side own the non-overlap invariant once they start poking at the fields
//! directly, same as handing out a raw pointer anywhere else.
use crate::dd::core::DDouble;

/// C-ABI mirror of [`DDouble`]: `hi` then `lo`, no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DDoubleRaw {
    pub hi: f64,
    pub lo: f64,
}

impl From<DDouble> for DDoubleRaw {
    #[inline]
    fn from(x: DDouble) -> Self {
        DDoubleRaw {
            hi: x.hi(),
            lo: x.lo(),
        }
    }
}

impl From<DDoubleRaw> for DDouble {
    #[inline]
    fn from(x: DDoubleRaw) -> Self {
        DDouble::new(x.hi, x.lo)
    }
}

#[no_mangle]
pub extern "C" fn ddr_add(a: DDoubleRaw, b: DDoubleRaw) -> DDoubleRaw {
    (DDouble::from(a) + DDouble::from(b)).into()
}

#[no_mangle]
pub extern "C" fn ddr_sub(a: DDoubleRaw, b: DDoubleRaw) -> DDoubleRaw {
    (DDouble::from(a) - DDouble::from(b)).into()
}

#[no_mangle]
pub extern "C" fn ddr_mul(a: DDoubleRaw, b: DDoubleRaw) -> DDoubleRaw {
    (DDouble::from(a) * DDouble::from(b)).into()
}

#[no_mangle]
pub extern "C" fn ddr_div(a: DDoubleRaw, b: DDoubleRaw) -> DDoubleRaw {
    (DDouble::from(a) / DDouble::from(b)).into()
}

#[no_mangle]
pub extern "C" fn ddr_neg(a: DDoubleRaw) -> DDoubleRaw {
    (-DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_sqrt(a: DDoubleRaw) -> DDoubleRaw {
    crate::dd::root::sqrt(DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_exp(a: DDoubleRaw) -> DDoubleRaw {
    crate::dd::expfam::exp(DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_log(a: DDoubleRaw) -> DDoubleRaw {
    crate::dd::expfam::log(DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_sin(a: DDoubleRaw) -> DDoubleRaw {
    crate::dd::trig::sin(DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_cos(a: DDoubleRaw) -> DDoubleRaw {
    crate::dd::trig::cos(DDouble::from(a)).into()
}

#[no_mangle]
pub extern "C" fn ddr_to_f64(a: DDoubleRaw) -> f64 {
    DDouble::from(a).to_f64()
}

#[no_mangle]
pub extern "C" fn ddr_from_f64(x: f64) -> DDoubleRaw {
    DDouble::from_f64(x).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip_preserves_both_limbs() {
        let x = DDouble::new(1.0, 1e-20);
        let raw: DDoubleRaw = x.into();
        let back: DDouble = raw.into();
        assert_eq!(x, back);
    }

    #[test]
    fn ffi_add_matches_native_add() {
        let a = DDouble::new(1.0, 1e-20);
        let b = DDouble::new(2.0, -3e-20);
        let native = a + b;
        let via_ffi: DDouble = ddr_add(a.into(), b.into()).into();
        assert_eq!(native, via_ffi);
    }

    #[test]
    fn ffi_sqrt_matches_native_sqrt() {
        let a = DDouble::from_f64(2.0);
        let native = crate::dd::root::sqrt(a);
        let via_ffi: DDouble = ddr_sqrt(a.into()).into();
        assert_eq!(native, via_ffi);
    }
}
