/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
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
//! Double-double extended-precision arithmetic: every [`DDouble`] is an
//! unevaluated sum `hi + lo` of two `f64`s carrying roughly twice the
//! working precision of `f64` at a handful of times its cost, without the
//! heap allocation or variable-precision machinery of an arbitrary-precision
//! library.
//!
//! The arithmetic core (error-free transformations, the four basic
//! operators, comparisons, rounding) runs on stock `f64` and does not touch
//! the heap; only [`dd::fmt`]'s formatted output needs the `std` feature's
//! `String`, and only [`dd::random`]'s `Uniform` distribution needs the
//! optional `rand` dependency.
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]

mod error;
pub(crate) mod math;
pub(crate) mod mlaf;

pub mod dd;

pub use dd::classify::{
    abs, ceil, copysign, copysign_dd, copysign_f64, fabs, floor, fmax, fmin, fpclassify, ilogb,
    isfinite, isinf, isnan, isnormal, iszero, ldexp, logb, modf, nextafter, round, scalbn, signbit,
    swap, trunc,
};
pub use dd::core::{reciprocal, DDouble, ExDouble, PowerOfTwo};
pub use dd::expfam::{exp, expm1, log, log1p, pow};
pub use dd::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use dd::quadrature::{gauss_chebyshev, gauss_legendre};
pub use dd::root::{hypot, sqrt, trig_complement};
pub use dd::trig::{acos, asin, atan, atan2, cos, sin, sincos, tan};
pub use error::DDoubleError;

#[cfg(feature = "std")]
pub use dd::fmt::format_digits;

#[cfg(feature = "rand")]
pub use dd::random::Uniform;
