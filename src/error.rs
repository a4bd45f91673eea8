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
use std::fmt::{Display, Formatter};

/// Errors raised at the narrow set of true preconditions in this crate.
///
/// Numeric domain errors inside an already-constructed [`crate::DDouble`]
/// (e.g. `sqrt` of a negative value) are value-based: they propagate as NaN
/// per the host-float convention and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DDoubleError {
    /// [`crate::PowerOfTwo::new`] was given a value that is not `0` or `±2ⁿ`.
    NotPowerOfTwo,
    /// A quadrature order of zero was requested.
    InvalidOrder,
    /// A formatted-output digit count fell outside `3..=34`.
    DigitsOutOfRange,
}

impl Display for DDoubleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DDoubleError::NotPowerOfTwo => {
                write!(f, "value is not exactly zero or a power of two")
            }
            DDoubleError::InvalidOrder => write!(f, "quadrature order must be at least 1"),
            DDoubleError::DigitsOutOfRange => write!(f, "digit count must be between 3 and 34"),
        }
    }
}

impl std::error::Error for DDoubleError {}
