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
//! Formatted decimal output, `3..=34` significant digits, default 34.
use crate::dd::classify::{abs, isinf, isnan, iszero, signbit};
use crate::dd::core::DDouble;
use crate::dd::expfam::pow;
use crate::error::DDoubleError;
use std::fmt;

/// Renders `x` in `d1.d2d3...dN` × `10^exp` decimal form with exactly
/// `digits` significant digits (`3..=34`). `0` renders as `"0.0"`,
/// infinities as `"Inf"`/`"-Inf"`, NaN as `"NaN"`.
pub fn format_digits(x: DDouble, digits: usize) -> Result<String, DDoubleError> {
    if !(3..=34).contains(&digits) {
        return Err(DDoubleError::DigitsOutOfRange);
    }
    if isnan(x) {
        return Ok("NaN".to_string());
    }
    if isinf(x) {
        return Ok(if x.hi() > 0.0 {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        });
    }
    if iszero(x) {
        return Ok("0.0".to_string());
    }

    let negative = signbit(x);
    let magnitude = abs(x);

    let mut exp10 = magnitude.hi().log10().floor() as i32;
    let mut scaled = magnitude / pow(DDouble::from_f64(10.0), exp10);
    if scaled.hi() >= 10.0 {
        scaled = scaled / 10.0;
        exp10 += 1;
    } else if scaled.hi() < 1.0 {
        scaled = scaled * 10.0;
        exp10 -= 1;
    }

    let mut out_digits: Vec<u8> = Vec::with_capacity(digits);
    let mut r = scaled;
    for _ in 0..digits {
        let d = (r.hi().trunc() as i64).clamp(0, 9) as u8;
        out_digits.push(d);
        r = (r - DDouble::from_f64(d as f64)) * 10.0;
    }
    if (r.hi().trunc() as i64) >= 5 {
        let mut i = out_digits.len();
        loop {
            if i == 0 {
                out_digits.insert(0, 1);
                out_digits.pop();
                exp10 += 1;
                break;
            }
            i -= 1;
            if out_digits[i] == 9 {
                out_digits[i] = 0;
            } else {
                out_digits[i] += 1;
                break;
            }
        }
    }

    let mut s = String::with_capacity(digits + 8);
    if negative {
        s.push('-');
    }
    s.push((b'0' + out_digits[0]) as char);
    s.push('.');
    if out_digits.len() > 1 {
        for &d in &out_digits[1..] {
            s.push((b'0' + d) as char);
        }
    } else {
        s.push('0');
    }
    if exp10 != 0 {
        s.push('e');
        s.push_str(&exp10.to_string());
    }
    Ok(s)
}

impl fmt::Display for DDouble {
    /// Honors `{:.N}` for `N` in `3..=34` (clamped); defaults to 34 digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().map(|p| p.clamp(3, 34)).unwrap_or(34);
        let rendered = format_digits(*self, digits).unwrap_or_else(|_| "NaN".to_string());
        f.pad(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_as_zero_point_zero() {
        assert_eq!(format_digits(DDouble::from_f64(0.0), 10).unwrap(), "0.0");
    }

    #[test]
    fn infinities_and_nan() {
        assert_eq!(
            format_digits(DDouble::from_f64(f64::INFINITY), 5).unwrap(),
            "Inf"
        );
        assert_eq!(
            format_digits(DDouble::from_f64(f64::NEG_INFINITY), 5).unwrap(),
            "-Inf"
        );
        assert_eq!(
            format_digits(DDouble::from_f64(f64::NAN), 5).unwrap(),
            "NaN"
        );
    }

    #[test]
    fn digit_count_out_of_range_is_rejected() {
        assert_eq!(
            format_digits(DDouble::from_f64(1.0), 2),
            Err(DDoubleError::DigitsOutOfRange)
        );
        assert_eq!(
            format_digits(DDouble::from_f64(1.0), 35),
            Err(DDoubleError::DigitsOutOfRange)
        );
    }

    #[test]
    fn renders_simple_value() {
        let s = format_digits(DDouble::from_f64(1.0), 5).unwrap();
        assert_eq!(s, "1.0000");
    }

    #[test]
    fn renders_negative_with_exponent() {
        let s = format_digits(DDouble::from_f64(-123.0), 4).unwrap();
        assert_eq!(s, "-1.230e2");
    }

    #[test]
    fn display_impl_uses_default_34_digits() {
        let s = format!("{}", DDouble::from_f64(2.0));
        assert!(s.starts_with("2."));
        assert_eq!(s.len() - s.find('.').unwrap() - 1, 34);
    }
}
