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
//! Gauss–Chebyshev and Gauss–Legendre node/weight generation — a stress test
//! of the arithmetic core (components A-D) and the trig/constants tables
//! (components F-G) under sustained `DDouble` computation.
use crate::dd::constants::PI;
use crate::dd::core::DDouble;
use crate::dd::trig::cos;
use crate::error::DDoubleError;

fn chebyshev_node(n: usize, i: usize) -> DDouble {
    let arg = PI * ((n as f64 - i as f64 - 0.5) / n as f64);
    cos(arg)
}

/// `x_i = cos((n - i - ½)·π/n)` for `i ∈ [0, n)`; weights are the constant
/// `π/n`. Errors on `n == 0`.
pub fn gauss_chebyshev(n: usize) -> Result<(Vec<DDouble>, Vec<DDouble>), DDoubleError> {
    if n == 0 {
        return Err(DDoubleError::InvalidOrder);
    }
    let nodes: Vec<DDouble> = (0..n).map(|i| chebyshev_node(n, i)).collect();
    let w = PI / (n as f64);
    Ok((nodes, vec![w; n]))
}

/// Evaluates `P_n(x)` and `P'_n(x)` via Bonnet's three-term recurrence.
fn legendre_and_derivative(n: usize, x: DDouble) -> (DDouble, DDouble) {
    let mut p0 = DDouble::from_f64(1.0);
    let mut p1 = x;
    let mut dp0 = DDouble::from_f64(0.0);
    let mut dp1 = DDouble::from_f64(1.0);
    if n == 0 {
        return (p0, dp0);
    }
    if n == 1 {
        return (p1, dp1);
    }
    for k in 1..n {
        let kf = k as f64;
        let p2 = ((x * p1) * (2.0 * kf + 1.0) - p0 * kf) / (kf + 1.0);
        let dp2 = ((x * dp1 + p1) * (2.0 * kf + 1.0) - dp0 * kf) / (kf + 1.0);
        p0 = p1;
        p1 = p2;
        dp0 = dp1;
        dp1 = dp2;
    }
    (p1, dp1)
}

/// Initializes nodes with the Chebyshev nodes, then runs up to 10 Newton
/// sweeps per node using Bonnet's recurrence; converged when `|Δx| <
/// 2.5e-32`. Weights `w_i = 2 / ((1 - x_i²)·P'_n(x_i)²)`. Errors on
/// `n == 0`.
pub fn gauss_legendre(n: usize) -> Result<(Vec<DDouble>, Vec<DDouble>), DDoubleError> {
    if n == 0 {
        return Err(DDoubleError::InvalidOrder);
    }
    let mut nodes: Vec<DDouble> = (0..n).map(|i| chebyshev_node(n, i)).collect();
    for x in nodes.iter_mut() {
        for _ in 0..10 {
            let (p, dp) = legendre_and_derivative(n, *x);
            let delta = p / dp;
            *x = *x - delta;
            if delta.to_f64().abs() < 2.5e-32 {
                break;
            }
        }
    }
    let weights: Vec<DDouble> = nodes
        .iter()
        .map(|&xi| {
            let (_, dp) = legendre_and_derivative(n, xi);
            DDouble::from_f64(2.0) / ((DDouble::from_f64(1.0) - xi * xi) * (dp * dp))
        })
        .collect();
    Ok((nodes, weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_rejects_zero_order() {
        assert_eq!(gauss_chebyshev(0), Err(DDoubleError::InvalidOrder));
    }

    #[test]
    fn legendre_rejects_zero_order() {
        assert_eq!(gauss_legendre(0), Err(DDoubleError::InvalidOrder));
    }

    #[test]
    fn chebyshev_weights_sum_to_pi() {
        let (_, w) = gauss_chebyshev(5).unwrap();
        let sum: f64 = w.iter().map(|x| x.to_f64()).sum();
        assert!((sum - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn legendre_order_two_matches_closed_form() {
        let (nodes, weights) = gauss_legendre(2).unwrap();
        let expected = 1.0 / 3f64.sqrt();
        let mut sorted: Vec<f64> = nodes.iter().map(|x| x.to_f64()).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((sorted[0] + expected).abs() < 1e-28);
        assert!((sorted[1] - expected).abs() < 1e-28);
        for w in &weights {
            assert!((w.to_f64() - 1.0).abs() < 1e-28);
        }
    }

    #[test]
    fn legendre_order_three_matches_closed_form() {
        let (nodes, weights) = gauss_legendre(3).unwrap();
        let mut paired: Vec<(f64, f64)> = nodes
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| (x.to_f64(), w.to_f64()))
            .collect();
        paired.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        let root = (3f64 / 5f64).sqrt();
        assert!((paired[0].0 + root).abs() < 1e-27);
        assert!(paired[1].0.abs() < 1e-27);
        assert!((paired[2].0 - root).abs() < 1e-27);
        assert!((paired[0].1 - 5.0 / 9.0).abs() < 1e-27);
        assert!((paired[1].1 - 8.0 / 9.0).abs() < 1e-27);
        assert!((paired[2].1 - 5.0 / 9.0).abs() < 1e-27);
    }

    #[test]
    fn legendre_nodes_lie_within_unit_interval() {
        let (nodes, _) = gauss_legendre(7).unwrap();
        for x in nodes {
            assert!(x.to_f64().abs() <= 1.0);
        }
    }
}
