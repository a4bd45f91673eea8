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

//! Process-wide read-only constant tables: mathematical constants, the
//! `exp(k/2)`/`exp(16k)` tables used by [`crate::dd::expfam::exp`]'s
//! table-assisted range reduction, and the reciprocal-factorial table used by
//! the `sin`/`cos` kernels in [`crate::dd::trig`].
//!
//! Every entry is a literal pair of `f64`s, so the tables are declared
//! `const`/`static` and require no runtime initialization — see §5 of the
//! design notes: "statically initialized and never mutated, no
//! synchronization required". Values are correctly-rounded double-double
//! splits of the exact mathematical constant (residual to ~32 decimal
//! digits), matching the "each to ~32 digits" requirement.
use crate::dd::core::DDouble;

pub const PI: DDouble = DDouble::new(3.141592653589793, 1.2246467991473532e-16);
pub const PI_2: DDouble = DDouble::new(1.5707963267948966, 6.123233995736766e-17);
pub const PI_4: DDouble = DDouble::new(0.7853981633974483, 3.061616997868383e-17);
pub const E: DDouble = DDouble::new(2.718281828459045, 1.4456468917292502e-16);
pub const LOG2E: DDouble = DDouble::new(1.4426950408889634, 2.0355273740931033e-17);
pub const LOG10E: DDouble = DDouble::new(0.4342944819032518, 1.098319650216765e-17);
pub const LN2: DDouble = DDouble::new(0.6931471805599453, 2.3190468138462996e-17);
pub const LN10: DDouble = DDouble::new(2.302585092994046, -2.1707562233822494e-16);
pub const SQRT2: DDouble = DDouble::new(1.4142135623730951, -9.667293313452913e-17);
pub const SQRT3: DDouble = DDouble::new(1.7320508075688772, 1.0035084221806903e-16);
pub const FRAC_1_PI: DDouble = DDouble::new(0.3183098861837907, -1.9678676675182486e-17);
pub const FRAC_1_SQRT_PI: DDouble = DDouble::new(0.5641895835477563, 7.66772980658294e-18);
pub const FRAC_1_SQRT_3: DDouble = DDouble::new(0.5773502691896257, 3.3450280739356345e-17);
pub const EULER_GAMMA: DDouble = DDouble::new(0.5772156649015329, -4.942915152430645e-18);
pub const PHI: DDouble = DDouble::new(1.618033988749895, -5.432115203682506e-17);

/// `exp(k/2)` for `k = 1..=31`, used by [`crate::dd::expfam::exp`]'s
/// decomposition `x = y/2 + z`.
pub(crate) const EXP_HALVES: [DDouble; 31] = [
    DDouble::new(1.6487212707001282, -4.731568479435833e-17), // exp(1/2)
    DDouble::new(2.718281828459045, 1.4456468917292502e-16), // exp(2/2)
    DDouble::new(4.4816890703380645, 3.0481759556536343e-16), // exp(3/2)
    DDouble::new(7.38905609893065, -1.7971139497839148e-16), // exp(4/2)
    DDouble::new(12.182493960703473, 2.0334002173348147e-16), // exp(5/2)
    DDouble::new(20.085536923187668, -1.8275625525512858e-16), // exp(6/2)
    DDouble::new(33.11545195869231, 2.2435601403927554e-15), // exp(7/2)
    DDouble::new(54.598150033144236, 2.8741578015844115e-15), // exp(8/2)
    DDouble::new(90.01713130052181, 2.550844346114049e-15), // exp(9/2)
    DDouble::new(148.4131591025766, 3.4863514900464198e-15), // exp(10/2)
    DDouble::new(244.69193226422038, 4.129320187450839e-15), // exp(11/2)
    DDouble::new(403.4287934927351, 1.2359628024450387e-14), // exp(12/2)
    DDouble::new(665.1416330443618, 2.990469256473133e-14), // exp(13/2)
    DDouble::new(1096.6331584284585, 9.869752640434095e-14), // exp(14/2)
    DDouble::new(1808.0424144560632, 3.6612201665204784e-14), // exp(15/2)
    DDouble::new(2980.9579870417283, -2.7103295816873633e-14), // exp(16/2)
    DDouble::new(4914.768840299134, 2.17317454126359e-14), // exp(17/2)
    DDouble::new(8103.083927575384, -2.1530877621067177e-13), // exp(18/2)
    DDouble::new(13359.726829661873, -8.496858340658619e-13), // exp(19/2)
    DDouble::new(22026.465794806718, -1.3780134700517372e-12), // exp(20/2)
    DDouble::new(36315.502674246636, 1.577797006387782e-12), // exp(21/2)
    DDouble::new(59874.14171519782, 1.7895764888916994e-12), // exp(22/2)
    DDouble::new(98715.7710107605, 3.036676373480473e-12), // exp(23/2)
    DDouble::new(162754.79141900392, 5.30065881322063e-12), // exp(24/2)
    DDouble::new(268337.2865208745, -2.0035114163950887e-11), // exp(25/2)
    DDouble::new(442413.3920089205, 1.2118711752313224e-11), // exp(26/2)
    DDouble::new(729416.3698477013, 5.1483277361034595e-11), // exp(27/2)
    DDouble::new(1202604.2841647768, -1.5000525764327354e-11), // exp(28/2)
    DDouble::new(1982759.2635375687, 2.845770459793355e-11), // exp(29/2)
    DDouble::new(3269017.3724721107, -3.075806431120808e-11), // exp(30/2)
    DDouble::new(5389698.476283012, 4.098121666636582e-10), // exp(31/2)
];

/// `exp(16k)` for `k = 1..=44`, used for the integer-multiple-of-16 part of
/// `exp`'s argument when `|y|` is large.
pub(crate) const EXP_SIXTEENS: [DDouble; 44] = [
    DDouble::new(8886110.520507872, 5.321182483501564e-10), // exp(16)
    DDouble::new(78962960182680.69, 0.007660978022635108), // exp(32)
    DDouble::new(7.016735912097631e+20, 30185.471599886117), // exp(48)
    DDouble::new(6.235149080811617e+27, 138997388724.92847), // exp(64)
    DDouble::new(5.54062238439351e+34, 2.1811937023229343e+18), // exp(80)
    DDouble::new(4.923458286012058e+41, 1.3869835129739753e+25), // exp(96)
    DDouble::new(4.375039447261341e+48, 1.035824156236645e+32), // exp(112)
    DDouble::new(3.887708405994595e+55, 2.707966110366217e+39), // exp(128)
    DDouble::new(3.454660656717546e+62, 1.8553902103629043e+46), // exp(144)
    DDouble::new(3.0698496406442424e+69, 4.375620509828095e+52), // exp(160)
    DDouble::new(2.7279023188106115e+76, 6.6492459414351406e+59), // exp(176)
    DDouble::new(2.4240441494100796e+83, -3.8332753349400205e+66), // exp(192)
    DDouble::new(2.1540324218248465e+90, 6.568050851363196e+73), // exp(208)
    DDouble::new(1.9140970165092822e+97, -1.497464557916617e+81), // exp(224)
    DDouble::new(1.700887763567586e+104, 1.4773861394382237e+88), // exp(240)
    DDouble::new(1.5114276650041035e+111, 1.4805989167614457e+94), // exp(256)
    DDouble::new(1.3430713274979614e+118, -6.561438244448466e+101), // exp(272)
    DDouble::new(1.1934680253072109e+125, -3.301231394418859e+108), // exp(288)
    DDouble::new(1.0605288775572162e+132, 5.4744408887427266e+115), // exp(304)
    DDouble::new(9.423976816163585e+138, -2.7555072985830676e+122), // exp(320)
    DDouble::new(8.374249953113352e+145, -3.529195534423469e+129), // exp(336)
    DDouble::new(7.441451060972311e+152, 4.251237045552673e+136), // exp(352)
    DDouble::new(6.612555656075053e+159, -3.4828210031110127e+143), // exp(368)
    DDouble::new(5.875990038289236e+166, 7.682543674132907e+149), // exp(384)
    DDouble::new(5.221469689764144e+173, -3.041154182825333e+157), // exp(400)
    DDouble::new(4.639855674272614e+180, -3.3453058659461497e+164), // exp(416)
    DDouble::new(4.123027032079202e+187, 1.8602059512155307e+171), // exp(432)
    DDouble::new(3.663767388609735e+194, -1.8555200045340274e+178), // exp(448)
    DDouble::new(3.255664193661862e+201, 5.148254191579011e+184), // exp(464)
    DDouble::new(2.8930191842539453e+208, -2.8880381060655904e+191), // exp(480)
    DDouble::new(2.5707688209230085e+215, 1.1853726094570251e+199), // exp(496)
    DDouble::new(2.2844135865397565e+222, 1.3549224944023444e+206), // exp(512)
    DDouble::new(2.0299551604542052e+229, 1.2942147572086164e+213), // exp(528)
    DDouble::new(1.803840590747136e+236, 1.820681001928355e+218), // exp(544)
    DDouble::new(1.6029126850757262e+243, -2.463627227554342e+226), // exp(560)
    DDouble::new(1.4243659274306933e+250, -5.204358467973364e+233), // exp(576)
    DDouble::new(1.2657073052794837e+257, -3.983584155610672e+240), // exp(592)
    DDouble::new(1.124721500132769e+264, -8.843155706148207e+247), // exp(608)
    DDouble::new(9.994399554971195e+270, 8.925025806205413e+253), // exp(624)
    DDouble::new(8.881133903158874e+277, -4.948247489077345e+261), // exp(640)
    DDouble::new(7.891873741089921e+284, 2.4630459641303726e+268), // exp(656)
    DDouble::new(7.012806227721897e+291, -1.1759583274063904e+275), // exp(672)
    DDouble::new(6.231657119844268e+298, 1.1619020533730335e+281), // exp(688)
    DDouble::new(5.5375193892845935e+305, 1.5239358093004245e+289), // exp(704)
];

/// `1/n!` for `n = 2..=27`, used by the `sin_kernel`/`cos_kernel` Taylor
/// series (truncated at `z^27`/`z^26` respectively per the distilled spec).
/// Index `0` holds `1/2!`, so `INV_FACT[n - 2]` is `1/n!`.
pub(crate) const INV_FACT: [DDouble; 26] = [
    DDouble::new(0.5, 0.0), // 1/2!
    DDouble::new(0.16666666666666666, 9.25185853854297e-18), // 1/3!
    DDouble::new(0.041666666666666664, 2.3129646346357427e-18), // 1/4!
    DDouble::new(0.008333333333333333, 1.1564823173178714e-19), // 1/5!
    DDouble::new(0.001388888888888889, -5.300543954373577e-20), // 1/6!
    DDouble::new(0.0001984126984126984, 1.7209558293420705e-22), // 1/7!
    DDouble::new(2.48015873015873e-05, 2.1511947866775882e-23), // 1/8!
    DDouble::new(2.7557319223985893e-06, -1.858393274046472e-22), // 1/9!
    DDouble::new(2.755731922398589e-07, 2.3767714622250297e-23), // 1/10!
    DDouble::new(2.505210838544172e-08, -1.448814070935912e-24), // 1/11!
    DDouble::new(2.08767569878681e-09, -1.20734505911326e-25), // 1/12!
    DDouble::new(1.6059043836821613e-10, 1.2585294588752098e-26), // 1/13!
    DDouble::new(1.1470745597729725e-11, 2.0655512752830745e-28), // 1/14!
    DDouble::new(7.647163731819816e-13, 7.03872877733453e-30), // 1/15!
    DDouble::new(4.779477332387385e-14, 4.399205485834081e-31), // 1/16!
    DDouble::new(2.8114572543455206e-15, 1.6508842730861433e-31), // 1/17!
    DDouble::new(1.5619206968586225e-16, 1.1910679660273754e-32), // 1/18!
    DDouble::new(8.22063524662433e-18, 2.2141894119604265e-34), // 1/19!
    DDouble::new(4.110317623312165e-19, 1.4412973378659527e-36), // 1/20!
    DDouble::new(1.9572941063391263e-20, -1.3643503830087908e-36), // 1/21!
    DDouble::new(8.896791392450574e-22, -7.911402614872376e-38), // 1/22!
    DDouble::new(3.868170170630684e-23, -8.843177655482344e-40), // 1/23!
    DDouble::new(1.6117375710961184e-24, -3.6846573564509766e-41), // 1/24!
    DDouble::new(6.446950284384474e-26, -1.9330404233703465e-42), // 1/25!
    DDouble::new(2.4795962632247976e-27, -1.2953730964765229e-43), // 1/26!
    DDouble::new(9.183689863795546e-29, 1.4303150396787322e-45), // 1/27!
];


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dd::classify::isfinite;

    #[test]
    fn constants_are_finite_and_in_expected_range() {
        assert!(isfinite(PI));
        assert!(PI.to_f64() > 3.14159 && PI.to_f64() < 3.1416);
        assert!(isfinite(E));
        assert!(E.to_f64() > 2.71828 && E.to_f64() < 2.71829);
        assert!((PI_2.to_f64() - PI.to_f64() / 2.0).abs() < 1e-15);
        assert!((PI_4.to_f64() - PI.to_f64() / 4.0).abs() < 1e-15);
        assert!((SQRT2.to_f64() * SQRT2.to_f64() - 2.0).abs() < 1e-15);
        assert!((PHI.to_f64() * PHI.to_f64() - PHI.to_f64() - 1.0).abs() < 1e-13);
    }

    #[test]
    fn exp_halves_table_matches_definition() {
        for (k, entry) in EXP_HALVES.iter().enumerate() {
            let k = (k + 1) as f64;
            let expected = (k / 2.0).exp();
            assert!((entry.to_f64() - expected).abs() < expected.abs() * 1e-14);
        }
    }

    #[test]
    fn exp_sixteens_table_matches_definition() {
        for (k, entry) in EXP_SIXTEENS.iter().enumerate() {
            let k = (k + 1) as f64;
            let expected = (k * 16.0).exp();
            if expected.is_finite() {
                assert!((entry.to_f64() - expected).abs() <= expected.abs() * 1e-10);
            }
        }
    }

    #[test]
    fn reciprocal_factorials_decrease() {
        for w in INV_FACT.windows(2) {
            assert!(w[0].to_f64() > w[1].to_f64());
        }
    }
}
