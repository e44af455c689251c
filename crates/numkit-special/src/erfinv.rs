//! Inverse error function and inverse complementary error function
//!
//! Boost-style rational approximations. Both inverses share one kernel that
//! takes `p = |x|` and `q = 1 - |x|` separately, so `erfcinv` can pass a
//! tiny `q` without the cancellation of forming `1 - z`.

use numkit_core::math::evalrational;

const Y1: f64 = 8.913_147_449_493_408_203_13e-2;
const Y2: f64 = 2.249_481_201_171_875;
const Y3: f64 = 8.072_204_589_843_75e-1;
const Y4: f64 = 9.399_557_113_647_460_937_5e-1;
const Y5: f64 = 9.836_282_730_102_539_062_5e-1;

const P1: [f64; 10] = [
    -0.000_508_781_949_658_280_6,
    -0.008_368_748_197_417_368,
    0.033_480_662_540_974_46,
    -0.012_692_614_766_297_404,
    -0.036_563_797_141_176_27,
    0.021_987_868_111_116_89,
    0.008_226_878_746_769_157,
    -0.005_387_729_650_712_429,
    0.0,
    0.0,
];
const Q1: [f64; 10] = [
    1.0,
    -0.970_005_043_303_290_6,
    -1.565_745_582_341_758_5,
    1.562_215_583_984_230_2,
    0.662_328_840_472_003,
    -0.712_289_023_415_428_4,
    -0.052_739_638_234_009_97,
    0.079_528_368_734_157_17,
    -0.002_333_937_593_741_9,
    0.000_886_216_390_456_424_7,
];

const P2: [f64; 9] = [
    -0.202_433_508_355_938_76,
    0.105_264_680_699_391_71,
    8.370_503_283_431_2,
    17.644_729_840_837_403,
    -18.851_064_805_871_424,
    -44.638_232_444_178_7,
    17.445_385_985_570_866,
    21.129_465_544_834_05,
    -3.671_922_547_077_293_6,
];
const Q2: [f64; 9] = [
    1.0,
    6.242_641_248_542_475,
    3.971_343_795_334_387,
    -28.660_818_049_98,
    -20.143_263_468_048_52,
    48.560_921_310_873_994,
    10.826_866_735_546_016,
    -22.643_693_341_313_973,
    1.721_147_657_612_002_8,
];

const P3: [f64; 11] = [
    -0.131_102_781_679_951_9,
    -0.163_794_047_193_317_05,
    0.117_030_156_341_995_25,
    0.387_079_738_972_604_34,
    0.337_785_538_912_035_9,
    0.142_869_534_408_157_17,
    0.029_015_791_000_532_906,
    0.002_145_589_953_888_052_6,
    -6.794_655_751_811_263e-7,
    2.852_253_317_822_170_4e-8,
    -6.811_499_568_537_77e-10,
];
const Q3: [f64; 11] = [
    1.0,
    3.466_254_072_425_672_3,
    5.381_683_457_070_069,
    4.778_465_929_458_438,
    2.593_019_216_236_202_7,
    0.848_854_343_457_902,
    0.152_264_338_295_331_79,
    0.011_059_242_293_464_892,
    0.0,
    0.0,
    0.0,
];

const P4: [f64; 9] = [
    -0.035_035_378_718_317_8,
    -0.002_224_265_292_134_479_4,
    0.018_557_330_651_423_107,
    0.009_508_047_013_259_196,
    0.001_871_234_928_195_592_3,
    0.000_157_544_617_424_960_55,
    0.000_004_604_698_905_843_18,
    -2.304_047_769_118_826e-10,
    2.663_392_274_257_820_4e-12,
];
const Q4: [f64; 9] = [
    1.0,
    1.365_334_981_755_406_4,
    0.762_059_164_553_623_4,
    0.220_091_105_764_131_24,
    0.034_158_914_367_094_77,
    0.002_638_616_766_570_16,
    0.000_076_467_529_230_279_44,
    0.0,
    0.0,
];

const P5: [f64; 9] = [
    -0.016_743_100_507_663_373,
    -0.001_129_514_387_455_802_8,
    0.001_056_288_621_524_929,
    0.000_209_386_317_487_588_08,
    0.000_014_962_478_375_834_237,
    4.496_967_899_277_064_4e-7,
    4.625_961_635_228_786e-9,
    -2.811_287_356_288_318e-14,
    9.905_570_997_331_033e-17,
];
const Q5: [f64; 9] = [
    1.0,
    0.591_429_344_886_417_5,
    0.138_151_865_749_083_3,
    0.016_074_608_709_367_652,
    0.000_964_011_807_005_165_6,
    0.000_027_533_547_476_472_603,
    2.822_431_720_161_08e-7,
    0.0,
    0.0,
];

/// Inverse of `erf` on `[0, 1)` given `p = |x|` and `q = 1 - p`
fn erfinv_kernel(p: f64, q: f64) -> f64 {
    if p <= 0.5 {
        let g = p * (p + 10.0);
        let r = evalrational(&P1, &Q1, p);
        return g * Y1 + g * r;
    }
    if q >= 0.25 {
        let g = (-2.0 * q.ln()).sqrt();
        let r = evalrational(&P2, &Q2, q - 0.25);
        return g / (Y2 + r);
    }
    let s = (-q.ln()).sqrt();
    if s < 3.0 {
        let r = evalrational(&P3, &Q3, s - 1.125);
        return Y3 * s + r * s;
    }
    if s < 6.0 {
        let r = evalrational(&P4, &Q4, s - 3.0);
        return Y4 * s + r * s;
    }
    let r = evalrational(&P5, &Q5, s - 6.0);
    Y5 * s + r * s
}

/// Inverse error function
///
/// `erfinv(±1) = ±∞`; arguments outside `[-1, 1]` return NaN.
///
/// # Examples
///
/// ```rust
/// use numkit_special::erfinv;
///
/// assert!((erfinv(0.5) - 0.4769362762044699).abs() < 1e-15);
/// assert_eq!(erfinv(1.0), f64::INFINITY);
/// assert!(erfinv(1.5).is_nan());
/// ```
pub fn erfinv(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == 1.0 {
        return f64::INFINITY;
    }
    if x == -1.0 {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        return x;
    }
    let ax = x.abs();
    let r = erfinv_kernel(ax, 1.0 - ax);
    if x < 0.0 {
        -r
    } else {
        r
    }
}

/// Inverse complementary error function on `[0, 2]`
///
/// `erfcinv(0) = +∞`, `erfcinv(2) = -∞`; arguments outside `[0, 2]` return NaN.
pub fn erfcinv(z: f64) -> f64 {
    if z.is_nan() || !(0.0..=2.0).contains(&z) {
        return f64::NAN;
    }
    if z == 0.0 {
        return f64::INFINITY;
    }
    if z == 2.0 {
        return f64::NEG_INFINITY;
    }
    if z == 1.0 {
        return 0.0;
    }
    if z > 1.0 {
        let q = 2.0 - z;
        -erfinv_kernel(1.0 - q, q)
    } else {
        erfinv_kernel(1.0 - z, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::erf::{erf, erfc};
    use approx::assert_relative_eq;

    #[test]
    fn test_erfinv_special_values() {
        assert_eq!(erfinv(-1.0), f64::NEG_INFINITY);
        assert_eq!(erfinv(-0.0).to_bits(), (-0.0f64).to_bits());
        assert!(erfinv(-1.0000001).is_nan());
        assert!(erfinv(f64::NAN).is_nan());
        assert_eq!(erfcinv(0.0), f64::INFINITY);
        assert_eq!(erfcinv(2.0), f64::NEG_INFINITY);
        assert_eq!(erfcinv(1.0), 0.0);
        assert!(erfcinv(-0.1).is_nan());
        assert!(erfcinv(2.1).is_nan());
    }

    #[test]
    fn test_erfinv_inverts_erf() {
        for &x in &[1e-8, 0.1, 0.3, 0.5, 0.7, 0.8, 0.9, 0.99, 0.999, 0.999999] {
            assert_relative_eq!(erf(erfinv(x)), x, max_relative = 1e-14);
            assert_eq!(erfinv(-x), -erfinv(x));
        }
    }

    #[test]
    fn test_erfcinv_inverts_erfc_into_tail() {
        for &z in &[1e-100, 1e-30, 1e-10, 1e-3, 0.2, 0.6, 1.3, 1.9] {
            assert_relative_eq!(erfc(erfcinv(z)), z, max_relative = 1e-11);
        }
        assert_relative_eq!(erfcinv(0.1), erfinv(0.9), max_relative = 1e-14);
    }
}
