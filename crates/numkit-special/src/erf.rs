//! Error function and complementary error function
//!
//! Rational approximations over the ranges `[0, 0.84375)`, `[0.84375, 1.25)`,
//! `[1.25, 1/0.35)` and `[1/0.35, 28)`, following the FreeBSD `s_erf.c`
//! minimax tables. Beyond the last range the result saturates.

use numkit_core::float::clear_low_word;
use numkit_core::math::evalpoly;

const TINY: f64 = 1.0e-300;
/// 2^-56
const SMALL: f64 = 1.387_778_780_781_445_7e-17;
/// 2^-28
const VERY_SMALL: f64 = 3.725_290_298_461_914e-9;
const ERX: f64 = 8.450_629_115_104_675_292_97e-1;
const EFX: f64 = 1.283_791_670_955_125_863_16e-1;
const EFX8: f64 = 1.027_033_336_764_100_690_53;

const PPC: f64 = 1.283_791_670_955_125_585_61e-1;
const PAC: f64 = -2.362_118_560_752_659_440_77e-3;
const RAC: f64 = -9.864_944_034_847_148_227_05e-3;
const RBC: f64 = -9.864_942_924_700_099_285_97e-3;

const PP: [f64; 4] = [
    -0.325_042_107_247_001_5,
    -0.028_481_749_575_598_51,
    -0.005_770_270_296_489_442,
    -0.000_023_763_016_656_650_163,
];
const QQ: [f64; 5] = [
    0.397_917_223_959_155_35,
    0.065_022_249_988_767_3,
    0.005_081_306_281_875_766,
    0.000_132_494_738_004_321_64,
    -0.000_003_960_228_278_775_368,
];
const PA: [f64; 6] = [
    0.414_856_118_683_748_33,
    -0.372_207_876_035_701_3,
    0.318_346_619_901_161_75,
    -0.110_894_694_282_396_68,
    0.035_478_304_325_618_236,
    -0.002_166_375_594_868_791,
];
const QA: [f64; 6] = [
    0.106_420_880_400_844_23,
    0.540_397_917_702_171,
    0.071_828_654_414_196_27,
    0.126_171_219_808_761_64,
    0.013_637_083_912_029_05,
    0.011_984_499_846_799_107,
];
const RA: [f64; 7] = [
    -0.693_858_572_707_181_8,
    -10.558_626_225_323_291,
    -62.375_332_450_326_006,
    -162.396_669_462_573_47,
    -184.605_092_906_711_04,
    -81.287_435_506_306_6,
    -9.814_329_344_169_145,
];
const SA: [f64; 8] = [
    19.651_271_667_439_257,
    137.657_754_143_519_04,
    434.565_877_475_229_23,
    645.387_271_733_267_9,
    429.008_140_027_567_83,
    108.635_005_541_779_44,
    6.570_249_770_319_282,
    -0.060_424_415_214_858_1,
];
const RB: [f64; 6] = [
    -0.799_283_237_680_523,
    -17.757_954_917_754_752,
    -160.636_384_855_821_92,
    -637.566_443_368_389_6,
    -1_025.095_131_611_077_2,
    -483.519_191_608_651_4,
];
const SB: [f64; 7] = [
    30.338_060_743_482_46,
    325.792_512_996_573_9,
    1_536.729_586_084_437,
    3_199.858_219_508_595_5,
    2_553.050_406_433_164_4,
    474.528_541_206_955_37,
    -22.440_952_446_585_82,
];

/// `x * y` correction for `|x| < 0.84375`
#[inline]
fn small_ratio(x: f64) -> f64 {
    let z = x * x;
    let r = PPC + z * evalpoly(&PP, z);
    let s = 1.0 + z * evalpoly(&QQ, z);
    r / s
}

/// `P/Q` for `0.84375 <= |x| < 1.25`, expanded around `1`
#[inline]
fn mid_ratio(ax: f64) -> f64 {
    let s = ax - 1.0;
    let p = PAC + s * evalpoly(&PA, s);
    let q = 1.0 + s * evalpoly(&QA, s);
    p / q
}

/// `exp(-x^2) * R/S / |x|` tail term for `1.25 <= |x| < 28`
#[inline]
fn tail(ax: f64) -> f64 {
    let s = 1.0 / (ax * ax);
    let (r, q) = if ax < 2.857_142_857_142_857 {
        (RAC + s * evalpoly(&RA, s), 1.0 + s * evalpoly(&SA, s))
    } else {
        (RBC + s * evalpoly(&RB, s), 1.0 + s * evalpoly(&SB, s))
    };
    let z = clear_low_word(ax);
    let e = (-z * z - 0.5625).exp() * ((z - ax) * (z + ax) + r / q).exp();
    e / ax
}

/// Error function
///
/// # Examples
///
/// ```rust
/// use numkit_special::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-15);
/// assert_eq!(erf(f64::NEG_INFINITY), -1.0);
/// ```
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() {
        return x.signum();
    }
    let ax = x.abs();
    if ax < 0.84375 {
        if ax < VERY_SMALL {
            if ax < TINY {
                // avoid underflow in efx * x
                return 0.125 * (8.0 * x + EFX8 * x);
            }
            return x + EFX * x;
        }
        return x + x * small_ratio(x);
    }
    if ax < 1.25 {
        let v = ERX + mid_ratio(ax);
        return if x >= 0.0 { v } else { -v };
    }
    if ax >= 6.0 {
        return if x >= 0.0 { 1.0 - TINY } else { TINY - 1.0 };
    }
    let r = tail(ax);
    if x >= 0.0 {
        1.0 - r
    } else {
        r - 1.0
    }
}

/// Complementary error function, `1 - erf(x)` without cancellation
///
/// # Examples
///
/// ```rust
/// use numkit_special::erfc;
///
/// assert_eq!(erfc(0.0), 1.0);
/// assert_eq!(erfc(f64::INFINITY), 0.0);
/// assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
/// ```
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 0.0;
    }
    if x == f64::NEG_INFINITY {
        return 2.0;
    }
    let ax = x.abs();
    if ax < 0.84375 {
        if ax < SMALL {
            return 1.0 - x;
        }
        let y = small_ratio(x);
        if x < 0.25 {
            return 1.0 - (x + x * y);
        }
        return 0.5 - (x * y + (x - 0.5));
    }
    if ax < 1.25 {
        let pq = mid_ratio(ax);
        return if x < 0.0 {
            1.0 + ERX + pq
        } else {
            1.0 - ERX - pq
        };
    }
    if ax < 28.0 {
        if x < -6.0 {
            return 2.0 - TINY;
        }
        let r = tail(ax);
        return if x < 0.0 { 2.0 - r } else { r };
    }
    if x < 0.0 {
        2.0 - TINY
    } else {
        TINY * TINY
    }
}
