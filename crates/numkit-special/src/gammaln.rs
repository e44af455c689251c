//! Natural logarithm of the gamma function, and the gamma function itself
//!
//! `gammaln` follows the Sun `e_lgamma_r.c` scheme: rational approximations
//! around the minimum of `Γ` on `(0, 2)`, a shifted rational form on
//! `[2, 8)`, Stirling's series on `[8, 2^56)` and reflection for `x < 0`.

use std::f64::consts::PI;

use numkit_core::float::is_integer;
use numkit_core::math::evalpoly;

use crate::trig::sinpi;

const A1C: f64 = 7.721_566_490_153_286_554_94e-2;
const A2C: f64 = 3.224_670_334_241_135_916_11e-1;
const RC: f64 = 1.0;
const SC: f64 = -7.721_566_490_153_286_554_94e-2;
const T1C: f64 = 4.838_361_227_238_100_470_42e-1;
const T2C: f64 = -1.475_877_229_945_939_117_52e-1;
const T3C: f64 = 6.462_494_023_913_338_547_78e-2;
const UC: f64 = -7.721_566_490_153_286_554_94e-2;
const VC: f64 = 1.0;
/// `0.5 * ln(2π) - 0.5`
pub(crate) const WC: f64 = 4.189_385_332_046_727_250_52e-1;
/// Abscissa of the minimum of `Γ` on the positive axis
const YMIN: f64 = 1.461_632_144_968_362_245;
const TWO52: f64 = 4_503_599_627_370_496.0;
const TWO56: f64 = 72_057_594_037_927_936.0;
/// 2^-56
const TINY: f64 = 1.387_778_780_781_445_7e-17;
const TC: f64 = 1.461_632_144_968_362_245_76;
/// `gammaln(TC)`
const TF: f64 = -1.214_862_905_358_496_114_61e-1;
/// `-(tail of TF)`
const TT: f64 = -3.638_676_997_039_505_365_41e-18;

const A1: [f64; 5] = [
    0.067_352_301_053_129_27,
    0.007_385_550_860_814_029,
    0.001_192_707_631_833_620_7,
    0.000_220_862_790_713_908_39,
    0.000_025_214_456_545_125_733,
];
const A2: [f64; 5] = [
    0.020_580_808_432_516_733,
    0.002_890_513_836_734_156_3,
    0.000_510_069_792_153_511_3,
    0.000_108_011_567_247_583_94,
    0.000_044_864_094_961_891_516,
];
const R: [f64; 6] = [
    1.392_005_334_676_210_5,
    0.721_935_547_567_138_1,
    0.171_933_865_632_803_08,
    0.018_645_919_171_565_29,
    0.000_777_942_496_381_893_6,
    0.000_007_326_684_307_446_256,
];
const S: [f64; 6] = [
    0.214_982_415_960_608_85,
    0.325_778_796_408_931,
    0.146_350_472_652_464_45,
    0.026_642_270_303_363_86,
    0.001_840_284_514_073_377_2,
    0.000_031_947_532_658_410_09,
];
const T1: [f64; 4] = [
    -0.032_788_541_075_985_965,
    0.006_100_538_702_462_913,
    -0.001_403_464_699_892_328_4,
    0.000_315_632_070_903_625_95,
];
const T2: [f64; 4] = [
    0.017_970_675_081_182_04,
    -0.003_684_520_167_811_382_6,
    0.000_881_081_882_437_654,
    -0.000_312_754_168_375_120_86,
];
const T3: [f64; 4] = [
    -0.010_314_224_129_834_144,
    0.002_259_647_809_006_124_7,
    -0.000_538_595_305_356_740_5,
    0.000_335_529_192_635_519_1,
];
const U: [f64; 5] = [
    0.632_827_064_025_093_4,
    1.454_922_501_372_347_7,
    0.977_717_527_963_372_7,
    0.228_963_728_064_692_45,
    0.013_381_091_853_678_766,
];
const V: [f64; 5] = [
    2.455_977_937_130_411_3,
    2.128_489_763_798_934,
    0.769_285_150_456_672_8,
    0.104_222_645_593_369_13,
    0.003_217_092_422_824_239,
];
/// Stirling correction series in `1/x^2`
pub(crate) const W: [f64; 6] = [
    0.083_333_333_333_332_97,
    -0.002_777_777_777_287_755_4,
    0.000_793_650_558_643_019_6,
    -0.000_595_187_557_450_34,
    0.000_836_339_918_996_282_1,
    -0.001_630_929_340_965_752_7,
];

/// Largest argument for which `Γ(x)` is finite
const GAMMA_MAX: f64 = 171.624_376_956_302_7;

/// Natural logarithm of `|Γ(x)|`
///
/// `gammaln(0) = +∞`, non-positive integers map to `+∞` and `gammaln(±∞) = +∞`.
///
/// # Examples
///
/// ```rust
/// use numkit_special::gammaln;
///
/// assert_eq!(gammaln(1.0), 0.0);
/// assert!((gammaln(0.5) - 0.5723649429247001).abs() < 1e-15);
/// assert_eq!(gammaln(-3.0), f64::INFINITY);
/// ```
pub fn gammaln(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() || x == 0.0 {
        return f64::INFINITY;
    }
    let negative = x < 0.0;
    let xc = x.abs();
    if xc < TINY {
        return -xc.ln();
    }
    let mut nadj = 0.0;
    if negative {
        if xc >= TWO52 {
            return f64::INFINITY;
        }
        let t = sinpi(xc);
        if t == 0.0 {
            return f64::INFINITY;
        }
        nadj = (PI / (t * xc).abs()).ln();
    }
    if xc == 1.0 || xc == 2.0 {
        return 0.0;
    }
    let r = if xc < 2.0 {
        small(xc)
    } else if xc < 8.0 {
        medium(xc)
    } else if xc < TWO56 {
        let t = xc.ln();
        let z = 1.0 / xc;
        let y = z * z;
        let w = WC + z * evalpoly(&W, y);
        (xc - 0.5) * (t - 1.0) + w
    } else {
        xc * (xc.ln() - 1.0)
    };
    if negative {
        nadj - r
    } else {
        r
    }
}

/// `gammaln` on `(0, 2)`, using `lgamma(x) = lgamma(x + 1) - ln(x)` below `0.9`
///
/// The expansion around the minimum covers `[YMIN - 0.23, YMIN + 0.27)`.
fn small(xc: f64) -> f64 {
    enum Branch {
        Quadratic,
        AroundMinimum,
        NearOne,
    }
    let (mut r, y, branch) = if xc <= 0.9 {
        let r = -xc.ln();
        if xc >= YMIN - 1.0 + 0.27 {
            (r, 1.0 - xc, Branch::Quadratic)
        } else if xc >= YMIN - 1.0 - 0.23 {
            (r, xc - (TC - 1.0), Branch::AroundMinimum)
        } else {
            (r, xc, Branch::NearOne)
        }
    } else if xc >= YMIN + 0.27 {
        (0.0, 2.0 - xc, Branch::Quadratic)
    } else if xc >= YMIN - 0.23 {
        (0.0, xc - TC, Branch::AroundMinimum)
    } else {
        (0.0, xc - 1.0, Branch::NearOne)
    };
    match branch {
        Branch::Quadratic => {
            let z = y * y;
            let p1 = A1C + z * evalpoly(&A1, z);
            let p2 = z * (A2C + z * evalpoly(&A2, z));
            let p = y * p1 + p2;
            r += p - 0.5 * y;
        }
        Branch::AroundMinimum => {
            let z = y * y;
            let w = z * y;
            let p1 = T1C + w * evalpoly(&T1, w);
            let p2 = T2C + w * evalpoly(&T2, w);
            let p3 = T3C + w * evalpoly(&T3, w);
            let p = z * p1 - (TT - w * (p2 + y * p3));
            r += TF + p;
        }
        Branch::NearOne => {
            let p1 = y * (UC + y * evalpoly(&U, y));
            let p2 = VC + y * evalpoly(&V, y);
            r += -0.5 * y + p1 / p2;
        }
    }
    r
}

/// `gammaln` on `[2, 8)` via `lgamma(2 + s)` and the recurrence
fn medium(xc: f64) -> f64 {
    let whole = xc.trunc();
    let y = xc - whole;
    let p = y * (SC + y * evalpoly(&S, y));
    let q = RC + y * evalpoly(&R, y);
    let mut r = 0.5 * y + p / q;
    let mut z = 1.0;
    let mut k = whole;
    while k > 2.0 {
        k -= 1.0;
        z *= y + k;
    }
    if whole > 2.0 {
        r += z.ln();
    }
    r
}

/// Gamma function
///
/// Positive integers use the factorial product directly. `Γ(±0) = ±∞`, negative integers
/// and `-∞` return NaN, and the result overflows to `+∞` above `171.62`.
///
/// # Examples
///
/// ```rust
/// use numkit_special::gamma;
///
/// assert_eq!(gamma(5.0), 24.0);
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-14);
/// assert!((gamma(-0.5) + 2.0 * std::f64::consts::PI.sqrt()).abs() < 1e-14);
/// ```
pub fn gamma(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY.copysign(x);
    }
    if x > GAMMA_MAX {
        return f64::INFINITY;
    }
    if is_integer(x) {
        if x < 0.0 {
            return f64::NAN;
        }
        let mut acc = 1.0;
        let mut k = 2.0;
        while k < x {
            acc *= k;
            k += 1.0;
        }
        return acc;
    }
    let magnitude = gammaln(x).exp();
    // Γ is negative on (-1, 0), (-3, -2), ...
    if x < 0.0 && x.trunc() % 2.0 == 0.0 {
        -magnitude
    } else {
        magnitude
    }
}
