//! Givens rotation construction

use numkit_core::Real;

/// Parameters of a Givens plane rotation
///
/// `[c s; -s c] * [a; b] = [r; 0]`. `z` encodes the rotation compactly: it
/// is `s` when `|a| > |b|`, `1/c` when `c != 0`, and `1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation<T> {
    pub r: T,
    pub z: T,
    pub c: T,
    pub s: T,
}

/// Construct the Givens rotation that zeroes `b`
pub fn rotg<T: Real>(a: T, b: T) -> GivensRotation<T> {
    let anorm = a.abs();
    let bnorm = b.abs();
    let scale = anorm + bnorm;
    if scale == T::zero() {
        return GivensRotation {
            r: T::zero(),
            z: T::zero(),
            c: T::one(),
            s: T::zero(),
        };
    }
    let sigma = if anorm > bnorm {
        T::one().copysign(a)
    } else {
        T::one().copysign(b)
    };
    let (sa, sb) = (a / scale, b / scale);
    let r = sigma * scale * (sa * sa + sb * sb).sqrt();
    let c = a / r;
    let s = b / r;
    let z = if anorm > bnorm {
        s
    } else if c != T::zero() {
        T::one() / c
    } else {
        T::one()
    };
    GivensRotation { r, z, c, s }
}

/// Construct a single-precision Givens rotation
pub fn srotg(a: f32, b: f32) -> GivensRotation<f32> {
    rotg(a, b)
}

/// Construct a double-precision Givens rotation
pub fn drotg(a: f64, b: f64) -> GivensRotation<f64> {
    rotg(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_drotg_three_four_five() {
        let g = drotg(3.0, 4.0);
        assert_relative_eq!(g.r, 5.0, epsilon = 1e-15);
        assert_relative_eq!(g.c, 0.6, epsilon = 1e-15);
        assert_relative_eq!(g.s, 0.8, epsilon = 1e-15);
        assert_relative_eq!(g.z, 1.0 / 0.6, epsilon = 1e-14);
    }

    #[test]
    fn test_drotg_dominant_a() {
        let g = drotg(-4.0, 3.0);
        assert_relative_eq!(g.r, -5.0, epsilon = 1e-15);
        assert_relative_eq!(g.c, 0.8, epsilon = 1e-15);
        assert_relative_eq!(g.s, -0.6, epsilon = 1e-15);
        assert_eq!(g.z, g.s);
    }

    #[test]
    fn test_rotg_zeroes_b() {
        let (a, b) = (1.5f32, -2.5f32);
        let g = srotg(a, b);
        assert_relative_eq!(g.c * a + g.s * b, g.r, epsilon = 1e-5);
        assert_relative_eq!(-g.s * a + g.c * b, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_rotg_degenerate() {
        let g = drotg(0.0, 0.0);
        assert_eq!(g, GivensRotation { r: 0.0, z: 0.0, c: 1.0, s: 0.0 });

        let g = drotg(0.0, 2.0);
        assert_eq!(g.c, 0.0);
        assert_eq!(g.s, 1.0);
        assert_eq!(g.z, 1.0);
    }
}
