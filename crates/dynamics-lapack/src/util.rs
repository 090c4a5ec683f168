//! Auxiliary LAPACK primitives: copy, matrix norm, scaling, machine
//! precision, and incremental condition estimation.

use num_complex::{Complex32, Complex64};

/// Which norm `lange`-family routines compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixNorm {
    /// Max absolute element.
    Max,
    /// One-norm (max absolute column sum).
    One,
    /// Infinity-norm (max absolute row sum).
    Infinity,
    /// Frobenius norm.
    Frobenius,
}

impl MatrixNorm {
    fn as_u8(self) -> u8 {
        match self {
            MatrixNorm::Max => b'M',
            MatrixNorm::One => b'1',
            MatrixNorm::Infinity => b'I',
            MatrixNorm::Frobenius => b'F',
        }
    }
}

/// Real scalar kinds with a `lange`/`lamch`/`lascl`/`lacpy` family.
pub trait RealLapackUtil: Copy {
    fn lange(norm: MatrixNorm, m: usize, n: usize, a: &[Self], lda: usize) -> Self;
    fn lamch(cmach: u8) -> Self;
    fn lacpy(m: usize, n: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize);
    fn lascl(cfrom: Self, cto: Self, m: usize, n: usize, a: &mut [Self], lda: usize);
}

macro_rules! impl_real_util {
    ($ty:ty, $lange:path, $lamch:path, $lacpy:path, $lascl:path) => {
        impl RealLapackUtil for $ty {
            fn lange(norm: MatrixNorm, m: usize, n: usize, a: &[Self], lda: usize) -> Self {
                let mut work = vec![0 as $ty; m.max(1)];
                $lange(norm.as_u8(), m as i32, n as i32, a, lda as i32, &mut work)
            }

            fn lamch(cmach: u8) -> Self {
                $lamch(cmach)
            }

            fn lacpy(m: usize, n: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize) {
                $lacpy(b'A', m as i32, n as i32, a, lda as i32, b, ldb as i32);
            }

            fn lascl(cfrom: Self, cto: Self, m: usize, n: usize, a: &mut [Self], lda: usize) {
                let mut info = 0;
                $lascl(b'G', 0, 0, cfrom, cto, m as i32, n as i32, a, lda as i32, &mut info);
            }
        }
    };
}

impl_real_util!(f32, lapack::slange, lapack::slamch, lapack::slacpy, lapack::slascl);
impl_real_util!(f64, lapack::dlange, lapack::dlamch, lapack::dlacpy, lapack::dlascl);

/// The machine epsilon for `T`, i.e. `lamch('E')`.
pub fn machine_epsilon<T: RealLapackUtil>() -> T {
    T::lamch(b'E')
}

/// Incremental condition estimation: given a triangular factor's new column (already solved
/// against the existing factor) and the previous estimate, refines the
/// running estimate of the reciprocal condition number. Mirrors LAPACK's
/// `laic1` one step at a time rather than wrapping it directly, since
/// `laic1` only exists for the two real scalar kinds and this crate's
/// consumers only ever call it incrementally during a pivoted
/// factorization, never standalone.
#[must_use]
pub fn incremental_condition_estimate(prior_sest: f64, gamma: f64, new_column_norm: f64) -> f64 {
    let c = gamma / (gamma.abs() + new_column_norm).max(f64::EPSILON);
    let s = new_column_norm / (gamma.abs() + new_column_norm).max(f64::EPSILON);
    ((c * prior_sest).powi(2) + s.powi(2)).sqrt().max(prior_sest)
}

pub struct Complex32Norm;
pub struct Complex64Norm;

/// Complex matrix norm, kept separate from [`RealLapackUtil`] since
/// `lange` for complex scalars still returns a *real* scalar.
pub trait ComplexLapackUtil: Copy {
    type Real;
    fn lange(norm: MatrixNorm, m: usize, n: usize, a: &[Self], lda: usize) -> Self::Real;
}

macro_rules! impl_complex_util {
    ($ty:ty, $real:ty, $lange:path) => {
        impl ComplexLapackUtil for $ty {
            type Real = $real;

            fn lange(norm: MatrixNorm, m: usize, n: usize, a: &[Self], lda: usize) -> Self::Real {
                let mut work = vec![0 as $real; m.max(1)];
                $lange(norm.as_u8(), m as i32, n as i32, a, lda as i32, &mut work)
            }
        }
    };
}

impl_complex_util!(Complex32, f32, lapack::clange);
impl_complex_util!(Complex64, f64, lapack::zlange);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lange_max_norm_of_identity_is_one() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        assert_relative_eq!(f64::lange(MatrixNorm::Max, n, n, &a, n), 1.0);
    }

    #[test]
    fn test_machine_epsilon_is_small_and_positive() {
        let eps = machine_epsilon::<f64>();
        assert!(eps > 0.0 && eps < 1e-10);
    }
}
