//! General LU factorization and solve (`getrf`/`getrs`), dispatched across
//! the four scalar kinds. Matrices are column-major, `lda`/`ldb`
//! equal to the number of rows, matching LAPACK's own convention (and
//! `nalgebra`'s default storage order, so callers can hand in a
//! `DMatrix`'s backing slice directly).

use crate::error::LapackInfo;
use num_complex::{Complex32, Complex64};

/// Transpose mode for [`LuScalar::getrs`], matching LAPACK's `trans` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trans {
    /// Solve `A·x = b`.
    None,
    /// Solve `Aᵀ·x = b`.
    Transpose,
    /// Solve `Aᴴ·x = b` (conjugate transpose; equals [`Trans::Transpose`] for real scalars).
    ConjugateTranspose,
}

impl Trans {
    fn as_u8(self) -> u8 {
        match self {
            Trans::None => b'N',
            Trans::Transpose => b'T',
            Trans::ConjugateTranspose => b'C',
        }
    }
}

/// One of the four scalar kinds capable of general LU factorization
/// and solve. Implemented for `f32`, `f64`, `Complex32`, `Complex64`; no
/// other type may implement it, so a caller cannot accidentally dispatch to
/// a routine LAPACK does not provide.
pub trait LuScalar: Copy + private::Sealed {
    /// `getrf`: factors `a` (m×n, column-major) in place as `P·L·U`, writing
    /// the pivot indices into `ipiv` (length `min(m, n)`).
    fn getrf(m: usize, n: usize, a: &mut [Self], lda: usize, ipiv: &mut [i32]) -> Result<(), LapackInfo>;

    /// `getrs`: solves `op(A)·X = B` given the `getrf` factorization in `a`
    /// and `ipiv`, overwriting `b` (n×nrhs, column-major) with `X`.
    fn getrs(
        trans: Trans,
        n: usize,
        nrhs: usize,
        a: &[Self],
        lda: usize,
        ipiv: &[i32],
        b: &mut [Self],
        ldb: usize,
    ) -> Result<(), LapackInfo>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex32 {}
    impl Sealed for super::Complex64 {}
}

macro_rules! impl_lu_scalar {
    ($ty:ty, $getrf:path, $getrs:path) => {
        impl LuScalar for $ty {
            fn getrf(m: usize, n: usize, a: &mut [Self], lda: usize, ipiv: &mut [i32]) -> Result<(), LapackInfo> {
                let mut info = 0;
                $getrf(m as i32, n as i32, a, lda as i32, ipiv, &mut info);
                LapackInfo::check(info)
            }

            fn getrs(
                trans: Trans,
                n: usize,
                nrhs: usize,
                a: &[Self],
                lda: usize,
                ipiv: &[i32],
                b: &mut [Self],
                ldb: usize,
            ) -> Result<(), LapackInfo> {
                let mut info = 0;
                $getrs(trans.as_u8(), n as i32, nrhs as i32, a, lda as i32, ipiv, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_lu_scalar!(f32, lapack::sgetrf, lapack::sgetrs);
impl_lu_scalar!(f64, lapack::dgetrf, lapack::dgetrs);
impl_lu_scalar!(Complex32, lapack::cgetrf, lapack::cgetrs);
impl_lu_scalar!(Complex64, lapack::zgetrf, lapack::zgetrs);

/// Factors a column-major `n x n` matrix in place and returns the pivot
/// vector, ready for [`lu_solve`].
pub fn lu_factor<T: LuScalar>(a: &mut [T], n: usize) -> Result<Vec<i32>, LapackInfo> {
    let mut ipiv = vec![0i32; n];
    T::getrf(n, n, a, n, &mut ipiv)?;
    Ok(ipiv)
}

/// Solves `A·x = b` given a factorization produced by [`lu_factor`],
/// overwriting `b` in place with `x`.
pub fn lu_solve<T: LuScalar>(
    a: &[T],
    n: usize,
    ipiv: &[i32],
    b: &mut [T],
    nrhs: usize,
) -> Result<(), LapackInfo> {
    T::getrs(Trans::None, n, nrhs, a, n, ipiv, b, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// A random 5×5 positive-definite matrix's LU solve
    /// round-trips `A·(A⁻¹·b) = b` to 1e-10 in double precision.
    #[test]
    fn test_lu_round_trip_double_precision() {
        let n = 5;
        let mut rng = StdRng::seed_from_u64(7);

        // Build a positive-definite A = MᵀM + n·I to keep it well-conditioned.
        let mut m = vec![0.0f64; n * n];
        for v in m.iter_mut() {
            *v = rng.random_range(-1.0..1.0);
        }
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += m[i + k * n] * m[j + k * n];
                }
                a[i + j * n] = sum + if i == j { n as f64 } else { 0.0 };
            }
        }
        let a_orig = a.clone();

        let b: Vec<f64> = (0..n).map(|_| rng.random_range(-5.0..5.0)).collect();
        let mut x = b.clone();

        let ipiv = lu_factor(&mut a, n).unwrap();
        lu_solve(&a, n, &ipiv, &mut x, 1).unwrap();

        for i in 0..n {
            let mut recomputed = 0.0;
            for j in 0..n {
                recomputed += a_orig[i + j * n] * x[j];
            }
            assert_relative_eq!(recomputed, b[i], epsilon = 1e-10);
        }
    }
}
