//! Cholesky (`potrf`/`potrs`) and symmetric/Hermitian indefinite (`sytrf`/
//! `sytrs`) factorizations.

use crate::error::LapackInfo;
use crate::workspace::{recommended_lwork_complex, recommended_lwork_real, Workspace};
use num_complex::{Complex32, Complex64};

/// `U` (upper) or `L` (lower) triangular storage, matching LAPACK's `uplo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpLo {
    Upper,
    Lower,
}

impl UpLo {
    fn as_u8(self) -> u8 {
        match self {
            UpLo::Upper => b'U',
            UpLo::Lower => b'L',
        }
    }
}

/// One of the four scalar kinds capable of Cholesky factorization.
pub trait CholeskyScalar: Copy + private::Sealed {
    fn potrf(uplo: UpLo, n: usize, a: &mut [Self], lda: usize) -> Result<(), LapackInfo>;
    fn potrs(uplo: UpLo, n: usize, nrhs: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize) -> Result<(), LapackInfo>;
}

/// One of the four scalar kinds capable of a symmetric (real) / Hermitian
/// (complex) indefinite factorization, for matrices that are symmetric but
/// not positive-definite.
pub trait SymmetricIndefiniteScalar: Copy + private::Sealed + Default {
    /// `sytrf`: queries its own workspace size (`lwork = -1`) before
    /// factoring, per the LAPACK workspace-query idiom.
    fn sytrf(uplo: UpLo, n: usize, a: &mut [Self], lda: usize, ipiv: &mut [i32]) -> Result<(), LapackInfo>;
    fn sytrs(uplo: UpLo, n: usize, nrhs: usize, a: &[Self], lda: usize, ipiv: &[i32], b: &mut [Self], ldb: usize) -> Result<(), LapackInfo>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex32 {}
    impl Sealed for super::Complex64 {}
}

macro_rules! impl_cholesky_scalar {
    ($ty:ty, $potrf:path, $potrs:path) => {
        impl CholeskyScalar for $ty {
            fn potrf(uplo: UpLo, n: usize, a: &mut [Self], lda: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $potrf(uplo.as_u8(), n as i32, a, lda as i32, &mut info);
                LapackInfo::check(info)
            }

            fn potrs(uplo: UpLo, n: usize, nrhs: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $potrs(uplo.as_u8(), n as i32, nrhs as i32, a, lda as i32, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_cholesky_scalar!(f32, lapack::spotrf, lapack::spotrs);
impl_cholesky_scalar!(f64, lapack::dpotrf, lapack::dpotrs);
impl_cholesky_scalar!(Complex32, lapack::cpotrf, lapack::cpotrs);
impl_cholesky_scalar!(Complex64, lapack::zpotrf, lapack::zpotrs);

macro_rules! impl_symmetric_indefinite_scalar_real {
    ($ty:ty, $sytrf:path, $sytrs:path) => {
        impl SymmetricIndefiniteScalar for $ty {
            fn sytrf(uplo: UpLo, n: usize, a: &mut [Self], lda: usize, ipiv: &mut [i32]) -> Result<(), LapackInfo> {
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $sytrf(uplo.as_u8(), n as i32, a, lda as i32, ipiv, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(probe[0] as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $sytrf(uplo.as_u8(), n as i32, a, lda as i32, ipiv, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }

            fn sytrs(uplo: UpLo, n: usize, nrhs: usize, a: &[Self], lda: usize, ipiv: &[i32], b: &mut [Self], ldb: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $sytrs(uplo.as_u8(), n as i32, nrhs as i32, a, lda as i32, ipiv, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

macro_rules! impl_symmetric_indefinite_scalar_complex {
    ($ty:ty, $sytrf:path, $sytrs:path) => {
        impl SymmetricIndefiniteScalar for $ty {
            fn sytrf(uplo: UpLo, n: usize, a: &mut [Self], lda: usize, ipiv: &mut [i32]) -> Result<(), LapackInfo> {
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $sytrf(uplo.as_u8(), n as i32, a, lda as i32, ipiv, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_complex(probe[0].re as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $sytrf(uplo.as_u8(), n as i32, a, lda as i32, ipiv, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }

            fn sytrs(uplo: UpLo, n: usize, nrhs: usize, a: &[Self], lda: usize, ipiv: &[i32], b: &mut [Self], ldb: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $sytrs(uplo.as_u8(), n as i32, nrhs as i32, a, lda as i32, ipiv, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_symmetric_indefinite_scalar_real!(f32, lapack::ssytrf, lapack::ssytrs);
impl_symmetric_indefinite_scalar_real!(f64, lapack::dsytrf, lapack::dsytrs);
impl_symmetric_indefinite_scalar_complex!(Complex32, lapack::csytrf, lapack::csytrs);
impl_symmetric_indefinite_scalar_complex!(Complex64, lapack::zsytrf, lapack::zsytrs);

/// Symmetric/Hermitian indefinite factorization in place, ready for
/// [`symmetric_indefinite_solve`].
pub fn symmetric_indefinite_factor<T: SymmetricIndefiniteScalar>(
    a: &mut [T],
    n: usize,
) -> Result<Vec<i32>, LapackInfo> {
    let mut ipiv = vec![0i32; n];
    T::sytrf(UpLo::Lower, n, a, n, &mut ipiv)?;
    Ok(ipiv)
}

/// Solves `A·x = b` given a factorization from
/// [`symmetric_indefinite_factor`].
pub fn symmetric_indefinite_solve<T: SymmetricIndefiniteScalar>(
    a: &[T],
    n: usize,
    ipiv: &[i32],
    b: &mut [T],
    nrhs: usize,
) -> Result<(), LapackInfo> {
    T::sytrs(UpLo::Lower, n, nrhs, a, n, ipiv, b, n)
}

/// Cholesky-factors a column-major `n x n` matrix in place (lower
/// triangle), ready for [`cholesky_solve`].
pub fn cholesky_factor<T: CholeskyScalar>(a: &mut [T], n: usize) -> Result<(), LapackInfo> {
    T::potrf(UpLo::Lower, n, a, n)
}

/// Solves `A·x = b` given a factorization from [`cholesky_factor`].
pub fn cholesky_solve<T: CholeskyScalar>(a: &[T], n: usize, b: &mut [T], nrhs: usize) -> Result<(), LapackInfo> {
    T::potrs(UpLo::Lower, n, nrhs, a, n, b, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cholesky_solves_identity() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        cholesky_factor(&mut a, n).unwrap();
        let mut b = vec![1.0, 2.0, 3.0];
        cholesky_solve(&a, n, &mut b, 1).unwrap();
        assert_relative_eq!(b[..], [1.0, 2.0, 3.0][..], epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_indefinite_solves_identity() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        let ipiv = symmetric_indefinite_factor(&mut a, n).unwrap();
        let mut b = vec![1.0, 2.0, 3.0];
        symmetric_indefinite_solve(&a, n, &ipiv, &mut b, 1).unwrap();
        assert_relative_eq!(b[..], [1.0, 2.0, 3.0][..], epsilon = 1e-12);
    }
}
