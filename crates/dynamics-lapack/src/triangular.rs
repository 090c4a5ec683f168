//! Triangular solves (`trtrs`).

use crate::cholesky::UpLo;
use crate::error::LapackInfo;
use crate::lu::Trans;
use num_complex::{Complex32, Complex64};

/// `U`nit or `N`on-unit diagonal, matching LAPACK's `diag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diag {
    NonUnit,
    Unit,
}

impl Diag {
    fn as_u8(self) -> u8 {
        match self {
            Diag::NonUnit => b'N',
            Diag::Unit => b'U',
        }
    }
}

fn uplo_u8(uplo: UpLo) -> u8 {
    match uplo {
        UpLo::Upper => b'U',
        UpLo::Lower => b'L',
    }
}

fn trans_u8(trans: Trans) -> u8 {
    match trans {
        Trans::None => b'N',
        Trans::Transpose => b'T',
        Trans::ConjugateTranspose => b'C',
    }
}

/// One of the four scalar kinds capable of a triangular solve.
pub trait TriangularScalar: Copy + private::Sealed {
    fn trtrs(uplo: UpLo, trans: Trans, diag: Diag, n: usize, nrhs: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize) -> Result<(), LapackInfo>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex32 {}
    impl Sealed for super::Complex64 {}
}

macro_rules! impl_triangular_scalar {
    ($ty:ty, $trtrs:path) => {
        impl TriangularScalar for $ty {
            fn trtrs(uplo: UpLo, trans: Trans, diag: Diag, n: usize, nrhs: usize, a: &[Self], lda: usize, b: &mut [Self], ldb: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $trtrs(uplo_u8(uplo), trans_u8(trans), diag.as_u8(), n as i32, nrhs as i32, a, lda as i32, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_triangular_scalar!(f32, lapack::strtrs);
impl_triangular_scalar!(f64, lapack::dtrtrs);
impl_triangular_scalar!(Complex32, lapack::ctrtrs);
impl_triangular_scalar!(Complex64, lapack::ztrtrs);

/// Solves `op(A)·X = B` for triangular `A`, overwriting `b` in place.
pub fn triangular_solve<T: TriangularScalar>(
    uplo: UpLo,
    trans: Trans,
    diag: Diag,
    a: &[T],
    n: usize,
    b: &mut [T],
    nrhs: usize,
) -> Result<(), LapackInfo> {
    T::trtrs(uplo, trans, diag, n, nrhs, a, n, b, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_triangular_solve_is_noop() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        let mut b = vec![1.0, 2.0, 3.0];
        triangular_solve(UpLo::Upper, Trans::None, Diag::NonUnit, &a, n, &mut b, 1).unwrap();
        assert_relative_eq!(b[..], [1.0, 2.0, 3.0][..], epsilon = 1e-12);
    }
}
