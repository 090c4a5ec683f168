//! Banded and tridiagonal LU: `gtsv`-family direct solves for
//! tridiagonal systems, which the dense `getrf`/`getrs` pair would waste
//! `O(n²)` storage and `O(n³)` work on.

use crate::error::LapackInfo;
use num_complex::{Complex32, Complex64};

/// One of the four scalar kinds capable of a tridiagonal LU solve.
pub trait TridiagonalScalar: Copy + private::Sealed {
    /// `gtsv`: solves `A·X = B` for tridiagonal `A` given its sub-diagonal
    /// `dl` (length n-1), diagonal `d` (length n), and super-diagonal `du`
    /// (length n-1), overwriting `b` (n×nrhs, column-major) with `X`. `dl`
    /// and `du` are destroyed.
    fn gtsv(n: usize, nrhs: usize, dl: &mut [Self], d: &mut [Self], du: &mut [Self], b: &mut [Self], ldb: usize) -> Result<(), LapackInfo>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::Complex32 {}
    impl Sealed for super::Complex64 {}
}

macro_rules! impl_tridiagonal_scalar {
    ($ty:ty, $gtsv:path) => {
        impl TridiagonalScalar for $ty {
            fn gtsv(n: usize, nrhs: usize, dl: &mut [Self], d: &mut [Self], du: &mut [Self], b: &mut [Self], ldb: usize) -> Result<(), LapackInfo> {
                let mut info = 0;
                $gtsv(n as i32, nrhs as i32, dl, d, du, b, ldb as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_tridiagonal_scalar!(f32, lapack::sgtsv);
impl_tridiagonal_scalar!(f64, lapack::dgtsv);
impl_tridiagonal_scalar!(Complex32, lapack::cgtsv);
impl_tridiagonal_scalar!(Complex64, lapack::zgtsv);

/// Solves a tridiagonal system in one call, overwriting `b` with the solution.
pub fn tridiagonal_solve<T: TridiagonalScalar>(
    dl: &mut [T],
    d: &mut [T],
    du: &mut [T],
    b: &mut [T],
    nrhs: usize,
) -> Result<(), LapackInfo> {
    let n = d.len();
    T::gtsv(n, nrhs, dl, d, du, b, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tridiagonal_solve_matches_identity_system() {
        let mut dl = vec![0.0f64; 2];
        let mut d = vec![1.0f64; 3];
        let mut du = vec![0.0f64; 2];
        let mut b = vec![1.0, 2.0, 3.0];
        tridiagonal_solve(&mut dl, &mut d, &mut du, &mut b, 1).unwrap();
        assert_relative_eq!(b[..], [1.0, 2.0, 3.0][..], epsilon = 1e-12);
    }
}
