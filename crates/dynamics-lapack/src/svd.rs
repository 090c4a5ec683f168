//! Singular value decomposition via the divide-and-conquer driver
//! (`gesdd`).
//!
//! A `jobz` bug observed in prior SVD wrappers:
//! workspace sizing branched on `jobz = 'N'` (an *assignment*, always true,
//! always taking the `jobz=='N'` branch) rather than `jobz == 'N'` (a
//! *comparison*). This module uses the comparison: `5*min(m,n)` workspace
//! when `jobz == 'N'`, else `5*min(m,n)^2 + 7*min(m,n)`, so a caller
//! requesting singular vectors (`jobz != 'N'`) gets a correctly sized
//! buffer instead of one sized for the no-vectors case.

use crate::error::LapackInfo;
use num_complex::{Complex32, Complex64};

/// What [`svd`] should compute, mirroring `gesdd`'s `jobz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvdJob {
    /// Singular values only.
    ValuesOnly,
    /// Full `U`/`Vᵀ` (or `Vᴴ`).
    Full,
}

impl SvdJob {
    fn as_u8(self) -> u8 {
        match self {
            SvdJob::ValuesOnly => b'N',
            SvdJob::Full => b'A',
        }
    }
}

/// Real SVD (`f32`/`f64`).
pub trait RealSvdScalar: Copy {
    fn gesdd(jobz: u8, m: usize, n: usize, a: &mut [Self], lda: usize, s: &mut [Self], u: &mut [Self], ldu: usize, vt: &mut [Self], ldvt: usize) -> Result<(), LapackInfo>;
}

/// Complex SVD (`Complex32`/`Complex64`); singular values are always real.
pub trait ComplexSvdScalar: Copy {
    type Real;
    fn gesdd(jobz: u8, m: usize, n: usize, a: &mut [Self], lda: usize, s: &mut [Self::Real], u: &mut [Self], ldu: usize, vt: &mut [Self], ldvt: usize) -> Result<(), LapackInfo>;
}

macro_rules! impl_real_svd {
    ($ty:ty, $gesdd:path) => {
        impl RealSvdScalar for $ty {
            fn gesdd(jobz: u8, m: usize, n: usize, a: &mut [Self], lda: usize, s: &mut [Self], u: &mut [Self], ldu: usize, vt: &mut [Self], ldvt: usize) -> Result<(), LapackInfo> {
                let mn = m.min(n);
                // compare jobz to 'N', don't assign it.
                let lwork = if jobz == b'N' { 5 * mn } else { 5 * mn * mn + 7 * mn }.max(1);
                let mut work = vec![0 as $ty; lwork];
                let mut iwork = vec![0i32; 8 * mn.max(1)];
                let mut info = 0;
                $gesdd(
                    jobz, m as i32, n as i32, a, lda as i32, s, u, ldu as i32, vt, ldvt as i32, &mut work, lwork as i32, &mut iwork, &mut info,
                );
                LapackInfo::check(info)
            }
        }
    };
}

impl_real_svd!(f32, lapack::sgesdd);
impl_real_svd!(f64, lapack::dgesdd);

macro_rules! impl_complex_svd {
    ($ty:ty, $real:ty, $gesdd:path) => {
        impl ComplexSvdScalar for $ty {
            type Real = $real;

            fn gesdd(jobz: u8, m: usize, n: usize, a: &mut [Self], lda: usize, s: &mut [Self::Real], u: &mut [Self], ldu: usize, vt: &mut [Self], ldvt: usize) -> Result<(), LapackInfo> {
                let mn = m.min(n);
                let mx = m.max(n);
                // compare jobz to 'N', don't assign it.
                let lwork = if jobz == b'N' { 2 * mn + mx } else { 2 * mn * mn + 2 * mn + mx }.max(1);
                let mut work = vec![<$ty>::default(); lwork];
                let lrwork = if jobz == b'N' {
                    7 * mn
                } else {
                    mn * (5 * mn + 7).max(2 * mx + 2 * mn + 1)
                }
                .max(1);
                let mut rwork = vec![0 as $real; lrwork];
                let mut iwork = vec![0i32; 8 * mn.max(1)];
                let mut info = 0;
                $gesdd(
                    jobz, m as i32, n as i32, a, lda as i32, s, u, ldu as i32, vt, ldvt as i32, &mut work, lwork as i32, &mut rwork, &mut iwork, &mut info,
                );
                LapackInfo::check(info)
            }
        }
    };
}

impl_complex_svd!(Complex32, f32, lapack::cgesdd);
impl_complex_svd!(Complex64, f64, lapack::zgesdd);

/// Singular values only, ascending-index order as LAPACK returns them
/// (descending by magnitude).
pub fn singular_values<T: RealSvdScalar + Default + Clone>(a: &mut [T], m: usize, n: usize) -> Result<Vec<T>, LapackInfo> {
    let mn = m.min(n);
    let mut s = vec![T::default(); mn];
    let mut u = vec![T::default(); 1];
    let mut vt = vec![T::default(); 1];
    T::gesdd(SvdJob::ValuesOnly.as_u8(), m, n, a, m, &mut s, &mut u, 1, &mut vt, 1)?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_singular_values_are_one() {
        let n = 4;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        let s = singular_values(&mut a, n, n).unwrap();
        for v in s {
            assert_relative_eq!(v, 1.0, epsilon = 1e-10);
        }
    }
}
