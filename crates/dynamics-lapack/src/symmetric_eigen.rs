//! Symmetric (real) / Hermitian (complex) eigendecomposition, full
//! (`syev`/`heev`) and selective by index range (`syevr`/`heevr`).
//! Real and complex scalars diverge here: `heev`/`heevr` need a separate
//! real `rwork` scratch array the real-only `syev`/`syevr` routines don't,
//! so this module, unlike [`crate::lu`], exposes one real-kind trait and
//! one complex-kind trait rather than a single unified one.

use crate::cholesky::UpLo;
use crate::error::LapackInfo;
use crate::workspace::{recommended_lwork_complex, recommended_lwork_real, Workspace};
use num_complex::{Complex32, Complex64};

/// Real symmetric eigendecomposition (`f32`/`f64`).
pub trait RealSymmetricEigenScalar: Copy {
    /// `syev`: full eigendecomposition. On return `a` holds the
    /// eigenvectors (column `i` for eigenvalue `w[i]`) if `jobz` requests
    /// them.
    fn syev(jobz: u8, uplo: UpLo, n: usize, a: &mut [Self], lda: usize, w: &mut [Self]) -> Result<(), LapackInfo>;

    /// `syevr`: eigenvalues/vectors with indices in `[il, iu]` (1-based,
    /// ascending order), writing the count found into the return value.
    fn syevr(
        jobz: u8,
        uplo: UpLo,
        n: usize,
        a: &mut [Self],
        lda: usize,
        il: usize,
        iu: usize,
        w: &mut [Self],
        z: &mut [Self],
        ldz: usize,
    ) -> Result<usize, LapackInfo>;
}

/// Complex Hermitian eigendecomposition (`Complex32`/`Complex64`).
pub trait ComplexHermitianEigenScalar: Copy {
    type Real: Copy + Default;

    fn heev(jobz: u8, uplo: UpLo, n: usize, a: &mut [Self], lda: usize, w: &mut [Self::Real]) -> Result<(), LapackInfo>;

    fn heevr(
        jobz: u8,
        uplo: UpLo,
        n: usize,
        a: &mut [Self],
        lda: usize,
        il: usize,
        iu: usize,
        w: &mut [Self::Real],
        z: &mut [Self],
        ldz: usize,
    ) -> Result<usize, LapackInfo>;
}

macro_rules! impl_real_symmetric_eigen {
    ($ty:ty, $syev:path, $syevr:path) => {
        impl RealSymmetricEigenScalar for $ty {
            fn syev(jobz: u8, uplo: UpLo, n: usize, a: &mut [Self], lda: usize, w: &mut [Self]) -> Result<(), LapackInfo> {
                let mut probe = [0 as $ty; 1];
                let mut info = 0;
                $syev(jobz, uplo_u8(uplo), n as i32, a, lda as i32, w, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(probe[0] as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $syev(jobz, uplo_u8(uplo), n as i32, a, lda as i32, w, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }

            fn syevr(
                jobz: u8,
                uplo: UpLo,
                n: usize,
                a: &mut [Self],
                lda: usize,
                il: usize,
                iu: usize,
                w: &mut [Self],
                z: &mut [Self],
                ldz: usize,
            ) -> Result<usize, LapackInfo> {
                let mut m = 0i32;
                let mut isuppz = vec![0i32; 2 * n.max(1)];
                let mut work_probe = [0 as $ty; 1];
                let mut iwork_probe = [0i32; 1];
                let mut info = 0;
                $syevr(
                    jobz, b'I', uplo_u8(uplo), n as i32, a, lda as i32, 0 as $ty, 0 as $ty, il as i32, iu as i32,
                    0 as $ty, &mut m, w, z, ldz as i32, &mut isuppz, &mut work_probe, -1, &mut iwork_probe, -1,
                    &mut info,
                );
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(work_probe[0] as f64);
                let liwork = iwork_probe[0].max(1) as usize;
                let mut work = Workspace::<$ty>::sized(lwork);
                let mut iwork = vec![0i32; liwork];
                $syevr(
                    jobz,
                    b'I',
                    uplo_u8(uplo),
                    n as i32,
                    a,
                    lda as i32,
                    0 as $ty,
                    0 as $ty,
                    il as i32,
                    iu as i32,
                    0 as $ty,
                    &mut m,
                    w,
                    z,
                    ldz as i32,
                    &mut isuppz,
                    work.as_mut_slice(),
                    lwork as i32,
                    &mut iwork,
                    liwork as i32,
                    &mut info,
                );
                LapackInfo::check(info)?;
                Ok(m as usize)
            }
        }
    };
}

fn uplo_u8(uplo: UpLo) -> u8 {
    match uplo {
        UpLo::Upper => b'U',
        UpLo::Lower => b'L',
    }
}

impl_real_symmetric_eigen!(f32, lapack::ssyev, lapack::ssyevr);
impl_real_symmetric_eigen!(f64, lapack::dsyev, lapack::dsyevr);

macro_rules! impl_complex_hermitian_eigen {
    ($ty:ty, $real:ty, $heev:path, $heevr:path) => {
        impl ComplexHermitianEigenScalar for $ty {
            type Real = $real;

            fn heev(jobz: u8, uplo: UpLo, n: usize, a: &mut [Self], lda: usize, w: &mut [Self::Real]) -> Result<(), LapackInfo> {
                // rwork has no query variant; its size is a fixed
                // LAPACK-mandated formula, unlike the queried `lwork`.
                let rwork_len = if 3 * n >= 2 { 3 * n - 2 } else { 0 }.max(1);
                let mut rwork = vec![0 as $real; rwork_len];
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $heev(jobz, uplo_u8(uplo), n as i32, a, lda as i32, w, &mut probe, -1, &mut rwork, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_complex(probe[0].re as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $heev(jobz, uplo_u8(uplo), n as i32, a, lda as i32, w, work.as_mut_slice(), lwork as i32, &mut rwork, &mut info);
                LapackInfo::check(info)
            }

            fn heevr(
                jobz: u8,
                uplo: UpLo,
                n: usize,
                a: &mut [Self],
                lda: usize,
                il: usize,
                iu: usize,
                w: &mut [Self::Real],
                z: &mut [Self],
                ldz: usize,
            ) -> Result<usize, LapackInfo> {
                let mut m = 0i32;
                let mut isuppz = vec![0i32; 2 * n.max(1)];
                let mut work_probe = [<$ty>::default(); 1];
                let mut rwork_probe = [0 as $real; 1];
                let mut iwork_probe = [0i32; 1];
                let mut info = 0;
                $heevr(
                    jobz, b'I', uplo_u8(uplo), n as i32, a, lda as i32, 0 as $real, 0 as $real, il as i32,
                    iu as i32, 0 as $real, &mut m, w, z, ldz as i32, &mut isuppz, &mut work_probe, -1,
                    &mut rwork_probe, -1, &mut iwork_probe, -1, &mut info,
                );
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_complex(work_probe[0].re as f64);
                let lrwork = rwork_probe[0].max(1 as $real) as usize;
                let liwork = iwork_probe[0].max(1) as usize;
                let mut work = Workspace::<$ty>::sized(lwork);
                let mut rwork = vec![0 as $real; lrwork];
                let mut iwork = vec![0i32; liwork];
                $heevr(
                    jobz,
                    b'I',
                    uplo_u8(uplo),
                    n as i32,
                    a,
                    lda as i32,
                    0 as $real,
                    0 as $real,
                    il as i32,
                    iu as i32,
                    0 as $real,
                    &mut m,
                    w,
                    z,
                    ldz as i32,
                    &mut isuppz,
                    work.as_mut_slice(),
                    lwork as i32,
                    &mut rwork,
                    lrwork as i32,
                    &mut iwork,
                    liwork as i32,
                    &mut info,
                );
                LapackInfo::check(info)?;
                Ok(m as usize)
            }
        }
    };
}

impl_complex_hermitian_eigen!(Complex32, f32, lapack::cheev, lapack::cheevr);
impl_complex_hermitian_eigen!(Complex64, f64, lapack::zheev, lapack::zheevr);

/// Full symmetric eigendecomposition, eigenvalues ascending.
pub fn symmetric_eigen_full<T: RealSymmetricEigenScalar + Default + Clone>(
    a: &mut [T],
    n: usize,
) -> Result<Vec<T>, LapackInfo> {
    let mut w = vec![T::default(); n];
    T::syev(b'V', UpLo::Lower, n, a, n, &mut w)?;
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_matrix_eigenvalues_are_its_diagonal() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        let diag = [1.0, 2.0, 3.0];
        for i in 0..n {
            a[i + i * n] = diag[i];
        }
        let w = symmetric_eigen_full(&mut a, n).unwrap();
        assert_relative_eq!(w[..], diag[..], epsilon = 1e-10);
    }
}
