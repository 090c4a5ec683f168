//! QR factorization with column pivoting (`geqp3`) and reconstruction of
//! the explicit `Q` matrix from its Householder-reflector representation
//! (`orgqr`/`ungqr`).

use crate::error::LapackInfo;
use crate::workspace::{recommended_lwork_complex, recommended_lwork_real, Workspace};
use num_complex::{Complex32, Complex64};

/// Real QR with column pivoting (`f32`/`f64`).
pub trait RealQrScalar: Copy {
    /// `geqp3`: factors `a` (m×n) in place, `R` in the upper triangle and
    /// Householder reflectors below it, recording the final column order
    /// in `jpvt` (1-based, in/out: a nonzero entry on input forces that
    /// column to the front) and the reflector scalars in `tau`.
    fn geqp3(m: usize, n: usize, a: &mut [Self], lda: usize, jpvt: &mut [i32], tau: &mut [Self]) -> Result<(), LapackInfo>;

    /// `orgqr`: expands the reflectors left by [`Self::geqp3`] in `a` into
    /// the explicit `m x k` matrix `Q`, overwriting `a`.
    fn orgqr(m: usize, n: usize, k: usize, a: &mut [Self], lda: usize, tau: &[Self]) -> Result<(), LapackInfo>;
}

/// Complex QR with column pivoting (`Complex32`/`Complex64`).
pub trait ComplexQrScalar: Copy {
    fn geqp3(m: usize, n: usize, a: &mut [Self], lda: usize, jpvt: &mut [i32], tau: &mut [Self]) -> Result<(), LapackInfo>;
    fn ungqr(m: usize, n: usize, k: usize, a: &mut [Self], lda: usize, tau: &[Self]) -> Result<(), LapackInfo>;
}

macro_rules! impl_real_qr {
    ($ty:ty, $geqp3:path, $orgqr:path) => {
        impl RealQrScalar for $ty {
            fn geqp3(m: usize, n: usize, a: &mut [Self], lda: usize, jpvt: &mut [i32], tau: &mut [Self]) -> Result<(), LapackInfo> {
                // Workspace query: probe with lwork = -1, then allocate the
                // size LAPACK writes into work[0] and call again for real.
                let mut probe = [0 as $ty; 1];
                let mut info = 0;
                $geqp3(m as i32, n as i32, a, lda as i32, jpvt, tau, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(probe[0] as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $geqp3(m as i32, n as i32, a, lda as i32, jpvt, tau, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }

            fn orgqr(m: usize, n: usize, k: usize, a: &mut [Self], lda: usize, tau: &[Self]) -> Result<(), LapackInfo> {
                let mut probe = [0 as $ty; 1];
                let mut info = 0;
                $orgqr(m as i32, n as i32, k as i32, a, lda as i32, tau, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(probe[0] as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $orgqr(m as i32, n as i32, k as i32, a, lda as i32, tau, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_real_qr!(f32, lapack::sgeqp3, lapack::sorgqr);
impl_real_qr!(f64, lapack::dgeqp3, lapack::dorgqr);

macro_rules! impl_complex_qr {
    ($ty:ty, $geqp3:path, $ungqr:path) => {
        impl ComplexQrScalar for $ty {
            fn geqp3(m: usize, n: usize, a: &mut [Self], lda: usize, jpvt: &mut [i32], tau: &mut [Self]) -> Result<(), LapackInfo> {
                let mut rwork = vec![0.0f64; (2 * n).max(1)];
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $geqp3(m as i32, n as i32, a, lda as i32, jpvt, tau, &mut probe, -1, &mut rwork, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_complex(probe[0].re as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $geqp3(m as i32, n as i32, a, lda as i32, jpvt, tau, work.as_mut_slice(), lwork as i32, &mut rwork, &mut info);
                LapackInfo::check(info)
            }

            fn ungqr(m: usize, n: usize, k: usize, a: &mut [Self], lda: usize, tau: &[Self]) -> Result<(), LapackInfo> {
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $ungqr(m as i32, n as i32, k as i32, a, lda as i32, tau, &mut probe, -1, &mut info);
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_complex(probe[0].re as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $ungqr(m as i32, n as i32, k as i32, a, lda as i32, tau, work.as_mut_slice(), lwork as i32, &mut info);
                LapackInfo::check(info)
            }
        }
    };
}

impl_complex_qr!(Complex32, lapack::cgeqp3, lapack::cungqr);
impl_complex_qr!(Complex64, lapack::zgeqp3, lapack::zungqr);

/// Factors `a` (m×n, column-major, `m >= n`) with column pivoting, then
/// expands the reflectors into the explicit `Q`, overwriting `a` with it
/// and returning `(R, jpvt)`: `R` taken from the upper triangle before
/// expansion, `jpvt` the 1-based column permutation.
pub fn qr_with_pivoting<T: RealQrScalar + Default + Clone>(
    a: &mut [T],
    m: usize,
    n: usize,
) -> Result<(Vec<T>, Vec<i32>), LapackInfo> {
    let mut jpvt = vec![0i32; n];
    let mut tau = vec![T::default(); m.min(n)];
    T::geqp3(m, n, a, m, &mut jpvt, &mut tau)?;

    let mut r = vec![T::default(); n * n];
    for col in 0..n {
        for row in 0..=col.min(n - 1) {
            if row < m {
                r[row + col * n] = a[row + col * m].clone();
            }
        }
    }

    T::orgqr(m, n, m.min(n), a, m, &tau)?;
    Ok((r, jpvt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_qr_leaves_q_as_identity() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        for i in 0..n {
            a[i + i * n] = 1.0;
        }
        let (_, jpvt) = qr_with_pivoting(&mut a, n, n).unwrap();
        assert_eq!(jpvt.len(), n);
        for i in 0..n {
            assert_relative_eq!(a[i + i * n].abs(), 1.0, epsilon = 1e-10);
        }
    }
}
