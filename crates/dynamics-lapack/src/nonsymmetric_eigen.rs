//! Non-symmetric eigendecomposition (`geev`), with the post-processing
//! step the real-valued routines need: LAPACK's `sgeev`/`dgeev` pack a
//! complex-conjugate eigenvalue pair into two *real* columns of `vr` rather
//! than returning complex vectors directly, so this module re-expands them
//! into genuine `Complex32`/`Complex64` columns. The complex-scalar
//! routines (`cgeev`/`zgeev`) need no such repacking: they already return
//! complex eigenvalues and eigenvectors, so they bypass this step
//! entirely.

use crate::error::LapackInfo;
use crate::workspace::{recommended_lwork_real, Workspace};
use num_complex::{Complex32, Complex64};

/// A real non-symmetric eigendecomposition, with eigenvalues/eigenvectors
/// already re-expanded into complex form.
pub struct RealEigenDecomposition<C> {
    pub eigenvalues: Vec<C>,
    /// Column-major `n x n`: column `i` is the right eigenvector for `eigenvalues[i]`.
    pub right_eigenvectors: Vec<C>,
}

/// Real non-symmetric eigendecomposition (`f32`/`f64`), producing complex
/// results via conjugate-pair re-expansion.
pub trait RealNonSymmetricEigenScalar: Copy {
    type Complex;

    /// Raw `geev`: right eigenvectors only (`jobvl = 'N'`, `jobvr = 'V'`).
    /// `wr`/`wi` receive the real/imaginary eigenvalue parts, `vr` the
    /// LAPACK-packed real eigenvector columns.
    fn geev_right(n: usize, a: &mut [Self], lda: usize, wr: &mut [Self], wi: &mut [Self], vr: &mut [Self], ldvr: usize) -> Result<(), LapackInfo>;

    fn make_complex(re: Self, im: Self) -> Self::Complex;
}

macro_rules! impl_real_nonsymmetric_eigen {
    ($ty:ty, $complex:ty, $geev:path) => {
        impl RealNonSymmetricEigenScalar for $ty {
            type Complex = $complex;

            fn geev_right(n: usize, a: &mut [Self], lda: usize, wr: &mut [Self], wi: &mut [Self], vr: &mut [Self], ldvr: usize) -> Result<(), LapackInfo> {
                let mut vl = [0 as $ty; 1];
                let mut probe = [0 as $ty; 1];
                let mut info = 0;
                $geev(
                    b'N', b'V', n as i32, a, lda as i32, wr, wi, &mut vl, 1, vr, ldvr as i32, &mut probe, -1, &mut info,
                );
                LapackInfo::check(info)?;
                let lwork = recommended_lwork_real(probe[0] as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $geev(
                    b'N', b'V', n as i32, a, lda as i32, wr, wi, &mut vl, 1, vr, ldvr as i32, work.as_mut_slice(), lwork as i32, &mut info,
                );
                LapackInfo::check(info)
            }

            fn make_complex(re: Self, im: Self) -> Self::Complex {
                <$complex>::new(re, im)
            }
        }
    };
}

impl_real_nonsymmetric_eigen!(f32, Complex32, lapack::sgeev);
impl_real_nonsymmetric_eigen!(f64, Complex64, lapack::dgeev);

/// Complex non-symmetric eigendecomposition (`Complex32`/`Complex64`):
/// `cgeev`/`zgeev` already return complex eigenvalues/eigenvectors
/// directly, with none of the real-valued conjugate-pair repacking
/// [`RealNonSymmetricEigenScalar::geev_right`] needs.
pub trait ComplexNonSymmetricEigenScalar: Copy {
    fn geev_right(n: usize, a: &mut [Self], lda: usize, w: &mut [Self], vr: &mut [Self], ldvr: usize) -> Result<(), LapackInfo>;
}

macro_rules! impl_complex_nonsymmetric_eigen {
    ($ty:ty, $real:ty, $geev:path) => {
        impl ComplexNonSymmetricEigenScalar for $ty {
            fn geev_right(n: usize, a: &mut [Self], lda: usize, w: &mut [Self], vr: &mut [Self], ldvr: usize) -> Result<(), LapackInfo> {
                let mut vl = [<$ty>::default(); 1];
                let mut rwork = vec![0 as $real; (2 * n).max(1)];
                let mut probe = [<$ty>::default(); 1];
                let mut info = 0;
                $geev(
                    b'N', b'V', n as i32, a, lda as i32, w, &mut vl, 1, vr, ldvr as i32, &mut probe, -1, &mut rwork, &mut info,
                );
                LapackInfo::check(info)?;
                let lwork = crate::workspace::recommended_lwork_complex(probe[0].re as f64);
                let mut work = Workspace::<$ty>::sized(lwork);
                $geev(
                    b'N', b'V', n as i32, a, lda as i32, w, &mut vl, 1, vr, ldvr as i32, work.as_mut_slice(), lwork as i32, &mut rwork, &mut info,
                );
                LapackInfo::check(info)
            }
        }
    };
}

impl_complex_nonsymmetric_eigen!(Complex32, f32, lapack::cgeev);
impl_complex_nonsymmetric_eigen!(Complex64, f64, lapack::zgeev);

/// Runs the complex `geev` directly: no conjugate-pair post-processing
/// is needed since LAPACK already returns complex eigenvalues/eigenvectors.
pub fn nonsymmetric_eigen_complex<T: ComplexNonSymmetricEigenScalar + Default + Clone>(
    a: &mut [T],
    n: usize,
) -> Result<RealEigenDecomposition<T>, LapackInfo> {
    let mut w = vec![T::default(); n];
    let mut vr = vec![T::default(); n * n];
    T::geev_right(n, a, n, &mut w, &mut vr, n)?;
    Ok(RealEigenDecomposition { eigenvalues: w, right_eigenvectors: vr })
}

/// Runs `geev` and re-expands the LAPACK real-packed eigenvector
/// convention into explicit complex columns: a real eigenvalue's
/// column is taken verbatim with zero imaginary part; a conjugate pair at
/// columns `j`/`j+1` becomes `vr[:, j] ± i*vr[:, j+1]`.
pub fn nonsymmetric_eigen<T>(a: &mut [T], n: usize) -> Result<RealEigenDecomposition<T::Complex>, LapackInfo>
where
    T: RealNonSymmetricEigenScalar + Default + Clone + PartialEq + std::ops::Neg<Output = T>,
    T::Complex: Clone,
{
    let mut wr = vec![T::default(); n];
    let mut wi = vec![T::default(); n];
    let mut vr = vec![T::default(); n * n];
    T::geev_right(n, a, n, &mut wr, &mut wi, &mut vr, n)?;

    let zero = T::default();
    let eigenvalues: Vec<T::Complex> =
        wr.iter().zip(wi.iter()).map(|(re, im)| T::make_complex(re.clone(), im.clone())).collect();

    let mut right_eigenvectors = Vec::with_capacity(n * n);
    let mut col = 0;
    while col < n {
        if wi[col] == zero {
            for row in 0..n {
                right_eigenvectors.push(T::make_complex(vr[row + col * n].clone(), zero.clone()));
            }
            col += 1;
        } else {
            // Conjugate pair at (col, col+1): real part in column `col`,
            // imaginary part in column `col+1`, shared by both eigenvectors.
            for row in 0..n {
                let re = vr[row + col * n].clone();
                let im = vr[row + (col + 1) * n].clone();
                right_eigenvectors.push(T::make_complex(re, im));
            }
            for row in 0..n {
                let re = vr[row + col * n].clone();
                let im = vr[row + (col + 1) * n].clone();
                right_eigenvectors.push(T::make_complex(re, -im));
            }
            col += 2;
        }
    }

    Ok(RealEigenDecomposition { eigenvalues, right_eigenvectors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_matrix_eigenvalues_are_real_and_match_diagonal() {
        let n = 3;
        let mut a = vec![0.0f64; n * n];
        let diag = [1.0, -2.0, 3.0];
        for i in 0..n {
            a[i + i * n] = diag[i];
        }
        let decomp = nonsymmetric_eigen(&mut a, n).unwrap();
        let mut values: Vec<f64> = decomp.eigenvalues.iter().map(|c| c.re).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut expected = diag.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(values[..], expected[..], epsilon = 1e-10);
        for c in &decomp.eigenvalues {
            assert_relative_eq!(c.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_complex_diagonal_matrix_eigenvalues_match_diagonal() {
        let n = 3;
        let diag = [Complex64::new(1.0, 0.0), Complex64::new(0.0, -2.0), Complex64::new(3.0, 1.0)];
        let mut a = vec![Complex64::new(0.0, 0.0); n * n];
        for i in 0..n {
            a[i + i * n] = diag[i];
        }
        let decomp = nonsymmetric_eigen_complex(&mut a, n).unwrap();
        let mut values = decomp.eigenvalues.clone();
        values.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
        let mut expected = diag.to_vec();
        expected.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
        for (v, e) in values.iter().zip(expected.iter()) {
            assert_relative_eq!(v.re, e.re, epsilon = 1e-10);
            assert_relative_eq!(v.im, e.im, epsilon = 1e-10);
        }
    }
}
