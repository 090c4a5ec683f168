//! This crate is part of the `dynamics` ecosystem, and is not intended for direct use.
//!
//! Thin, per-scalar-kind LAPACK/BLAS dispatch layer: LU, tridiagonal,
//! Cholesky/symmetric-indefinite, symmetric and Hermitian eigendecomposition,
//! non-symmetric eigendecomposition, SVD, pivoted QR, triangular solves, and
//! a handful of auxiliary routines (copy, norm, scale, machine precision,
//! incremental condition estimation), each dispatched across `f32`, `f64`,
//! `Complex32` and `Complex64` via a sealed per-operation trait rather than
//! a single do-everything scalar trait. Callers needing an actual BLAS/LAPACK
//! implementation linked in must also depend on a `*-src` crate such as
//! `lapack-src` with the `openblas` feature.

pub mod cholesky;
pub mod error;
pub mod lu;
pub mod nonsymmetric_eigen;
pub mod qr;
pub mod svd;
pub mod symmetric_eigen;
pub mod triangular;
pub mod tridiagonal;
pub mod util;
pub mod workspace;

pub use cholesky::{
    cholesky_factor, cholesky_solve, symmetric_indefinite_factor, symmetric_indefinite_solve,
    CholeskyScalar, SymmetricIndefiniteScalar, UpLo,
};
pub use error::LapackInfo;
pub use lu::{lu_factor, lu_solve, LuScalar, Trans};
pub use nonsymmetric_eigen::{
    nonsymmetric_eigen, nonsymmetric_eigen_complex, ComplexNonSymmetricEigenScalar, RealEigenDecomposition,
    RealNonSymmetricEigenScalar,
};
pub use qr::{qr_with_pivoting, ComplexQrScalar, RealQrScalar};
pub use svd::{singular_values, ComplexSvdScalar, RealSvdScalar, SvdJob};
pub use symmetric_eigen::{symmetric_eigen_full, ComplexHermitianEigenScalar, RealSymmetricEigenScalar};
pub use triangular::{triangular_solve, Diag, TriangularScalar};
pub use tridiagonal::{tridiagonal_solve, TridiagonalScalar};
pub use util::{incremental_condition_estimate, machine_epsilon, ComplexLapackUtil, MatrixNorm, RealLapackUtil};
pub use workspace::Workspace;
