//! Conversions between the fixed 6-component spatial types and the
//! dynamically-sized matrices needed for a node's own `nv`-wide quantities
//! (`D`, `DI`, `G`) in the recursive passes.

use dynamics_spatial::{spatial_mat::SpatialMat, spatial_vec::SpatialVec, vector3d::Vector3D};
use nalgebra::{DMatrix, DVector, Matrix6};

/// Stacks a joint's `H` rows (each a spatial 6-vector, angular first) into
/// an `nv x 6` matrix.
pub fn h_to_dmatrix(h: &[SpatialVec]) -> DMatrix<f64> {
    let nv = h.len();
    DMatrix::from_fn(nv, 6, |i, j| h[i].as_slice()[j])
}

pub fn spatial_mat_to_dmatrix(m: &SpatialMat) -> DMatrix<f64> {
    let mat = m.matrix();
    DMatrix::from_fn(6, 6, |i, j| mat[(i, j)])
}

pub fn dmatrix_to_spatial_mat(m: &DMatrix<f64>) -> SpatialMat {
    debug_assert_eq!(m.nrows(), 6);
    debug_assert_eq!(m.ncols(), 6);
    let mat = Matrix6::from_fn(|i, j| m[(i, j)]);
    SpatialMat::from_matrix(mat)
}

pub fn spatial_vec_to_dvector(v: &SpatialVec) -> DVector<f64> {
    DVector::from_row_slice(v.as_slice())
}

pub fn dvector_to_spatial_vec(v: &DVector<f64>) -> SpatialVec {
    debug_assert_eq!(v.len(), 6);
    let angular = Vector3D::new(v[0], v[1], v[2]);
    let linear = Vector3D::new(v[3], v[4], v[5]);
    SpatialVec::from_parts(angular, linear)
}
