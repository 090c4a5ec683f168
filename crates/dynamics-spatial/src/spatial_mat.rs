//! A 6×6 spatial matrix: the common representation for spatial inertias and
//! the articulated-body inertia `P` accumulated during the forward-dynamics
//! backward pass.

use nalgebra::{Matrix3, Matrix6};
use std::ops::{Add, Mul};

use crate::spatial_vec::SpatialVec;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpatialMat(pub(crate) Matrix6<f64>);

impl SpatialMat {
    #[must_use]
    pub fn zeros() -> Self {
        Self(Matrix6::zeros())
    }

    #[must_use]
    pub fn from_matrix(m: Matrix6<f64>) -> Self {
        Self(m)
    }

    /// Assembles a matrix from its four 3×3 blocks, angular-first:
    /// `[[angular_angular, angular_linear], [linear_angular, linear_linear]]`.
    #[must_use]
    pub fn from_blocks(
        angular_angular: Matrix3<f64>,
        angular_linear: Matrix3<f64>,
        linear_angular: Matrix3<f64>,
        linear_linear: Matrix3<f64>,
    ) -> Self {
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&angular_angular);
        m.fixed_view_mut::<3, 3>(0, 3).copy_from(&angular_linear);
        m.fixed_view_mut::<3, 3>(3, 0).copy_from(&linear_angular);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&linear_linear);
        Self(m)
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix6<f64> {
        &self.0
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    /// Conjugates this matrix by a 6×6 transform `x`: returns `x * self * xᵀ`.
    /// Used to shift an articulated-body inertia across a joint via the Φ
    /// action matrix: `Φ·P·Φᵀ`.
    #[must_use]
    pub fn conjugate_by(&self, x: &Matrix6<f64>) -> Self {
        Self(x * self.0 * x.transpose())
    }
}

impl Add for SpatialMat {
    type Output = SpatialMat;

    fn add(self, rhs: Self) -> Self::Output {
        SpatialMat(self.0 + rhs.0)
    }
}

impl Mul<f64> for SpatialMat {
    type Output = SpatialMat;

    fn mul(self, rhs: f64) -> Self::Output {
        SpatialMat(self.0 * rhs)
    }
}

impl Mul<&SpatialVec> for &SpatialMat {
    type Output = SpatialVec;

    fn mul(self, rhs: &SpatialVec) -> Self::Output {
        SpatialVec(self.0 * rhs.0)
    }
}

impl Mul<&SpatialMat> for &SpatialMat {
    type Output = SpatialMat;

    fn mul(self, rhs: &SpatialMat) -> Self::Output {
        SpatialMat(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zeros_times_vec_is_zero() {
        let m = SpatialMat::zeros();
        let v = SpatialVec::from_parts(
            crate::vector3d::Vector3D::new(1.0, 2.0, 3.0),
            crate::vector3d::Vector3D::new(4.0, 5.0, 6.0),
        );
        let result = &m * &v;
        assert_relative_eq!(result.0, nalgebra::Vector6::zeros());
    }

    #[test]
    fn test_conjugate_by_identity_is_noop() {
        let m = SpatialMat::from_matrix(Matrix6::identity() * 2.0);
        let conjugated = m.conjugate_by(&Matrix6::identity());
        assert_relative_eq!(conjugated.0, m.0);
    }
}
