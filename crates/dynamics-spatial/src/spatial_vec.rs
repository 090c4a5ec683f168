//! Spatial (6-component) vectors: the common representation for velocity,
//! acceleration, and force quantities in the articulated-body algorithm.
//!
//! Components are stored **angular first, linear second**: `[ω; v]` for a
//! motion vector, `[n; f]` for a force (moment first, then the force
//! itself). This layout matches the convention this workspace's model and
//! joint crates assume.

use nalgebra::{Matrix6, Vector6};

use crate::{
    se3::{ActSE3, Transform},
    so3::Skew,
    vector3d::Vector3D,
};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, Mul, Sub},
};

#[derive(Clone, Debug, PartialEq, Default)]
/// A spatial motion (velocity/acceleration) or force vector: `[angular; linear]`.
pub struct SpatialVec(pub(crate) Vector6<f64>);

/// Spatial forces share the same representation and algebra as spatial motion.
pub type SpatialForce = SpatialVec;

impl SpatialVec {
    /// Builds a pure-rotation motion vector from a joint axis (torsion/continuous joints).
    #[must_use]
    pub fn from_rotational_axis(axis: &Vector3D) -> Self {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&axis.0);
        Self(v)
    }

    /// Builds a pure-translation motion vector from a joint axis (Cartesian/translate joints).
    #[must_use]
    pub fn from_translational_axis(axis: &Vector3D) -> Self {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(3).copy_from(&axis.0);
        Self(v)
    }

    /// The angular half (rows 0..3): angular velocity/acceleration, or moment.
    #[must_use]
    pub fn angular(&self) -> Vector3D {
        Vector3D(self.0.fixed_rows::<3>(0).into())
    }

    /// The linear half (rows 3..6): linear velocity/acceleration, or force.
    #[must_use]
    pub fn linear(&self) -> Vector3D {
        Vector3D(self.0.fixed_rows::<3>(3).into())
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(Vector6::zeros())
    }

    #[must_use]
    pub fn from_parts(angular: Vector3D, linear: Vector3D) -> Self {
        let mut v = Vector6::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&angular.0);
        v.fixed_rows_mut::<3>(3).copy_from(&linear.0);
        Self(v)
    }

    fn cross_matrix(angular: Vector3D, linear: Vector3D) -> Matrix6<f64> {
        let mut m = Matrix6::zeros();
        let angular_skew = Skew::from_vector3d(&angular);
        let linear_skew = Skew::from_vector3d(&linear);
        m.view_mut((0, 0), (3, 3)).copy_from(&angular_skew.0);
        m.view_mut((3, 0), (3, 3)).copy_from(&linear_skew.0);
        m.view_mut((3, 3), (3, 3)).copy_from(&angular_skew.0);
        m
    }

    /// The spatial motion cross product `self × other`, used for velocity-dependent
    /// (Coriolis/centrifugal) terms.
    #[must_use]
    pub fn cross(&self, other: &SpatialVec) -> SpatialVec {
        let angular_1 = self.angular();
        let linear_1 = self.linear();

        let angular_2 = other.angular();
        let linear_2 = other.linear();

        let cross_angular = angular_1.cross(&angular_2);
        let cross_linear = linear_1.cross(&angular_2) + angular_1.cross(&linear_2);

        SpatialVec::from_parts(cross_angular, cross_linear)
    }

    /// Maps a motion vector onto a force via the motion×force cross product.
    #[must_use]
    pub fn cross_force(&self, other: &SpatialForce) -> SpatialForce {
        let m_angular = self.angular();
        let m_linear = self.linear();

        let f_angular = other.angular();
        let f_linear = other.linear();

        let cross_angular = m_angular.cross(&f_angular) + m_linear.cross(&f_linear);
        let cross_linear = m_angular.cross(&f_linear);

        SpatialForce::from_parts(cross_angular, cross_linear)
    }

    /// The dual (force) cross product `self ×* other`, used to carry forces
    /// along with a velocity field (e.g. the bias force in inverse dynamics).
    #[must_use]
    pub fn cross_star(&self, other: &SpatialVec) -> SpatialVec {
        let angular = self.angular();
        let linear = self.linear();

        let cross_matrix = SpatialVec::cross_matrix(angular, linear);
        let dual_cross_matrix = -cross_matrix.transpose();

        SpatialVec(dual_cross_matrix * other.0)
    }

    #[must_use]
    pub fn inner(&self, other: &SpatialVec) -> f64 {
        self.0.dot(&other.0)
    }

    /// The vector as a slice of 6 elements, angular first.
    pub fn as_slice(&self) -> &[f64; 6] {
        self.0
            .as_slice()
            .try_into()
            .expect("Vector6 should have exactly 6 elements")
    }
}

impl Add for SpatialVec {
    type Output = SpatialVec;

    fn add(self, rhs: Self) -> Self::Output {
        SpatialVec(self.0 + rhs.0)
    }
}

impl Add<&SpatialVec> for SpatialVec {
    type Output = SpatialVec;

    fn add(self, rhs: &Self) -> Self::Output {
        SpatialVec(self.0 + rhs.0)
    }
}

impl Add<&SpatialVec> for &SpatialVec {
    type Output = SpatialVec;

    fn add(self, rhs: &SpatialVec) -> Self::Output {
        SpatialVec(self.0 + rhs.0)
    }
}

impl Sub for SpatialVec {
    type Output = SpatialVec;

    fn sub(self, rhs: Self) -> Self::Output {
        SpatialVec(self.0 - rhs.0)
    }
}

impl Sub<&SpatialVec> for &SpatialVec {
    type Output = SpatialVec;

    fn sub(self, rhs: &SpatialVec) -> Self::Output {
        SpatialVec(self.0 - rhs.0)
    }
}

impl AddAssign for SpatialVec {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<&SpatialVec> for SpatialVec {
    fn add_assign(&mut self, rhs: &Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for SpatialVec {
    type Output = SpatialVec;

    fn mul(self, rhs: f64) -> Self::Output {
        SpatialVec(self.0 * rhs)
    }
}

impl Mul<f64> for &SpatialVec {
    type Output = SpatialVec;

    fn mul(self, rhs: f64) -> Self::Output {
        SpatialVec(self.0 * rhs)
    }
}

impl Mul<SpatialVec> for f64 {
    type Output = SpatialVec;

    fn mul(self, rhs: SpatialVec) -> Self::Output {
        SpatialVec(rhs.0 * self)
    }
}

impl ActSE3 for SpatialVec {
    fn act(&self, transform: &Transform) -> Self {
        let angular = transform.rotation() * self.angular();
        let linear =
            transform.rotation() * self.linear() + transform.translation().cross(&angular);
        SpatialVec::from_parts(angular, linear)
    }

    fn act_inv(&self, transform: &Transform) -> Self {
        let angular = transform.rotation().transpose() * self.angular();
        let linear = transform.rotation().transpose()
            * (self.linear() - transform.translation().cross(&self.angular()));
        SpatialVec::from_parts(angular, linear)
    }
}

impl Display for SpatialVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpatialVec(angular: [{:.4}, {:.4}, {:.4}], linear: [{:.4}, {:.4}, {:.4}])",
            self.angular().x_val(),
            self.angular().y_val(),
            self.angular().z_val(),
            self.linear().x_val(),
            self.linear().y_val(),
            self.linear().z_val(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero() {
        assert_eq!(SpatialVec::zero().0, Vector6::zeros());
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let angular = Vector3D::new(1.0, 2.0, 3.0);
        let linear = Vector3D::new(4.0, 5.0, 6.0);
        let v = SpatialVec::from_parts(angular, linear);
        assert_relative_eq!(v.angular().0, angular.0);
        assert_relative_eq!(v.linear().0, linear.0);
    }

    #[test]
    fn test_cross_matches_explicit_matrix() {
        let angular1 = Vector3D::new(1.0, 2.0, 3.0);
        let linear1 = Vector3D::new(4.0, 5.0, 6.0);
        let v1 = SpatialVec::from_parts(angular1, linear1);

        let angular2 = Vector3D::new(7.0, 8.0, 9.0);
        let linear2 = Vector3D::new(10.0, 11.0, 12.0);
        let v2 = SpatialVec::from_parts(angular2, linear2);

        let mut matrix = Matrix6::zeros();
        let angular_skew = Skew::from_vector3d(&angular1);
        let linear_skew = Skew::from_vector3d(&linear1);
        matrix.view_mut((0, 0), (3, 3)).copy_from(&angular_skew.0);
        matrix.view_mut((3, 0), (3, 3)).copy_from(&linear_skew.0);
        matrix.view_mut((3, 3), (3, 3)).copy_from(&angular_skew.0);

        let expected_cross = SpatialVec(matrix * v2.0);
        let expected_cross_star = SpatialVec(-matrix.transpose() * v2.0);

        assert_relative_eq!(v1.cross(&v2).0, expected_cross.0, epsilon = 1e-12);
        assert_relative_eq!(v1.cross_star(&v2).0, expected_cross_star.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inner_is_dot_product() {
        let a = SpatialVec::from_parts(Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(0.0, 1.0, 0.0));
        let b = SpatialVec::from_parts(Vector3D::new(2.0, 0.0, 0.0), Vector3D::new(0.0, 3.0, 0.0));
        assert_relative_eq!(a.inner(&b), 5.0);
    }
}
