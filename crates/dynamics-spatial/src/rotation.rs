//! A 3×3 rotation matrix, used both as a joint
//! orientation and as the rotation block of a rigid [`crate::se3::Transform`].

use crate::vector3d::Vector3D;
use nalgebra::Rotation3;
use std::ops::Mul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rot3(pub(crate) Rotation3<f64>);

impl Rot3 {
    /// Creates a rotation of `angle` radians about `axis` (need not be normalized).
    #[must_use]
    pub fn from_axis_angle(axis: &Vector3D, angle: f64) -> Self {
        Self(Rotation3::from_axis_angle(
            &nalgebra::Unit::new_normalize(axis.0),
            angle,
        ))
    }

    /// 3-2-1 body-three Euler angles: Φ about z, then Θ about the rotated y',
    /// then Ψ about the twice-rotated x''. Columns assembled per the
    /// standard body-three formula, oriented so that Φ=π/2 (Θ=Ψ=0) carries
    /// the body y-axis onto the parent x-axis.
    #[must_use]
    pub fn from_body_three(phi: f64, theta: f64, psi: f64) -> Self {
        Self(
            Rotation3::from_axis_angle(&nalgebra::Vector3::z_axis(), -phi)
                * Rotation3::from_axis_angle(&nalgebra::Vector3::y_axis(), -theta)
                * Rotation3::from_axis_angle(&nalgebra::Vector3::x_axis(), -psi),
        )
    }

    #[must_use]
    pub fn identity() -> Self {
        Self(Rotation3::identity())
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.0.angle()
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    #[must_use]
    pub fn matrix(&self) -> &nalgebra::Matrix3<f64> {
        self.0.matrix()
    }

    #[must_use]
    pub fn from_matrix(m: nalgebra::Matrix3<f64>) -> Self {
        Self(Rotation3::from_matrix_unchecked(m))
    }

    /// Rotation matrix of the unit quaternion `(w, x, y, z)`. The quaternion
    /// is renormalized before conversion.
    #[must_use]
    pub fn from_quaternion_wxyz(w: f64, x: f64, y: f64, z: f64) -> Self {
        let quat = nalgebra::Quaternion::new(w, x, y, z);
        let unit = nalgebra::UnitQuaternion::from_quaternion(quat);
        Self(unit.to_rotation_matrix())
    }
}

impl Mul for Rot3 {
    type Output = Rot3;

    fn mul(self, rhs: Self) -> Self::Output {
        Rot3(self.0 * rhs.0)
    }
}

impl Mul<&Rot3> for &Rot3 {
    type Output = Rot3;

    fn mul(self, rhs: &Rot3) -> Self::Output {
        Rot3(self.0 * rhs.0)
    }
}

impl Mul<Vector3D> for Rot3 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Self::Output {
        Vector3D(self.0 * rhs.0)
    }
}

impl Mul<&Vector3D> for &Rot3 {
    type Output = Vector3D;

    fn mul(self, rhs: &Vector3D) -> Self::Output {
        Vector3D(self.0 * rhs.0)
    }
}
