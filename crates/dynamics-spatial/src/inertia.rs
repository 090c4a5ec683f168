//! The spatial inertia of a rigid body: a 6×6 operator mapping a spatial
//! velocity to the body's momentum (or an acceleration to the net spatial
//! force needed to produce it), built from mass, center-of-mass offset, and
//! a rotational inertia tensor taken about the reference frame's origin.

use nalgebra::Matrix3;
use std::ops::{Add, Mul};

use crate::{
    so3::Skew, spatial_mat::SpatialMat, spatial_vec::SpatialVec, symmetric3::Symmetric3,
    vector3d::Vector3D,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialInertia(SpatialMat);

impl SpatialInertia {
    /// Builds the spatial inertia of a body with the given `mass`, center of
    /// mass `com` (expressed in the reference frame), and rotational inertia
    /// `inertia_about_origin` already taken about that frame's origin (not
    /// the center of mass).
    #[must_use]
    pub fn from_mass_com_inertia(
        mass: f64,
        com: Vector3D,
        inertia_about_origin: Symmetric3,
    ) -> Self {
        let com_skew = Skew::from_vector3d(&com).matrix() * mass;
        SpatialInertia(SpatialMat::from_blocks(
            inertia_about_origin.matrix(),
            com_skew,
            com_skew.transpose(),
            Matrix3::identity() * mass,
        ))
    }

    #[must_use]
    pub fn zeros() -> Self {
        SpatialInertia(SpatialMat::zeros())
    }

    #[must_use]
    pub fn mat(&self) -> &SpatialMat {
        &self.0
    }
}

impl Add for SpatialInertia {
    type Output = SpatialInertia;

    fn add(self, rhs: Self) -> Self::Output {
        SpatialInertia(self.0 + rhs.0)
    }
}

impl Mul<&SpatialVec> for &SpatialInertia {
    type Output = SpatialVec;

    fn mul(self, rhs: &SpatialVec) -> Self::Output {
        &self.0 * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_mass_at_origin_is_diagonal() {
        let inertia = SpatialInertia::from_mass_com_inertia(
            2.0,
            Vector3D::zeros(),
            Symmetric3::from_diagonal(&[0.1, 0.2, 0.3]),
        );
        let m = inertia.mat().matrix();
        assert_relative_eq!(m[(0, 0)], 0.1);
        assert_relative_eq!(m[(3, 3)], 2.0);
        assert_relative_eq!(m[(0, 3)], 0.0);
    }

    #[test]
    fn test_offset_com_couples_angular_and_linear() {
        let inertia = SpatialInertia::from_mass_com_inertia(
            1.0,
            Vector3D::new(1.0, 0.0, 0.0),
            Symmetric3::zeros(),
        );
        let m = inertia.mat().matrix();
        // m * [c]_x has a nonzero (1, 2) / (2, 1) entry for c = (1, 0, 0).
        assert!(m[(1, 2)].abs() > 1e-12 || m[(2, 1)].abs() > 1e-12);
    }
}
