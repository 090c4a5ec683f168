//! The parent-to-child shift operator Φ(r): a pure translation (no relative
//! rotation) used to carry spatial velocities, accelerations, and forces
//! between a joint's parent and child reference frames, and to shift
//! articulated-body inertias across a joint (`Φ·P·Φᵀ`).

use nalgebra::Matrix6;

use crate::{
    rotation::Rot3,
    se3::{ActSE3, Transform},
    spatial_mat::SpatialMat,
    spatial_vec::{SpatialForce, SpatialVec},
    vector3d::Vector3D,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shift(Transform);

impl Shift {
    /// Builds the shift operator for an offset `r` from the parent frame's
    /// origin to the child frame's origin, both expressed with the same
    /// orientation.
    #[must_use]
    pub fn from_translation(r: Vector3D) -> Self {
        Shift(Transform::from_parts(r, Rot3::identity()))
    }

    #[must_use]
    pub fn identity() -> Self {
        Shift(Transform::identity())
    }

    #[must_use]
    pub fn translation(&self) -> Vector3D {
        self.0.translation()
    }

    /// The 6×6 matrix representation of Φ, suitable for conjugating a
    /// [`SpatialMat`].
    #[must_use]
    pub fn action_matrix(&self) -> Matrix6<f64> {
        self.0.action_matrix()
    }

    /// Shifts a parent-frame motion vector into the child frame: `Φᵀ·v`.
    #[must_use]
    pub fn shift_motion(&self, v: &SpatialVec) -> SpatialVec {
        v.act(&self.0)
    }

    /// Shifts a child-frame motion vector into the parent frame.
    #[must_use]
    pub fn unshift_motion(&self, v: &SpatialVec) -> SpatialVec {
        v.act_inv(&self.0)
    }

    /// Shifts a child-frame force into the parent frame: `Φ·f`.
    #[must_use]
    pub fn shift_force(&self, f: &SpatialForce) -> SpatialForce {
        f.act_inv(&self.0)
    }

    /// Shifts a parent-frame force into the child frame.
    #[must_use]
    pub fn unshift_force(&self, f: &SpatialForce) -> SpatialForce {
        f.act(&self.0)
    }

    /// Shifts a child-frame articulated-body inertia into the parent frame: `Φ·P·Φᵀ`.
    #[must_use]
    pub fn conjugate_inertia(&self, p: &SpatialMat) -> SpatialMat {
        p.conjugate_by(&self.0.action_matrix())
    }
}
