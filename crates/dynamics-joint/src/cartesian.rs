//! The `Cartesian` joint family: 3 motion / 3 position DOF, pure
//! translation along the node's own frame axes. AKA `CartesianJoint` in
//! the assembly interface.

use crate::{
    joint::{JointModel, JointType},
    joint_data::{JointData, JointDataWrapper},
};
use dynamics_spatial::{
    configuration::Configuration,
    se3::Transform,
    spatial_vec::SpatialVec,
    vector3d::Vector3D,
};
use rand::{rngs::ThreadRng, Rng};

/// Translation limits used to draw random configurations; unbounded
/// otherwise makes little physical sense to sample.
const RANDOM_RANGE: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct JointModelCartesian;

impl JointModelCartesian {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl JointModel for JointModelCartesian {
    fn joint_type(&self) -> JointType {
        JointType::Cartesian
    }

    fn nq(&self) -> usize {
        3
    }

    fn nv(&self) -> usize {
        3
    }

    fn neutral(&self) -> Configuration {
        Configuration::zeros(3)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        Configuration::from_row_slice(&[
            rng.random_range(-RANDOM_RANGE..RANDOM_RANGE),
            rng.random_range(-RANDOM_RANGE..RANDOM_RANGE),
            rng.random_range(-RANDOM_RANGE..RANDOM_RANGE),
        ])
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::cartesian(JointDataCartesian::new())
    }
}

#[derive(Clone, Debug)]
pub struct JointDataCartesian {
    q: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 3],
    placement: Transform,
}

impl JointDataCartesian {
    #[must_use]
    pub fn new() -> Self {
        Self {
            q: Configuration::zeros(3),
            v: Configuration::zeros(3),
            a: Configuration::zeros(3),
            tau_int: Configuration::zeros(3),
            h: [
                SpatialVec::from_translational_axis(&Vector3D::x()),
                SpatialVec::from_translational_axis(&Vector3D::y()),
                SpatialVec::from_translational_axis(&Vector3D::z()),
            ],
            placement: Transform::identity(),
        }
    }
}

impl Default for JointDataCartesian {
    fn default() -> Self {
        Self::new()
    }
}

impl JointData for JointDataCartesian {
    fn q(&self) -> &Configuration {
        &self.q
    }

    fn v(&self) -> &Configuration {
        &self.v
    }

    fn a(&self) -> &Configuration {
        &self.a
    }

    fn tau_int(&self) -> &Configuration {
        &self.tau_int
    }

    fn set_q(&mut self, q: Configuration) {
        self.q = q;
    }

    fn set_v(&mut self, v: Configuration) {
        self.v = v;
    }

    fn set_a(&mut self, a: Configuration) {
        self.a = a;
    }

    fn set_tau_int(&mut self, tau: Configuration) {
        self.tau_int = tau;
    }

    fn h(&self) -> &[SpatialVec] {
        &self.h
    }

    fn placement(&self) -> Transform {
        self.placement
    }

    fn calc_kinematics_pos(&mut self) {
        let t = Vector3D::new(self.q[0], self.q[1], self.q[2]);
        self.placement = Transform::from_parts(t, dynamics_spatial::rotation::Rot3::identity());
    }
}
