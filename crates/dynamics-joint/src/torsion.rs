//! The `Torsion` joint family: 1 motion / 1 position DOF, rotation
//! about a single fixed axis, constant in the node's own frame.

use crate::{
    joint::{JointModel, JointType},
    joint_data::{JointData, JointDataWrapper},
};
use dynamics_spatial::{
    configuration::Configuration,
    rotation::Rot3,
    se3::Transform,
    spatial_vec::SpatialVec,
    vector3d::Vector3D,
};
use rand::{rngs::ThreadRng, Rng};

#[derive(Clone, Copy, Debug)]
pub struct JointModelTorsion {
    axis: Vector3D,
}

impl JointModelTorsion {
    #[must_use]
    pub fn new(axis: Vector3D) -> Self {
        Self { axis }
    }

    #[must_use]
    pub fn axis(&self) -> Vector3D {
        self.axis
    }
}

impl JointModel for JointModelTorsion {
    fn joint_type(&self) -> JointType {
        JointType::Torsion
    }

    fn nq(&self) -> usize {
        1
    }

    fn nv(&self) -> usize {
        1
    }

    fn neutral(&self) -> Configuration {
        Configuration::zeros(1)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        Configuration::from_row_slice(&[rng.random_range(-std::f64::consts::PI..std::f64::consts::PI)])
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::torsion(JointDataTorsion::new(self.axis))
    }
}

#[derive(Clone, Debug)]
pub struct JointDataTorsion {
    q: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 1],
    axis: Vector3D,
    placement: Transform,
}

impl JointDataTorsion {
    #[must_use]
    pub fn new(axis: Vector3D) -> Self {
        Self {
            q: Configuration::zeros(1),
            v: Configuration::zeros(1),
            a: Configuration::zeros(1),
            tau_int: Configuration::zeros(1),
            h: [SpatialVec::from_rotational_axis(&axis)],
            axis,
            placement: Transform::identity(),
        }
    }
}

impl JointData for JointDataTorsion {
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
        self.placement =
            Transform::from_parts(Vector3D::zeros(), Rot3::from_axis_angle(&self.axis, self.q[0]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_about_z_at_half_pi() {
        let mut data = JointDataTorsion::new(Vector3D::z());
        data.set_q(Configuration::from_row_slice(&[std::f64::consts::FRAC_PI_2]));
        data.calc_kinematics_pos();
        let rotated = data.placement().rotation() * Vector3D::x();
        assert_relative_eq!(rotated.y_val(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_internal_force_projects_onto_axis() {
        let data = JointDataTorsion::new(Vector3D::z());
        let z = SpatialVec::from_parts(Vector3D::new(0.0, 0.0, 3.0), Vector3D::zeros());
        let tau = data.internal_force(&z);
        assert_relative_eq!(tau[0], 3.0, epsilon = 1e-12);
    }
}
