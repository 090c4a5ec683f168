//! The `UJoint` joint family: 2 motion / 2 position DOF, a gimbal of
//! two fixed rotation axes. The first axis is fixed in the parent frame;
//! the second is fixed in the intermediate (post-first-rotation) frame, as
//! in a mechanical universal/Cardan joint. Consequently the first row of
//! `H`, expressed in the node's own (final) frame, depends on `q[1]`; the
//! second does not, since an axis is invariant under rotation about itself.

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
pub struct JointModelUJoint {
    axis1: Vector3D,
    axis2: Vector3D,
}

impl JointModelUJoint {
    #[must_use]
    pub fn new(axis1: Vector3D, axis2: Vector3D) -> Self {
        Self { axis1, axis2 }
    }
}

impl JointModel for JointModelUJoint {
    fn joint_type(&self) -> JointType {
        JointType::UJoint
    }

    fn nq(&self) -> usize {
        2
    }

    fn nv(&self) -> usize {
        2
    }

    fn neutral(&self) -> Configuration {
        Configuration::zeros(2)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        Configuration::from_row_slice(&[
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
        ])
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::ujoint(JointDataUJoint::new(self.axis1, self.axis2))
    }
}

#[derive(Clone, Debug)]
pub struct JointDataUJoint {
    q: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 2],
    axis1: Vector3D,
    axis2: Vector3D,
    placement: Transform,
}

impl JointDataUJoint {
    #[must_use]
    pub fn new(axis1: Vector3D, axis2: Vector3D) -> Self {
        Self {
            q: Configuration::zeros(2),
            v: Configuration::zeros(2),
            a: Configuration::zeros(2),
            tau_int: Configuration::zeros(2),
            h: [
                SpatialVec::from_rotational_axis(&axis1),
                SpatialVec::from_rotational_axis(&axis2),
            ],
            axis1,
            axis2,
            placement: Transform::identity(),
        }
    }
}

impl JointData for JointDataUJoint {
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
        let r1 = Rot3::from_axis_angle(&self.axis1, self.q[0]);
        let r2 = Rot3::from_axis_angle(&self.axis2, self.q[1]);
        self.placement = Transform::from_parts(Vector3D::zeros(), r1 * r2);

        let axis1_in_body = r2.transpose() * self.axis1;
        self.h[0] = SpatialVec::from_rotational_axis(&axis1_in_body);
        self.h[1] = SpatialVec::from_rotational_axis(&self.axis2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_second_axis_row_is_constant() {
        let mut data = JointDataUJoint::new(Vector3D::x(), Vector3D::y());
        data.calc_kinematics_pos();
        let h1_at_zero = data.h()[1].clone();
        data.set_q(Configuration::from_row_slice(&[0.7, -1.1]));
        data.calc_kinematics_pos();
        let h1_now = data.h()[1].angular();
        assert_relative_eq!(h1_at_zero.angular().x_val(), h1_now.x_val(), epsilon = 1e-12);
        assert_relative_eq!(h1_at_zero.angular().y_val(), h1_now.y_val(), epsilon = 1e-12);
        assert_relative_eq!(h1_at_zero.angular().z_val(), h1_now.z_val(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_configuration_identity_placement() {
        let mut data = JointDataUJoint::new(Vector3D::x(), Vector3D::y());
        data.calc_kinematics_pos();
        assert_relative_eq!(data.placement().rotation().matrix(), &nalgebra::Matrix3::identity());
    }
}
