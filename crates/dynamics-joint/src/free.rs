//! The `Free` joint family: 6 motion DOF, 6 (Euler) or 7 (quaternion)
//! position DOF: a [`crate::cartesian`] translation composed with a full
//! [`crate::ball::BallJoint`] orientation. AKA `FreeJoint` in the assembly
//! interface. Configuration layout:
//! `q = [translate_x, translate_y, translate_z, <ball orientation q>]`,
//! translation expressed in the parent frame.

use crate::{
    ball::{BallJoint, Orientation},
    joint::{JointModel, JointType},
    joint_data::{JointData, JointDataWrapper},
};
use dynamics_spatial::{
    configuration::Configuration,
    se3::Transform,
    spatial_vec::{SpatialForce, SpatialVec},
    vector3d::Vector3D,
};
use rand::{rngs::ThreadRng, Rng};

const RANDOM_TRANSLATE_RANGE: f64 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct JointModelFree {
    orientation: Orientation,
}

impl JointModelFree {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }
}

impl JointModel for JointModelFree {
    fn joint_type(&self) -> JointType {
        JointType::Free
    }

    fn nq(&self) -> usize {
        3 + BallJoint::new(self.orientation).get_dim()
    }

    fn nv(&self) -> usize {
        6
    }

    fn neutral(&self) -> Configuration {
        let mut values = vec![0.0, 0.0, 0.0];
        values.extend_from_slice(BallJoint::new(self.orientation).neutral().as_slice());
        Configuration::from_row_slice(&values)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        let mut values = vec![
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
        ];
        values.extend_from_slice(
            BallJoint::new(self.orientation)
                .random_configuration(rng)
                .as_slice(),
        );
        Configuration::from_row_slice(&values)
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::free(JointDataFree::new(self.orientation))
    }
}

#[derive(Clone, Debug)]
pub struct JointDataFree {
    ball: BallJoint,
    translation: Vector3D,
    q_cache: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 6],
    placement: Transform,
}

impl JointDataFree {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        let ball = BallJoint::new(orientation);
        let mut q_values = vec![0.0, 0.0, 0.0];
        q_values.extend_from_slice(ball.neutral().as_slice());
        Self {
            ball,
            translation: Vector3D::zeros(),
            q_cache: Configuration::from_row_slice(&q_values),
            v: Configuration::zeros(6),
            a: Configuration::zeros(6),
            tau_int: Configuration::zeros(6),
            h: [
                SpatialVec::from_translational_axis(&Vector3D::x()),
                SpatialVec::from_translational_axis(&Vector3D::y()),
                SpatialVec::from_translational_axis(&Vector3D::z()),
                SpatialVec::from_rotational_axis(&Vector3D::x()),
                SpatialVec::from_rotational_axis(&Vector3D::y()),
                SpatialVec::from_rotational_axis(&Vector3D::z()),
            ],
            placement: Transform::identity(),
        }
    }

    #[must_use]
    pub fn ball(&self) -> &BallJoint {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut BallJoint {
        &mut self.ball
    }
}

impl JointData for JointDataFree {
    fn q(&self) -> &Configuration {
        &self.q_cache
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
        self.translation = Vector3D::new(q[0], q[1], q[2]);
        self.ball.set_ball_pos(&q.as_slice()[3..]);
        self.q_cache = q;
    }

    fn set_v(&mut self, v: Configuration) {
        self.ball.set_ball_vel(Vector3D::new(v[3], v[4], v[5]));
        self.v = v;
    }

    fn set_a(&mut self, a: Configuration) {
        self.ball.set_ball_accel(Vector3D::new(a[3], a[4], a[5]));
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
        self.placement = Transform::from_parts(self.translation, self.ball.calc_r_pb());
    }

    fn enforce_constraints(&mut self) {
        self.ball.enforce_ball_constraints();
        let mut values = vec![self.translation.x_val(), self.translation.y_val(), self.translation.z_val()];
        values.extend_from_slice(self.ball.get_ball_pos());
        self.q_cache = Configuration::from_row_slice(&values);
    }

    fn internal_force(&self, z: &SpatialForce) -> Configuration {
        let torque_body = Vector3D::new(
            self.h[3].inner(z),
            self.h[4].inner(z),
            self.h[5].inner(z),
        );
        let generalized_torque = self.ball.get_ball_internal_force(torque_body);
        let mut values = vec![self.h[0].inner(z), self.h[1].inner(z), self.h[2].inner(z)];
        values.extend_from_slice(generalized_torque.as_slice());
        Configuration::from_row_slice(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nq_matches_orientation() {
        assert_eq!(JointModelFree::new(Orientation::Euler3).nq(), 6);
        assert_eq!(JointModelFree::new(Orientation::Quaternion).nq(), 7);
        assert_eq!(JointModelFree::new(Orientation::Quaternion).nv(), 6);
    }

    #[test]
    fn test_set_q_splits_translation_and_orientation() {
        let mut data = JointDataFree::new(Orientation::Quaternion);
        data.set_q(Configuration::from_row_slice(&[1.0, 2.0, 3.0, 1.0, 0.0, 0.0, 0.0]));
        data.calc_kinematics_pos();
        let translation = data.placement().translation();
        assert_relative_eq!(translation.x_val(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(translation.y_val(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(translation.z_val(), 3.0, epsilon = 1e-12);
    }
}
