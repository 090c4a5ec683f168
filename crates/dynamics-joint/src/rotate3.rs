//! The `Ball` joint family: 3 motion DOF, 3 (Euler) or 4 (quaternion)
//! position DOF. AKA `OrientationJoint` in the assembly interface. A
//! thin joint-level wrapper around the contained [`crate::ball::BallJoint`]
//! component, which carries the orientation-representation switch.

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
use rand::rngs::ThreadRng;

#[derive(Clone, Copy, Debug)]
pub struct JointModelBall {
    orientation: Orientation,
}

impl JointModelBall {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }
}

impl JointModel for JointModelBall {
    fn joint_type(&self) -> JointType {
        JointType::Ball
    }

    fn nq(&self) -> usize {
        match self.orientation {
            Orientation::Euler3 => 3,
            Orientation::Quaternion => 4,
        }
    }

    fn nv(&self) -> usize {
        3
    }

    fn neutral(&self) -> Configuration {
        BallJoint::new(self.orientation).neutral()
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        BallJoint::new(self.orientation).random_configuration(rng)
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::ball(JointDataBall::new(self.orientation))
    }
}

#[derive(Clone, Debug)]
pub struct JointDataBall {
    ball: BallJoint,
    q_cache: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 3],
    placement: Transform,
}

impl JointDataBall {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        let ball = BallJoint::new(orientation);
        let q_cache = ball.neutral();
        Self {
            ball,
            q_cache,
            v: Configuration::zeros(3),
            a: Configuration::zeros(3),
            tau_int: Configuration::zeros(3),
            h: [
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

impl JointData for JointDataBall {
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
        self.ball.set_ball_pos(q.as_slice());
        self.q_cache = q;
    }

    fn set_v(&mut self, v: Configuration) {
        self.ball.set_ball_vel(Vector3D::new(v[0], v[1], v[2]));
        self.v = v;
    }

    fn set_a(&mut self, a: Configuration) {
        self.ball.set_ball_accel(Vector3D::new(a[0], a[1], a[2]));
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
        self.placement = Transform::from_parts(Vector3D::zeros(), self.ball.calc_r_pb());
    }

    fn enforce_constraints(&mut self) {
        self.ball.enforce_ball_constraints();
        self.q_cache = Configuration::from_row_slice(self.ball.get_ball_pos());
    }

    fn internal_force(&self, z: &SpatialForce) -> Configuration {
        let torque_body = Vector3D::new(
            self.h[0].inner(z),
            self.h[1].inner(z),
            self.h[2].inner(z),
        );
        let generalized = self.ball.get_ball_internal_force(torque_body);
        Configuration::from_row_slice(generalized.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quaternion_identity_internal_force_passthrough() {
        let data = JointDataBall::new(Orientation::Quaternion);
        let z = SpatialVec::from_parts(Vector3D::new(1.0, 2.0, 3.0), Vector3D::zeros());
        let tau = data.internal_force(&z);
        assert_relative_eq!(tau[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(tau[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(tau[2], 3.0, epsilon = 1e-12);
    }
}
