//! The `Ground` joint family: 0 motion / 0 position DOF. Welds a
//! node rigidly to its parent at the fixed mounting transform; all motion
//! comes from the parent.

use crate::{
    joint::{JointModel, JointType},
    joint_data::{JointData, JointDataWrapper},
};
use dynamics_spatial::{
    configuration::Configuration,
    se3::Transform,
    spatial_vec::{SpatialForce, SpatialVec},
};
use rand::rngs::ThreadRng;

#[derive(Clone, Copy, Debug, Default)]
pub struct JointModelGround;

impl JointModelGround {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl JointModel for JointModelGround {
    fn joint_type(&self) -> JointType {
        JointType::Ground
    }

    fn nq(&self) -> usize {
        0
    }

    fn nv(&self) -> usize {
        0
    }

    fn neutral(&self) -> Configuration {
        Configuration::zeros(0)
    }

    fn random_configuration(&self, _rng: &mut ThreadRng) -> Configuration {
        Configuration::zeros(0)
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::ground(JointDataGround::default())
    }
}

#[derive(Clone, Debug)]
pub struct JointDataGround {
    q: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
}

impl Default for JointDataGround {
    fn default() -> Self {
        Self {
            q: Configuration::zeros(0),
            v: Configuration::zeros(0),
            a: Configuration::zeros(0),
            tau_int: Configuration::zeros(0),
        }
    }
}

impl JointData for JointDataGround {
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
        &[]
    }

    fn placement(&self) -> Transform {
        Transform::identity()
    }

    fn calc_kinematics_pos(&mut self) {}

    fn calc_kinematics_vel(&self) -> SpatialVec {
        SpatialVec::zero()
    }

    fn internal_force(&self, _z: &SpatialForce) -> Configuration {
        Configuration::zeros(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_has_no_dofs() {
        let model = JointModelGround::new();
        assert_eq!(model.nq(), 0);
        assert_eq!(model.nv(), 0);
    }

    #[test]
    fn test_ground_placement_is_identity() {
        let data = JointDataGround::default();
        assert_eq!(data.placement(), Transform::identity());
    }
}
