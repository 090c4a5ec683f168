//! The `Diatom` joint family: 5 motion / 5 position DOF, a
//! [`crate::cartesian`] translation composed with a [`crate::ujoint`]
//! gimbal. AKA `FreeLineJoint` in the assembly interface. Configuration
//! layout: `q = [translate_x, translate_y, translate_z, rotate2_0, rotate2_1]`,
//! translation expressed in the parent frame.

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

const RANDOM_TRANSLATE_RANGE: f64 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct JointModelDiatom {
    axis1: Vector3D,
    axis2: Vector3D,
}

impl JointModelDiatom {
    #[must_use]
    pub fn new(axis1: Vector3D, axis2: Vector3D) -> Self {
        Self { axis1, axis2 }
    }
}

impl JointModel for JointModelDiatom {
    fn joint_type(&self) -> JointType {
        JointType::Diatom
    }

    fn nq(&self) -> usize {
        5
    }

    fn nv(&self) -> usize {
        5
    }

    fn neutral(&self) -> Configuration {
        Configuration::zeros(5)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        Configuration::from_row_slice(&[
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
            rng.random_range(-RANDOM_TRANSLATE_RANGE..RANDOM_TRANSLATE_RANGE),
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
        ])
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        JointDataWrapper::diatom(JointDataDiatom::new(self.axis1, self.axis2))
    }
}

#[derive(Clone, Debug)]
pub struct JointDataDiatom {
    q: Configuration,
    v: Configuration,
    a: Configuration,
    tau_int: Configuration,
    h: [SpatialVec; 5],
    axis1: Vector3D,
    axis2: Vector3D,
    placement: Transform,
}

impl JointDataDiatom {
    #[must_use]
    pub fn new(axis1: Vector3D, axis2: Vector3D) -> Self {
        Self {
            q: Configuration::zeros(5),
            v: Configuration::zeros(5),
            a: Configuration::zeros(5),
            tau_int: Configuration::zeros(5),
            h: [
                SpatialVec::from_translational_axis(&Vector3D::x()),
                SpatialVec::from_translational_axis(&Vector3D::y()),
                SpatialVec::from_translational_axis(&Vector3D::z()),
                SpatialVec::from_rotational_axis(&axis1),
                SpatialVec::from_rotational_axis(&axis2),
            ],
            axis1,
            axis2,
            placement: Transform::identity(),
        }
    }
}

impl JointData for JointDataDiatom {
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
        let translation = Vector3D::new(self.q[0], self.q[1], self.q[2]);
        let r1 = Rot3::from_axis_angle(&self.axis1, self.q[3]);
        let r2 = Rot3::from_axis_angle(&self.axis2, self.q[4]);
        self.placement = Transform::from_parts(translation, r1 * r2);

        let axis1_in_body = r2.transpose() * self.axis1;
        self.h[3] = SpatialVec::from_rotational_axis(&axis1_in_body);
        self.h[4] = SpatialVec::from_rotational_axis(&self.axis2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_part_matches_q() {
        let mut data = JointDataDiatom::new(Vector3D::x(), Vector3D::y());
        data.set_q(Configuration::from_row_slice(&[1.0, -2.0, 0.5, 0.0, 0.0]));
        data.calc_kinematics_pos();
        let translation = data.placement().translation();
        assert_relative_eq!(translation.x_val(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(translation.y_val(), -2.0, epsilon = 1e-12);
        assert_relative_eq!(translation.z_val(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_rows_are_constant_basis() {
        let data = JointDataDiatom::new(Vector3D::x(), Vector3D::y());
        let row0 = data.h()[0].linear();
        let row1 = data.h()[1].linear();
        let row2 = data.h()[2].linear();
        assert_relative_eq!(row0.x_val(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(row1.y_val(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(row2.z_val(), 1.0, epsilon = 1e-12);
    }
}
