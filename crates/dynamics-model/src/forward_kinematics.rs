//! The joint-independent kinematics: the position pass (base→tip)
//! and the velocity pass (base→tip) shared by every node regardless of
//! joint family.

use crate::data::Data;
use crate::errors::PreconditionViolated;
use crate::model::Model;
use dynamics_joint::joint::JointModel;
use dynamics_joint::joint_data::JointData;
use dynamics_spatial::{
    configuration::Configuration, inertia::SpatialInertia, rotation::Rot3, shift::Shift,
    spatial_vec::SpatialVec, symmetric3::Symmetric3, vector3d::Vector3D,
};

/// Sets the tree-wide configuration and runs the position pass
/// (`setPos`). Recomputes each node's placement, `R_GB`/`O_BG`, shift
/// operator, ground-frame spatial inertia, and `H` rotated into the
/// ground-aligned basis.
pub fn set_pos(model: &Model, data: &mut Data, q: &Configuration) -> Result<(), PreconditionViolated> {
    q.check_size("q", model.nq()).map_err(|_| PreconditionViolated::IncorrectSize {
        name: "q".to_string(),
        expected: model.nq(),
        got: q.len(),
    })?;

    for id in 1..model.njoints() {
        let joint_model = model.joint(id);
        let q_joint = q.rows(model.idx_q(id), joint_model.nq());
        data.joint_data[id].set_q(q_joint);
        data.joint_data[id].calc_kinematics_pos();
    }

    data.r_gb[0] = Rot3::identity();
    data.o_bg[0] = Vector3D::zeros();
    data.shift[0] = Shift::identity();
    data.h_ground[0] = Vec::new();

    for id in 1..model.njoints() {
        let parent = model.parent(id);
        let r_gp = data.r_gb[parent];
        let o_pg = data.o_bg[parent];

        // Joint mounting frame composed with the joint's own q-dependent
        // placement gives this node's placement relative to its parent.
        let local = model.joint_frame(id) * data.joint_data[id].placement();
        let o_bp = local.translation();
        let r_pb = local.rotation();

        let o_bp_g = r_gp * o_bp;
        data.shift[id] = Shift::from_translation(o_bp_g);
        data.r_gb[id] = r_gp * r_pb;
        data.o_bg[id] = o_pg + o_bp_g;

        // Refresh the spatial mass properties in the ground frame.
        let mp = model.mass_properties(id);
        let r_gb = data.r_gb[id];
        let com_ground = r_gb * mp.com;
        let inertia_mat = r_gb.matrix() * mp.inertia.matrix() * r_gb.matrix().transpose();
        data.com_ground[id] = com_ground;
        data.inertia_origin_ground[id] = inertia_mat;
        data.spatial_inertia[id] = SpatialInertia::from_mass_com_inertia(
            mp.mass,
            com_ground,
            Symmetric3::from_matrix(&inertia_mat),
        );

        // H is recomputed every position pass, rotated into ground.
        let h_local = data.joint_data[id].h();
        data.h_ground[id] = h_local
            .iter()
            .map(|h| SpatialVec::from_parts(r_gp * h.angular(), r_gp * h.linear()))
            .collect();
    }

    Ok(())
}

/// Sets the tree-wide velocity and runs the velocity pass
/// (`setVel`). Requires [`set_pos`] to have been run for the current `q`.
pub fn set_vel(model: &Model, data: &mut Data, v: &Configuration) -> Result<(), PreconditionViolated> {
    v.check_size("v", model.nv()).map_err(|_| PreconditionViolated::IncorrectSize {
        name: "v".to_string(),
        expected: model.nv(),
        got: v.len(),
    })?;

    for id in 1..model.njoints() {
        let joint_model = model.joint(id);
        let v_joint = v.rows(model.idx_v(id), joint_model.nv());
        data.joint_data[id].set_v(v_joint);
    }

    data.vel[0] = SpatialVec::zero();

    for id in 1..model.njoints() {
        let parent = model.parent(id);
        let r_gp = data.r_gb[parent];

        let v_local = data.joint_data[id].calc_kinematics_vel();
        let v_ground = SpatialVec::from_parts(r_gp * v_local.angular(), r_gp * v_local.linear());

        data.vel[id] = data.shift[id].shift_motion(&data.vel[parent]) + &v_ground;

        let omega = data.vel[id].angular();
        let inertia = data.inertia_origin_ground[id];
        let omega_nalgebra =
            nalgebra::Vector3::new(omega.x_val(), omega.y_val(), omega.z_val());
        let i_omega_nalgebra = inertia * omega_nalgebra;
        let i_omega = Vector3D::new(i_omega_nalgebra.x, i_omega_nalgebra.y, i_omega_nalgebra.z);
        let mass = model.mass_properties(id).mass;
        let s_g = data.com_ground[id];
        data.gyroscopic_bias[id] = SpatialVec::from_parts(
            omega.cross(&i_omega),
            mass * omega.cross(&omega.cross(&s_g)),
        );

        let omega_parent = data.vel[parent].angular();
        let v_parent = data.vel[parent].linear();
        let v_body = data.vel[id].linear();
        data.coriolis_bias[id] = SpatialVec::from_parts(
            omega_parent.cross(&v_ground.angular()),
            omega_parent.cross(&v_ground.linear()) + omega_parent.cross(&(v_body - v_parent)),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GROUND_ID;
    use approx::assert_relative_eq;
    use dynamics_inertia::inertia::MassProperties;
    use dynamics_joint::{cartesian::JointModelCartesian, joint::JointWrapper};
    use dynamics_spatial::se3::Transform;

    fn single_cartesian_body() -> Model {
        let mut model = Model::new("test");
        model
            .create_child(
                GROUND_ID,
                MassProperties::from_sphere(1.0, 0.1).unwrap(),
                Transform::identity(),
                JointWrapper::cartesian(JointModelCartesian::new()),
                false,
                "body1",
            )
            .unwrap();
        model
    }

    #[test]
    fn test_set_pos_translates_body_origin() {
        let model = single_cartesian_body();
        let mut data = model.create_data();
        let q = Configuration::from_row_slice(&[1.0, 2.0, 3.0]);
        set_pos(&model, &mut data, &q).unwrap();
        assert_relative_eq!(data.o_bg[1].x_val(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(data.o_bg[1].y_val(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(data.o_bg[1].z_val(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_vel_rejects_wrong_size() {
        let model = single_cartesian_body();
        let mut data = model.create_data();
        set_pos(&model, &mut data, &model.neutral_configuration()).unwrap();
        let err = set_vel(&model, &mut data, &Configuration::zeros(2)).unwrap_err();
        assert!(matches!(err, PreconditionViolated::IncorrectSize { .. }));
    }

    #[test]
    fn test_velocity_composition_matches_spec_formula() {
        let model = single_cartesian_body();
        let mut data = model.create_data();
        set_pos(&model, &mut data, &model.neutral_configuration()).unwrap();
        let v = Configuration::from_row_slice(&[0.1, 0.2, 0.3]);
        set_vel(&model, &mut data, &v).unwrap();

        let shifted_parent = data.shift[1].shift_motion(&data.vel[0]);
        let h_theta_dot = data.h_ground[1]
            .iter()
            .zip(v.as_slice())
            .fold(SpatialVec::zero(), |acc, (h, theta_dot)| acc + h * *theta_dot);
        let expected = shifted_parent + &h_theta_dot;
        assert_relative_eq!(data.vel[1].as_slice()[..], expected.as_slice()[..], epsilon = 1e-12);
    }
}
