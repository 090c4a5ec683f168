//! The articulated-body algorithm's backward/forward passes: `calcP`
//! accumulates each node's articulated-body inertia and joint-space
//! factorization tip-to-base, `calcZ` folds in bias and applied forces over
//! the same order, and `calcAccel` propagates accelerations back out
//! base-to-tip. `calcY` is the algorithm's standalone coupling-inertia pass
//!, used together with [`crate::data::Data`] constraint
//! enforcement rather than as part of a normal dynamics step.

use crate::data::Data;
use crate::errors::{AlgorithmError, PreconditionViolated};
use crate::forward_kinematics::{set_pos, set_vel};
use crate::linalg;
use crate::model::{Model, GROUND_ID};
use dynamics_joint::joint::JointModel;
use dynamics_joint::joint_data::JointData;
use dynamics_spatial::{
    configuration::Configuration,
    spatial_mat::SpatialMat,
    spatial_vec::{SpatialForce, SpatialVec},
    vector3d::Vector3D,
};
use nalgebra::DVector;

fn size_error(e: PreconditionViolated) -> AlgorithmError {
    match e {
        PreconditionViolated::IncorrectSize { name, expected, got } => {
            AlgorithmError::IncorrectSize { name, expected, got }
        }
        other => AlgorithmError::IncorrectSize {
            name: other.to_string(),
            expected: 0,
            got: 0,
        },
    }
}

/// Tip-to-base pass accumulating each node's articulated-body inertia `P`
/// and its joint-space factorization (`D`, `DI`, `G`, `τ`, `ψᵀ`). Requires
/// [`set_pos`] to have been run for the current configuration.
pub fn calc_p(model: &Model, data: &mut Data) -> Result<(), AlgorithmError> {
    for id in (1..model.njoints()).rev() {
        let mut p = *data.spatial_inertia[id].mat();
        for &child in model.children(id) {
            let coupled = &data.tau_complement[child] * &data.artic_inertia[child];
            let shifted = data.shift[child].conjugate_inertia(&coupled);
            p = p + shifted;
        }
        data.artic_inertia[id] = p;

        let h = &data.h_ground[id];
        let h_mat = linalg::h_to_dmatrix(h);
        let p_dyn = linalg::spatial_mat_to_dmatrix(&p);

        let d = &h_mat * &p_dyn * h_mat.transpose();
        let di = d.try_inverse().ok_or_else(|| AlgorithmError::SingularConfiguration {
            joint_name: model.joint_name(id).to_string(),
            level: model.level(id),
            h_snapshot: h.iter().map(|v| *v.as_slice()).collect(),
        })?;

        let g_dyn = &p_dyn * h_mat.transpose() * &di;
        let ghh = &g_dyn * &h_mat;
        let tau_dyn = nalgebra::DMatrix::<f64>::identity(6, 6) - ghh;
        let tau_spatial = linalg::dmatrix_to_spatial_mat(&tau_dyn);

        let tau_t = tau_spatial.transpose();
        let phi_t_matrix = data.shift[id].action_matrix();
        let psi_t_matrix = tau_t.matrix() * phi_t_matrix;

        data.dof_inertia_inv[id] = di;
        data.coupling[id] = g_dyn;
        data.tau_complement[id] = tau_spatial;
        data.psi_t[id] = SpatialMat::from_matrix(psi_t_matrix);
    }
    Ok(())
}

/// Tip-to-base pass folding bias forces, actuator torques and applied
/// external spatial forces into each node's residual `z`, `ε`, `ν` and
/// `Gε`. Requires [`calc_p`] to have been run first. `tau` carries each
/// joint's actuator/applied generalized force, `ext_forces` each node's
/// externally applied spatial force (indexed by node id, ground unused).
pub fn calc_z(
    model: &Model,
    data: &mut Data,
    tau: &Configuration,
    ext_forces: &[SpatialForce],
) -> Result<(), AlgorithmError> {
    tau.check_size("tau", model.nv()).map_err(|_| AlgorithmError::IncorrectSize {
        name: "tau".to_string(),
        expected: model.nv(),
        got: tau.len(),
    })?;
    if ext_forces.len() != model.njoints() {
        return Err(AlgorithmError::IncorrectSize {
            name: "ext_forces".to_string(),
            expected: model.njoints(),
            got: ext_forces.len(),
        });
    }

    for id in (1..model.njoints()).rev() {
        let p = data.artic_inertia[id];
        let a = data.coriolis_bias[id].clone();
        let b = data.gyroscopic_bias[id].clone();
        let f_spatial = ext_forces[id].clone();

        let mut z = (&p * &a) + &b - f_spatial;
        for &child in model.children(id) {
            let z_plus = data.residual_z[child].clone() + &data.g_eps[child];
            let shifted = data.shift[child].shift_force(&z_plus);
            z = z + shifted;
        }
        data.residual_z[id] = z.clone();

        let r_gp = data.r_gb[model.parent(id)];
        let r_pg = r_gp.transpose();
        let z_local = SpatialVec::from_parts(r_pg * z.angular(), r_pg * z.linear());
        let h_z = data.joint_data[id].internal_force(&z_local);

        let joint_model = model.joint(id);
        let tau_joint = tau.rows(model.idx_v(id), joint_model.nv());
        let eps_values: Vec<f64> = tau_joint
            .as_slice()
            .iter()
            .zip(h_z.as_slice())
            .map(|(t, hz)| t - hz)
            .collect();
        let eps = Configuration::from_row_slice(&eps_values);
        let eps_dvec = DVector::from_row_slice(eps.as_slice());

        let nu_dvec = &data.dof_inertia_inv[id] * &eps_dvec;
        let g_eps_dvec = &data.coupling[id] * &eps_dvec;

        data.residual_eps[id] = eps;
        data.nu[id] = Configuration::from_row_slice(nu_dvec.as_slice());
        data.g_eps[id] = linalg::dvector_to_spatial_vec(&g_eps_dvec);
    }

    Ok(())
}

/// Base-to-tip pass computing each node's joint acceleration and spatial
/// acceleration from the residuals [`calc_z`] produced. Ground's spatial
/// acceleration is read as-is (left at zero for a stationary base, or set
/// to the conventional `-gravity` field by [`forward_dynamics`]).
pub fn calc_accel(model: &Model, data: &mut Data) {
    for id in 1..model.njoints() {
        let parent = model.parent(id);
        let alpha_shifted = data.shift[id].shift_motion(&data.accel[parent]);
        let alpha_dvec = linalg::spatial_vec_to_dvector(&alpha_shifted);

        let g_t_alpha = data.coupling[id].transpose() * &alpha_dvec;
        let nu_dvec = DVector::from_row_slice(data.nu[id].as_slice());
        let theta_ddot_dvec = nu_dvec - g_t_alpha;
        let theta_ddot = Configuration::from_row_slice(theta_ddot_dvec.as_slice());

        let h_theta_ddot = data.h_ground[id]
            .iter()
            .zip(theta_ddot.as_slice())
            .fold(SpatialVec::zero(), |acc, (h, td)| acc + h * *td);

        data.joint_data[id].set_a(theta_ddot);
        data.accel[id] = alpha_shifted + h_theta_ddot + data.coriolis_bias[id].clone();
    }
}

/// The base-to-tip coupling-inertia pass. Requires [`calc_p`]
/// to have been run first; used together with
/// [`dynamics_joint::joint_data::JointData::enforce_constraints`] rather
/// than as part of a normal dynamics step.
pub fn calc_y(model: &Model, data: &mut Data) {
    data.y[GROUND_ID] = SpatialMat::zeros();
    for id in 1..model.njoints() {
        let parent = model.parent(id);
        let h_mat = linalg::h_to_dmatrix(&data.h_ground[id]);
        let h_t = h_mat.transpose();
        let term1_dyn = &h_t * &data.dof_inertia_inv[id] * &h_mat;
        let term1 = linalg::dmatrix_to_spatial_mat(&term1_dyn);

        let psi_t = data.psi_t[id];
        let psi = psi_t.transpose();
        let y_parent = data.y[parent];
        let term2 = &(&psi_t * &y_parent) * &psi;

        data.y[id] = term1 + term2;
    }
}

/// Projects every node's configuration back onto its manifold
/// (`enforceConstraints`), e.g. renormalizing a ball joint's quaternion.
pub fn enforce_constraints(model: &Model, data: &mut Data) {
    for id in 1..model.njoints() {
        data.joint_data[id].enforce_constraints();
    }
    let _ = model;
}

/// Runs a full dynamics step: the position and velocity passes, then
/// `calcP`, `calcZ` and `calcAccel`, returning the resulting joint
/// accelerations. Gravity is folded in via the conventional trick of
/// seeding the ground node's spatial acceleration with `-gravity` rather
/// than adding an explicit per-node force.
pub fn forward_dynamics(
    model: &Model,
    data: &mut Data,
    q: &Configuration,
    v: &Configuration,
    tau: &Configuration,
    ext_forces: &[SpatialForce],
) -> Result<Configuration, AlgorithmError> {
    set_pos(model, data, q).map_err(size_error)?;
    set_vel(model, data, v).map_err(size_error)?;

    data.accel[GROUND_ID] = SpatialVec::from_parts(Vector3D::zeros(), -1.0 * model.gravity);

    calc_p(model, data)?;
    calc_z(model, data, tau, ext_forces)?;
    calc_accel(model, data);

    Ok(data.get_accel(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GROUND_ID;
    use approx::assert_relative_eq;
    use dynamics_inertia::inertia::MassProperties;
    use dynamics_joint::{cartesian::JointModelCartesian, joint::JointWrapper};
    use dynamics_spatial::se3::Transform;

    fn falling_cartesian_body() -> Model {
        let mut model = Model::new("test");
        model
            .create_child(
                GROUND_ID,
                MassProperties::from_sphere(2.0, 0.1).unwrap(),
                Transform::identity(),
                JointWrapper::cartesian(JointModelCartesian::new()),
                false,
                "body1",
            )
            .unwrap();
        model
    }

    #[test]
    fn test_free_fall_acceleration_matches_gravity() {
        let model = falling_cartesian_body();
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::zeros(3);
        let tau = Configuration::zeros(3);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        assert_relative_eq!(ddq[0], model.gravity.x_val(), epsilon = 1e-9);
        assert_relative_eq!(ddq[1], model.gravity.y_val(), epsilon = 1e-9);
        assert_relative_eq!(ddq[2], model.gravity.z_val(), epsilon = 1e-9);
    }

    #[test]
    fn test_torque_balances_gravity_for_zero_acceleration() {
        let model = falling_cartesian_body();
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::zeros(3);
        let mass = model.mass_properties(1).mass;
        let tau = Configuration::from_row_slice(&[
            -mass * model.gravity.x_val(),
            -mass * model.gravity.y_val(),
            -mass * model.gravity.z_val(),
        ]);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        assert_relative_eq!(ddq[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(ddq[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(ddq[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_calc_y_ground_is_zero_and_single_body_matches_term1() {
        let model = falling_cartesian_body();
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        set_pos(&model, &mut data, &q).unwrap();
        calc_p(&model, &mut data).unwrap();
        calc_y(&model, &mut data);

        assert_relative_eq!(*data.y[GROUND_ID].matrix(), nalgebra::Matrix6::zeros(), epsilon = 1e-12);

        // With the ground's Y at zero, Y = orthoTransform(DI, Hᵀ) +
        // orthoTransform(Y_parent, ψᵀ) collapses to its first term alone.
        let h_mat = linalg::h_to_dmatrix(&data.h_ground[1]);
        let h_t = h_mat.transpose();
        let expected_dyn = &h_t * &data.dof_inertia_inv[1] * &h_mat;
        let expected = linalg::dmatrix_to_spatial_mat(&expected_dyn);
        assert_relative_eq!(*data.y[1].matrix(), *expected.matrix(), epsilon = 1e-9);
    }
}
