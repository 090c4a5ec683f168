//! The standalone inverse operation: `calcInternalForce`, a
//! tip-to-base pass that converts an externally-supplied Cartesian spatial
//! force field into the generalized internal force that would produce it.
//! Unlike [`crate::forward_dynamics::calc_z`] this pass carries no
//! articulated-body inertia or bias terms: it is the pure statics
//! counterpart used to check the forward/inverse round-trip.

use crate::data::Data;
use crate::errors::AlgorithmError;
use crate::model::Model;
use dynamics_joint::joint::JointModel;
use dynamics_joint::joint_data::JointData;
use dynamics_spatial::spatial_vec::SpatialForce;

/// Computes the generalized internal force corresponding to a per-node
/// spatial force field (`calcInternalForce`, tip→base):
/// `z = -f_spatial + Σ_children Φ_child·z_child`, `τ_int += H·z`. Requires
/// [`crate::forward_kinematics::set_pos`] to have been run for the current
/// configuration, since the shift operators it folds children through come
/// from the position pass.
pub fn calc_internal_force(
    model: &Model,
    data: &mut Data,
    ext_forces: &[SpatialForce],
) -> Result<(), AlgorithmError> {
    if ext_forces.len() != model.njoints() {
        return Err(AlgorithmError::IncorrectSize {
            name: "ext_forces".to_string(),
            expected: model.njoints(),
            got: ext_forces.len(),
        });
    }

    let mut z = vec![SpatialForce::zero(); model.njoints()];

    for id in (1..model.njoints()).rev() {
        let mut z_id = SpatialForce::zero() - ext_forces[id].clone();
        for &child in model.children(id) {
            z_id = z_id + data.shift[child].shift_force(&z[child]);
        }
        z[id] = z_id.clone();

        let r_gp = data.r_gb[model.parent(id)];
        let r_pg = r_gp.transpose();
        let z_local =
            dynamics_spatial::spatial_vec::SpatialVec::from_parts(r_pg * z_id.angular(), r_pg * z_id.linear());

        let tau_int = data.joint_data[id].internal_force(&z_local);
        data.joint_data[id].set_tau_int(tau_int);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward_dynamics::{calc_accel, calc_p, calc_z};
    use crate::forward_kinematics::{set_pos, set_vel};
    use crate::model::GROUND_ID;
    use approx::assert_relative_eq;
    use dynamics_inertia::inertia::MassProperties;
    use dynamics_joint::{cartesian::JointModelCartesian, joint::JointWrapper};
    use dynamics_spatial::configuration::Configuration;
    use dynamics_spatial::se3::Transform;

    fn single_cartesian_body() -> Model {
        let mut model = Model::new("test");
        model
            .create_child(
                GROUND_ID,
                MassProperties::from_sphere(1.5, 0.2).unwrap(),
                Transform::identity(),
                JointWrapper::cartesian(JointModelCartesian::new()),
                false,
                "body1",
            )
            .unwrap();
        model
    }

    /// Forward/inverse round-trip: for a single free-floating
    /// cartesian body with zero velocity and zero external force, Newton's
    /// law reduces to `M_k·s_acc = H^T·τ`. Feeding `-M_k·s_acc` back through
    /// `calcInternalForce` (whose convention is `z = -f_spatial`, the sign
    /// `calc_z` also uses) must recover the original generalized force τ.
    #[test]
    fn test_forward_inverse_round_trip() {
        let model = single_cartesian_body();
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::zeros(3);
        let tau = Configuration::from_row_slice(&[1.0, 2.0, 3.0]);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        set_pos(&model, &mut data, &q).unwrap();
        set_vel(&model, &mut data, &v).unwrap();
        calc_p(&model, &mut data).unwrap();
        calc_z(&model, &mut data, &tau, &ext_forces).unwrap();
        calc_accel(&model, &mut data);

        let s_acc = data.accel[1].clone();
        let m_k_s_acc = &data.spatial_inertia[1] * &s_acc;
        let induced = SpatialForce::zero() - m_k_s_acc;
        let induced_forces = vec![SpatialForce::zero(), induced];

        calc_internal_force(&model, &mut data, &induced_forces).unwrap();
        let recovered = data.joint_data[1].tau_int().clone();

        assert_relative_eq!(recovered[0], tau[0], epsilon = 1e-9);
        assert_relative_eq!(recovered[1], tau[1], epsilon = 1e-9);
        assert_relative_eq!(recovered[2], tau[2], epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_wrong_sized_force_vector() {
        let model = single_cartesian_body();
        let mut data = model.create_data();
        set_pos(&model, &mut data, &model.neutral_configuration()).unwrap();
        let err = calc_internal_force(&model, &mut data, &[]).unwrap_err();
        assert!(matches!(err, AlgorithmError::IncorrectSize { .. }));
    }
}
