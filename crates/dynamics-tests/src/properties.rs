//! General cross-module properties, each exercised through the full
//! `Model`/`Data` pipeline on a small two-link chain rather than a single
//! joint in isolation.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynamics_inertia::inertia::MassProperties;
    use dynamics_joint::{joint::JointWrapper, torsion::JointModelTorsion};
    use dynamics_rs::prelude::*;
    use dynamics_spatial::vector3d::Vector3D;

    fn two_link_chain() -> Model {
        let mut model = Model::new("chain");
        let link = model
            .create_child(
                GROUND_ID,
                MassProperties::from_sphere(1.0, 0.1).unwrap(),
                Transform::identity(),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
                false,
                "link1",
            )
            .unwrap();
        model
            .create_child(
                link,
                MassProperties::from_sphere(0.5, 0.05).unwrap(),
                Transform::from_parts(Vector3D::new(1.0, 0.0, 0.0), dynamics_spatial::rotation::Rot3::identity()),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::y())),
                false,
                "link2",
            )
            .unwrap();
        model
    }

    /// Kinetic energy computed from the velocity pass's own per-node spatial
    /// inertia/velocity must equal `Σ ½·m·|v_com|² + ½·ωᵀIω` computed directly
    /// from the same node's `com_ground`/`inertia_origin_ground` output.
    #[test]
    fn test_kinetic_energy_matches_per_node_direct_computation() {
        let model = two_link_chain();
        let mut data = model.create_data();
        let q = Configuration::from_row_slice(&[0.4, -0.6]);
        let v = Configuration::from_row_slice(&[0.3, 0.9]);

        set_pos(&model, &mut data, &q).unwrap();
        set_vel(&model, &mut data, &v).unwrap();

        let mut expected = 0.0;
        for id in 1..model.njoints() {
            let omega = data.vel[id].angular();
            let v_body = data.vel[id].linear();
            let com = data.com_ground[id];
            let v_com = v_body + omega.cross(&com);
            let mass = model.mass_properties(id).mass;
            let inertia = data.inertia_origin_ground[id];
            let omega_n = nalgebra::Vector3::new(omega.x_val(), omega.y_val(), omega.z_val());
            let rotational = 0.5 * omega_n.dot(&(inertia * omega_n));
            expected += 0.5 * mass * v_com.dot(&v_com) + rotational;
        }

        let ke = data.kinetic_energy(&model);
        assert_relative_eq!(ke, expected, epsilon = 1e-9);
    }

    /// Feeding `forward_dynamics`'s output spatial forces back through
    /// `calcInternalForce` recovers the original actuator torques, for a
    /// chain rather than a single body.
    #[test]
    fn test_forward_inverse_round_trip_on_chain() {
        let model = two_link_chain();
        let mut data = model.create_data();
        let q = Configuration::from_row_slice(&[0.2, 0.5]);
        let v = Configuration::zeros(2);
        let tau = Configuration::from_row_slice(&[1.0, -0.5]);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        set_pos(&model, &mut data, &q).unwrap();
        set_vel(&model, &mut data, &v).unwrap();
        calc_p(&model, &mut data).unwrap();
        calc_z(&model, &mut data, &tau, &ext_forces).unwrap();
        calc_accel(&model, &mut data);

        let mut induced_forces = vec![SpatialForce::zero(); model.njoints()];
        for id in 1..model.njoints() {
            let s_acc = data.accel[id].clone();
            let m_k_s_acc = &data.spatial_inertia[id] * &s_acc;
            induced_forces[id] = SpatialForce::zero() - m_k_s_acc;
        }

        calc_internal_force(&model, &mut data, &induced_forces).unwrap();
        let recovered = data.get_internal_force(&model);

        assert_relative_eq!(recovered[0], tau[0], epsilon = 1e-8);
        assert_relative_eq!(recovered[1], tau[1], epsilon = 1e-8);
    }
}
