//! Gravity-driven scenarios exercising [`forward_dynamics`] end to end
//! through the `Model`/`Data` pair, independent of the per-crate unit tests
//! in `dynamics-model` itself.

#[cfg(test)]
mod tests {
    use crate::scenarios::{falling_cartesian_body, torsion_pendulum};
    use approx::assert_relative_eq;
    use dynamics_rs::prelude::*;

    #[test]
    fn test_free_falling_body_accelerates_at_g() {
        let model = falling_cartesian_body(1.5, 0.2);
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

    /// A pendulum bob at rest at `q = 0` sits on the `+x` axis, so gravity
    /// (pointing `-y`) torques it about `z`. Checks the angular acceleration
    /// `calcP`/`calcZ`/`calcAccel` produce against the torque and parallel-axis
    /// inertia computed directly from the same position pass's own output
    /// (`com_ground`, `inertia_origin_ground`), rather than a hand-duplicated
    /// formula.
    #[test]
    fn test_torsion_pendulum_matches_torque_over_inertia() {
        let mass = 2.0;
        let model = torsion_pendulum(mass, 0.1, 0.5);
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::zeros(1);
        let tau = Configuration::zeros(1);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        set_pos(&model, &mut data, &q).unwrap();
        let com = data.com_ground[1];
        let izz = data.inertia_origin_ground[1][(2, 2)];
        let gravity_force = mass * model.gravity;
        let expected_torque_z = com.cross(&gravity_force).z_val();

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        assert_relative_eq!(ddq[0], expected_torque_z / izz, epsilon = 1e-9);
    }

    #[test]
    fn test_balancing_torque_holds_pendulum_still() {
        let mass = 2.0;
        let model = torsion_pendulum(mass, 0.1, 0.5);
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::zeros(1);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        set_pos(&model, &mut data, &q).unwrap();
        let com = data.com_ground[1];
        let gravity_force = mass * model.gravity;
        let gravity_torque_z = com.cross(&gravity_force).z_val();
        let tau = Configuration::from_row_slice(&[-gravity_torque_z]);

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        assert_relative_eq!(ddq[0], 0.0, epsilon = 1e-9);
    }
}
