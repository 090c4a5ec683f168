//! Torque-free rigid-body spin, exercising the `Free` joint family's
//! six-DOF coupling of translation and orientation through a full dynamics
//! step.

#[cfg(test)]
mod tests {
    use crate::scenarios::torque_free_sphere;
    use approx::assert_relative_eq;
    use dynamics_joint::ball::Orientation;
    use dynamics_rs::prelude::*;

    /// A spinning body with isotropic inertia has `ω × Iω = 0` for any `ω`,
    /// so with no gravity and no applied torque its acceleration, linear
    /// and angular alike, must vanish (Euler's equations collapse to the
    /// free-particle case).
    #[test]
    fn test_isotropic_free_spin_has_zero_acceleration() {
        let model = torque_free_sphere(3.0, 0.25, Orientation::Quaternion);
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::from_row_slice(&[0.0, 0.0, 0.0, 1.5, -0.7, 2.2]);
        let tau = Configuration::zeros(6);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        for i in 0..6 {
            assert_relative_eq!(ddq[i], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_isotropic_free_spin_with_translation_has_zero_acceleration() {
        let model = torque_free_sphere(3.0, 0.25, Orientation::Euler3);
        let mut data = model.create_data();
        let q = model.neutral_configuration();
        let v = Configuration::from_row_slice(&[0.1, -0.2, 0.3, 0.5, 0.5, 0.5]);
        let tau = Configuration::zeros(6);
        let ext_forces = vec![SpatialForce::zero(); model.njoints()];

        let ddq = forward_dynamics(&model, &mut data, &q, &v, &tau, &ext_forces).unwrap();

        for i in 0..6 {
            assert_relative_eq!(ddq[i], 0.0, epsilon = 1e-9);
        }
    }
}
