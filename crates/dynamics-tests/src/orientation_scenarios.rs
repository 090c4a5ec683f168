//! Ball-joint orientation representations exercised through the full
//! `Model`/`Data` pipeline rather than the joint in isolation.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use dynamics_inertia::inertia::MassProperties;
    use dynamics_joint::{ball::Orientation, joint::JointWrapper, rotate3::JointModelBall};
    use dynamics_rs::prelude::*;
    use dynamics_spatial::rotation::Rot3;

    fn single_ball_body(orientation: Orientation) -> Model {
        let mut model = Model::new("ball");
        model
            .create_child(
                GROUND_ID,
                MassProperties::from_sphere(1.0, 0.1).unwrap(),
                Transform::identity(),
                JointWrapper::ball(JointModelBall::new(orientation)),
                false,
                "body",
            )
            .unwrap();
        model
    }

    /// A corrupted (non-unit) quaternion fed through `enforceConstraints` at
    /// the `Model`/`Data` level comes back unit norm.
    #[test]
    fn test_enforce_constraints_renormalizes_quaternion_in_tree() {
        let model = single_ball_body(Orientation::Quaternion);
        let mut data = model.create_data();
        set_pos(&model, &mut data, &Configuration::from_row_slice(&[2.0, 0.0, 0.0, 0.0])).unwrap();

        enforce_constraints(&model, &mut data);
        let q = data.get_pos(&model);

        let norm_sq: f64 = q.as_slice().iter().map(|c| c * c).sum();
        assert_relative_eq!(norm_sq, 1.0, epsilon = 1e-9);
    }

    /// Euler angles run through the `Model` position pass produce the same
    /// rotation as directly composing the 3-2-1 body-three elemental
    /// rotations.
    #[test]
    fn test_euler_ball_joint_matches_body_three_composition() {
        let model = single_ball_body(Orientation::Euler3);
        let mut data = model.create_data();
        let phi = 30.0_f64.to_radians();
        let theta = 15.0_f64.to_radians();
        let psi = -20.0_f64.to_radians();
        let q = Configuration::from_row_slice(&[phi.to_degrees(), theta.to_degrees(), psi.to_degrees()]);

        set_pos(&model, &mut data, &q).unwrap();

        let expected = Rot3::from_body_three(phi, theta, psi);
        let got = data.r_gb[1];
        assert_relative_eq!(got.matrix(), expected.matrix(), epsilon = 1e-9);
    }
}
