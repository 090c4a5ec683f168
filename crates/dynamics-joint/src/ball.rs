//! The contained ball-joint component: a switchable 3-parameter (3-2-1 body-three Euler angles) or
//! 4-parameter (unit quaternion) orientation representation, shared by the
//! [`crate::rotate3`] and [`crate::free`] joint families.
//!
//! Both representations use the same 3-number generalized velocity: the
//! body/parent-frame angular velocity ω. The quaternion representation
//! additionally tracks the quaternion derivative q̇ as a function of ω,
//! kept tangent to the unit sphere (`q·q̇ = 0`) by [`BallJoint::enforce_ball_constraints`].

use dynamics_spatial::{configuration::Configuration, rotation::Rot3, vector3d::Vector3D};
use rand::Rng;

/// Scale applied on the Euler-angle path only: Euler ball
/// angles are stored in degrees, everywhere else in this crate angles are
/// radians.
pub const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// The orientation representation of a ball joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// 3-2-1 body-three Euler angles (Φ, Θ, Ψ), stored in degrees.
    Euler3,
    /// Unit quaternion (w, x, y, z).
    Quaternion,
}

/// The ball-joint contained component.
#[derive(Clone, Debug)]
pub struct BallJoint {
    orientation: Orientation,
    q: Vec<f64>,
    qdot: Vec<f64>,
    omega: Vector3D,
    alpha: Vector3D,
}

impl BallJoint {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        let dim = Self::dim_of(orientation);
        let mut q = vec![0.0; dim];
        if orientation == Orientation::Quaternion {
            q[0] = 1.0;
        }
        Self {
            orientation,
            q,
            qdot: vec![0.0; dim],
            omega: Vector3D::zeros(),
            alpha: Vector3D::zeros(),
        }
    }

    fn dim_of(orientation: Orientation) -> usize {
        match orientation {
            Orientation::Euler3 => 3,
            Orientation::Quaternion => 4,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `getDim()`: 3 if Euler, 4 if quaternion.
    #[must_use]
    pub fn get_dim(&self) -> usize {
        self.q.len()
    }

    pub fn set_ball_pos(&mut self, q: &[f64]) {
        self.q.copy_from_slice(q);
    }

    #[must_use]
    pub fn get_ball_pos(&self) -> &[f64] {
        &self.q
    }

    pub fn set_ball_vel(&mut self, omega: Vector3D) {
        self.omega = omega;
        self.set_ball_derivs();
    }

    #[must_use]
    pub fn get_ball_vel(&self) -> Vector3D {
        self.omega
    }

    pub fn set_ball_accel(&mut self, alpha: Vector3D) {
        self.alpha = alpha;
    }

    #[must_use]
    pub fn get_ball_accel(&self) -> Vector3D {
        self.alpha
    }

    /// `calcR_PB`: the rotation matrix of the current orientation.
    #[must_use]
    pub fn calc_r_pb(&self) -> Rot3 {
        match self.orientation {
            Orientation::Euler3 => {
                Rot3::from_body_three(self.q[0] * DEG2RAD, self.q[1] * DEG2RAD, self.q[2] * DEG2RAD)
            }
            Orientation::Quaternion => {
                Rot3::from_quaternion_wxyz(self.q[0], self.q[1], self.q[2], self.q[3])
            }
        }
    }

    /// `setBallDerivs`: computes q̇ from ω via `q̇ = ½·E(q)·ω`, where `E(q)`
    /// is the 4×3 matrix whose transpose is `M(q)`. No-op
    /// in Euler mode.
    pub fn set_ball_derivs(&mut self) {
        if self.orientation != Orientation::Quaternion {
            return;
        }
        let e = Self::e_matrix(&self.q);
        let omega = [self.omega.x_val(), self.omega.y_val(), self.omega.z_val()];
        for row in 0..4 {
            self.qdot[row] =
                0.5 * (e[row][0] * omega[0] + e[row][1] * omega[1] + e[row][2] * omega[2]);
        }
    }

    /// `calcBallAccel`: computes q̈ from ω, α and the current q̇ via
    /// `q̈ = ½·(E(q̇)·ω + E(q)·α)`. Returns `None` in Euler mode.
    #[must_use]
    pub fn calc_ball_accel(&self) -> Option<[f64; 4]> {
        if self.orientation != Orientation::Quaternion {
            return None;
        }
        let e_q = Self::e_matrix(&self.q);
        let e_qdot = Self::e_matrix(&self.qdot);
        let omega = [self.omega.x_val(), self.omega.y_val(), self.omega.z_val()];
        let alpha = [self.alpha.x_val(), self.alpha.y_val(), self.alpha.z_val()];
        let mut qddot = [0.0; 4];
        for row in 0..4 {
            let from_omega =
                e_qdot[row][0] * omega[0] + e_qdot[row][1] * omega[1] + e_qdot[row][2] * omega[2];
            let from_alpha =
                e_q[row][0] * alpha[0] + e_q[row][1] * alpha[1] + e_q[row][2] * alpha[2];
            qddot[row] = 0.5 * (from_omega + from_alpha);
        }
        Some(qddot)
    }

    #[must_use]
    pub fn get_quaternion_deriv(&self) -> &[f64] {
        &self.qdot
    }

    /// Sets q̇ directly, bypassing the ω-derived relation. Used by
    /// constraint-projection tests that probe `enforceBallConstraints` in
    /// isolation. No-op in Euler mode.
    pub fn set_quaternion_deriv_raw(&mut self, qdot: [f64; 4]) {
        if self.orientation == Orientation::Quaternion {
            self.qdot = qdot.to_vec();
        }
    }

    /// `enforceBallConstraints`: normalizes q to unit norm and projects q̇
    /// onto the tangent space `q·q̇ = 0`. No-op in Euler mode, which has no
    /// normalization constraint to enforce.
    pub fn enforce_ball_constraints(&mut self) {
        if self.orientation != Orientation::Quaternion {
            return;
        }
        let norm_sq: f64 = self.q.iter().map(|c| c * c).sum();
        let norm = norm_sq.sqrt();
        if norm > 0.0 {
            for c in self.q.iter_mut() {
                *c /= norm;
            }
        }
        let dot: f64 = self.q.iter().zip(self.qdot.iter()).map(|(a, b)| a * b).sum();
        for i in 0..4 {
            self.qdot[i] -= dot * self.q[i];
        }
    }

    /// `getBallInternalForce`: maps a body-frame torque back to generalized
    /// force. In quaternion mode the generalized velocity already *is* the
    /// body angular velocity, so the mapping is the identity. In Euler mode,
    /// the standard body-three inverse Jacobian converts the
    /// body torque into the (Φ, Θ, Ψ)-conjugate generalized force, scaled
    /// by [`DEG2RAD`] since q is stored in degrees.
    #[must_use]
    pub fn get_ball_internal_force(&self, torque_body: Vector3D) -> Vector3D {
        match self.orientation {
            Orientation::Quaternion => torque_body,
            Orientation::Euler3 => {
                let phi = self.q[0] * DEG2RAD;
                let theta = self.q[1] * DEG2RAD;
                let (tx, ty, tz) = (torque_body.x_val(), torque_body.y_val(), torque_body.z_val());
                let t_phi = tz;
                let t_theta = -phi.sin() * tx + phi.cos() * ty;
                let t_psi =
                    phi.cos() * theta.cos() * tx + phi.sin() * theta.cos() * ty - theta.sin() * tz;
                Vector3D::new(t_phi, t_theta, t_psi) * DEG2RAD
            }
        }
    }

    #[must_use]
    pub fn neutral(&self) -> Configuration {
        match self.orientation {
            Orientation::Euler3 => Configuration::zeros(3),
            Orientation::Quaternion => Configuration::from_row_slice(&[1.0, 0.0, 0.0, 0.0]),
        }
    }

    pub fn random_configuration(&self, rng: &mut impl Rng) -> Configuration {
        match self.orientation {
            Orientation::Euler3 => Configuration::from_row_slice(&[
                rng.random_range(-180.0..180.0),
                rng.random_range(-90.0..90.0),
                rng.random_range(-180.0..180.0),
            ]),
            Orientation::Quaternion => {
                let mut v = [0.0; 4];
                for c in v.iter_mut() {
                    *c = rng.random_range(-1.0..1.0);
                }
                let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2] + v[3] * v[3])
                    .sqrt()
                    .max(1e-12);
                for c in v.iter_mut() {
                    *c /= norm;
                }
                Configuration::from_row_slice(&v)
            }
        }
    }

    /// The 4×3 matrix E(q) such that `q̇ = ½·E(q)·ω`; E is linear in q, so
    /// `Ė = E(q̇)`.
    fn e_matrix(q: &[f64]) -> [[f64; 3]; 4] {
        let (w, x, y, z) = (q[0], q[1], q[2], q[3]);
        [[-x, -y, -z], [w, -z, y], [z, w, -x], [-y, x, w]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_enforce_constraints_renormalizes_and_projects() {
        let mut ball = BallJoint::new(Orientation::Quaternion);
        ball.set_ball_pos(&[2.0, 0.0, 0.0, 0.0]);
        ball.set_quaternion_deriv_raw([0.1, 0.1, 0.1, 0.1]);
        ball.enforce_ball_constraints();
        assert_relative_eq!(ball.get_ball_pos(), &[1.0, 0.0, 0.0, 0.0][..], epsilon = 1e-12);
        assert_relative_eq!(
            ball.get_quaternion_deriv(),
            &[0.0, 0.1, 0.1, 0.1][..],
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_euler_identity_at_zero() {
        let ball = BallJoint::new(Orientation::Euler3);
        assert_relative_eq!(ball.calc_r_pb().matrix(), &nalgebra::Matrix3::identity());
    }

    #[test]
    fn test_euler_phi_half_pi_maps_y_to_x() {
        let mut ball = BallJoint::new(Orientation::Euler3);
        ball.set_ball_pos(&[90.0, 0.0, 0.0]);
        let r = ball.calc_r_pb();
        let rotated = &r * &Vector3D::y();
        assert_relative_eq!(rotated.x_val(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(rotated.y_val(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quaternion_derivs_tangent_to_unit_sphere() {
        let mut ball = BallJoint::new(Orientation::Quaternion);
        ball.set_ball_vel(Vector3D::new(0.3, -0.2, 0.1));
        let q = ball.get_ball_pos().to_vec();
        let qdot = ball.get_quaternion_deriv();
        let dot: f64 = q.iter().zip(qdot.iter()).map(|(a, b)| a * b).sum();
        assert_relative_eq!(dot, 0.0, epsilon = 1e-12);
    }
}
