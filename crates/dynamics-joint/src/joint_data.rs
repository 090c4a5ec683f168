//! Mutable per-joint runtime state: the current position/velocity/
//! acceleration/internal-force configuration and the derived quantities
//! (placement, motion subspace `H`) the recursive passes read from each node.

use crate::joint::JointType;
use dynamics_spatial::{
    configuration::Configuration,
    se3::Transform,
    spatial_vec::{SpatialForce, SpatialVec},
};

/// Common interface implemented by every joint family's runtime state.
///
/// The default [`JointData::calc_kinematics_vel`] and
/// [`JointData::internal_force`] implementations only need [`JointData::h`]
/// and the current `v`/`tau_int`: true for every joint family in this
/// taxonomy except the ball-joint's Euler representation, which overrides
/// [`JointData::internal_force`] to route the body-frame torque through the
/// Euler angular-velocity Jacobian (see [`crate::ball::BallJoint::get_ball_internal_force`]).
pub trait JointData: std::fmt::Debug {
    /// The current configuration (position).
    fn q(&self) -> &Configuration;

    /// The current generalized velocity.
    fn v(&self) -> &Configuration;

    /// The current generalized acceleration.
    fn a(&self) -> &Configuration;

    /// The current internal (generalized) force/torque.
    fn tau_int(&self) -> &Configuration;

    fn set_q(&mut self, q: Configuration);

    fn set_v(&mut self, v: Configuration);

    fn set_a(&mut self, a: Configuration);

    fn set_tau_int(&mut self, tau: Configuration);

    /// The joint transition matrix `H`, stored as its `nv` rows (each a
    /// spatial motion 6-vector expressed in this node's own frame). `H`'s
    /// row `i` and `Hᵀ`'s column `i` are the same six numbers, so the
    /// generalized-velocity-to-spatial-velocity map `Hᵀ·θ̇` reduces to
    /// `Σ θ̇_i · h_i` for every joint family.
    fn h(&self) -> &[SpatialVec];

    /// The joint's contribution to this node's placement relative to its
    /// fixed mounting frame (i.e. the rotation/translation induced by `q`
    /// alone). Recomputed by [`JointData::calc_kinematics_pos`].
    fn placement(&self) -> Transform;

    /// Recomputes [`JointData::placement`] (and, for joint families whose
    /// `H` depends on `q`, `H` itself) from the current `q`.
    fn calc_kinematics_pos(&mut self);

    /// The spatial velocity this joint contributes to its node, `Hᵀ·θ̇`.
    fn calc_kinematics_vel(&self) -> SpatialVec {
        let v = self.v();
        self.h()
            .iter()
            .enumerate()
            .fold(SpatialVec::zero(), |acc, (i, h_i)| acc + h_i * v[i])
    }

    /// Projects constraints back onto the configuration manifold (e.g.
    /// quaternion renormalization). A no-op for joint families without a
    /// manifold constraint.
    fn enforce_constraints(&mut self) {}

    /// Maps a spatial residual force/bias `z`, expressed in this node's
    /// frame, to the generalized internal force `H·z` (`calcInternalForce`).
    fn internal_force(&self, z: &SpatialForce) -> Configuration {
        let values: Vec<f64> = self.h().iter().map(|h_i| h_i.inner(z)).collect();
        Configuration::from_row_slice(&values)
    }
}

use crate::{
    cartesian::JointDataCartesian, diatom::JointDataDiatom, free::JointDataFree,
    ground::JointDataGround, rotate3::JointDataBall, torsion::JointDataTorsion,
    ujoint::JointDataUJoint,
};

#[derive(Clone, Debug)]
enum JointDataImpl {
    Ground(JointDataGround),
    Cartesian(JointDataCartesian),
    Torsion(JointDataTorsion),
    UJoint(JointDataUJoint),
    Ball(JointDataBall),
    Diatom(JointDataDiatom),
    Free(JointDataFree),
}

/// Wrapper enum over the runtime state of the seven joint families.
#[derive(Clone, Debug)]
pub struct JointDataWrapper {
    inner: JointDataImpl,
    joint_type: JointType,
}

impl JointDataWrapper {
    #[must_use]
    pub fn ground(data: JointDataGround) -> Self {
        Self { inner: JointDataImpl::Ground(data), joint_type: JointType::Ground }
    }

    #[must_use]
    pub fn cartesian(data: JointDataCartesian) -> Self {
        Self { inner: JointDataImpl::Cartesian(data), joint_type: JointType::Cartesian }
    }

    #[must_use]
    pub fn torsion(data: JointDataTorsion) -> Self {
        Self { inner: JointDataImpl::Torsion(data), joint_type: JointType::Torsion }
    }

    #[must_use]
    pub fn ujoint(data: JointDataUJoint) -> Self {
        Self { inner: JointDataImpl::UJoint(data), joint_type: JointType::UJoint }
    }

    #[must_use]
    pub fn ball(data: JointDataBall) -> Self {
        Self { inner: JointDataImpl::Ball(data), joint_type: JointType::Ball }
    }

    #[must_use]
    pub fn diatom(data: JointDataDiatom) -> Self {
        Self { inner: JointDataImpl::Diatom(data), joint_type: JointType::Diatom }
    }

    #[must_use]
    pub fn free(data: JointDataFree) -> Self {
        Self { inner: JointDataImpl::Free(data), joint_type: JointType::Free }
    }

    /// The joint family this runtime state belongs to.
    #[must_use]
    pub fn joint_type(&self) -> JointType {
        self.joint_type
    }

    /// Downcasts to the ball-joint runtime state, if this is a [`JointType::Ball`].
    #[must_use]
    pub fn as_ball(&self) -> Option<&JointDataBall> {
        match &self.inner {
            JointDataImpl::Ball(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable downcast counterpart of [`Self::as_ball`].
    pub fn as_ball_mut(&mut self) -> Option<&mut JointDataBall> {
        match &mut self.inner {
            JointDataImpl::Ball(data) => Some(data),
            _ => None,
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match &$self.inner {
            JointDataImpl::Ground(d) => d.$method($($arg),*),
            JointDataImpl::Cartesian(d) => d.$method($($arg),*),
            JointDataImpl::Torsion(d) => d.$method($($arg),*),
            JointDataImpl::UJoint(d) => d.$method($($arg),*),
            JointDataImpl::Ball(d) => d.$method($($arg),*),
            JointDataImpl::Diatom(d) => d.$method($($arg),*),
            JointDataImpl::Free(d) => d.$method($($arg),*),
        }
    };
}

macro_rules! dispatch_mut {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match &mut $self.inner {
            JointDataImpl::Ground(d) => d.$method($($arg),*),
            JointDataImpl::Cartesian(d) => d.$method($($arg),*),
            JointDataImpl::Torsion(d) => d.$method($($arg),*),
            JointDataImpl::UJoint(d) => d.$method($($arg),*),
            JointDataImpl::Ball(d) => d.$method($($arg),*),
            JointDataImpl::Diatom(d) => d.$method($($arg),*),
            JointDataImpl::Free(d) => d.$method($($arg),*),
        }
    };
}

impl JointData for JointDataWrapper {
    fn q(&self) -> &Configuration {
        dispatch!(self, q)
    }

    fn v(&self) -> &Configuration {
        dispatch!(self, v)
    }

    fn a(&self) -> &Configuration {
        dispatch!(self, a)
    }

    fn tau_int(&self) -> &Configuration {
        dispatch!(self, tau_int)
    }

    fn set_q(&mut self, q: Configuration) {
        dispatch_mut!(self, set_q, q)
    }

    fn set_v(&mut self, v: Configuration) {
        dispatch_mut!(self, set_v, v)
    }

    fn set_a(&mut self, a: Configuration) {
        dispatch_mut!(self, set_a, a)
    }

    fn set_tau_int(&mut self, tau: Configuration) {
        dispatch_mut!(self, set_tau_int, tau)
    }

    fn h(&self) -> &[SpatialVec] {
        dispatch!(self, h)
    }

    fn placement(&self) -> Transform {
        dispatch!(self, placement)
    }

    fn calc_kinematics_pos(&mut self) {
        dispatch_mut!(self, calc_kinematics_pos)
    }

    fn calc_kinematics_vel(&self) -> SpatialVec {
        dispatch!(self, calc_kinematics_vel)
    }

    fn enforce_constraints(&mut self) {
        dispatch_mut!(self, enforce_constraints)
    }

    fn internal_force(&self, z: &SpatialForce) -> Configuration {
        dispatch!(self, internal_force, z)
    }
}
