//! Defines the generic joint model trait and a tagged-enum wrapper that
//! dispatches across the seven joint families.
//!
//! Uses a `JointModel` trait plus a `JointWrapper` tagged-enum dispatch
//! over all seven joint kinds rather than trait objects, since the joint
//! family set is closed.

use crate::{
    cartesian::JointModelCartesian, diatom::JointModelDiatom, free::JointModelFree,
    ground::JointModelGround, joint_data::JointDataWrapper, rotate3::JointModelBall,
    torsion::JointModelTorsion, ujoint::JointModelUJoint,
};
use dynamics_spatial::configuration::Configuration;
use rand::rngs::ThreadRng;

/// The seven joint families enumerated by the assembly interface. The
/// parenthesized names are the ones `createChild` accepts externally;
/// internally they group by degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointType {
    /// 0 motion / 0 position DOF: rigidly welds a node to its parent.
    Ground,
    /// 3 motion / 3 position DOF: pure translation. AKA `CartesianJoint`.
    Cartesian,
    /// 1 motion / 1 position DOF: rotation about a single fixed axis.
    Torsion,
    /// 2 motion / 2 position DOF: rotation about two fixed axes (a gimbal).
    UJoint,
    /// 3 motion DOF, 3 (Euler) or 4 (quaternion) position DOF. AKA `OrientationJoint`.
    Ball,
    /// 5 motion / 5 (or 6, quaternion rotate2 has no such case) position DOF:
    /// `UJoint` + `Cartesian`. AKA `FreeLineJoint`.
    Diatom,
    /// 6 motion DOF, 6 (Euler) or 7 (quaternion) position DOF: `Ball` + `Cartesian`.
    /// AKA `FreeJoint`.
    Free,
}

/// Common interface implemented by every joint family's static description
/// (topology-fixed: axes, orientation representation, DOF counts).
pub trait JointModel: std::fmt::Debug {
    /// The joint family.
    fn joint_type(&self) -> JointType;

    /// Number of position (configuration) variables.
    fn nq(&self) -> usize;

    /// Number of velocity (generalized) variables.
    fn nv(&self) -> usize;

    /// The neutral (zero/identity) configuration of this joint.
    fn neutral(&self) -> Configuration;

    /// Draws a configuration uniformly at random within the joint's natural range.
    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration;

    /// Allocates fresh mutable runtime state for this joint, zero-initialized.
    fn create_joint_data(&self) -> JointDataWrapper;
}

#[derive(Clone, Debug)]
enum JointModelImpl {
    Ground(JointModelGround),
    Cartesian(JointModelCartesian),
    Torsion(JointModelTorsion),
    UJoint(JointModelUJoint),
    Ball(JointModelBall),
    Diatom(JointModelDiatom),
    Free(JointModelFree),
}

/// Wrapper enum over the seven joint families. Users interact with joints
/// through this type and the [`JointModel`] trait rather than the per-family
/// structs directly.
#[derive(Clone, Debug)]
pub struct JointWrapper {
    inner: JointModelImpl,
}

impl JointWrapper {
    #[must_use]
    pub fn ground(joint: JointModelGround) -> Self {
        Self { inner: JointModelImpl::Ground(joint) }
    }

    #[must_use]
    pub fn cartesian(joint: JointModelCartesian) -> Self {
        Self { inner: JointModelImpl::Cartesian(joint) }
    }

    #[must_use]
    pub fn torsion(joint: JointModelTorsion) -> Self {
        Self { inner: JointModelImpl::Torsion(joint) }
    }

    #[must_use]
    pub fn ujoint(joint: JointModelUJoint) -> Self {
        Self { inner: JointModelImpl::UJoint(joint) }
    }

    #[must_use]
    pub fn ball(joint: JointModelBall) -> Self {
        Self { inner: JointModelImpl::Ball(joint) }
    }

    #[must_use]
    pub fn diatom(joint: JointModelDiatom) -> Self {
        Self { inner: JointModelImpl::Diatom(joint) }
    }

    #[must_use]
    pub fn free(joint: JointModelFree) -> Self {
        Self { inner: JointModelImpl::Free(joint) }
    }
}

macro_rules! dispatch {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match &$self.inner {
            JointModelImpl::Ground(j) => j.$method($($arg),*),
            JointModelImpl::Cartesian(j) => j.$method($($arg),*),
            JointModelImpl::Torsion(j) => j.$method($($arg),*),
            JointModelImpl::UJoint(j) => j.$method($($arg),*),
            JointModelImpl::Ball(j) => j.$method($($arg),*),
            JointModelImpl::Diatom(j) => j.$method($($arg),*),
            JointModelImpl::Free(j) => j.$method($($arg),*),
        }
    };
}

impl JointModel for JointWrapper {
    fn joint_type(&self) -> JointType {
        dispatch!(self, joint_type)
    }

    fn nq(&self) -> usize {
        dispatch!(self, nq)
    }

    fn nv(&self) -> usize {
        dispatch!(self, nv)
    }

    fn neutral(&self) -> Configuration {
        dispatch!(self, neutral)
    }

    fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        dispatch!(self, random_configuration, rng)
    }

    fn create_joint_data(&self) -> JointDataWrapper {
        dispatch!(self, create_joint_data)
    }
}
