//! The static topology of an articulated-body system: an
//! ordered node sequence, ground at index 0, each non-ground node holding a
//! strictly lower-indexed parent. `Model` owns everything that is fixed for
//! the lifetime of a run; [`crate::data::Data`] owns the mutable state a
//! dynamics step reads and writes.

use crate::errors::PreconditionViolated;
use dynamics_inertia::inertia::MassProperties;
use dynamics_joint::ground::JointModelGround;
use dynamics_joint::joint::{JointModel, JointWrapper};
use dynamics_spatial::{configuration::Configuration, se3::Transform, vector3d::Vector3D};
use rand::rngs::ThreadRng;

/// Index of the ground node, always present and always index 0.
pub const GROUND_ID: usize = 0;

/// Standard gravitational acceleration, `m/s^2`.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// The immutable tree structure of an articulated-body system: per-node
/// parent links, joint models, mounting frames, and mass properties, plus
/// the bookkeeping needed to pack/unpack the tree-wide configuration
/// vectors (`createChild`/state transfer).
#[derive(Clone, Debug)]
pub struct Model {
    name: String,
    names: Vec<String>,
    parents: Vec<usize>,
    children: Vec<Vec<usize>>,
    joints: Vec<JointWrapper>,
    /// Fixed transform from the parent's frame to this joint's mounting
    /// frame (the inboard-joint frame expressed in the body frame, folded
    /// here into a single parent-to-joint transform composed with the
    /// joint's own `q`-dependent placement).
    joint_frames: Vec<Transform>,
    mass_properties: Vec<MassProperties>,
    idx_q: Vec<usize>,
    idx_v: Vec<usize>,
    nq: usize,
    nv: usize,
    /// Gravity, expressed in the ground frame.
    pub gravity: Vector3D,
}

impl Model {
    /// Builds a model containing only the ground node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            names: vec!["ground".to_string()],
            parents: vec![GROUND_ID],
            children: vec![Vec::new()],
            joints: vec![JointWrapper::ground(JointModelGround::new())],
            joint_frames: vec![Transform::identity()],
            mass_properties: vec![MassProperties::zeros()],
            idx_q: vec![0],
            idx_v: vec![0],
            nq: 0,
            nv: 0,
            gravity: Vector3D::new(0.0, -STANDARD_GRAVITY, 0.0),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn njoints(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn nq(&self) -> usize {
        self.nq
    }

    #[must_use]
    pub fn nv(&self) -> usize {
        self.nv
    }

    #[must_use]
    pub fn parent(&self, id: usize) -> usize {
        self.parents[id]
    }

    #[must_use]
    pub fn children(&self, id: usize) -> &[usize] {
        &self.children[id]
    }

    #[must_use]
    pub fn joint(&self, id: usize) -> &JointWrapper {
        &self.joints[id]
    }

    #[must_use]
    pub fn joint_frame(&self, id: usize) -> Transform {
        self.joint_frames[id]
    }

    #[must_use]
    pub fn mass_properties(&self, id: usize) -> &MassProperties {
        &self.mass_properties[id]
    }

    #[must_use]
    pub fn idx_q(&self, id: usize) -> usize {
        self.idx_q[id]
    }

    #[must_use]
    pub fn idx_v(&self, id: usize) -> usize {
        self.idx_v[id]
    }

    /// Looks up a node's index by name.
    #[must_use]
    pub fn get_joint_id(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// The name a node was registered under.
    #[must_use]
    pub fn joint_name(&self, id: usize) -> &str {
        &self.names[id]
    }

    /// A node's distance from the ground, counting ground itself as level 0.
    #[must_use]
    pub fn level(&self, id: usize) -> usize {
        let mut level = 0;
        let mut current = id;
        while current != GROUND_ID {
            current = self.parents[current];
            level += 1;
        }
        level
    }

    /// Appends a new node to the tree. `reversed` mirrors
    /// the interface's reversed-joint flag, which this implementation does
    /// not support; passing `true` is a precondition failure.
    pub fn create_child(
        &mut self,
        parent: usize,
        mass_properties: MassProperties,
        joint_frame: Transform,
        joint: JointWrapper,
        reversed: bool,
        name: impl Into<String>,
    ) -> Result<usize, PreconditionViolated> {
        let name = name.into();
        if reversed {
            return Err(PreconditionViolated::ReversedJointUnsupported(name));
        }
        if self.names.iter().any(|n| n == &name) {
            return Err(PreconditionViolated::DuplicateJointName(name));
        }
        if parent >= self.names.len() {
            return Err(PreconditionViolated::ParentJointDoesNotExist {
                joint: name,
                parent: format!("index {parent}"),
            });
        }

        let id = self.names.len();
        let nq = joint.nq();
        let nv = joint.nv();

        self.names.push(name);
        self.parents.push(parent);
        self.children.push(Vec::new());
        self.children[parent].push(id);
        self.idx_q.push(self.nq);
        self.idx_v.push(self.nv);
        self.nq += nq;
        self.nv += nv;
        self.joints.push(joint);
        self.joint_frames.push(joint_frame);
        self.mass_properties.push(mass_properties);

        Ok(id)
    }

    /// Allocates fresh runtime state for every node, sized to this model.
    #[must_use]
    pub fn create_data(&self) -> crate::data::Data {
        crate::data::Data::new(self)
    }

    /// The neutral configuration: every node's `neutral()` concatenated in
    /// tree order.
    #[must_use]
    pub fn neutral_configuration(&self) -> Configuration {
        let configs: Vec<Configuration> = self.joints.iter().map(JointModel::neutral).collect();
        Configuration::concat(&configs)
    }

    /// Draws a configuration uniformly at random within each joint's range.
    #[must_use]
    pub fn random_configuration(&self, rng: &mut ThreadRng) -> Configuration {
        let configs: Vec<Configuration> = self
            .joints
            .iter()
            .map(|j| j.random_configuration(rng))
            .collect();
        Configuration::concat(&configs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynamics_joint::{
        cartesian::JointModelCartesian, ground::JointModelGround, torsion::JointModelTorsion,
    };

    #[test]
    fn test_new_model_has_only_ground() {
        let model = Model::new("test");
        assert_eq!(model.njoints(), 1);
        assert_eq!(model.nq(), 0);
        assert_eq!(model.nv(), 0);
    }

    #[test]
    fn test_create_child_extends_nq_nv() {
        let mut model = Model::new("test");
        let body = MassProperties::from_sphere(1.0, 0.1).unwrap();
        let id = model
            .create_child(
                GROUND_ID,
                body,
                Transform::identity(),
                JointWrapper::cartesian(JointModelCartesian::new()),
                false,
                "body1",
            )
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(model.nq(), 3);
        assert_eq!(model.nv(), 3);
        assert_eq!(model.children(GROUND_ID), &[1]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut model = Model::new("test");
        let body = MassProperties::from_sphere(1.0, 0.1).unwrap();
        model
            .create_child(
                GROUND_ID,
                body.clone(),
                Transform::identity(),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
                false,
                "body1",
            )
            .unwrap();
        let err = model
            .create_child(
                GROUND_ID,
                body,
                Transform::identity(),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
                false,
                "body1",
            )
            .unwrap_err();
        assert!(matches!(err, PreconditionViolated::DuplicateJointName(_)));
    }

    #[test]
    fn test_reversed_joint_rejected() {
        let mut model = Model::new("test");
        let body = MassProperties::from_sphere(1.0, 0.1).unwrap();
        let err = model
            .create_child(
                GROUND_ID,
                body,
                Transform::identity(),
                JointWrapper::ground(JointModelGround::new()),
                true,
                "body1",
            )
            .unwrap_err();
        assert!(matches!(err, PreconditionViolated::ReversedJointUnsupported(_)));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut model = Model::new("test");
        let body = MassProperties::from_sphere(1.0, 0.1).unwrap();
        let err = model
            .create_child(
                42,
                body,
                Transform::identity(),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
                false,
                "body1",
            )
            .unwrap_err();
        assert!(matches!(err, PreconditionViolated::ParentJointDoesNotExist { .. }));
    }

    #[test]
    fn test_neutral_configuration_sized_correctly() {
        let mut model = Model::new("test");
        model
            .create_child(
                GROUND_ID,
                MassProperties::zeros(),
                Transform::identity(),
                JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
                false,
                "joint1",
            )
            .unwrap();
        let neutral = model.neutral_configuration();
        assert_eq!(neutral.len(), 1);
    }
}
