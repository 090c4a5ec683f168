//! Errors raised while assembling a [`crate::model::Model`] or running the
//! recursive dynamics passes over it.

use std::fmt::Display;

/// A precondition the assembly interface requires was violated:
/// these are caught at `add_joint`/`createChild` time, before any recursion
/// runs.
#[derive(Debug, Clone, PartialEq)]
pub enum PreconditionViolated {
    /// A joint with this name was already registered.
    DuplicateJointName(String),
    /// The named parent joint does not exist in the model.
    ParentJointDoesNotExist { joint: String, parent: String },
    /// A child was registered with a parent index at or past its own index
    /// (the tree must be built in topological, parent-before-child order).
    ChildIndexedBeforeParent { joint: String, parent_index: usize, joint_index: usize },
    /// A configuration/velocity/force argument did not have the expected size.
    IncorrectSize { name: String, expected: usize, got: usize },
    /// The reversed-joint flag was set to `true`, which the interface
    /// accepts syntactically but does not yet support.
    ReversedJointUnsupported(String),
    /// A frame or joint index was out of range.
    IndexOutOfRange { name: String, index: usize, len: usize },
}

impl Display for PreconditionViolated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreconditionViolated::DuplicateJointName(name) => {
                write!(f, "a joint named '{name}' already exists")
            }
            PreconditionViolated::ParentJointDoesNotExist { joint, parent } => {
                write!(f, "joint '{joint}' names nonexistent parent '{parent}'")
            }
            PreconditionViolated::ChildIndexedBeforeParent { joint, parent_index, joint_index } => {
                write!(
                    f,
                    "joint '{joint}' (index {joint_index}) was indexed before its parent (index {parent_index})"
                )
            }
            PreconditionViolated::IncorrectSize { name, expected, got } => {
                write!(f, "'{name}' expected size {expected}, got {got}")
            }
            PreconditionViolated::ReversedJointUnsupported(joint) => {
                write!(f, "joint '{joint}' requested the reversed-joint flag, which is not supported")
            }
            PreconditionViolated::IndexOutOfRange { name, index, len } => {
                write!(f, "'{name}' index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for PreconditionViolated {}

/// Errors raised while running the recursive passes themselves.
#[derive(Debug, Clone)]
pub enum AlgorithmError {
    /// A node's articulated-body inertia projected onto its own joint
    /// subspace, `D = H·P·Hᵀ`, was numerically singular and could not be
    /// inverted. Carries the node's tree level and a snapshot of `H` so the
    /// caller can diagnose which joint produced the singularity.
    SingularConfiguration { joint_name: String, level: usize, h_snapshot: Vec<[f64; 6]> },
    /// A configuration/velocity/acceleration/force argument did not match
    /// the model's expected size.
    IncorrectSize { name: String, expected: usize, got: usize },
}

impl Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmError::SingularConfiguration { joint_name, level, .. } => {
                write!(
                    f,
                    "singular articulated-body inertia at joint '{joint_name}' (tree level {level})"
                )
            }
            AlgorithmError::IncorrectSize { name, expected, got } => {
                write!(f, "'{name}' expected size {expected}, got {got}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}
