// Model
pub use crate::model::data::Data;
pub use crate::model::model::{Model, GROUND_ID, STANDARD_GRAVITY};

// Errors
pub use crate::model::errors::{AlgorithmError, PreconditionViolated};

// Algorithms
pub use crate::model::forward_dynamics::{calc_accel, calc_p, calc_y, calc_z, enforce_constraints, forward_dynamics};
pub use crate::model::forward_kinematics::{set_pos, set_vel};
pub use crate::model::inverse_dynamics::calc_internal_force;

// Joints
pub use crate::joint::joint::{JointModel, JointType, JointWrapper};
pub use crate::joint::joint_data::{JointData, JointDataWrapper};

// Inertia
pub use crate::inertia::inertia::MassProperties;

// Configurations and spatial algebra
pub use crate::spatial::configuration::Configuration;
pub use crate::spatial::se3::Transform;
pub use crate::spatial::shift::Shift;
pub use crate::spatial::spatial_vec::{SpatialForce, SpatialVec};

// Linear algebra
pub use crate::lapack::{lu_factor, lu_solve, symmetric_eigen_full, LapackInfo};
