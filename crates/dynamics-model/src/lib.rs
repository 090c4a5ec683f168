//! This crate is part of the `dynamics` ecosystem, and is not intended for direct use.
//!
//! The `Model`/`Data` split and the recursive algorithm driver:
//! the base-to-tip position and velocity kinematics passes, the tip-to-base
//! articulated-body recursion (`calcP`/`calcZ`), the base-to-tip
//! acceleration pass (`calcAccel`), the coupling-inertia pass (`calcY`), and
//! the standalone inverse `calcInternalForce` pass.

pub mod data;
pub mod errors;
pub mod forward_dynamics;
pub mod forward_kinematics;
pub mod inverse_dynamics;
pub mod linalg;
pub mod model;

pub use data::Data;
pub use errors::{AlgorithmError, PreconditionViolated};
pub use model::{Model, GROUND_ID, STANDARD_GRAVITY};
