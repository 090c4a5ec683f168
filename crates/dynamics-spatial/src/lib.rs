//! Spatial algebra primitives: three-vectors, rotations, spatial
//! (6-component) velocities/forces/inertias, rigid transforms, and the
//! parent-to-child shift operator Φ.

pub mod configuration;
pub mod inertia;
pub mod rotation;
pub mod se3;
pub mod shift;
pub mod so3;
pub mod spatial_mat;
pub mod spatial_vec;
pub mod symmetric3;
pub mod vector3d;

pub use configuration::Configuration;
pub use inertia::SpatialInertia;
pub use rotation::Rot3;
pub use se3::Transform;
pub use shift::Shift;
pub use spatial_mat::SpatialMat;
pub use spatial_vec::{SpatialForce, SpatialVec};
pub use vector3d::Vector3D;
