//! # **`dynamics`**: A Rust library for Rigid Body Dynamics
//!
//! `dynamics` is a Rust library for rigid body dynamics computations, allowing
//! users to model and simulate the motion of articulated rigid body systems such
//! as robots. It provides recursive Featherstone-style spatial-algebra algorithms
//! for forward and inverse dynamics of tree-structured articulated bodies.
//!
//! This library draws on Roy Featherstone's book ["Rigid Body Dynamics
//! Algorithms"](https://link.springer.com/book/10.1007/978-1-4899-7560-7) for
//! the theoretical foundation of the algorithms implemented here.
//!
//! ## Features
//! - Representation of rigid body systems as articulated tree models, built
//!   up joint by joint.
//! - A taxonomy of seven joint families (ground, Cartesian, torsion, universal,
//!   ball, diatom, and free), with the ball joint switchable between Euler-angle
//!   and quaternion orientation.
//! - Forward and inverse kinematics, and the articulated-body algorithm for
//!   forward dynamics with its standalone inverse.
//! - A companion LAPACK/BLAS dispatch layer for the dense linear algebra used
//!   internally and available to callers directly.
//!
//! ## Crates
//! The `dynamics` library is organized into several crates, each focusing on a
//! specific aspect of rigid body dynamics:
//! - [`dynamics-rs`](https://docs.rs/crate/dynamics-rs/latest): the main crate that provides high-level functionalities and interfaces.
//! - [`dynamics-spatial`](https://docs.rs/crate/dynamics-spatial/latest): implements spatial algebra used in rigid body dynamics, such as spatial vectors and transformations.
//! - [`dynamics-model`](https://docs.rs/crate/dynamics-model/latest): contains model and data structures for rigid body systems and the kinematics/dynamics passes over them.
//! - [`dynamics-joint`](https://docs.rs/crate/dynamics-joint/latest): implements the joint taxonomy and their properties.
//! - [`dynamics-inertia`](https://docs.rs/crate/dynamics-inertia/latest): provides rigid-body mass-property computations and data structures.
//! - [`dynamics-lapack`](https://docs.rs/crate/dynamics-lapack/latest): thin, per-scalar-kind LAPACK/BLAS dispatch layer.

pub use dynamics_inertia as inertia;
pub use dynamics_joint as joint;
pub use dynamics_lapack as lapack;
pub use dynamics_model as model;
pub use dynamics_spatial as spatial;

pub mod prelude;
