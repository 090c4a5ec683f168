//! Rigid-body mass properties: mass, center of mass, and a rotational
//! inertia tensor, with conversion into the spatial inertia operator used by
//! the articulated-body algorithm.

pub mod inertia;

pub use inertia::{InertiaError, MassProperties};
