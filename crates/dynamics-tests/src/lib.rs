//! Cross-crate integration scenarios exercising the full `Model`/`Data`
//! pipeline, kept separate from the per-crate unit tests so each scenario
//! can assemble a tree from more than one joint family at once.

pub mod scenarios;

mod forward_dynamics_scenarios;
mod free_body_scenarios;
mod lapack_scenarios;
mod orientation_scenarios;
mod properties;
