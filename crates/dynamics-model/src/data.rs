//! The mutable per-node runtime state of a dynamics step: position,
//! velocity and acceleration kinematics, and the articulated-body scratch
//! (`P`, `D`, `DI`, `G`, `τ`, `ψᵀ`, `z`, `ε`, `ν`, `Gε`, `Y`) filled in by
//! the recursive passes of [`crate::forward_kinematics`] and
//! [`crate::forward_dynamics`].

use dynamics_joint::joint::JointModel;
use dynamics_joint::joint_data::{JointData, JointDataWrapper};
use dynamics_spatial::{
    configuration::Configuration,
    inertia::SpatialInertia,
    rotation::Rot3,
    shift::Shift,
    spatial_mat::SpatialMat,
    spatial_vec::{SpatialForce, SpatialVec},
    vector3d::Vector3D,
};
use nalgebra::{DMatrix, Matrix3};

use crate::model::Model;

/// Per-node mutable runtime state, one entry per node in tree order.
#[derive(Clone, Debug)]
pub struct Data {
    pub joint_data: Vec<JointDataWrapper>,

    // Position state (position pass).
    pub r_gb: Vec<Rot3>,
    pub o_bg: Vec<Vector3D>,
    pub shift: Vec<Shift>,
    pub spatial_inertia: Vec<SpatialInertia>,
    pub com_ground: Vec<Vector3D>,
    pub inertia_origin_ground: Vec<Matrix3<f64>>,
    /// This node's `H`, rotated into the ground-aligned basis via `R_GP`
    /// (recomputed on every position pass).
    pub h_ground: Vec<Vec<SpatialVec>>,

    // Velocity state (velocity pass).
    pub vel: Vec<SpatialVec>,
    pub gyroscopic_bias: Vec<SpatialVec>,
    pub coriolis_bias: Vec<SpatialVec>,

    // Acceleration state (calcAccel).
    pub accel: Vec<SpatialVec>,

    // Articulated-body scratch (calcP/calcZ/calcY).
    pub artic_inertia: Vec<SpatialMat>,
    pub dof_inertia_inv: Vec<DMatrix<f64>>,
    pub coupling: Vec<DMatrix<f64>>,
    pub tau_complement: Vec<SpatialMat>,
    pub psi_t: Vec<SpatialMat>,
    pub residual_z: Vec<SpatialForce>,
    pub residual_eps: Vec<Configuration>,
    pub nu: Vec<Configuration>,
    pub g_eps: Vec<SpatialForce>,
    pub y: Vec<SpatialMat>,
}

impl Data {
    #[must_use]
    pub fn new(model: &Model) -> Self {
        let n = model.njoints();
        let joint_data: Vec<JointDataWrapper> =
            (0..n).map(|i| model.joint(i).create_joint_data()).collect();

        Self {
            joint_data,
            r_gb: vec![Rot3::identity(); n],
            o_bg: vec![Vector3D::zeros(); n],
            shift: vec![Shift::identity(); n],
            spatial_inertia: vec![SpatialInertia::zeros(); n],
            com_ground: vec![Vector3D::zeros(); n],
            inertia_origin_ground: vec![Matrix3::zeros(); n],
            h_ground: vec![Vec::new(); n],
            vel: vec![SpatialVec::zero(); n],
            gyroscopic_bias: vec![SpatialVec::zero(); n],
            coriolis_bias: vec![SpatialVec::zero(); n],
            accel: vec![SpatialVec::zero(); n],
            artic_inertia: vec![SpatialMat::zeros(); n],
            dof_inertia_inv: vec![DMatrix::zeros(0, 0); n],
            coupling: vec![DMatrix::zeros(0, 0); n],
            tau_complement: vec![SpatialMat::zeros(); n],
            psi_t: vec![SpatialMat::zeros(); n],
            residual_z: vec![SpatialVec::zero(); n],
            residual_eps: vec![Configuration::zeros(0); n],
            nu: vec![Configuration::zeros(0); n],
            g_eps: vec![SpatialVec::zero(); n],
            y: vec![SpatialMat::zeros(); n],
        }
    }

    /// Reads out the tree-wide configuration vector.
    #[must_use]
    pub fn get_pos(&self, model: &Model) -> Configuration {
        let configs: Vec<Configuration> = (0..model.njoints())
            .map(|i| self.joint_data[i].q().clone())
            .collect();
        Configuration::concat(&configs)
    }

    /// Reads out the tree-wide velocity vector.
    #[must_use]
    pub fn get_vel(&self, model: &Model) -> Configuration {
        let configs: Vec<Configuration> = (0..model.njoints())
            .map(|i| self.joint_data[i].v().clone())
            .collect();
        Configuration::concat(&configs)
    }

    /// Reads out the tree-wide acceleration vector.
    #[must_use]
    pub fn get_accel(&self, model: &Model) -> Configuration {
        let configs: Vec<Configuration> = (0..model.njoints())
            .map(|i| self.joint_data[i].a().clone())
            .collect();
        Configuration::concat(&configs)
    }

    /// Reads out the tree-wide internal-force vector.
    #[must_use]
    pub fn get_internal_force(&self, model: &Model) -> Configuration {
        let configs: Vec<Configuration> = (0..model.njoints())
            .map(|i| self.joint_data[i].tau_int().clone())
            .collect();
        Configuration::concat(&configs)
    }

    /// The system's total kinetic energy, `Σ_nodes ½·s_velᵀ·M_k·s_vel`.
    #[must_use]
    pub fn kinetic_energy(&self, model: &Model) -> f64 {
        let mut ke = 0.0;
        for i in 1..model.njoints() {
            let momentum = &self.spatial_inertia[i] * &self.vel[i];
            ke += 0.5 * self.vel[i].inner(&momentum);
        }
        ke
    }
}
