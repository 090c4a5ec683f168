//! Small, reusable tree fixtures shared by this crate's scenario tests and
//! benches.

use dynamics_inertia::inertia::MassProperties;
use dynamics_joint::{
    ball::Orientation,
    cartesian::JointModelCartesian,
    free::JointModelFree,
    joint::JointWrapper,
    torsion::JointModelTorsion,
};
use dynamics_model::model::{Model, GROUND_ID};
use dynamics_spatial::{se3::Transform, symmetric3::Symmetric3, vector3d::Vector3D};

/// A single body free-falling under gravity on a Cartesian joint.
#[must_use]
pub fn falling_cartesian_body(mass: f64, radius: f64) -> Model {
    let mut model = Model::new("falling-body");
    model
        .create_child(
            GROUND_ID,
            MassProperties::from_sphere(mass, radius).unwrap(),
            Transform::identity(),
            JointWrapper::cartesian(JointModelCartesian::new()),
            false,
            "body",
        )
        .unwrap();
    model
}

/// A point-like spherical bob mounted off-axis on a single torsion joint
/// about `z`, i.e. a planar pendulum.
#[must_use]
pub fn torsion_pendulum(mass: f64, radius: f64, arm_length: f64) -> Model {
    let mut model = Model::new("torsion-pendulum");
    let inertia_about_com = Symmetric3::from_diagonal(&[
        2.0 / 5.0 * mass * radius * radius,
        2.0 / 5.0 * mass * radius * radius,
        2.0 / 5.0 * mass * radius * radius,
    ]);
    let mass_properties =
        MassProperties::from_com_relative(mass, Vector3D::new(arm_length, 0.0, 0.0), inertia_about_com);
    model
        .create_child(
            GROUND_ID,
            mass_properties,
            Transform::identity(),
            JointWrapper::torsion(JointModelTorsion::new(Vector3D::z())),
            false,
            "arm",
        )
        .unwrap();
    model
}

/// A single free-floating body with an isotropic (spherical) inertia,
/// orientation represented as requested. Gravity is zeroed so the body spins
/// or drifts without any external field.
#[must_use]
pub fn torque_free_sphere(mass: f64, radius: f64, orientation: Orientation) -> Model {
    let mut model = Model::new("torque-free-sphere");
    model.gravity = Vector3D::zeros();
    model
        .create_child(
            GROUND_ID,
            MassProperties::from_sphere(mass, radius).unwrap(),
            Transform::identity(),
            JointWrapper::free(JointModelFree::new(orientation)),
            false,
            "body",
        )
        .unwrap();
    model
}

/// A serial chain of `n` torsion-jointed links, alternating the joint axis
/// between `z` and `y` so successive links don't share a rotation plane.
/// Used to benchmark the recursive passes at a size an URDF fixture would
/// otherwise provide.
#[must_use]
pub fn serial_torsion_chain(n: usize) -> Model {
    let mut model = Model::new("serial-chain");
    let link_mass = 1.0;
    let link_radius = 0.05;
    let link_length = 0.3;
    let inertia_about_com = Symmetric3::from_diagonal(&[
        2.0 / 5.0 * link_mass * link_radius * link_radius,
        2.0 / 5.0 * link_mass * link_radius * link_radius,
        2.0 / 5.0 * link_mass * link_radius * link_radius,
    ]);
    let mass_properties =
        MassProperties::from_com_relative(link_mass, Vector3D::new(link_length, 0.0, 0.0), inertia_about_com);

    let mut parent = GROUND_ID;
    for i in 0..n {
        let axis = if i % 2 == 0 { Vector3D::z() } else { Vector3D::y() };
        let joint_frame = if i == 0 {
            Transform::identity()
        } else {
            Transform::from_parts(Vector3D::new(link_length, 0.0, 0.0), dynamics_spatial::rotation::Rot3::identity())
        };
        parent = model
            .create_child(
                parent,
                mass_properties.clone(),
                joint_frame,
                JointWrapper::torsion(JointModelTorsion::new(axis)),
                false,
                format!("link{i}"),
            )
            .unwrap();
    }
    model
}
