//! Structures to represent the mass properties of a rigid body.

use dynamics_spatial::{
    inertia::SpatialInertia, spatial_vec::SpatialForce, symmetric3::Symmetric3,
    vector3d::Vector3D,
};

/// The mass properties of a rigid body: mass, center of mass, and rotational
/// inertia tensor taken about the body's reference frame origin (not the
/// center of mass).
#[derive(Clone, Debug, Default)]
pub struct MassProperties {
    /// The mass of the body.
    pub mass: f64,
    /// The center of mass, expressed in the body's reference frame.
    pub com: Vector3D,
    /// Rotational inertia matrix about the reference frame origin.
    pub inertia: Symmetric3,
}

impl MassProperties {
    /// Creates mass properties directly from an inertia already taken about
    /// the reference frame origin.
    pub fn new(mass: f64, com: Vector3D, inertia_about_origin: Symmetric3) -> Self {
        Self {
            mass,
            com,
            inertia: inertia_about_origin,
        }
    }

    /// Creates mass properties from an inertia tensor given about the center
    /// of mass, applying the parallel axis theorem to shift it to the origin:
    /// `I_o = I_c + m(|c|²·1 - c·cᵀ)`.
    pub fn from_com_relative(mass: f64, com: Vector3D, inertia_about_com: Symmetric3) -> Self {
        let c = com.as_slice();
        let shift = Symmetric3::new(
            mass * (c[1] * c[1] + c[2] * c[2]),
            mass * (c[0] * c[0] + c[2] * c[2]),
            mass * (c[0] * c[0] + c[1] * c[1]),
            -mass * c[0] * c[1],
            -mass * c[0] * c[2],
            -mass * c[1] * c[2],
        );
        Self::new(mass, com, inertia_about_com + shift)
    }

    /// Zero mass, zero center of mass, zero inertia.
    pub fn zeros() -> Self {
        Self {
            mass: 0.0,
            com: Vector3D::zeros(),
            inertia: Symmetric3::zeros(),
        }
    }

    /// A uniform solid ellipsoid of the given mass and semi-axis lengths,
    /// centered at the reference frame origin.
    pub fn from_ellipsoid(mass: f64, x: f64, y: f64, z: f64) -> Result<Self, InertiaError> {
        if mass <= 0.0 {
            return Err(InertiaError::InvalidParameter("mass".to_string()));
        }
        if x <= 0.0 {
            return Err(InertiaError::InvalidParameter("x".to_string()));
        }
        if y <= 0.0 {
            return Err(InertiaError::InvalidParameter("y".to_string()));
        }
        if z <= 0.0 {
            return Err(InertiaError::InvalidParameter("z".to_string()));
        }

        let a = mass * (y.powi(2) + z.powi(2)) / 5.0;
        let b = mass * (x.powi(2) + z.powi(2)) / 5.0;
        let c = mass * (x.powi(2) + y.powi(2)) / 5.0;
        let inertia_matrix = Symmetric3::new(a, b, c, 0.0, 0.0, 0.0);
        Ok(Self::new(mass, Vector3D::zeros(), inertia_matrix))
    }

    /// A uniform solid sphere of the given mass and radius, centered at the
    /// reference frame origin.
    pub fn from_sphere(mass: f64, radius: f64) -> Result<Self, InertiaError> {
        MassProperties::from_ellipsoid(mass, radius, radius, radius)
    }

    /// Converts to the 6×6 spatial inertia operator used by the
    /// articulated-body algorithm.
    pub fn to_spatial_inertia(&self) -> SpatialInertia {
        SpatialInertia::from_mass_com_inertia(self.mass, self.com, self.inertia)
    }

    /// Applies this body's spatial inertia to a spatial velocity or
    /// acceleration, yielding the corresponding momentum or net force.
    pub fn apply(&self, v: &dynamics_spatial::spatial_vec::SpatialVec) -> SpatialForce {
        &self.to_spatial_inertia() * v
    }
}

/// Errors constructing a [`MassProperties`] from a geometric primitive.
pub enum InertiaError {
    InvalidParameter(String),
}

impl std::fmt::Display for InertiaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InertiaError::InvalidParameter(param) => {
                write!(f, "Invalid parameter: '{}' must be positive.", param)
            }
        }
    }
}

impl std::fmt::Debug for InertiaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InertiaError: {}", self)
    }
}

impl std::error::Error for InertiaError {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_rejects_nonpositive_radius() {
        assert!(MassProperties::from_sphere(1.0, 0.0).is_err());
    }

    #[test]
    fn test_sphere_inertia_is_isotropic() {
        let props = MassProperties::from_sphere(2.0, 0.5).unwrap();
        let m = props.inertia.matrix();
        assert_relative_eq!(m[(0, 0)], m[(1, 1)]);
        assert_relative_eq!(m[(1, 1)], m[(2, 2)]);
    }

    #[test]
    fn test_parallel_axis_increases_inertia() {
        let at_origin = MassProperties::from_com_relative(
            1.0,
            Vector3D::zeros(),
            Symmetric3::from_diagonal(&[0.1, 0.1, 0.1]),
        );
        let offset = MassProperties::from_com_relative(
            1.0,
            Vector3D::new(1.0, 0.0, 0.0),
            Symmetric3::from_diagonal(&[0.1, 0.1, 0.1]),
        );
        assert!(offset.inertia.matrix()[(1, 1)] > at_origin.inertia.matrix()[(1, 1)]);
    }
}
