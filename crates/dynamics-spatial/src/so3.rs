//! The antisymmetric (skew-symmetric) cross-product matrix of a 3-vector.

use crate::vector3d::Vector3D;
use nalgebra::Matrix3;

/// `Skew(v)` is the unique antisymmetric 3×3 matrix such that
/// `Skew(v) * w == v.cross(w)` for every vector `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skew(pub(crate) Matrix3<f64>);

impl Skew {
    /// Builds the cross-product matrix of `v`.
    #[must_use]
    pub fn from_vector3d(v: &Vector3D) -> Self {
        let v = v.as_slice();
        Self(Matrix3::new(
            0.0, -v[2], v[1], v[2], 0.0, -v[0], -v[1], v[0], 0.0,
        ))
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_skew_matches_cross() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let w = Vector3D::new(4.0, -1.0, 2.0);
        let skew = Skew::from_vector3d(&v);
        let product = skew.0 * nalgebra::Vector3::new(w.x_val(), w.y_val(), w.z_val());
        let expected = v.cross(&w);
        assert_relative_eq!(product.x, expected.x_val());
        assert_relative_eq!(product.y, expected.y_val());
        assert_relative_eq!(product.z, expected.z_val());
    }

    #[test]
    fn test_skew_antisymmetric() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let skew = Skew::from_vector3d(&v);
        assert_relative_eq!(skew.0, -skew.0.transpose());
    }
}
