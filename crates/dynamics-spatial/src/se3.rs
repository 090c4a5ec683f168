//! The special Euclidean group SE(3): rigid transforms composed of a
//! rotation and a translation, plus the 6×6 matrices they induce on spatial
//! motion and force vectors.

use std::fmt::Display;

use crate::{rotation::Rot3, vector3d::Vector3D};
use nalgebra::{IsometryMatrix3, Matrix3, Matrix6, Translation3};

/// A rigid transform, combining a rotation $R \in \text{SO}(3)$ and a
/// translation $t \in \mathbb{R}^3$.
#[derive(Clone, Debug, Copy, PartialEq, Default)]
pub struct Transform(pub(crate) IsometryMatrix3<f64>);

impl Transform {
    /// Builds a transform from a rotation given as axis-angle, and a translation.
    #[must_use]
    pub fn new(translation: Vector3D, axis_angle: Vector3D) -> Self {
        let rotation = Rot3::from_axis_angle(&axis_angle, axis_angle.norm());
        Transform::from_parts(translation, rotation)
    }

    /// Builds a transform from a rotation and a translation.
    #[must_use]
    pub fn from_parts(translation: Vector3D, rotation: Rot3) -> Self {
        Transform(IsometryMatrix3::from_parts(
            Translation3::from(translation.0),
            rotation.0,
        ))
    }

    /// The identity transform, with $R = I_3$ and $t = 0_3$.
    #[must_use]
    pub fn identity() -> Self {
        Transform(IsometryMatrix3::identity())
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Transform(self.0.inverse())
    }

    #[must_use]
    pub fn translation(&self) -> Vector3D {
        Vector3D(self.0.translation.vector)
    }

    #[must_use]
    pub fn rotation(&self) -> Rot3 {
        Rot3(self.0.rotation)
    }

    /// The shift/action matrix this transform induces on a spatial motion
    /// vector stored as `[angular; linear]`:
    /// $$\begin{bmatrix}R^\top & 0 \\\\ (\lfloor t \rfloor_\times R)^\top & R^\top\end{bmatrix}$$
    pub fn action_matrix(&self) -> Matrix6<f64> {
        let r = self.rotation();
        let r = r.0.matrix();
        let t = self.translation().0;
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r.transpose());
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&r.transpose());

        let skew_t = Matrix3::new(0.0, -t[2], t[1], t[2], 0.0, -t[0], -t[1], t[0], 0.0);
        m.fixed_view_mut::<3, 3>(0, 3)
            .copy_from(&(skew_t * r).transpose());
        m
    }

    /// The dual (force) action matrix, the inverse-transpose of [`Self::action_matrix`]:
    /// $$\begin{bmatrix}R^\top & \lfloor t \rfloor_\times R \\\\ 0 & R^\top\end{bmatrix}$$
    pub fn dual_matrix(&self) -> Matrix6<f64> {
        let r = self.rotation();
        let r = r.0.matrix();
        let t = self.translation().0;
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r.transpose());
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&r.transpose());

        let skew_t = Matrix3::new(0.0, -t[2], t[1], t[2], 0.0, -t[0], -t[1], t[0], 0.0);
        m.fixed_view_mut::<3, 3>(3, 0)
            .copy_from(&(skew_t * r).transpose());
        m
    }

    /// The inverse of [`Self::action_matrix`], mapping a motion vector expressed
    /// in the parent frame to one expressed in this transform's frame.
    pub fn inv_matrix(&self) -> Matrix6<f64> {
        let r = self.rotation().0;
        let r_inv = r.matrix();
        let t = self.translation().0;

        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(r_inv);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(r_inv);

        let skew_t = Matrix3::new(0.0, -t[2], t[1], t[2], 0.0, -t[0], -t[1], t[0], 0.0);
        m.fixed_view_mut::<3, 3>(0, 3)
            .copy_from(&(-skew_t.transpose() * r_inv));
        m
    }
}

impl std::ops::Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Self) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl std::ops::Mul<&Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl std::ops::Mul<Transform> for &Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl std::ops::Mul<&Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = self.0.rotation.matrix();

        writeln!(f, "Transform: R=┌                            ┐  t=┌          ┐")?;
        for i in 0..3 {
            writeln!(
                f,
                "              │ {:>+8.5} {:>+8.5} {:>+8.5} │    │ {:>+8.5} │",
                r[(i, 0)],
                r[(i, 1)],
                r[(i, 2)],
                self.0.translation.vector[i]
            )?;
        }
        writeln!(f, "              └                            ┘    └          ┘")?;
        Ok(())
    }
}

/// Implemented by spatial quantities (motion, force) that a [`Transform`] can act on.
pub trait ActSE3: Sized {
    /// Applies the transform.
    fn act(&self, transform: &Transform) -> Self;

    /// Applies the inverse transform.
    fn act_inv(&self, transform: &Transform) -> Self;
}

impl Transform {
    pub fn act<T: ActSE3>(&self, obj: &T) -> T {
        obj.act(self)
    }

    pub fn act_inv<T: ActSE3>(&self, obj: &T) -> T {
        obj.act_inv(self)
    }
}
