use glam::{Mat4, Vec3, Vec4};
use std::ops::{Mul, MulAssign};

/// Column of the linear block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Homogeneous 4x4 transform: a 3x3 linear block plus a translation column.
///
/// Camera code keeps the linear block orthonormal, which is what makes
/// [`Transform::transpose`] usable as an inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(Mat4);

impl Transform {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Right-handed rotation of `angle` radians around a unit `axis`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self(Mat4::from_axis_angle(axis, angle))
    }

    pub fn as_mat4(&self) -> &Mat4 {
        &self.0
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    pub fn axis(&self, axis: Axis) -> Vec3 {
        match axis {
            Axis::X => self.0.x_axis.truncate(),
            Axis::Y => self.0.y_axis.truncate(),
            Axis::Z => self.0.z_axis.truncate(),
        }
    }

    /// Overwrite one column of the linear block, leaving its w component alone.
    pub fn set_axis(&mut self, axis: Axis, value: Vec3) {
        let column = match axis {
            Axis::X => &mut self.0.x_axis,
            Axis::Y => &mut self.0.y_axis,
            Axis::Z => &mut self.0.z_axis,
        };
        *column = value.extend(column.w);
    }

    pub fn x_axis(&self) -> Vec3 {
        self.axis(Axis::X)
    }

    pub fn y_axis(&self) -> Vec3 {
        self.axis(Axis::Y)
    }

    pub fn z_axis(&self) -> Vec3 {
        self.axis(Axis::Z)
    }

    pub fn translation(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.0.w_axis = Vec4::new(translation.x, translation.y, translation.z, 1.0);
    }

    /// Linear block only; directions are not translated.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.0.transform_vector3(v)
    }

    /// Linear block followed by the translation column.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_vector(p) + self.translation()
    }

    pub fn is_orthonormal(&self, epsilon: f32) -> bool {
        let (x, y, z) = (self.x_axis(), self.y_axis(), self.z_axis());
        (x.length() - 1.0).abs() < epsilon
            && (y.length() - 1.0).abs() < epsilon
            && (z.length() - 1.0).abs() < epsilon
            && x.dot(y).abs() < epsilon
            && y.dot(z).abs() < epsilon
            && z.dot(x).abs() < epsilon
    }

    /// Gram-Schmidt on the linear block. Handedness and translation are kept.
    pub fn orthonormalized(&self) -> Self {
        let x = self.x_axis().normalize_or_zero();
        let y = (self.y_axis() - x * x.dot(self.y_axis())).normalize_or_zero();
        if x == Vec3::ZERO || y == Vec3::ZERO {
            return *self;
        }

        // x cross y is right-handed; flip it if the source basis was not
        let z = x.cross(y);
        let z = if z.dot(self.z_axis()) < 0.0 { -z } else { z };

        let mut out = *self;
        out.set_axis(Axis::X, x);
        out.set_axis(Axis::Y, y);
        out.set_axis(Axis::Z, z);
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

impl MulAssign for Transform {
    fn mul_assign(&mut self, rhs: Transform) {
        self.0 *= rhs.0;
    }
}

impl From<Transform> for Mat4 {
    fn from(transform: Transform) -> Mat4 {
        transform.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_identity_axes() {
        let t = Transform::IDENTITY;
        assert_eq!(t.x_axis(), Vec3::X);
        assert_eq!(t.y_axis(), Vec3::Y);
        assert_eq!(t.z_axis(), Vec3::Z);
        assert_eq!(t.translation(), Vec3::ZERO);
    }

    #[test]
    fn test_rotation_right_hand_rule() {
        let t = Transform::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let v = t.transform_vector(Vec3::X);
        assert!(v.abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn test_vector_ignores_translation() {
        let mut t = Transform::IDENTITY;
        t.set_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_vector(Vec3::X), Vec3::X);
        assert_eq!(t.transform_point(Vec3::X), Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_point_rotates_then_translates() {
        let mut t = Transform::from_axis_angle(Vec3::Y, FRAC_PI_2);
        t.set_translation(Vec3::new(0.0, 0.0, 5.0));
        let p = t.transform_point(Vec3::Z);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 0.0, 5.0), EPS));
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let r = Transform::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), 0.7);
        let product = r * r.transpose();
        assert!(product.as_mat4().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn test_composition_order_matters() {
        let a = Transform::from_axis_angle(Vec3::X, FRAC_PI_2);
        let b = Transform::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert!(!(a * b).as_mat4().abs_diff_eq(*(b * a).as_mat4(), EPS));
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let a = Transform::from_axis_angle(Vec3::X, 0.3);
        let b = Transform::from_axis_angle(Vec3::Z, -1.1);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_set_axis_keeps_other_columns() {
        let mut t = Transform::IDENTITY;
        t.set_axis(Axis::Z, -t.z_axis());
        assert_eq!(t.z_axis(), -Vec3::Z);
        assert_eq!(t.x_axis(), Vec3::X);
        assert_eq!(t.as_mat4().z_axis.w, 0.0);
    }

    #[test]
    fn test_orthonormal_detection() {
        assert!(Transform::IDENTITY.is_orthonormal(EPS));

        let mut skewed = Transform::IDENTITY;
        skewed.set_axis(Axis::Y, Vec3::new(0.2, 1.0, 0.0));
        assert!(!skewed.is_orthonormal(EPS));
    }

    #[test]
    fn test_orthonormalized_repairs_drift() {
        let mut drifted = Transform::from_axis_angle(Vec3::Y, 0.4);
        drifted.set_axis(Axis::X, drifted.x_axis() * 1.01 + Vec3::new(0.0, 0.005, 0.0));
        let repaired = drifted.orthonormalized();
        assert!(repaired.is_orthonormal(EPS));
        assert!(repaired.z_axis().dot(drifted.z_axis()) > 0.99);
    }

    #[test]
    fn test_orthonormalized_keeps_left_handed_basis() {
        let mut flipped = Transform::IDENTITY;
        flipped.set_axis(Axis::Z, -Vec3::Z);
        let repaired = flipped.orthonormalized();
        assert_eq!(repaired.z_axis(), -Vec3::Z);
    }
}
