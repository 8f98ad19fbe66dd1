use glam::{Mat4, Vec3};

use crate::math::{Axis, Transform};

/// Free-fly camera.
///
/// The camera's own convention is +z forward, +x right, +y up. [`Camera::apply`]
/// converts to the renderer's right-handed -z forward view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    rotation: Transform,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Transform::IDENTITY,
        }
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Orientation. Its translation column is unused; see [`Camera::position`].
    pub fn rotation(&self) -> &Transform {
        &self.rotation
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation.z_axis()
    }

    pub fn right(&self) -> Vec3 {
        self.rotation.x_axis()
    }

    pub fn up(&self) -> Vec3 {
        self.rotation.y_axis()
    }

    /// Translate along world axes
    pub fn move_global(&mut self, rel: Vec3) {
        self.position += rel;
    }

    /// Translate along the camera's own axes
    pub fn move_local(&mut self, rel: Vec3) {
        self.position += self.rotation.transform_vector(rel);
    }

    /// Rotate around `axis` given in the camera's local frame.
    ///
    /// The axis is normalised first. A zero-length or non-finite axis, or a
    /// non-finite angle, leaves the camera untouched.
    pub fn rotate_local(&mut self, angle: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        if !angle.is_finite() {
            return;
        }

        self.rotation *= Transform::from_axis_angle(axis, angle);
        self.rotation = self.rotation.orthonormalized();
    }

    /// Rotate around a world-space `axis`, e.g. yaw around world up at any pitch
    pub fn rotate_global(&mut self, angle: f32, axis: Vec3) {
        let local_axis = self.rotation.transpose().transform_vector(axis);
        self.rotate_local(angle, local_axis);
    }

    /// View transform for a right-handed, -z forward renderer
    pub fn apply(&self) -> Transform {
        let mut view = self.rotation;

        // Flip handedness (+z forward -> -z forward), then invert the rotation
        view.set_axis(Axis::Z, -view.z_axis());
        let mut view = view.transpose();

        let translation = view.transform_vector(-self.position);
        view.set_translation(translation);
        view
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.apply().into()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
