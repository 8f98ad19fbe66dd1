use glam::Vec3;

use crate::camera::Camera;
use crate::input::{Button, Controller};
use crate::lorenz::Coefficient;

pub const DEFAULT_MOVE_AMOUNT: f32 = 0.015;
pub const DEFAULT_SENSITIVITY: f32 = 1.0 / 60.0;

/// Step applied to `r` per Q/E press
pub const R_STEP: f64 = 1.0;

/// Operator state owned by the driving loop: move speed and mouse-look mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightControls {
    move_amount: f32,
    sensitivity: f32,
    mouse_looking: bool,
}

impl FlightControls {
    pub fn new(move_amount: f32, sensitivity: f32) -> Self {
        Self {
            move_amount,
            sensitivity,
            mouse_looking: false,
        }
    }

    pub fn move_amount(&self) -> f32 {
        self.move_amount
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn faster(&mut self) {
        self.move_amount *= 2.0;
    }

    pub fn slower(&mut self) {
        self.move_amount /= 2.0;
    }

    pub fn is_mouse_looking(&self) -> bool {
        self.mouse_looking
    }

    pub fn set_mouse_looking(&mut self, looking: bool) {
        self.mouse_looking = looking;
    }

    /// Local-frame translation for the held movement keys, +z forward
    pub fn translation<C: Controller>(&self, controller: &C) -> Vec3 {
        let mut rel = Vec3::ZERO;
        if controller.is_down(Button::KeyW) {
            rel += Vec3::Z;
        }
        if controller.is_down(Button::KeyS) {
            rel -= Vec3::Z;
        }
        if controller.is_down(Button::KeyA) {
            rel -= Vec3::X;
        }
        if controller.is_down(Button::KeyD) {
            rel += Vec3::X;
        }
        rel * self.move_amount
    }

    /// Yaw around world up, pitch around the camera's own right axis
    pub fn look(&self, camera: &mut Camera, delta: (f32, f32)) {
        if !self.mouse_looking {
            return;
        }
        let (dx, dy) = delta;
        if dx != 0.0 {
            camera.rotate_global(dx * self.sensitivity, Vec3::Y);
        }
        if dy != 0.0 {
            camera.rotate_local(dy * self.sensitivity, Vec3::X);
        }
    }

    /// Apply one frame of input to the camera
    pub fn update<C: Controller>(&mut self, camera: &mut Camera, controller: &C) {
        if controller.was_pressed(Button::Digit2) {
            self.faster();
            log::debug!("Move amount: {}", self.move_amount);
        }
        if controller.was_pressed(Button::Digit1) {
            self.slower();
            log::debug!("Move amount: {}", self.move_amount);
        }

        let rel = self.translation(controller);
        if rel != Vec3::ZERO {
            camera.move_local(rel);
        }

        self.look(camera, controller.mouse_delta());
    }

    /// Coefficient change requested this frame, if any
    pub fn coefficient_change<C: Controller>(controller: &C) -> Option<(Coefficient, f64)> {
        let mut delta = 0.0;
        if controller.was_pressed(Button::KeyQ) {
            delta -= R_STEP;
        }
        if controller.was_pressed(Button::KeyE) {
            delta += R_STEP;
        }
        (delta != 0.0).then_some((Coefficient::R, delta))
    }
}

impl Default for FlightControls {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_AMOUNT, DEFAULT_SENSITIVITY)
    }
}
