use std::collections::HashSet;

use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Digit1,
    Digit2,
    MouseRight,
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Check if button went down since the last `end_frame`, key repeats included
    fn was_pressed(&self, button: Button) -> bool;

    /// Mouse movement accumulated since the last `end_frame`
    fn mouse_delta(&self) -> (f32, f32);
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held buttons
    held: HashSet<Button>,
    /// Press events this frame, in arrival order
    pressed: Vec<Button>,
    mouse_delta: (f32, f32),
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_state(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_state(button, *state);
                }
            }
            WindowEvent::Focused(false) => self.held.clear(),
            _ => {}
        }
    }

    /// Raw mouse motion; keeps working while the cursor is grabbed
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
        self.pressed.push(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn add_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Drop per-frame state (press edges, mouse delta). Held buttons persist.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.mouse_delta = (0.0, 0.0);
    }

    fn set_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => self.press(button),
            ElementState::Released => self.release(button),
        }
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(Button::Digit1),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(Button::Digit2),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}
