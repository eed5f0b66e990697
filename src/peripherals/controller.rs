//! Operator controller input and its text screen.
//!
//! The controller is read as a [`ControllerState`] snapshot: button levels,
//! rising edges since the previous snapshot, and left stick axes. Every backend
//! computes edges the same way, so a button held across two samples reports
//! [`ButtonState::is_now_pressed`] exactly once.
//!
//! # Example
//!
//! ```
//! use spinup::peripherals::controller::{Button, ButtonState, ControllerState};
//!
//! let mut state = ControllerState::default();
//! state.button_a = ButtonState::new(true, true);
//! assert!(state.button(Button::A).is_now_pressed());
//! assert!(!state.button(Button::Y).is_pressed());
//! ```

use crate::error::Result;

/// The controller buttons this robot reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    X,
    Y,
    L1,
    L2,
}

impl Button {
    /// Every button, in snapshot order.
    pub const ALL: [Button; 5] = [Button::A, Button::X, Button::Y, Button::L1, Button::L2];
}

/// Level and edge state of a single button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pressed:     bool,
    now_pressed: bool,
}

impl ButtonState {
    /// Creates a button state from its level and its rising edge.
    pub const fn new(pressed: bool, now_pressed: bool) -> Self {
        Self {
            pressed,
            now_pressed: pressed && now_pressed,
        }
    }

    /// Builds the state from the previous and current levels.
    pub const fn from_levels(previous: bool, current: bool) -> Self {
        Self::new(current, !previous)
    }

    /// Whether the button is held.
    pub const fn is_pressed(&self) -> bool { self.pressed }

    /// Whether the button went down since the previous sample.
    pub const fn is_now_pressed(&self) -> bool { self.now_pressed }
}

/// One sample of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    pub button_a:  ButtonState,
    pub button_x:  ButtonState,
    pub button_y:  ButtonState,
    pub button_l1: ButtonState,
    pub button_l2: ButtonState,
    /// Left stick horizontal axis, `[-1, 1]`.
    pub left_x:    f64,
    /// Left stick vertical axis, `[-1, 1]`.
    pub left_y:    f64,
}

impl ControllerState {
    /// Looks up one button of the snapshot.
    pub fn button(&self, button: Button) -> ButtonState {
        match button {
            Button::A => self.button_a,
            Button::X => self.button_x,
            Button::Y => self.button_y,
            Button::L1 => self.button_l1,
            Button::L2 => self.button_l2,
        }
    }

    /// Mutable access to one button of the snapshot.
    pub fn button_mut(&mut self, button: Button) -> &mut ButtonState {
        match button {
            Button::A => &mut self.button_a,
            Button::X => &mut self.button_x,
            Button::Y => &mut self.button_y,
            Button::L1 => &mut self.button_l1,
            Button::L2 => &mut self.button_l2,
        }
    }
}

/// A handheld controller with a small text screen.
pub trait OperatorInput {
    /// Samples the controller. Edges are relative to the previous call.
    fn state(&mut self) -> ControllerState;

    /// Writes `text` at the given screen row and column.
    fn set_text(&mut self, row: u8, col: u8, text: &str) -> Result<()>;

    /// Clears the screen.
    fn clear_screen(&mut self) -> Result<()>;
}
