//! V5 brain backends built on vexide.
//!
//! These adapt vexide devices to the crate's peripheral traits. Device errors
//! are logged and replaced with neutral values: a disconnected controller reads
//! as nothing pressed, and a failed motor command is reported to the caller.
//!
//! # Example
//!
//! ```ignore
//! use spinup::peripherals::v5::{Differential, V5Controller, V5Motor, V5Platform};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let controller = V5Controller::new(peripherals.primary_controller);
//!     let spinner = V5Motor::new(Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward));
//!     let base = Differential::new(
//!         [
//!             Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!             Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!             Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
//!         ],
//!         [
//!             Motor::new(peripherals.port_6, Gearset::Green, Direction::Reverse),
//!             Motor::new(peripherals.port_7, Gearset::Green, Direction::Reverse),
//!             Motor::new(peripherals.port_8, Gearset::Green, Direction::Reverse),
//!         ],
//!     );
//!     // wrap `base` in the odometry chassis, then build a `Robot`
//! }
//! ```

use std::{cell::RefCell, rc::Rc, time::Duration};

use log::warn;
use vexide::{
    controller::ControllerState as VexControllerState,
    prelude::{Controller, Motor},
};

use super::{
    Actuator, Platform,
    controller::{ButtonState, ControllerState, OperatorInput},
};
use crate::{
    config::MAX_VOLTAGE,
    drivetrain::{ArcadeDrive, arcade_voltages},
    error::{Error, Result},
};

/// The primary controller.
pub struct V5Controller {
    controller: Controller,
}

impl V5Controller {
    pub fn new(controller: Controller) -> Self { Self { controller } }
}

fn button(state: vexide::controller::ButtonState) -> ButtonState {
    ButtonState::new(state.is_pressed(), state.is_now_pressed())
}

impl OperatorInput for V5Controller {
    fn state(&mut self) -> ControllerState {
        let state = self.controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            VexControllerState::default()
        });

        ControllerState {
            button_a:  button(state.button_a),
            button_x:  button(state.button_x),
            button_y:  button(state.button_y),
            button_l1: button(state.button_l1),
            button_l2: button(state.button_l2),
            left_x:    state.left_stick.x(),
            left_y:    state.left_stick.y(),
        }
    }

    fn set_text(&mut self, row: u8, col: u8, text: &str) -> Result<()> {
        // vexide screen lines and columns start at 1
        self.controller
            .screen
            .try_set_text(text, row + 1, col + 1)
            .map_err(Error::device)
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.controller
            .screen
            .try_clear_screen()
            .map_err(Error::device)
    }
}

/// A single smart motor.
pub struct V5Motor {
    motor: Motor,
}

impl V5Motor {
    pub fn new(motor: Motor) -> Self { Self { motor } }
}

impl Actuator for V5Motor {
    fn move_velocity(&mut self, rpm: f64) -> Result<()> {
        self.motor
            .set_velocity(rpm.round() as i32)
            .map_err(Error::device)
    }

    fn move_voltage(&mut self, volts: f64) -> Result<()> {
        self.motor.set_voltage(volts).map_err(Error::device)
    }
}

/// The vexide runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct V5Platform;

impl Platform for V5Platform {
    async fn sleep(&self, duration: Duration) { vexide::time::sleep(duration).await; }

    fn uptime(&self) -> Duration { vexide::time::user_uptime() }

    fn competition_connected(&self) -> bool { vexide::competition::is_connected() }
}

/// An open-loop differential base.
///
/// The motors are stored in reference-counted cells so the chassis stack that
/// runs odometry can share them.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    pub left:  Rc<RefCell<dyn AsMut<[Motor]>>>,
    /// The right motor group.
    pub right: Rc<RefCell<dyn AsMut<[Motor]>>>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  Rc::new(RefCell::new(left)),
            right: Rc::new(RefCell::new(right)),
        }
    }

    fn set_side(side: &Rc<RefCell<dyn AsMut<[Motor]>>>, volts: f64) {
        if let Ok(mut motors) = side.try_borrow_mut() {
            for motor in motors.as_mut() {
                motor.set_voltage(volts).unwrap_or_else(|e| {
                    warn!("Motor Set Voltage Error: {}", e);
                });
            }
        } else {
            warn!("Drivetrain motors are borrowed elsewhere");
        }
    }
}

impl ArcadeDrive for Differential {
    fn arcade(&mut self, forward: f64, turn: f64) {
        let (left, right) = arcade_voltages(forward, turn, MAX_VOLTAGE);
        Self::set_side(&self.left, left);
        Self::set_side(&self.right, right);
    }
}
