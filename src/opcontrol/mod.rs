//! Driver control.
//!
//! Every iteration of the [`TeleopLoop`] samples the controller once and:
//!
//! - runs the spinner from L2 (forward) and L1 (backward) at full voltage;
//!   holding both cancels out to zero;
//! - on a fresh press of A, runs configuration selection and the selected
//!   autonomous routine to completion before continuing;
//! - drives the base in arcade mode from the left stick (Y forward, X turn);
//! - sleeps for the teleop period.
//!
//! # Example
//!
//! ```ignore
//! use spinup::opcontrol::TeleopLoop;
//!
//! TeleopLoop::new(&mut robot).run().await;
//! ```

use log::{info, warn};

use crate::{
    auton::RunReport,
    competition::Robot,
    drivetrain::Chassis,
    peripherals::{Actuator, Platform, controller::OperatorInput},
};

/// Screen hint shown when no competition controller is attached.
pub const START_HINT: &str = "A to start autonomous";

/// Spinner voltage for the two spin buttons.
///
/// # Example
///
/// ```
/// use spinup::opcontrol::spinner_command;
///
/// assert_eq!(spinner_command(true, false, 12.0), 12.0);
/// assert_eq!(spinner_command(false, true, 12.0), -12.0);
/// assert_eq!(spinner_command(true, true, 12.0), 0.0);
/// ```
pub fn spinner_command(forward: bool, backward: bool, max_voltage: f64) -> f64 {
    let forward = if forward { max_voltage } else { 0.0 };
    let backward = if backward { max_voltage } else { 0.0 };
    forward - backward
}

/// What one driver control iteration commanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Voltage sent to the spinner.
    pub spinner_voltage: f64,
    /// Arcade forward command.
    pub forward:         f64,
    /// Arcade turn command.
    pub turn:            f64,
    /// The autonomous run triggered from this iteration, if any.
    pub autonomous:      Option<RunReport>,
}

/// The driver control loop.
pub struct TeleopLoop<'r, C, I, S, P> {
    robot: &'r mut Robot<C, I, S, P>,
}

impl<'r, C, I, S, P> TeleopLoop<'r, C, I, S, P>
where
    C: Chassis,
    I: OperatorInput,
    S: Actuator,
    P: Platform,
{
    pub fn new(robot: &'r mut Robot<C, I, S, P>) -> Self { Self { robot } }

    /// Runs driver control forever.
    pub async fn run(&mut self) {
        info!("Driver control started");
        if !self.robot.platform.competition_connected() {
            self.robot
                .controller
                .set_text(0, 0, START_HINT)
                .unwrap_or_else(|e| {
                    warn!("Controller Screen Error: {}", e);
                });
        }
        loop {
            self.step().await;
        }
    }

    /// Runs one iteration.
    pub async fn step(&mut self) -> Tick {
        let state = self.robot.controller.state();
        let backward = state.button_l1.is_pressed();
        let forward = state.button_l2.is_pressed();

        let autonomous = if state.button_a.is_now_pressed() {
            info!("Autonomous requested from driver control");
            let config = self.robot.select_configuration().await;
            Some(self.robot.run_autonomous(config).await)
        } else {
            None
        };

        let spinner_voltage =
            spinner_command(forward, backward, self.robot.settings.spinner_max_voltage);
        self.robot
            .spinner
            .move_voltage(spinner_voltage)
            .unwrap_or_else(|e| {
                warn!("Spinner Voltage Error: {}", e);
            });

        self.robot.chassis.arcade(state.left_y, state.left_x);
        self.robot
            .platform
            .sleep(self.robot.settings.teleop_period)
            .await;

        Tick {
            spinner_voltage,
            forward: state.left_y,
            turn: state.left_x,
            autonomous,
        }
    }
}
