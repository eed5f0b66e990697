//! The robot and its competition lifecycle hooks.
//!
//! The field controller (or competition switch) decides which phase runs; it
//! calls one hook at a time on a single task:
//!
//! - [`Robot::initialize`] once at program start;
//! - [`Robot::competition_initialize`] while connected and disabled before a
//!   match, to pick the [`MatchConfiguration`];
//! - [`Robot::disabled`] whenever the robot is disabled;
//! - [`Robot::autonomous`] for the autonomous period;
//! - [`Robot::opcontrol`] for driver control.
//!
//! The selected configuration is owned by the [`Robot`] and handed by value to
//! each autonomous run. Selection clears it first, so a run never sees a
//! half-made choice.
//!
//! # Example
//!
//! With the `mock` feature:
//!
//! ```ignore
//! use embassy_futures::block_on;
//! use spinup::{
//!     competition::Robot,
//!     config::RobotConfig,
//!     peripherals::{controller::Button, mock::*},
//!     teams::{Alliance, StartPosition},
//! };
//!
//! let journal = Journal::default();
//! let controller = MockController::new(journal.clone())
//!     .tap(Button::A)
//!     .tap(Button::Y);
//! let mut robot = Robot::new(
//!     MockChassis::new(journal.clone()),
//!     controller,
//!     MockMotor::new(journal.clone()),
//!     MockPlatform::connected(journal.clone()),
//!     RobotConfig::default(),
//! );
//!
//! robot.initialize();
//! block_on(robot.competition_initialize());
//! let report = block_on(robot.autonomous()).expect("a configuration was selected");
//! assert_eq!(report.config.alliance, Alliance::Red);
//! assert_eq!(report.config.position, StartPosition::Other);
//! ```

use log::{info, warn};

use crate::{
    auton::{AutonomousSequencer, RunReport, selector::ConfigurationSelector},
    config::RobotConfig,
    drivetrain::Chassis,
    motion::primitives::Motion,
    opcontrol::TeleopLoop,
    peripherals::{Actuator, Platform, controller::OperatorInput},
    teams::MatchConfiguration,
};

/// Screen line written when an autonomous routine starts.
pub const AUTONOMOUS_BANNER: &str = "Starting Autonomous";

/// Every device the robot drives, plus the match session.
pub struct Robot<C, I, S, P> {
    /// The odometry chassis.
    pub chassis:    C,
    /// The primary controller.
    pub controller: I,
    /// The roller spinner motor.
    pub spinner:    S,
    /// The scheduler's clock and competition status.
    pub platform:   P,
    /// Timing and power settings.
    pub settings:   RobotConfig,
    session:        Option<MatchConfiguration>,
}

impl<C, I, S, P> Robot<C, I, S, P>
where
    C: Chassis,
    I: OperatorInput,
    S: Actuator,
    P: Platform,
{
    pub fn new(chassis: C, controller: I, spinner: S, platform: P, settings: RobotConfig) -> Self {
        Self {
            chassis,
            controller,
            spinner,
            platform,
            settings,
            session: None,
        }
    }

    /// The configuration chosen for the current match, if selection finished.
    pub fn session(&self) -> Option<MatchConfiguration> { self.session }

    /// Runs at program start.
    pub fn initialize(&mut self) {
        info!("Robot initialized: {:?}", self.settings);
    }

    /// Runs before the match while connected to the field: picks the
    /// configuration, then clears the controller screen.
    pub async fn competition_initialize(&mut self) {
        self.select_configuration().await;
        self.clear_screen();
    }

    /// Runs while the robot is disabled.
    pub fn disabled(&mut self) {}

    /// Runs the routine for the selected configuration.
    ///
    /// Returns `None` without moving when nothing was selected.
    pub async fn autonomous(&mut self) -> Option<RunReport> {
        match self.session {
            Some(config) => Some(self.run_autonomous(config).await),
            None => {
                warn!("Autonomous skipped: no match configuration selected");
                None
            }
        }
    }

    /// Runs driver control. Never returns.
    pub async fn opcontrol(&mut self) { TeleopLoop::new(self).run().await; }

    /// Clears the session and waits on the controller for a new one.
    pub async fn select_configuration(&mut self) -> MatchConfiguration {
        self.session = None;
        let config =
            ConfigurationSelector::new(&mut self.controller, &self.platform, self.settings.selector_poll)
                .select()
                .await;
        self.session = Some(config);
        config
    }

    /// Announces the run on the controller screen and runs the routine.
    pub async fn run_autonomous(&mut self, config: MatchConfiguration) -> RunReport {
        self.clear_screen();
        self.controller
            .set_text(1, 0, AUTONOMOUS_BANNER)
            .unwrap_or_else(|e| {
                warn!("Controller Screen Error: {}", e);
            });

        let motion = Motion::new(&mut self.chassis, &mut self.spinner, &self.platform);
        AutonomousSequencer::new(motion, &self.settings)
            .run(config)
            .await
    }

    fn clear_screen(&mut self) {
        self.controller.clear_screen().unwrap_or_else(|e| {
            warn!("Controller Screen Error: {}", e);
        });
    }
}

#[cfg(feature = "vexide")]
impl<C, I, S, P> vexide::competition::Compete for Robot<C, I, S, P>
where
    C: Chassis,
    I: OperatorInput,
    S: Actuator,
    P: Platform,
{
    async fn connected(&mut self) { self.competition_initialize().await; }

    async fn disabled(&mut self) { Robot::disabled(self); }

    async fn autonomous(&mut self) { Robot::autonomous(self).await; }

    async fn driver(&mut self) { self.opcontrol().await; }
}
