//! # Spinup
//!
//! Match-day control for a VEX V5 Spin Up robot, built on top of
//! [Vexide](https://vexide.dev). It covers:
//!
//! - **Configuration Selection**: alliance and starting position chosen on the
//!   controller before the match.
//! - **Alliance Mirroring**: one set of red-alliance routes, mirrored onto the
//!   blue side by a half turn about the field center.
//! - **Autonomous Routines**: gated stages of drives, roller spins, and goal
//!   launches over an odometry chassis.
//! - **Driver Control**: arcade drive, spinner buttons, and an on-demand
//!   autonomous trigger for practice.
//! - **Logging**: console and file logging of every match decision.
//!
//! Hardware is reached through traits, so everything above runs on the host
//! against the recording backend in `peripherals::mock` (`mock` feature) and
//! on the brain against vexide devices (`vexide` feature).
//!
//! ## Quick Start
//!
//! ```ignore
//! use spinup::{
//!     competition::Robot,
//!     config::RobotConfig,
//!     fs::logger,
//!     peripherals::v5::{Differential, V5Controller, V5Motor, V5Platform},
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     logger::init(log::LevelFilter::Info).ok();
//!
//!     let mut robot = Robot::new(
//!         my_odometry_chassis(peripherals),
//!         V5Controller::new(peripherals.primary_controller),
//!         V5Motor::new(Motor::new(peripherals.port_8, Gearset::Green, Direction::Forward)),
//!         V5Platform,
//!         RobotConfig::default(),
//!     );
//!     robot.initialize();
//!     robot.compete().await;
//! }
//! ```
//!
//! ## Modules
//!
//! - [`teams`]: alliances, starting positions, and match configurations.
//! - [`motion`]: poses, the alliance mirror, and motion primitives.
//! - [`auton`]: configuration selection and the autonomous sequencer.
//! - [`opcontrol`]: the driver control loop.
//! - [`competition`]: the robot and its lifecycle hooks.
//! - [`fs`]: logging.

/// Pre-match selection and autonomous routines.
///
/// Provides the [`ConfigurationSelector`](auton::selector::ConfigurationSelector)
/// that reads the alliance and starting position from the controller, and the
/// [`AutonomousSequencer`](auton::AutonomousSequencer) that runs the gated
/// route stages for a configuration.
pub mod auton;

/// The robot and its competition lifecycle hooks.
pub mod competition;

/// Timing and power settings.
pub mod config;

/// Arcade mixing and the odometry chassis seam.
///
/// - **Arcade**: one stick axis for forward, one for turning.
/// - **Chassis**: pose state plus blocking drive-to-point and turn-to-point
///   moves, implemented by the odometry stack.
pub mod drivetrain;

/// Crate error type.
pub mod error;

/// Filesystem utilities module.
///
/// Contains the logger that records match decisions to the console and to a
/// file on the V5 Brain's SD card.
pub mod fs;

/// Field geometry and motion primitives.
pub mod motion;

/// Driver control.
pub mod opcontrol;

/// Hardware seams and their backends.
pub mod peripherals;

/// Alliances, starting positions, and match configurations.
pub mod teams;
