//! Seams to the hardware the robot layers drive.
//!
//! The selector, the autonomous routines, and driver control never talk to
//! devices directly. They go through the traits here and in
//! [`drivetrain`](crate::drivetrain):
//!
//! - [`OperatorInput`](controller::OperatorInput): the handheld controller and
//!   its text screen.
//! - [`Actuator`]: a single motor driven by velocity or voltage (the spinner).
//! - [`Platform`]: the cooperative scheduler's clock and competition status.
//!
//! Two backends implement them: [`mock`], which records every call for
//! host-side tests and simulation, and `v5`, which wraps vexide devices and is
//! built with the `vexide` feature.

/// Controller snapshots and the operator input trait.
pub mod controller;

/// Recording backend for tests and host-side simulation.
#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// vexide-backed implementations for the V5 brain.
#[cfg(feature = "vexide")]
pub mod v5;

use std::time::Duration;

use crate::error::Result;

/// A motor commanded by velocity or voltage.
pub trait Actuator {
    /// Spins at `rpm`; zero stops the motor.
    fn move_velocity(&mut self, rpm: f64) -> Result<()>;

    /// Applies `volts`; zero stops the motor.
    fn move_voltage(&mut self, volts: f64) -> Result<()>;
}

/// The runtime the robot tasks execute on.
///
/// Sleeping yields to the scheduler; it is the only way any loop in this crate
/// waits.
#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Suspends the calling task for `duration`.
    async fn sleep(&self, duration: Duration);

    /// Time since the user program started.
    fn uptime(&self) -> Duration;

    /// Whether a field controller or competition switch is plugged in.
    fn competition_connected(&self) -> bool;
}
