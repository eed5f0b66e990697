//! Tunable constants for one robot build.
//!
//! [`RobotConfig`] gathers every timing and power constant used by the
//! selector, the autonomous routines, and driver control. The [`Default`]
//! values are the ones the competition robot runs with.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use spinup::config::RobotConfig;
//!
//! let config = RobotConfig {
//!     spin_duration: Duration::from_millis(1500),
//!     ..RobotConfig::default()
//! };
//! assert_eq!(config.spinner_velocity, 100.0);
//! ```

use std::time::Duration;

/// Delay between two controller samples while waiting for an operator choice.
pub const SELECTOR_POLL: Duration = Duration::from_millis(10);

/// Delay between two driver control iterations.
pub const TELEOP_PERIOD: Duration = Duration::from_millis(4);

/// Maximum motor voltage on the V5 system, in volts.
pub const MAX_VOLTAGE: f64 = 12.0;

/// Timing and power settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotConfig {
    /// Sleep between selector polls.
    pub selector_poll:       Duration,
    /// Sleep at the end of every driver control iteration.
    pub teleop_period:       Duration,
    /// Spinner velocity (RPM) used to turn a roller during autonomous.
    pub spinner_velocity:    f64,
    /// How long the spinner runs against a roller during autonomous.
    pub spin_duration:       Duration,
    /// Voltage applied to the spinner while a spin button is held.
    pub spinner_max_voltage: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            selector_poll:       SELECTOR_POLL,
            teleop_period:       TELEOP_PERIOD,
            spinner_velocity:    100.0,
            spin_duration:       Duration::from_millis(2000),
            spinner_max_voltage: MAX_VOLTAGE,
        }
    }
}
