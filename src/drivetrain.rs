//! Differential drivetrain seams.
//!
//! The robot base is a differential ("tank") drive. Two traits describe what
//! the rest of the crate needs from it:
//!
//! - [`ArcadeDrive`]: open-loop driving from a forward and a turn command,
//!   used during driver control.
//! - [`Chassis`]: an odometry-backed controller that also knows where the robot
//!   is and can drive or turn toward a field point, used by autonomous.
//!
//! Both are implemented outside of this crate for real matches (odometry and
//! motion control are provided by the chassis stack) and by
//! [`mock::MockChassis`](crate::peripherals::mock::MockChassis) for tests.
//!
//! # Arcade mixing
//!
//! - left = (forward + turn) * max voltage
//! - right = (forward - turn) * max voltage
//!
//! Each side is clamped to the max voltage.

use crate::motion::pose::{Point, Pose};

/// Mixes arcade commands in `[-1, 1]` into left and right side voltages.
///
/// # Example
///
/// ```
/// use spinup::drivetrain::arcade_voltages;
///
/// assert_eq!(arcade_voltages(1.0, 0.0, 12.0), (12.0, 12.0));
/// assert_eq!(arcade_voltages(0.0, 0.5, 12.0), (6.0, -6.0));
/// assert_eq!(arcade_voltages(1.0, 1.0, 12.0), (12.0, 0.0));
/// ```
pub fn arcade_voltages(forward: f64, turn: f64, max_voltage: f64) -> (f64, f64) {
    let left = ((forward + turn) * max_voltage).clamp(-max_voltage, max_voltage);
    let right = ((forward - turn) * max_voltage).clamp(-max_voltage, max_voltage);
    (left, right)
}

/// Open-loop arcade driving.
pub trait ArcadeDrive {
    /// Drives with `forward` and `turn` in `[-1, 1]`.
    fn arcade(&mut self, forward: f64, turn: f64);
}

/// A drivetrain with odometry and point-to-point motion.
///
/// The async operations complete when the underlying controller reports it has
/// settled. No timeout is applied here: a controller that never settles keeps
/// the caller suspended.
#[allow(async_fn_in_trait)]
pub trait Chassis: ArcadeDrive {
    /// Overwrites the odometry's believed pose.
    fn set_state(&mut self, pose: Pose);

    /// The odometry's current pose.
    fn state(&self) -> Pose;

    /// Drives to `target`. When `reverse` is true the robot may back into it.
    async fn drive_to_point(&mut self, target: Point, reverse: bool);

    /// Turns in place to face `target`.
    async fn turn_to_point(&mut self, target: Point);
}
