//! Field geometry and autonomous motion primitives.
//!
//! - **Poses**: field points and robot poses in a red-alliance frame, and the
//!   half-turn mirror that maps them onto the blue side.
//! - **Primitives**: the [`Motion`](primitives::Motion) facade that drives,
//!   turns, spins the roller wheel, and launches toward the alliance goal.
//!
//! Odometry and closed-loop control live in the chassis stack behind
//! [`Chassis`](crate::drivetrain::Chassis); this module only sequences calls
//! into it.

/// Points, poses, and alliance mirroring.
pub mod pose;

/// Blocking motion and actuation facade.
pub mod primitives;
