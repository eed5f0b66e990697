//! Error types shared by the robot layers.
//!
//! Most device failures are not fatal during a match: callers log them with
//! [`log::warn`] and keep running. The one error that is never expected to go
//! away on its own is [`Error::Unimplemented`], which marks an actuation stage
//! the robot does not have yet.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by peripherals and actuation stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The named actuation stage has no implementation on this robot.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    /// A device (motor, controller, display) rejected a command.
    #[error("device error: {0}")]
    Device(String),
}

impl Error {
    /// Wraps any displayable device error.
    pub fn device(e: impl core::fmt::Display) -> Self { Self::Device(e.to_string()) }
}
