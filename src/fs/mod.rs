//! Filesystem utilities.
//!
//! The [`logger`] records the match to the console and to a file on the SD
//! card, so selection and autonomous decisions can be read back after a
//! match.
//!
//! # Example
//!
//! ```ignore
//! use log::{info, LevelFilter};
//! use spinup::fs::logger;
//!
//! logger::init(LevelFilter::Info).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// Console and `log.txt` logging.
pub mod logger;
