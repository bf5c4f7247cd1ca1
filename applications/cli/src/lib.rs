//! Podcastr terminal player
//!
//! Configuration, the simulated clock device and the command loop used by
//! the `podcastr` binary.

pub mod config;
pub mod device;
pub mod error;
pub mod repl;

pub use config::AppConfig;
pub use device::ClockDevice;
pub use error::{CliError, Result};
