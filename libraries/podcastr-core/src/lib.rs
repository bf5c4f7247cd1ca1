//! Podcastr Core
//!
//! Platform-agnostic types and helpers shared by every Podcastr crate.
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `EpisodeId`
//! - **Formatting**: clock-style durations and short publication dates
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{time, Episode};
//! use std::time::Duration;
//!
//! let episode = Episode::new(
//!     "a-importancia-da-contribuicao-em-open-source",
//!     "A importância da contribuição em Open Source",
//!     "https://storage.example.com/opensource.m4a",
//!     Duration::from_secs(3981),
//! )
//! .with_members("Diego e Richard");
//!
//! assert_eq!(time::duration_to_time_string(episode.duration), "01:06:21");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod time;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Episode, EpisodeId};
