#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod coord;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;
#[cfg(feature = "std")]
pub mod cli;

pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::*;
pub use ship::*;
