#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub use math::Vector;

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

pub mod clock;
pub use clock::*;

pub mod source;
pub use source::*;

pub mod calibration;
pub use calibration::*;

pub mod features;
pub use features::*;

pub mod latch;
pub use latch::*;

pub mod detector;
pub use detector::*;

pub mod telemetry;
pub use telemetry::*;

pub mod monitor;
pub use monitor::*;

pub mod bridge;
pub use bridge::*;

pub mod status;
pub use status::*;

#[cfg(test)]
mod tests;
