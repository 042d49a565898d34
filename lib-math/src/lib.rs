#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod vector;
pub use vector::*;

#[cfg(test)]
mod tests;

pub const G_TO_MS2: f32 = 9.80665;

pub const RAD_TO_DEG: f32 = 57.29578;
