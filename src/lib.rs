#![cfg_attr(not(test), no_std)]
//! Register-level driver for the ST LIS2DH 3-axis accelerometer.
//!
//! ```ignore
//! use lis2dh::{default_configuration, Lis2dh, SampleWidth, SlaveAddr};
//!
//! let mut accel = Lis2dh::new_i2c(i2c, SlaveAddr::Sa0Low, SampleWidth::Packed16);
//! accel.configure(&default_configuration(), &mut delay)?;
//! let sample = accel.read_sample()?;
//! let gain = accel.gain();
//! ```

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::config::{default_configuration, Config, InterruptChannelConfig};
pub use crate::device::Lis2dh;
pub use crate::error::{Error, Result};
pub use crate::interface::i2c::SlaveAddr;
pub use crate::params::{InterruptPin, SampleWidth};
pub use crate::sample::Sample;
