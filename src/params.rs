//! Strongly typed parameter enumerations for the LIS2DH driver.
//!
//! These enums map directly to datasheet field encodings and are used by the
//! [`ConfigBuilder`](crate::config::ConfigBuilder) and the high-level driver APIs. The
//! [`Config`](crate::config::Config) itself stores raw register bytes; these types are the
//! checked way to produce them.
//!
//! # Examples
//!
//! ```rust
//! use lis2dh::params::{FullScale, OutputDataRate};
//!
//! let odr = OutputDataRate::Hz10;
//! let scale = FullScale::G8;
//! assert_eq!(scale.gain(), 16);
//! let _ = odr;
//! ```

use modular_bitfield::prelude::Specifier;

use crate::registers::{
    INT_DURATION_OFFSET,
    INT_SRC_OFFSET,
    INT_THS_OFFSET,
    INT_GENERATOR_STRIDE,
    REG_INT1_CFG,
};

/// Output data rate selections encoded in `CTRL_REG1.ODR[3:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// Power-down mode.
    PowerDown = 0b0000,
    /// 1 Hz.
    Hz1 = 0b0001,
    /// 10 Hz.
    Hz10 = 0b0010,
    /// 25 Hz.
    Hz25 = 0b0011,
    /// 50 Hz.
    Hz50 = 0b0100,
    /// 100 Hz.
    Hz100 = 0b0101,
    /// 200 Hz.
    Hz200 = 0b0110,
    /// 400 Hz.
    Hz400 = 0b0111,
    /// 1.620 kHz, low-power mode only.
    LowPowerHz1620 = 0b1000,
    /// 1.344 kHz in normal mode, 5.376 kHz in low-power mode.
    Hz1344 = 0b1001,
}

impl OutputDataRate {
    /// Returns the ODR in hertz for normal/high-resolution mode (`0` when powered down).
    pub const fn hz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::LowPowerHz1620 => 1_620,
            Self::Hz1344 => 1_344,
        }
    }
}

/// Full-scale selections encoded in `CTRL_REG4.FS[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl FullScale {
    /// Milli-g represented by one LSB of the threshold registers and the 8-bit output.
    pub const fn sensitivity_mg(self) -> u16 {
        match self {
            Self::G2 => 16,
            Self::G4 => 32,
            Self::G8 => 62,
            Self::G16 => 186,
        }
    }

    /// Device units corresponding to 1 g, truncated to an integer.
    pub const fn gain(self) -> u16 {
        1_000 / self.sensitivity_mg()
    }

    /// Converts a milli-g magnitude into a raw threshold register value, saturating at `u8::MAX`.
    pub const fn mg_to_threshold(self, mg: u16) -> u8 {
        let lsb = mg / self.sensitivity_mg();
        if lsb > u8::MAX as u16 {
            u8::MAX
        } else {
            lsb as u8
        }
    }
}

/// FIFO operating modes encoded in `FIFO_CTRL_REG.FM[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO bypassed.
    Bypass = 0b00,
    /// FIFO mode; stops collecting when full.
    Fifo = 0b01,
    /// Stream mode (circular buffer).
    Stream = 0b10,
    /// Stream until a trigger event, then FIFO.
    StreamToFifo = 0b11,
}

/// Event combination encoded in `INTx_CFG[7:6]` (`AOI`, `6D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum EventCombination {
    /// OR combination of the enabled events.
    Or = 0b00,
    /// 6-direction movement recognition.
    Movement = 0b01,
    /// AND combination of the enabled events.
    And = 0b10,
    /// 6-direction position recognition.
    Position = 0b11,
}

/// One of the two interrupt generators (and the pin it is normally routed to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPin {
    /// Interrupt generator 1 (`INT1_*` registers).
    Int1,
    /// Interrupt generator 2 (`INT2_*` registers).
    Int2,
}

impl InterruptPin {
    /// Both generators in configuration order.
    pub const ALL: [Self; 2] = [Self::Int1, Self::Int2];

    /// Zero-based generator index.
    pub const fn index(self) -> usize {
        match self {
            Self::Int1 => 0,
            Self::Int2 => 1,
        }
    }

    /// Address of the given register within this generator.
    pub const fn register(self, field: InterruptField) -> u8 {
        self.base() + field.offset()
    }

    /// Address of the latched `INTx_SRC` register.
    pub const fn source_register(self) -> u8 {
        self.base() + INT_SRC_OFFSET
    }

    const fn base(self) -> u8 {
        REG_INT1_CFG + self.index() as u8 * INT_GENERATOR_STRIDE
    }
}

/// Writable registers of an interrupt generator, in programming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptField {
    /// `INTx_CFG`: event mask and combination.
    Config,
    /// `INTx_THS`: threshold.
    Threshold,
    /// `INTx_DURATION`: minimum event duration.
    Duration,
}

impl InterruptField {
    /// All fields in programming order.
    pub const ALL: [Self; 3] = [Self::Config, Self::Threshold, Self::Duration];

    /// Offset from the generator's `INTx_CFG` address.
    pub const fn offset(self) -> u8 {
        match self {
            Self::Config => 0,
            Self::Threshold => INT_THS_OFFSET,
            Self::Duration => INT_DURATION_OFFSET,
        }
    }
}

/// Acceleration output layout used by the telemetry reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleWidth {
    /// One 6-byte burst from `OUT_X_L`, each little-endian word shifted down by 8.
    #[default]
    Packed16,
    /// Three single-byte reads of the `OUT_x_H` registers.
    HighByte8,
}
