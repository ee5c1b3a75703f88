//! Register map definitions for the LIS2DH accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{EventCombination, FifoMode, FullScale, OutputDataRate};

/// Register address of `STATUS_REG_AUX`.
pub const REG_STATUS_AUX: u8 = 0x07;
/// Register address of `OUT_TEMP_L`.
pub const REG_OUT_TEMP_L: u8 = 0x0C;
/// Register address of `OUT_TEMP_H`.
pub const REG_OUT_TEMP_H: u8 = 0x0D;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `TEMP_CFG_REG`.
pub const REG_TEMP_CFG: u8 = 0x1F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: u8 = 0x22;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: u8 = 0x24;
/// Register address of `CTRL_REG6`.
pub const REG_CTRL_REG6: u8 = 0x25;
/// Register address of `REFERENCE`.
pub const REG_REFERENCE: u8 = 0x26;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;
/// Register address of `FIFO_CTRL_REG`.
pub const REG_FIFO_CTRL: u8 = 0x2E;
/// Register address of `FIFO_SRC_REG`.
pub const REG_FIFO_SRC: u8 = 0x2F;
/// Register address of `INT1_CFG`.
pub const REG_INT1_CFG: u8 = 0x30;
/// Register address of `INT1_SRC`.
pub const REG_INT1_SRC: u8 = 0x31;
/// Register address of `INT1_THS`.
pub const REG_INT1_THS: u8 = 0x32;
/// Register address of `INT1_DURATION` (1 LSB = 1/ODR).
pub const REG_INT1_DURATION: u8 = 0x33;
/// Register address of `INT2_CFG`.
pub const REG_INT2_CFG: u8 = 0x34;
/// Register address of `INT2_SRC`.
pub const REG_INT2_SRC: u8 = 0x35;
/// Register address of `INT2_THS`.
pub const REG_INT2_THS: u8 = 0x36;
/// Register address of `INT2_DURATION` (1 LSB = 1/ODR).
pub const REG_INT2_DURATION: u8 = 0x37;
/// Register address of `ACT_THS` (sleep-to-wake threshold).
pub const REG_ACT_THS: u8 = 0x3E;
/// Register address of `ACT_DUR` (1 LSB = (8 * LSB + 1) / ODR).
pub const REG_ACT_DUR: u8 = 0x3F;

/// Expected `WHO_AM_I` value.
pub const EXPECTED_WHO_AM_I: u8 = 0x33;
/// Number of contiguous control registers starting at `CTRL_REG1`.
pub const CONTROL_REGISTER_COUNT: usize = 6;
/// Sub-address bit requesting register auto-increment on multi-byte transfers.
pub const AUTO_INCREMENT: u8 = 0x80;
/// Address distance between the `INT1_*` and `INT2_*` register groups.
pub const INT_GENERATOR_STRIDE: u8 = 4;
/// Offset of `INTx_SRC` from `INTx_CFG`.
pub const INT_SRC_OFFSET: u8 = 1;
/// Offset of `INTx_THS` from `INTx_CFG`.
pub const INT_THS_OFFSET: u8 = 2;
/// Offset of `INTx_DURATION` from `INTx_CFG`.
pub const INT_DURATION_OFFSET: u8 = 3;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Low-power mode enable (bit 3).
    pub low_power: bool,
    // Output data rate selection (bits 7:4).
    pub odr: OutputDataRate,
}

impl From<u8> for CtrlReg1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg1> for u8 {
    fn from(value: CtrlReg1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG3` (address `0x22`), INT1 pin routing.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg3 {
    #[skip]
    __: B1,
    // FIFO overrun on INT1 (bit 1).
    pub i1_overrun: bool,
    // FIFO watermark on INT1 (bit 2).
    pub i1_watermark: bool,
    // DRDY2 on INT1 (bit 3).
    pub i1_drdy2: bool,
    // DRDY1 on INT1 (bit 4).
    pub i1_drdy1: bool,
    // Interrupt generator 2 on INT1 (bit 5).
    pub i1_aoi2: bool,
    // Interrupt generator 1 on INT1 (bit 6).
    pub i1_aoi1: bool,
    // Click interrupt on INT1 (bit 7).
    pub i1_click: bool,
}

impl From<u8> for CtrlReg3 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg3> for u8 {
    fn from(value: CtrlReg3) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // SPI 3-wire mode (bit 0).
    pub spi_3wire: bool,
    // Self-test selection (bits 2:1).
    pub self_test: B2,
    // High-resolution output (bit 3).
    pub high_resolution: bool,
    // Full-scale selection (bits 5:4).
    pub full_scale: FullScale,
    // Big-endian data selection (bit 6).
    pub big_endian: bool,
    // Block data update: outputs not updated until both bytes are read (bit 7).
    pub block_data_update: bool,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `CTRL_REG5` (address `0x24`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5 {
    // 4D detection on INT2 (bit 0).
    pub d4d_int2: bool,
    // Latch INT2_SRC until read (bit 1).
    pub latch_int2: bool,
    // 4D detection on INT1 (bit 2).
    pub d4d_int1: bool,
    // Latch INT1_SRC until read (bit 3).
    pub latch_int1: bool,
    #[skip]
    __: B2,
    // FIFO enable (bit 6).
    pub fifo_enable: bool,
    // Reboot memory content (bit 7).
    pub boot: bool,
}

impl From<u8> for CtrlReg5 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg5> for u8 {
    fn from(value: CtrlReg5) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `FIFO_CTRL_REG` (address `0x2E`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoControl {
    // FIFO watermark threshold (bits 4:0).
    pub threshold: B5,
    // Trigger event routed to INT2 when set, INT1 otherwise (bit 5).
    pub trigger_int2: bool,
    // FIFO mode selection (bits 7:6).
    pub mode: FifoMode,
}

impl From<u8> for FifoControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<FifoControl> for u8 {
    fn from(value: FifoControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INT1_CFG` / `INT2_CFG` (addresses `0x30` / `0x34`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptConfig {
    // X low event enable (bit 0).
    pub x_low: bool,
    // X high event enable (bit 1).
    pub x_high: bool,
    // Y low event enable (bit 2).
    pub y_low: bool,
    // Y high event enable (bit 3).
    pub y_high: bool,
    // Z low event enable (bit 4).
    pub z_low: bool,
    // Z high event enable (bit 5).
    pub z_high: bool,
    // 6D / AOI combination (bits 7:6).
    pub combination: EventCombination,
}

impl From<u8> for InterruptConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptConfig> for u8 {
    fn from(value: InterruptConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of `INT1_SRC` / `INT2_SRC` (addresses `0x31` / `0x35`).
///
/// Reading the register clears the latched flags when latching is enabled in `CTRL_REG5`.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptSource {
    // X low event (bit 0).
    pub x_low: bool,
    // X high event (bit 1).
    pub x_high: bool,
    // Y low event (bit 2).
    pub y_low: bool,
    // Y high event (bit 3).
    pub y_high: bool,
    // Z low event (bit 4).
    pub z_low: bool,
    // Z high event (bit 5).
    pub z_high: bool,
    // One or more interrupts generated (bit 6).
    pub active: bool,
    #[skip]
    __: B1,
}

impl From<u8> for InterruptSource {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptSource> for u8 {
    fn from(value: InterruptSource) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for CtrlReg1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for CtrlReg3 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG3;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg5 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG5;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_CTRL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

/// Position of a control register within the `CTRL_REG1..=CTRL_REG6` block.
pub const fn control_index<R: Register>() -> usize {
    (R::ADDRESS - REG_CTRL_REG1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_reg1_layout_matches_datasheet() {
        let reg = CtrlReg1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_odr(OutputDataRate::Hz10);

        assert_eq!(u8::from(reg), 0x27);
        assert_eq!(CtrlReg1::from(0x27).odr(), OutputDataRate::Hz10);
    }

    #[test]
    fn ctrl_reg4_scale_field_sits_in_bits_5_4() {
        let reg = CtrlReg4::new()
            .with_block_data_update(true)
            .with_full_scale(FullScale::G8);

        assert_eq!(u8::from(reg), 0xA0);
        assert_eq!(CtrlReg4::from(0x30).full_scale(), FullScale::G16);
        assert_eq!(CtrlReg4::from(0x10).full_scale(), FullScale::G4);
    }

    #[test]
    fn reboot_bit_is_msb_of_ctrl_reg5() {
        assert_eq!(u8::from(CtrlReg5::new().with_boot(true)), 0x80);
        assert_eq!(u8::from(CtrlReg5::new().with_latch_int1(true)), 0x08);
    }

    #[test]
    fn fifo_mode_occupies_top_bits() {
        assert_eq!(u8::from(FifoControl::new().with_mode(FifoMode::Bypass)), 0x00);
        assert_eq!(u8::from(FifoControl::new().with_mode(FifoMode::Fifo)), 0x40);
        assert_eq!(u8::from(FifoControl::new().with_mode(FifoMode::Stream)), 0x80);
        assert_eq!(u8::from(FifoControl::new().with_mode(FifoMode::StreamToFifo)), 0xC0);
    }

    #[test]
    fn interrupt_config_and_of_low_events() {
        let cfg = InterruptConfig::new()
            .with_x_low(true)
            .with_z_low(true)
            .with_combination(EventCombination::And);

        assert_eq!(u8::from(cfg), 0x91);
        assert_eq!(
            InterruptConfig::from(0x40).combination(),
            EventCombination::Movement
        );
    }

    #[test]
    fn interrupt_source_flags_decode() {
        let src = InterruptSource::from(0b0100_0101);
        assert!(src.active());
        assert!(src.x_low());
        assert!(src.y_low());
        assert!(!src.z_low());
        assert!(!src.x_high());
    }

    #[test]
    fn control_index_tracks_block_offset() {
        assert_eq!(control_index::<CtrlReg1>(), 0);
        assert_eq!(control_index::<CtrlReg4>(), 3);
        assert_eq!(control_index::<CtrlReg5>(), 4);
    }
}
