//! Configuration primitives for the LIS2DH driver.
//!
//! A [`Config`] holds raw register encodings and is written verbatim by
//! [`Lis2dh::configure`](crate::Lis2dh::configure). Nothing here checks that a combination
//! of values makes sense; the [`ConfigBuilder`] only guarantees that each typed setter lands
//! in the right bits.

use crate::params::{EventCombination, FifoMode, FullScale, InterruptPin, OutputDataRate};
use crate::registers::{
    control_index,
    CtrlReg1,
    CtrlReg3,
    CtrlReg4,
    FifoControl,
    InterruptConfig,
    CONTROL_REGISTER_COUNT,
};

/// Raw settings for one interrupt generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptChannelConfig {
    /// `INTx_CFG`: event mask and AND/OR/6D combination.
    pub config: u8,
    /// `INTx_THS`: threshold in scale-dependent LSBs.
    pub threshold: u8,
    /// `INTx_DURATION`: duration in 1/ODR steps.
    pub duration: u8,
}

impl InterruptChannelConfig {
    /// Creates a channel from raw register values.
    pub const fn new(config: u8, threshold: u8, duration: u8) -> Self {
        Self {
            config,
            threshold,
            duration,
        }
    }

    /// A generator with no events enabled.
    pub const fn disabled() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the raw values in programming order (`CFG`, `THS`, `DURATION`).
    pub const fn registers(&self) -> [u8; 3] {
        [self.config, self.threshold, self.duration]
    }
}

/// Axis event selection used to compose an `INTx_CFG` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisEvents {
    /// X below threshold.
    pub x_low: bool,
    /// X above threshold.
    pub x_high: bool,
    /// Y below threshold.
    pub y_low: bool,
    /// Y above threshold.
    pub y_high: bool,
    /// Z below threshold.
    pub z_low: bool,
    /// Z above threshold.
    pub z_high: bool,
}

impl AxisEvents {
    /// Encodes the selection together with a combination mode into an `INTx_CFG` byte.
    pub fn encode(self, combination: EventCombination) -> u8 {
        u8::from(
            InterruptConfig::new()
                .with_x_low(self.x_low)
                .with_x_high(self.x_high)
                .with_y_low(self.y_low)
                .with_y_high(self.y_high)
                .with_z_low(self.z_low)
                .with_z_high(self.z_high)
                .with_combination(combination),
        )
    }
}

/// Complete desired device state, as raw register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// `CTRL_REG1..=CTRL_REG6`, written in order.
    pub control: [u8; CONTROL_REGISTER_COUNT],
    /// `FIFO_CTRL_REG`.
    pub fifo: u8,
    /// `ACT_THS`: sleep-to-wake threshold.
    pub sleep_threshold: u8,
    /// `ACT_DUR`: sleep-to-wake duration.
    pub sleep_duration: u8,
    /// Interrupt generators 1 and 2.
    pub interrupts: [InterruptChannelConfig; 2],
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Full scale selected by the 2-bit field of `CTRL_REG4`.
    pub fn full_scale(&self) -> FullScale {
        CtrlReg4::from(self.control[control_index::<CtrlReg4>()]).full_scale()
    }

    /// Settings of the given interrupt generator.
    pub fn interrupt(&self, pin: InterruptPin) -> &InterruptChannelConfig {
        &self.interrupts[pin.index()]
    }
}

/// Returns the known-good default configuration.
///
/// 10 Hz with all axes on, block data update, ±8 g, FIFO bypassed, generator 1 raising on
/// X-low AND Z-low (0.2 g for one sample) routed to INT1, generator 2 disabled.
pub fn default_configuration() -> Config {
    let scale = FullScale::G8;

    let ctrl1 = CtrlReg1::new()
        .with_x_enable(true)
        .with_y_enable(true)
        .with_z_enable(true)
        .with_odr(OutputDataRate::Hz10);
    let ctrl3 = CtrlReg3::new().with_i1_aoi1(true);
    let ctrl4 = CtrlReg4::new()
        .with_block_data_update(true)
        .with_full_scale(scale);

    let free_fall = AxisEvents {
        x_low: true,
        z_low: true,
        ..AxisEvents::default()
    };

    Config {
        control: [u8::from(ctrl1), 0x00, u8::from(ctrl3), u8::from(ctrl4), 0x00, 0x00],
        fifo: u8::from(FifoControl::new().with_mode(FifoMode::Bypass)),
        sleep_threshold: scale.mg_to_threshold(100),
        sleep_duration: 30,
        interrupts: [
            InterruptChannelConfig::new(
                free_fall.encode(EventCombination::And),
                scale.mg_to_threshold(200),
                1,
            ),
            InterruptChannelConfig::disabled(),
        ],
    }
}

impl Default for Config {
    fn default() -> Self {
        default_configuration()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replaces the whole control register block.
    pub fn control_registers(mut self, control: [u8; CONTROL_REGISTER_COUNT]) -> Self {
        self.config.control = control;
        self
    }

    /// Overrides the output data rate in `CTRL_REG1`.
    pub fn odr(self, odr: OutputDataRate) -> Self {
        self.update_ctrl1(|reg| reg.set_odr(odr))
    }

    /// Selects which axes are enabled in `CTRL_REG1`.
    pub fn axes(self, x: bool, y: bool, z: bool) -> Self {
        self.update_ctrl1(|reg| {
            reg.set_x_enable(x);
            reg.set_y_enable(y);
            reg.set_z_enable(z);
        })
    }

    /// Toggles low-power (8-bit) mode in `CTRL_REG1`.
    pub fn low_power(self, enabled: bool) -> Self {
        self.update_ctrl1(|reg| reg.set_low_power(enabled))
    }

    /// Overrides the full scale in `CTRL_REG4`.
    pub fn full_scale(self, scale: FullScale) -> Self {
        self.update_ctrl4(|reg| reg.set_full_scale(scale))
    }

    /// Toggles block data update in `CTRL_REG4`.
    pub fn block_data_update(self, enabled: bool) -> Self {
        self.update_ctrl4(|reg| reg.set_block_data_update(enabled))
    }

    /// Toggles high-resolution output in `CTRL_REG4`.
    pub fn high_resolution(self, enabled: bool) -> Self {
        self.update_ctrl4(|reg| reg.set_high_resolution(enabled))
    }

    /// Overrides the FIFO mode, keeping watermark and trigger bits.
    pub fn fifo_mode(mut self, mode: FifoMode) -> Self {
        let mut fifo = FifoControl::from(self.config.fifo);
        fifo.set_mode(mode);
        self.config.fifo = u8::from(fifo);
        self
    }

    /// Sets the raw sleep-to-wake threshold and duration.
    pub fn sleep(mut self, threshold: u8, duration: u8) -> Self {
        self.config.sleep_threshold = threshold;
        self.config.sleep_duration = duration;
        self
    }

    /// Replaces the settings of one interrupt generator.
    pub fn interrupt(mut self, pin: InterruptPin, channel: InterruptChannelConfig) -> Self {
        self.config.interrupts[pin.index()] = channel;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    fn update_ctrl1<F>(mut self, mutate: F) -> Self
    where
        F: FnOnce(&mut CtrlReg1),
    {
        let slot = &mut self.config.control[control_index::<CtrlReg1>()];
        let mut reg = CtrlReg1::from(*slot);
        mutate(&mut reg);
        *slot = u8::from(reg);
        self
    }

    fn update_ctrl4<F>(mut self, mutate: F) -> Self
    where
        F: FnOnce(&mut CtrlReg4),
    {
        let slot = &mut self.config.control[control_index::<CtrlReg4>()];
        let mut reg = CtrlReg4::from(*slot);
        mutate(&mut reg);
        *slot = u8::from(reg);
        self
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_register_values() {
        let config = default_configuration();

        assert_eq!(config.control, [0x27, 0x00, 0x40, 0xA0, 0x00, 0x00]);
        assert_eq!(config.fifo, 0x00);
        assert_eq!(config.sleep_threshold, 1);
        assert_eq!(config.sleep_duration, 30);
        assert_eq!(config.interrupts[0], InterruptChannelConfig::new(0x91, 3, 1));
        assert_eq!(config.interrupts[1], InterruptChannelConfig::disabled());
        assert_eq!(config.full_scale(), FullScale::G8);
    }

    #[test]
    fn builder_edits_fields_in_place() {
        let config = Config::new()
            .odr(OutputDataRate::Hz100)
            .full_scale(FullScale::G2)
            .fifo_mode(FifoMode::Stream)
            .build();

        assert_eq!(config.control[0], 0x57);
        assert_eq!(config.control[3], 0x80);
        assert_eq!(config.fifo, 0x80);
        assert_eq!(config.full_scale(), FullScale::G2);
    }

    #[test]
    fn builder_replaces_interrupt_generator() {
        let channel = InterruptChannelConfig::new(
            AxisEvents {
                z_high: true,
                ..AxisEvents::default()
            }
            .encode(EventCombination::Or),
            10,
            2,
        );
        let config = Config::new().interrupt(InterruptPin::Int2, channel).build();

        assert_eq!(config.interrupt(InterruptPin::Int2).registers(), [0x20, 10, 2]);
        assert_eq!(*config.interrupt(InterruptPin::Int1), default_configuration().interrupts[0]);
    }

    #[test]
    fn builder_axes_and_low_power_touch_only_ctrl1_bits() {
        let config = Config::new().axes(true, false, true).low_power(true).build();

        assert_eq!(config.control[0], 0x2D);
        assert_eq!(config.control[1..], default_configuration().control[1..]);
    }
}
