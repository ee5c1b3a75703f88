//! High-level LIS2DH device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::{I2cInterface, SlaveAddr};
use crate::interface::spi::SpiInterface;
use crate::interface::Lis2dhInterface;
use crate::log::{debug, trace};
use crate::params::{InterruptField, InterruptPin, SampleWidth};
use crate::registers::{
    CtrlReg5,
    InterruptSource,
    Register,
    EXPECTED_WHO_AM_I,
    REG_ACT_DUR,
    REG_ACT_THS,
    REG_CTRL_REG1,
    REG_FIFO_CTRL,
    REG_OUT_X_H,
    REG_OUT_X_L,
    REG_OUT_Y_H,
    REG_OUT_Z_H,
    REG_WHO_AM_I,
};
use crate::sample::Sample;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

// The device ignores the bus for a while after a BOOT request (milliseconds).
const REBOOT_SETTLE_DELAY_MS: u32 = 5;
// Pause after each control register write (milliseconds).
const CONTROL_WRITE_DELAY_MS: u32 = 1;
// Number of consecutive bytes spanning X, Y, Z axis samples.
const RAW_AXIS_BYTES: usize = 6;

/// High-level synchronous driver for the LIS2DH accelerometer.
///
/// The driver assumes exclusive ownership of the bus for the duration of each call and keeps
/// no copy of the applied [`Config`]; the only derived state it holds is the gain.
pub struct Lis2dh<IFACE> {
    interface: IFACE,
    width: SampleWidth,
    gain: u16,
}

impl<IFACE> Lis2dh<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance reading samples with the given layout.
    pub fn new(interface: IFACE, width: SampleWidth) -> Self {
        Self {
            interface,
            width,
            gain: 0,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Sample layout chosen at construction.
    pub fn sample_width(&self) -> SampleWidth {
        self.width
    }

    /// Device units per 1 g for the scale applied by the last [`configure`](Self::configure).
    ///
    /// Returns `0` until a configuration has reached the gain derivation step.
    pub fn gain(&self) -> u16 {
        self.gain
    }
}

impl<I2C> Lis2dh<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SlaveAddr, width: SampleWidth) -> Self {
        Self::new(I2cInterface::new(i2c, address), width)
    }

    /// Releases the driver, returning the I2C bus.
    pub fn release_i2c(self) -> I2C {
        self.release().release()
    }
}

impl<SPI> Lis2dh<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, width: SampleWidth) -> Self {
        Self::new(SpiInterface::new(spi), width)
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> Lis2dh<IFACE>
where
    IFACE: Lis2dhInterface<Error = CommE>,
{
    // ==================================================================
    // == Configuration Sequence ========================================
    // ==================================================================
    /// Applies `config` to the device.
    ///
    /// Steps, each with its own error variant:
    /// 1. verify `WHO_AM_I`
    /// 2. request a reboot and wait for the device to settle
    /// 3. write `CTRL_REG1..=CTRL_REG6` in order
    /// 4. write `CFG`, `THS`, `DURATION` of generator 1 then generator 2
    /// 5. write `FIFO_CTRL_REG`
    /// 6. write the sleep threshold
    /// 7. write the sleep duration
    /// 8. derive the gain from the `CTRL_REG4` full-scale field
    /// 9. read both `INTx_SRC` registers to drop any latched condition
    ///
    /// The first failure aborts the sequence. Registers written before the failure are not
    /// restored; since the sequence starts with a reboot, calling `configure` again is the
    /// way to recover.
    pub fn configure(&mut self, config: &Config, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.check_id()?;
        self.reboot(delay)?;
        self.write_control_registers(config, delay)?;
        self.write_interrupt_generators(config)?;

        self.write(REG_FIFO_CTRL, config.fifo)
            .map_err(Error::FifoConfig)?;
        self.write(REG_ACT_THS, config.sleep_threshold)
            .map_err(Error::SleepThreshold)?;
        self.write(REG_ACT_DUR, config.sleep_duration)
            .map_err(Error::SleepDuration)?;

        let scale = config.full_scale();
        self.gain = scale.gain();
        debug!("lis2dh: scale {}, gain {}", scale, self.gain);

        for pin in InterruptPin::ALL {
            self.interface
                .read_register(pin.source_register())
                .map_err(|source| Error::InterruptLatchClear { pin, source })?;
        }

        Ok(())
    }

    /// Verifies `WHO_AM_I` against the LIS2DH identity and returns the value read.
    pub fn check_id(&mut self) -> Result<u8, CommE> {
        let who = self
            .interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::IdentityRead)?;

        if who != EXPECTED_WHO_AM_I {
            return Err(Error::IdentityMismatch(who));
        }

        Ok(who)
    }

    /// Requests a reboot of the internal memory and waits until the device responds again.
    pub fn reboot(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let boot = CtrlReg5::new().with_boot(true);
        self.write(CtrlReg5::ADDRESS, u8::from(boot))
            .map_err(Error::Reboot)?;
        delay.delay_ms(REBOOT_SETTLE_DELAY_MS);
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    #[inline]
    fn unpack_axis(lsb: u8, msb: u8) -> i16 {
        // Output is left-justified in the 16-bit word; the high byte carries the value.
        i16::from_le_bytes([lsb, msb]) >> 8
    }

    /// Reads one acceleration sample using the layout chosen at construction.
    pub fn read_sample(&mut self) -> Result<Sample, CommE> {
        match self.width {
            SampleWidth::Packed16 => {
                let mut raw = [0u8; RAW_AXIS_BYTES];
                self
                    .interface
                    .read_many(REG_OUT_X_L, &mut raw)
                    .map_err(Error::from)?;

                let x = Self::unpack_axis(raw[0], raw[1]);
                let y = Self::unpack_axis(raw[2], raw[3]);
                let z = Self::unpack_axis(raw[4], raw[5]);

                Ok(Sample::new(x, y, z))
            }
            SampleWidth::HighByte8 => {
                let x = self.read_high_byte(REG_OUT_X_H)?;
                let y = self.read_high_byte(REG_OUT_Y_H)?;
                let z = self.read_high_byte(REG_OUT_Z_H)?;

                Ok(Sample::new(x, y, z))
            }
        }
    }

    /// Fills `samples` with consecutive readings.
    ///
    /// The first bus failure aborts the batch. The slice contents are unspecified on error; the
    /// failing position is not reported.
    pub fn read_samples(&mut self, samples: &mut [Sample]) -> Result<(), CommE> {
        for sample in samples.iter_mut() {
            *sample = self.read_sample()?;
        }

        Ok(())
    }

    fn read_high_byte(&mut self, register: u8) -> Result<i16, CommE> {
        let raw = self
            .interface
            .read_register(register)
            .map_err(Error::from)?;

        Ok(i16::from(raw as i8))
    }

    // ==================================================================
    // == Interrupt Status ==============================================
    // ==================================================================
    /// Reads, and thereby clears, the latched source register of one interrupt generator.
    pub fn read_interrupt_source(&mut self, pin: InterruptPin) -> Result<InterruptSource, CommE> {
        let raw = self
            .interface
            .read_register(pin.source_register())
            .map_err(Error::from)?;

        Ok(InterruptSource::from(raw))
    }

    // ==================================================================
    // == Internal Configuration Helpers =================================
    // ==================================================================
    fn write(&mut self, register: u8, value: u8) -> core::result::Result<(), CommE> {
        trace!("lis2dh: write {:#x} <- {:#x}", register, value);
        self.interface.write_register(register, value)
    }

    fn write_control_registers(
        &mut self,
        config: &Config,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        debug!("lis2dh: CTRL_REG {:x}", config.control);

        for (index, &value) in (0u8..).zip(config.control.iter()) {
            self.write(REG_CTRL_REG1 + index, value)
                .map_err(|source| Error::ControlRegisterWrite { index, source })?;
            delay.delay_ms(CONTROL_WRITE_DELAY_MS);
        }

        Ok(())
    }

    fn write_interrupt_generators(&mut self, config: &Config) -> Result<(), CommE> {
        for pin in InterruptPin::ALL {
            let channel = config.interrupt(pin);
            debug!("lis2dh: {} {:x}", pin, channel.registers());

            for (field, value) in InterruptField::ALL.into_iter().zip(channel.registers()) {
                self.write(pin.register(field), value)
                    .map_err(|source| Error::InterruptRegisterWrite { pin, field, source })?;
            }
        }

        Ok(())
    }
}
