//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Lis2dhInterface;
use crate::registers::AUTO_INCREMENT;

/// 7-bit device address with `SA0` tied low.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x18;
/// 7-bit device address with `SA0` tied high.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x19;

/// Selects the 7-bit I2C address from the state of the `SA0` pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// `SA0` low (`0x18`).
    #[default]
    Sa0Low,
    /// `SA0` high (`0x19`).
    Sa0High,
}

impl SlaveAddr {
    /// Returns the 7-bit bus address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Sa0Low => I2C_ADDRESS_SA0_LOW,
            Self::Sa0High => I2C_ADDRESS_SA0_HIGH,
        }
    }
}

/// I2C-based interface implementation for the LIS2DH driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the 7-bit bus address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis2dhInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Repeated start between the sub-address and the data phase, stop after the read.
        self.i2c
            .write_read(self.address, &[register | AUTO_INCREMENT], buf)
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, SlaveAddr};
    use crate::interface::Lis2dhInterface;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_register_sends_address_and_value() {
        let expectations = [I2cTransaction::write(0x18, vec![0x24, 0x80])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Sa0Low);

        interface.write_register(0x24, 0x80).unwrap();
        interface.release().done();
    }

    #[test]
    fn read_many_sets_auto_increment_bit() {
        let expectations = [I2cTransaction::write_read(
            0x19,
            vec![0xA8],
            vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Sa0High);

        let mut buffer = [0u8; 6];
        interface.read_many(0x28, &mut buffer).unwrap();
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        interface.release().done();
    }

    #[test]
    fn read_register_reuses_read_many() {
        let expectations = [I2cTransaction::write_read(0x18, vec![0x8F], vec![0x33])];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Sa0Low);

        assert_eq!(interface.read_register(0x0F).unwrap(), 0x33);
        interface.release().done();
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [I2cTransaction; 0] = [];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Sa0Low);

        interface.read_many(0x28, &mut []).unwrap();
        interface.release().done();
    }

    #[test]
    fn bus_errors_are_surfaced() {
        let expectations = [
            I2cTransaction::write(0x18, vec![0x20, 0x27]).with_error(ErrorKind::Other),
            I2cTransaction::write_read(0x18, vec![0xB1], vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Sa0Low);

        assert_eq!(interface.write_register(0x20, 0x27), Err(ErrorKind::Other));
        assert_eq!(interface.read_register(0x31), Err(ErrorKind::Other));
        interface.release().done();
    }
}
