//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::Lis2dhInterface;

// Command byte bit 7: read when set.
const SPI_READ: u8 = 0x80;
// Command byte bit 6: increment the address on multi-byte transfers.
const SPI_MULTI: u8 = 0x40;
const SPI_ADDRESS_MASK: u8 = 0x3F;

/// SPI-based interface implementation for the LIS2DH driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: u8, is_read: bool, len: usize) -> u8 {
        let mut command = register & SPI_ADDRESS_MASK;
        if is_read {
            command |= SPI_READ;
        }
        if len > 1 {
            command |= SPI_MULTI;
        }
        command
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis2dhInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [Self::command_byte(register, false, 1), value];
        self.spi.write(&frame)
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

        let command = [Self::command_byte(register, true, buf.len())];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)
    }
}

#[cfg(test)]
mod tests {
    use super::SpiInterface;
    use crate::interface::Lis2dhInterface;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    #[test]
    fn write_register_sends_command_and_value() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x24, 0x80]),
            SpiTransaction::transaction_end(),
        ];
        let mut interface = SpiInterface::new(SpiMock::new(&expectations));

        interface.write_register(0x24, 0x80).unwrap();
        interface.release().done();
    }

    #[test]
    fn multi_byte_read_sets_read_and_increment_bits() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0xE8]),
            SpiTransaction::read_vec(vec![0x00, 0x10, 0x00, 0x20, 0x00, 0x30]),
            SpiTransaction::transaction_end(),
        ];
        let mut interface = SpiInterface::new(SpiMock::new(&expectations));

        let mut buffer = [0u8; 6];
        interface.read_many(0x28, &mut buffer).unwrap();
        assert_eq!(buffer, [0x00, 0x10, 0x00, 0x20, 0x00, 0x30]);
        interface.release().done();
    }

    #[test]
    fn single_byte_read_leaves_increment_bit_clear() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x8F]),
            SpiTransaction::read_vec(vec![0x33]),
            SpiTransaction::transaction_end(),
        ];
        let mut interface = SpiInterface::new(SpiMock::new(&expectations));

        assert_eq!(interface.read_register(0x0F).unwrap(), 0x33);
        interface.release().done();
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [SpiTransaction<u8>; 0] = [];
        let mut interface = SpiInterface::new(SpiMock::new(&expectations));

        interface.read_many(0x28, &mut []).unwrap();
        interface.release().done();
    }
}
