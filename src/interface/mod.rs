//! Bus interface abstraction for the LIS2DH driver.

pub mod i2c;
pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementations perform exactly one bus transaction per call and never retry.
pub trait Lis2dhInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads consecutive registers starting at `register` into the provided buffer.
    ///
    /// On error the buffer contents are unspecified and must not be used.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
