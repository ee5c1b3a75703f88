//! Error handling primitives for the LIS2DH driver.

use crate::params::{InterruptField, InterruptPin};

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
///
/// Every step of [`Lis2dh::configure`](crate::Lis2dh::configure) that touches the bus maps to
/// its own variant, so callers can tell which register operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The `WHO_AM_I` register could not be read.
    IdentityRead(E),
    /// `WHO_AM_I` returned something other than the LIS2DH identity (value read).
    IdentityMismatch(u8),
    /// The reboot request to `CTRL_REG5` failed.
    Reboot(E),
    /// Writing `CTRL_REG1 + index` failed; later control registers were not written.
    ControlRegisterWrite {
        /// Position within the control register block (0..=5).
        index: u8,
        /// Bus error reported by the interface.
        source: E,
    },
    /// Writing one of the interrupt generator registers failed.
    InterruptRegisterWrite {
        /// Interrupt generator being configured.
        pin: InterruptPin,
        /// Register within the generator that failed.
        field: InterruptField,
        /// Bus error reported by the interface.
        source: E,
    },
    /// Writing `FIFO_CTRL_REG` failed.
    FifoConfig(E),
    /// Writing the sleep (activity) threshold failed.
    SleepThreshold(E),
    /// Writing the sleep (activity) duration failed.
    SleepDuration(E),
    /// Reading an interrupt source register to clear its latch failed.
    InterruptLatchClear {
        /// Interrupt generator whose source register was being read.
        pin: InterruptPin,
        /// Bus error reported by the interface.
        source: E,
    },
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
