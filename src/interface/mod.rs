//! Register transports.
//!
//! The CAP1188 exposes the same register file over I²C and over 4-wire SPI.
//! [`I2cInterface`] and [`SpiInterface`] are the only implementations of
//! [`Interface`], so the rest of the driver never branches on the bus type.

mod i2c;
mod spi;

pub use i2c::*;
pub use spi::*;

use crate::TransportError;

/// Bus a driver instance was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transport {
  I2c,
  Spi,
}

mod sealed {
  pub trait Sealed {}
}

/// Single-register access to the sensor over one of the supported buses.
pub trait Interface: sealed::Sealed {
  /// Error type of the underlying bus peripheral.
  type Error;

  /// Which bus this interface drives.
  const TRANSPORT: Transport;

  /// Bring the bus side of the device into a known state. Called once, right
  /// after the hardware reset pulse.
  fn reset(&mut self) -> Result<(), TransportError<Self::Error>>;

  /// Read one register.
  fn read(&mut self, register: u8) -> Result<u8, TransportError<Self::Error>>;

  /// Write one register.
  fn write(&mut self, register: u8, value: u8) -> Result<(), TransportError<Self::Error>>;
}
