use embedded_hal::i2c::{I2c, SevenBitAddress};

use super::{sealed, Interface, Transport};
use crate::TransportError;

/// 7-bit I²C address selected by the resistor on the ADDR_COMM pin.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
  /// ADDR_COMM tied to VDD.
  Vdd = 0x28,
  /// 150 kΩ to ground. Used by most breakout boards.
  #[default]
  Pulldown150k = 0x29,
  /// 120 kΩ to ground.
  Pulldown120k = 0x2A,
  /// 100 kΩ to ground.
  Pulldown100k = 0x2B,
  /// 82 kΩ to ground.
  Pulldown82k = 0x2C,
}

impl From<Address> for u8 {
  fn from(a: Address) -> Self {
    a as u8
  }
}

/// Register access over I²C.
///
/// A read is a single write-read (register address, then one data byte); a
/// write sends the register address and the value in one transfer.
pub struct I2cInterface<I2C> {
  i2c: I2C,
  address: Address,
}

impl<I2C> I2cInterface<I2C> {
  pub fn new(i2c: I2C, address: Address) -> Self {
    Self { i2c, address }
  }

  /// Bus address this interface talks to.
  pub fn address(&self) -> Address {
    self.address
  }

  /// Give back the owned bus.
  pub fn release(self) -> I2C {
    self.i2c
  }
}

impl<I2C> sealed::Sealed for I2cInterface<I2C> {}

impl<I2C> Interface for I2cInterface<I2C>
where
  I2C: I2c<SevenBitAddress>,
{
  type Error = I2C::Error;

  const TRANSPORT: Transport = Transport::I2c;

  fn reset(&mut self) -> Result<(), TransportError<Self::Error>> {
    Ok(())
  }

  fn read(&mut self, register: u8) -> Result<u8, TransportError<Self::Error>> {
    let mut buf = [0u8; 1];
    self
      .i2c
      .write_read(self.address.into(), &[register], &mut buf)
      .map_err(TransportError::Bus)?;
    Ok(buf[0])
  }

  fn write(&mut self, register: u8, value: u8) -> Result<(), TransportError<Self::Error>> {
    self.i2c.write(self.address.into(), &[register, value]).map_err(TransportError::Bus)
  }
}
