use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::reg::{MAIN_CONTROL_INT, PRODUCT_ID};
use crate::{Cap1188, Error, Interface, Register};

mod threshold;
mod touch;

pub use touch::*;

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Product ID register; 0x50 on a CAP1188.
  pub fn product_id(&mut self) -> Result<u8, Error<E>> {
    self.read(Register::ProductId)
  }

  pub fn manufacturer_id(&mut self) -> Result<u8, Error<E>> {
    self.read(Register::ManufacturerId)
  }

  pub fn revision(&mut self) -> Result<u8, Error<E>> {
    self.read(Register::Revision)
  }

  /// Check that the device on the bus identifies as a CAP1188.
  pub fn verify_product_id(&mut self) -> Result<(), Error<E>> {
    let id = self.product_id()?;
    if id != PRODUCT_ID {
      #[cfg(feature = "defmt")]
      defmt::warn!("cap1188: unexpected product id {=u8:#04x}", id);
      return Err(Error::InvalidChipId(id));
    }
    Ok(())
  }

  /// Read which sensor inputs are touched (bit n = input n + 1).
  ///
  /// Touches are latched by the device. When any bit is set the INT flag is
  /// cleared afterwards so the next call reports fresh state. The returned
  /// value is always the status read before clearing.
  pub fn sensor_inputs(&mut self) -> Result<u8, Error<E>> {
    let status = self.read(Register::SensorInputStatus)?;
    if status != 0 {
      self.clear_interrupt()?;
    }
    Ok(status)
  }

  /// Clear the INT bit of the Main Control register, leaving every other bit
  /// as read.
  ///
  /// This is a read-modify-write; nothing else may write Main Control between
  /// the two transfers.
  pub fn clear_interrupt(&mut self) -> Result<(), Error<E>> {
    self.modify(Register::MainControl, |main| main & !MAIN_CONTROL_INT)
  }
}
