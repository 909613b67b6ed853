use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Cap1188, Error, Interface, Register};

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Read any register by address.
  pub fn read_register(&mut self, address: u8) -> Result<u8, Error<E>> {
    self.ensure_initialized()?;
    let value = self.interface.read(address)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("cap1188: read {=u8:#04x} -> {=u8:#04x}", address, value);

    Ok(value)
  }

  /// Write any register by address.
  pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
    self.ensure_initialized()?;

    #[cfg(feature = "defmt")]
    defmt::trace!("cap1188: write {=u8:#04x} <- {=u8:#04x}", address, value);

    self.interface.write(address, value)?;
    Ok(())
  }

  // Typed helpers
  pub(crate) fn read(&mut self, reg: Register) -> Result<u8, Error<E>> {
    self.read_register(reg.into())
  }

  pub(crate) fn write(&mut self, reg: Register, value: u8) -> Result<(), Error<E>> {
    self.write_register(reg.into(), value)
  }

  pub(crate) fn modify<F: FnOnce(u8) -> u8>(&mut self, reg: Register, f: F) -> Result<(), Error<E>> {
    let value = self.read(reg)?;
    self.write(reg, f(value))
  }

  fn ensure_initialized(&self) -> Result<(), Error<E>> {
    if self.initialized {
      Ok(())
    } else {
      Err(Error::NotInitialized)
    }
  }
}
