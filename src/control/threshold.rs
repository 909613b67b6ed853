use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::reg::CHANNEL_COUNT;
use crate::{Cap1188, Error, Interface, Register};

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Set the delta count a sensor input (1..=8) must exceed to register a
  /// touch.
  pub fn set_sensor_input_threshold(&mut self, channel: u8, threshold: u8) -> Result<(), Error<E>> {
    let register = threshold_register(channel)?;
    self.write_register(register, threshold)
  }

  /// Current touch threshold of a sensor input (1..=8).
  pub fn sensor_input_threshold(&mut self, channel: u8) -> Result<u8, Error<E>> {
    let register = threshold_register(channel)?;
    self.read_register(register)
  }

  /// Give every sensor input the same threshold, one register at a time.
  ///
  /// The device can mirror a write of input 1's threshold to all inputs
  /// (BUT_LD_TH in Recalibration Configuration), but that path depends on
  /// register state this driver does not own, so it is not used here.
  pub fn set_sensor_input_threshold_all(&mut self, threshold: u8) -> Result<(), Error<E>> {
    for channel in 1..=CHANNEL_COUNT {
      self.set_sensor_input_threshold(channel, threshold)?;
    }
    Ok(())
  }
}

fn threshold_register<E>(channel: u8) -> Result<u8, Error<E>> {
  Register::threshold(channel).ok_or(Error::InvalidChannel(channel))
}
