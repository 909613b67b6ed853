use bitfield_struct::bitfield;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Cap1188, Error, Interface, Register};

/// Largest simultaneous-touch limit the blocking circuitry supports.
pub const MAX_SIMULTANEOUS_TOUCHES: u8 = 4;

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Configure multiple touch blocking.
  ///
  /// With `enable` set, the device reports at most `simultaneous_touches`
  /// (1..=4) touched inputs at once. With `enable` cleared the count is
  /// ignored and blocking is switched off.
  pub fn set_multiple_touch_configuration(&mut self, enable: bool, simultaneous_touches: u8) -> Result<(), Error<E>> {
    let config = MultipleTouch::encode(enable, simultaneous_touches)?;
    self.write(Register::MultipleTouchConfiguration, config.into_bits())
  }

  /// Link LED outputs to sensor inputs: bit n links CS(n + 1) to LED(n + 1).
  pub fn set_sensor_input_led_linking(&mut self, mask: u8) -> Result<(), Error<E>> {
    self.write(Register::SensorInputLedLinking, mask)
  }
}

/// Multiple Touch Configuration register (0x2A).
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub(crate) struct MultipleTouch {
  #[bits(2)]
  __: u8,
  /// Simultaneous touches allowed, minus one.
  #[bits(2)]
  extra_touches: u8,
  #[bits(3)]
  ___: u8,
  enabled: bool,
}

impl MultipleTouch {
  pub(crate) fn encode<E>(enable: bool, simultaneous_touches: u8) -> Result<Self, Error<E>> {
    if !enable {
      return Ok(Self::new());
    }
    match simultaneous_touches {
      1..=MAX_SIMULTANEOUS_TOUCHES => Ok(Self::new().with_enabled(true).with_extra_touches(simultaneous_touches - 1)),
      n => Err(Error::InvalidTouchCount(n)),
    }
  }
}
