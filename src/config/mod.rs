use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Cap1188, Error, Interface};

mod sampling;

pub use sampling::*;

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  pub(crate) fn write_config(&mut self, config: &Config) -> Result<(), Error<E>> {
    self.set_multiple_touch_configuration(config.multiple_touch, config.simultaneous_touches)?;
    self.set_sensor_input_led_linking(config.led_linking)?;

    if let Some(averaging) = config.averaging {
      self.set_averaging_and_sampling_config(averaging)?;
    }
    if let Some(standby) = config.standby {
      self.set_standby_configuration(standby)?;
    }

    #[cfg(feature = "defmt")]
    defmt::debug!("cap1188: configuration applied");

    Ok(())
  }
}

/// Settings written to the device by [`Cap1188::init`].
///
/// Registers left as `None` keep their power-on value.
///
/// # Example
/// ```no_run
/// use cap1188::{AveragingAndSampling, Config, CycleTime, Samples};
///
/// let config = Config::default()
///   .with_multiple_touch(true, 2)
///   .with_led_linking(0b0000_1111)
///   .with_averaging(AveragingAndSampling::POWER_ON.with_samples(Samples::X16).with_cycle_time(CycleTime::Ms35));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Enable the multiple touch blocking circuitry.
  pub multiple_touch: bool,
  /// Maximum number of simultaneous touches (1..=4) when blocking is enabled.
  pub simultaneous_touches: u8,
  /// Sensor inputs whose LED output follows the touch state (bit n = input n + 1).
  pub led_linking: u8,
  pub averaging: Option<AveragingAndSampling>,
  pub standby: Option<StandbyConfiguration>,
}

impl Config {
  /// Up to four simultaneous touches, every LED linked to its input.
  pub const fn new() -> Self {
    Self { multiple_touch: true, simultaneous_touches: 4, led_linking: 0xFF, averaging: None, standby: None }
  }

  pub const fn with_multiple_touch(mut self, enable: bool, simultaneous_touches: u8) -> Self {
    self.multiple_touch = enable;
    self.simultaneous_touches = simultaneous_touches;
    self
  }

  pub const fn with_led_linking(mut self, mask: u8) -> Self {
    self.led_linking = mask;
    self
  }

  pub const fn with_averaging(mut self, averaging: AveragingAndSampling) -> Self {
    self.averaging = Some(averaging);
    self
  }

  pub const fn with_standby(mut self, standby: StandbyConfiguration) -> Self {
    self.standby = Some(standby);
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
