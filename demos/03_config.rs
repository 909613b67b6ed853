//! Staged configuration example.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  digital::OutputPin,
  i2c::{I2c, SevenBitAddress},
};
use cap1188::{
  Accumulation, AveragingAndSampling, Cap1188, Config, CycleTime, Samples, SamplingTime, StandbyConfiguration,
};

#[allow(dead_code)]
fn run<I2C, RST, D, E>(i2c: I2C, reset: RST, delay: D) -> Result<(), cap1188::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  let config = Config::default()
    .with_multiple_touch(true, 2)
    .with_led_linking(0x0F)
    .with_averaging(
      AveragingAndSampling::POWER_ON
        .with_samples(Samples::X4)
        .with_sampling_time(SamplingTime::Us640)
        .with_cycle_time(CycleTime::Ms35),
    )
    .with_standby(StandbyConfiguration::POWER_ON.with_accumulation(Accumulation::Sum));

  let mut dev = Cap1188::new_i2c(i2c, Default::default(), reset, delay).with_config(config);
  dev.init()?;

  let _active = dev.averaging_and_sampling_config()?;
  Ok(())
}

fn main() {}
