//! SPI example: software chip-select and per-input thresholds.
#![allow(unused)]
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
use cap1188::{Cap1188, Transport};

#[allow(dead_code)]
fn run<SPI, CS, RST, D, E>(spi: SPI, cs: CS, reset: RST, delay: D) -> Result<(), cap1188::Error<E>>
where
  SPI: SpiBus<Error = E>,
  CS: OutputPin,
  RST: OutputPin,
  D: DelayNs,
{
  let mut dev = Cap1188::new_spi(spi, cs, reset, delay);
  dev.init()?;
  debug_assert_eq!(dev.transport(), Transport::Spi);

  dev.set_sensor_input_threshold_all(0x40)?;
  dev.set_sensor_input_threshold(1, 0x20)?;
  let _first = dev.sensor_input_threshold(1)?;
  Ok(())
}

fn main() {}
