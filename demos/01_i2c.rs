//! Minimal I²C example: reset, check the chip, poll touches.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  digital::OutputPin,
  i2c::{I2c, SevenBitAddress},
};
use cap1188::{Address, Cap1188};

#[allow(dead_code)]
fn run<I2C, RST, D, E>(i2c: I2C, reset: RST, delay: D) -> Result<(), cap1188::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  let mut dev = Cap1188::new_i2c(i2c, Address::Pulldown150k, reset, delay);
  dev.init()?;
  dev.verify_product_id()?;

  let touched = dev.sensor_inputs()?;
  let _first_input = touched & 0b0000_0001 != 0;
  Ok(())
}

fn main() {}
