#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the Microchip CAP1188 8-channel capacitive touch
//! sensor with LED drivers.
//!
//! The CAP1188 is a bank of 8-bit registers reachable over either I²C or
//! 4-wire SPI. This crate hides the bus behind one register interface and
//! offers:
//!
//! - I²C and SPI transports built on `embedded-hal` 1.0 traits, with the SPI
//!   command protocol (pointer / read / write / reset op-codes, one command
//!   per chip-select window) handled for you
//! - Hardware reset and a staged [`Config`] applied on [`Cap1188::init`]
//! - Reading touched inputs, with the latched interrupt cleared automatically
//! - Typed sampling, standby, multiple-touch and threshold settings instead
//!   of raw bit-twiddling
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::OutputPin, i2c::I2c};
//! use cap1188::{Address, Cap1188};
//!
//! fn example<I2C, RST, D>(i2c: I2C, reset: RST, delay: D) -> Result<(), cap1188::Error<I2C::Error>>
//! where
//!   I2C: I2c,
//!   RST: OutputPin,
//!   D: DelayNs,
//! {
//!   let mut touch = Cap1188::new_i2c(i2c, Address::default(), reset, delay);
//!   touch.init()?;
//!
//!   let touched = touch.sensor_inputs()?;
//!   if touched & 0b0000_0001 != 0 {
//!     // input 1 is being touched
//!   }
//!   Ok(())
//! }
//! ```
mod config;
mod control;
mod error;
mod interface;
mod reg;
mod rw;
#[cfg(test)]
mod sim;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub use config::*;
pub use control::*;
pub use error::*;
pub use interface::{Address, I2cInterface, Interface, SpiInterface, Transport};
pub use reg::{Register, CHANNEL_COUNT, MANUFACTURER_ID, PRODUCT_ID};

/// Minimum width of the RESET pulse.
const RESET_PULSE_MS: u32 = 10;

/// Driver for one CAP1188.
///
/// The driver owns the bus interface, the RESET pin and a delay provider.
/// Build one with [`Cap1188::new_i2c`] or [`Cap1188::new_spi`], then call
/// [`Cap1188::init`] before any other operation. Register values are never
/// cached; every call is a fresh transfer.
pub struct Cap1188<IFACE, RST, D> {
  interface: IFACE,
  reset: RST,
  delay: D,
  initialized: bool,
  config: Config,
}

impl<IFACE, RST, D> Cap1188<IFACE, RST, D> {
  /// Create a driver over an already built interface. Nothing is sent to the
  /// device until [`Cap1188::init`].
  pub fn new(interface: IFACE, reset: RST, delay: D, config: Config) -> Self {
    Self { interface, reset, delay, initialized: false, config }
  }

  /// Replace the configuration applied by the next [`Cap1188::init`].
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Give back the owned peripherals.
  pub fn release(self) -> (IFACE, RST, D) {
    (self.interface, self.reset, self.delay)
  }
}

impl<I2C, RST, D> Cap1188<I2cInterface<I2C>, RST, D> {
  /// Driver talking I²C at the strap-selected `address`.
  pub fn new_i2c(i2c: I2C, address: Address, reset: RST, delay: D) -> Self {
    Self::new(I2cInterface::new(i2c, address), reset, delay, Config::default())
  }
}

impl<SPI, CS, RST, D> Cap1188<SpiInterface<SPI, CS>, RST, D> {
  /// Driver talking 4-wire SPI. `spi` must not manage chip-select; `cs` is
  /// driven by the driver around every command.
  pub fn new_spi(spi: SPI, cs: CS, reset: RST, delay: D) -> Self {
    Self::new(SpiInterface::new(spi, cs), reset, delay, Config::default())
  }
}

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Reset the device and apply the staged configuration.
  ///
  /// RESET is held high for at least 10 ms and then released. Over SPI the
  /// command interface is reset afterwards. Finally the [`Config`] passed at
  /// construction is written. The driver counts as initialized once the reset
  /// has completed, even if writing the configuration fails.
  pub fn init(&mut self) -> Result<(), Error<E>> {
    self.reset.set_high().map_err(|_| Error::Reset)?;
    self.delay.delay_ms(RESET_PULSE_MS);
    self.reset.set_low().map_err(|_| Error::Reset)?;

    self.interface.reset()?;
    self.initialized = true;

    #[cfg(feature = "defmt")]
    defmt::debug!("cap1188: reset complete over {}", IFACE::TRANSPORT);

    let config = self.config;
    self.write_config(&config)
  }
}

impl<IFACE: Interface, RST, D> Cap1188<IFACE, RST, D> {
  /// Bus this driver was built for.
  pub fn transport(&self) -> Transport {
    IFACE::TRANSPORT
  }
}
