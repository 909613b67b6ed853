//! CAP1188 SPI command protocol (4-wire "normal" mode).
//!
//! The device does not use address/data framing. Every access is a short
//! command that must sit alone inside one chip-select window, because the
//! device decodes the first byte after CS falls as the op-code:
//!
//! | Command             | Bytes out           | Bytes in |
//! |---------------------|---------------------|----------|
//! | reset interface     | `0x7A 0x7A`         | –        |
//! | set address pointer | `0x7D addr`         | –        |
//! | write data          | `0x7E data`         | –        |
//! | read data           | `0x7F`              | 1        |
//!
//! A register read or write is therefore two windows: point, then access.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::{sealed, Interface, Transport};
use crate::TransportError;

const RESET_INTERFACE: u8 = 0x7A;
const SET_ADDRESS_POINTER: u8 = 0x7D;
const WRITE_DATA: u8 = 0x7E;
const READ_DATA: u8 = 0x7F;

/// Register access over SPI with a software-driven chip-select.
///
/// `SPI` must be a bare bus (no managed CS); the interface drives `CS` around
/// each command itself.
pub struct SpiInterface<SPI, CS> {
  spi: SPI,
  cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
  pub fn new(spi: SPI, cs: CS) -> Self {
    Self { spi, cs }
  }

  /// Give back the owned bus and chip-select pin.
  pub fn release(self) -> (SPI, CS) {
    (self.spi, self.cs)
  }
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
  SPI: SpiBus,
  CS: OutputPin,
{
  /// Put the device's SPI command decoder back into its idle state.
  pub fn reset_interface(&mut self) -> Result<(), TransportError<SPI::Error>> {
    self.command([RESET_INTERFACE, RESET_INTERFACE])
  }

  /// Point the device's register cursor at `register`.
  pub fn set_register_pointer(&mut self, register: u8) -> Result<(), TransportError<SPI::Error>> {
    self.command([SET_ADDRESS_POINTER, register])
  }

  /// Read the register the cursor currently points at.
  pub fn read_pointed_register(&mut self) -> Result<u8, TransportError<SPI::Error>> {
    let mut reply = [0u8; 1];
    self.framed(|spi| {
      spi.write(&[READ_DATA])?;
      spi.read(&mut reply)
    })?;
    Ok(reply[0])
  }

  /// Write `value` to the register the cursor currently points at.
  pub fn write_pointed_register(&mut self, value: u8) -> Result<(), TransportError<SPI::Error>> {
    self.command([WRITE_DATA, value])
  }

  fn command<const N: usize>(&mut self, bytes: [u8; N]) -> Result<(), TransportError<SPI::Error>> {
    self.framed(|spi| spi.write(&bytes))
  }

  /// Run `shift` with CS held low. CS is released even when the bus fails so
  /// the next command starts a fresh window.
  fn framed<F>(&mut self, shift: F) -> Result<(), TransportError<SPI::Error>>
  where
    F: FnOnce(&mut SPI) -> Result<(), SPI::Error>,
  {
    self.cs.set_low().map_err(|_| TransportError::ChipSelect)?;
    let shifted = shift(&mut self.spi).and_then(|()| self.spi.flush());
    let released = self.cs.set_high().map_err(|_| TransportError::ChipSelect);
    shifted.map_err(TransportError::Bus)?;
    released
  }
}

impl<SPI, CS> sealed::Sealed for SpiInterface<SPI, CS> {}

impl<SPI, CS> Interface for SpiInterface<SPI, CS>
where
  SPI: SpiBus,
  CS: OutputPin,
{
  type Error = SPI::Error;

  const TRANSPORT: Transport = Transport::Spi;

  fn reset(&mut self) -> Result<(), TransportError<Self::Error>> {
    // CS may still be floating low from before the pin was configured.
    self.cs.set_high().map_err(|_| TransportError::ChipSelect)?;
    self.reset_interface()
  }

  fn read(&mut self, register: u8) -> Result<u8, TransportError<Self::Error>> {
    self.set_register_pointer(register)?;
    self.read_pointed_register()
  }

  fn write(&mut self, register: u8, value: u8) -> Result<(), TransportError<Self::Error>> {
    self.set_register_pointer(register)?;
    self.write_pointed_register(value)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;
  use crate::sim::{Chip, Event, Line};
  use embedded_hal::spi::{ErrorKind, ErrorType};
  use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
  use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
  use std::{vec, vec::Vec};

  fn cs(level: bool) -> Event {
    Event::Pin(Line::ChipSelect, level)
  }

  #[test]
  fn read_points_then_reads_in_separate_windows() {
    let chip = Chip::new().with_register(0x03, 0xA5);
    let mut iface = SpiInterface::new(chip.spi(), chip.chip_select());

    assert_eq!(iface.read(0x03), Ok(0xA5));
    assert_eq!(
      chip.events(),
      vec![
        cs(false),
        Event::SpiWrite(vec![0x7D, 0x03]),
        Event::SpiFlush,
        cs(true),
        cs(false),
        Event::SpiWrite(vec![0x7F]),
        Event::SpiRead(1),
        Event::SpiFlush,
        cs(true),
      ]
    );
  }

  #[test]
  fn write_points_then_writes_in_separate_windows() {
    let chip = Chip::new();
    let mut iface = SpiInterface::new(chip.spi(), chip.chip_select());

    assert_eq!(iface.write(0x31, 0x40), Ok(()));
    assert_eq!(chip.register(0x31), 0x40);
    assert_eq!(
      chip.events(),
      vec![
        cs(false),
        Event::SpiWrite(vec![0x7D, 0x31]),
        Event::SpiFlush,
        cs(true),
        cs(false),
        Event::SpiWrite(vec![0x7E, 0x40]),
        Event::SpiFlush,
        cs(true),
      ]
    );
  }

  #[test]
  fn reset_idles_chip_select_then_sends_reset_command() {
    let chip = Chip::new();
    let mut iface = SpiInterface::new(chip.spi(), chip.chip_select());

    assert_eq!(iface.reset(), Ok(()));
    assert_eq!(
      chip.events(),
      vec![cs(true), cs(false), Event::SpiWrite(vec![0x7A, 0x7A]), Event::SpiFlush, cs(true)]
    );
  }

  #[test]
  fn bus_and_pin_expectations_for_a_read() {
    let spi_expectations = [
      SpiTransaction::write_vec(vec![0x7D, 0xFD]),
      SpiTransaction::flush(),
      SpiTransaction::write_vec(vec![0x7F]),
      SpiTransaction::read_vec(vec![0x50]),
      SpiTransaction::flush(),
    ];
    let pin_expectations = [
      PinTransaction::set(PinState::Low),
      PinTransaction::set(PinState::High),
      PinTransaction::set(PinState::Low),
      PinTransaction::set(PinState::High),
    ];
    let mut spi = SpiMock::new(&spi_expectations);
    let mut cs = PinMock::new(&pin_expectations);
    let mut iface = SpiInterface::new(spi.clone(), cs.clone());

    assert_eq!(iface.read(0xFD), Ok(0x50));
    spi.done();
    cs.done();
  }

  /// Bus that fails every transfer.
  struct BrokenBus;

  impl ErrorType for BrokenBus {
    type Error = ErrorKind;
  }

  impl SpiBus for BrokenBus {
    fn read(&mut self, _: &mut [u8]) -> Result<(), ErrorKind> {
      Err(ErrorKind::Other)
    }

    fn write(&mut self, _: &[u8]) -> Result<(), ErrorKind> {
      Err(ErrorKind::Other)
    }

    fn transfer(&mut self, _: &mut [u8], _: &[u8]) -> Result<(), ErrorKind> {
      Err(ErrorKind::Other)
    }

    fn transfer_in_place(&mut self, _: &mut [u8]) -> Result<(), ErrorKind> {
      Err(ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), ErrorKind> {
      Ok(())
    }
  }

  #[test]
  fn bus_failure_still_releases_chip_select() {
    let chip = Chip::new();
    let mut iface = SpiInterface::new(BrokenBus, chip.chip_select());

    assert_eq!(iface.read(0x00), Err(TransportError::Bus(ErrorKind::Other)));
    // The pointer command failed, so the read command is never framed.
    let edges: Vec<Event> = chip.events();
    assert_eq!(edges, vec![cs(false), cs(true)]);
  }
}
