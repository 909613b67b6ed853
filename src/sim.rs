//! Simulated CAP1188 for unit tests.
//!
//! One register file reachable through both buses, plus the RESET / CS lines
//! and a delay provider. Every peripheral appends to one shared event log so
//! tests can check ordering across pins and bus traffic.

extern crate std;

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation, SevenBitAddress};
use embedded_hal::spi::{self, SpiBus};

const SET_ADDRESS_POINTER: u8 = 0x7D;
const WRITE_DATA: u8 = 0x7E;
const READ_DATA: u8 = 0x7F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
  Reset,
  ChipSelect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
  /// Line driven high (`true`) or low (`false`).
  Pin(Line, bool),
  DelayNs(u32),
  SpiWrite(Vec<u8>),
  SpiRead(usize),
  SpiFlush,
  I2cRead { address: u8, register: u8 },
  I2cWrite { address: u8, register: u8, value: u8 },
}

struct State {
  registers: [u8; 256],
  pointer: u8,
  /// Op-code of the current CS window, if one was received.
  command: Option<u8>,
  events: Vec<Event>,
}

#[derive(Clone)]
pub(crate) struct Chip(Rc<RefCell<State>>);

impl Chip {
  pub(crate) fn new() -> Self {
    Self(Rc::new(RefCell::new(State { registers: [0; 256], pointer: 0, command: None, events: Vec::new() })))
  }

  pub(crate) fn with_register(self, register: u8, value: u8) -> Self {
    self.0.borrow_mut().registers[register as usize] = value;
    self
  }

  pub(crate) fn register(&self, register: u8) -> u8 {
    self.0.borrow().registers[register as usize]
  }

  pub(crate) fn events(&self) -> Vec<Event> {
    self.0.borrow().events.clone()
  }

  pub(crate) fn clear_events(&self) {
    self.0.borrow_mut().events.clear();
  }

  pub(crate) fn i2c(&self) -> SimI2c {
    SimI2c(self.clone())
  }

  pub(crate) fn spi(&self) -> SimSpi {
    SimSpi(self.clone())
  }

  pub(crate) fn chip_select(&self) -> SimPin {
    SimPin { chip: self.clone(), line: Line::ChipSelect }
  }

  pub(crate) fn reset(&self) -> SimPin {
    SimPin { chip: self.clone(), line: Line::Reset }
  }

  pub(crate) fn delay(&self) -> SimDelay {
    SimDelay(self.clone())
  }

  fn log(&self, event: Event) {
    self.0.borrow_mut().events.push(event);
  }
}

pub(crate) struct SimI2c(Chip);

impl i2c::ErrorType for SimI2c {
  type Error = Infallible;
}

impl I2c<SevenBitAddress> for SimI2c {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    for op in operations {
      let mut state = self.0 .0.borrow_mut();
      match op {
        Operation::Write(bytes) => {
          if let Some((&register, data)) = bytes.split_first() {
            state.pointer = register;
            for &value in data {
              let p = state.pointer as usize;
              state.registers[p] = value;
              state.events.push(Event::I2cWrite { address, register, value });
            }
          }
        }
        Operation::Read(buf) => {
          let register = state.pointer;
          buf.fill(state.registers[register as usize]);
          state.events.push(Event::I2cRead { address, register });
        }
      }
    }
    Ok(())
  }
}

pub(crate) struct SimSpi(Chip);

impl spi::ErrorType for SimSpi {
  type Error = Infallible;
}

impl SpiBus for SimSpi {
  fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
    let mut state = self.0 .0.borrow_mut();
    let value = match state.command {
      Some(READ_DATA) => state.registers[state.pointer as usize],
      _ => 0,
    };
    words.fill(value);
    state.events.push(Event::SpiRead(words.len()));
    Ok(())
  }

  fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
    let mut state = self.0 .0.borrow_mut();
    for &byte in words {
      let command = state.command;
      match command {
        None => state.command = Some(byte),
        Some(SET_ADDRESS_POINTER) => state.pointer = byte,
        Some(WRITE_DATA) => {
          let p = state.pointer as usize;
          state.registers[p] = byte;
        }
        Some(_) => {}
      }
    }
    state.events.push(Event::SpiWrite(words.to_vec()));
    Ok(())
  }

  fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
    self.write(write)?;
    self.read(read)
  }

  fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
    let out = words.to_vec();
    self.write(&out)?;
    self.read(words)
  }

  fn flush(&mut self) -> Result<(), Infallible> {
    self.0.log(Event::SpiFlush);
    Ok(())
  }
}

pub(crate) struct SimPin {
  chip: Chip,
  line: Line,
}

impl digital::ErrorType for SimPin {
  type Error = Infallible;
}

impl OutputPin for SimPin {
  fn set_low(&mut self) -> Result<(), Infallible> {
    if self.line == Line::ChipSelect {
      // Falling CS opens a new command window.
      self.chip.0.borrow_mut().command = None;
    }
    self.chip.log(Event::Pin(self.line, false));
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Infallible> {
    self.chip.log(Event::Pin(self.line, true));
    Ok(())
  }
}

pub(crate) struct SimDelay(Chip);

impl DelayNs for SimDelay {
  fn delay_ns(&mut self, ns: u32) {
    self.0.log(Event::DelayNs(ns));
  }
}

/// Output pin whose every write fails.
pub(crate) struct BrokenPin;

impl digital::ErrorType for BrokenPin {
  type Error = digital::ErrorKind;
}

impl OutputPin for BrokenPin {
  fn set_low(&mut self) -> Result<(), digital::ErrorKind> {
    Err(digital::ErrorKind::Other)
  }

  fn set_high(&mut self) -> Result<(), digital::ErrorKind> {
    Err(digital::ErrorKind::Other)
  }
}
