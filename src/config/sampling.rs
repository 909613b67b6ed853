use bitfield_struct::bitfield;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{Cap1188, Error, Interface, Register};

impl<IFACE, E, RST, D> Cap1188<IFACE, RST, D>
where
  IFACE: Interface<Error = E>,
  RST: OutputPin,
  D: DelayNs,
{
  /// Program the sampling used while the device is in the Active state.
  pub fn set_averaging_and_sampling_config(&mut self, config: AveragingAndSampling) -> Result<(), Error<E>> {
    self.write(Register::AveragingAndSamplingConfig, config.into_bits())
  }

  /// Read back the Active state sampling.
  pub fn averaging_and_sampling_config(&mut self) -> Result<AveragingAndSampling, Error<E>> {
    self.read(Register::AveragingAndSamplingConfig).map(AveragingAndSampling::from_bits)
  }

  /// Program the sampling used for the standby channels.
  pub fn set_standby_configuration(&mut self, config: StandbyConfiguration) -> Result<(), Error<E>> {
    self.write(Register::StandbyConfiguration, config.into_bits())
  }

  pub fn standby_configuration(&mut self) -> Result<StandbyConfiguration, Error<E>> {
    self.read(Register::StandbyConfiguration).map(StandbyConfiguration::from_bits)
  }
}

/// Averaging and Sampling Configuration register (0x24).
///
/// Controls how many samples are taken per measurement, how long each sample
/// takes, and the overall cycle time for all active inputs.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AveragingAndSampling {
  /// Desired time between the start of two sensing cycles. Only honoured if
  /// all samples fit in it.
  #[bits(2)]
  pub cycle_time: CycleTime,
  #[bits(2)]
  pub sampling_time: SamplingTime,
  #[bits(3)]
  pub samples: Samples,
  __: bool,
}

impl AveragingAndSampling {
  /// Register contents after power-on: 8 samples, 1.28 ms, 70 ms cycle.
  pub const POWER_ON: Self = Self::from_bits(0x39);
}

/// Standby Configuration register (0x41).
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StandbyConfiguration {
  #[bits(2)]
  pub cycle_time: CycleTime,
  #[bits(2)]
  pub sampling_time: SamplingTime,
  #[bits(3)]
  pub samples: Samples,
  /// Average the samples, or accumulate (sum) them.
  #[bits(1)]
  pub accumulation: Accumulation,
}

impl StandbyConfiguration {
  /// Register contents after power-on: averaging 8 samples, 1.28 ms, 70 ms cycle.
  pub const POWER_ON: Self = Self::from_bits(0x39);
}

/// Number of samples taken per measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Samples {
  X1 = 0b000,
  X2 = 0b001,
  X4 = 0b010,
  X8 = 0b011,
  X16 = 0b100,
  X32 = 0b101,
  X64 = 0b110,
  X128 = 0b111,
}

impl Samples {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0b111 {
      0b000 => Self::X1,
      0b001 => Self::X2,
      0b010 => Self::X4,
      0b011 => Self::X8,
      0b100 => Self::X16,
      0b101 => Self::X32,
      0b110 => Self::X64,
      _ => Self::X128,
    }
  }
}

/// Time taken by a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SamplingTime {
  Us320 = 0b00,
  Us640 = 0b01,
  Us1280 = 0b10,
  Us2560 = 0b11,
}

impl SamplingTime {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::Us320,
      0b01 => Self::Us640,
      0b10 => Self::Us1280,
      _ => Self::Us2560,
    }
  }
}

/// Target time between the start of two sensing cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CycleTime {
  Ms35 = 0b00,
  Ms70 = 0b01,
  Ms105 = 0b10,
  Ms140 = 0b11,
}

impl CycleTime {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::Ms35,
      0b01 => Self::Ms70,
      0b10 => Self::Ms105,
      _ => Self::Ms140,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Accumulation {
  Average = 0b0,
  Sum = 0b1,
}

impl Accumulation {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits & 0b1 {
      0b0 => Self::Average,
      _ => Self::Sum,
    }
  }
}
