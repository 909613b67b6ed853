use core::fmt;

/// Failure of a single register transfer on the active bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<E> {
  /// The I²C or SPI peripheral reported an error.
  Bus(E),
  /// The SPI chip-select line could not be driven.
  ChipSelect,
}

/// Errors that can occur while interacting with the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
  /// A register transfer failed; no retry was attempted.
  Transport(TransportError<E>),
  /// The RESET line could not be driven.
  Reset,
  /// Sensor input number outside `1..=8`. Nothing was sent to the device.
  InvalidChannel(u8),
  /// Simultaneous touch limit outside `1..=4`. Nothing was sent to the device.
  InvalidTouchCount(u8),
  /// The device reported an unexpected product identifier.
  InvalidChipId(u8),
  /// A register operation was attempted before [`crate::Cap1188::init`].
  NotInitialized,
}

impl<E> From<TransportError<E>> for Error<E> {
  fn from(e: TransportError<E>) -> Self {
    Error::Transport(e)
  }
}

impl<E: fmt::Debug> fmt::Display for TransportError<E> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      TransportError::Bus(e) => write!(f, "bus error: {:?}", e),
      TransportError::ChipSelect => write!(f, "chip-select pin error"),
    }
  }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Error::Transport(e) => write!(f, "transport error: {}", e),
      Error::Reset => write!(f, "reset pin error"),
      Error::InvalidChannel(c) => write!(f, "invalid sensor input {} (must be 1-8)", c),
      Error::InvalidTouchCount(n) => write!(f, "invalid simultaneous touch count {} (must be 1-4)", n),
      Error::InvalidChipId(id) => write!(f, "unexpected product id {:#04x}", id),
      Error::NotInitialized => write!(f, "driver not initialized"),
    }
  }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for TransportError<E> {
  fn format(&self, f: defmt::Formatter) {
    match self {
      TransportError::Bus(e) => defmt::write!(f, "Bus error: {}", e),
      TransportError::ChipSelect => defmt::write!(f, "Chip-select pin error"),
    }
  }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
  fn format(&self, f: defmt::Formatter) {
    match self {
      Error::Transport(e) => defmt::write!(f, "Transport error: {}", e),
      Error::Reset => defmt::write!(f, "Reset pin error"),
      Error::InvalidChannel(c) => defmt::write!(f, "Invalid sensor input {}", c),
      Error::InvalidTouchCount(n) => defmt::write!(f, "Invalid simultaneous touch count {}", n),
      Error::InvalidChipId(id) => defmt::write!(f, "Unexpected product id {=u8:#04x}", id),
      Error::NotInitialized => defmt::write!(f, "Not initialized"),
    }
  }
}
