/******************************************************************************
 * Refer to the CAP1188 datasheet for more information, available here:      *
 * - https://www.microchip.com/en-us/product/CAP1188                          *
 * ========================================================================== *
 *                        CAP1188 - Registers & Memory Map                    *
*******************************************************************************/

/// Value of [`Register::ProductId`] on a genuine CAP1188.
pub const PRODUCT_ID: u8 = 0x50;

/// Value of [`Register::ManufacturerId`] (Microchip / SMSC).
pub const MANUFACTURER_ID: u8 = 0x5D;

/// Number of capacitive sensor inputs (CS1..CS8) and LED outputs.
pub const CHANNEL_COUNT: u8 = 8;

/// INT bit of [`Register::MainControl`]; latched while any touch is reported.
pub(crate) const MAIN_CONTROL_INT: u8 = 0b0000_0001;

/// 8-bit register addresses of the CAP1188.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
  // Status (0x00..0x0A)
  MainControl = 0x00,
  GeneralStatus = 0x02,
  SensorInputStatus = 0x03,
  LedStatus = 0x04,
  NoiseFlagStatus = 0x0A,

  // Delta counts, one per input (0x10..0x17)
  SensorInput1DeltaCount = 0x10,
  SensorInput2DeltaCount = 0x11,
  SensorInput3DeltaCount = 0x12,
  SensorInput4DeltaCount = 0x13,
  SensorInput5DeltaCount = 0x14,
  SensorInput6DeltaCount = 0x15,
  SensorInput7DeltaCount = 0x16,
  SensorInput8DeltaCount = 0x17,

  // Sensing setup (0x1F..0x2F)
  SensitivityControl = 0x1F,
  Configuration = 0x20,
  SensorInputEnable = 0x21,
  SensorInputConfiguration = 0x22,
  SensorInputConfiguration2 = 0x23,
  AveragingAndSamplingConfig = 0x24,
  CalibrationActivate = 0x26,
  InterruptEnable = 0x27,
  RepeatRateEnable = 0x28,
  MultipleTouchConfiguration = 0x2A,
  MultipleTouchPatternConfiguration = 0x2B,
  MultipleTouchPattern = 0x2D,
  RecalibrationConfiguration = 0x2F,

  // Thresholds (0x30..0x38)
  SensorInput1Threshold = 0x30,
  SensorInput2Threshold = 0x31,
  SensorInput3Threshold = 0x32,
  SensorInput4Threshold = 0x33,
  SensorInput5Threshold = 0x34,
  SensorInput6Threshold = 0x35,
  SensorInput7Threshold = 0x36,
  SensorInput8Threshold = 0x37,
  SensorInputNoiseThreshold = 0x38,

  // Standby (0x40..0x44)
  StandbyChannel = 0x40,
  StandbyConfiguration = 0x41,
  StandbySensitivity = 0x42,
  StandbyThreshold = 0x43,
  Configuration2 = 0x44,

  // Base counts (0x50..0x57)
  SensorInput1BaseCount = 0x50,
  SensorInput2BaseCount = 0x51,
  SensorInput3BaseCount = 0x52,
  SensorInput4BaseCount = 0x53,
  SensorInput5BaseCount = 0x54,
  SensorInput6BaseCount = 0x55,
  SensorInput7BaseCount = 0x56,
  SensorInput8BaseCount = 0x57,

  // LED outputs (0x71..0x95)
  LedOutputType = 0x71,
  SensorInputLedLinking = 0x72,
  LedPolarity = 0x73,
  LedOutputControl = 0x74,
  LedLinkedTransitionControl = 0x77,
  LedMirrorControl = 0x79,
  LedBehavior1 = 0x81,
  LedBehavior2 = 0x82,
  LedPulse1Period = 0x84,
  LedPulse2Period = 0x85,
  LedBreathePeriod = 0x86,
  LedConfig = 0x88,
  LedPulse1Duty = 0x90,
  LedPulse2Duty = 0x91,
  LedBreatheDuty = 0x92,
  LedDirectDuty = 0x93,
  LedDirectRampRates = 0x94,
  LedOffDelay = 0x95,

  // Identity (0xFD..0xFF)
  ProductId = 0xFD,
  ManufacturerId = 0xFE,
  Revision = 0xFF,
}

impl Register {
  /// Threshold register for sensor input `channel` (1-based), if it exists.
  pub const fn threshold(channel: u8) -> Option<u8> {
    match channel {
      1..=CHANNEL_COUNT => Some(Self::SensorInput1Threshold as u8 + (channel - 1)),
      _ => None,
    }
  }
}

impl From<Register> for u8 {
  #[inline]
  fn from(r: Register) -> Self {
    r as u8
  }
}
