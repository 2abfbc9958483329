use bytes::BufMut;

use crate::channel_type::ChannelType;
use crate::error::TypeError;
use crate::generation::Generation;
use crate::registry::{self, DOWNLINK_PORT, MAX_FIELDS, RawFields, TypeDescriptor};
use crate::target::{DownlinkTarget, UplinkTarget};

/// One decoded uplink unit, or one reading about to be encoded.
///
/// Each variant carries the caller's channel and the value(s) in physical
/// units. Integer-valued types keep their integer type; everything scaled is
/// an `f64`, already quantized when it came off the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
  DigitalInput { channel: u8, value: u8 },
  DigitalOutput { channel: u8, value: u8 },
  AnalogInput { channel: u8, value: f64 },
  AnalogOutput { channel: u8, value: f64 },
  Luminosity { channel: u8, lux: u16 },
  Presence { channel: u8, value: u8 },
  Temperature { channel: u8, celsius: f64 },
  RelativeHumidity { channel: u8, percent: f64 },
  Accelerometer { channel: u8, x: f64, y: f64, z: f64 },
  BarometricPressure { channel: u8, hpa: f64 },
  Gyrometer { channel: u8, x: f64, y: f64, z: f64 },
  Gps {
    channel: u8,
    latitude: f64,
    longitude: f64,
    altitude: f64,
  },
}

impl Reading {
  #[must_use]
  pub fn channel(&self) -> u8 {
    match *self {
      Self::DigitalInput { channel, .. }
      | Self::DigitalOutput { channel, .. }
      | Self::AnalogInput { channel, .. }
      | Self::AnalogOutput { channel, .. }
      | Self::Luminosity { channel, .. }
      | Self::Presence { channel, .. }
      | Self::Temperature { channel, .. }
      | Self::RelativeHumidity { channel, .. }
      | Self::Accelerometer { channel, .. }
      | Self::BarometricPressure { channel, .. }
      | Self::Gyrometer { channel, .. }
      | Self::Gps { channel, .. } => channel,
    }
  }

  #[must_use]
  pub fn channel_type(&self) -> ChannelType {
    match self {
      Self::DigitalInput { .. } => ChannelType::DigitalInput,
      Self::DigitalOutput { .. } => ChannelType::DigitalOutput,
      Self::AnalogInput { .. } => ChannelType::AnalogInput,
      Self::AnalogOutput { .. } => ChannelType::AnalogOutput,
      Self::Luminosity { .. } => ChannelType::Luminosity,
      Self::Presence { .. } => ChannelType::Presence,
      Self::Temperature { .. } => ChannelType::Temperature,
      Self::RelativeHumidity { .. } => ChannelType::RelativeHumidity,
      Self::Accelerometer { .. } => ChannelType::Accelerometer,
      Self::BarometricPressure { .. } => ChannelType::BarometricPressure,
      Self::Gyrometer { .. } => ChannelType::Gyrometer,
      Self::Gps { .. } => ChannelType::Gps,
    }
  }

  /// Physical values in field order. Only the first
  /// [`arity`](TypeDescriptor::arity) entries are meaningful.
  #[must_use]
  pub fn values(&self) -> [f64; MAX_FIELDS] {
    match *self {
      Self::DigitalInput { value, .. }
      | Self::DigitalOutput { value, .. }
      | Self::Presence { value, .. } => [f64::from(value), 0.0, 0.0],
      Self::Luminosity { lux, .. } => [f64::from(lux), 0.0, 0.0],
      Self::AnalogInput { value, .. } | Self::AnalogOutput { value, .. } => [value, 0.0, 0.0],
      Self::Temperature { celsius, .. } => [celsius, 0.0, 0.0],
      Self::RelativeHumidity { percent, .. } => [percent, 0.0, 0.0],
      Self::BarometricPressure { hpa, .. } => [hpa, 0.0, 0.0],
      Self::Accelerometer { x, y, z, .. } | Self::Gyrometer { x, y, z, .. } => [x, y, z],
      Self::Gps {
        latitude,
        longitude,
        altitude,
        ..
      } => [latitude, longitude, altitude],
    }
  }

  /// Build a reading from raw wire integers laid out by `descriptor`.
  #[must_use]
  pub fn from_raw(channel: u8, descriptor: &TypeDescriptor, raw: &RawFields) -> Self {
    // Unsigned 1- and 2-byte fields always fit their target type.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (byte, word) = (raw.get(0) as u8, raw.get(0) as u16);
    let [a, b, c] = descriptor.physical(raw);

    match descriptor.channel_type {
      ChannelType::DigitalInput => Self::DigitalInput { channel, value: byte },
      ChannelType::DigitalOutput => Self::DigitalOutput { channel, value: byte },
      ChannelType::AnalogInput => Self::AnalogInput { channel, value: a },
      ChannelType::AnalogOutput => Self::AnalogOutput { channel, value: a },
      ChannelType::Luminosity => Self::Luminosity { channel, lux: word },
      ChannelType::Presence => Self::Presence { channel, value: byte },
      ChannelType::Temperature => Self::Temperature { channel, celsius: a },
      ChannelType::RelativeHumidity => Self::RelativeHumidity { channel, percent: a },
      ChannelType::Accelerometer => Self::Accelerometer { channel, x: a, y: b, z: c },
      ChannelType::BarometricPressure => Self::BarometricPressure { channel, hpa: a },
      ChannelType::Gyrometer => Self::Gyrometer { channel, x: a, y: b, z: c },
      ChannelType::Gps => Self::Gps {
        channel,
        latitude: a,
        longitude: b,
        altitude: c,
      },
    }
  }

  /// Raw wire integers for this reading, before width truncation.
  #[must_use]
  pub fn raw_fields(&self) -> RawFields {
    match *self {
      Self::DigitalInput { value, .. }
      | Self::DigitalOutput { value, .. }
      | Self::Presence { value, .. } => RawFields::from_slice(&[i64::from(value)]),
      Self::Luminosity { lux, .. } => RawFields::from_slice(&[i64::from(lux)]),
      _ => self.descriptor().quantize(&self.values()),
    }
  }

  /// Registry row for this reading's type. Encoding is generation-neutral,
  /// so the current-generation row is used.
  #[must_use]
  pub fn descriptor(&self) -> &'static TypeDescriptor {
    registry::descriptor(self.channel_type(), Generation::Current)
  }

  /// Write this reading's payload (no header) to `out`.
  pub fn encode_payload<B: BufMut + ?Sized>(&self, out: &mut B) {
    self.descriptor().write_raw(&self.raw_fields(), out);
  }

  /// Decode a payload (no header) for a known type.
  ///
  /// # Errors
  ///
  /// Returns [`TypeError::PayloadLength`] if `payload` has the wrong size.
  pub fn decode_payload(
    channel: u8,
    channel_type: ChannelType,
    payload: &[u8],
    generation: Generation,
  ) -> Result<Self, TypeError> {
    let descriptor = registry::descriptor(channel_type, generation);
    let raw = descriptor.read_raw(payload)?;
    Ok(Self::from_raw(channel, descriptor, &raw))
  }

  /// Deliver this reading to the matching method of `target`.
  pub fn dispatch<T: UplinkTarget + ?Sized>(&self, target: &mut T) {
    match *self {
      Self::DigitalInput { channel, value } => target.digital_input(channel, value),
      Self::DigitalOutput { channel, value } => target.digital_output(channel, value),
      Self::AnalogInput { channel, value } => target.analog_input(channel, value),
      Self::AnalogOutput { channel, value } => target.analog_output(channel, value),
      Self::Luminosity { channel, lux } => target.luminosity(channel, lux),
      Self::Presence { channel, value } => target.presence(channel, value),
      Self::Temperature { channel, celsius } => target.temperature(channel, celsius),
      Self::RelativeHumidity { channel, percent } => target.relative_humidity(channel, percent),
      Self::Accelerometer { channel, x, y, z } => target.accelerometer(channel, x, y, z),
      Self::BarometricPressure { channel, hpa } => target.barometric_pressure(channel, hpa),
      Self::Gyrometer { channel, x, y, z } => target.gyrometer(channel, x, y, z),
      Self::Gps {
        channel,
        latitude,
        longitude,
        altitude,
      } => target.gps(channel, latitude, longitude, altitude),
    }
  }
}

/// One downlink unit: set `channel` to `value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortValue {
  pub channel: u8,
  pub value: f64,
}

impl PortValue {
  #[must_use]
  pub fn new(channel: u8, value: f64) -> Self {
    Self { channel, value }
  }

  #[must_use]
  pub fn from_raw(channel: u8, raw: i64) -> Self {
    Self::new(channel, DOWNLINK_PORT.physical(raw))
  }

  /// Quantized value, before truncation to 16 bits.
  #[must_use]
  pub fn raw(&self) -> i64 {
    DOWNLINK_PORT.quantize(self.value)
  }

  pub fn dispatch<T: DownlinkTarget + ?Sized>(&self, target: &mut T) {
    target.port(self.channel, self.value);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn payload(reading: &Reading) -> Vec<u8> {
    let mut out = Vec::new();
    reading.encode_payload(&mut out);
    out
  }

  #[test]
  fn reference_payloads() {
    let cases: [(Reading, &[u8]); 12] = [
      (Reading::DigitalInput { channel: 1, value: 255 }, &[255]),
      (Reading::DigitalOutput { channel: 2, value: 100 }, &[100]),
      (Reading::AnalogInput { channel: 3, value: 54.5 }, &[21, 74]),
      (Reading::AnalogOutput { channel: 4, value: -54.5 }, &[234, 182]),
      (Reading::Luminosity { channel: 5, lux: 500 }, &[1, 244]),
      (Reading::Presence { channel: 6, value: 50 }, &[50]),
      (Reading::Temperature { channel: 7, celsius: -15.65 }, &[255, 100]),
      (Reading::RelativeHumidity { channel: 8, percent: 49.65 }, &[99]),
      (
        Reading::Accelerometer { channel: 9, x: -0.424, y: 0.015, z: 1.666 },
        &[254, 88, 0, 15, 6, 130],
      ),
      (Reading::BarometricPressure { channel: 10, hpa: 1073.5 }, &[41, 239]),
      (
        Reading::Gyrometer { channel: 11, x: 3.55, y: 5.61, z: -4.10 },
        &[1, 99, 2, 49, 254, 102],
      ),
      (
        Reading::Gps {
          channel: 12,
          latitude: 52.3655,
          longitude: 4.8885,
          altitude: 21.54,
        },
        &[7, 253, 135, 0, 190, 245, 0, 8, 106],
      ),
    ];

    for (reading, bytes) in cases {
      assert_eq!(payload(&reading), bytes, "payload mismatch for {reading:?}");
    }
  }

  #[test]
  fn decode_quantizes() {
    let reading =
      Reading::decode_payload(7, ChannelType::Temperature, &[255, 100], Generation::Current)
        .unwrap();
    assert_eq!(reading, Reading::Temperature { channel: 7, celsius: -15.6 });
  }

  #[test]
  fn decode_integer_types_keep_integers() {
    let lux =
      Reading::decode_payload(5, ChannelType::Luminosity, &[0xFF, 0xFF], Generation::Current)
        .unwrap();
    assert_eq!(lux, Reading::Luminosity { channel: 5, lux: 65_535 });

    let din =
      Reading::decode_payload(1, ChannelType::DigitalInput, &[0xFF], Generation::Legacy).unwrap();
    assert_eq!(din, Reading::DigitalInput { channel: 1, value: 255 });
  }

  #[test]
  fn decode_rejects_short_payload() {
    let err = Reading::decode_payload(1, ChannelType::Gps, &[0; 4], Generation::Current);
    assert!(matches!(err, Err(TypeError::PayloadLength { expected: 9, actual: 4, .. })));
  }

  #[test]
  fn channel_and_type_accessors() {
    let reading = Reading::Gyrometer { channel: 11, x: 0.0, y: 0.0, z: 0.0 };
    assert_eq!(reading.channel(), 11);
    assert_eq!(reading.channel_type(), ChannelType::Gyrometer);
    assert_eq!(reading.descriptor().payload_len(), 6);
  }

  #[test]
  fn port_value_scaling() {
    assert_eq!(PortValue::from_raw(1, 100), PortValue::new(1, 1.0));
    assert_eq!(PortValue::new(2, -54.5).raw(), -5450);
  }

  #[test]
  fn dispatch_reaches_collector() {
    let mut seen: Vec<Reading> = Vec::new();
    let reading = Reading::Presence { channel: 6, value: 1 };
    reading.dispatch(&mut seen);
    assert_eq!(seen, vec![reading]);

    let mut ports: Vec<PortValue> = Vec::new();
    PortValue::new(3, 2.5).dispatch(&mut ports);
    assert_eq!(ports, vec![PortValue::new(3, 2.5)]);
  }
}
