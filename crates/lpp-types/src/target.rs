use crate::reading::{PortValue, Reading};

/// Receiver for decoded uplink units, one method per channel type.
///
/// The decoder calls exactly one method per unit, in stream order. Values
/// arrive in physical units (see [`crate::registry`] for the scales).
pub trait UplinkTarget {
  fn digital_input(&mut self, channel: u8, value: u8);
  fn digital_output(&mut self, channel: u8, value: u8);
  fn analog_input(&mut self, channel: u8, value: f64);
  fn analog_output(&mut self, channel: u8, value: f64);
  fn luminosity(&mut self, channel: u8, lux: u16);
  fn presence(&mut self, channel: u8, value: u8);
  fn temperature(&mut self, channel: u8, celsius: f64);
  fn relative_humidity(&mut self, channel: u8, percent: f64);
  fn accelerometer(&mut self, channel: u8, x: f64, y: f64, z: f64);
  fn barometric_pressure(&mut self, channel: u8, hpa: f64);
  fn gyrometer(&mut self, channel: u8, x: f64, y: f64, z: f64);
  fn gps(&mut self, channel: u8, latitude: f64, longitude: f64, altitude: f64);
}

/// Receiver for decoded downlink units.
pub trait DownlinkTarget {
  fn port(&mut self, channel: u8, value: f64);
}

/// Collects every unit as a [`Reading`], in order.
impl UplinkTarget for Vec<Reading> {
  fn digital_input(&mut self, channel: u8, value: u8) {
    self.push(Reading::DigitalInput { channel, value });
  }

  fn digital_output(&mut self, channel: u8, value: u8) {
    self.push(Reading::DigitalOutput { channel, value });
  }

  fn analog_input(&mut self, channel: u8, value: f64) {
    self.push(Reading::AnalogInput { channel, value });
  }

  fn analog_output(&mut self, channel: u8, value: f64) {
    self.push(Reading::AnalogOutput { channel, value });
  }

  fn luminosity(&mut self, channel: u8, lux: u16) {
    self.push(Reading::Luminosity { channel, lux });
  }

  fn presence(&mut self, channel: u8, value: u8) {
    self.push(Reading::Presence { channel, value });
  }

  fn temperature(&mut self, channel: u8, celsius: f64) {
    self.push(Reading::Temperature { channel, celsius });
  }

  fn relative_humidity(&mut self, channel: u8, percent: f64) {
    self.push(Reading::RelativeHumidity { channel, percent });
  }

  fn accelerometer(&mut self, channel: u8, x: f64, y: f64, z: f64) {
    self.push(Reading::Accelerometer { channel, x, y, z });
  }

  fn barometric_pressure(&mut self, channel: u8, hpa: f64) {
    self.push(Reading::BarometricPressure { channel, hpa });
  }

  fn gyrometer(&mut self, channel: u8, x: f64, y: f64, z: f64) {
    self.push(Reading::Gyrometer { channel, x, y, z });
  }

  fn gps(&mut self, channel: u8, latitude: f64, longitude: f64, altitude: f64) {
    self.push(Reading::Gps {
      channel,
      latitude,
      longitude,
      altitude,
    });
  }
}

impl DownlinkTarget for Vec<PortValue> {
  fn port(&mut self, channel: u8, value: f64) {
    self.push(PortValue::new(channel, value));
  }
}
