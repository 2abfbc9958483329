//! Roundtrip integration tests for the LPP encode → decode pipeline.
//!
//! For every channel type, a value inside the representable range comes back
//! within one half quantization step of what was encoded. Values already on
//! the quantization grid come back exactly, and decoded readings re-encode
//! to byte-identical frames.

use lpp_decoder::LppDecoder;
use lpp_encoder::LppEncoder;
use lpp_types::registry::{self, FieldSpec};
use lpp_types::{ChannelType, Generation, PortValue, Reading};

/// Encode one reading, decode it back and return the single result.
fn roundtrip(reading: &Reading) -> Reading {
    let mut encoder = LppEncoder::new();
    encoder.add_reading(reading);
    let decoded = LppDecoder::uplink_from_slice(encoder.bytes()).unwrap();
    assert_eq!(decoded.len(), 1, "one unit in, one unit out");
    decoded[0]
}

fn assert_within_step(type_name: &str, fields: &[FieldSpec], sent: &[f64], got: &[f64]) {
    for ((field, sent), got) in fields.iter().zip(sent).zip(got) {
        let tolerance = field.step() / 2.0 + 1e-9;
        assert!(
            (sent - got).abs() <= tolerance,
            "{type_name}: sent {sent}, got {got}, tolerance {tolerance}"
        );
    }
}

// ── Per-type tolerance ───────────────────────────────────────────────────────

#[test]
fn every_type_within_half_a_step() {
    let samples = [
        Reading::DigitalInput { channel: 1, value: 0 },
        Reading::DigitalOutput { channel: 2, value: 200 },
        Reading::AnalogInput { channel: 3, value: 12.345 },
        Reading::AnalogOutput { channel: 4, value: -327.67 },
        Reading::Luminosity { channel: 5, lux: 65_535 },
        Reading::Presence { channel: 6, value: 1 },
        Reading::Temperature { channel: 7, celsius: 21.37 },
        Reading::RelativeHumidity { channel: 8, percent: 63.3 },
        Reading::Accelerometer { channel: 9, x: 0.0004, y: -1.2345, z: 32.767 },
        Reading::BarometricPressure { channel: 10, hpa: 1013.25 },
        Reading::Gyrometer { channel: 11, x: -0.004, y: 100.0, z: 12.349 },
        Reading::Gps { channel: 12, latitude: -33.86785, longitude: 151.20732, altitude: -12.3 },
    ];

    for sample in &samples {
        let decoded = roundtrip(sample);
        assert_eq!(decoded.channel(), sample.channel());
        assert_eq!(decoded.channel_type(), sample.channel_type());

        let descriptor = registry::descriptor(sample.channel_type(), Generation::Current);
        assert_within_step(
            descriptor.name(),
            descriptor.fields,
            &sample.values(),
            &decoded.values(),
        );
    }
}

#[test]
fn every_registered_type_is_covered() {
    let covered: Vec<ChannelType> = registry::all().iter().map(|d| d.channel_type).collect();
    assert_eq!(covered, ChannelType::ALL.to_vec());
}

// ── Exact roundtrips ─────────────────────────────────────────────────────────

#[test]
fn grid_values_roundtrip_exactly() {
    let samples = [
        Reading::Temperature { channel: 0, celsius: -40.0 },
        Reading::Temperature { channel: 0, celsius: 85.5 },
        Reading::RelativeHumidity { channel: 0, percent: 100.0 },
        Reading::BarometricPressure { channel: 0, hpa: 3276.7 },
        Reading::AnalogInput { channel: 0, value: -327.68 },
        Reading::Gps { channel: 0, latitude: 838.8607, longitude: -838.8608, altitude: 0.01 },
    ];
    for sample in &samples {
        assert_eq!(roundtrip(sample), *sample);
    }
}

#[test]
fn decoded_frame_reencodes_identically() {
    let mut encoder = LppEncoder::new();
    encoder
        .add_temperature(3, 22.5)
        .add_relative_humidity(4, 55.5)
        .add_accelerometer(5, 0.1, -0.2, 0.98)
        .add_gps(6, 47.3769, 8.5417, 408.0)
        .add_luminosity(7, 1234);
    let original = encoder.bytes().to_vec();

    let readings = LppDecoder::uplink_from_slice(&original).unwrap();
    let mut again = LppEncoder::new();
    again.add_readings(&readings);
    assert_eq!(again.bytes(), original.as_slice());
}

#[test]
fn downlink_roundtrip() {
    let values = [0.0, 1.0, -1.0, 327.67, -327.68, 0.01, 12.34];

    let mut encoder = LppEncoder::new();
    for (channel, value) in (0u8..).zip(values) {
        encoder.add_port(channel, value);
    }
    encoder.add_downlink_terminator();

    let ports = LppDecoder::downlink_from_slice(encoder.bytes()).unwrap();
    let expected: Vec<PortValue> = (0u8..)
        .zip(values)
        .map(|(channel, value)| PortValue::new(channel, value))
        .collect();
    assert_eq!(ports, expected);
}

// ── Channel identity ─────────────────────────────────────────────────────────

#[test]
fn every_channel_byte_survives() {
    let mut encoder = LppEncoder::new();
    for channel in 0..=u8::MAX {
        encoder.add_presence(channel, channel);
    }
    let readings = LppDecoder::uplink_from_slice(encoder.bytes()).unwrap();
    assert_eq!(readings.len(), 256);
    for (expected, reading) in (0..=u8::MAX).zip(&readings) {
        assert_eq!(*reading, Reading::Presence { channel: expected, value: expected });
    }
}
