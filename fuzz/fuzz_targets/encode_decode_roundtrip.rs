#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use lpp_decoder::LppDecoder;
use lpp_encoder::LppEncoder;
use lpp_types::Reading;

#[derive(Debug, Arbitrary)]
enum FuzzReading {
    DigitalInput { channel: u8, value: u8 },
    DigitalOutput { channel: u8, value: u8 },
    AnalogInput { channel: u8, value: i16 },
    AnalogOutput { channel: u8, value: i16 },
    Luminosity { channel: u8, lux: u16 },
    Presence { channel: u8, value: u8 },
    Temperature { channel: u8, value: i16 },
    RelativeHumidity { channel: u8, value: u8 },
    Accelerometer { channel: u8, x: i16, y: i16, z: i16 },
    BarometricPressure { channel: u8, value: i16 },
    Gyrometer { channel: u8, x: i16, y: i16, z: i16 },
    Gps { channel: u8, lat: i32, lon: i32, alt: i32 },
}

/// Map raw grid integers to physical values, so every reading sits exactly
/// on the quantization grid and must survive the roundtrip unchanged.
fn to_reading(fuzz: &FuzzReading) -> Reading {
    let s24 = |v: i32| f64::from((v << 8) >> 8);
    match *fuzz {
        FuzzReading::DigitalInput { channel, value } => Reading::DigitalInput { channel, value },
        FuzzReading::DigitalOutput { channel, value } => Reading::DigitalOutput { channel, value },
        FuzzReading::AnalogInput { channel, value } => Reading::AnalogInput { channel, value: f64::from(value) / 100.0 },
        FuzzReading::AnalogOutput { channel, value } => Reading::AnalogOutput { channel, value: f64::from(value) / 100.0 },
        FuzzReading::Luminosity { channel, lux } => Reading::Luminosity { channel, lux },
        FuzzReading::Presence { channel, value } => Reading::Presence { channel, value },
        FuzzReading::Temperature { channel, value } => Reading::Temperature { channel, celsius: f64::from(value) / 10.0 },
        FuzzReading::RelativeHumidity { channel, value } => Reading::RelativeHumidity { channel, percent: f64::from(value) / 2.0 },
        FuzzReading::Accelerometer { channel, x, y, z } => Reading::Accelerometer {
            channel,
            x: f64::from(x) / 1000.0,
            y: f64::from(y) / 1000.0,
            z: f64::from(z) / 1000.0,
        },
        FuzzReading::BarometricPressure { channel, value } => Reading::BarometricPressure { channel, hpa: f64::from(value) / 10.0 },
        FuzzReading::Gyrometer { channel, x, y, z } => Reading::Gyrometer {
            channel,
            x: f64::from(x) / 100.0,
            y: f64::from(y) / 100.0,
            z: f64::from(z) / 100.0,
        },
        FuzzReading::Gps { channel, lat, lon, alt } => Reading::Gps {
            channel,
            latitude: s24(lat) / 10_000.0,
            longitude: s24(lon) / 10_000.0,
            altitude: s24(alt) / 100.0,
        },
    }
}

// Fuzz target: LppEncoder -> LppDecoder roundtrip.
//
// Every on-grid reading the encoder accepts must decode to itself, in order.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = Vec::<FuzzReading>::arbitrary(&mut u) else {
        return;
    };

    let readings: Vec<Reading> = input.iter().take(64).map(to_reading).collect();

    let mut encoder = LppEncoder::new();
    encoder.add_readings(&readings);

    let decoded = LppDecoder::uplink_from_slice(encoder.bytes());
    assert!(decoded.is_ok(), "decoder failed on valid encoder output: {:?}", decoded.err());
    assert_eq!(decoded.unwrap(), readings);
});
