/// Implementation of `lpp decode`.
///
/// Decodes a whole frame and prints one line per unit, or a JSON array with
/// `--json`.
///
/// # Output format
///
/// ```text
/// channel 1: digital_input = 255
/// channel 7: temperature = -15.6 °C
/// channel 9: accelerometer = (-0.424, 0.015, 1.666) G
/// ```
///
/// Downlink frames print `channel 1: port = 1`.
///
/// A malformed frame is an error: units decoded before the bad one are still
/// printed, then the command exits with status 1.
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use lpp_decoder::{DecoderConfig, LppDecoder};
use lpp_types::{PortValue, Reading};
use serde::Serialize;

use crate::DecodeArgs;
use crate::input;

/// JSON shape of one uplink unit.
#[derive(Serialize)]
struct ReadingJson<'a> {
    channel: u8,
    #[serde(rename = "type")]
    type_name: &'a str,
    values: &'a [f64],
}

/// JSON shape of one downlink unit.
#[derive(Serialize)]
struct PortJson {
    channel: u8,
    value: f64,
}

/// Run the `lpp decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid hex under
/// `--hex`, or the frame is malformed.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let frame = input::read_frame(&args.file, args.hex)?;
    let config = DecoderConfig::with_generation(args.generation.into());
    let mut decoder = LppDecoder::with_config(frame.as_slice(), config);

    let mut out = io::stdout().lock();
    if args.downlink {
        let mut ports: Vec<PortValue> = Vec::new();
        let result = decoder.decode_downlink(&mut ports);
        print_ports(&mut out, &ports, args.json)?;
        result.with_context(|| format!("malformed downlink frame in {}", args.file.display()))?;
    } else {
        let mut readings: Vec<Reading> = Vec::new();
        let result = decoder.decode_uplink(&mut readings);
        print_readings(&mut out, &readings, args.json)?;
        result.with_context(|| format!("malformed uplink frame in {}", args.file.display()))?;
    }
    Ok(())
}

fn print_readings(out: &mut impl io::Write, readings: &[Reading], json: bool) -> Result<()> {
    if json {
        let values: Vec<[f64; 3]> = readings.iter().map(Reading::values).collect();
        let units: Vec<ReadingJson<'_>> = readings
            .iter()
            .zip(&values)
            .map(|(reading, values)| ReadingJson {
                channel: reading.channel(),
                type_name: reading.channel_type().name(),
                values: &values[..reading.descriptor().arity()],
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &units)?;
        writeln!(out)?;
    } else {
        for reading in readings {
            writeln!(out, "{}", describe(reading))?;
        }
    }
    Ok(())
}

fn print_ports(out: &mut impl io::Write, ports: &[PortValue], json: bool) -> Result<()> {
    if json {
        let units: Vec<PortJson> = ports
            .iter()
            .map(|p| PortJson {
                channel: p.channel,
                value: p.value,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &units)?;
        writeln!(out)?;
    } else {
        for port in ports {
            writeln!(out, "channel {}: port = {}", port.channel, port.value)?;
        }
    }
    Ok(())
}

/// One-line rendering of a reading: `channel N: <type> = <values> <unit>`.
pub fn describe(reading: &Reading) -> String {
    let descriptor = reading.descriptor();
    let values = reading.values();
    let values = &values[..descriptor.arity()];

    let rendered = if let [single] = values {
        single.to_string()
    } else {
        let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
        format!("({})", parts.join(", "))
    };

    let mut line = format!(
        "channel {}: {} = {rendered}",
        reading.channel(),
        descriptor.name()
    );
    if !descriptor.unit.is_empty() {
        line.push(' ');
        line.push_str(descriptor.unit);
    }
    line
}
