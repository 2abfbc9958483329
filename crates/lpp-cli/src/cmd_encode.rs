/// Implementation of `lpp encode`.
///
/// Parses a JSON manifest (see [`EncodeArgs`](crate::EncodeArgs)), encodes
/// every unit in manifest order and writes the frame to `-o`.
use anyhow::{Context, Result, bail};
use lpp_encoder::LppEncoder;
use lpp_types::{ChannelType, Reading, registry};
use serde::Deserialize;

use crate::EncodeArgs;
use crate::input;

// ── Manifest schema ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    uplink: Vec<UplinkEntry>,
    #[serde(default)]
    downlink: Vec<DownlinkEntry>,
    /// Append the `0xFF` downlink terminator.
    #[serde(default)]
    terminate: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UplinkEntry {
    /// Registry name, e.g. `"temperature"`.
    #[serde(rename = "type")]
    type_name: String,
    channel: u8,
    value: Value,
}

/// A scalar for single-field types, an array for the 3-axis types and GPS.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Value {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Value {
    fn as_slice(&self) -> &[f64] {
        match self {
            Value::Scalar(v) => std::slice::from_ref(v),
            Value::Vector(vs) => vs,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DownlinkEntry {
    channel: u8,
    value: f64,
}

// ── Command ──────────────────────────────────────────────────────────────────

/// Run the `lpp encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, names an
/// unknown type, gives the wrong number of values for a type, or the output
/// cannot be written.
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = input::read_all(&args.input)?;
    let manifest: Manifest = serde_json::from_slice(&text)
        .with_context(|| format!("invalid manifest {}", args.input.display()))?;

    let frame = encode_manifest(&manifest)?;
    tracing::debug!(bytes = frame.len(), "encoded frame");

    if args.hex {
        let mut text = hex::encode(&frame);
        text.push('\n');
        input::write_all(&args.output, text.as_bytes())
    } else {
        input::write_all(&args.output, &frame)
    }
}

fn encode_manifest(manifest: &Manifest) -> Result<Vec<u8>> {
    let mut encoder = LppEncoder::with_buffer(Vec::<u8>::new());

    for (index, entry) in manifest.uplink.iter().enumerate() {
        let reading =
            to_reading(entry).with_context(|| format!("uplink entry {index} is invalid"))?;
        encoder.add_reading(&reading);
    }
    for entry in &manifest.downlink {
        encoder.add_port(entry.channel, entry.value);
    }
    if manifest.terminate {
        encoder.add_downlink_terminator();
    }
    Ok(encoder.into_inner())
}

fn to_reading(entry: &UplinkEntry) -> Result<Reading> {
    let Some(channel_type) = ChannelType::from_name(&entry.type_name) else {
        bail!("unknown type {:?}", entry.type_name);
    };
    let descriptor = registry::descriptor(channel_type, lpp_types::Generation::Current);
    let values = entry.value.as_slice();
    if values.len() != descriptor.arity() {
        bail!(
            "{} takes {} value{}, got {}",
            descriptor.name(),
            descriptor.arity(),
            if descriptor.arity() == 1 { "" } else { "s" },
            values.len()
        );
    }
    Ok(Reading::from_raw(
        entry.channel,
        descriptor,
        &descriptor.quantize(values),
    ))
}
