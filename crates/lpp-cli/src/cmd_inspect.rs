/// Implementation of `lpp inspect`.
///
/// Walks the frame one unit at a time and prints where each unit starts,
/// its header, its raw payload bytes and what they decode to.
///
/// # Output format
///
/// ```text
/// Frame: 7 bytes, uplink, current generation
/// 0000  ch=1   type=0x00 digital_input  ff           → channel 1: digital_input = 255
/// 0003  ch=7   type=0x67 temperature    ff 64        → channel 7: temperature = -15.6 °C
/// ---
/// 2 units, 7 bytes consumed
/// ```
use std::fmt::Write as _;

use anyhow::{Context, Result};
use lpp_decoder::{DecoderConfig, LppDecoder};
use lpp_types::Generation;

use crate::InspectArgs;
use crate::cmd_decode::describe;
use crate::input;

/// Run the `lpp inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or a unit is malformed. Units
/// before the malformed one are printed first.
pub fn run(args: &InspectArgs) -> Result<()> {
    let frame = input::read_frame(&args.file, args.hex)?;
    let generation: Generation = args.generation.into();
    println!(
        "Frame: {} bytes, {}, {} generation",
        frame.len(),
        if args.downlink { "downlink" } else { "uplink" },
        generation.name()
    );

    let config = DecoderConfig::with_generation(generation);
    let mut decoder = LppDecoder::with_config(frame.as_slice(), config);
    let mut units = 0usize;

    loop {
        let start = decoder.position();
        let line = if args.downlink {
            let Some(port) = decoder
                .next_port()
                .with_context(|| format!("malformed unit at offset {start}"))?
            else {
                break;
            };
            let end = decoder.position();
            format!(
                "{start:04x}  ch={:<3} {:<12} → port = {}",
                port.channel,
                hex_bytes(&frame[start + 1..end]),
                port.value
            )
        } else {
            let Some(reading) = decoder
                .next_reading()
                .with_context(|| format!("malformed unit at offset {start}"))?
            else {
                break;
            };
            let end = decoder.position();
            format!(
                "{start:04x}  ch={:<3} type={:#04x} {:<14} {:<12} → {}",
                reading.channel(),
                reading.channel_type().wire_id(),
                reading.channel_type().name(),
                hex_bytes(&frame[start + 2..end]),
                describe(&reading)
            )
        };
        println!("{line}");
        units += 1;
    }

    println!("---");
    println!(
        "{units} unit{}, {} bytes consumed",
        if units == 1 { "" } else { "s" },
        decoder.position()
    );
    if decoder.position() < frame.len() {
        println!(
            "{} trailing bytes after terminator",
            frame.len() - decoder.position()
        );
    }
    Ok(())
}

/// Space-separated lowercase hex, e.g. `ff 64`.
fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 3), |mut s, b| {
        if !s.is_empty() {
            s.push(' ');
        }
        let _ = write!(s, "{b:02x}");
        s
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_bytes_spacing() {
        assert_eq!(hex_bytes(&[]), "");
        assert_eq!(hex_bytes(&[0xFF, 0x64]), "ff 64");
    }
}
