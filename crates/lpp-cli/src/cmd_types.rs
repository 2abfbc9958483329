/// Implementation of `lpp types`: print the channel type registry.
///
/// ```text
/// tag   name                 payload  signed  scale                  unit
/// 0     digital_input        1        no      1                      -
/// 103   temperature          2        yes     0.1                    °C
/// 136   gps                  9        yes     0.0001, 0.0001, 0.01   °, °, m
/// ```
use anyhow::Result;
use lpp_types::{ChannelType, registry};

use crate::TypesArgs;

/// Run the `lpp types` command.
///
/// # Errors
///
/// Infallible today; returns `Result` for symmetry with the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn run(args: &TypesArgs) -> Result<()> {
    let generation = args.generation.into();
    println!(
        "{:<5} {:<20} {:<8} {:<7} {:<22} unit",
        "tag", "name", "payload", "signed", "scale"
    );
    for channel_type in ChannelType::ALL {
        let descriptor = registry::descriptor(channel_type, generation);
        let scale: Vec<String> = descriptor
            .fields
            .iter()
            .map(|field| field.step().to_string())
            .collect();
        println!(
            "{:<5} {:<20} {:<8} {:<7} {:<22} {}",
            descriptor.tag(),
            descriptor.name(),
            descriptor.payload_len(),
            if descriptor.signed { "yes" } else { "no" },
            scale.join(", "),
            if descriptor.unit.is_empty() { "-" } else { descriptor.unit }
        );
    }
    Ok(())
}
