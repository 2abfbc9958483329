//! Golden fixture generator for the LPP conformance test suite.
//!
//! Writes every fixture under `tests/golden/`. Run it after a deliberate
//! wire-format change, then review the diff of the committed `.lpp` files.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p lpp-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Path                                | Contents                                  |
//! |-------------------------------------|-------------------------------------------|
//! | uplink_all_types/frame.lpp          | One unit of each of the 12 types          |
//! | uplink_multi_unit/frame.lpp         | Digital input + temperature               |
//! | downlink_ports/frame.lpp            | Two ports + `0xFF` terminator             |
//! | edge_cases/negative_gps.lpp         | GPS with all three fields negative        |
//! | edge_cases/unknown_type.lpp         | Handcrafted: valid unit, then tag 0x42    |
//! | edge_cases/truncated_gps.lpp        | Handcrafted: GPS header + 4 payload bytes |
//! | edge_cases/trailing_downlink.lpp    | Port, terminator, then 2 stray bytes      |
//! | edge_cases/legacy_humidity.lpp      | Handcrafted: humidity byte 0xFE           |

#![allow(clippy::pedantic)]

use std::path::Path;

use lpp_encoder::LppEncoder;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_uplink_all_types(&golden_dir);
    generate_uplink_multi_unit(&golden_dir);
    generate_downlink_ports(&golden_dir);
    generate_edge_cases(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {} ({})", path.display(), hex::encode(data));
}

// ── Fixture generators ────────────────────────────────────────────────────────

fn generate_uplink_all_types(golden: &Path) {
    let mut encoder = LppEncoder::new();
    encoder
        .add_digital_input(1, 255)
        .add_digital_output(2, 100)
        .add_analog_input(3, 54.5)
        .add_analog_output(4, -54.5)
        .add_luminosity(5, 500)
        .add_presence(6, 50)
        .add_temperature(7, -15.6)
        .add_relative_humidity(8, 49.5)
        .add_accelerometer(9, -0.424, 0.015, 1.666)
        .add_barometric_pressure(10, 1073.5)
        .add_gyrometer(11, 3.55, 5.61, -4.1)
        .add_gps(12, 52.3655, 4.8885, 21.54);
    write_file(&golden.join("uplink_all_types/frame.lpp"), encoder.bytes());
}

fn generate_uplink_multi_unit(golden: &Path) {
    let mut encoder = LppEncoder::new();
    encoder.add_digital_input(1, 255).add_temperature(7, -15.65);
    write_file(&golden.join("uplink_multi_unit/frame.lpp"), encoder.bytes());
}

fn generate_downlink_ports(golden: &Path) {
    let mut encoder = LppEncoder::new();
    encoder
        .add_port(1, 1.0)
        .add_port(2, -54.5)
        .add_downlink_terminator();
    write_file(&golden.join("downlink_ports/frame.lpp"), encoder.bytes());
}

fn generate_edge_cases(golden: &Path) {
    let edge = golden.join("edge_cases");

    let mut encoder = LppEncoder::new();
    encoder.add_gps(1, -0.0879, -4.8885, -1.0);
    write_file(&edge.join("negative_gps.lpp"), encoder.bytes());

    // Analog input on channel 3, then a header with unregistered tag 0x42.
    write_file(&edge.join("unknown_type.lpp"), &[3, 2, 21, 74, 1, 0x42, 0, 0]);

    // GPS needs 9 payload bytes; only 4 follow the header.
    write_file(&edge.join("truncated_gps.lpp"), &[12, 136, 7, 253, 135, 0]);

    let mut encoder = LppEncoder::new();
    encoder.add_port(1, 1.0).add_downlink_terminator();
    let mut frame = encoder.bytes().to_vec();
    frame.extend_from_slice(&[9, 9]);
    write_file(&edge.join("trailing_downlink.lpp"), &frame);

    write_file(&edge.join("legacy_humidity.lpp"), &[8, 104, 0xFE]);
}
