//! Conformance tests: golden fixture frames decoded and rendered to insta
//! inline snapshots.
//!
//! Each test reads a committed `.lpp` frame from `tests/golden/`, decodes it
//! and renders one line per unit. A snapshot diff signals either a deliberate
//! format change (regenerate with `generate_golden`, then accept via
//! `cargo insta review`) or a regression.
//!
//! The encoder side is checked too: building the same readings again must
//! reproduce the fixture bytes exactly.

use std::fmt::Write as _;
use std::path::Path;

use insta::assert_snapshot;
use lpp_decoder::{DecoderConfig, LppDecoder};
use lpp_encoder::LppEncoder;
use lpp_types::{PortValue, Reading};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn golden(subpath: &str) -> Vec<u8> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests/golden").join(subpath);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

fn render_readings(readings: &[Reading]) -> String {
    let mut out = String::new();
    for reading in readings {
        let values = reading.values();
        let arity = reading.descriptor().arity();
        writeln!(
            out,
            "ch{} {} {:?}",
            reading.channel(),
            reading.channel_type().name(),
            &values[..arity]
        )
        .unwrap();
    }
    out.truncate(out.trim_end().len());
    out
}

fn render_ports(ports: &[PortValue]) -> String {
    let mut out = String::new();
    for port in ports {
        writeln!(out, "ch{} port {:?}", port.channel, port.value).unwrap();
    }
    out.truncate(out.trim_end().len());
    out
}

// ── uplink_all_types ──────────────────────────────────────────────────────────

#[test]
fn uplink_all_types_decodes() {
    let frame = golden("uplink_all_types/frame.lpp");
    let readings = LppDecoder::uplink_from_slice(&frame).unwrap();
    assert_snapshot!(render_readings(&readings), @r"
    ch1 digital_input [255.0]
    ch2 digital_output [100.0]
    ch3 analog_input [54.5]
    ch4 analog_output [-54.5]
    ch5 luminosity [500.0]
    ch6 presence [50.0]
    ch7 temperature [-15.6]
    ch8 relative_humidity [49.5]
    ch9 accelerometer [-0.424, 0.015, 1.666]
    ch10 barometric_pressure [1073.5]
    ch11 gyrometer [3.55, 5.61, -4.1]
    ch12 gps [52.3655, 4.8885, 21.54]
    ");
}

#[test]
fn uplink_all_types_reencodes_identical() {
    let frame = golden("uplink_all_types/frame.lpp");
    let readings = LppDecoder::uplink_from_slice(&frame).unwrap();

    let mut encoder = LppEncoder::new();
    encoder.add_readings(&readings);
    assert_eq!(encoder.bytes(), frame.as_slice());
}

// ── uplink_multi_unit ─────────────────────────────────────────────────────────

#[test]
fn uplink_multi_unit_decodes() {
    let frame = golden("uplink_multi_unit/frame.lpp");
    let readings = LppDecoder::uplink_from_slice(&frame).unwrap();
    assert_snapshot!(render_readings(&readings), @r"
    ch1 digital_input [255.0]
    ch7 temperature [-15.6]
    ");
}

#[test]
fn uplink_multi_unit_matches_encoder() {
    let mut encoder = LppEncoder::new();
    encoder.add_digital_input(1, 255).add_temperature(7, -15.65);
    assert_eq!(encoder.bytes(), golden("uplink_multi_unit/frame.lpp").as_slice());
}

// ── downlink_ports ────────────────────────────────────────────────────────────

#[test]
fn downlink_ports_decodes() {
    let frame = golden("downlink_ports/frame.lpp");
    let ports = LppDecoder::downlink_from_slice(&frame).unwrap();
    assert_snapshot!(render_ports(&ports), @r"
    ch1 port 1.0
    ch2 port -54.5
    ");
}

#[test]
fn downlink_ports_matches_encoder() {
    let mut encoder = LppEncoder::new();
    encoder
        .add_port(1, 1.0)
        .add_port(2, -54.5)
        .add_downlink_terminator();
    assert_eq!(encoder.bytes(), golden("downlink_ports/frame.lpp").as_slice());
}

#[test]
fn downlink_ports_legacy_reads_terminator_as_channel() {
    let frame = golden("downlink_ports/frame.lpp");
    let mut decoder = LppDecoder::with_config(frame.as_slice(), DecoderConfig::legacy());
    let mut ports: Vec<PortValue> = Vec::new();
    let err = decoder.decode_downlink(&mut ports).unwrap_err();

    // 0xFF opens a third unit whose value is missing.
    assert!(matches!(
        err,
        lpp_decoder::DecodeError::Truncated {
            piece: "downlink value",
            needed: 2,
            available: 0,
            ..
        }
    ));
    assert_snapshot!(render_ports(&ports), @r"
    ch1 port 1.0
    ch2 port -54.5
    ");
}

// ── negative_gps ──────────────────────────────────────────────────────────────

#[test]
fn negative_gps_decodes() {
    let frame = golden("edge_cases/negative_gps.lpp");
    let readings = LppDecoder::uplink_from_slice(&frame).unwrap();
    assert_snapshot!(render_readings(&readings), @"ch1 gps [-0.0879, -4.8885, -1.0]");
}
