#![no_main]

use libfuzzer_sys::fuzz_target;
use lpp_decoder::{DecoderConfig, LppDecoder};

// Fuzz target: downlink decoder on arbitrary bytes.
//
// Current generation: decoding stops at the first 0xFF channel byte, so the
// consumed prefix never contains 0xFF in a channel position. Legacy: every
// successful decode consumes a multiple of three bytes.
fuzz_target!(|data: &[u8]| {
    let mut current = LppDecoder::new(data);
    let ports: Result<Vec<_>, _> = current.ports().collect();
    if let Ok(ports) = ports {
        assert!(ports.iter().all(|p| p.channel != 0xFF));
    }

    let mut legacy = LppDecoder::with_config(data, DecoderConfig::legacy());
    let ports: Result<Vec<_>, _> = legacy.ports().collect();
    if ports.is_ok() {
        assert_eq!(legacy.position() % 3, 0);
    }
});
