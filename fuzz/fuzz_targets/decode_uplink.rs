#![no_main]

use libfuzzer_sys::fuzz_target;
use lpp_decoder::{DecoderConfig, LppDecoder};
use lpp_types::Reading;

// Fuzz target: uplink decoder on arbitrary bytes, both generations.
//
// The decoder must never panic, never read past the input, and must report
// a position equal to the input length whenever it succeeds.
fuzz_target!(|data: &[u8]| {
    for config in [DecoderConfig::default(), DecoderConfig::legacy()] {
        let mut decoder = LppDecoder::with_config(data, config);
        let mut readings: Vec<Reading> = Vec::new();
        let result = decoder.decode_uplink(&mut readings);
        assert!(decoder.position() <= data.len());
        if result.is_ok() {
            assert_eq!(decoder.position(), data.len());
        }
    }
});
