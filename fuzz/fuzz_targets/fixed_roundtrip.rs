#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lpp_wire::fixed::{read_int_be, read_uint_be, write_int_be};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    value: i64,
    width: u8,
}

// Fuzz target: fixed-width big-endian write → read.
//
// Writing keeps the low `width` bytes; reading them back signed must agree
// with sign-extending those bytes, and unsigned with masking them.
fuzz_target!(|input: FuzzInput| {
    let width = usize::from(input.width % 4) + 1;
    let mut buf = Vec::new();
    write_int_be(input.value, width, &mut buf);
    assert_eq!(buf.len(), width);

    let bits = 8 * width as u32;
    let mask = (1i64 << bits) - 1;
    let low = input.value & mask;

    let unsigned = read_uint_be(&buf).expect("width is supported");
    assert_eq!(i64::from(unsigned), low);

    let signed = read_int_be(&buf).expect("width is supported");
    let extended = (low << (64 - bits)) >> (64 - bits);
    assert_eq!(i64::from(signed), extended);
});
