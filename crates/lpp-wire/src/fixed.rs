use bytes::BufMut;

use crate::error::WireError;

/// Widest field the integer readers accept. Every registered channel type
/// uses 1, 2 or 3 bytes per field.
pub const MAX_FIELD_WIDTH: usize = 4;

fn check_width(width: usize) -> Result<(), WireError> {
    if width == 0 || width > MAX_FIELD_WIDTH {
        return Err(WireError::UnsupportedWidth { width });
    }
    Ok(())
}

/// Read an unsigned big-endian integer of 1–4 bytes.
///
/// The bytes are right-aligned into a `u32`, so `[0x01, 0xF4]` reads as 500.
///
/// # Errors
///
/// Returns [`WireError::UnsupportedWidth`] if `buf` is empty or longer than
/// [`MAX_FIELD_WIDTH`].
pub fn read_uint_be(buf: &[u8]) -> Result<u32, WireError> {
    check_width(buf.len())?;
    let mut word = [0u8; MAX_FIELD_WIDTH];
    word[MAX_FIELD_WIDTH - buf.len()..].copy_from_slice(buf);
    Ok(u32::from_be_bytes(word))
}

/// Read a signed (two's complement) big-endian integer of 1–4 bytes.
///
/// The bytes are placed at the *top* of an `i32` and then shifted back down
/// with an arithmetic shift, which copies the field's sign bit into the
/// padding. This is what makes the packed 24-bit GPS fields come out
/// negative:
///
/// ```text
///   bytes      FF FC 91
///   word       FF FC 91 00   (as i32: -225_024)
///   >> 8       FF FF FC 91   (as i32: -879)
/// ```
///
/// # Errors
///
/// Returns [`WireError::UnsupportedWidth`] if `buf` is empty or longer than
/// [`MAX_FIELD_WIDTH`].
pub fn read_int_be(buf: &[u8]) -> Result<i32, WireError> {
    check_width(buf.len())?;
    let mut word = [0u8; MAX_FIELD_WIDTH];
    word[..buf.len()].copy_from_slice(buf);
    Ok(i32::from_be_bytes(word) >> (8 * (MAX_FIELD_WIDTH - buf.len())))
}

/// Write the low `width` bytes of `value`, big-endian.
///
/// Anything above the field width is discarded, so out-of-range values wrap
/// in two's complement instead of saturating: `40_000` written at width 2
/// becomes `0x9C40`, which reads back as `-25_536`.
///
/// # Panics
///
/// Panics if `width` is greater than 8 (the size of an `i64`).
pub fn write_int_be<B: BufMut + ?Sized>(value: i64, width: usize, out: &mut B) {
    let bytes = value.to_be_bytes();
    assert!(
        width <= bytes.len(),
        "field width {width} exceeds {} bytes",
        bytes.len()
    );
    out.put_slice(&bytes[bytes.len() - width..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(value: i64, width: usize) -> Vec<u8> {
        let mut out = Vec::new();
        write_int_be(value, width, &mut out);
        out
    }

    #[test]
    fn unsigned_two_bytes() {
        assert_eq!(read_uint_be(&[0x01, 0xF4]).unwrap(), 500);
    }

    #[test]
    fn unsigned_single_byte_is_not_sign_extended() {
        assert_eq!(read_uint_be(&[0xFF]).unwrap(), 255);
    }

    #[test]
    fn signed_single_byte() {
        assert_eq!(read_int_be(&[0xFF]).unwrap(), -1);
        assert_eq!(read_int_be(&[0x63]).unwrap(), 99);
    }

    #[test]
    fn signed_two_bytes() {
        assert_eq!(read_int_be(&[0xFF, 0x64]).unwrap(), -156);
        assert_eq!(read_int_be(&[0x15, 0x4A]).unwrap(), 5450);
    }

    #[test]
    fn signed_24_bit_negative_is_sign_extended() {
        // -879 in 24-bit two's complement
        assert_eq!(read_int_be(&[0xFF, 0xFC, 0x91]).unwrap(), -879);
    }

    #[test]
    fn signed_24_bit_with_clear_top_bit_stays_positive() {
        assert_eq!(read_int_be(&[0x00, 0xFC, 0x99]).unwrap(), 64_665);
        assert_eq!(read_int_be(&[0x07, 0xFD, 0x87]).unwrap(), 523_655);
    }

    #[test]
    fn signed_24_bit_extremes() {
        assert_eq!(read_int_be(&[0x7F, 0xFF, 0xFF]).unwrap(), 8_388_607);
        assert_eq!(read_int_be(&[0x80, 0x00, 0x00]).unwrap(), -8_388_608);
    }

    #[test]
    fn signed_four_bytes() {
        assert_eq!(read_int_be(&(-2_i32).to_be_bytes()).unwrap(), -2);
    }

    #[test]
    fn reject_empty_field() {
        assert!(matches!(
            read_int_be(&[]),
            Err(WireError::UnsupportedWidth { width: 0 })
        ));
    }

    #[test]
    fn reject_wide_field() {
        assert!(matches!(
            read_uint_be(&[0; 5]),
            Err(WireError::UnsupportedWidth { width: 5 })
        ));
    }

    #[test]
    fn write_negative_two_bytes() {
        assert_eq!(written(-5450, 2), vec![0xEA, 0xB6]);
    }

    #[test]
    fn write_packs_low_three_bytes() {
        assert_eq!(written(523_655, 3), vec![0x07, 0xFD, 0x87]);
        assert_eq!(written(-879, 3), vec![0xFF, 0xFC, 0x91]);
    }

    #[test]
    fn write_wraps_out_of_range() {
        assert_eq!(written(40_000, 2), vec![0x9C, 0x40]);
        assert_eq!(read_int_be(&written(40_000, 2)).unwrap(), -25_536);
        assert_eq!(written(256, 1), vec![0x00]);
    }

    #[test]
    fn write_24_bit_overflow_discards_top_byte() {
        // 9_000_000 = 0x89_54_40; the packed field reads back negative
        assert_eq!(written(9_000_000, 3), vec![0x89, 0x54, 0x40]);
        assert_eq!(read_int_be(&[0x89, 0x54, 0x40]).unwrap(), 9_000_000 - (1 << 24));
    }

    #[test]
    #[should_panic(expected = "field width 9 exceeds 8 bytes")]
    fn write_wider_than_i64_panics() {
        written(1, 9);
    }
}
