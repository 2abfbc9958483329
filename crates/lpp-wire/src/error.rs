/// Byte-level failures while slicing or packing fixed-width fields.
///
/// I/O failures never appear here: the exact-fill reader in [`crate::fill`]
/// hands `std::io::Error` back untouched so the codec layers can propagate
/// it as-is.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a complete unit header or field could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A field width outside the 1–4 byte range the integer readers support.
    #[error("unsupported field width: {width} bytes (expected 1..=4)")]
    UnsupportedWidth { width: usize },
}

// NOTE
// `{width}` and `{offset}` in the #[error] strings are captured from the
// variant fields, so the Display output always carries the position that
// went wrong. The decoder adds the stream offset on top of this when it
// converts a WireError into a DecodeError.
