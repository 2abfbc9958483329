use std::io::{self, ErrorKind, Read};

/// Outcome of trying to fill a fixed-size buffer from a reader.
///
/// The three-way split is what lets a decoder tell a stream that ended on a
/// unit boundary apart from one that was cut off in the middle of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Every byte of the buffer was read.
    Complete,
    /// The reader was already at end-of-stream; nothing was read.
    Empty,
    /// The reader hit end-of-stream after this many bytes.
    Partial(usize),
}

/// Read until `buf` is full or the reader reports end-of-stream.
///
/// Unlike [`Read::read_exact`], running out of input is not an error here:
/// the caller gets [`Fill::Empty`] or [`Fill::Partial`] and decides what that
/// means at its position in the frame. `ErrorKind::Interrupted` is retried;
/// every other I/O error is returned unchanged.
///
/// # Errors
///
/// Any error from the underlying reader other than `Interrupted`.
pub fn fill_exact<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<Fill> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(match filled {
        n if n == buf.len() => Fill::Complete,
        0 => Fill::Empty,
        n => Fill::Partial(n),
    })
}
