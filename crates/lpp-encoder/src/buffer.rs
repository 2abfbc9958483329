use bytes::{Buf, BufMut, BytesMut};

/// Growable byte sink the encoder appends units to.
///
/// Implemented for `Vec<u8>` and [`BytesMut`]; any other buffer that can
/// expose its contents as a slice and be cleared in place can plug in too.
pub trait FrameBuffer: BufMut {
    /// Reserve room for at least `additional` more bytes.
    fn grow(&mut self, additional: usize);

    /// Current contents.
    fn as_slice(&self) -> &[u8];

    /// Drop all contents, keeping the allocation.
    fn reset(&mut self);

    /// Drop the first `n` bytes. `n` must not exceed the current length.
    fn consume(&mut self, n: usize);
}

impl FrameBuffer for Vec<u8> {
    fn grow(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn as_slice(&self) -> &[u8] {
        self
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn consume(&mut self, n: usize) {
        self.drain(..n);
    }
}

impl FrameBuffer for BytesMut {
    fn grow(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn as_slice(&self) -> &[u8] {
        self
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn consume(&mut self, n: usize) {
        self.advance(n);
    }
}
