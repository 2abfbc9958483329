use std::io::{self, Read};

use lpp_types::registry;
use lpp_types::{ChannelType, DownlinkTarget, PortValue, Reading, UplinkTarget};
use lpp_wire::fixed::read_int_be;
use lpp_wire::unit::{
    DOWNLINK_TERMINATOR, DOWNLINK_VALUE_SIZE, MAX_PAYLOAD_SIZE, UPLINK_HEADER_SIZE, UnitHeader,
};
use lpp_wire::{Fill, fill_exact};
use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Synchronous LPP decoder over any [`Read`] source.
///
/// The decoder walks the source one unit at a time and never buffers more
/// than one payload (at most 9 bytes, on the stack). It offers two styles:
///
/// - **Callback**: [`decode_uplink`](Self::decode_uplink) /
///   [`decode_downlink`](Self::decode_downlink) call one method of a target
///   per unit, in stream order.
/// - **Pull**: [`next_reading`](Self::next_reading) /
///   [`next_port`](Self::next_port), or the [`readings`](Self::readings) /
///   [`ports`](Self::ports) iterators, yield one [`Reading`] or
///   [`PortValue`] per unit.
///
/// Uplink decoding proceeds per unit:
///
///   1. **Header**: read `(channel, type)`. End-of-stream here is a clean
///      end of frame; a single stray byte is [`DecodeError::Truncated`].
///   2. **Lookup**: resolve the type tag in the registry. Unknown tags fail
///      with [`DecodeError::UnknownChannelType`] without reading further.
///   3. **Payload**: read exactly the registered payload width, or fail with
///      [`DecodeError::Truncated`].
///   4. **Scale**: big-endian integers → divide by each field's divisor.
///
/// Once an error has been returned, or the frame has ended, the decoder is
/// finished: further calls yield nothing.
///
/// # Example
///
/// ```rust
/// use lpp_decoder::LppDecoder;
/// use lpp_types::Reading;
///
/// let frame: &[u8] = &[1, 0, 255, 7, 103, 255, 100];
/// let mut readings: Vec<Reading> = Vec::new();
/// LppDecoder::new(frame).decode_uplink(&mut readings).unwrap();
///
/// assert_eq!(readings[1], Reading::Temperature { channel: 7, celsius: -15.6 });
/// ```
pub struct LppDecoder<R> {
    reader: R,
    config: DecoderConfig,
    /// Bytes consumed from `reader` so far.
    offset: usize,
    state: StreamState,
}

/// ```text
///   Active → Done
/// ```
///
/// `Done` is entered on clean end-of-stream, on the downlink terminator, and
/// on any error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
    Active,
    Done,
}

impl<R: Read> LppDecoder<R> {
    /// Create a decoder with the default (current generation) configuration.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            reader,
            config,
            offset: 0,
            state: StreamState::Active,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Number of bytes consumed from the source so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Whether the frame has ended (cleanly or with an error).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == StreamState::Done
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume the decoder and return the source, positioned just after the
    /// last byte read.
    pub fn into_inner(self) -> R {
        self.reader
    }

    // ── Uplink ──────────────────────────────────────────────────────────

    /// Decode every remaining uplink unit into `target`.
    ///
    /// Returns the number of units delivered.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownChannelType`] for an unregistered type tag.
    /// - [`DecodeError::Truncated`] if the stream ends inside a unit.
    /// - [`DecodeError::Io`] if the source fails.
    pub fn decode_uplink<T: UplinkTarget + ?Sized>(
        &mut self,
        target: &mut T,
    ) -> Result<usize, DecodeError> {
        let mut count = 0;
        while let Some(reading) = self.next_reading()? {
            reading.dispatch(target);
            count += 1;
        }
        Ok(count)
    }

    /// Decode the next uplink unit.
    ///
    /// Returns `Ok(None)` at the end of the frame.
    ///
    /// # Errors
    ///
    /// Same as [`decode_uplink`](Self::decode_uplink).
    pub fn next_reading(&mut self) -> Result<Option<Reading>, DecodeError> {
        if self.state == StreamState::Done {
            return Ok(None);
        }
        let result = self.read_reading();
        if !matches!(result, Ok(Some(_))) {
            self.state = StreamState::Done;
        }
        result
    }

    /// Iterate over the remaining uplink units. The iterator ends after the
    /// first error.
    pub fn readings(&mut self) -> Readings<'_, R> {
        Readings { decoder: self }
    }

    fn read_reading(&mut self) -> Result<Option<Reading>, DecodeError> {
        let start = self.offset;

        let mut header = [0u8; UPLINK_HEADER_SIZE];
        match self.fill(&mut header)? {
            Fill::Complete => {}
            Fill::Empty => {
                debug!(offset = start, "uplink frame ended");
                return Ok(None);
            }
            Fill::Partial(available) => {
                return Err(truncated("uplink header", start, UPLINK_HEADER_SIZE, available));
            }
        }
        let header = UnitHeader::from_bytes(header);

        let Some(channel_type) = ChannelType::from_wire_id(header.type_tag) else {
            debug!(
                offset = start,
                channel = header.channel,
                type_tag = header.type_tag,
                "unknown channel type"
            );
            return Err(DecodeError::UnknownChannelType {
                channel: header.channel,
                type_tag: header.type_tag,
                offset: start,
            });
        };
        let descriptor = registry::descriptor(channel_type, self.config.generation);

        let payload_start = self.offset;
        let mut buf = [0u8; MAX_PAYLOAD_SIZE];
        let payload = &mut buf[..descriptor.payload_len()];
        match self.fill(payload)? {
            Fill::Complete => {}
            Fill::Empty => {
                return Err(truncated(descriptor.name(), payload_start, payload.len(), 0));
            }
            Fill::Partial(available) => {
                return Err(truncated(
                    descriptor.name(),
                    payload_start,
                    payload.len(),
                    available,
                ));
            }
        }

        let raw = descriptor.read_raw(payload)?;
        let reading = Reading::from_raw(header.channel, descriptor, &raw);
        trace!(
            offset = start,
            channel = header.channel,
            channel_type = descriptor.name(),
            "decoded uplink unit"
        );
        Ok(Some(reading))
    }

    // ── Downlink ────────────────────────────────────────────────────────

    /// Decode every remaining downlink unit into `target`.
    ///
    /// Stops cleanly at end-of-stream, or at a `0xFF` channel byte when the
    /// configured generation uses a terminator. Bytes after the terminator
    /// are left in the source. Returns the number of units delivered.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Truncated`] if the stream ends inside a value.
    /// - [`DecodeError::Io`] if the source fails.
    pub fn decode_downlink<T: DownlinkTarget + ?Sized>(
        &mut self,
        target: &mut T,
    ) -> Result<usize, DecodeError> {
        let mut count = 0;
        while let Some(port) = self.next_port()? {
            port.dispatch(target);
            count += 1;
        }
        Ok(count)
    }

    /// Decode the next downlink unit.
    ///
    /// Returns `Ok(None)` at the end of the frame.
    ///
    /// # Errors
    ///
    /// Same as [`decode_downlink`](Self::decode_downlink).
    pub fn next_port(&mut self) -> Result<Option<PortValue>, DecodeError> {
        if self.state == StreamState::Done {
            return Ok(None);
        }
        let result = self.read_port();
        if !matches!(result, Ok(Some(_))) {
            self.state = StreamState::Done;
        }
        result
    }

    /// Iterate over the remaining downlink units. The iterator ends after
    /// the first error.
    pub fn ports(&mut self) -> Ports<'_, R> {
        Ports { decoder: self }
    }

    fn read_port(&mut self) -> Result<Option<PortValue>, DecodeError> {
        let start = self.offset;

        let mut channel = [0u8; 1];
        if self.fill(&mut channel)? == Fill::Empty {
            debug!(offset = start, "downlink frame ended");
            return Ok(None);
        }
        let channel = channel[0];

        if channel == DOWNLINK_TERMINATOR && self.config.generation.has_downlink_terminator() {
            debug!(offset = start, "downlink terminator");
            return Ok(None);
        }

        let value_start = self.offset;
        let mut value = [0u8; DOWNLINK_VALUE_SIZE];
        match self.fill(&mut value)? {
            Fill::Complete => {}
            Fill::Empty => {
                return Err(truncated("downlink value", value_start, DOWNLINK_VALUE_SIZE, 0));
            }
            Fill::Partial(available) => {
                return Err(truncated(
                    "downlink value",
                    value_start,
                    DOWNLINK_VALUE_SIZE,
                    available,
                ));
            }
        }

        let port = PortValue::from_raw(channel, i64::from(read_int_be(&value)?));
        trace!(offset = start, channel, "decoded downlink unit");
        Ok(Some(port))
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    /// Fill `buf` from the source and advance the offset by what was read.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<Fill> {
        let fill = fill_exact(&mut self.reader, buf)?;
        self.offset += match fill {
            Fill::Complete => buf.len(),
            Fill::Empty => 0,
            Fill::Partial(n) => n,
        };
        Ok(fill)
    }
}

impl<'a> LppDecoder<&'a [u8]> {
    /// Decode a complete in-memory uplink frame.
    ///
    /// # Errors
    ///
    /// Same as [`decode_uplink`](Self::decode_uplink).
    pub fn uplink_from_slice(frame: &'a [u8]) -> Result<Vec<Reading>, DecodeError> {
        let mut readings = Vec::new();
        LppDecoder::new(frame).decode_uplink(&mut readings)?;
        Ok(readings)
    }

    /// Decode a complete in-memory downlink frame (current generation).
    ///
    /// # Errors
    ///
    /// Same as [`decode_downlink`](Self::decode_downlink).
    pub fn downlink_from_slice(frame: &'a [u8]) -> Result<Vec<PortValue>, DecodeError> {
        let mut ports = Vec::new();
        LppDecoder::new(frame).decode_downlink(&mut ports)?;
        Ok(ports)
    }
}

fn truncated(piece: &'static str, offset: usize, needed: usize, available: usize) -> DecodeError {
    debug!(piece, offset, needed, available, "truncated unit");
    DecodeError::Truncated {
        piece,
        offset,
        needed,
        available,
    }
}

/// Iterator over uplink units, returned by [`LppDecoder::readings`].
pub struct Readings<'d, R> {
    decoder: &'d mut LppDecoder<R>,
}

impl<R: Read> Iterator for Readings<'_, R> {
    type Item = Result<Reading, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_reading().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for Readings<'_, R> {}

/// Iterator over downlink units, returned by [`LppDecoder::ports`].
pub struct Ports<'d, R> {
    decoder: &'d mut LppDecoder<R>,
}

impl<R: Read> Iterator for Ports<'_, R> {
    type Item = Result<PortValue, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_port().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for Ports<'_, R> {}
