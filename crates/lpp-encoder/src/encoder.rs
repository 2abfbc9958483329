use std::io::{self, Write};

use bytes::{BufMut, BytesMut};
use lpp_types::registry::DOWNLINK_PORT;
use lpp_types::{PortValue, Reading};
use lpp_wire::fixed::write_int_be;
use lpp_wire::unit::{DOWNLINK_TERMINATOR, UnitHeader};
use tracing::trace;

use crate::buffer::FrameBuffer;
use crate::error::EncodeError;

/// LPP encoder — appends typed readings to a frame buffer.
///
/// Each `add_*` call writes one complete unit and returns `&mut Self` for
/// chaining. Units land in call order and never depend on each other.
///
/// ```text
/// uplink unit    ┌─────────┬──────────┬──────────────────────────┐
///                │ channel │ type tag │ payload (registry width) │
///                └─────────┴──────────┴──────────────────────────┘
/// downlink unit  ┌─────────┬─────────────────┐
///                │ channel │ value (i16, BE) │
///                └─────────┴─────────────────┘
/// ```
///
/// Values are scaled by the registry divisor and rounded half to even. A
/// scaled value that does not fit its field is truncated to the field width
/// (two's complement wraparound), never clamped and never reported.
///
/// # Usage
///
/// ```rust
/// use lpp_encoder::LppEncoder;
///
/// let mut encoder = LppEncoder::new();
/// encoder
///     .add_digital_input(1, 255)
///     .add_temperature(7, -15.65);
///
/// assert_eq!(encoder.bytes(), &[1, 0, 255, 7, 103, 255, 100]);
/// ```
///
/// The encoder is generic over its [`FrameBuffer`]; [`LppEncoder::new`] uses
/// a [`BytesMut`], [`LppEncoder::with_buffer`] takes any other sink.
#[derive(Debug, Default)]
pub struct LppEncoder<B = BytesMut> {
    buf: B,
}

impl LppEncoder<BytesMut> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }
}

impl<B: FrameBuffer> LppEncoder<B> {
    /// Encode into an existing buffer. Bytes already in it are kept.
    pub fn with_buffer(buf: B) -> Self {
        Self { buf }
    }

    // ── Buffer management ───────────────────────────────────────────────

    /// Reserve room for `additional` more bytes.
    pub fn grow(&mut self, additional: usize) -> &mut Self {
        self.buf.grow(additional);
        self
    }

    /// The encoded frame so far. The encoder keeps ownership.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything encoded so far.
    pub fn reset(&mut self) -> &mut Self {
        self.buf.reset();
        self
    }

    /// Drain the frame into `writer`, leaving the encoder empty.
    ///
    /// Returns the number of bytes written. Bytes the writer accepted are
    /// removed from the buffer even when a later write fails, so on error
    /// the encoder holds exactly the unsent tail and a retry resumes from
    /// there.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Io`] if the writer fails or accepts zero bytes.
    pub fn write_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<usize, EncodeError> {
        let mut written = 0;
        let outcome = loop {
            let rest = &self.buf.as_slice()[written..];
            if rest.is_empty() {
                break Ok(());
            }
            match writer.write(rest) {
                Ok(0) => break Err(io::Error::from(io::ErrorKind::WriteZero)),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        self.buf.consume(written);
        trace!(bytes = written, remaining = self.len(), "drained frame");
        outcome?;
        Ok(written)
    }

    /// Consume the encoder and return its buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }

    // ── Uplink units ────────────────────────────────────────────────────
    //
    // Every typed method builds a `Reading` and funnels through
    // `add_reading`, so the byte layout comes from the registry alone.

    /// Append any reading.
    pub fn add_reading(&mut self, reading: &Reading) -> &mut Self {
        let descriptor = reading.descriptor();
        self.buf
            .grow(lpp_wire::unit::UPLINK_HEADER_SIZE + descriptor.payload_len());
        self.buf
            .put_slice(&UnitHeader::new(reading.channel(), descriptor.tag()).to_bytes());
        reading.encode_payload(&mut self.buf);
        trace!(
            channel = reading.channel(),
            channel_type = descriptor.name(),
            "encoded uplink unit"
        );
        self
    }

    /// Append every reading in order.
    pub fn add_readings<'a, I>(&mut self, readings: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        for reading in readings {
            self.add_reading(reading);
        }
        self
    }

    pub fn add_digital_input(&mut self, channel: u8, value: u8) -> &mut Self {
        self.add_reading(&Reading::DigitalInput { channel, value })
    }

    pub fn add_digital_output(&mut self, channel: u8, value: u8) -> &mut Self {
        self.add_reading(&Reading::DigitalOutput { channel, value })
    }

    /// Analog input, 0.01 resolution.
    pub fn add_analog_input(&mut self, channel: u8, value: f64) -> &mut Self {
        self.add_reading(&Reading::AnalogInput { channel, value })
    }

    /// Analog output, 0.01 resolution.
    pub fn add_analog_output(&mut self, channel: u8, value: f64) -> &mut Self {
        self.add_reading(&Reading::AnalogOutput { channel, value })
    }

    pub fn add_luminosity(&mut self, channel: u8, lux: u16) -> &mut Self {
        self.add_reading(&Reading::Luminosity { channel, lux })
    }

    pub fn add_presence(&mut self, channel: u8, value: u8) -> &mut Self {
        self.add_reading(&Reading::Presence { channel, value })
    }

    /// Temperature in °C, 0.1 resolution.
    pub fn add_temperature(&mut self, channel: u8, celsius: f64) -> &mut Self {
        self.add_reading(&Reading::Temperature { channel, celsius })
    }

    /// Relative humidity in %, 0.5 resolution.
    pub fn add_relative_humidity(&mut self, channel: u8, percent: f64) -> &mut Self {
        self.add_reading(&Reading::RelativeHumidity { channel, percent })
    }

    /// Acceleration in G per axis, 0.001 resolution.
    pub fn add_accelerometer(&mut self, channel: u8, x: f64, y: f64, z: f64) -> &mut Self {
        self.add_reading(&Reading::Accelerometer { channel, x, y, z })
    }

    /// Barometric pressure in hPa, 0.1 resolution.
    pub fn add_barometric_pressure(&mut self, channel: u8, hpa: f64) -> &mut Self {
        self.add_reading(&Reading::BarometricPressure { channel, hpa })
    }

    /// Angular rate in °/s per axis, 0.01 resolution.
    pub fn add_gyrometer(&mut self, channel: u8, x: f64, y: f64, z: f64) -> &mut Self {
        self.add_reading(&Reading::Gyrometer { channel, x, y, z })
    }

    /// Position fix. Latitude and longitude in degrees (0.0001), altitude in
    /// metres (0.01). Each field is packed into 24 bits; values beyond
    /// ±8 388 607 raw units wrap.
    pub fn add_gps(
        &mut self,
        channel: u8,
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> &mut Self {
        self.add_reading(&Reading::Gps {
            channel,
            latitude,
            longitude,
            altitude,
        })
    }

    // ── Downlink units ──────────────────────────────────────────────────

    /// Append a downlink port value, 0.01 resolution.
    pub fn add_port(&mut self, channel: u8, value: f64) -> &mut Self {
        let port = PortValue::new(channel, value);
        self.buf.grow(1 + DOWNLINK_PORT.width);
        self.buf.put_u8(port.channel);
        write_int_be(port.raw(), DOWNLINK_PORT.width, &mut self.buf);
        trace!(channel, "encoded downlink unit");
        self
    }

    /// Append the `0xFF` end-of-frame marker understood by current-generation
    /// downlink decoders.
    pub fn add_downlink_terminator(&mut self) -> &mut Self {
        self.buf.put_u8(DOWNLINK_TERMINATOR);
        self
    }
}
