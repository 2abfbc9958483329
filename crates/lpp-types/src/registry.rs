//! Static type registry: tag → payload layout and fixed-point scale.
//!
//! Every uplink type is described by one [`TypeDescriptor`] row. The
//! descriptor is all the decoder and encoder need to move a unit across the
//! wire (field widths, signedness and per-field divisors), so the codec
//! crates never branch on individual types for byte layout.
//!
//! ```text
//! ┌────────────────────┬─────┬────────┬────────┬────────────────────┐
//! │ Type               │ Tag │ Fields │ Width  │ Divisor            │
//! ├────────────────────┼─────┼────────┼────────┼────────────────────┤
//! │ DigitalInput       │   0 │ 1      │ 1      │ 1                  │
//! │ DigitalOutput      │   1 │ 1      │ 1      │ 1                  │
//! │ AnalogInput        │   2 │ 1      │ 2 (s)  │ 100                │
//! │ AnalogOutput       │   3 │ 1      │ 2 (s)  │ 100                │
//! │ Luminosity         │ 101 │ 1      │ 2      │ 1                  │
//! │ Presence           │ 102 │ 1      │ 1      │ 1                  │
//! │ Temperature        │ 103 │ 1      │ 2 (s)  │ 10                 │
//! │ RelativeHumidity   │ 104 │ 1      │ 1 (*)  │ 2                  │
//! │ Accelerometer      │ 113 │ 3      │ 2 (s)  │ 1000               │
//! │ BarometricPressure │ 115 │ 1      │ 2 (s)  │ 10                 │
//! │ Gyrometer          │ 134 │ 3      │ 2 (s)  │ 100                │
//! │ Gps                │ 136 │ 3      │ 3 (s)  │ 10000, 10000, 100  │
//! └────────────────────┴─────┴────────┴────────┴────────────────────┘
//!   (s) signed   (*) unsigned in the current generation, signed in legacy
//! ```

use bytes::BufMut;
use lpp_wire::fixed::{read_int_be, read_uint_be, write_int_be};

use crate::channel_type::ChannelType;
use crate::error::TypeError;
use crate::generation::Generation;

/// Most fields any registered type carries (accelerometer, gyrometer, GPS).
pub const MAX_FIELDS: usize = 3;

/// Layout of one scalar field: byte width and fixed-point divisor.
///
/// `physical = raw / divisor` on decode, `raw = round(physical × divisor)` on
/// encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub width: usize,
    pub divisor: u32,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(width: usize, divisor: u32) -> Self {
        Self { width, divisor }
    }

    /// Convert a raw wire integer to its physical value.
    #[must_use]
    pub fn physical(self, raw: i64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = raw as f64;
        raw / f64::from(self.divisor)
    }

    /// Convert a physical value to the raw integer written on the wire.
    ///
    /// Rounds half to even, then lets the caller truncate to the field width.
    /// NaN maps to 0 and infinities saturate at the `i64` bounds before the
    /// width truncation wraps them.
    #[must_use]
    pub fn quantize(self, value: f64) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let raw = (value * f64::from(self.divisor)).round_ties_even() as i64;
        raw
    }

    /// Size of one quantization step in physical units.
    #[must_use]
    pub fn step(self) -> f64 {
        1.0 / f64::from(self.divisor)
    }
}

/// Raw integers read from (or about to be written to) one payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawFields {
    values: [i64; MAX_FIELDS],
    len: usize,
}

impl RawFields {
    /// # Panics
    ///
    /// Panics if `values` holds more than [`MAX_FIELDS`] entries.
    #[must_use]
    pub fn from_slice(values: &[i64]) -> Self {
        let mut raw = Self::default();
        raw.values[..values.len()].copy_from_slice(values);
        raw.len = values.len();
        raw
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values[..self.len]
    }

    /// Field `index`, or 0 past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> i64 {
        self.as_slice().get(index).copied().unwrap_or(0)
    }
}

/// One registry row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub channel_type: ChannelType,
    pub signed: bool,
    pub fields: &'static [FieldSpec],
    /// Physical unit label for display (empty for unitless counts).
    pub unit: &'static str,
}

impl TypeDescriptor {
    #[must_use]
    pub fn tag(&self) -> u8 {
        self.channel_type.wire_id()
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.channel_type.name()
    }

    /// Number of scalar fields.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Total payload bytes following the unit header.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    /// Split a payload into its big-endian raw integers.
    ///
    /// # Errors
    ///
    /// - [`TypeError::PayloadLength`] if `payload` is not exactly
    ///   [`payload_len`](Self::payload_len) bytes.
    /// - [`TypeError::Wire`] if a field width is unsupported.
    pub fn read_raw(&self, payload: &[u8]) -> Result<RawFields, TypeError> {
        if payload.len() != self.payload_len() {
            return Err(TypeError::PayloadLength {
                type_name: self.name(),
                expected: self.payload_len(),
                actual: payload.len(),
            });
        }

        let mut raw = RawFields {
            len: self.arity(),
            ..RawFields::default()
        };
        let mut offset = 0;
        for (slot, field) in raw.values.iter_mut().zip(self.fields) {
            let bytes = &payload[offset..offset + field.width];
            *slot = if self.signed {
                i64::from(read_int_be(bytes)?)
            } else {
                i64::from(read_uint_be(bytes)?)
            };
            offset += field.width;
        }
        Ok(raw)
    }

    /// Write raw integers at the registered widths, wrapping any value that
    /// does not fit its field.
    ///
    /// Missing trailing values are written as 0; extra values are ignored.
    pub fn write_raw<B: BufMut + ?Sized>(&self, raw: &RawFields, out: &mut B) {
        for (index, field) in self.fields.iter().enumerate() {
            write_int_be(raw.get(index), field.width, out);
        }
    }

    /// Convert raw integers to physical values, field by field.
    #[must_use]
    pub fn physical(&self, raw: &RawFields) -> [f64; MAX_FIELDS] {
        let mut out = [0.0; MAX_FIELDS];
        for (index, field) in self.fields.iter().enumerate() {
            out[index] = field.physical(raw.get(index));
        }
        out
    }

    /// Quantize physical values, field by field.
    #[must_use]
    pub fn quantize(&self, values: &[f64]) -> RawFields {
        let mut raw = RawFields {
            len: self.arity(),
            ..RawFields::default()
        };
        for ((slot, field), value) in raw.values.iter_mut().zip(self.fields).zip(values) {
            *slot = field.quantize(*value);
        }
        raw
    }
}

const BYTE: &[FieldSpec] = &[FieldSpec::new(1, 1)];
const WORD: &[FieldSpec] = &[FieldSpec::new(2, 1)];
const HUNDREDTHS: &[FieldSpec] = &[FieldSpec::new(2, 100)];
const TENTHS: &[FieldSpec] = &[FieldSpec::new(2, 10)];
const HALVES: &[FieldSpec] = &[FieldSpec::new(1, 2)];
const AXES_MILLI: &[FieldSpec] = &[FieldSpec::new(2, 1000); 3];
const AXES_CENTI: &[FieldSpec] = &[FieldSpec::new(2, 100); 3];
const GPS: &[FieldSpec] = &[
    FieldSpec::new(3, 10_000),
    FieldSpec::new(3, 10_000),
    FieldSpec::new(3, 100),
];

const fn row(
    channel_type: ChannelType,
    signed: bool,
    fields: &'static [FieldSpec],
    unit: &'static str,
) -> TypeDescriptor {
    TypeDescriptor {
        channel_type,
        signed,
        fields,
        unit,
    }
}

/// Rows in [`ChannelType::ALL`] order, current generation.
static REGISTRY: [TypeDescriptor; 12] = [
    row(ChannelType::DigitalInput, false, BYTE, ""),
    row(ChannelType::DigitalOutput, false, BYTE, ""),
    row(ChannelType::AnalogInput, true, HUNDREDTHS, ""),
    row(ChannelType::AnalogOutput, true, HUNDREDTHS, ""),
    row(ChannelType::Luminosity, false, WORD, "lux"),
    row(ChannelType::Presence, false, BYTE, ""),
    row(ChannelType::Temperature, true, TENTHS, "°C"),
    row(ChannelType::RelativeHumidity, false, HALVES, "%"),
    row(ChannelType::Accelerometer, true, AXES_MILLI, "G"),
    row(ChannelType::BarometricPressure, true, TENTHS, "hPa"),
    row(ChannelType::Gyrometer, true, AXES_CENTI, "°/s"),
    row(ChannelType::Gps, true, GPS, "°, °, m"),
];

static LEGACY_RELATIVE_HUMIDITY: TypeDescriptor =
    row(ChannelType::RelativeHumidity, true, HALVES, "%");

/// Field layout of a downlink port value: signed, 2 bytes, hundredths.
pub const DOWNLINK_PORT: FieldSpec = FieldSpec::new(2, 100);

/// Registry row for a channel type under the given generation.
#[must_use]
pub fn descriptor(channel_type: ChannelType, generation: Generation) -> &'static TypeDescriptor {
    if channel_type == ChannelType::RelativeHumidity && generation.signed_humidity() {
        return &LEGACY_RELATIVE_HUMIDITY;
    }
    &REGISTRY[channel_type as usize]
}

/// Look up a wire tag.
///
/// # Errors
///
/// Returns [`TypeError::UnknownChannelType`] if the tag is not registered.
pub fn lookup(tag: u8, generation: Generation) -> Result<&'static TypeDescriptor, TypeError> {
    let channel_type = ChannelType::try_from(tag)?;
    Ok(descriptor(channel_type, generation))
}

/// Every current-generation row, in tag order.
#[must_use]
pub fn all() -> &'static [TypeDescriptor] {
    &REGISTRY
}
