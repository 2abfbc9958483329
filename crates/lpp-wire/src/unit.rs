use crate::error::WireError;

/// Size of the `(channel, type)` header in front of every uplink unit.
pub const UPLINK_HEADER_SIZE: usize = 2;

/// Size of the fixed-point value in a downlink unit.
pub const DOWNLINK_VALUE_SIZE: usize = 2;

/// Reserved downlink channel that ends a frame (current generation only).
pub const DOWNLINK_TERMINATOR: u8 = 0xFF;

/// Largest payload of any registered uplink type (GPS: 3 × 3 bytes).
pub const MAX_PAYLOAD_SIZE: usize = 9;

/// The two bytes in front of every uplink payload.
///
/// ```text
/// ┌────────┬────────┬───────────────────────────────────┐
/// │ Offset │ Size   │ Description                       │
/// ├────────┼────────┼───────────────────────────────────┤
/// │ 0x00   │ 1 byte │ Channel (caller-assigned)         │
/// │ 0x01   │ 1 byte │ Type tag (registry key)           │
/// │ 0x02   │ N      │ Payload, N fixed per type tag     │
/// └────────┴────────┴───────────────────────────────────┘
/// ```
///
/// There is no length field: the payload size is only known once the type
/// tag has been looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitHeader {
    pub channel: u8,
    pub type_tag: u8,
}

impl UnitHeader {
    #[must_use]
    pub fn new(channel: u8, type_tag: u8) -> Self {
        Self { channel, type_tag }
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; UPLINK_HEADER_SIZE] {
        [self.channel, self.type_tag]
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; UPLINK_HEADER_SIZE]) -> Self {
        Self {
            channel: bytes[0],
            type_tag: bytes[1],
        }
    }

    /// Parse a header from the first two bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if `buf` is shorter than
    /// [`UPLINK_HEADER_SIZE`].
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        match buf {
            [channel, type_tag, ..] => Ok(Self::new(*channel, *type_tag)),
            _ => Err(WireError::UnexpectedEof { offset: buf.len() }),
        }
    }
}
