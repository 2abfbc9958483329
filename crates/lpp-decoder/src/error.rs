use lpp_types::error::TypeError;
use lpp_wire::WireError;

/// Errors that can occur while decoding an uplink or downlink frame.
///
/// Every error ends the frame. Units delivered before the failing one stand;
/// nothing of the failing unit is delivered.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── UnknownChannelType   ← header tag has no registry entry
///   ├── Truncated            ← stream ended inside a unit
///   ├── Type(TypeError)      ← from lpp-types payload parsing
///   ├── Wire(WireError)      ← from lpp-wire field parsing
///   └── Io(std::io::Error)   ← from the underlying reader, unchanged
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The unit header names a type tag the registry does not know.
    ///
    /// Decoding stops right after the two header bytes: the payload width of
    /// an unknown type is unknown, so nothing further can be consumed safely.
    #[error("unknown channel type {type_tag:#04X} on channel {channel} at offset {offset}")]
    UnknownChannelType {
        channel: u8,
        type_tag: u8,
        offset: usize,
    },

    /// The stream ended part-way through a unit.
    ///
    /// A stream that ends exactly on a unit boundary is a clean end, not
    /// this error. `offset` is where the incomplete piece starts; `needed`
    /// and `available` are its expected and actual byte counts.
    #[error("truncated {piece} at offset {offset}: needed {needed} bytes, got {available}")]
    Truncated {
        piece: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
