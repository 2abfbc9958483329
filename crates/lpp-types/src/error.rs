use lpp_wire::WireError;

/// Errors raised while mapping type tags and payload bytes to typed values.
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── UnknownChannelType for unregistered tags      │
/// │   ├── PayloadLength when a payload slice is wrong   │
/// │   └── wraps WireError for field-level failures      │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
  /// The type tag has no entry in the registry.
  #[error("unknown channel type {tag:#04X}")]
  UnknownChannelType { tag: u8 },

  /// A payload slice did not match the registered width for its type.
  #[error("{type_name} payload must be {expected} bytes, got {actual}")]
  PayloadLength {
    type_name: &'static str,
    expected: usize,
    actual: usize,
  },

  #[error(transparent)]
  Wire(#[from] WireError),
}
