use lpp_types::Generation;

/// Configuration for [`LppDecoder`](crate::LppDecoder).
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Field      │ Purpose                                              │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ generation │ Downlink terminator and relative-humidity signedness │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    pub generation: Generation,
}

impl DecoderConfig {
    #[must_use]
    pub fn with_generation(generation: Generation) -> Self {
        Self { generation }
    }

    /// Configuration for frames produced by legacy-generation devices.
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_generation(Generation::Legacy)
    }
}
