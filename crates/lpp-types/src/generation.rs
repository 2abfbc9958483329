/// Revision of the payload format.
///
/// Two revisions of the format exist in the field. They share every type tag
/// and width and differ in two places:
///
/// ```text
/// ┌───────────────────┬──────────────────────┬──────────────────────┐
/// │                   │ Current (default)    │ Legacy               │
/// ├───────────────────┼──────────────────────┼──────────────────────┤
/// │ Downlink end      │ 0xFF channel = stop  │ end of stream only   │
/// │ Relative humidity │ unsigned byte        │ signed byte          │
/// └───────────────────┴──────────────────────┴──────────────────────┘
/// ```
///
/// Encoding is identical in both: the humidity byte is the low 8 bits of the
/// scaled value either way, and the downlink terminator is only written on
/// request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Generation {
  #[default]
  Current,
  Legacy,
}

impl Generation {
  /// Whether a `0xFF` downlink channel byte ends the frame.
  #[must_use]
  pub fn has_downlink_terminator(self) -> bool {
    matches!(self, Self::Current)
  }

  /// Whether the relative-humidity byte is read as two's complement.
  #[must_use]
  pub fn signed_humidity(self) -> bool {
    matches!(self, Self::Legacy)
  }

  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Current => "current",
      Self::Legacy => "legacy",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_current() {
    assert_eq!(Generation::default(), Generation::Current);
  }

  #[test]
  fn policies_differ_between_generations() {
    assert!(Generation::Current.has_downlink_terminator());
    assert!(!Generation::Current.signed_humidity());
    assert!(!Generation::Legacy.has_downlink_terminator());
    assert!(Generation::Legacy.signed_humidity());
  }
}
