use crate::error::TypeError;

/// Uplink channel types and their wire tags.
///
/// ```text
/// ┌──────┬────────────────────┬──────────────────────────────────┐
/// │ Wire │ Variant            │ Payload                          │
/// ├──────┼────────────────────┼──────────────────────────────────┤
/// │ 0x00 │ DigitalInput       │ 1 byte, unsigned                 │
/// │ 0x01 │ DigitalOutput      │ 1 byte, unsigned                 │
/// │ 0x02 │ AnalogInput        │ 2 bytes, signed, 0.01            │
/// │ 0x03 │ AnalogOutput       │ 2 bytes, signed, 0.01            │
/// │ 0x65 │ Luminosity         │ 2 bytes, unsigned, 1 lux         │
/// │ 0x66 │ Presence           │ 1 byte, unsigned                 │
/// │ 0x67 │ Temperature        │ 2 bytes, signed, 0.1 °C          │
/// │ 0x68 │ RelativeHumidity   │ 1 byte, 0.5 %                    │
/// │ 0x71 │ Accelerometer      │ 3 × 2 bytes, signed, 0.001 G     │
/// │ 0x73 │ BarometricPressure │ 2 bytes, signed, 0.1 hPa         │
/// │ 0x86 │ Gyrometer          │ 3 × 2 bytes, signed, 0.01 °/s    │
/// │ 0x88 │ Gps                │ 3 × 3 bytes, signed, see Gps     │
/// └──────┴────────────────────┴──────────────────────────────────┘
/// ```
///
/// Unlike an open-ended tag space there is no catch-all variant: a tag that
/// is not in this table cannot be skipped (its payload width is unknown), so
/// [`from_wire_id`](Self::from_wire_id) returns `None` and the decoder stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelType {
    DigitalInput,
    DigitalOutput,
    AnalogInput,
    AnalogOutput,
    Luminosity,
    Presence,
    Temperature,
    RelativeHumidity,
    Accelerometer,
    BarometricPressure,
    Gyrometer,
    /// Latitude and longitude in 0.0001°, altitude in 0.01 m, each packed as
    /// a 24-bit two's complement integer.
    Gps,
}

impl ChannelType {
    /// Every registered type, in tag order.
    pub const ALL: [Self; 12] = [
        Self::DigitalInput,
        Self::DigitalOutput,
        Self::AnalogInput,
        Self::AnalogOutput,
        Self::Luminosity,
        Self::Presence,
        Self::Temperature,
        Self::RelativeHumidity,
        Self::Accelerometer,
        Self::BarometricPressure,
        Self::Gyrometer,
        Self::Gps,
    ];

    /// Return the single-byte wire tag for this type.
    #[must_use]
    pub fn wire_id(self) -> u8 {
        match self {
            Self::DigitalInput => 0,
            Self::DigitalOutput => 1,
            Self::AnalogInput => 2,
            Self::AnalogOutput => 3,
            Self::Luminosity => 101,
            Self::Presence => 102,
            Self::Temperature => 103,
            Self::RelativeHumidity => 104,
            Self::Accelerometer => 113,
            Self::BarometricPressure => 115,
            Self::Gyrometer => 134,
            Self::Gps => 136,
        }
    }

    /// Parse a wire tag. Unregistered tags return `None`.
    #[must_use]
    pub fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::DigitalInput),
            1 => Some(Self::DigitalOutput),
            2 => Some(Self::AnalogInput),
            3 => Some(Self::AnalogOutput),
            101 => Some(Self::Luminosity),
            102 => Some(Self::Presence),
            103 => Some(Self::Temperature),
            104 => Some(Self::RelativeHumidity),
            113 => Some(Self::Accelerometer),
            115 => Some(Self::BarometricPressure),
            134 => Some(Self::Gyrometer),
            136 => Some(Self::Gps),
            _ => None,
        }
    }

    /// Snake-case name, as used in manifests and CLI output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DigitalInput => "digital_input",
            Self::DigitalOutput => "digital_output",
            Self::AnalogInput => "analog_input",
            Self::AnalogOutput => "analog_output",
            Self::Luminosity => "luminosity",
            Self::Presence => "presence",
            Self::Temperature => "temperature",
            Self::RelativeHumidity => "relative_humidity",
            Self::Accelerometer => "accelerometer",
            Self::BarometricPressure => "barometric_pressure",
            Self::Gyrometer => "gyrometer",
            Self::Gps => "gps",
        }
    }

    /// Inverse of [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl TryFrom<u8> for ChannelType {
    type Error = TypeError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_wire_id(tag).ok_or(TypeError::UnknownChannelType { tag })
    }
}

impl From<ChannelType> for u8 {
    fn from(channel_type: ChannelType) -> Self {
        channel_type.wire_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_known_variants_roundtrip() {
        let variants = [
            (ChannelType::DigitalInput, 0),
            (ChannelType::DigitalOutput, 1),
            (ChannelType::AnalogInput, 2),
            (ChannelType::AnalogOutput, 3),
            (ChannelType::Luminosity, 101),
            (ChannelType::Presence, 102),
            (ChannelType::Temperature, 103),
            (ChannelType::RelativeHumidity, 104),
            (ChannelType::Accelerometer, 113),
            (ChannelType::BarometricPressure, 115),
            (ChannelType::Gyrometer, 134),
            (ChannelType::Gps, 136),
        ];

        for (variant, wire) in variants {
            assert_eq!(variant.wire_id(), wire, "wire_id mismatch for {variant:?}");
            assert_eq!(
                ChannelType::from_wire_id(wire),
                Some(variant),
                "from_wire_id mismatch for {wire:#04X}"
            );
        }
    }

    #[test]
    fn tags_are_unique() {
        let mut tags: Vec<u8> = ChannelType::ALL.iter().map(|t| t.wire_id()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), ChannelType::ALL.len());
    }

    #[test]
    fn unregistered_tags_are_rejected() {
        for tag in [4, 100, 105, 0x88 + 1, 0xFF] {
            assert_eq!(ChannelType::from_wire_id(tag), None);
            assert!(matches!(
                ChannelType::try_from(tag),
                Err(TypeError::UnknownChannelType { tag: t }) if t == tag
            ));
        }
    }

    #[test]
    fn names_roundtrip() {
        for t in ChannelType::ALL {
            assert_eq!(ChannelType::from_name(t.name()), Some(t));
        }
        assert_eq!(ChannelType::from_name("voltage"), None);
    }
}
