//! Field tags for discovery response records.

use std::fmt;

/// Tag byte identifying the meaning of one response field.
///
/// The known set is closed; every other byte value is carried through as
/// [`FieldTag::Unknown`] so new firmware fields survive a round trip
/// through the decoder. Tag values are compared as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    /// 6-byte hardware address
    Mac,
    /// 6-byte hardware address followed by a 4-byte IPv4 address
    MacAndIp,
    Firmware,
    RadioName,
    ModelShort,
    Essid,
    ModelFull,
    /// Any tag outside the known set, raw byte preserved
    Unknown(u8),
}

impl FieldTag {
    /// Classify a raw tag byte.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => FieldTag::Mac,
            0x02 => FieldTag::MacAndIp,
            0x03 => FieldTag::Firmware,
            0x0b => FieldTag::RadioName,
            0x0c => FieldTag::ModelShort,
            0x0d => FieldTag::Essid,
            0x14 => FieldTag::ModelFull,
            other => FieldTag::Unknown(other),
        }
    }

    /// The wire value of this tag.
    pub fn as_byte(&self) -> u8 {
        match self {
            FieldTag::Mac => 0x01,
            FieldTag::MacAndIp => 0x02,
            FieldTag::Firmware => 0x03,
            FieldTag::RadioName => 0x0b,
            FieldTag::ModelShort => 0x0c,
            FieldTag::Essid => 0x0d,
            FieldTag::ModelFull => 0x14,
            FieldTag::Unknown(byte) => *byte,
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTag::Mac => write!(f, "MAC"),
            FieldTag::MacAndIp => write!(f, "MAC and IP"),
            FieldTag::Firmware => write!(f, "Firmware"),
            FieldTag::RadioName => write!(f, "RadioName"),
            FieldTag::ModelShort => write!(f, "Model Short"),
            FieldTag::Essid => write!(f, "ESSID"),
            FieldTag::ModelFull => write!(f, "Model Full"),
            FieldTag::Unknown(byte) => write!(f, "Unknown (0x{:02x})", byte),
        }
    }
}
