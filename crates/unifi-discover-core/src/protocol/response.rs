//! Discovery response decoding.
//!
//! A response payload is the 3-byte discovery header, one body-length
//! byte, and a run of type-tagged records:
//!
//! | field  | size (bytes)   | description                                |
//! |--------|----------------|--------------------------------------------|
//! | tag    | 1              | Field meaning, see [`FieldTag`].           |
//! | length | 2, big-endian  | Value length; 0 terminates the payload.    |
//! | value  | `length`       | Field value, shape determined by the tag.  |
//!
//! Devices are observed to omit the zero-length terminator, so running
//! off the end of the payload cleanly is normal termination too.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::error::DecodeError;
use crate::protocol::field::FieldTag;
use crate::protocol::probe::DISCOVERY_HEADER;
use crate::types::{DiscoveredDevice, MacAndIp};

/// Hardware addresses are ethernet MACs.
const MAC_LEN: usize = 6;

/// MAC-and-IP values carry a MAC followed by a 4-byte IPv4 address.
const MAC_AND_IP_LEN: usize = MAC_LEN + 4;

/// Decode one discovery response payload.
///
/// Stateless; each call returns a freshly allocated device. The first
/// structural or per-field error aborts the whole payload, so a device is
/// only returned when every record before the terminator decoded cleanly.
///
/// [`DecodeError::InvalidHeader`] means the datagram is not a discovery
/// response at all; callers normally drop those silently rather than
/// report them.
pub fn decode(payload: &[u8]) -> Result<DiscoveredDevice, DecodeError> {
    if payload.len() < 4 || payload[..3] != DISCOVERY_HEADER {
        return Err(DecodeError::InvalidHeader);
    }
    let expected = payload[3] as usize + 4;
    if payload.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: payload.len(),
        });
    }

    let mut device = DiscoveredDevice::default();
    let mut offset = 4;
    loop {
        if offset >= payload.len() {
            break;
        }
        if payload.len() - offset < 3 {
            return Err(DecodeError::TruncatedRecord { offset });
        }
        let tag = FieldTag::from_byte(payload[offset]);
        let len = u16::from_be_bytes([payload[offset + 1], payload[offset + 2]]) as usize;
        if len == 0 {
            // sentinel record; trailing bytes are ignored
            break;
        }
        if offset + 3 + len > payload.len() {
            return Err(DecodeError::TruncatedRecord { offset });
        }
        let value = &payload[offset + 3..offset + 3 + len];
        trace!(tag = %tag, len, "decoded field");
        apply_field(&mut device, tag, value)?;
        offset += 3 + len;
    }
    Ok(device)
}

/// Store one record's value into the device. A repeated tag overwrites
/// the earlier value.
fn apply_field(
    device: &mut DiscoveredDevice,
    tag: FieldTag,
    value: &[u8],
) -> Result<(), DecodeError> {
    match tag {
        FieldTag::Mac => {
            if value.len() != MAC_LEN {
                return Err(DecodeError::MalformedField {
                    tag,
                    reason: format!("want {} bytes, got {}", MAC_LEN, value.len()),
                });
            }
            device.mac = Some(format_mac(value));
        }
        FieldTag::MacAndIp => {
            if value.len() < MAC_AND_IP_LEN {
                return Err(DecodeError::MalformedField {
                    tag,
                    reason: format!("want at least {} bytes, got {}", MAC_AND_IP_LEN, value.len()),
                });
            }
            device.mac_and_ip = Some(MacAndIp {
                mac: format_mac(&value[..MAC_LEN]),
                ip: Ipv4Addr::new(value[6], value[7], value[8], value[9]),
            });
        }
        FieldTag::Firmware => device.firmware = Some(ascii_field(tag, value)?),
        FieldTag::RadioName => device.radio_name = Some(ascii_field(tag, value)?),
        FieldTag::ModelShort => device.model_short = Some(ascii_field(tag, value)?),
        FieldTag::Essid => device.essid = Some(ascii_field(tag, value)?),
        FieldTag::ModelFull => device.model_full = Some(ascii_field(tag, value)?),
        FieldTag::Unknown(byte) => {
            // unknown encoding, keep the raw bytes
            device.unknown.insert(byte, value.to_vec());
        }
    }
    Ok(())
}

/// Render octets as lowercase colon-separated hex, `aa:bb:cc:dd:ee:ff`.
fn format_mac(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

fn ascii_field(tag: FieldTag, value: &[u8]) -> Result<String, DecodeError> {
    if !value.is_ascii() {
        return Err(DecodeError::MalformedField {
            tag,
            reason: "not ASCII".to_string(),
        });
    }
    Ok(String::from_utf8_lossy(value).into_owned())
}
