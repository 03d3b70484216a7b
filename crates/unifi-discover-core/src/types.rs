//! Shared device types.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use serde::Serialize;

/// Hardware address and IPv4 address carried together in one response field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacAndIp {
    pub mac: String,
    pub ip: Ipv4Addr,
}

/// Fields decoded from one discovery response payload.
///
/// Every field is optional; devices answer with whatever subset they
/// implement. Records with tags outside the known set are preserved
/// verbatim in `unknown`, keyed by raw tag byte, since their encoding is
/// not known to this decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoveredDevice {
    pub mac: Option<String>,
    pub mac_and_ip: Option<MacAndIp>,
    pub firmware: Option<String>,
    pub radio_name: Option<String>,
    pub model_short: Option<String>,
    pub essid: Option<String>,
    pub model_full: Option<String>,
    pub unknown: HashMap<u8, Vec<u8>>,
}

/// One decoded reply together with its transport-level sender metadata.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceReport {
    /// Address the reply datagram arrived from.
    pub source_ip: Ipv4Addr,
    /// Sender hardware address, when the transport can capture it.
    /// Plain UDP sockets cannot, so this is usually `None`.
    pub source_mac: Option<String>,
    pub device: DiscoveredDevice,
}

impl DeviceReport {
    /// The address to render for this device. The MAC-and-IP field embedded
    /// in the reply wins over the transport source address; the two are not
    /// cross-validated.
    pub fn resolved_ip(&self) -> Ipv4Addr {
        self.device
            .mac_and_ip
            .as_ref()
            .map(|pair| pair.ip)
            .unwrap_or(self.source_ip)
    }

    /// The hardware address to render for this device. Embedded fields win
    /// over transport metadata.
    pub fn resolved_mac(&self) -> Option<&str> {
        self.device
            .mac
            .as_deref()
            .or_else(|| self.device.mac_and_ip.as_ref().map(|pair| pair.mac.as_str()))
            .or(self.source_mac.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(device: DiscoveredDevice) -> DeviceReport {
        DeviceReport {
            source_ip: Ipv4Addr::new(10, 0, 0, 9),
            source_mac: Some("11:22:33:44:55:66".to_string()),
            device,
        }
    }

    #[test]
    fn test_resolved_ip_prefers_embedded_pair() {
        let r = report(DiscoveredDevice {
            mac_and_ip: Some(MacAndIp {
                mac: "aa:bb:cc:dd:ee:ff".to_string(),
                ip: Ipv4Addr::new(192, 168, 1, 1),
            }),
            ..Default::default()
        });
        assert_eq!(r.resolved_ip(), Ipv4Addr::new(192, 168, 1, 1));
    }

    #[test]
    fn test_resolved_ip_falls_back_to_source() {
        let r = report(DiscoveredDevice::default());
        assert_eq!(r.resolved_ip(), Ipv4Addr::new(10, 0, 0, 9));
    }

    #[test]
    fn test_resolved_mac_preference_order() {
        let r = report(DiscoveredDevice {
            mac: Some("aa:aa:aa:aa:aa:aa".to_string()),
            mac_and_ip: Some(MacAndIp {
                mac: "bb:bb:bb:bb:bb:bb".to_string(),
                ip: Ipv4Addr::new(192, 168, 1, 1),
            }),
            ..Default::default()
        });
        assert_eq!(r.resolved_mac(), Some("aa:aa:aa:aa:aa:aa"));

        let r = report(DiscoveredDevice {
            mac_and_ip: Some(MacAndIp {
                mac: "bb:bb:bb:bb:bb:bb".to_string(),
                ip: Ipv4Addr::new(192, 168, 1, 1),
            }),
            ..Default::default()
        });
        assert_eq!(r.resolved_mac(), Some("bb:bb:bb:bb:bb:bb"));

        let r = report(DiscoveredDevice::default());
        assert_eq!(r.resolved_mac(), Some("11:22:33:44:55:66"));
    }

    #[test]
    fn test_fresh_devices_do_not_share_unknown_map() {
        let mut first = DiscoveredDevice::default();
        first.unknown.insert(0x99, vec![0xde, 0xad]);
        let second = DiscoveredDevice::default();
        assert!(second.unknown.is_empty());
    }
}
