//! Broadcast discovery service.
//!
//! Sends a single probe datagram and collects replies until the timeout
//! elapses, measured from send time. Each reply is decoded independently;
//! one bad reply never stops the run.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{CoreError, DecodeError};
use crate::protocol::probe::{build_probe, DISCOVERY_PORT};
use crate::protocol::response;
use crate::types::DeviceReport;

/// Receive buffer size; discovery responses are well under this.
const MAX_DATAGRAM: usize = 1024;

/// Options for one discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Destination port for the probe.
    pub port: u16,
    /// How long to collect replies after the probe is sent.
    pub timeout: Duration,
    /// Probe destination address.
    pub broadcast_addr: Ipv4Addr,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            port: DISCOVERY_PORT,
            timeout: Duration::from_secs(3),
            broadcast_addr: Ipv4Addr::BROADCAST,
        }
    }
}

/// Create a UDP socket allowed to send to the broadcast address, bound to
/// an ephemeral port.
fn create_broadcast_socket() -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_broadcast(true)?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0));
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Send one probe and collect device reports until the window closes.
///
/// Datagrams that do not carry the discovery magic are dropped at debug
/// level; malformed replies from matching devices are logged as warnings
/// with their details. A later reply from the same address replaces the
/// earlier one. Reports are returned sorted by source address.
pub async fn discover(options: DiscoveryOptions) -> Result<Vec<DeviceReport>, CoreError> {
    let std_socket = create_broadcast_socket()?;
    let socket = UdpSocket::from_std(std_socket)?;

    let probe = build_probe();
    let target = SocketAddr::from((options.broadcast_addr, options.port));
    socket.send_to(&probe, target).await?;
    debug!(%target, timeout = ?options.timeout, "probe sent");

    let mut devices: HashMap<Ipv4Addr, DeviceReport> = HashMap::new();
    let mut buf = vec![0u8; MAX_DATAGRAM];
    let deadline = Instant::now() + options.timeout;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }

        match timeout(remaining, socket.recv_from(&mut buf)).await {
            Ok(Ok((len, addr))) => {
                let source_ip = match addr.ip() {
                    IpAddr::V4(ip) => ip,
                    IpAddr::V6(_) => continue,
                };
                let payload = &buf[..len];
                if payload == probe {
                    // our own broadcast looped back
                    debug!(%source_ip, "ignoring echoed probe");
                    continue;
                }
                match response::decode(payload) {
                    Ok(device) => {
                        devices.insert(
                            source_ip,
                            DeviceReport {
                                source_ip,
                                // not visible through a plain UDP socket
                                source_mac: None,
                                device,
                            },
                        );
                    }
                    Err(DecodeError::InvalidHeader) => {
                        debug!(%source_ip, "not a discovery response, ignoring");
                    }
                    Err(e) => {
                        warn!(%source_ip, error = %e, "failed to parse discovery response");
                    }
                }
            }
            Ok(Err(e)) => {
                warn!(error = %e, "UDP receive error");
            }
            Err(_) => {
                // window closed
                break;
            }
        }
    }

    let mut reports: Vec<DeviceReport> = devices.into_values().collect();
    reports.sort_by_key(|r| r.source_ip);
    Ok(reports)
}
