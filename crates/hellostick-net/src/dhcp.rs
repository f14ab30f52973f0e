//! DHCP Protocol Implementation
//!
//! Provides DHCP message parsing and response building for the access
//! point's stateless address server, plus a bounded lease table. The table
//! records which client MACs have been handed an address; its size is what
//! the status screen shows as the connected-client count.

use core::net::Ipv4Addr;

/// DHCP message types
pub const DHCP_DISCOVER: u8 = 1;
pub const DHCP_OFFER: u8 = 2;
pub const DHCP_REQUEST: u8 = 3;
pub const DHCP_ACK: u8 = 5;

/// DHCP options
const DHCP_OPTION_MESSAGE_TYPE: u8 = 53;
const DHCP_OPTION_SERVER_ID: u8 = 54;
const DHCP_OPTION_LEASE_TIME: u8 = 51;
const DHCP_OPTION_SUBNET_MASK: u8 = 1;
const DHCP_OPTION_ROUTER: u8 = 3;
const DHCP_OPTION_END: u8 = 255;

/// DHCP magic cookie
const DHCP_MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

/// Lease configuration
const LEASE_TIME_SECS: u32 = 3600; // 1 hour
const SUBNET_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// Minimum DHCP packet size (BOOTP header + magic cookie)
const MIN_DHCP_PACKET_SIZE: usize = 240;

/// Parsed DHCP request
#[derive(Debug)]
pub struct DhcpRequest {
    /// Transaction ID
    pub xid: [u8; 4],
    /// Client MAC address
    pub client_mac: [u8; 6],
    /// Message type (DISCOVER, REQUEST, etc.)
    pub message_type: u8,
}

/// Parse a DHCP request from a raw packet
///
/// Returns `None` if the packet is invalid or not a BOOTREQUEST
pub fn parse_dhcp_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < MIN_DHCP_PACKET_SIZE {
        return None;
    }

    // Check op code (must be BOOTREQUEST = 1)
    if packet[0] != 1 {
        return None;
    }

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[4..8]);

    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    if packet[236..240] != DHCP_MAGIC_COOKIE {
        return None;
    }

    // Find message type in options
    let options = &packet[240..];
    let message_type = find_dhcp_option(options, DHCP_OPTION_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())?;

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Allocate an IP address for a client based on their MAC address
///
/// Uses a simple stateless algorithm to derive a consistent IP from the MAC.
/// Returns an address in the range 192.168.4.2 - 192.168.4.50
pub fn allocate_ip(mac: &[u8; 6]) -> Ipv4Addr {
    let offset = ((mac[4] ^ mac[5]) % 49) + 2;
    Ipv4Addr::new(192, 168, 4, offset)
}

/// Build a DHCP response (OFFER or ACK)
///
/// Returns the length of the response packet
pub fn build_dhcp_response(
    ap_ip_address: Ipv4Addr,
    buffer: &mut [u8],
    request: &DhcpRequest,
    offered_ip: Ipv4Addr,
    response_type: u8,
) -> usize {
    buffer.fill(0);

    // BOOTP header
    buffer[0] = 2; // op: BOOTREPLY
    buffer[1] = 1; // htype: Ethernet
    buffer[2] = 6; // hlen: MAC length
    buffer[3] = 0; // hops

    // Transaction ID
    buffer[4..8].copy_from_slice(&request.xid);

    // secs, flags
    buffer[8..10].copy_from_slice(&[0, 0]);
    buffer[10..12].copy_from_slice(&[0x80, 0x00]); // Broadcast flag

    // ciaddr (client IP) - 0
    // yiaddr (your IP) - offered IP
    buffer[16..20].copy_from_slice(&offered_ip.octets());

    // siaddr (server IP)
    buffer[20..24].copy_from_slice(&ap_ip_address.octets());

    // giaddr (gateway IP) - 0

    // chaddr (client hardware address)
    buffer[28..34].copy_from_slice(&request.client_mac);

    // sname, file - leave as 0

    // DHCP magic cookie at offset 236
    buffer[236..240].copy_from_slice(&DHCP_MAGIC_COOKIE);

    // DHCP options start at 240
    let mut opt_idx = 240;

    // Message type
    buffer[opt_idx] = DHCP_OPTION_MESSAGE_TYPE;
    buffer[opt_idx + 1] = 1;
    buffer[opt_idx + 2] = response_type;
    opt_idx += 3;

    // Server identifier
    buffer[opt_idx] = DHCP_OPTION_SERVER_ID;
    buffer[opt_idx + 1] = 4;
    buffer[opt_idx + 2..opt_idx + 6].copy_from_slice(&ap_ip_address.octets());
    opt_idx += 6;

    // Lease time
    buffer[opt_idx] = DHCP_OPTION_LEASE_TIME;
    buffer[opt_idx + 1] = 4;
    buffer[opt_idx + 2..opt_idx + 6].copy_from_slice(&LEASE_TIME_SECS.to_be_bytes());
    opt_idx += 6;

    // Subnet mask
    buffer[opt_idx] = DHCP_OPTION_SUBNET_MASK;
    buffer[opt_idx + 1] = 4;
    buffer[opt_idx + 2..opt_idx + 6].copy_from_slice(&SUBNET_MASK.octets());
    opt_idx += 6;

    // Router (gateway)
    buffer[opt_idx] = DHCP_OPTION_ROUTER;
    buffer[opt_idx + 1] = 4;
    buffer[opt_idx + 2..opt_idx + 6].copy_from_slice(&ap_ip_address.octets());
    opt_idx += 6;

    // End option
    buffer[opt_idx] = DHCP_OPTION_END;
    opt_idx += 1;

    opt_idx
}

/// Find a DHCP option in the options section
///
/// The options slice should start AFTER the magic cookie (at offset 240 in
/// the packet)
fn find_dhcp_option(options: &[u8], option_code: u8) -> Option<&[u8]> {
    let mut i = 0;

    while i < options.len() {
        let code = options[i];
        if code == DHCP_OPTION_END {
            break;
        }
        if code == 0 {
            // Padding
            i += 1;
            continue;
        }
        if i + 1 >= options.len() {
            break;
        }
        let len = options[i + 1] as usize;
        if i + 2 + len > options.len() {
            break;
        }
        if code == option_code {
            return Some(&options[i + 2..i + 2 + len]);
        }
        i += 2 + len;
    }
    None
}

/// Bounded record of clients that have been handed a lease.
///
/// Each distinct MAC counts once; a full table stops admitting new entries
/// rather than evicting, which caps the displayed count at `N`.
pub struct LeaseTable<const N: usize> {
    macs: heapless::Vec<[u8; 6], N>,
}

impl<const N: usize> LeaseTable<N> {
    pub const fn new() -> Self {
        Self {
            macs: heapless::Vec::new(),
        }
    }

    /// Record a client and return the updated count.
    pub fn note(&mut self, mac: [u8; 6]) -> u32 {
        if !self.macs.contains(&mac) {
            let _ = self.macs.push(mac);
        }
        self.count()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn count(&self) -> u32 {
        self.macs.len() as u32
    }
}

impl<const N: usize> Default for LeaseTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discover_packet(mac: [u8; 6]) -> std::vec::Vec<u8> {
        let mut packet = std::vec![0u8; 300];
        packet[0] = 1; // BOOTREQUEST
        packet[4..8].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        packet[28..34].copy_from_slice(&mac);
        packet[236..240].copy_from_slice(&DHCP_MAGIC_COOKIE);
        packet[240] = DHCP_OPTION_MESSAGE_TYPE;
        packet[241] = 1;
        packet[242] = DHCP_DISCOVER;
        packet[243] = DHCP_OPTION_END;
        packet
    }

    #[test]
    fn parses_a_discover_request() {
        let mac = [2, 0, 0, 0, 0x12, 0x34];
        let request = parse_dhcp_request(&discover_packet(mac)).unwrap();
        assert_eq!(request.message_type, DHCP_DISCOVER);
        assert_eq!(request.client_mac, mac);
        assert_eq!(request.xid, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn rejects_short_or_reply_packets() {
        assert!(parse_dhcp_request(&[0u8; 100]).is_none());

        let mut reply = discover_packet([0; 6]);
        reply[0] = 2; // BOOTREPLY
        assert!(parse_dhcp_request(&reply).is_none());
    }

    #[test]
    fn rejects_a_bad_magic_cookie() {
        let mut packet = discover_packet([0; 6]);
        packet[236] = 0;
        assert!(parse_dhcp_request(&packet).is_none());
    }

    #[test]
    fn allocated_addresses_stay_in_the_pool() {
        for a in 0..=255u8 {
            let ip = allocate_ip(&[0, 0, 0, 0, 7, a]);
            let host = ip.octets()[3];
            assert!((2..=50).contains(&host), "host byte {host} out of pool");
        }
    }

    #[test]
    fn allocation_is_stable_per_mac() {
        let mac = [2, 0, 0, 0, 9, 9];
        assert_eq!(allocate_ip(&mac), allocate_ip(&mac));
    }

    #[test]
    fn builds_an_offer_for_a_discover() {
        let server = Ipv4Addr::new(192, 168, 4, 1);
        let mac = [2, 0, 0, 0, 0, 1];
        let request = parse_dhcp_request(&discover_packet(mac)).unwrap();
        let offered = allocate_ip(&request.client_mac);

        let mut buffer = [0u8; 576];
        let len =
            build_dhcp_response(server, &mut buffer, &request, offered, DHCP_OFFER);

        let response = &buffer[..len];
        assert_eq!(response[0], 2); // BOOTREPLY
        assert_eq!(&response[4..8], &request.xid);
        assert_eq!(&response[16..20], &offered.octets());
        assert_eq!(&response[20..24], &server.octets());
        assert_eq!(&response[28..34], &mac);
        assert_eq!(&response[236..240], &DHCP_MAGIC_COOKIE);
        assert_eq!(
            find_dhcp_option(&response[240..], DHCP_OPTION_MESSAGE_TYPE),
            Some(&[DHCP_OFFER][..])
        );
        assert_eq!(
            find_dhcp_option(&response[240..], DHCP_OPTION_SERVER_ID),
            Some(&server.octets()[..])
        );
    }

    #[test]
    fn lease_table_counts_distinct_macs_once() {
        let mut table = LeaseTable::<4>::new();
        assert_eq!(table.note([1, 0, 0, 0, 0, 0]), 1);
        assert_eq!(table.note([2, 0, 0, 0, 0, 0]), 2);
        assert_eq!(table.note([1, 0, 0, 0, 0, 0]), 2);
    }

    #[test]
    fn lease_table_saturates_at_capacity() {
        let mut table = LeaseTable::<2>::new();
        table.note([1, 0, 0, 0, 0, 0]);
        table.note([2, 0, 0, 0, 0, 0]);
        assert_eq!(table.note([3, 0, 0, 0, 0, 0]), 2);
    }
}
