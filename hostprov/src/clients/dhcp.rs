use std::net::Ipv4Addr;

use hostid_core::{parse_filter_dump, parse_ipv4, FilterEntry, HwAddr};

use super::exec;
use crate::backend::{AddressFilter, BackendError, Reservations, ScopeClient};

const MISSING: &[&str] = &["not exist", "not found", "not a reserved"];

/// DHCP service client driven through `netsh dhcp server`.
pub struct NetshDhcpClient {
    server: String,
}

impl NetshDhcpClient {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    fn server_arg(&self) -> String {
        format!("\\\\{}", self.server)
    }
}

impl AddressFilter for NetshDhcpClient {
    fn add_allow(&self, hwaddr: &HwAddr, description: &str) -> Result<(), BackendError> {
        let server = self.server_arg();
        let mac = hwaddr.canonical();
        exec::run(
            "netsh",
            &[
                "dhcp", "server", &server, "v4", "add", "filter", "allow", &mac, description,
            ],
        )?;
        Ok(())
    }

    fn delete_entry(&self, hwaddr: &HwAddr) -> Result<bool, BackendError> {
        let server = self.server_arg();
        let mac = hwaddr.canonical();
        exec::run_allow_missing(
            "netsh",
            &["dhcp", "server", &server, "v4", "delete", "filter", &mac],
            MISSING,
        )
    }

    fn list(&self) -> Result<Vec<FilterEntry>, BackendError> {
        let server = self.server_arg();
        let dump = exec::run(
            "netsh",
            &["dhcp", "server", &server, "v4", "show", "filter"],
        )?;
        Ok(parse_filter_dump(&dump))
    }
}

impl Reservations for NetshDhcpClient {
    fn create(
        &self,
        scope: &str,
        addr: Ipv4Addr,
        hwaddr: &HwAddr,
        name: &str,
        description: &str,
    ) -> Result<(), BackendError> {
        let server = self.server_arg();
        let address = addr.to_string();
        let mac = hwaddr.bare();
        exec::run(
            "netsh",
            &[
                "dhcp",
                "server",
                &server,
                "scope",
                scope,
                "add",
                "reservedip",
                &address,
                &mac,
                name,
                description,
            ],
        )?;
        Ok(())
    }

    fn delete(&self, scope: &str, addr: Ipv4Addr, hwaddr: &HwAddr) -> Result<bool, BackendError> {
        let server = self.server_arg();
        let address = addr.to_string();
        let mac = hwaddr.bare();
        exec::run_allow_missing(
            "netsh",
            &[
                "dhcp",
                "server",
                &server,
                "scope",
                scope,
                "delete",
                "reservedip",
                &address,
                &mac,
            ],
            MISSING,
        )
    }

    fn scope_clients(&self, scope: &str) -> Result<Vec<ScopeClient>, BackendError> {
        let server = self.server_arg();
        let listing = exec::run(
            "netsh",
            &[
                "dhcp", "server", &server, "scope", scope, "show", "clients", "1",
            ],
        )?;
        Ok(parse_scope_clients(&listing))
    }
}

/// Parse a scope client listing into (address, hardware address) pairs.
///
/// Data rows start with the client address; the hardware address appears as
/// its own hyphenated token further along. Headers, separators, and summary
/// lines contain neither and fall through.
pub fn parse_scope_clients(listing: &str) -> Vec<ScopeClient> {
    let mut clients = Vec::new();
    for line in listing.lines() {
        let mut tokens = line.split_whitespace().filter(|t| *t != "-");
        let Some(first) = tokens.next() else {
            continue;
        };
        let Ok(address) = parse_ipv4(first) else {
            continue;
        };
        let Some(hwaddr) = tokens.find_map(|t| HwAddr::parse(t).ok()) else {
            continue;
        };
        clients.push(ScopeClient { address, hwaddr });
    }
    clients
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use hostid_core::HwAddr;
    use pretty_assertions::assert_eq;

    use super::parse_scope_clients;

    const LISTING: &str = "\
Changed the current scope context to 192.168.11.0 scope.

Type : N - NONE, D - DHCP, B - BOOTP, U - UNSPECIFIED, R - RESERVATION IP
==============================================================================
IP Address      -    Subnet Mask    -  Unique ID          - Lease Expires       -Type
------------------------------------------------------------------------------
192.168.11.120  -  255.255.255.0   -  aa-aa-aa-aa-aa-aa   -NEVER EXPIRES       -R
192.168.11.45   -  255.255.255.0   -  00-1a-2b-3c-4d-5e   -3/14/2026 09:12:00  -D

No of Clients(version 4): 2 in the Scope : 192.168.11.0
";

    #[test]
    fn parses_data_rows_only() {
        let clients = parse_scope_clients(LISTING);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].address, Ipv4Addr::new(192, 168, 11, 120));
        assert_eq!(
            clients[0].hwaddr,
            HwAddr::parse("aa-aa-aa-aa-aa-aa").expect("hw")
        );
        assert_eq!(clients[1].address, Ipv4Addr::new(192, 168, 11, 45));
    }

    #[test]
    fn row_without_hardware_address_is_skipped() {
        let clients = parse_scope_clients("192.168.11.9 - 255.255.255.0 - BAD-ID - R\n");
        assert!(clients.is_empty());
    }

    #[test]
    fn empty_listing_yields_no_clients() {
        assert!(parse_scope_clients("").is_empty());
    }
}
