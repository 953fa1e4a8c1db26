use std::net::Ipv4Addr;

use hostid_core::parse_ipv4;

use super::exec;
use crate::backend::{BackendError, NameRecords};

const MISSING: &[&str] = &["does not exist", "not found", "dns_error_record_does_not_exist"];
const NXDOMAIN: &[&str] = &["non-existent domain", "can't find", "nxdomain", "server failed"];

/// Name-resolution client: `dnscmd` for record mutation, `nslookup` against
/// the same server for resolution.
pub struct DnsCmdClient {
    server: String,
    forward_zone: String,
}

impl DnsCmdClient {
    pub fn new(server: impl Into<String>, forward_zone: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            forward_zone: forward_zone.into(),
        }
    }

    fn lookup(&self, query: &str) -> Result<Option<String>, BackendError> {
        match exec::run("nslookup", &[query, &self.server]) {
            Ok(output) => Ok(Some(output)),
            // nslookup exits non-zero on NXDOMAIN; that is an answer, not a failure
            Err(BackendError::Tool { stderr, .. })
                if NXDOMAIN.iter().any(|m| stderr.to_ascii_lowercase().contains(m)) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

impl NameRecords for DnsCmdClient {
    fn resolve_forward(&self, name: &str) -> Result<Option<Ipv4Addr>, BackendError> {
        let query = format!("{name}.{}", self.forward_zone);
        match self.lookup(&query)? {
            Some(output) => Ok(parse_forward_answer(&output)),
            None => Ok(None),
        }
    }

    fn resolve_reverse(&self, addr: Ipv4Addr) -> Result<Option<String>, BackendError> {
        let query = addr.to_string();
        match self.lookup(&query)? {
            Some(output) => Ok(parse_reverse_answer(&output)),
            None => Ok(None),
        }
    }

    fn create_a(&self, name: &str, addr: Ipv4Addr) -> Result<(), BackendError> {
        let address = addr.to_string();
        exec::run(
            "dnscmd",
            &[
                &self.server,
                "/RecordAdd",
                &self.forward_zone,
                name,
                "A",
                &address,
            ],
        )?;
        Ok(())
    }

    fn create_ptr(
        &self,
        fqdn: &str,
        addr: Ipv4Addr,
        reverse_zone: &str,
    ) -> Result<(), BackendError> {
        // In a /24 reverse zone the record name is the host octet.
        let host_octet = addr.octets()[3].to_string();
        exec::run(
            "dnscmd",
            &[
                &self.server,
                "/RecordAdd",
                reverse_zone,
                &host_octet,
                "PTR",
                fqdn,
            ],
        )?;
        Ok(())
    }

    fn delete_a(&self, name: &str) -> Result<bool, BackendError> {
        exec::run_allow_missing(
            "dnscmd",
            &[
                &self.server,
                "/RecordDelete",
                &self.forward_zone,
                name,
                "A",
                "/f",
            ],
            MISSING,
        )
    }

    fn delete_ptr(&self, addr: Ipv4Addr, reverse_zone: &str) -> Result<bool, BackendError> {
        let host_octet = addr.octets()[3].to_string();
        exec::run_allow_missing(
            "dnscmd",
            &[
                &self.server,
                "/RecordDelete",
                reverse_zone,
                &host_octet,
                "PTR",
                "/f",
            ],
            MISSING,
        )
    }
}

/// Pull the answer address out of a forward lookup.
///
/// The resolver's own identity comes first (`Server:`/`Address:` block);
/// the answer is the address following the last `Name:` line.
pub fn parse_forward_answer(output: &str) -> Option<Ipv4Addr> {
    let mut answer = None;
    let mut in_answer = false;
    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("Name:") {
            in_answer = true;
            continue;
        }
        if !in_answer {
            continue;
        }
        let value = trimmed
            .strip_prefix("Addresses:")
            .or_else(|| trimmed.strip_prefix("Address:"))
            .unwrap_or(trimmed)
            .trim();
        if let Ok(addr) = parse_ipv4(value) {
            answer = Some(addr);
        }
    }
    answer
}

/// Pull the answer name out of a reverse lookup.
///
/// Handles both answer shapes: `x.x.x.x.in-addr.arpa  name = host.domain.`
/// and a trailing `Name:  host.domain` block.
pub fn parse_reverse_answer(output: &str) -> Option<String> {
    let mut answer = None;
    let mut past_server_block = false;
    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            past_server_block = true;
            continue;
        }
        if let Some((_, name)) = trimmed.split_once("name = ") {
            answer = Some(name.trim().trim_end_matches('.').to_string());
            continue;
        }
        if past_server_block {
            if let Some(name) = trimmed.strip_prefix("Name:") {
                answer = Some(name.trim().trim_end_matches('.').to_string());
            }
        }
    }
    answer
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use pretty_assertions::assert_eq;

    use super::{parse_forward_answer, parse_reverse_answer};

    #[test]
    fn forward_answer_skips_the_server_block() {
        let output = "\
Server:  ns1.corp.example.com
Address:  10.0.0.53

Name:    testnamehost.corp.example.com
Address:  192.168.11.120
";
        assert_eq!(
            parse_forward_answer(output),
            Some(Ipv4Addr::new(192, 168, 11, 120))
        );
    }

    #[test]
    fn forward_answer_without_name_block_is_none() {
        let output = "Server:  ns1.corp.example.com\nAddress:  10.0.0.53\n";
        assert_eq!(parse_forward_answer(output), None);
    }

    #[test]
    fn reverse_answer_reads_name_equals_form() {
        let output = "\
Server:  ns1.corp.example.com
Address:  10.0.0.53

120.11.168.192.in-addr.arpa     name = testnamehost.corp.example.com.
";
        assert_eq!(
            parse_reverse_answer(output),
            Some("testnamehost.corp.example.com".to_string())
        );
    }

    #[test]
    fn reverse_answer_reads_name_block_form() {
        let output = "\
Server:  ns1.corp.example.com
Address:  10.0.0.53

Name:    testnamehost.corp.example.com
Address:  192.168.11.120
";
        assert_eq!(
            parse_reverse_answer(output),
            Some("testnamehost.corp.example.com".to_string())
        );
    }

    #[test]
    fn reverse_answer_ignores_the_server_name() {
        let output = "Server:  ns1.corp.example.com\nAddress:  10.0.0.53\n";
        assert_eq!(parse_reverse_answer(output), None);
    }
}
