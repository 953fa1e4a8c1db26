use super::exec;
use crate::backend::{BackendError, DirectoryHost, IdentityDirectory};

const MISSING: &[&str] = &["cannot find", "does not exist", "not found"];

/// Directory client over the `ds*` admin tools.
pub struct DsDirectoryClient {
    server: String,
}

impl DsDirectoryClient {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }

    /// Distinguished name of the computer object, if it exists.
    fn find_dn(&self, name: &str) -> Result<Option<String>, BackendError> {
        let output = exec::run("dsquery", &["computer", "-s", &self.server, "-name", name])?;
        Ok(output.lines().map(unquote).find(|l| !l.is_empty()))
    }
}

impl IdentityDirectory for DsDirectoryClient {
    fn exists(&self, name: &str) -> Result<bool, BackendError> {
        Ok(self.find_dn(name)?.is_some())
    }

    fn create(&self, name: &str, container: &str) -> Result<(), BackendError> {
        let dn = format!("CN={name},{container}");
        exec::run("dsadd", &["computer", &dn, "-s", &self.server])?;
        Ok(())
    }

    fn delete_recursive(&self, name: &str) -> Result<bool, BackendError> {
        let Some(dn) = self.find_dn(name)? else {
            return Ok(false);
        };
        exec::run_allow_missing(
            "dsrm",
            &["-subtree", "-noprompt", "-s", &self.server, &dn],
            MISSING,
        )
    }

    fn containers(&self) -> Result<Vec<String>, BackendError> {
        let output = exec::run("dsquery", &["ou", "-s", &self.server, "-limit", "0"])?;
        Ok(output
            .lines()
            .map(unquote)
            .filter(|l| !l.is_empty())
            .collect())
    }

    fn list_hosts(&self, os_filter: Option<&str>) -> Result<Vec<DirectoryHost>, BackendError> {
        let output = exec::run(
            "dsquery",
            &[
                "*",
                "-s",
                &self.server,
                "-filter",
                "(objectClass=computer)",
                "-attr",
                "name",
                "-attr",
                "operatingSystem",
                "-limit",
                "0",
            ],
        )?;
        Ok(parse_host_rows(&output, os_filter))
    }
}

fn unquote(line: &str) -> String {
    line.trim().trim_matches('"').to_string()
}

/// Parse a `dsquery * -attr name operatingSystem` table.
///
/// The first non-empty line is the column header; each data row is the host
/// name followed by an optional operating-system string. An OS filter is a
/// case-insensitive substring match.
pub fn parse_host_rows(output: &str, os_filter: Option<&str>) -> Vec<DirectoryHost> {
    let filter = os_filter.map(str::to_ascii_lowercase);
    let mut hosts = Vec::new();
    let mut header_seen = false;

    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let Some(name) = parts.next() else {
            continue;
        };
        let operating_system = parts
            .next()
            .map(str::trim)
            .filter(|os| !os.is_empty())
            .map(ToOwned::to_owned);

        if let Some(filter) = &filter {
            let matched = operating_system
                .as_deref()
                .is_some_and(|os| os.to_ascii_lowercase().contains(filter));
            if !matched {
                continue;
            }
        }

        hosts.push(DirectoryHost {
            name: name.to_string(),
            operating_system,
        });
    }

    hosts
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::parse_host_rows;

    const OUTPUT: &str = "\
  name            operatingSystem
  ws-accounting   Windows 11 Enterprise
  ws-frontdesk    Windows 10 Pro
  srv-backup      Windows Server 2022
  kiosk-lobby
";

    #[test]
    fn parses_rows_after_header() {
        let hosts = parse_host_rows(OUTPUT, None);
        assert_eq!(hosts.len(), 4);
        assert_eq!(hosts[0].name, "ws-accounting");
        assert_eq!(
            hosts[0].operating_system.as_deref(),
            Some("Windows 11 Enterprise")
        );
        assert_eq!(hosts[3].name, "kiosk-lobby");
        assert_eq!(hosts[3].operating_system, None);
    }

    #[test]
    fn os_filter_is_case_insensitive_substring() {
        let hosts = parse_host_rows(OUTPUT, Some("server"));
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "srv-backup");
    }

    #[test]
    fn os_filter_excludes_hosts_without_os() {
        let hosts = parse_host_rows(OUTPUT, Some("windows"));
        assert_eq!(hosts.len(), 3);
    }

    #[test]
    fn empty_output_yields_no_hosts() {
        assert!(parse_host_rows("", None).is_empty());
    }
}
