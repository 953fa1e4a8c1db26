use serde::Serialize;

use crate::hwaddr::HwAddr;

/// Whether a filter entry admits or blocks its hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Disposition {
    Allow,
    Deny,
}

/// One row of the address-assignment service's MAC filter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterEntry {
    pub hwaddr: HwAddr,
    pub disposition: Disposition,
    pub description: String,
}

/// Parse a dumped filter table into typed entries.
///
/// The dump is line-oriented: section banners announce the allow and deny
/// lists, data rows start with a hardware address and end with a free-form
/// description, and everything else (column headers, separators, status
/// preamble) is decoration. The parser tracks the current section and skips
/// any row it cannot read; a garbled row must not take down the whole dump.
pub fn parse_filter_dump(dump: &str) -> Vec<FilterEntry> {
    let mut entries = Vec::new();
    let mut current: Option<Disposition> = None;

    for line in dump.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.contains("allow list") {
            current = Some(Disposition::Allow);
            continue;
        }
        if lowered.contains("deny list") {
            current = Some(Disposition::Deny);
            continue;
        }

        let Some(disposition) = current else {
            continue;
        };
        let Some((first, rest)) = split_first_token(trimmed) else {
            continue;
        };
        let Ok(hwaddr) = HwAddr::parse(first) else {
            continue;
        };

        entries.push(FilterEntry {
            hwaddr,
            disposition,
            description: rest.trim().to_string(),
        });
    }

    entries
}

fn split_first_token(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let first = parts.next()?;
    Some((first, parts.next().unwrap_or("")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse_filter_dump, Disposition};
    use crate::hwaddr::HwAddr;

    const DUMP: &str = "\
The filter status on the server is: Enforced

===========================================================
   MAC Address               Description
===========================================================
MAC addresses in the Allow List:

   AA-AA-AA-AA-AA-AA         testnamehost
   00-1A-2B-3C-4D-5E         printer-3 east wing

MAC addresses in the Deny List:

   DE-AD-BE-EF-00-01         blocked loaner
";

    #[test]
    fn parses_allow_and_deny_sections() {
        let entries = parse_filter_dump(DUMP);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].hwaddr, HwAddr::parse("aaaaaaaaaaaa").expect("hw"));
        assert_eq!(entries[0].disposition, Disposition::Allow);
        assert_eq!(entries[0].description, "testnamehost");

        assert_eq!(entries[1].description, "printer-3 east wing");
        assert_eq!(entries[1].disposition, Disposition::Allow);

        assert_eq!(entries[2].disposition, Disposition::Deny);
        assert_eq!(entries[2].description, "blocked loaner");
    }

    #[test]
    fn skips_rows_before_any_section_banner() {
        let dump = "AA-AA-AA-AA-AA-AA stray row\nMAC addresses in the Allow List:\nBB-BB-BB-BB-BB-BB kept";
        let entries = parse_filter_dump(dump);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "kept");
    }

    #[test]
    fn skips_unparseable_rows() {
        let dump = "MAC addresses in the Allow List:\nnot-a-mac something\nAA-AA-AA-AA-AA-AA ok";
        let entries = parse_filter_dump(dump);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "ok");
    }

    #[test]
    fn empty_dump_yields_no_entries() {
        assert_eq!(parse_filter_dump(""), Vec::new());
    }

    #[test]
    fn description_may_be_empty() {
        let dump = "MAC addresses in the Allow List:\nAA-AA-AA-AA-AA-AA";
        let entries = parse_filter_dump(dump);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "");
    }
}
