use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur while parsing a hardware address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HwAddrError {
    /// Input does not match any of the accepted delimiter styles.
    #[error("'{0}' is not a valid hardware address; expected 12 hex digits as aa:bb:cc:dd:ee:ff, aa-bb-cc-dd-ee-ff, or aabbccddeeff")]
    Malformed(String),
}

/// A 48-bit hardware (MAC) address.
///
/// Accepts colon-delimited, hyphen-delimited, or bare 12-hex-digit input and
/// stores the raw octets, so all three spellings of the same address compare
/// equal. The canonical text form is hyphen-delimited uppercase pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HwAddr([u8; 6]);

impl HwAddr {
    /// Parse a hardware address from any of the three accepted forms.
    pub fn parse(input: &str) -> Result<Self, HwAddrError> {
        let trimmed = input.trim();
        let digits: String = match delimiter_of(trimmed) {
            Some(delim) => {
                let pairs: Vec<&str> = trimmed.split(delim).collect();
                if pairs.len() != 6 || pairs.iter().any(|p| p.len() != 2) {
                    return Err(HwAddrError::Malformed(input.to_string()));
                }
                pairs.concat()
            }
            None => trimmed.to_string(),
        };

        if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HwAddrError::Malformed(input.to_string()));
        }

        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            // Slicing is safe: exactly 12 ASCII hex digits at this point.
            *octet = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| HwAddrError::Malformed(input.to_string()))?;
        }
        Ok(Self(octets))
    }

    /// Canonical hyphen-delimited uppercase form, e.g. `AA-BB-CC-DD-EE-FF`.
    pub fn canonical(&self) -> String {
        self.0
            .iter()
            .map(|o| format!("{o:02X}"))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Delimiter-free uppercase form, e.g. `AABBCCDDEEFF`.
    pub fn bare(&self) -> String {
        self.0.iter().map(|o| format!("{o:02X}")).collect()
    }
}

fn delimiter_of(input: &str) -> Option<char> {
    if input.contains(':') {
        Some(':')
    } else if input.contains('-') {
        Some('-')
    } else {
        None
    }
}

impl Display for HwAddr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for HwAddr {
    type Err = HwAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HwAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{HwAddr, HwAddrError};

    #[test]
    fn accepts_all_three_delimiter_styles() {
        let colon = HwAddr::parse("aa:bb:cc:dd:ee:ff").expect("colon form");
        let hyphen = HwAddr::parse("AA-BB-CC-DD-EE-FF").expect("hyphen form");
        let bare = HwAddr::parse("aabbccddeeff").expect("bare form");

        assert_eq!(colon, hyphen);
        assert_eq!(hyphen, bare);
        assert_eq!(colon.canonical(), "AA-BB-CC-DD-EE-FF");
        assert_eq!(bare.canonical(), "AA-BB-CC-DD-EE-FF");
    }

    #[test]
    fn bare_form_strips_delimiters_and_uppercases() {
        let addr = HwAddr::parse("00:1a:2b:3c:4d:5e").expect("parse");
        assert_eq!(addr.bare(), "001A2B3C4D5E");
    }

    #[test]
    fn display_matches_canonical() {
        let addr = HwAddr::parse("001a2b3c4d5e").expect("parse");
        assert_eq!(addr.to_string(), addr.canonical());
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        for bad in ["aa:bb:cc:dd:ee", "aabbccddee", "aabbccddeeff00", "aa:bb:cc:dd:ee:ff:00"] {
            assert!(
                matches!(HwAddr::parse(bad), Err(HwAddrError::Malformed(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_hex_and_mixed_grouping() {
        for bad in ["gg:bb:cc:dd:ee:ff", "aab:bcc:dde:eff", "a-ab-bc-cd-de-eff", ""] {
            assert!(HwAddr::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let addr = HwAddr::parse("  aa-bb-cc-dd-ee-ff ").expect("parse");
        assert_eq!(addr.canonical(), "AA-BB-CC-DD-EE-FF");
    }
}
