use std::path::Path;

use serde::Deserialize;

/// A fixed loaner-laptop pool slot: a reserved name pre-bound to an address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaptopSlot {
    pub name: String,
    pub address: String,
}

/// Tool settings: backend endpoints, naming domain, artifact location, and
/// the loaner pool. Injected into the orchestrator and every client at
/// construction time; nothing reads endpoint names from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub directory_server: String,
    pub dns_server: String,
    pub dhcp_server: String,
    /// DNS suffix appended to unqualified host names.
    pub dns_domain: String,
    /// Where the regenerated boot allow-list artifact is written.
    pub allow_list_path: String,
    /// Staging container that must not hold machines long-term; selections
    /// of it are redirected to `fallback_container` with a warning.
    pub temporary_container: String,
    pub fallback_container: String,
    /// Substring marking containers eligible for laptop placement.
    pub laptop_marker: String,
    #[serde(default = "default_laptop_lease_days")]
    pub laptop_lease_days: i64,
    #[serde(default)]
    pub laptop_slots: Vec<LaptopSlot>,
}

fn default_laptop_lease_days() -> i64 {
    7
}

impl Settings {
    /// Fully-qualified form of an unqualified host name.
    pub fn fqdn(&self, name: &str) -> String {
        format!("{name}.{}", self.dns_domain)
    }
}

/// Load settings from an explicit file, falling back to the embedded
/// defaults, and report where they came from.
pub fn load_settings_with_source(
    path: Option<&Path>,
) -> Result<(Settings, String), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        let raw = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&raw)?;
        return Ok((settings, format!("file:{}", path.display())));
    }

    let settings = toml::from_str(embedded_defaults())?;
    Ok((settings, "embedded".to_string()))
}

fn embedded_defaults() -> &'static str {
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/default.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::load_settings_with_source;

    #[test]
    fn embedded_defaults_load() {
        let (settings, source) = load_settings_with_source(None).expect("settings");
        assert_eq!(source, "embedded");
        assert_eq!(settings.laptop_slots.len(), 4);
        assert_eq!(settings.laptop_slots[0].name, "loaner1");
        assert_eq!(settings.laptop_lease_days, 7);
    }

    #[test]
    fn fqdn_appends_domain() {
        let (settings, _) = load_settings_with_source(None).expect("settings");
        assert_eq!(
            settings.fqdn("testnamehost"),
            format!("testnamehost.{}", settings.dns_domain)
        );
    }

    #[test]
    fn file_override_reports_source() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
directory_server = "dc.lab"
dns_server = "ns.lab"
dhcp_server = "dhcp.lab"
dns_domain = "lab"
allow_list_path = "/tmp/allow.txt"
temporary_container = "OU=Temp,DC=lab"
fallback_container = "OU=Hosts,DC=lab"
laptop_marker = "laptop"
"#,
        )
        .expect("write settings");

        let (settings, source) = load_settings_with_source(Some(&path)).expect("settings");
        assert!(source.starts_with("file:"));
        assert_eq!(settings.dns_domain, "lab");
        assert!(settings.laptop_slots.is_empty());
        assert_eq!(settings.laptop_lease_days, 7);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        assert!(load_settings_with_source(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
