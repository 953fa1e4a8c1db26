use std::path::Path;

use anyhow::{anyhow, Result};
use hostprov::clients::{DnsCmdClient, DnsCmdZoneInspector, DsDirectoryClient, NetshDhcpClient};
use hostprov::config::{load_settings_with_source, Settings};

/// Load settings, optionally reporting where they came from.
pub fn load_settings(path: Option<&Path>, verbose: bool) -> Result<Settings> {
    let (settings, source) =
        load_settings_with_source(path).map_err(|err| anyhow!("failed to load settings: {err}"))?;
    if verbose {
        println!("Using settings: {source}");
    }
    Ok(settings)
}

/// Production clients for every backend, built from one settings struct.
pub struct Backends {
    pub dhcp: NetshDhcpClient,
    pub dns: DnsCmdClient,
    pub zones: DnsCmdZoneInspector,
    pub directory: DsDirectoryClient,
}

pub fn backends(settings: &Settings) -> Backends {
    Backends {
        dhcp: NetshDhcpClient::new(&settings.dhcp_server),
        dns: DnsCmdClient::new(&settings.dns_server, &settings.dns_domain),
        zones: DnsCmdZoneInspector::new(&settings.dns_server),
        directory: DsDirectoryClient::new(&settings.directory_server),
    }
}
