use super::exec;
use crate::backend::{BackendError, ZoneInspector};

/// Zone-authority inspector over `dnscmd /ZoneInfo`.
pub struct DnsCmdZoneInspector {
    server: String,
}

impl DnsCmdZoneInspector {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
        }
    }
}

impl ZoneInspector for DnsCmdZoneInspector {
    fn is_stub_zone(&self, zone: &str) -> Result<bool, BackendError> {
        let info = exec::run("dnscmd", &[&self.server, "/ZoneInfo", zone])?;
        Ok(zone_info_is_stub(&info))
    }
}

/// A zone is a stub when its type line says so; the rest of the dump is
/// irrelevant here.
pub fn zone_info_is_stub(info: &str) -> bool {
    info.lines().any(|line| {
        let lowered = line.trim().to_ascii_lowercase();
        lowered.contains("type") && lowered.contains("stub")
    })
}
