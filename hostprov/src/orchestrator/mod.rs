//! Host lifecycle orchestration.
//!
//! The backends here (directory, name resolution, address assignment) are
//! independently authoritative and share no transaction. The orchestrator's
//! whole job is ordering: an all-or-nothing read-only pre-flight phase that
//! refuses unsafe adds before anything is touched, a fixed mutation order
//! chosen so the earliest failures leave the least surprising partial state,
//! and removal steps that each tolerate a backend which has already lost its
//! record. Mutation-phase failures are surfaced per step in an
//! [`OperationReport`] and never rolled back; every step is written to be
//! idempotent so a caller can re-drive just the ones that failed.

mod add;
mod laptop;
mod remove;

use crate::allowlist::AllowListWriter;
use crate::backend::{
    AddressFilter, IdentityDirectory, NameRecords, Prompt, Reservations, ZoneInspector,
};
use crate::config::Settings;
use crate::error::ProvisionError;
use crate::outcome::OperationReport;

/// Desired state for a new host, as received from the caller.
///
/// Fields are raw strings; validation happens inside the add path so the
/// checks run in their documented order.
#[derive(Debug, Clone)]
pub struct HostRequest {
    pub name: String,
    pub hwaddr: String,
    pub address: Option<String>,
    pub laptop: bool,
}

/// Sequences provisioning operations across the backend capabilities.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    directory: &'a dyn IdentityDirectory,
    names: &'a dyn NameRecords,
    reservations: &'a dyn Reservations,
    filter: &'a dyn AddressFilter,
    zones: &'a dyn ZoneInspector,
    prompt: &'a dyn Prompt,
    allowlist: AllowListWriter,
}

impl<'a> Orchestrator<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: &'a Settings,
        directory: &'a dyn IdentityDirectory,
        names: &'a dyn NameRecords,
        reservations: &'a dyn Reservations,
        filter: &'a dyn AddressFilter,
        zones: &'a dyn ZoneInspector,
        prompt: &'a dyn Prompt,
    ) -> Self {
        let allowlist = AllowListWriter::new(&settings.allow_list_path);
        Self {
            settings,
            directory,
            names,
            reservations,
            filter,
            zones,
            prompt,
            allowlist,
        }
    }

    /// Regenerate the boot allow-list artifact from the filter table.
    pub fn rebuild_allow_list(&self) -> Result<usize, ProvisionError> {
        self.allowlist.rebuild(self.filter)
    }

    /// Allow-list rebuild as a recorded step of a larger operation.
    pub(crate) fn rebuild_step(&self, report: &mut OperationReport) {
        match self.rebuild_allow_list() {
            Ok(count) => report.done(
                "allow list",
                format!(
                    "rebuilt {} with {count} entries",
                    self.allowlist.path().display()
                ),
            ),
            Err(err) => report.failed("allow list", err.to_string()),
        }
    }
}

/// Strip a resolver's trailing root dot for comparisons.
pub(crate) fn normalize_name(name: &str) -> &str {
    name.trim_end_matches('.')
}
