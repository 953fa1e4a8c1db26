//! Boot allow-list projection.
//!
//! The boot-provisioning service consumes a flat text file of bare hardware
//! addresses. That artifact is never patched in place: every rebuild dumps
//! the authoritative filter table, projects the allow entries, and rewrites
//! the file in full, so rebuilding twice from the same table produces
//! byte-identical output.

use std::fs;
use std::path::{Path, PathBuf};

use hostid_core::Disposition;

use crate::backend::AddressFilter;
use crate::error::ProvisionError;

pub struct AllowListWriter {
    path: PathBuf,
}

impl AllowListWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regenerate the artifact from the current filter table.
    ///
    /// Returns the number of allow entries written. Must run after every
    /// filter-table mutation; it is the only thing keeping the artifact in
    /// step with the address-assignment service.
    pub fn rebuild(&self, filter: &dyn AddressFilter) -> Result<usize, ProvisionError> {
        let entries = filter.list()?;
        let lines: Vec<String> = entries
            .iter()
            .filter(|e| e.disposition == Disposition::Allow)
            .map(|e| e.hwaddr.bare())
            .collect();

        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| ProvisionError::Artifact {
            path: self.path.clone(),
            source,
        })?;
        Ok(lines.len())
    }
}
