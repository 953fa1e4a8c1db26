//! Capability contracts for the external backends.
//!
//! Each backend owns its own records; the orchestrator only sequences reads
//! and writes against these traits. Production implementations live in
//! [`crate::clients`]; tests substitute in-memory fakes.

use std::net::Ipv4Addr;

use hostid_core::{FilterEntry, HwAddr};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by a backend client.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The admin tool could not be started at all.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    /// The admin tool ran but reported failure.
    #[error("{tool} exited with status {status}: {stderr}")]
    Tool {
        tool: String,
        status: i32,
        stderr: String,
    },
    /// The admin tool produced output the client could not interpret.
    #[error("unexpected {tool} output: {detail}")]
    Output { tool: String, detail: String },
    /// Console interaction failed.
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// One row of a DHCP scope's client list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeClient {
    pub address: Ipv4Addr,
    pub hwaddr: HwAddr,
}

/// One computer object from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryHost {
    pub name: String,
    pub operating_system: Option<String>,
}

/// Directory service holding host identity objects.
pub trait IdentityDirectory {
    fn exists(&self, name: &str) -> Result<bool, BackendError>;
    fn create(&self, name: &str, container: &str) -> Result<(), BackendError>;
    /// Delete the identity object and any children. Returns `false` when
    /// there was nothing to delete.
    fn delete_recursive(&self, name: &str) -> Result<bool, BackendError>;
    /// All organizational containers an object may be placed under.
    fn containers(&self) -> Result<Vec<String>, BackendError>;
    /// Registered hosts, optionally narrowed by an operating-system substring.
    fn list_hosts(&self, os_filter: Option<&str>) -> Result<Vec<DirectoryHost>, BackendError>;
}

/// Name-resolution service: forward and reverse records.
pub trait NameRecords {
    fn resolve_forward(&self, name: &str) -> Result<Option<Ipv4Addr>, BackendError>;
    /// Reverse lookup. `None` means no PTR exists; a returned name equal to
    /// the literal dotted quad is the resolver's placeholder for the same.
    fn resolve_reverse(&self, addr: Ipv4Addr) -> Result<Option<String>, BackendError>;
    /// Create the forward record; `name` is unqualified within the service's
    /// forward zone.
    fn create_a(&self, name: &str, addr: Ipv4Addr) -> Result<(), BackendError>;
    /// Create the reverse record pointing at `fqdn`.
    fn create_ptr(&self, fqdn: &str, addr: Ipv4Addr, reverse_zone: &str)
        -> Result<(), BackendError>;
    fn delete_a(&self, name: &str) -> Result<bool, BackendError>;
    fn delete_ptr(&self, addr: Ipv4Addr, reverse_zone: &str) -> Result<bool, BackendError>;
}

/// Address-assignment service: per-scope reservations.
pub trait Reservations {
    fn create(
        &self,
        scope: &str,
        addr: Ipv4Addr,
        hwaddr: &HwAddr,
        name: &str,
        description: &str,
    ) -> Result<(), BackendError>;
    fn delete(&self, scope: &str, addr: Ipv4Addr, hwaddr: &HwAddr) -> Result<bool, BackendError>;
    fn scope_clients(&self, scope: &str) -> Result<Vec<ScopeClient>, BackendError>;
}

/// Address-assignment service: the MAC allow/deny filter table.
pub trait AddressFilter {
    fn add_allow(&self, hwaddr: &HwAddr, description: &str) -> Result<(), BackendError>;
    fn delete_entry(&self, hwaddr: &HwAddr) -> Result<bool, BackendError>;
    /// The full filter table, in the service's own order.
    fn list(&self) -> Result<Vec<FilterEntry>, BackendError>;
}

/// Answers whether a reverse zone's PTR data is owned elsewhere.
pub trait ZoneInspector {
    fn is_stub_zone(&self, zone: &str) -> Result<bool, BackendError>;
}

/// Interactive decisions the orchestrator must delegate.
pub trait Prompt {
    fn confirm(&self, message: &str) -> Result<bool, BackendError>;
    /// Pick one of `candidates`; returns the chosen index.
    fn select_container(&self, candidates: &[String]) -> Result<usize, BackendError>;
}
