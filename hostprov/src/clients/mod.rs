//! Command-backed backend clients.
//!
//! Each backend is administered through its own command-line tool; these
//! clients build the invocations, run them, and parse the output into the
//! typed values the orchestrator works with. The wire protocol stays in
//! here; nothing above this module knows which tool serves which trait.

mod exec;

pub mod dhcp;
pub mod directory;
pub mod dns;
pub mod zone;

pub use dhcp::NetshDhcpClient;
pub use directory::DsDirectoryClient;
pub use dns::DnsCmdClient;
pub use zone::DnsCmdZoneInspector;
