//! Network host provisioning across independently authoritative backends.
//!
//! Bringing a host online touches three services that know nothing of each
//! other: the directory (identity objects), name resolution (A and PTR
//! records), and address assignment (reservations plus a MAC allow/deny
//! filter). None of them is transactional with the others, so this crate is
//! built around careful ordering rather than atomicity.
//!
//! # Architecture
//!
//! - [`orchestrator`] — pre-flight validation, the ordered add and remove
//!   mutation protocols, and loaner-laptop pool allocation
//! - [`allowlist`] — regenerates the boot allow-list artifact from the
//!   authoritative filter table after every filter mutation
//! - [`backend`] — capability traits for the five backends plus the
//!   interactive prompt; everything above them is testable with fakes
//! - [`clients`] — production implementations driving the backends' own
//!   admin tools (`netsh`, `dnscmd`, `nslookup`, `dsquery`/`dsadd`/`dsrm`)
//! - [`config`] — injected settings (servers, naming domain, artifact path,
//!   laptop pool); there is no global endpoint state
//! - [`outcome`] / [`report`] — itemized per-step results and their terminal
//!   rendering; partial failure is an expected terminal state and is always
//!   reported step by step
//! - [`prompt`] — console and scripted implementations of the interactive
//!   decision points
//!
//! # Failure policy
//!
//! Pre-flight problems (syntax, conflicts, missing external PTR) abort an
//! add before any backend is touched. Once mutation starts there is no
//! rollback: each step's outcome is recorded and the caller re-drives the
//! failed ones. Removal treats "already gone" as a normal per-step answer.

pub mod allowlist;
pub mod backend;
pub mod clients;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod outcome;
pub mod prompt;
pub mod report;
