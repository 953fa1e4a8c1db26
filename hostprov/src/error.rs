use std::path::PathBuf;

use hostid_core::{AddrError, HwAddrError};
use thiserror::Error;

use crate::backend::BackendError;

/// Failure modes of a provisioning operation.
///
/// `Validation`, `Conflict`, and `Precondition` are only raised during the
/// pre-flight phase, before any backend has been mutated. Mutation-phase
/// failures never surface here; they are itemized per step in the returned
/// [`crate::outcome::OperationReport`].
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("precondition not met: {0}")]
    Precondition(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("laptop pool exhausted: all {0} slots are in use")]
    PoolExhausted(usize),
    #[error("operation cancelled")]
    Cancelled,
    #[error("failed to write allow list {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<HwAddrError> for ProvisionError {
    fn from(err: HwAddrError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<AddrError> for ProvisionError {
    fn from(err: AddrError) -> Self {
        Self::Validation(err.to_string())
    }
}
