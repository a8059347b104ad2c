use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Kind mismatch: expected `{expected}`, found `{found}`")]
    KindMismatch { expected: String, found: String },

    #[error("Telemetry init error: {0}")]
    TelemetryInit(#[from] TryInitError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub mod api;
pub use crate::api::noobaa::{Noobaa, NoobaaList, NoobaaSpec, NoobaaStatus};

/// Value copy contract for API types
pub mod deepcopy;
pub use crate::deepcopy::{deep_copy, deep_copy_object, ClusterObject, DeepCopy};

/// Log and trace integrations
pub mod telemetry;

#[cfg(test)]
pub mod fixtures;
