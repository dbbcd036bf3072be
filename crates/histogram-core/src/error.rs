// File: crates/histogram-core/src/error.rs
// Summary: Error taxonomy shared by samples, renderer, hosts and configuration.

use thiserror::Error;

use crate::host::ContainerId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Samples are empty, of the wrong length, negative or not finite. Render is skipped.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The container is no longer part of the live document.
    #[error("container {0} is not attached to the document")]
    DetachedContainer(ContainerId),

    /// The host lacks element, event or animation primitives.
    #[error("host environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
