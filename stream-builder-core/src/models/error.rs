use thiserror::Error;

/// Errors returned by `StreamBuilder::build`.
///
/// Closed taxonomy: every failure of a build maps to exactly one variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("no output slot provided for the stream handle")]
    NullRequest,

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("parameter out of range: {0}")]
    OutOfRange(String),

    #[error("no backend available: neither fast path nor compatibility path is allowed")]
    NoBackendAvailable,

    #[error("stream open failed: {0}")]
    OpenFailed(#[source] OpenError),
}

/// Errors reported by a backend when it cannot open a stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("device not available")]
    DeviceNotAvailable,

    #[error("audio service unavailable")]
    ServiceUnavailable,

    #[error("configuration rejected: {0}")]
    Rejected(String),

    #[error("timeout")]
    Timeout,

    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Errors from the system policy-info query. Never surfaced by a build.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("policy service unavailable")]
    Unavailable,

    #[error("policy query failed: {0}")]
    QueryFailed(String),
}

/// Errors loading a `BuilderConfig` or `StaticPolicyProvider`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
