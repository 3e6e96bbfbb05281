use thiserror::Error;

/// Errors surfaced by the worm pipeline.
///
/// Nothing in here is fatal for a render loop: degenerate input is reported
/// and the caller keeps drawing whatever was published last.
#[derive(Debug, Error)]
pub enum WormError {
    /// The tessellator needs at least two points to define a segment.
    #[error("need at least 2 points to build a ribbon, got {len}")]
    InsufficientPoints { len: usize },

    /// A configuration value was rejected before reaching the pipeline.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl WormError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WormError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WormError>;
