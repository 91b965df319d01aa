/// Convenience result type used across printzone.
pub type MockupResult<T> = Result<T, MockupError>;

/// Error taxonomy surfaced by resolution, zone mapping and placement.
///
/// The first three variants are local, recoverable conditions: a caller
/// rendering a batch of products reacts per product (placeholder image, or
/// base image without overlay) and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum MockupError {
    /// Every image candidate was absent or empty.
    #[error("no image available")]
    NoImageAvailable,

    /// A delimitation's reference dimensions are zero, negative or missing.
    #[error(
        "invalid reference: delimitation {delimitation_id} authored against {width}x{height}"
    )]
    InvalidReference {
        /// Offending delimitation id.
        delimitation_id: u64,
        /// Reference width as received.
        width: f64,
        /// Reference height as received.
        height: f64,
    },

    /// A design asset has no usable intrinsic size.
    #[error("invalid design asset {design_id:?}: intrinsic size {width}x{height}")]
    InvalidDesignAsset {
        /// Offending design id, when known.
        design_id: Option<u64>,
        /// Intrinsic width as received.
        width: f64,
        /// Intrinsic height as received.
        height: f64,
    },

    /// Invalid caller-supplied configuration or entity data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing catalog payloads.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockupError {
    /// Build a [`MockupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MockupError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this is one of the per-product conditions a batch render
    /// recovers from with a fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoImageAvailable | Self::InvalidReference { .. } | Self::InvalidDesignAsset { .. }
        )
    }
}

impl From<serde_json::Error> for MockupError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
