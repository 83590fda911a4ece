//! Construction-time failures.

use thiserror::Error;

/// The carousel container could not be resolved at mount time.
///
/// This is the only error the crate surfaces. Every runtime abnormality
/// (navigating mid-animation, stopping an already-stopped timer, invalid
/// target indexes) is handled as a silent no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("carousel container not found: {selector}")]
pub struct ContainerNotFoundError {
    /// The selector that matched no registered container.
    pub selector: String,
}
