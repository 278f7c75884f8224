//! Error types for node construction and rendering.

/// Error reported by a host surface during mount, patch or remove.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while building or rendering virtual nodes.
#[derive(thiserror::Error, Debug)]
pub enum VNodeError {
    /// The tag matches none of the classification rules.
    ///
    /// [`TagInput`](crate::TagInput) is closed, so [`h`](crate::h) never
    /// returns this. Host code converting foreign tag values reports it.
    #[error("invalid tag shape: {reason}")]
    InvalidTagShape { reason: String },

    /// A portal was built without a `target` in its data.
    #[error("portal requires a `target` in its data")]
    MissingPortalTarget,

    /// A multi-child list held a raw value instead of a node.
    #[error("child at index {index} of a multi-child list is not a vnode")]
    RawChildInList { index: usize },

    /// Two siblings in a keyed sequence share a key.
    #[error("duplicate key {key:?} in sibling sequence")]
    DuplicateKey { key: String },

    /// A node breaks a structural invariant (usually hand-built).
    #[error("vnode invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// The host surface failed to apply a change.
    #[error("host surface error: {0}")]
    Host(#[source] HostError),
}

impl VNodeError {
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = VNodeError> = std::result::Result<T, E>;
