//! Construction settings.
//!
//! The default configuration reproduces the canonical behavior. Pass a custom
//! [`BuildConfig`] to [`h_with`](crate::h_with) to relax key checking.

/// What to do when two siblings of a keyed sequence share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Fail construction with [`VNodeError::DuplicateKey`](crate::VNodeError::DuplicateKey).
    #[default]
    Reject,
    /// Keep the sequence as-is and log a warning.
    Warn,
}

/// Settings for node construction.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate key policy.
    pub fn duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Whether duplicate keys abort construction.
    #[inline]
    pub fn rejects_duplicate_keys(&self) -> bool {
        self.duplicate_keys == DuplicateKeyPolicy::Reject
    }
}
