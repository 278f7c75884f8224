//! Host surface contract.

use crate::error::HostError;
use crate::node::VNode;

/// The display target a tree is rendered into.
///
/// Implementations own the diff and mutation logic. They are the only code
/// that writes [`VNode::el`].
pub trait HostSurface {
    /// Create host content for a fresh tree and bind `el` throughout it.
    fn mount(&mut self, vnode: &mut VNode) -> Result<(), HostError>;

    /// Bring the host content of `prev` in line with `next`.
    ///
    /// Handles that are reused move from `prev` into `next`.
    fn patch(&mut self, prev: &mut VNode, next: &mut VNode) -> Result<(), HostError>;

    /// Detach the host content of a tree.
    fn remove(&mut self, vnode: &mut VNode) -> Result<(), HostError>;
}
