//! Render root - remembers the last tree and picks mount, patch or remove.
//!
//! # Transitions
//!
//! | previous | next   | action                      |
//! |----------|--------|-----------------------------|
//! | none     | some   | validate, `mount`           |
//! | some     | some   | validate, `patch(prev, next)` |
//! | some     | none   | `remove`, unbind handles    |
//! | none     | none   | nothing                     |
//!
//! A failed step leaves the previous tree in place. Validation applies the
//! root's [`BuildConfig`], so trees built with [`h_with`](crate::h_with) should
//! be rendered by a root created with the same config.

use tracing::debug;

use crate::config::BuildConfig;
use crate::error::{Result, VNodeError};
use crate::node::VNode;

use super::surface::HostSurface;

/// A host surface plus the tree currently rendered into it.
pub struct Root<S: HostSurface> {
    surface: S,
    vnode: Option<VNode>,
    config: BuildConfig,
}

impl<S: HostSurface> Root<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, BuildConfig::default())
    }

    pub fn with_config(surface: S, config: BuildConfig) -> Self {
        Self {
            surface,
            vnode: None,
            config,
        }
    }

    /// Render `next` into the surface, replacing whatever was there.
    ///
    /// Pass `None` to clear the surface.
    pub fn render(&mut self, next: Option<VNode>) -> Result<()> {
        match (self.vnode.take(), next) {
            (None, None) => Ok(()),
            (None, Some(mut next)) => {
                next.validate_with(&self.config)?;
                debug!(kind = ?next.kind, "mounting tree");
                self.surface.mount(&mut next).map_err(VNodeError::Host)?;
                self.vnode = Some(next);
                Ok(())
            }
            (Some(mut prev), Some(mut next)) => {
                if let Err(err) = next.validate_with(&self.config) {
                    self.vnode = Some(prev);
                    return Err(err);
                }
                debug!(prev = ?prev.kind, next = ?next.kind, "patching tree");
                match self.surface.patch(&mut prev, &mut next) {
                    Ok(()) => {
                        self.vnode = Some(next);
                        Ok(())
                    }
                    Err(err) => {
                        self.vnode = Some(prev);
                        Err(VNodeError::Host(err))
                    }
                }
            }
            (Some(mut prev), None) => {
                debug!(kind = ?prev.kind, "removing tree");
                match self.surface.remove(&mut prev) {
                    Ok(()) => {
                        prev.unbind();
                        Ok(())
                    }
                    Err(err) => {
                        self.vnode = Some(prev);
                        Err(VNodeError::Host(err))
                    }
                }
            }
        }
    }

    /// The tree currently rendered.
    pub fn vnode(&self) -> Option<&VNode> {
        self.vnode.as_ref()
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
