//! # spark-vnode
//!
//! Virtual node model for reactive UI runtimes.
//!
//! A [`VNode`] describes one renderable entity (HTML/SVG element, stateful or
//! functional component, text, fragment, portal) without touching the host
//! surface. Trees are built with [`h`] and handed to a [`Root`], which drives
//! an external [`HostSurface`] through mount, patch and remove.
//!
//! ## Architecture
//!
//! ```text
//! h(tag, data, children) → classify tag → normalize children → VNode
//!                                                               ↓
//!                                      Root::render → HostSurface (mount/patch/remove)
//! ```
//!
//! ## Modules
//!
//! - [`flags`] - Node kind and children kind taxonomy
//! - [`node`] - The VNode record, its inputs, and construction
//! - [`component`] - Component contract and capability checks
//! - [`render`] - Render root and host surface contract
//! - [`config`] - Construction settings
//! - [`error`] - Error types

pub mod component;
pub mod config;
pub mod error;
pub mod flags;
pub mod node;
pub mod render;

// Re-export commonly used items
pub use component::{Component, ComponentDescriptor, ComponentRef, FunctionalComponent, Render, RenderFn};
pub use config::{BuildConfig, DuplicateKeyPolicy};
pub use error::{HostError, Result, VNodeError};
pub use flags::{ChildrenFlags, ChildrenKind, NodeKind, VNodeFlags};
pub use node::{
    create_text_vnode, h, h_with, normalize_vnodes, AttrValue, Child, Children, ChildrenInput,
    EventHandler, Fragment, HostHandle, Key, Portal, PortalTarget, Tag, TagInput, VNode, VNodeData,
};
pub use render::{HostSurface, Root};
