//! Virtual nodes - the record, its inputs, and how it is built.
//!
//! - [`h`] - classify a tag, normalize children, return a [`VNode`]
//! - [`create_text_vnode`] - wrap a string into a text node
//! - [`normalize_vnodes`] - key a sibling sequence
//!
//! # Ownership
//!
//! Construction takes its inputs by value. Keys are attached to the nodes of
//! a multi-child list before they move into the parent, so callers never see
//! their own nodes modified. After construction the caller owns the tree until
//! it hands it to the render driver, which is then the only writer of `el`
//! and `data`.

mod children;
mod construct;
mod data;
mod text;
mod types;

pub use children::{normalize_children, normalize_vnodes, synthetic_key, SYNTHETIC_KEY_PREFIX};
pub use construct::{classify, h, h_with};
pub use data::{AttrValue, EventHandler, VNodeData};
pub use text::create_text_vnode;
pub use types::*;
