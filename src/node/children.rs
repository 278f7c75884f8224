//! Children normalization.
//!
//! Turns whatever was passed as children into one of three canonical shapes:
//!
//! | input                     | children         | kind     |
//! |---------------------------|------------------|----------|
//! | nothing / empty list      | `None`           | `None`   |
//! | a node / one-entry list   | `Single`         | `Single` |
//! | a raw scalar              | `Single` (text)  | `Single` |
//! | list of two or more nodes | `Multiple`       | `Keyed`  |
//!
//! Multi-child lists must hold nodes only. Nodes without a key get a
//! positional key (`"|0"`, `"|1"`, ...). Positional keys shift when earlier
//! siblings are inserted or removed, so unkeyed lists reconcile worse than
//! explicitly keyed ones.

use std::collections::HashSet;

use crate::config::BuildConfig;
use crate::error::{Result, VNodeError};
use crate::flags::ChildrenKind;

use super::text::create_text_vnode;
use super::types::{Child, Children, ChildrenInput, Key, VNode};

/// Prefix of positional keys.
pub const SYNTHETIC_KEY_PREFIX: char = '|';

/// Positional key for the child at `index`.
pub fn synthetic_key(index: usize) -> Key {
    format!("{SYNTHETIC_KEY_PREFIX}{index}")
}

/// Normalize a children input into its canonical shape.
pub fn normalize_children(
    input: ChildrenInput,
    config: &BuildConfig,
) -> Result<(Children, ChildrenKind)> {
    match input {
        ChildrenInput::None => Ok((Children::None, ChildrenKind::None)),
        ChildrenInput::Node(node) => Ok(single(node)),
        ChildrenInput::Text(text) => Ok(single(create_text_vnode(text))),
        ChildrenInput::List(mut list) => match list.len() {
            0 => Ok((Children::None, ChildrenKind::None)),
            1 => {
                let child = match list.remove(0) {
                    Child::Node(node) => node,
                    Child::Text(text) => create_text_vnode(text),
                };
                Ok(single(child))
            }
            _ => {
                let nodes = list
                    .into_iter()
                    .enumerate()
                    .map(|(index, child)| match child {
                        Child::Node(node) => Ok(node),
                        Child::Text(_) => Err(VNodeError::RawChildInList { index }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                let nodes = normalize_vnodes(nodes, config)?;
                Ok((Children::Multiple(nodes), ChildrenKind::Keyed))
            }
        },
    }
}

fn single(node: VNode) -> (Children, ChildrenKind) {
    (Children::Single(Box::new(node)), ChildrenKind::Single)
}

/// Give every node of a sibling sequence a key.
///
/// Nodes that already have a key keep it; the rest get a positional key.
/// The sequence is returned in its original order.
pub fn normalize_vnodes(mut children: Vec<VNode>, config: &BuildConfig) -> Result<Vec<VNode>> {
    let mut assigned = 0usize;
    for (index, child) in children.iter_mut().enumerate() {
        if child.key.is_none() {
            child.key = Some(synthetic_key(index));
            assigned += 1;
        }
    }
    if assigned > 0 {
        tracing::debug!(assigned, total = children.len(), "assigned positional keys");
    }

    {
        let mut seen = HashSet::with_capacity(children.len());
        for key in children.iter().filter_map(|child| child.key.as_deref()) {
            if !seen.insert(key) {
                if config.rejects_duplicate_keys() {
                    return Err(VNodeError::DuplicateKey {
                        key: key.to_string(),
                    });
                }
                tracing::warn!(key, "duplicate key in sibling sequence");
            }
        }
    }

    Ok(children)
}
