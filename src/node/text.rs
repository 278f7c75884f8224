//! Text node builder.

use crate::flags::{ChildrenKind, NodeKind};

use super::types::{Children, Tag, VNode};

/// Wrap a string into a text node.
///
/// The content is stored verbatim. Escaping is left to the host renderer.
pub fn create_text_vnode(text: impl Into<String>) -> VNode {
    VNode {
        kind: NodeKind::Text,
        tag: Tag::None,
        data: None,
        children: Children::Text(text.into()),
        child_flags: ChildrenKind::None,
        el: None,
        key: None,
    }
}
