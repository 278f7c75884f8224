//! Node constructor.
//!
//! [`h`] is the single construction entry point. It classifies the tag,
//! normalizes the children and returns an unmounted [`VNode`].
//!
//! # Tag classification
//!
//! Checked in order:
//! 1. name - `"svg"` is an SVG element, anything else an HTML element
//! 2. [`Fragment`](super::Fragment) - fragment, no tag of its own
//! 3. [`Portal`](super::Portal) - portal, tag replaced by `data.target`
//! 4. object-style descriptor - functional if it says so, else stateful
//! 5. component - stateful if it exposes a render capability, else functional
//!
//! # Example
//!
//! ```ignore
//! use spark_vnode::{h, NodeKind, ChildrenKind};
//!
//! let node = h("ul", None, vec![h("li", None, "a")?, h("li", None, "b")?])?;
//! assert_eq!(node.kind, NodeKind::ElementHtml);
//! assert_eq!(node.child_flags, ChildrenKind::Keyed);
//! ```

use crate::component::ComponentRef;
use crate::config::BuildConfig;
use crate::error::{Result, VNodeError};
use crate::flags::NodeKind;

use super::children::normalize_children;
use super::data::VNodeData;
use super::types::{ChildrenInput, Tag, TagInput, VNode};

/// Build a node with the default [`BuildConfig`].
pub fn h(
    tag: impl Into<TagInput>,
    data: Option<VNodeData>,
    children: impl Into<ChildrenInput>,
) -> Result<VNode> {
    h_with(&BuildConfig::default(), tag, data, children)
}

/// Build a node with an explicit configuration.
pub fn h_with(
    config: &BuildConfig,
    tag: impl Into<TagInput>,
    data: Option<VNodeData>,
    children: impl Into<ChildrenInput>,
) -> Result<VNode> {
    let (kind, tag) = classify(tag.into(), data.as_ref())?;
    let (children, child_flags) = normalize_children(children.into(), config)?;
    let key = data.as_ref().and_then(|d| d.key.clone());

    tracing::trace!(?kind, ?child_flags, key = key.as_deref(), "vnode constructed");

    Ok(VNode {
        kind,
        tag,
        data,
        children,
        child_flags,
        el: None,
        key,
    })
}

/// Resolve a tag input into a node kind and the tag stored on the node.
pub fn classify(tag: TagInput, data: Option<&VNodeData>) -> Result<(NodeKind, Tag)> {
    match tag {
        TagInput::Name(name) => {
            let kind = if name == "svg" {
                NodeKind::ElementSvg
            } else {
                NodeKind::ElementHtml
            };
            Ok((kind, Tag::Element(name)))
        }
        TagInput::Fragment => Ok((NodeKind::Fragment, Tag::None)),
        TagInput::Portal => {
            let target = data
                .and_then(|d| d.target.clone())
                .ok_or(VNodeError::MissingPortalTarget)?;
            Ok((NodeKind::Portal, Tag::Portal(target)))
        }
        TagInput::Component(component) => {
            let kind = classify_component(&component);
            Ok((kind, Tag::Component(component)))
        }
    }
}

fn classify_component(component: &ComponentRef) -> NodeKind {
    if component.is_functional() {
        NodeKind::ComponentFunctional
    } else {
        NodeKind::ComponentStatefulNormal
    }
}
