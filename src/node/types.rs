//! Node types - the VNode record and the shapes that feed construction.

use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::component::{ComponentDescriptor, ComponentRef};
use crate::config::BuildConfig;
use crate::error::{Result, VNodeError};
use crate::flags::{ChildrenKind, NodeKind, VNodeFlags};

use super::data::VNodeData;

/// Sibling identity token.
pub type Key = String;

/// Opaque host-surface handle (a DOM node, a terminal cell range, ...).
///
/// Written only by the mount/patch step, never by construction.
pub type HostHandle = Rc<dyn Any>;

// =============================================================================
// Sentinels
// =============================================================================

/// Tag sentinel for a fragment (siblings without a wrapper element).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment;

/// Tag sentinel for a portal (content mounted at `data.target`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portal;

// =============================================================================
// Portal Target
// =============================================================================

/// Where a portal's content is mounted.
#[derive(Clone)]
pub enum PortalTarget {
    /// Host-specific lookup string (e.g. a CSS selector).
    Selector(String),
    /// An already resolved host location.
    Handle(HostHandle),
}

impl PartialEq for PortalTarget {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PortalTarget::Selector(a), PortalTarget::Selector(b)) => a == b,
            (PortalTarget::Handle(a), PortalTarget::Handle(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PortalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalTarget::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
            PortalTarget::Handle(h) => write!(f, "Handle({:p})", Rc::as_ptr(h)),
        }
    }
}

impl From<&str> for PortalTarget {
    fn from(selector: &str) -> Self {
        PortalTarget::Selector(selector.to_string())
    }
}

impl From<String> for PortalTarget {
    fn from(selector: String) -> Self {
        PortalTarget::Selector(selector)
    }
}

impl From<HostHandle> for PortalTarget {
    fn from(handle: HostHandle) -> Self {
        PortalTarget::Handle(handle)
    }
}

// =============================================================================
// Tag
// =============================================================================

/// The resolved tag of a constructed node.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Text and fragment nodes carry no tag.
    None,
    /// Element tag name.
    Element(String),
    /// Component definition.
    Component(ComponentRef),
    /// Mount target of a portal.
    Portal(PortalTarget),
}

impl Tag {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Tag::None)
    }

    pub fn as_element(&self) -> Option<&str> {
        match self {
            Tag::Element(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&ComponentRef> {
        match self {
            Tag::Component(component) => Some(component),
            _ => None,
        }
    }

    pub fn as_portal_target(&self) -> Option<&PortalTarget> {
        match self {
            Tag::Portal(target) => Some(target),
            _ => None,
        }
    }
}

// =============================================================================
// Tag Input
// =============================================================================

/// Everything that can be passed as the tag of [`h`](crate::h).
#[derive(Debug, Clone)]
pub enum TagInput {
    Name(String),
    Fragment,
    Portal,
    Component(ComponentRef),
}

impl From<&str> for TagInput {
    fn from(name: &str) -> Self {
        TagInput::Name(name.to_string())
    }
}

impl From<String> for TagInput {
    fn from(name: String) -> Self {
        TagInput::Name(name)
    }
}

impl From<Fragment> for TagInput {
    fn from(_: Fragment) -> Self {
        TagInput::Fragment
    }
}

impl From<Portal> for TagInput {
    fn from(_: Portal) -> Self {
        TagInput::Portal
    }
}

impl From<ComponentRef> for TagInput {
    fn from(component: ComponentRef) -> Self {
        TagInput::Component(component)
    }
}

impl From<&ComponentRef> for TagInput {
    fn from(component: &ComponentRef) -> Self {
        TagInput::Component(component.clone())
    }
}

impl From<ComponentDescriptor> for TagInput {
    fn from(descriptor: ComponentDescriptor) -> Self {
        TagInput::Component(descriptor.into())
    }
}

impl From<Rc<ComponentDescriptor>> for TagInput {
    fn from(descriptor: Rc<ComponentDescriptor>) -> Self {
        TagInput::Component(descriptor.into())
    }
}

// =============================================================================
// Children
// =============================================================================

/// Normalized children of a node.
#[derive(Debug, Clone)]
pub enum Children {
    None,
    Single(Box<VNode>),
    Multiple(Vec<VNode>),
    /// Literal content of a text node.
    Text(String),
}

impl Children {
    pub fn as_single(&self) -> Option<&VNode> {
        match self {
            Children::Single(child) => Some(child),
            _ => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[VNode]> {
        match self {
            Children::Multiple(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Children::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Number of child nodes.
    ///
    /// Text content is not a node: `Children::Text` counts as zero even when
    /// the string is non-empty. Use [`as_text`](Self::as_text) for the content.
    pub fn len(&self) -> usize {
        match self {
            Children::None | Children::Text(_) => 0,
            Children::Single(_) => 1,
            Children::Multiple(list) => list.len(),
        }
    }

    /// No child nodes. True for `Children::Text`, see [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child nodes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VNode> {
        match self {
            Children::Single(child) => std::slice::from_ref(&**child).iter(),
            Children::Multiple(list) => list.iter(),
            Children::None | Children::Text(_) => Default::default(),
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            Children::None => "no",
            Children::Single(_) => "single",
            Children::Multiple(_) => "multiple",
            Children::Text(_) => "text",
        }
    }
}

/// One entry of a children list before normalization.
#[derive(Debug, Clone)]
pub enum Child {
    Node(VNode),
    /// Raw scalar, already stringified.
    Text(String),
}

impl Child {
    #[inline]
    pub fn is_vnode(&self) -> bool {
        matches!(self, Child::Node(_))
    }
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Children as passed to [`h`](crate::h), before normalization.
#[derive(Debug, Clone, Default)]
pub enum ChildrenInput {
    #[default]
    None,
    Node(VNode),
    Text(String),
    List(Vec<Child>),
}

impl From<()> for ChildrenInput {
    fn from(_: ()) -> Self {
        ChildrenInput::None
    }
}

impl From<VNode> for ChildrenInput {
    fn from(node: VNode) -> Self {
        ChildrenInput::Node(node)
    }
}

impl From<Option<VNode>> for ChildrenInput {
    fn from(node: Option<VNode>) -> Self {
        node.map_or(ChildrenInput::None, ChildrenInput::Node)
    }
}

impl From<&str> for ChildrenInput {
    fn from(text: &str) -> Self {
        ChildrenInput::Text(text.to_string())
    }
}

impl From<String> for ChildrenInput {
    fn from(text: String) -> Self {
        ChildrenInput::Text(text)
    }
}

impl From<Vec<VNode>> for ChildrenInput {
    fn from(nodes: Vec<VNode>) -> Self {
        ChildrenInput::List(nodes.into_iter().map(Child::Node).collect())
    }
}

impl From<Vec<Child>> for ChildrenInput {
    fn from(children: Vec<Child>) -> Self {
        ChildrenInput::List(children)
    }
}

impl From<Child> for ChildrenInput {
    fn from(child: Child) -> Self {
        match child {
            Child::Node(node) => ChildrenInput::Node(node),
            Child::Text(text) => ChildrenInput::Text(text),
        }
    }
}

// Raw scalars become text children.
macro_rules! impl_scalar_children {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ChildrenInput {
                fn from(value: $ty) -> Self {
                    ChildrenInput::Text(value.to_string())
                }
            }

            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Child::Text(value.to_string())
                }
            }
        )*
    };
}

impl_scalar_children!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool, char);

// =============================================================================
// VNode
// =============================================================================

/// One node of a render tree.
///
/// Built by [`h`](crate::h). After construction `kind`, `tag`, `child_flags`
/// and `key` are fixed; the patch step may rewrite `el` and `data`.
#[derive(Clone)]
pub struct VNode {
    /// Primary classification.
    pub kind: NodeKind,
    pub tag: Tag,
    pub data: Option<VNodeData>,
    pub children: Children,
    /// Shape of `children`.
    pub child_flags: ChildrenKind,
    /// Host handle, owned by the mount/patch step.
    pub el: Option<HostHandle>,
    /// Identity among siblings of a multi-child sequence.
    pub key: Option<Key>,
}

impl VNode {
    /// Kind as a flag set, for mask tests against composite flags.
    #[inline]
    pub fn flags(&self) -> VNodeFlags {
        self.kind.flags()
    }

    /// Whether a host handle is bound.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.el.is_some()
    }

    /// Drop the host handle of this node and all nodes below it.
    pub fn unbind(&mut self) {
        self.el = None;
        match &mut self.children {
            Children::Single(child) => child.unbind(),
            Children::Multiple(list) => list.iter_mut().for_each(VNode::unbind),
            Children::None | Children::Text(_) => {}
        }
    }

    /// Text content, for text nodes.
    pub fn text(&self) -> Option<&str> {
        if self.kind.is_text() {
            self.children.as_text()
        } else {
            None
        }
    }

    /// Check the structural invariants of this node and everything below it.
    ///
    /// Nodes from [`h`](crate::h) always pass. A failure means the node was
    /// assembled or modified by hand. Duplicate keys are rejected; use
    /// [`validate_with`](Self::validate_with) for trees built under
    /// [`DuplicateKeyPolicy::Warn`](crate::DuplicateKeyPolicy::Warn).
    pub fn validate(&self) -> Result<()> {
        self.validate_with(&BuildConfig::default())
    }

    /// Check the structural invariants, applying `config`'s duplicate key policy.
    ///
    /// Nodes from [`h_with`](crate::h_with) pass under the same `config`.
    pub fn validate_with(&self, config: &BuildConfig) -> Result<()> {
        self.validate_tag()?;

        if self.kind.is_text() {
            if self.child_flags != ChildrenKind::None {
                return Err(VNodeError::invariant(format!(
                    "text node has children kind {:?}",
                    self.child_flags
                )));
            }
            if !matches!(self.children, Children::Text(_)) {
                return Err(VNodeError::invariant(format!(
                    "text node holds {} children instead of text",
                    self.children.shape()
                )));
            }
            return Ok(());
        }

        match (self.child_flags, &self.children) {
            (ChildrenKind::Unknown, _) => Err(VNodeError::invariant(
                "children kind is unknown (node was not normalized)",
            )),
            (ChildrenKind::None, Children::None) => Ok(()),
            (ChildrenKind::Single, Children::Single(child)) => child.validate_with(config),
            (kind @ (ChildrenKind::Keyed | ChildrenKind::NonKeyed), Children::Multiple(list)) => {
                if list.len() < 2 {
                    return Err(VNodeError::invariant(format!(
                        "multi-child sequence has {} entries",
                        list.len()
                    )));
                }
                if kind == ChildrenKind::Keyed {
                    let mut seen = HashSet::with_capacity(list.len());
                    for (index, child) in list.iter().enumerate() {
                        let Some(key) = child.key.as_deref() else {
                            return Err(VNodeError::invariant(format!(
                                "keyed child at index {index} has no key"
                            )));
                        };
                        if !seen.insert(key) {
                            if config.rejects_duplicate_keys() {
                                return Err(VNodeError::DuplicateKey {
                                    key: key.to_string(),
                                });
                            }
                            tracing::warn!(key, index, "duplicate key in sibling sequence");
                        }
                    }
                }
                list.iter().try_for_each(|child| child.validate_with(config))
            }
            (kind, children) => Err(VNodeError::invariant(format!(
                "children kind {kind:?} does not match {} children",
                children.shape()
            ))),
        }
    }

    fn validate_tag(&self) -> Result<()> {
        let ok = match &self.tag {
            Tag::None => self.kind.is_text() || self.kind.is_fragment(),
            Tag::Element(_) => self.kind.is_element(),
            Tag::Component(_) => self.kind.is_component(),
            Tag::Portal(_) => self.kind.is_portal(),
        };
        if ok {
            Ok(())
        } else {
            Err(VNodeError::invariant(format!(
                "{:?} node cannot carry tag {:?}",
                self.kind, self.tag
            )))
        }
    }
}

impl fmt::Debug for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VNode")
            .field("kind", &self.kind)
            .field("tag", &self.tag)
            .field("key", &self.key)
            .field("data", &self.data)
            .field("child_flags", &self.child_flags)
            .field("children", &self.children)
            .field("el", &self.el.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicateKeyPolicy;
    use crate::node::{create_text_vnode, h, h_with};

    fn text_with_tag(tag: Tag) -> VNode {
        VNode {
            kind: NodeKind::Text,
            tag,
            data: None,
            children: Children::Text("hi".into()),
            child_flags: ChildrenKind::None,
            el: None,
            key: None,
        }
    }

    #[test]
    fn test_text_children_have_no_nodes() {
        let node = create_text_vnode("hello");
        assert!(node.children.is_empty());
        assert_eq!(node.children.len(), 0);
        assert_eq!(node.children.iter().count(), 0);
        assert_eq!(node.children.as_text(), Some("hello"));
        assert_eq!(node.text(), Some("hello"));
    }

    #[test]
    fn test_text_node_with_element_tag_is_invalid() {
        assert!(text_with_tag(Tag::None).validate().is_ok());

        let node = text_with_tag(Tag::Element("span".into()));
        assert!(matches!(
            node.validate(),
            Err(VNodeError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_short_multi_child_sequence_is_invalid() {
        for kind in [ChildrenKind::NonKeyed, ChildrenKind::Keyed] {
            let mut node = h("ul", None, ()).unwrap();
            let only = h("li", Some(VNodeData::new().key("a")), ()).unwrap();
            node.children = Children::Multiple(vec![only]);
            node.child_flags = kind;
            assert!(
                matches!(node.validate(), Err(VNodeError::InvariantViolation { .. })),
                "{kind:?} with one entry"
            );

            node.children = Children::Multiple(Vec::new());
            assert!(
                matches!(node.validate(), Err(VNodeError::InvariantViolation { .. })),
                "{kind:?} with no entries"
            );
        }
    }

    #[test]
    fn test_validate_follows_duplicate_key_policy() {
        let warn = BuildConfig::new().duplicate_keys(DuplicateKeyPolicy::Warn);
        let item = || h_with(&warn, "li", Some(VNodeData::new().key("same")), ()).unwrap();
        let node = h_with(&warn, "ul", None, vec![item(), item()]).unwrap();

        assert!(node.validate_with(&warn).is_ok());
        assert!(matches!(
            node.validate(),
            Err(VNodeError::DuplicateKey { key }) if key == "same"
        ));
    }

    #[test]
    fn test_rc_descriptor_as_tag() {
        let descriptor = Rc::new(ComponentDescriptor::new().name("Shared").functional(true));
        let node = h(descriptor.clone(), None, ()).unwrap();

        assert_eq!(node.kind, NodeKind::ComponentFunctional);
        assert_eq!(
            node.tag.as_component(),
            Some(&ComponentRef::from(descriptor))
        );
    }
}
