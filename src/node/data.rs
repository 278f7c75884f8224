//! Node data - attributes, props and handlers attached to a node.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::types::{Key, PortalTarget};

/// Event handler callback (Rc so it can be cloned into closures).
pub type EventHandler = Rc<dyn Fn(&dyn Any)>;

// =============================================================================
// Attribute Value
// =============================================================================

/// A scalar attribute or prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Int(n) => write!(f, "{n}"),
            AttrValue::Float(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

// =============================================================================
// VNodeData
// =============================================================================

/// Attributes, props and directives of a node.
///
/// Two fields are read during construction:
/// - `key` is copied onto the node
/// - `target` becomes the tag of a portal
///
/// Everything else is passed through untouched for the patch step.
///
/// # Example
///
/// ```ignore
/// let data = VNodeData::new()
///     .key("row-1")
///     .class("row")
///     .style("color", "red")
///     .attr("tabindex", 0);
/// ```
#[derive(Clone, Default)]
pub struct VNodeData {
    /// Identity among siblings.
    pub key: Option<Key>,

    /// Mount target for portals.
    pub target: Option<PortalTarget>,

    pub class: Option<String>,

    /// Inline style declarations, property → value.
    pub style: BTreeMap<String, String>,

    /// Attributes and component props.
    pub attrs: BTreeMap<String, AttrValue>,

    /// Event handlers by event name.
    pub on: BTreeMap<String, EventHandler>,
}

impl VNodeData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn target(mut self, target: impl Into<PortalTarget>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn on(mut self, event: impl Into<String>, handler: impl Fn(&dyn Any) + 'static) -> Self {
        self.on.insert(event.into(), Rc::new(handler));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn handler(&self, event: &str) -> Option<&EventHandler> {
        self.on.get(event)
    }

    /// True when nothing at all is set.
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
            && self.target.is_none()
            && self.class.is_none()
            && self.style.is_empty()
            && self.attrs.is_empty()
            && self.on.is_empty()
    }
}

impl fmt::Debug for VNodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VNodeData")
            .field("key", &self.key)
            .field("target", &self.target)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("attrs", &self.attrs)
            .field("on", &self.on.keys().collect::<Vec<_>>())
            .finish()
    }
}
