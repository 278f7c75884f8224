//! Component contract.
//!
//! Construction never calls a component. It only needs to tell the two
//! categories apart:
//! - functional: a plain render function, no instance state
//! - stateful: exposes a [`Render`] capability (plus optional lifecycle hooks)
//!
//! The check is a capability query ([`Component::renderer`]), not a type test.
//!
//! ```ignore
//! use spark_vnode::{h, Component, Render, VNode, VNodeData, ComponentRef};
//!
//! struct Counter;
//!
//! impl Render for Counter {
//!     fn render(&self, _data: Option<&VNodeData>) -> spark_vnode::Result<VNode> {
//!         h("span", None, "0")
//!     }
//! }
//!
//! impl Component for Counter {
//!     fn renderer(&self) -> Option<&dyn Render> {
//!         Some(self)
//!     }
//! }
//!
//! let node = h(ComponentRef::new(Counter), None, None)?;
//! assert!(node.kind.is_stateful_component());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::node::{VNode, VNodeData};

/// Render closure shared by functional components and descriptors.
pub type RenderFn = Rc<dyn Fn(Option<&VNodeData>) -> Result<VNode>>;

// =============================================================================
// Traits
// =============================================================================

/// Render capability of a stateful component.
pub trait Render {
    fn render(&self, data: Option<&VNodeData>) -> Result<VNode>;

    /// Called after the component's output is attached to the host surface.
    fn mounted(&self) {}

    /// Called after a patch pass touched the component.
    fn updated(&self) {}

    /// Called before the component's output is detached.
    fn unmounted(&self) {}
}

/// Anything that can be used as a component tag.
pub trait Component {
    /// Display name, used in logs and debug output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The render capability, if this component is stateful.
    fn renderer(&self) -> Option<&dyn Render> {
        None
    }
}

// =============================================================================
// Functional Component
// =============================================================================

/// A component that is just a render function.
pub struct FunctionalComponent {
    name: String,
    func: RenderFn,
}

impl FunctionalComponent {
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(Option<&VNodeData>) -> Result<VNode> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// Invoke the render function.
    pub fn call(&self, data: Option<&VNodeData>) -> Result<VNode> {
        (self.func)(data)
    }
}

impl Component for FunctionalComponent {
    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Component Descriptor (object style)
// =============================================================================

/// Object-style component description.
///
/// Declares itself functional through the `functional` field. Anything else is
/// treated as a stateful component.
#[derive(Clone, Default)]
pub struct ComponentDescriptor {
    pub name: Option<String>,
    pub functional: bool,
    pub render: Option<RenderFn>,
}

impl ComponentDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }

    pub fn render(mut self, func: impl Fn(Option<&VNodeData>) -> Result<VNode> + 'static) -> Self {
        self.render = Some(Rc::new(func));
        self
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("functional", &self.functional)
            .field("render", &self.render.is_some())
            .finish()
    }
}

// =============================================================================
// Component Reference
// =============================================================================

/// Shared handle to a component definition.
///
/// Equality is identity: two references are equal only if they point at the
/// same definition.
#[derive(Clone)]
pub enum ComponentRef {
    Descriptor(Rc<ComponentDescriptor>),
    Callable(Rc<dyn Component>),
}

impl ComponentRef {
    /// Wrap a component definition.
    pub fn new(component: impl Component + 'static) -> Self {
        ComponentRef::Callable(Rc::new(component))
    }

    /// Wrap a plain render function as a functional component.
    pub fn function(
        name: impl Into<String>,
        func: impl Fn(Option<&VNodeData>) -> Result<VNode> + 'static,
    ) -> Self {
        Self::new(FunctionalComponent::new(name, func))
    }

    pub fn descriptor(descriptor: ComponentDescriptor) -> Self {
        ComponentRef::Descriptor(Rc::new(descriptor))
    }

    pub fn name(&self) -> &str {
        match self {
            ComponentRef::Descriptor(d) => d.name.as_deref().unwrap_or("anonymous"),
            ComponentRef::Callable(c) => c.name(),
        }
    }

    /// Whether this reference describes a functional component.
    pub fn is_functional(&self) -> bool {
        match self {
            ComponentRef::Descriptor(d) => d.functional,
            ComponentRef::Callable(c) => c.renderer().is_none(),
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ComponentRef::Descriptor(a), ComponentRef::Descriptor(b)) => Rc::ptr_eq(a, b),
            (ComponentRef::Callable(a), ComponentRef::Callable(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ComponentRef {}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentRef::Descriptor(d) => f.debug_tuple("Descriptor").field(d).finish(),
            ComponentRef::Callable(c) => f.debug_tuple("Callable").field(&c.name()).finish(),
        }
    }
}

impl From<ComponentDescriptor> for ComponentRef {
    fn from(descriptor: ComponentDescriptor) -> Self {
        Self::descriptor(descriptor)
    }
}

impl From<Rc<ComponentDescriptor>> for ComponentRef {
    fn from(descriptor: Rc<ComponentDescriptor>) -> Self {
        ComponentRef::Descriptor(descriptor)
    }
}

impl From<Rc<dyn Component>> for ComponentRef {
    fn from(component: Rc<dyn Component>) -> Self {
        ComponentRef::Callable(component)
    }
}
