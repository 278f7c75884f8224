//! Flag taxonomy for virtual nodes.
//!
//! Two closed enumerations classify every node:
//! - [`NodeKind`] - what the node is (element, component, text, ...)
//! - [`ChildrenKind`] - what shape its children take
//!
//! Each variant maps onto a single bit of a bitflags set so that category
//! membership ("is this any kind of component?") is one mask test.

// =============================================================================
// Node Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Node kind as a bitfield.
    ///
    /// Primary kinds occupy disjoint bits. The composite masks (`ELEMENT`,
    /// `COMPONENT_STATEFUL`, `COMPONENT`) are for membership tests only and
    /// never describe a node on their own.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VNodeFlags: u16 {
        const ELEMENT_HTML = 1;
        const ELEMENT_SVG = 1 << 1;
        const COMPONENT_STATEFUL_NORMAL = 1 << 2;
        const COMPONENT_STATEFUL_SHOULD_KEEP_ALIVE = 1 << 3;
        const COMPONENT_STATEFUL_KEPT_ALIVE = 1 << 4;
        const COMPONENT_FUNCTIONAL = 1 << 5;
        const TEXT = 1 << 6;
        const FRAGMENT = 1 << 7;
        const PORTAL = 1 << 8;

        const ELEMENT = Self::ELEMENT_HTML.bits() | Self::ELEMENT_SVG.bits();
        const COMPONENT_STATEFUL = Self::COMPONENT_STATEFUL_NORMAL.bits()
            | Self::COMPONENT_STATEFUL_SHOULD_KEEP_ALIVE.bits()
            | Self::COMPONENT_STATEFUL_KEPT_ALIVE.bits();
        const COMPONENT = Self::COMPONENT_STATEFUL.bits() | Self::COMPONENT_FUNCTIONAL.bits();
    }
}

bitflags::bitflags! {
    /// Children shape as a bitfield.
    ///
    /// `UNKNOWN_CHILDREN` is zero: an un-normalized node has no bit set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChildrenFlags: u8 {
        const UNKNOWN_CHILDREN = 0;
        const NO_CHILDREN = 1;
        const SINGLE_VNODE = 1 << 1;
        const KEYED_VNODES = 1 << 2;
        const NONE_KEYED_VNODES = 1 << 3;

        const MULTIPLE_VNODES = Self::KEYED_VNODES.bits() | Self::NONE_KEYED_VNODES.bits();
    }
}

// =============================================================================
// NodeKind
// =============================================================================

/// Primary classification of a node.
///
/// Exactly one kind per node. Use the predicates rather than matching on
/// individual variants when asking category questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ElementHtml,
    ElementSvg,
    ComponentStatefulNormal,
    ComponentStatefulKeepAlive,
    ComponentStatefulKept,
    ComponentFunctional,
    Text,
    Fragment,
    Portal,
}

impl NodeKind {
    /// The single bit this kind occupies.
    pub const fn flags(self) -> VNodeFlags {
        match self {
            NodeKind::ElementHtml => VNodeFlags::ELEMENT_HTML,
            NodeKind::ElementSvg => VNodeFlags::ELEMENT_SVG,
            NodeKind::ComponentStatefulNormal => VNodeFlags::COMPONENT_STATEFUL_NORMAL,
            NodeKind::ComponentStatefulKeepAlive => VNodeFlags::COMPONENT_STATEFUL_SHOULD_KEEP_ALIVE,
            NodeKind::ComponentStatefulKept => VNodeFlags::COMPONENT_STATEFUL_KEPT_ALIVE,
            NodeKind::ComponentFunctional => VNodeFlags::COMPONENT_FUNCTIONAL,
            NodeKind::Text => VNodeFlags::TEXT,
            NodeKind::Fragment => VNodeFlags::FRAGMENT,
            NodeKind::Portal => VNodeFlags::PORTAL,
        }
    }

    /// Recover a kind from a flag set holding exactly one primary bit.
    ///
    /// Composite masks and multi-bit sets return `None`.
    pub fn from_flags(flags: VNodeFlags) -> Option<Self> {
        const ALL: [NodeKind; 9] = [
            NodeKind::ElementHtml,
            NodeKind::ElementSvg,
            NodeKind::ComponentStatefulNormal,
            NodeKind::ComponentStatefulKeepAlive,
            NodeKind::ComponentStatefulKept,
            NodeKind::ComponentFunctional,
            NodeKind::Text,
            NodeKind::Fragment,
            NodeKind::Portal,
        ];
        ALL.into_iter().find(|kind| kind.flags() == flags)
    }

    /// Test membership in a flag mask (primary or composite).
    #[inline]
    pub const fn is(self, mask: VNodeFlags) -> bool {
        self.flags().bits() & mask.bits() != 0
    }

    /// HTML or SVG element.
    #[inline]
    pub const fn is_element(self) -> bool {
        self.is(VNodeFlags::ELEMENT)
    }

    /// Any component, stateful or functional.
    #[inline]
    pub const fn is_component(self) -> bool {
        self.is(VNodeFlags::COMPONENT)
    }

    /// Any of the three stateful component kinds.
    #[inline]
    pub const fn is_stateful_component(self) -> bool {
        self.is(VNodeFlags::COMPONENT_STATEFUL)
    }

    #[inline]
    pub const fn is_functional_component(self) -> bool {
        self.is(VNodeFlags::COMPONENT_FUNCTIONAL)
    }

    #[inline]
    pub const fn is_text(self) -> bool {
        self.is(VNodeFlags::TEXT)
    }

    #[inline]
    pub const fn is_fragment(self) -> bool {
        self.is(VNodeFlags::FRAGMENT)
    }

    #[inline]
    pub const fn is_portal(self) -> bool {
        self.is(VNodeFlags::PORTAL)
    }
}

impl From<NodeKind> for VNodeFlags {
    fn from(kind: NodeKind) -> Self {
        kind.flags()
    }
}

// =============================================================================
// ChildrenKind
// =============================================================================

/// Shape of a node's children.
///
/// `Unknown` is never produced by construction. Seeing it downstream means a
/// node was built by hand and skipped normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChildrenKind {
    #[default]
    Unknown,
    None,
    Single,
    Keyed,
    NonKeyed,
}

impl ChildrenKind {
    pub const fn flags(self) -> ChildrenFlags {
        match self {
            ChildrenKind::Unknown => ChildrenFlags::UNKNOWN_CHILDREN,
            ChildrenKind::None => ChildrenFlags::NO_CHILDREN,
            ChildrenKind::Single => ChildrenFlags::SINGLE_VNODE,
            ChildrenKind::Keyed => ChildrenFlags::KEYED_VNODES,
            ChildrenKind::NonKeyed => ChildrenFlags::NONE_KEYED_VNODES,
        }
    }

    /// Keyed or non-keyed sequence.
    #[inline]
    pub const fn is_multiple(self) -> bool {
        self.flags().bits() & ChildrenFlags::MULTIPLE_VNODES.bits() != 0
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, ChildrenKind::Unknown)
    }
}

impl From<ChildrenKind> for ChildrenFlags {
    fn from(kind: ChildrenKind) -> Self {
        kind.flags()
    }
}
