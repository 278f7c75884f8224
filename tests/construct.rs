//! End-to-end construction properties.

use std::rc::Rc;

use spark_vnode::{
    h, Child, ChildrenKind, Children, Component, ComponentDescriptor, ComponentRef, Fragment,
    HostHandle, NodeKind, Portal, PortalTarget, Render, Result, VNode, VNodeData, VNodeError,
    VNodeFlags,
};

struct Dialog;

impl Render for Dialog {
    fn render(&self, _data: Option<&VNodeData>) -> Result<VNode> {
        h("dialog", None, ())
    }
}

impl Component for Dialog {
    fn renderer(&self) -> Option<&dyn Render> {
        Some(self)
    }
}

fn leaf(tag: &str) -> VNode {
    h(tag, None, ()).unwrap()
}

/// Walk a tree and check the per-node invariants directly.
fn assert_well_formed(node: &VNode) {
    assert_eq!(node.flags().bits().count_ones(), 1, "one kind bit");
    assert!(node.el.is_none());
    match (&node.children, node.child_flags) {
        (Children::None, ChildrenKind::None) => {}
        (Children::Text(_), ChildrenKind::None) => assert!(node.kind.is_text()),
        (Children::Single(child), ChildrenKind::Single) => assert_well_formed(child),
        (Children::Multiple(list), ChildrenKind::Keyed) => {
            assert!(list.len() >= 2);
            let mut keys: Vec<_> = list.iter().map(|c| c.key.clone().unwrap()).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), list.len(), "keys are unique");
            list.iter().for_each(assert_well_formed);
        }
        (children, kind) => panic!("{kind:?} does not describe {children:?}"),
    }
    node.validate().unwrap();
}

#[test]
fn test_construction_is_deterministic() {
    let build = || {
        h(
            "section",
            Some(VNodeData::new().class("card")),
            vec![leaf("h1"), leaf("p"), leaf("footer")],
        )
        .unwrap()
    };
    let (a, b) = (build(), build());

    assert_eq!(a.kind, b.kind);
    assert_eq!(a.tag, b.tag);
    assert_eq!(a.child_flags, b.child_flags);
    let keys = |n: &VNode| n.children.iter().map(|c| c.key.clone()).collect::<Vec<_>>();
    assert_eq!(keys(&a), keys(&b));
}

#[test]
fn test_every_kind_is_well_formed() {
    let func = ComponentRef::function("Func", |_| h("i", None, ()));
    let nodes = vec![
        leaf("div"),
        leaf("svg"),
        h(ComponentRef::new(Dialog), None, ()).unwrap(),
        h(&func, None, "label").unwrap(),
        h(Fragment, None, vec![leaf("a"), leaf("b")]).unwrap(),
        h(Portal, Some(VNodeData::new().target("body")), leaf("div")).unwrap(),
        h("p", None, vec![Child::from("only")]).unwrap(),
    ];
    nodes.iter().for_each(assert_well_formed);
}

#[test]
fn test_text_coercion() {
    let node = h("span", None, 42).unwrap();
    let child = node.children.as_single().unwrap();
    assert_eq!(child.kind, NodeKind::Text);
    assert!(child.tag.is_none());
    assert_eq!(child.text(), Some("42"));

    assert_eq!(h("b", None, true).unwrap().children.as_single().unwrap().text(), Some("true"));
    assert_eq!(h("b", None, 'x').unwrap().children.as_single().unwrap().text(), Some("x"));
}

#[test]
fn test_svg_detection() {
    assert_eq!(leaf("svg").kind, NodeKind::ElementSvg);
    assert_eq!(leaf("div").kind, NodeKind::ElementHtml);
    assert!(leaf("svg").flags().intersects(VNodeFlags::ELEMENT));
}

#[test]
fn test_functional_vs_stateful() {
    let functional = ComponentRef::function("Plain", |_| h("div", None, ()));
    let stateful = ComponentRef::new(Dialog);

    assert_eq!(h(functional, None, ()).unwrap().kind, NodeKind::ComponentFunctional);
    let node = h(stateful, None, ()).unwrap();
    assert_eq!(node.kind, NodeKind::ComponentStatefulNormal);
    assert!(node.kind.is_stateful_component());
    assert!(node.kind.is_component());

    let legacy = ComponentDescriptor::new().render(|_| h("div", None, ()));
    assert_eq!(h(legacy, None, ()).unwrap().kind, NodeKind::ComponentStatefulNormal);
}

#[test]
fn test_synthetic_keys_in_order() {
    let node = h("div", None, vec![leaf("a"), leaf("b"), leaf("c")]).unwrap();

    assert_eq!(node.child_flags, ChildrenKind::Keyed);
    let list = node.children.as_multiple().unwrap();
    let tags: Vec<_> = list.iter().map(|c| c.tag.as_element().unwrap()).collect();
    let keys: Vec<_> = list.iter().map(|c| c.key.as_deref().unwrap()).collect();
    assert_eq!(tags, vec!["a", "b", "c"]);
    assert_eq!(keys, vec!["|0", "|1", "|2"]);
}

#[test]
fn test_positional_keys_shift_on_insert() {
    let before = h("ul", None, vec![leaf("li"), leaf("li")]).unwrap();
    let after = h("ul", None, vec![leaf("header"), leaf("li"), leaf("li")]).unwrap();

    // The first <li> moved from "|0" to "|1": positional keys do not follow nodes.
    let first_li = |n: &VNode| {
        n.children
            .iter()
            .find(|c| c.tag.as_element() == Some("li"))
            .and_then(|c| c.key.clone())
    };
    assert_eq!(first_li(&before).as_deref(), Some("|0"));
    assert_eq!(first_li(&after).as_deref(), Some("|1"));
}

#[test]
fn test_explicit_keys_survive() {
    let keyed = |k: &str| h("li", Some(VNodeData::new().key(k)), ()).unwrap();
    let node = h("ul", None, vec![keyed("x"), leaf("li"), keyed("y")]).unwrap();
    let keys: Vec<_> = node.children.iter().map(|c| c.key.clone().unwrap()).collect();
    assert_eq!(keys, vec!["x", "|1", "y"]);
}

#[test]
fn test_portal_target_extraction() {
    let node = h(Portal, Some(VNodeData::new().target("#overlay")), leaf("div")).unwrap();
    assert_eq!(node.kind, NodeKind::Portal);
    assert_eq!(
        node.tag.as_portal_target(),
        Some(&PortalTarget::Selector("#overlay".to_string()))
    );

    let handle: HostHandle = Rc::new("host-node");
    let node = h(Portal, Some(VNodeData::new().target(handle.clone())), ()).unwrap();
    assert_eq!(node.tag.as_portal_target(), Some(&PortalTarget::Handle(handle)));
}

#[test]
fn test_functional_component_wrapping_div() {
    let my_func = ComponentRef::function("MyFunc", |_| h("div", None, ()));
    let outer = h(&my_func, None, h("div", None, ()).unwrap()).unwrap();

    assert_eq!(outer.kind, NodeKind::ComponentFunctional);
    assert_eq!(outer.tag.as_component(), Some(&my_func));
    assert_eq!(outer.child_flags, ChildrenKind::Single);

    let inner = outer.children.as_single().unwrap();
    assert_eq!(inner.kind, NodeKind::ElementHtml);
    assert_eq!(inner.tag.as_element(), Some("div"));
    assert_eq!(inner.child_flags, ChildrenKind::None);
}

#[test]
fn test_hand_built_node_fails_validation() {
    let mut node = leaf("div");
    node.child_flags = ChildrenKind::Unknown;
    assert!(matches!(node.validate(), Err(VNodeError::InvariantViolation { .. })));

    let mut node = h("div", None, vec![leaf("a"), leaf("b")]).unwrap();
    if let Children::Multiple(list) = &mut node.children {
        list[1].key = list[0].key.clone();
    }
    assert!(matches!(node.validate(), Err(VNodeError::DuplicateKey { .. })));

    let mut node = leaf("div");
    node.kind = NodeKind::Text;
    assert!(matches!(node.validate(), Err(VNodeError::InvariantViolation { .. })));
}
