use super::*;
use crate::foundation::core::{EdgeId, NodeId};

fn node(id: u32) -> SceneObject {
    SceneObject::Node(NodeId(id))
}

fn edge(id: u32) -> SceneObject {
    SceneObject::Edge(EdgeId(id))
}

#[test]
fn edges_land_directly_below_the_bottommost_node() {
    // Creation interleaves nodes and edges; the host list is top-first.
    let created = vec![node(0), edge(0), node(1), edge(1), node(2)];
    let ordered = paint_order(&created);
    assert_eq!(ordered, vec![node(0), node(1), node(2), edge(0), edge(1)]);
}

#[test]
fn edges_are_sorted_by_creation_id() {
    let created = vec![edge(2), node(0), edge(0), node(1), edge(1)];
    let ordered = paint_order(&created);
    assert_eq!(
        ordered,
        vec![node(0), node(1), edge(0), edge(1), edge(2)]
    );
}

#[test]
fn host_objects_below_the_diagram_stay_below() {
    let background = SceneObject::Other(7);
    let controller = SceneObject::Other(3);
    let created = vec![controller, node(0), edge(0), node(1), background];
    let ordered = paint_order(&created);
    assert_eq!(
        ordered,
        vec![controller, node(0), node(1), edge(0), background]
    );
}

#[test]
fn list_without_edges_is_unchanged() {
    let created = vec![node(0), node(1), SceneObject::Other(0)];
    assert_eq!(paint_order(&created), created);
}

#[test]
fn empty_list_stays_empty() {
    assert!(paint_order(&[]).is_empty());
}
