use crate::{
    foundation::error::ArboraResult,
    scene::order::paint_order,
    scene::sink::{EdgeSpec, NodeSpec, SceneObject, SceneSink},
    timeline::scheduler::Timeline,
    tree::model::Tree,
};

/// Project a tree and its timeline into scene-sink calls.
///
/// Runs only after build and schedule have fully succeeded, so a sink never
/// observes a partial tree. Call order: `begin_scene(max_time)`, one
/// `create_node` per node in id order, one `create_edge` per edge in id
/// order, then a single `reorder` with the computed paint order.
#[tracing::instrument(skip(tree, timeline, sink), fields(nodes = tree.node_count()))]
pub fn project<S: SceneSink>(tree: &Tree, timeline: &Timeline, sink: &mut S) -> ArboraResult<()> {
    sink.begin_scene(timeline.max_time())?;

    let mut objects = Vec::with_capacity(tree.node_count() + tree.edge_count());

    for node in tree.nodes() {
        sink.create_node(&NodeSpec {
            id: node.id,
            level: node.level,
            angle_deg: node.polar.angle_deg,
            radius: node.polar.radius,
            position: node.position,
            window: timeline.node_percent(node.id),
        })?;
        objects.push(SceneObject::Node(node.id));
    }

    for edge in tree.edges() {
        sink.create_edge(&EdgeSpec {
            id: edge.id,
            parent: edge.parent,
            child: edge.child,
            from: tree.node(edge.parent).position,
            to: tree.node(edge.child).position,
            window: timeline.edge_percent(edge.id),
        })?;
        objects.push(SceneObject::Edge(edge.id));
    }

    sink.reorder(&paint_order(&objects))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
