use super::*;
use crate::{
    config::model::{GrowthConfig, TimingConfig},
    foundation::error::ArboraError,
    scene::sink::MemorySink,
    timeline::scheduler::schedule,
    tree::builder::build,
};

fn small_scene() -> (Tree, Timeline) {
    let tree = build(&GrowthConfig {
        initial_lines: 3,
        levels: 2,
        children_per_node: 2,
        ..GrowthConfig::default()
    })
    .unwrap();
    let timeline = schedule(&tree, &TimingConfig::default(), 1).unwrap();
    (tree, timeline)
}

#[test]
fn sink_receives_every_object_in_id_order() {
    let (tree, timeline) = small_scene();
    let mut sink = MemorySink::default();
    project(&tree, &timeline, &mut sink).unwrap();

    assert_eq!(sink.max_time, Some(timeline.max_time()));
    assert_eq!(sink.nodes.len(), tree.node_count());
    assert_eq!(sink.edges.len(), tree.edge_count());
    for (i, spec) in sink.nodes.iter().enumerate() {
        assert_eq!(spec.id.0 as usize, i);
    }
    for (i, spec) in sink.edges.iter().enumerate() {
        assert_eq!(spec.id.0 as usize, i);
    }
}

#[test]
fn specs_carry_normalized_windows_and_geometry() {
    let (tree, timeline) = small_scene();
    let mut sink = MemorySink::default();
    project(&tree, &timeline, &mut sink).unwrap();

    for spec in &sink.nodes {
        let node = tree.node(spec.id);
        assert_eq!(spec.level, node.level);
        assert_eq!(spec.position, node.position);
        assert!(spec.window.start >= 0.0 && spec.window.end <= 100.0 + 1e-9);
        assert!(spec.window.end >= spec.window.start);
    }
    for spec in &sink.edges {
        assert_eq!(spec.from, tree.node(spec.parent).position);
        assert_eq!(spec.to, tree.node(spec.child).position);
        assert!(spec.window.end >= spec.window.start);
    }
}

#[test]
fn reorder_puts_edges_under_the_nodes() {
    let (tree, timeline) = small_scene();
    let mut sink = MemorySink::default();
    project(&tree, &timeline, &mut sink).unwrap();

    let order = sink.paint_order.unwrap();
    assert_eq!(order.len(), tree.node_count() + tree.edge_count());
    let first_edge = order
        .iter()
        .position(|o| matches!(o, SceneObject::Edge(_)))
        .unwrap();
    // Every node precedes every edge, and edges ascend by id.
    assert!(
        order[..first_edge]
            .iter()
            .all(|o| matches!(o, SceneObject::Node(_)))
    );
    let edge_ids: Vec<u32> = order[first_edge..]
        .iter()
        .map(|o| match o {
            SceneObject::Edge(id) => id.0,
            _ => panic!("node after the first edge"),
        })
        .collect();
    assert!(edge_ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sink_failures_abort_the_projection() {
    struct FailingSink {
        created: usize,
    }
    impl SceneSink for FailingSink {
        fn begin_scene(&mut self, _max_time: f64) -> ArboraResult<()> {
            Ok(())
        }
        fn create_node(&mut self, _spec: &NodeSpec) -> ArboraResult<()> {
            if self.created == 2 {
                return Err(ArboraError::scene("host rejected layer"));
            }
            self.created += 1;
            Ok(())
        }
        fn create_edge(&mut self, _spec: &EdgeSpec) -> ArboraResult<()> {
            panic!("edges must not be created after a node failure");
        }
        fn reorder(&mut self, _order: &[SceneObject]) -> ArboraResult<()> {
            panic!("reorder must not run after a failure");
        }
    }

    let (tree, timeline) = small_scene();
    let mut sink = FailingSink { created: 0 };
    let err = project(&tree, &timeline, &mut sink).unwrap_err();
    assert!(err.to_string().contains("scene sink error:"));
}
