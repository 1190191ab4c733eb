use std::collections::VecDeque;

use crate::{
    config::model::TimingConfig,
    foundation::core::{EdgeId, NodeId, PercentWindow, TimeWindow},
    foundation::error::{ArboraError, ArboraResult},
    rng::lehmer::{Lehmer, schedule_seed},
    tree::model::Tree,
};

/// Derived, read-only timeline over a tree: one activation window per node,
/// one draw window per edge, and the scene's total duration.
///
/// Windows are absolute seconds; [`Timeline::node_percent`] /
/// [`Timeline::edge_percent`] project them into the 0–100 progress space the
/// scene sink consumes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    node_windows: Vec<TimeWindow>,
    edge_windows: Vec<TimeWindow>,
    max_time: f64,
}

impl Timeline {
    /// Activation window of a node, seconds.
    pub fn node_window(&self, id: NodeId) -> TimeWindow {
        self.node_windows[id.index()]
    }

    /// Draw window of an edge, seconds.
    pub fn edge_window(&self, id: EdgeId) -> TimeWindow {
        self.edge_windows[id.index()]
    }

    /// Activation window of a node in percent of [`Timeline::max_time`].
    pub fn node_percent(&self, id: NodeId) -> PercentWindow {
        self.node_windows[id.index()].to_percent(self.max_time)
    }

    /// Draw window of an edge in percent of [`Timeline::max_time`].
    pub fn edge_percent(&self, id: EdgeId) -> PercentWindow {
        self.edge_windows[id.index()].to_percent(self.max_time)
    }

    /// Total scene duration in seconds; the maximum over all window ends,
    /// never less than the root's own activation end, and always positive.
    pub fn max_time(&self) -> f64 {
        self.max_time
    }
}

/// Assign every node an activation window and every edge a draw window.
///
/// Breadth-first from the root, so a node's schedule is final before any of
/// its children are visited and child windows never precede their parent's.
/// The random stream is seeded from a fixed affine transform of the growth
/// seed ([`schedule_seed`]) to decorrelate timing from geometry.
#[tracing::instrument(skip(tree, timing), fields(nodes = tree.node_count()))]
pub fn schedule(tree: &Tree, timing: &TimingConfig, seed: i32) -> ArboraResult<Timeline> {
    timing.validate()?;

    let Some(root) = tree.root() else {
        return Err(ArboraError::scheduling("cannot schedule an empty tree"));
    };

    let zero = TimeWindow {
        start: 0.0,
        end: 0.0,
    };
    let mut node_windows = vec![zero; tree.node_count()];
    let mut edge_windows = vec![zero; tree.edge_count()];
    let mut rng = Lehmer::new(schedule_seed(i64::from(seed)));

    node_windows[root.index()] = TimeWindow {
        start: 0.0,
        end: timing.node_duration,
    };
    let mut max_time = timing.node_duration;

    let mut queue = VecDeque::with_capacity(tree.node_count());
    queue.push_back(root);
    while let Some(node_id) = queue.pop_front() {
        let node = tree.node(node_id);
        let node_end = node_windows[node_id.index()].end;
        let at_root = node_id == root;

        for (i, &edge_id) in node.edges.iter().enumerate() {
            // The root's fan may be forced to launch as one; in that case the
            // offset computation is skipped entirely so the random stream is
            // not advanced.
            let offset = if at_root && timing.simultaneous_root {
                0.0
            } else {
                let mut offset = timing.child_stagger * i as f64;
                if timing.random_offset > 0.0 {
                    offset += rng.range(-timing.random_offset, timing.random_offset);
                }
                offset
            };

            // A large negative random offset could push the edge before the
            // scene starts; clamp so every window stays inside [0, max_time].
            let draw_start = (node_end + offset).max(0.0);
            let draw_end = draw_start + timing.line_duration;
            edge_windows[edge_id.index()] = TimeWindow {
                start: draw_start,
                end: draw_end,
            };

            let child = tree.edge(edge_id).child;
            let window = if timing.smooth_flow {
                // Growth overlaps the edge draw-in; the end never lands before
                // the edge completes, which can stretch the window past
                // node_duration when edges are slow. Intentional.
                TimeWindow {
                    start: draw_start,
                    end: (draw_start + timing.node_duration).max(draw_end),
                }
            } else {
                TimeWindow {
                    start: draw_end,
                    end: draw_end + timing.node_duration,
                }
            };
            node_windows[child.index()] = window;
            max_time = max_time.max(window.end).max(draw_end);

            queue.push_back(child);
        }
    }

    if max_time <= 0.0 {
        // Underflow guard: keeps the percent-space denominator positive.
        max_time = timing.node_duration.max(1.0);
    }

    tracing::debug!(max_time, "timeline scheduled");
    Ok(Timeline {
        node_windows,
        edge_windows,
        max_time,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
