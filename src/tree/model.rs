use crate::foundation::core::{EdgeId, NodeId, Point, PolarPos};
use crate::foundation::error::{ArboraError, ArboraResult};

/// A point in the generated tree: polar placement plus structural links.
///
/// Nodes are created in breadth-first, parent-major order, so a node's id is
/// always greater than its parent's. Scheduling fields live in the
/// [`crate::Timeline`], not here; the tree is pure geometry.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Arena identity (monotonic; equals the node's index).
    pub id: NodeId,
    /// BFS depth from the root (root = 0).
    pub level: u32,
    /// Polar placement around the fixed layout center.
    pub polar: PolarPos,
    /// Cartesian position derived from `polar`.
    pub position: Point,
    /// Parent node (`None` only for the root).
    pub parent: Option<NodeId>,
    /// Unique incoming edge (`None` only for the root).
    pub incoming: Option<EdgeId>,
    /// Outgoing edges in insertion order; insertion order is traversal order.
    pub edges: Vec<EdgeId>,
}

/// Directed parent→child connector.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    /// Arena identity (monotonic; equals the edge's index).
    pub id: EdgeId,
    /// Owning parent node.
    pub parent: NodeId,
    /// Child node this edge leads to.
    pub child: NodeId,
}

/// Arena of nodes and edges forming a single-rooted tree.
///
/// Parent/child/edge relationships are stored as indices, so the mutual
/// references between a node, its children and its incoming edge never form
/// an ownership cycle.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Tree {
    pub(crate) fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    pub(crate) fn push_node(
        &mut self,
        level: u32,
        polar: PolarPos,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let incoming = parent.map(|p| {
            let edge_id = EdgeId(self.edges.len() as u32);
            self.edges.push(Edge {
                id: edge_id,
                parent: p,
                child: id,
            });
            self.nodes[p.index()].edges.push(edge_id);
            edge_id
        });
        self.nodes.push(Node {
            id,
            level,
            polar,
            position: polar.to_point(),
            parent,
            incoming,
            edges: Vec::new(),
        });
        id
    }

    /// Root node id. Present whenever the tree is non-empty.
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.first().map(|n| n.id)
    }

    /// Node lookup by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Edge lookup by id.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// All nodes in creation (breadth-first) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Ids of a node's children, in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.index()]
            .edges
            .iter()
            .map(|&e| self.edges[e.index()].child)
    }

    /// Closed-form node count for a valid growth configuration:
    /// `1 + initial_lines * Σ_{k=0}^{levels-1} children_per_node^k`.
    ///
    /// Arena ids are `u32`, so [`crate::build`] rejects any configuration
    /// whose count exceeds `u32::MAX` before growing it.
    pub fn expected_node_count(initial_lines: u32, levels: u32, children_per_node: u32) -> usize {
        let mut per_ring = initial_lines as usize;
        let mut total = 1usize;
        for _ in 0..levels {
            total += per_ring;
            per_ring *= children_per_node as usize;
        }
        total
    }

    /// Structural check: single root, every non-root node has exactly one
    /// incoming edge from a lower id (which makes cycles impossible), edge
    /// tables and node links agree.
    pub fn validate(&self) -> ArboraResult<()> {
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.id.index() != idx {
                return Err(ArboraError::geometry("node id does not match arena index"));
            }
            match (idx, node.parent, node.incoming) {
                (0, None, None) => {}
                (0, _, _) => {
                    return Err(ArboraError::geometry("root must have no parent or edge"));
                }
                (_, Some(parent), Some(incoming)) => {
                    if parent.index() >= idx {
                        return Err(ArboraError::geometry(
                            "parent must be created before its child",
                        ));
                    }
                    let edge = self.edge(incoming);
                    if edge.parent != parent || edge.child != node.id {
                        return Err(ArboraError::geometry(
                            "incoming edge does not match parent link",
                        ));
                    }
                }
                _ => {
                    return Err(ArboraError::geometry(
                        "non-root node must have a parent and an incoming edge",
                    ));
                }
            }
        }
        if self.edges.len() != self.nodes.len().saturating_sub(1) {
            return Err(ArboraError::geometry("edge count must be node count - 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/model.rs"]
mod tests;
