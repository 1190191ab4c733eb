use crate::foundation::core::{EdgeId, NodeId, PercentWindow, Point};
use crate::foundation::error::ArboraResult;

/// Everything a host needs to create one node object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSpec {
    /// Stable node id (creation order).
    pub id: NodeId,
    /// Ring depth from the root.
    pub level: u32,
    /// Angle in degrees around the layout center.
    pub angle_deg: f64,
    /// Distance from the layout center.
    pub radius: f64,
    /// Cartesian position around the layout center.
    pub position: Point,
    /// Activation window in percent of total scene duration.
    pub window: PercentWindow,
}

/// Everything a host needs to create one connecting-edge object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeSpec {
    /// Stable edge id (creation order).
    pub id: EdgeId,
    /// Node the edge starts from.
    pub parent: NodeId,
    /// Node the edge leads to.
    pub child: NodeId,
    /// Start point of the drawn segment.
    pub from: Point,
    /// End point of the drawn segment.
    pub to: Point,
    /// Draw window in percent of total scene duration.
    pub window: PercentWindow,
}

/// Reference to an object the sink has created, used by the paint-order pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SceneObject {
    /// A node marker object.
    Node(NodeId),
    /// A connecting-edge object.
    Edge(EdgeId),
    /// Any other host object sharing the paint order (controllers,
    /// backgrounds); identified by a host-assigned index.
    Other(u32),
}

/// Host-compositor abstraction the core projects into.
///
/// Implementations create native objects (shape layers, nulls, text) and wire
/// one shared progress driver that advances 0→100 over `max_time` seconds;
/// per-object visibility comes from each spec's percent window. The core
/// calls the methods in a fixed order: `begin_scene`, every `create_node`
/// (id order), every `create_edge` (id order), then one `reorder` with the
/// full paint order.
pub trait SceneSink {
    /// Announce a new scene and its total duration in seconds.
    fn begin_scene(&mut self, max_time: f64) -> ArboraResult<()>;

    /// Create the object for one node.
    fn create_node(&mut self, spec: &NodeSpec) -> ArboraResult<()>;

    /// Create the object for one connecting edge.
    fn create_edge(&mut self, spec: &EdgeSpec) -> ArboraResult<()>;

    /// Apply the final paint order, topmost object first.
    fn reorder(&mut self, order: &[SceneObject]) -> ArboraResult<()>;
}

/// In-memory sink recording every call; used by tests and dry runs.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct MemorySink {
    /// Total duration announced by `begin_scene`.
    pub max_time: Option<f64>,
    /// Node specs in the order they were created.
    pub nodes: Vec<NodeSpec>,
    /// Edge specs in the order they were created.
    pub edges: Vec<EdgeSpec>,
    /// Paint order applied by `reorder`, if any.
    pub paint_order: Option<Vec<SceneObject>>,
}

impl SceneSink for MemorySink {
    fn begin_scene(&mut self, max_time: f64) -> ArboraResult<()> {
        self.max_time = Some(max_time);
        Ok(())
    }

    fn create_node(&mut self, spec: &NodeSpec) -> ArboraResult<()> {
        self.nodes.push(*spec);
        Ok(())
    }

    fn create_edge(&mut self, spec: &EdgeSpec) -> ArboraResult<()> {
        self.edges.push(*spec);
        Ok(())
    }

    fn reorder(&mut self, order: &[SceneObject]) -> ArboraResult<()> {
        self.paint_order = Some(order.to_vec());
        Ok(())
    }
}
