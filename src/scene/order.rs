use crate::scene::sink::SceneObject;

/// Compute the final paint order for a creation-order object list
/// (topmost object first).
///
/// Connecting edges must render beneath the node markers they join: every
/// edge object is pulled out of the list, sorted by ascending creation id,
/// and spliced back immediately after the bottommost node object. The
/// relative order of all other objects is preserved, so host objects sitting
/// below the diagram (backgrounds, controllers) stay below the edges too.
pub fn paint_order(objects: &[SceneObject]) -> Vec<SceneObject> {
    let mut edges: Vec<SceneObject> = objects
        .iter()
        .copied()
        .filter(|o| matches!(o, SceneObject::Edge(_)))
        .collect();
    edges.sort_by_key(|o| match *o {
        SceneObject::Edge(id) => id.0,
        _ => u32::MAX,
    });

    let rest: Vec<SceneObject> = objects
        .iter()
        .copied()
        .filter(|o| !matches!(o, SceneObject::Edge(_)))
        .collect();

    // Bottommost node = last node in top-first order. With no nodes at all
    // the edges go on top, which only happens for an empty projection.
    let splice_at = rest
        .iter()
        .rposition(|o| matches!(o, SceneObject::Node(_)))
        .map_or(0, |i| i + 1);

    let mut ordered = Vec::with_capacity(objects.len());
    ordered.extend_from_slice(&rest[..splice_at]);
    ordered.extend_from_slice(&edges);
    ordered.extend_from_slice(&rest[splice_at..]);
    ordered
}

#[cfg(test)]
#[path = "../../tests/unit/scene/order.rs"]
mod tests;
