use crate::{
    config::model::GrowthConfig,
    foundation::core::{NodeId, PolarPos},
    foundation::error::{ArboraError, ArboraResult},
    rng::lehmer::Lehmer,
    tree::model::Tree,
};

/// Radius below which rings collapse into the root marker; never emitted.
const MIN_RADIUS: f64 = 5.0;

/// Grow a radial tree from a validated configuration.
///
/// Creation order is deterministic: breadth-first by level, and within a
/// level parent-major / child-minor, so the arena ids double as a stable
/// creation order for downstream passes. Per child, the angle-jitter draw
/// happens before the radius-jitter draw; jitter draws are skipped entirely
/// when the corresponding jitter amount is zero, so disabling jitter does
/// not shift the remaining stream.
#[tracing::instrument(skip(config), fields(seed = config.seed))]
pub fn build(config: &GrowthConfig) -> ArboraResult<Tree> {
    config.validate()?;

    let expected = Tree::expected_node_count(
        config.initial_lines,
        config.levels,
        config.children_per_node,
    );
    // Arena ids are u32; refuse configurations that could not be addressed.
    if expected > u32::MAX as usize {
        return Err(ArboraError::geometry(format!(
            "configuration grows {expected} nodes, beyond the arena id space"
        )));
    }
    let mut tree = Tree::with_capacity(expected, expected.saturating_sub(1));
    let mut rng = Lehmer::new(i64::from(config.seed));

    let root = tree.push_node(0, PolarPos::ORIGIN, None);

    // Ring 1: evenly spaced around the full circle. Zero initial lines is a
    // valid no-op that leaves the root childless.
    let mut prior_ring: Vec<NodeId> = Vec::new();
    if config.initial_lines > 0 {
        let n = config.initial_lines;
        let step = 360.0 / f64::from(n);
        for i in 0..n {
            let angle = f64::from(i) * step + angle_jitter(&mut rng, config);
            let radius = compute_radius(&mut rng, config, 1);
            let id = tree.push_node(
                1,
                PolarPos {
                    angle_deg: angle,
                    radius,
                },
                Some(root),
            );
            prior_ring.push(id);
        }
    }

    // Rings 2..=levels: a fixed fan of children under every prior-ring node.
    for level in 2..=config.levels {
        let mut ring = Vec::with_capacity(prior_ring.len() * config.children_per_node as usize);
        for &parent in &prior_ring {
            let parent_angle = tree.node(parent).polar.angle_deg;
            for c in 0..config.children_per_node {
                let spread = fan_offset(c, config.children_per_node, config.branch_spread);
                let angle = parent_angle + spread + angle_jitter(&mut rng, config);
                let radius = compute_radius(&mut rng, config, level);
                let id = tree.push_node(
                    level,
                    PolarPos {
                        angle_deg: angle,
                        radius,
                    },
                    Some(parent),
                );
                ring.push(id);
            }
        }
        prior_ring = ring;
    }

    tracing::debug!(
        nodes = tree.node_count(),
        edges = tree.edge_count(),
        "tree grown"
    );
    Ok(tree)
}

/// Angular offset of child `c` within its parent's fan.
///
/// Children span `branch_spread` degrees centered on the parent's angle. A
/// single child sits straight ahead (avoids the `c / (n - 1)` division).
fn fan_offset(c: u32, children_per_node: u32, branch_spread: f64) -> f64 {
    if children_per_node <= 1 {
        return 0.0;
    }
    let normalized = f64::from(c) / f64::from(children_per_node - 1) - 0.5;
    branch_spread * normalized
}

fn angle_jitter(rng: &mut Lehmer, config: &GrowthConfig) -> f64 {
    if config.angle_jitter > 0.0 {
        rng.range(-config.angle_jitter, config.angle_jitter)
    } else {
        0.0
    }
}

/// Ring radius for `level >= 1`, floored so jitter can never fold a ring
/// through the center.
fn compute_radius(rng: &mut Lehmer, config: &GrowthConfig, level: u32) -> f64 {
    let jitter = if config.radius_jitter > 0.0 {
        rng.range(-config.radius_jitter, config.radius_jitter)
    } else {
        0.0
    };
    (config.base_radius + f64::from(level - 1) * config.radius_step + jitter).max(MIN_RADIUS)
}

#[cfg(test)]
#[path = "../../tests/unit/tree/builder.rs"]
mod tests;
