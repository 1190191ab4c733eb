use crate::foundation::error::{ArboraError, ArboraResult};

/// Geometry parameters for radial tree growth.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct GrowthConfig {
    /// Number of level-1 branches radiating from the root, `[1, 720]`.
    pub initial_lines: u32,
    /// Number of rings beyond the root, `[1, 10]`.
    pub levels: u32,
    /// Branching factor below level 1, `[1, 8]`.
    pub children_per_node: u32,
    /// Radius of the first ring, in scene units (> 0).
    pub base_radius: f64,
    /// Radius added per ring beyond the first (>= 0).
    pub radius_step: f64,
    /// Half-width of the uniform radius perturbation (>= 0).
    pub radius_jitter: f64,
    /// Half-width of the uniform angular perturbation, degrees (>= 0).
    pub angle_jitter: f64,
    /// Total fan angle a parent's children spread across, degrees `[0, 360]`.
    pub branch_spread: f64,
    /// Determinism seed; the timing stream derives its own seed from it.
    pub seed: i32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_lines: 6,
            levels: 3,
            children_per_node: 2,
            base_radius: 120.0,
            radius_step: 90.0,
            radius_jitter: 0.0,
            angle_jitter: 0.0,
            branch_spread: 60.0,
            seed: 1,
        }
    }
}

/// Timing parameters for the animation timeline.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct TimingConfig {
    /// Seconds a node takes to grow in (> 0).
    pub node_duration: f64,
    /// Seconds an edge takes to draw in (> 0).
    pub line_duration: f64,
    /// Per-sibling start delay, seconds (>= 0).
    pub child_stagger: f64,
    /// Half-width of the uniform start-time perturbation, seconds (>= 0).
    pub random_offset: f64,
    /// Launch all of the root's edges at once, ignoring stagger and offset.
    pub simultaneous_root: bool,
    /// Overlap node growth with the incoming edge draw instead of waiting.
    pub smooth_flow: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            node_duration: 0.3,
            line_duration: 0.4,
            child_stagger: 0.08,
            random_offset: 0.0,
            simultaneous_root: false,
            smooth_flow: true,
        }
    }
}

/// Full configuration for one generation run.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Geometry parameters.
    pub growth: GrowthConfig,
    /// Timeline parameters.
    pub timing: TimingConfig,
}

impl GrowthConfig {
    /// Validate against the documented ranges.
    ///
    /// `initial_lines == 0` passes: it is the documented no-op that grows a
    /// childless root. The UI-facing `[1, 720]` range is enforced by
    /// [`GrowthConfig::clamped`], not here.
    pub fn validate(&self) -> ArboraResult<()> {
        if self.initial_lines > 720 {
            return Err(ArboraError::validation("initial_lines must be <= 720"));
        }
        if self.levels < 1 || self.levels > 10 {
            return Err(ArboraError::validation("levels must be in [1, 10]"));
        }
        if self.children_per_node < 1 || self.children_per_node > 8 {
            return Err(ArboraError::validation(
                "children_per_node must be in [1, 8]",
            ));
        }
        if !(self.base_radius > 0.0) {
            return Err(ArboraError::validation("base_radius must be > 0"));
        }
        for (name, v) in [
            ("radius_step", self.radius_step),
            ("radius_jitter", self.radius_jitter),
            ("angle_jitter", self.angle_jitter),
        ] {
            if !(v >= 0.0) {
                return Err(ArboraError::validation(format!("{name} must be >= 0")));
            }
        }
        if !(0.0..=360.0).contains(&self.branch_spread) {
            return Err(ArboraError::validation(
                "branch_spread must be in [0, 360] degrees",
            ));
        }
        Ok(())
    }

    /// Clamp-and-continue boundary: fold out-of-range values into range.
    pub fn clamped(self) -> Self {
        Self {
            initial_lines: self.initial_lines.clamp(1, 720),
            levels: self.levels.clamp(1, 10),
            children_per_node: self.children_per_node.clamp(1, 8),
            base_radius: if self.base_radius > 0.0 {
                self.base_radius
            } else {
                1.0
            },
            radius_step: self.radius_step.max(0.0),
            radius_jitter: self.radius_jitter.max(0.0),
            angle_jitter: self.angle_jitter.max(0.0),
            branch_spread: self.branch_spread.clamp(0.0, 360.0),
            seed: self.seed,
        }
    }
}

impl TimingConfig {
    /// Validate against the documented ranges.
    pub fn validate(&self) -> ArboraResult<()> {
        if !(self.node_duration > 0.0) {
            return Err(ArboraError::validation("node_duration must be > 0"));
        }
        if !(self.line_duration > 0.0) {
            return Err(ArboraError::validation("line_duration must be > 0"));
        }
        if !(self.child_stagger >= 0.0) {
            return Err(ArboraError::validation("child_stagger must be >= 0"));
        }
        if !(self.random_offset >= 0.0) {
            return Err(ArboraError::validation("random_offset must be >= 0"));
        }
        Ok(())
    }

    /// Clamp-and-continue boundary: fold out-of-range values into range.
    pub fn clamped(self) -> Self {
        Self {
            node_duration: if self.node_duration > 0.0 {
                self.node_duration
            } else {
                0.1
            },
            line_duration: if self.line_duration > 0.0 {
                self.line_duration
            } else {
                0.1
            },
            child_stagger: self.child_stagger.max(0.0),
            random_offset: self.random_offset.max(0.0),
            ..self
        }
    }
}

impl GeneratorConfig {
    /// Validate both halves of the configuration.
    pub fn validate(&self) -> ArboraResult<()> {
        self.growth.validate()?;
        self.timing.validate()
    }

    /// Clamp-and-continue boundary over both halves.
    pub fn clamped(self) -> Self {
        Self {
            growth: self.growth.clamped(),
            timing: self.timing.clamped(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
