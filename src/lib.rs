//! Arbora generates animated radial branching diagrams for motion-graphics
//! hosts: a seeded growth pass lays out a tree of nodes around a center, a
//! scheduling pass assigns every node and edge an animation window, and a
//! projection pass hands the result to a host-specific scene sink.
//!
//! # Pipeline overview
//!
//! 1. **Grow**: `GrowthConfig -> Tree` (seeded Lehmer stream drives ring
//!    placement and jitter)
//! 2. **Schedule**: `Tree + TimingConfig -> Timeline` (breadth-first window
//!    assignment, total-duration tracking)
//! 3. **Project**: `Tree + Timeline -> SceneSink` calls (specs carry percent
//!    windows in a 0–100 progress space)
//! 4. **Order**: one paint-order pass so connecting edges render beneath
//!    their node markers
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a configuration value fully determines the
//!   tree and timeline; each run owns its own random streams.
//! - **Host-free core**: all compositor interaction goes through the
//!   [`SceneSink`] trait; [`MemorySink`] records calls for tests and dry runs.
//! - **Single-threaded**: growth and scheduling are sequential state
//!   machines; nothing is shared across runs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod pipeline;
mod rng;
mod scene;
mod timeline;
mod tree;

pub use config::model::{GeneratorConfig, GrowthConfig, TimingConfig};
pub use foundation::core::{EdgeId, NodeId, PercentWindow, Point, PolarPos, TimeWindow, Vec2};
pub use foundation::error::{ArboraError, ArboraResult};
pub use pipeline::{generate, synthesize};
pub use rng::lehmer::{Lehmer, schedule_seed};
pub use scene::order::paint_order;
pub use scene::project::project;
pub use scene::sink::{EdgeSpec, MemorySink, NodeSpec, SceneObject, SceneSink};
pub use timeline::scheduler::{Timeline, schedule};
pub use tree::builder::build;
pub use tree::model::{Edge, Node, Tree};
