use crate::{
    config::model::GeneratorConfig,
    foundation::error::ArboraResult,
    scene::project::project,
    scene::sink::SceneSink,
    timeline::scheduler::{Timeline, schedule},
    tree::builder::build,
    tree::model::Tree,
};

/// Pure generation: configuration in, tree and timeline out.
///
/// Deterministic: the same configuration always yields the same tree and
/// timeline, or always fails the same way. There is no retry path and no
/// partial result; callers typically wrap the whole run in one undoable
/// host transaction.
#[tracing::instrument(skip(config), fields(seed = config.growth.seed))]
pub fn synthesize(config: &GeneratorConfig) -> ArboraResult<(Tree, Timeline)> {
    let tree = build(&config.growth)?;
    let timeline = schedule(&tree, &config.timing, config.growth.seed)?;
    Ok((tree, timeline))
}

/// Full generation run: synthesize, then project into the given sink.
#[tracing::instrument(skip(config, sink), fields(seed = config.growth.seed))]
pub fn generate<S: SceneSink>(config: &GeneratorConfig, sink: &mut S) -> ArboraResult<()> {
    let (tree, timeline) = synthesize(config)?;
    project(&tree, &timeline, sink)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
