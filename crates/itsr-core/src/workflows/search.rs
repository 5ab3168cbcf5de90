use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use crate::engine::config::{
    EvolutionConfigBuilder, LocalSearchConfigBuilder, TreeSearchConfigBuilder,
};
use crate::engine::error::EngineError;
use crate::engine::search::{evolution, local, tree};
use rand::thread_rng;
use tracing::{info, instrument};

/// Runs the evolutionary search (ITES) over raw tabular data.
///
/// `stop_score` of `None` uses the default of 0.99. Ambient randomness comes from
/// the thread-local generator; for reproducible runs drive
/// [`evolution::run`] directly with a seeded RNG.
#[instrument(skip(xs, ys), name = "evolutionary_search_workflow")]
#[allow(clippy::too_many_arguments)]
pub fn evolutionary_search(
    xs: Vec<Vec<f64>>,
    ys: Vec<f64>,
    population_size: usize,
    selection_size: usize,
    min_size: usize,
    max_size: usize,
    expo_limit: i32,
    generations: usize,
    stop_score: Option<f64>,
) -> Result<ItModel, EngineError> {
    let data = Dataset::new(xs, ys)?;
    let mut builder = EvolutionConfigBuilder::new()
        .population_size(population_size)
        .selection_size(selection_size)
        .size_range(min_size, max_size)
        .expo_limit(expo_limit)
        .generations(generations);
    if let Some(score) = stop_score {
        builder = builder.stop_score(score);
    }
    let config = builder.build()?;

    info!(
        samples = data.len(),
        nvars = data.nvars(),
        "starting evolutionary search"
    );
    let model = evolution::run(&data, &config, &mut thread_rng());
    info!(
        score = model.fitness(),
        terms = model.len(),
        "evolutionary search finished"
    );
    Ok(model)
}

/// Runs the iterated local search (ITLS) over raw tabular data.
///
/// `stop_score` of `None` uses the default of 0.99.
#[instrument(skip(xs, ys), name = "local_search_workflow")]
#[allow(clippy::too_many_arguments)]
pub fn local_search(
    xs: Vec<Vec<f64>>,
    ys: Vec<f64>,
    population_size: usize,
    min_size: usize,
    max_size: usize,
    expo_limit: i32,
    iterations: usize,
    stop_score: Option<f64>,
) -> Result<ItModel, EngineError> {
    let data = Dataset::new(xs, ys)?;
    let mut builder = LocalSearchConfigBuilder::new()
        .population_size(population_size)
        .size_range(min_size, max_size)
        .expo_limit(expo_limit)
        .iterations(iterations);
    if let Some(score) = stop_score {
        builder = builder.stop_score(score);
    }
    let config = builder.build()?;

    info!(
        samples = data.len(),
        nvars = data.nvars(),
        "starting local search"
    );
    let model = local::run(&data, &config, &mut thread_rng());
    info!(
        score = model.fitness(),
        terms = model.len(),
        "local search finished"
    );
    Ok(model)
}

/// Runs the greedy tree-expansion search (SYMTREE) over raw tabular data.
///
/// Fully deterministic: identical inputs always produce the identical model.
#[instrument(skip(xs, ys), name = "tree_expansion_search_workflow")]
pub fn tree_expansion_search(
    xs: Vec<Vec<f64>>,
    ys: Vec<f64>,
    iterations: usize,
    threshold: f64,
    min_interaction_iter: usize,
    min_transform_iter: usize,
    stop_score: f64,
) -> Result<ItModel, EngineError> {
    let data = Dataset::new(xs, ys)?;
    let config = TreeSearchConfigBuilder::new()
        .iterations(iterations)
        .prune_threshold(threshold)
        .min_interaction_iter(min_interaction_iter)
        .min_transform_iter(min_transform_iter)
        .stop_score(stop_score)
        .build()?;

    info!(
        samples = data.len(),
        nvars = data.nvars(),
        "starting tree-expansion search"
    );
    let model = tree::run(&data, &config);
    info!(
        score = model.fitness(),
        terms = model.len(),
        "tree-expansion search finished"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::DatasetError;
    use crate::engine::config::ConfigError;

    fn linear_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let xs: Vec<Vec<f64>> = (1..=10).map(|i| vec![i as f64, (11 - i) as f64]).collect();
        let ys = xs.iter().map(|x| 2.0 * x[0] + 3.0 * x[1]).collect();
        (xs, ys)
    }

    #[test]
    fn evolutionary_search_rejects_ragged_datasets() {
        let result = evolutionary_search(
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![1.0, 2.0],
            10,
            5,
            1,
            2,
            1,
            3,
            None,
        );
        assert!(matches!(
            result,
            Err(EngineError::Dataset {
                source: DatasetError::RaggedSample { .. }
            })
        ));
    }

    #[test]
    fn local_search_rejects_inverted_size_range() {
        let (xs, ys) = linear_data();
        let result = local_search(xs, ys, 10, 3, 1, 1, 3, None);
        assert!(matches!(
            result,
            Err(EngineError::Config {
                source: ConfigError::InvalidParameter { .. }
            })
        ));
    }

    #[test]
    fn tree_expansion_search_runs_end_to_end() {
        let (xs, ys) = linear_data();
        let model = tree_expansion_search(xs, ys, 3, 0.005, 10, 10, 0.999).unwrap();
        // The root model already spans a noise-free linear target exactly.
        assert!(model.fitness() >= 0.999);
        assert!(!model.is_empty());
    }

    #[test]
    fn local_search_returns_a_valid_model_with_a_tiny_budget() {
        let (xs, ys) = linear_data();
        let model = local_search(xs, ys, 8, 1, 2, 1, 1, Some(0.9)).unwrap();
        assert!(!model.is_empty());
        let score = model.fitness();
        assert!((0.0..=1.0).contains(&score));
    }
}
