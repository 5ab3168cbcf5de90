use thiserror::Error;

/// Default stop score for the population-based searches.
pub const DEFAULT_STOP_SCORE: f64 = 0.99;

/// Coefficient magnitude below which the final simplification pass prunes a term.
pub const PRUNE_THRESHOLD: f64 = 0.005;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

fn require_nonzero(value: usize, name: &'static str) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

fn check_size_range(min_size: usize, max_size: usize) -> Result<(), ConfigError> {
    if min_size == 0 {
        return Err(ConfigError::InvalidParameter {
            name: "min_size",
            reason: "must be at least 1".to_string(),
        });
    }
    if max_size < min_size {
        return Err(ConfigError::InvalidParameter {
            name: "max_size",
            reason: format!("must be >= min_size ({})", min_size),
        });
    }
    Ok(())
}

fn check_expo_limit(expo_limit: i32) -> Result<(), ConfigError> {
    if expo_limit < 0 {
        return Err(ConfigError::InvalidParameter {
            name: "expo_limit",
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub selection_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub expo_limit: i32,
    pub generations: usize,
    pub stop_score: f64,
}

#[derive(Default)]
pub struct EvolutionConfigBuilder {
    population_size: Option<usize>,
    selection_size: Option<usize>,
    min_size: Option<usize>,
    max_size: Option<usize>,
    expo_limit: Option<i32>,
    generations: Option<usize>,
    stop_score: Option<f64>,
}

impl EvolutionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }
    pub fn selection_size(mut self, n: usize) -> Self {
        self.selection_size = Some(n);
        self
    }
    pub fn size_range(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = Some(min_size);
        self.max_size = Some(max_size);
        self
    }
    pub fn expo_limit(mut self, limit: i32) -> Self {
        self.expo_limit = Some(limit);
        self
    }
    pub fn generations(mut self, n: usize) -> Self {
        self.generations = Some(n);
        self
    }
    pub fn stop_score(mut self, score: f64) -> Self {
        self.stop_score = Some(score);
        self
    }

    pub fn build(self) -> Result<EvolutionConfig, ConfigError> {
        let population_size = require_nonzero(
            self.population_size
                .ok_or(ConfigError::MissingParameter("population_size"))?,
            "population_size",
        )?;
        let selection_size = require_nonzero(
            self.selection_size
                .ok_or(ConfigError::MissingParameter("selection_size"))?,
            "selection_size",
        )?;
        let min_size = self.min_size.ok_or(ConfigError::MissingParameter("min_size"))?;
        let max_size = self.max_size.ok_or(ConfigError::MissingParameter("max_size"))?;
        check_size_range(min_size, max_size)?;
        let expo_limit = self
            .expo_limit
            .ok_or(ConfigError::MissingParameter("expo_limit"))?;
        check_expo_limit(expo_limit)?;
        Ok(EvolutionConfig {
            population_size,
            selection_size,
            min_size,
            max_size,
            expo_limit,
            generations: self
                .generations
                .ok_or(ConfigError::MissingParameter("generations"))?,
            stop_score: self.stop_score.unwrap_or(DEFAULT_STOP_SCORE),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchConfig {
    pub population_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub expo_limit: i32,
    pub iterations: usize,
    pub stop_score: f64,
}

#[derive(Default)]
pub struct LocalSearchConfigBuilder {
    population_size: Option<usize>,
    min_size: Option<usize>,
    max_size: Option<usize>,
    expo_limit: Option<i32>,
    iterations: Option<usize>,
    stop_score: Option<f64>,
}

impl LocalSearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }
    pub fn size_range(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = Some(min_size);
        self.max_size = Some(max_size);
        self
    }
    pub fn expo_limit(mut self, limit: i32) -> Self {
        self.expo_limit = Some(limit);
        self
    }
    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = Some(n);
        self
    }
    pub fn stop_score(mut self, score: f64) -> Self {
        self.stop_score = Some(score);
        self
    }

    pub fn build(self) -> Result<LocalSearchConfig, ConfigError> {
        let population_size = require_nonzero(
            self.population_size
                .ok_or(ConfigError::MissingParameter("population_size"))?,
            "population_size",
        )?;
        let min_size = self.min_size.ok_or(ConfigError::MissingParameter("min_size"))?;
        let max_size = self.max_size.ok_or(ConfigError::MissingParameter("max_size"))?;
        check_size_range(min_size, max_size)?;
        let expo_limit = self
            .expo_limit
            .ok_or(ConfigError::MissingParameter("expo_limit"))?;
        check_expo_limit(expo_limit)?;
        Ok(LocalSearchConfig {
            population_size,
            min_size,
            max_size,
            expo_limit,
            iterations: self
                .iterations
                .ok_or(ConfigError::MissingParameter("iterations"))?,
            stop_score: self.stop_score.unwrap_or(DEFAULT_STOP_SCORE),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeSearchConfig {
    pub iterations: usize,
    pub prune_threshold: f64,
    /// Iteration index from which subtraction candidates are generated.
    pub min_interaction_iter: usize,
    /// Iteration index from which transform-swap candidates are generated.
    pub min_transform_iter: usize,
    pub stop_score: f64,
}

#[derive(Default)]
pub struct TreeSearchConfigBuilder {
    iterations: Option<usize>,
    prune_threshold: Option<f64>,
    min_interaction_iter: Option<usize>,
    min_transform_iter: Option<usize>,
    stop_score: Option<f64>,
}

impl TreeSearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(mut self, n: usize) -> Self {
        self.iterations = Some(n);
        self
    }
    pub fn prune_threshold(mut self, threshold: f64) -> Self {
        self.prune_threshold = Some(threshold);
        self
    }
    pub fn min_interaction_iter(mut self, iteration: usize) -> Self {
        self.min_interaction_iter = Some(iteration);
        self
    }
    pub fn min_transform_iter(mut self, iteration: usize) -> Self {
        self.min_transform_iter = Some(iteration);
        self
    }
    pub fn stop_score(mut self, score: f64) -> Self {
        self.stop_score = Some(score);
        self
    }

    pub fn build(self) -> Result<TreeSearchConfig, ConfigError> {
        Ok(TreeSearchConfig {
            iterations: self
                .iterations
                .ok_or(ConfigError::MissingParameter("iterations"))?,
            prune_threshold: self
                .prune_threshold
                .ok_or(ConfigError::MissingParameter("prune_threshold"))?,
            min_interaction_iter: self
                .min_interaction_iter
                .ok_or(ConfigError::MissingParameter("min_interaction_iter"))?,
            min_transform_iter: self
                .min_transform_iter
                .ok_or(ConfigError::MissingParameter("min_transform_iter"))?,
            stop_score: self
                .stop_score
                .ok_or(ConfigError::MissingParameter("stop_score"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evolution_builder_requires_every_core_parameter() {
        let result = EvolutionConfigBuilder::new().population_size(10).build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("selection_size")
        );
    }

    #[test]
    fn evolution_builder_defaults_stop_score() {
        let config = EvolutionConfigBuilder::new()
            .population_size(20)
            .selection_size(10)
            .size_range(1, 3)
            .expo_limit(2)
            .generations(50)
            .build()
            .unwrap();
        assert_eq!(config.stop_score, DEFAULT_STOP_SCORE);
    }

    #[test]
    fn evolution_builder_rejects_inverted_size_range() {
        let result = EvolutionConfigBuilder::new()
            .population_size(20)
            .selection_size(10)
            .size_range(4, 2)
            .expo_limit(2)
            .generations(50)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_size",
                ..
            })
        ));
    }

    #[test]
    fn local_search_builder_rejects_zero_population() {
        let result = LocalSearchConfigBuilder::new()
            .population_size(0)
            .size_range(1, 2)
            .expo_limit(1)
            .iterations(5)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "population_size",
                ..
            })
        ));
    }

    #[test]
    fn tree_search_builder_requires_stop_score() {
        let result = TreeSearchConfigBuilder::new()
            .iterations(5)
            .prune_threshold(0.01)
            .min_interaction_iter(2)
            .min_transform_iter(4)
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("stop_score")
        );
    }

    #[test]
    fn evolution_builder_rejects_negative_expo_limit() {
        let result = EvolutionConfigBuilder::new()
            .population_size(20)
            .selection_size(10)
            .size_range(1, 3)
            .expo_limit(-1)
            .generations(50)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "expo_limit",
                ..
            })
        ));
    }
}
