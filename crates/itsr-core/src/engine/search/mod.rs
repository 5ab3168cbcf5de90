//! # Search Module
//!
//! This module implements the three search strategies that drive the engine:
//!
//! - **Evolutionary Search** ([`evolution`]) - tournament-selected, mutation-driven
//!   population search over IT models (ITES)
//! - **Local Search** ([`local`]) - iterated first-improvement scanning of the full
//!   structural neighborhood of the incumbent (ITLS)
//! - **Tree-Expansion Search** ([`tree`]) - deterministic greedy expansion of a tree
//!   of models rooted at the plain linear model (SYMTREE)
//!
//! All strategies share the same contract: candidates are sanitized and fitted before
//! scoring, the best model seen is tracked monotonically across the whole run, budgets
//! and stop scores are checked only at generation/iteration boundaries, and the final
//! best model is passed through low-weight pruning before being returned.

pub mod evolution;
pub mod local;
pub mod tree;

use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use rand::Rng;

use super::fitter::fit;
use super::operators::{build_random, sanitize};

/// Builds the shared initial population: a proportional split of random individuals
/// across every model size in `[min_size, max_size]`, each sanitized and fitted.
///
/// The division remainder goes to the smallest sizes, one extra individual each, so
/// the population holds exactly `population_size` individuals.
pub(crate) fn initial_population(
    data: &Dataset,
    population_size: usize,
    min_size: usize,
    max_size: usize,
    expo_limit: i32,
    rng: &mut impl Rng,
) -> Vec<ItModel> {
    let n_sizes = max_size - min_size + 1;
    let per_size = population_size / n_sizes;
    let remainder = population_size % n_sizes;
    let mut population = Vec::with_capacity(population_size);
    for (offset, size) in (min_size..=max_size).enumerate() {
        let count = per_size + usize::from(offset < remainder);
        for _ in 0..count {
            let model = build_random(rng, size, data.nvars(), expo_limit);
            population.push(fit(sanitize(model), data));
        }
    }
    population
}

/// Tournament of 2: the better of two individuals drawn uniformly with replacement.
pub(crate) fn tournament<'a>(pool: &'a [ItModel], rng: &mut impl Rng) -> &'a ItModel {
    let a = &pool[rng.gen_range(0..pool.len())];
    let b = &pool[rng.gen_range(0..pool.len())];
    if a.fitness() >= b.fitness() { a } else { b }
}

/// The highest-scoring individual of a non-empty pool.
pub(crate) fn best_of(pool: &[ItModel]) -> &ItModel {
    pool.iter()
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population is never empty")
}
