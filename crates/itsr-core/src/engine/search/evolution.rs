use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use rand::Rng;
use tracing::{debug, instrument};

use super::{best_of, initial_population, tournament};
use crate::engine::config::{EvolutionConfig, PRUNE_THRESHOLD};
use crate::engine::fitter::fit;
use crate::engine::operators::{mutate_exponent, mutate_function, sanitize, simplify};

/// Runs the evolutionary search (ITES).
///
/// Each generation selects a parent pool by tournament of 2, mutates every parent
/// once (exponent or transform mutation with equal probability), sanitizes and
/// refits the offspring, and forms the next population by tournament of 2 over the
/// offspring. The best individual ever seen is tracked monotonically and pruned of
/// low-weight terms before being returned.
#[instrument(level = "debug", skip_all, fields(generations = config.generations))]
pub fn run(data: &Dataset, config: &EvolutionConfig, rng: &mut impl Rng) -> ItModel {
    let mut population = initial_population(
        data,
        config.population_size,
        config.min_size,
        config.max_size,
        config.expo_limit,
        rng,
    );
    let mut best = best_of(&population).clone();

    for generation in 0..config.generations {
        if best.fitness() >= config.stop_score {
            debug!(generation, best_score = best.fitness(), "stop score reached");
            break;
        }

        let parents: Vec<ItModel> = (0..config.selection_size)
            .map(|_| {
                let parent = tournament(&population, rng).clone();
                let mutated = if rng.gen_bool(0.5) {
                    mutate_exponent(parent, rng, config.expo_limit)
                } else {
                    mutate_function(parent, rng)
                };
                fit(sanitize(mutated), data)
            })
            .collect();

        // Best is tracked over every individual seen, so a strong offspring
        // that loses its tournament is still remembered.
        let offspring_best = best_of(&parents);
        if offspring_best.fitness() > best.fitness() {
            best = offspring_best.clone();
        }

        population = (0..config.population_size)
            .map(|_| tournament(&parents, rng).clone())
            .collect();
        debug!(
            generation,
            best_score = best.fitness(),
            "generation finished"
        );
    }

    simplify(best, data, PRUNE_THRESHOLD)
}
