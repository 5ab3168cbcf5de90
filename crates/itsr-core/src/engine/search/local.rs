use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use crate::core::transform::Transform;
use rand::Rng;
use tracing::{debug, instrument};

use super::{best_of, initial_population};
use crate::engine::config::{LocalSearchConfig, PRUNE_THRESHOLD};
use crate::engine::fitter::fit;
use crate::engine::operators::{sanitize, simplify};

/// Runs the iterated local search (ITLS).
///
/// Each iteration enumerates the full structural neighborhood of the incumbent
/// (every term, every transform, every variable position, every exponent delta in
/// `{-1, 0, +1}`, excluding perturbations that zero out a term) and scans it in a
/// single fixed pass. A neighbor that beats the incumbent is adopted immediately and
/// the scan continues over the remaining neighbors of the original neighborhood
/// against the updated incumbent. This first-improvement-as-you-go acceptance is
/// intentional; it is not best-of-neighborhood hill climbing.
#[instrument(level = "debug", skip_all, fields(iterations = config.iterations))]
pub fn run(data: &Dataset, config: &LocalSearchConfig, rng: &mut impl Rng) -> ItModel {
    let population = initial_population(
        data,
        config.population_size,
        config.min_size,
        config.max_size,
        config.expo_limit,
        rng,
    );
    let mut best = best_of(&population).clone();

    'search: for iteration in 0..config.iterations {
        if best.fitness() >= config.stop_score {
            debug!(iteration, best_score = best.fitness(), "stop score reached");
            break;
        }

        let origin = best.clone();
        for term in 0..origin.len() {
            for func in Transform::ALL {
                for var in 0..data.nvars() {
                    for delta in [-1i32, 0, 1] {
                        let mut neighbor = origin.clone();
                        neighbor.funcs[term] = func;
                        neighbor.terms[term][var] += delta;
                        if neighbor.terms[term].iter().all(|&e| e == 0) {
                            continue;
                        }
                        neighbor.score = None;

                        let candidate = fit(sanitize(neighbor), data);
                        if candidate.fitness() > best.fitness() {
                            best = candidate;
                        }
                        if best.fitness() >= config.stop_score {
                            break 'search;
                        }
                    }
                }
            }
        }
        debug!(
            iteration,
            best_score = best.fitness(),
            "neighborhood scan finished"
        );
    }

    simplify(best, data, PRUNE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::LocalSearchConfigBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn linear_dataset() -> Dataset {
        // y = 2*x0 + 3*x1, noise-free, positive well-spread samples.
        let mut samples = Vec::new();
        for i in 1..=5 {
            for j in 1..=5 {
                samples.push(vec![i as f64 * 0.5, j as f64 * 0.5]);
            }
        }
        let targets = samples.iter().map(|x| 2.0 * x[0] + 3.0 * x[1]).collect();
        Dataset::new(samples, targets).unwrap()
    }

    #[test]
    fn reaches_stop_score_on_noise_free_linear_data() {
        let data = linear_dataset();
        let config = LocalSearchConfigBuilder::new()
            .population_size(100)
            .size_range(2, 2)
            .expo_limit(1)
            .iterations(50)
            .stop_score(0.99)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(29);
        let model = run(&data, &config, &mut rng);
        assert!(model.fitness() >= 0.99, "score = {}", model.fitness());
    }

    #[test]
    fn best_never_regresses_below_the_initial_population() {
        let data = linear_dataset();
        let mut rng = StdRng::seed_from_u64(41);
        let population = initial_population(&data, 20, 1, 2, 1, &mut rng);
        let initial_best = best_of(&population).fitness();

        let config = LocalSearchConfigBuilder::new()
            .population_size(20)
            .size_range(1, 2)
            .expo_limit(1)
            .iterations(3)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(41);
        let model = run(&data, &config, &mut rng);
        // Same seed rebuilds the same initial population; scanning only ever
        // replaces the incumbent with a strictly better neighbor. The final
        // pruning pass may shave terms with weights below 0.005, so allow a
        // correspondingly small slack.
        assert!(model.fitness() >= initial_best - 0.05);
    }

    #[test]
    fn identical_seeds_produce_identical_models() {
        let data = linear_dataset();
        let config = LocalSearchConfigBuilder::new()
            .population_size(12)
            .size_range(1, 2)
            .expo_limit(1)
            .iterations(4)
            .build()
            .unwrap();
        let first = run(&data, &config, &mut StdRng::seed_from_u64(61));
        let second = run(&data, &config, &mut StdRng::seed_from_u64(61));
        assert_eq!(first, second);
    }

    #[test]
    fn returned_model_is_never_empty() {
        let data = linear_dataset();
        let config = LocalSearchConfigBuilder::new()
            .population_size(6)
            .size_range(1, 3)
            .expo_limit(2)
            .iterations(2)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let model = run(&data, &config, &mut rng);
        assert!(!model.is_empty());
        assert_eq!(model.terms.len(), model.coeffs.len());
    }
}
