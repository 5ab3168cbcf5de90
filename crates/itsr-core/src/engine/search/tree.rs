use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use crate::core::transform::Transform;
use tracing::{debug, instrument};

use crate::engine::config::TreeSearchConfig;
use crate::engine::fitter::fit;
use crate::engine::operators::{build_root, compose, sanitize, simplify};

/// A candidate term proposed for absorption into a leaf.
type Candidate = (Vec<i32>, Transform);

/// Runs the greedy hierarchical tree expansion (SYMTREE).
///
/// The tree is rooted at the fitted plain linear model. Each iteration expands every
/// leaf: candidate terms are generated from pairwise exponent sums (and, once the
/// configured iteration thresholds are reached, pairwise differences and transform
/// swaps), filtered to those whose composition strictly improves the leaf, and then
/// greedily absorbed into a running best, snapshotting one child per acceptance.
/// A leaf nothing improves survives as its own child. The search is fully
/// deterministic; no randomness is involved.
#[instrument(level = "debug", skip_all, fields(iterations = config.iterations))]
pub fn run(data: &Dataset, config: &TreeSearchConfig) -> ItModel {
    let mut leaves = vec![fit(build_root(data.nvars()), data)];
    let mut best = leaves[0].clone();

    for iteration in 0..config.iterations {
        if best.fitness() >= config.stop_score {
            debug!(iteration, best_score = best.fitness(), "stop score reached");
            break;
        }

        let mut next_leaves = Vec::new();
        for leaf in &leaves {
            let candidates = generate_candidates(leaf, iteration, config);
            let improving: Vec<Candidate> = candidates
                .into_iter()
                .filter(|(expos, func)| {
                    let trial = fit(
                        sanitize(compose(leaf.clone(), expos.clone(), *func, 1.0)),
                        data,
                    );
                    trial.fitness() > leaf.fitness()
                })
                .collect();

            let children = absorb(leaf, improving, data);
            if children.is_empty() {
                next_leaves.push(leaf.clone());
            } else {
                for child in children {
                    if child.fitness() > best.fitness() {
                        best = child.clone();
                    }
                    next_leaves.push(child);
                }
            }
        }
        leaves = next_leaves;
        debug!(
            iteration,
            leaves = leaves.len(),
            best_score = best.fitness(),
            "expansion finished"
        );
    }

    simplify(best, data, config.prune_threshold)
}

/// Candidate terms for one leaf at one iteration.
///
/// Always: the elementwise sum of every unordered pair of exponent vectors
/// (including a term with itself) under the identity transform. From
/// `min_interaction_iter` on: the elementwise difference of the same pairs. From
/// `min_transform_iter` on: every existing term under every other transform.
fn generate_candidates(
    leaf: &ItModel,
    iteration: usize,
    config: &TreeSearchConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for j in 0..leaf.len() {
        for k in j..leaf.len() {
            let sum: Vec<i32> = leaf.terms[j]
                .iter()
                .zip(&leaf.terms[k])
                .map(|(a, b)| a + b)
                .collect();
            candidates.push((sum, Transform::Id));
            if iteration >= config.min_interaction_iter {
                let diff: Vec<i32> = leaf.terms[j]
                    .iter()
                    .zip(&leaf.terms[k])
                    .map(|(a, b)| a - b)
                    .collect();
                candidates.push((diff, Transform::Id));
            }
        }
    }
    if iteration >= config.min_transform_iter {
        for (expos, &current) in leaf.terms.iter().zip(&leaf.funcs) {
            for func in Transform::ALL {
                if func != current {
                    candidates.push((expos.clone(), func));
                }
            }
        }
    }
    candidates
}

/// Greedy absorption: repeatedly scans the candidate list and accepts into the
/// running best every composition that improves it, removing accepted candidates
/// from further consideration. Returns one snapshot per acceptance.
fn absorb(leaf: &ItModel, mut remaining: Vec<Candidate>, data: &Dataset) -> Vec<ItModel> {
    let mut running = leaf.clone();
    let mut children = Vec::new();

    loop {
        let mut accepted_any = false;
        let mut index = 0;
        while index < remaining.len() {
            let (expos, func) = remaining[index].clone();
            let trial = fit(sanitize(compose(running.clone(), expos, func, 1.0)), data);
            if trial.fitness() > running.fitness() {
                running = trial;
                children.push(running.clone());
                remaining.remove(index);
                accepted_any = true;
            } else {
                index += 1;
            }
        }
        if !accepted_any || remaining.is_empty() {
            break;
        }
    }
    children
}
