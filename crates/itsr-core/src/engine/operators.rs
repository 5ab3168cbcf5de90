use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use crate::core::transform::Transform;
use rand::Rng;
use std::collections::HashSet;

use super::fitter::fit;

#[inline]
fn draw_exponent(rng: &mut impl Rng, expo_limit: i32) -> i32 {
    rng.gen_range(-expo_limit - 1..=expo_limit)
}

#[inline]
fn is_constant(expos: &[i32]) -> bool {
    expos.iter().all(|&e| e == 0)
}

/// Builds a model of `n_terms` random terms over `nvars` variables.
///
/// Exponents are drawn uniformly from `[-expo_limit - 1, expo_limit]`, redrawing any
/// vector that comes out all-zero; transforms are drawn uniformly from the fixed set
/// and every coefficient starts at 1.0.
pub fn build_random(rng: &mut impl Rng, n_terms: usize, nvars: usize, expo_limit: i32) -> ItModel {
    let mut terms = Vec::with_capacity(n_terms);
    let mut funcs = Vec::with_capacity(n_terms);
    for _ in 0..n_terms {
        let mut expos: Vec<i32>;
        loop {
            expos = (0..nvars).map(|_| draw_exponent(rng, expo_limit)).collect();
            if !is_constant(&expos) {
                break;
            }
        }
        terms.push(expos);
        funcs.push(Transform::random(rng));
    }
    ItModel::new(terms, funcs, vec![1.0; n_terms])
}

/// Builds the plain linear model in the raw variables: one identity term per variable.
pub fn build_root(nvars: usize) -> ItModel {
    let terms = (0..nvars)
        .map(|v| {
            let mut expos = vec![0; nvars];
            expos[v] = 1;
            expos
        })
        .collect();
    ItModel::new(terms, vec![Transform::Id; nvars], vec![1.0; nvars])
}

/// Removes constant (all-zero exponent) terms and later duplicates of an
/// `(exponents, transform)` pair, keeping first occurrences.
///
/// If removal would leave the model empty, the input is returned unchanged.
pub fn sanitize(model: ItModel) -> ItModel {
    let mut seen: HashSet<(Vec<i32>, Transform)> = HashSet::new();
    let mut terms = Vec::with_capacity(model.len());
    let mut funcs = Vec::with_capacity(model.len());
    let mut coeffs = Vec::with_capacity(model.len());

    for ((expos, &func), &coeff) in model.terms.iter().zip(&model.funcs).zip(&model.coeffs) {
        if is_constant(expos) {
            continue;
        }
        if !seen.insert((expos.clone(), func)) {
            continue;
        }
        terms.push(expos.clone());
        funcs.push(func);
        coeffs.push(coeff);
    }

    if terms.is_empty() || terms.len() == model.len() {
        return model;
    }
    ItModel::new(terms, funcs, coeffs)
}

/// Replaces the transform of one uniformly-chosen term with a fresh uniform draw.
/// Redrawing the same transform is an allowed no-op.
pub fn mutate_function(mut model: ItModel, rng: &mut impl Rng) -> ItModel {
    let term = rng.gen_range(0..model.len());
    model.funcs[term] = Transform::random(rng);
    model.score = None;
    model
}

/// Replaces one uniformly-chosen exponent with a fresh draw.
///
/// A model is never left holding a constant term: if the perturbation produces an
/// all-zero exponent vector anywhere, the whole model is discarded and rebuilt
/// randomly with the same term count.
pub fn mutate_exponent(mut model: ItModel, rng: &mut impl Rng, expo_limit: i32) -> ItModel {
    let term = rng.gen_range(0..model.len());
    let var = rng.gen_range(0..model.terms[term].len());
    model.terms[term][var] = draw_exponent(rng, expo_limit);

    if model.terms.iter().any(|expos| is_constant(expos)) {
        let nvars = model.terms[0].len();
        return build_random(rng, model.len(), nvars, expo_limit);
    }
    model.score = None;
    model
}

/// Appends one `(exponents, transform, coefficient)` term to the model.
pub fn compose(mut model: ItModel, expos: Vec<i32>, func: Transform, coeff: f64) -> ItModel {
    model.terms.push(expos);
    model.funcs.push(func);
    model.coeffs.push(coeff);
    model.score = None;
    model
}

/// Iteratively prunes terms whose fitted coefficient magnitude is at most
/// `threshold`, refitting after each pass, until a pass removes nothing.
///
/// A pass that would remove every term is skipped; the model returned always has at
/// least one term.
pub fn simplify(model: ItModel, data: &Dataset, threshold: f64) -> ItModel {
    let mut current = fit(model, data);
    loop {
        let keep: Vec<usize> = current
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, coeff)| coeff.abs() > threshold)
            .map(|(i, _)| i)
            .collect();
        if keep.is_empty() || keep.len() == current.len() {
            return current;
        }
        current = fit(retain_terms(&current, &keep), data);
    }
}

fn retain_terms(model: &ItModel, keep: &[usize]) -> ItModel {
    ItModel::new(
        keep.iter().map(|&i| model.terms[i].clone()).collect(),
        keep.iter().map(|&i| model.funcs[i]).collect(),
        keep.iter().map(|&i| model.coeffs[i]).collect(),
    )
}
