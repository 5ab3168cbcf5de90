use crate::core::dataset::Dataset;
use crate::core::model::ItModel;
use nalgebra::{DMatrix, DVector};
use tracing::trace;

/// Estimates coefficients by ordinary least squares and scores the model.
///
/// The design matrix holds, per term, the transformed interaction value of every
/// sample (coefficient excluded); coefficients solve the normal equations
/// `(AᵀA)⁻¹ Aᵀ y`. A singular or non-finite normal matrix is a recoverable
/// condition: the prior coefficients are retained unchanged. The score is
/// `1 / (1 + MAE)`, or `0` when the MAE is non-finite.
pub fn fit(mut model: ItModel, data: &Dataset) -> ItModel {
    debug_assert!(!model.is_empty(), "fit requires at least one term");

    let design = DMatrix::from_fn(data.len(), model.len(), |row, col| {
        model.funcs[col].apply(ItModel::interaction(
            &model.terms[col],
            &data.samples()[row],
        ))
    });

    let normal = design.transpose() * &design;
    if normal.iter().all(|v| v.is_finite()) {
        match normal.try_inverse() {
            Some(inverse) => {
                let targets = DVector::from_column_slice(data.targets());
                let solved = inverse * design.transpose() * targets;
                model.coeffs = solved.iter().copied().collect();
            }
            None => trace!("normal matrix is singular, keeping prior coefficients"),
        }
    } else {
        trace!("normal matrix has non-finite entries, keeping prior coefficients");
    }

    let mae = data
        .samples()
        .iter()
        .zip(data.targets())
        .map(|(x, &y)| (model.evaluate(x) - y).abs())
        .sum::<f64>()
        / data.len() as f64;

    model.score = Some(if mae.is_finite() { 1.0 / (1.0 + mae) } else { 0.0 });
    model
}
