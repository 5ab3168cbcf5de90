use super::transform::Transform;
use serde::{Deserialize, Serialize};

/// An Interaction-Transformation model: a weighted sum of transformed interaction terms.
///
/// Term `i` evaluates to `coeffs[i] * funcs[i](Π_v x[v] ^ terms[i][v])`. The three
/// parallel sequences stay index-aligned and equal in length through every operation,
/// and every exponent vector has one entry per input variable.
///
/// `Clone` performs a deep copy of all owned sequences; search strategies rely on this
/// whenever two lineages diverge from a shared ancestor, so mutations never alias
/// across individuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItModel {
    /// One integer exponent vector per term, each `nvars` long.
    pub terms: Vec<Vec<i32>>,
    /// The unary transform applied to each term's interaction product.
    pub funcs: Vec<Transform>,
    /// The fitted weight of each term; `1.0` for terms that have never been fitted.
    pub coeffs: Vec<f64>,
    /// Fitness in `[0, 1]` from the most recent fit; `None` before the first fit.
    pub score: Option<f64>,
}

impl ItModel {
    pub fn new(terms: Vec<Vec<i32>>, funcs: Vec<Transform>, coeffs: Vec<f64>) -> Self {
        debug_assert_eq!(terms.len(), funcs.len());
        debug_assert_eq!(terms.len(), coeffs.len());
        Self {
            terms,
            funcs,
            coeffs,
            score: None,
        }
    }

    /// The number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The last fitted score, or `0.0` for a model that has never been fitted.
    #[inline]
    pub fn fitness(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// The interaction product `Π_v x[v] ^ expos[v]`.
    ///
    /// A negative exponent on a zero base yields a non-finite value rather than an
    /// error; the fitter scores such models as 0.
    #[inline]
    pub fn interaction(expos: &[i32], x: &[f64]) -> f64 {
        expos
            .iter()
            .zip(x)
            .map(|(&e, &xv)| xv.powi(e))
            .product()
    }

    /// Evaluates the model at one sample. Pure and deterministic.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        self.terms
            .iter()
            .zip(&self.funcs)
            .zip(&self.coeffs)
            .map(|((expos, func), coeff)| coeff * func.apply(Self::interaction(expos, x)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear_two_var_model() -> ItModel {
        ItModel::new(
            vec![vec![1, 0], vec![0, 1]],
            vec![Transform::Id, Transform::Id],
            vec![1.0, 1.0],
        )
    }

    #[test]
    fn parallel_sequences_share_one_length() {
        let model = linear_two_var_model();
        assert_eq!(model.len(), 2);
        assert_eq!(model.funcs.len(), model.len());
        assert_eq!(model.coeffs.len(), model.len());
        assert_eq!(model.score, None);
    }

    #[test]
    fn root_model_sums_raw_variables() {
        let model = linear_two_var_model();
        assert_relative_eq!(model.evaluate(&[2.0, 3.0]), 5.0);
    }

    #[test]
    fn evaluate_is_pure() {
        let model = ItModel::new(
            vec![vec![2, -1], vec![1, 1]],
            vec![Transform::Cos, Transform::Log],
            vec![0.5, -1.5],
        );
        let x = [1.3, 0.8];
        assert_eq!(model.evaluate(&x), model.evaluate(&x));
    }

    #[test]
    fn negative_exponent_on_zero_base_is_non_finite() {
        let model = ItModel::new(vec![vec![-1]], vec![Transform::Id], vec![1.0]);
        assert!(!model.evaluate(&[0.0]).is_finite());
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = linear_two_var_model();
        let mut copy = original.clone();
        copy.terms[0][0] = 9;
        copy.coeffs[1] = 7.0;
        assert_eq!(original.terms[0][0], 1);
        assert_eq!(original.coeffs[1], 1.0);
    }
}
