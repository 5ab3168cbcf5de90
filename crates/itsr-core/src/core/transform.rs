use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input ceiling for [`Transform::Exp`] to keep evaluation finite.
const EXP_INPUT_CAP: f64 = 300.0;

/// The closed set of unary transforms an IT term may apply to its interaction product.
///
/// The set is fixed and finite; evaluation dispatches exhaustively over it. Transforms
/// whose mathematical domain excludes part of the real line are clamped rather than
/// allowed to raise: `Sqrt` maps negative input to 0, `Log` maps non-positive input
/// to 0, and `Exp` caps its input at 300 to avoid overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    Sin,
    Cos,
    Tan,
    Abs,
    Id,
    Sqrt,
    Exp,
    Log,
}

impl Transform {
    /// Every member of the transform set, in a stable order.
    pub const ALL: [Transform; 8] = [
        Transform::Sin,
        Transform::Cos,
        Transform::Tan,
        Transform::Abs,
        Transform::Id,
        Transform::Sqrt,
        Transform::Exp,
        Transform::Log,
    ];

    /// Applies the transform. Total over all of `f64`; never panics.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Transform::Sin => x.sin(),
            Transform::Cos => x.cos(),
            Transform::Tan => x.tan(),
            Transform::Abs => x.abs(),
            Transform::Id => x,
            Transform::Sqrt => {
                if x < 0.0 {
                    0.0
                } else {
                    x.sqrt()
                }
            }
            Transform::Exp => x.min(EXP_INPUT_CAP).exp(),
            Transform::Log => {
                if x <= 0.0 {
                    0.0
                } else {
                    x.ln()
                }
            }
        }
    }

    /// Draws a transform uniformly from the set.
    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transform::Sin => "sin",
            Transform::Cos => "cos",
            Transform::Tan => "tan",
            Transform::Abs => "abs",
            Transform::Id => "id",
            Transform::Sqrt => "sqrt",
            Transform::Exp => "exp",
            Transform::Log => "log",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_transforms_match_the_math_library() {
        assert_relative_eq!(Transform::Sin.apply(1.2), 1.2_f64.sin());
        assert_relative_eq!(Transform::Cos.apply(-0.4), (-0.4_f64).cos());
        assert_relative_eq!(Transform::Tan.apply(0.7), 0.7_f64.tan());
        assert_relative_eq!(Transform::Abs.apply(-3.5), 3.5);
        assert_relative_eq!(Transform::Id.apply(2.25), 2.25);
        assert_relative_eq!(Transform::Sqrt.apply(9.0), 3.0);
        assert_relative_eq!(Transform::Log.apply(std::f64::consts::E), 1.0);
    }

    #[test]
    fn sqrt_clamps_negative_input_to_zero() {
        assert_eq!(Transform::Sqrt.apply(-4.0), 0.0);
    }

    #[test]
    fn log_clamps_non_positive_input_to_zero() {
        assert_eq!(Transform::Log.apply(0.0), 0.0);
        assert_eq!(Transform::Log.apply(-1.0), 0.0);
    }

    #[test]
    fn exp_caps_input_to_avoid_overflow() {
        let capped = Transform::Exp.apply(1000.0);
        assert!(capped.is_finite());
        assert_relative_eq!(capped, 300.0_f64.exp());
    }

    #[test]
    fn random_only_draws_members_of_the_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let t = Transform::random(&mut rng);
            assert!(Transform::ALL.contains(&t));
        }
    }
}
