use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DatasetError {
    #[error("Dataset contains no samples")]
    Empty,
    #[error("Sample count ({samples}) does not match target count ({targets})")]
    TargetMismatch { samples: usize, targets: usize },
    #[error("Sample {index} has {found} variables, expected {expected}")]
    RaggedSample {
        index: usize,
        found: usize,
        expected: usize,
    },
    #[error("Samples must have at least one variable")]
    NoVariables,
}

/// An immutable collection of `(X, y)` pairs used to fit and score IT models.
///
/// Each sample is a fixed-length row of real-valued variables paired with a scalar
/// target. The dataset is validated on construction and shared read-only across
/// every component of the engine; no operation ever mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Vec<f64>>,
    targets: Vec<f64>,
    nvars: usize,
}

impl Dataset {
    pub fn new(samples: Vec<Vec<f64>>, targets: Vec<f64>) -> Result<Self, DatasetError> {
        if samples.is_empty() {
            return Err(DatasetError::Empty);
        }
        if samples.len() != targets.len() {
            return Err(DatasetError::TargetMismatch {
                samples: samples.len(),
                targets: targets.len(),
            });
        }
        let nvars = samples[0].len();
        if nvars == 0 {
            return Err(DatasetError::NoVariables);
        }
        for (index, row) in samples.iter().enumerate() {
            if row.len() != nvars {
                return Err(DatasetError::RaggedSample {
                    index,
                    found: row.len(),
                    expected: nvars,
                });
            }
        }
        Ok(Self {
            samples,
            targets,
            nvars,
        })
    }

    /// The number of input variables in every sample.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.nvars
    }

    /// The number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    #[inline]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}
