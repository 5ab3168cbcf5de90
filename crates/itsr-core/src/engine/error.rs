use thiserror::Error;

use super::config::ConfigError;
use crate::core::dataset::DatasetError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid dataset: {source}")]
    Dataset {
        #[from]
        source: DatasetError,
    },

    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
