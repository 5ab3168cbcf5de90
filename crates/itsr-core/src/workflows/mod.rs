//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points that run a complete
//! symbolic-regression search from raw tabular data to a final pruned model.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. Each entry point validates the
//! dataset, assembles a search configuration, runs one of the engine's three search
//! strategies to completion, and returns the best model found (already passed through
//! low-weight pruning). All numeric hazards inside a running search are recovered
//! internally; the only errors a workflow can return are dataset or configuration
//! validation failures.
//!
//! ## Architecture
//!
//! - **Search Workflows** ([`search`]) - `evolutionary_search`, `local_search`, and
//!   `tree_expansion_search`, one flat function per strategy.

pub mod search;

pub use search::{evolutionary_search, local_search, tree_expansion_search};
