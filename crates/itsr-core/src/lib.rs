//! # ITSR Core Library
//!
//! A library for symbolic regression based on the Interaction-Transformation (IT)
//! representation: models are weighted sums of terms, each term a unary transform
//! applied to a product of integer powers of the input variables.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Dataset`,
//!   `ItModel`), the closed unary transform set (`Transform`), and pure model
//!   evaluation.
//!
//! - **[`engine`]: The Logic Core.** This layer orchestrates the regression search.
//!   It includes the least-squares fitter, the structural operators that build and
//!   perturb models while preserving representation validity, and the three search
//!   algorithms (evolutionary, local, and tree-expansion search).
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together behind flat entry points
//!   (`evolutionary_search`, `local_search`, `tree_expansion_search`) that run a
//!   complete search and return the best model found.

pub mod core;
pub mod engine;
pub mod workflows;
