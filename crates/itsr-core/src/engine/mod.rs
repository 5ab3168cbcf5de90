//! # Engine Module
//!
//! This module implements the symbolic-regression engine proper: everything that
//! turns the stateless IT representation into a search for a well-fitting model.
//!
//! ## Overview
//!
//! The engine orchestrates candidate construction, structural perturbation,
//! least-squares fitting, and strategy-specific acceptance, repeating until a
//! generation/iteration budget is exhausted or a target score is reached. Every
//! numeric hazard inside a running search (singular normal matrix, degenerate
//! mutation, would-be-empty model) is recovered locally by falling back to the
//! last known-valid state; only API misuse surfaces as an error.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Configuration** ([`config`]) - Search parameters, builders, and validation
//! - **Error Handling** ([`error`]) - Engine-specific error types and propagation
//! - **Fitting** ([`fitter`]) - Ordinary-least-squares coefficient estimation and scoring
//! - **Structural Operators** ([`operators`]) - Validity-preserving builders, mutations,
//!   redundancy elimination, and low-weight pruning
//! - **Search Strategies** ([`search`]) - Evolutionary, local, and tree-expansion search

pub mod config;
pub mod error;
pub mod fitter;
pub mod operators;
pub mod search;
