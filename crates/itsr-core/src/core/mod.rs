//! # Core Module
//!
//! This module provides the fundamental building blocks of the Interaction-Transformation
//! representation, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the essential value types required for IT symbolic
//! regression: the read-only dataset view shared by every component, the closed set
//! of unary transforms with their numeric clamping policies, and the IT model itself
//! together with its pure evaluation function.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Dataset View** ([`dataset`]) - Immutable `(X, y)` tables with shape validation
//! - **Transform Set** ([`transform`]) - The fixed unary function library and its numeric policies
//! - **Model Representation** ([`model`]) - The IT model value type and its evaluation
//!
//! ## Key Capabilities
//!
//! - **Validated tabular input** with a fixed variable count across all samples
//! - **Total, panic-free transforms** clamping domain violations instead of raising
//! - **Pure, deterministic model evaluation** over integer-exponent interaction terms
//! - **Deep-copy model semantics** so search lineages never alias mutable state

pub mod dataset;
pub mod model;
pub mod transform;
