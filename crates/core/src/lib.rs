//! `bakeryplan-core`: shared building blocks for the planning crates.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no clocks).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::PlanRunId;
