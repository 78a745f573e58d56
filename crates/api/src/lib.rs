//! Boundary of the planner: HTTP API, one-shot runner wiring, request normalisation.

pub mod app;
pub mod clock;
pub mod config;
