//! Deterministic lifestyle questionnaire scoring.
//!
//! The [`assessment`] module turns a validated set of biometrics and categorical answers into
//! physical indicators, a composite health score, risk flags and short advice. Everything else
//! in the crate is the ambient service plumbing around that pipeline.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
