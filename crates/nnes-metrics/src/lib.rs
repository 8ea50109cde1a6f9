#![forbid(unsafe_code)]
//! nnes-metrics library: node and edge significance algorithms.
//!
//! # Conventions
//!
//! - **Errors**: Return [`nnes_core::Result`]; every entry point can fail.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Graphs**: Entry points borrow a [`nnes_core::Network`] and return a
//!   result that keeps that borrow.

pub mod edge;
pub mod evaluation;
pub mod node;

use nnes_core::Params;
use serde_json::Value;

/// Collect `(name, value)` pairs into recorded parameters.
pub(crate) fn params<const N: usize>(entries: [(&str, Value); N]) -> Params {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Parameter value for an optional weight attribute name.
pub(crate) fn weight_param(weight: Option<&str>) -> Value {
    weight.map_or(Value::Null, Value::from)
}
