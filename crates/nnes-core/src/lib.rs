#![forbid(unsafe_code)]
//! nnes-core library: the graph snapshot algorithms query, and the
//! significance results they return.
//!
//! # Conventions
//!
//! - **Errors**: Return [`Result`] with [`SignificanceError`]; config loading
//!   uses `anyhow::Result` with context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod cancel;
pub mod config;
pub mod error;
pub mod graph;
pub mod significance;

pub use cancel::CancelToken;
pub use error::{EntityKind, ErrorCode, Result, SignificanceError};
pub use graph::{EdgeAttrs, Network, NetworkBuilder};
pub use significance::{
    EdgeKey, EdgeSignificance, NodeSignificance, Params, Significance, SignificanceKey,
    SignificanceRecord,
};
