//! Error types shared by the graph collaborator, the significance model and
//! every algorithm in `nnes-metrics`.

use std::fmt;
use std::io;

/// Which kind of graph entity a lookup referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Node,
    Edge,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Edge => f.write_str("edge"),
        }
    }
}

/// Errors raised while building graphs, computing significance scores, or
/// reading and writing significance snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SignificanceError {
    /// A node or edge lookup referenced something absent from the graph or
    /// from the result mapping.
    #[error("{kind} {id} is not in the graph")]
    EntityNotFound { kind: EntityKind, id: String },

    /// A mathematically undefined operation (zero baseline efficiency, an
    /// edge with no enclosing clique, a degenerate spectrum).
    #[error("computation error: {0}")]
    Computation(String),

    /// An algorithm parameter is outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A serialized significance key could not be decoded.
    #[error("invalid significance key: {0}")]
    InvalidKey(String),

    /// The caller cancelled a long-running computation.
    #[error("computation cancelled")]
    Cancelled,

    /// An edge-list line could not be parsed.
    #[error("edge list line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SignificanceError {
    /// Lookup failure for a node id.
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound {
            kind: EntityKind::Node,
            id: id.into(),
        }
    }

    /// Lookup failure for an edge given by its endpoints.
    pub fn edge_not_found(source: &str, target: &str) -> Self {
        Self::EntityNotFound {
            kind: EntityKind::Edge,
            id: format!("({source}, {target})"),
        }
    }

    pub fn computation(reason: impl Into<String>) -> Self {
        Self::Computation(reason.into())
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EntityNotFound { .. } => ErrorCode::EntityNotFound,
            Self::Computation(_) => ErrorCode::ComputationError,
            Self::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            Self::InvalidKey(_) => ErrorCode::InvalidKey,
            Self::Cancelled => ErrorCode::Cancelled,
            Self::Parse { .. } => ErrorCode::EdgeListParseError,
            Self::Io(_) => ErrorCode::IoFailure,
            Self::Json(_) => ErrorCode::SnapshotFormatError,
        }
    }
}

/// Convenience alias used across the workspace.
pub type Result<T, E = SignificanceError> = std::result::Result<T, E>;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidParameter,
    InvalidKey,
    EdgeListParseError,
    EntityNotFound,
    ComputationError,
    Cancelled,
    IoFailure,
    SnapshotFormatError,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidParameter => "E1001",
            Self::InvalidKey => "E1002",
            Self::EdgeListParseError => "E1003",
            Self::EntityNotFound => "E2001",
            Self::ComputationError => "E3001",
            Self::Cancelled => "E4001",
            Self::IoFailure => "E5001",
            Self::SnapshotFormatError => "E5002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidParameter => "Invalid algorithm parameter",
            Self::InvalidKey => "Invalid significance key",
            Self::EdgeListParseError => "Edge list parse error",
            Self::EntityNotFound => "Node or edge not found",
            Self::ComputationError => "Undefined computation",
            Self::Cancelled => "Computation cancelled",
            Self::IoFailure => "I/O failure",
            Self::SnapshotFormatError => "Malformed significance snapshot",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter => Some("Check the algorithm's documented parameter ranges."),
            Self::InvalidKey => Some("Edge keys are `source|target`; escape `|` and `\\` with `\\`."),
            Self::EdgeListParseError => Some("Use one `source target [weight]` pair per line."),
            Self::EntityNotFound => None,
            Self::ComputationError => {
                Some("The graph is degenerate for this algorithm (disconnected, empty, or edgeless).")
            }
            Self::Cancelled => None,
            Self::IoFailure => Some("Check that the path exists and is writable."),
            Self::SnapshotFormatError => {
                Some("Snapshots must be `{significance, algorithm, params}` objects.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
