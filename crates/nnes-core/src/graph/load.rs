//! Plain-text edge list loading.
//!
//! One edge per line: `source target [weight]`, whitespace separated. A
//! third column is stored under the `weight` attribute. Blank lines and
//! lines starting with `#` are ignored. A line with a single token declares
//! an isolated node.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::instrument;

use crate::error::{Result, SignificanceError};
use crate::graph::{EdgeAttrs, Network, NetworkBuilder};

/// Attribute name used for the optional third edge-list column.
pub const WEIGHT_ATTR: &str = "weight";

impl Network {
    /// Parse an edge list from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Parse`] for malformed lines and
    /// [`SignificanceError::Io`] if reading fails.
    pub fn from_edge_list<R: BufRead>(reader: R, directed: bool) -> Result<Self> {
        let mut builder = NetworkBuilder::new(directed);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            match fields.as_slice() {
                [node] => {
                    builder.add_node(*node);
                }
                [source, target] => {
                    builder.add_edge(source, target);
                }
                [source, target, raw_weight] => {
                    let value: f64 = raw_weight.parse().map_err(|_| SignificanceError::Parse {
                        line: line_no + 1,
                        reason: format!("weight `{raw_weight}` is not a number"),
                    })?;
                    builder.add_edge_with_attrs(
                        source,
                        target,
                        EdgeAttrs::new().with(WEIGHT_ATTR, value),
                    );
                }
                _ => {
                    return Err(SignificanceError::Parse {
                        line: line_no + 1,
                        reason: format!("expected 1 to 3 fields, found {}", fields.len()),
                    });
                }
            }
        }

        Ok(builder.build())
    }

    /// Read an edge list file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::Io`] if the file cannot be opened, or
    /// any error from [`Network::from_edge_list`].
    #[instrument]
    pub fn load_edge_list(path: &Path, directed: bool) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_edge_list(BufReader::new(file), directed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weights_comments_and_isolates() {
        let text = "# karate subset\n1 2\n2 3 0.5\n\n   \n4\n";
        let g = Network::from_edge_list(text.as_bytes(), false).expect("parse");

        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edge_weight("2", "3", Some(WEIGHT_ATTR)), Some(0.5));
        assert_eq!(g.edge_weight("1", "2", Some(WEIGHT_ATTR)), Some(1.0));
        assert!(g.contains_node("4"));
    }

    #[test]
    fn rejects_bad_weight() {
        let err = Network::from_edge_list("a b heavy\n".as_bytes(), false).expect_err("bad");
        assert!(matches!(err, SignificanceError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_too_many_fields() {
        let err = Network::from_edge_list("a b\na b 1 2\n".as_bytes(), false).expect_err("bad");
        assert!(matches!(err, SignificanceError::Parse { line: 2, .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "a b\nb c\n").expect("write");

        let g = Network::load_edge_list(&path, true).expect("load");
        assert!(g.is_directed());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Network::load_edge_list(Path::new("/definitely/not/here.txt"), false)
            .expect_err("missing");
        assert!(matches!(err, SignificanceError::Io(_)));
    }
}
