//! Result keys: node ids and canonical edge pairs.
//!
//! ## Edge Key Encoding
//!
//! JSON object keys must be strings, so an edge key is written as
//! `source|target`. A literal `|` or `\` inside a node id is escaped with a
//! backslash (`a\|b`, `c\\d`), which keeps the encoding reversible for any
//! id.
//!
//! ## Canonical Orientation
//!
//! Undirected edge keys always store the lexicographically smaller id as
//! `source`, so `(u, v)` and `(v, u)` collapse to a single entry.

use std::fmt;

use crate::error::{Result, SignificanceError};
use crate::graph::Network;

/// A type usable as the key of a significance mapping.
pub trait SignificanceKey: Ord + Clone + fmt::Debug {
    /// Validate the key against `graph` and return its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::EntityNotFound`] if the key does not name
    /// an entity of `graph`.
    fn canonicalize(self, graph: &Network) -> Result<Self>;

    /// Wire-format string for the key.
    fn encode(&self) -> String;

    /// Inverse of [`SignificanceKey::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`SignificanceError::InvalidKey`] for malformed input.
    fn decode(raw: &str) -> Result<Self>;
}

impl SignificanceKey for String {
    fn canonicalize(self, graph: &Network) -> Result<Self> {
        if graph.contains_node(&self) {
            Ok(self)
        } else {
            Err(SignificanceError::node_not_found(self))
        }
    }

    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

/// An edge identified by its endpoint ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    source: String,
    target: String,
}

impl EdgeKey {
    /// An oriented key, stored exactly as given.
    pub fn directed(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// An unoriented key; the smaller id becomes `source`.
    pub fn undirected(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Key oriented according to `graph`'s directedness.
    pub fn for_graph(graph: &Network, source: &str, target: &str) -> Self {
        if graph.is_directed() {
            Self::directed(source, target)
        } else {
            Self::undirected(source, target)
        }
    }

    /// Key for two node indices of `graph`.
    #[must_use]
    pub fn from_indices(graph: &Network, source: usize, target: usize) -> Self {
        Self::for_graph(graph, graph.node_id(source), graph.node_id(target))
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

impl SignificanceKey for EdgeKey {
    fn canonicalize(self, graph: &Network) -> Result<Self> {
        if !graph.has_edge(&self.source, &self.target) {
            return Err(SignificanceError::edge_not_found(&self.source, &self.target));
        }
        Ok(Self::for_graph(graph, &self.source, &self.target))
    }

    fn encode(&self) -> String {
        let mut out = String::with_capacity(self.source.len() + self.target.len() + 1);
        escape_into(&self.source, &mut out);
        out.push('|');
        escape_into(&self.target, &mut out);
        out
    }

    fn decode(raw: &str) -> Result<Self> {
        let mut parts: Vec<String> = vec![String::new()];
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| {
                        SignificanceError::InvalidKey(format!("`{raw}` ends with a bare escape"))
                    })?;
                    if escaped != '\\' && escaped != '|' {
                        return Err(SignificanceError::InvalidKey(format!(
                            "`{raw}` contains unknown escape `\\{escaped}`"
                        )));
                    }
                    if let Some(last) = parts.last_mut() {
                        last.push(escaped);
                    }
                }
                '|' => parts.push(String::new()),
                other => {
                    if let Some(last) = parts.last_mut() {
                        last.push(other);
                    }
                }
            }
        }

        match <[String; 2]>::try_from(parts) {
            Ok([source, target]) => Ok(Self { source, target }),
            Err(parts) => Err(SignificanceError::InvalidKey(format!(
                "`{raw}` has {} separators, expected exactly one",
                parts.len().saturating_sub(1)
            ))),
        }
    }
}

fn escape_into(id: &str, out: &mut String) {
    for c in id.chars() {
        if c == '|' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_keys_are_ordered() {
        assert_eq!(EdgeKey::undirected("b", "a"), EdgeKey::undirected("a", "b"));
        assert_eq!(EdgeKey::undirected("b", "a").source(), "a");
        assert_ne!(EdgeKey::directed("b", "a"), EdgeKey::directed("a", "b"));
    }

    #[test]
    fn encoding_escapes_separator_and_backslash() {
        let key = EdgeKey::directed("a|b", "c\\d");
        let encoded = key.encode();
        assert_eq!(encoded, "a\\|b|c\\\\d");
        assert_eq!(EdgeKey::decode(&encoded).expect("decode"), key);
    }

    #[test]
    fn plain_ids_encode_without_escapes() {
        assert_eq!(EdgeKey::directed("1", "15").encode(), "1|15");
        assert_eq!(
            EdgeKey::decode("1|15").expect("decode"),
            EdgeKey::directed("1", "15")
        );
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(EdgeKey::decode("lonely").is_err());
        assert!(EdgeKey::decode("a|b|c").is_err());
        assert!(EdgeKey::decode("a|b\\").is_err());
        assert!(EdgeKey::decode("a\\x|b").is_err());
    }

    #[test]
    fn canonicalize_checks_edge_existence() {
        let g = Network::from_edges(false, &[("x", "y")]);
        let key = EdgeKey::directed("y", "x")
            .canonicalize(&g)
            .expect("edge exists");
        assert_eq!(key, EdgeKey::undirected("x", "y"));
        assert!(EdgeKey::directed("x", "z").canonicalize(&g).is_err());

        let d = Network::from_edges(true, &[("x", "y")]);
        assert!(EdgeKey::directed("y", "x").canonicalize(&d).is_err());
    }

    #[test]
    fn node_keys_must_exist() {
        let g = Network::from_edges(false, &[("x", "y")]);
        assert!("x".to_string().canonicalize(&g).is_ok());
        assert!("q".to_string().canonicalize(&g).is_err());
    }

    proptest::proptest! {
        #[test]
        fn any_ids_survive_encoding(source in "[a-z|\\\\]{0,8}", target in "[a-z|\\\\]{0,8}") {
            let key = EdgeKey::directed(source, target);
            let decoded = EdgeKey::decode(&key.encode()).expect("decode");
            proptest::prop_assert_eq!(decoded, key);
        }
    }
}
