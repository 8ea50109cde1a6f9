//! Shared output layer for text/JSON parity across CLI commands.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--json` flag
//! 2. `NNES_FORMAT` env var → `"text"` | `"json"`
//! 3. Default: [`OutputMode::Text`]

use std::fmt::Display;
use std::io::{self, Write};

use nnes_core::{Significance, SignificanceKey};
use serde::Serialize;

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned plain text, one ranked entity per line.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

fn resolve_output_mode_inner(json_flag: bool, format_env: Option<&str>) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }
    match format_env.map(str::to_lowercase).as_deref() {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Text,
    }
}

/// Resolve the output mode from the `--json` flag and the environment.
pub fn resolve_output_mode(json_flag: bool) -> OutputMode {
    let env = std::env::var("NNES_FORMAT").ok();
    resolve_output_mode_inner(json_flag, env.as_deref())
}

/// One ranked row in `--json` listings.
#[derive(Debug, Serialize)]
struct RankedEntry {
    rank: usize,
    key: String,
    score: f64,
}

/// Print a significance result.
///
/// Text mode lists entities ranked by score. JSON mode prints the full
/// snapshot record, or a ranked array when `top` is set; both JSON shapes
/// write keys in their wire encoding (`u|v` for edges).
pub fn render_significance<K>(
    w: &mut dyn Write,
    result: &Significance<'_, K>,
    top: Option<usize>,
    mode: OutputMode,
) -> anyhow::Result<()>
where
    K: SignificanceKey + Display,
{
    let ranked = result.top_n(top.unwrap_or(result.len()));

    if mode.is_json() {
        if top.is_some() {
            let entries: Vec<RankedEntry> = ranked
                .into_iter()
                .enumerate()
                .map(|(i, (key, score))| RankedEntry {
                    rank: i + 1,
                    key: key.encode(),
                    score,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *w, &entries)?;
            writeln!(w)?;
        } else {
            writeln!(w, "{}", result.to_json()?)?;
        }
        return Ok(());
    }

    writeln!(w, "# {} ({} scored)", result.method(), result.len())?;
    let width = ranked
        .iter()
        .map(|(key, _)| key.to_string().len())
        .max()
        .unwrap_or(0);
    for (i, (key, score)) in ranked.into_iter().enumerate() {
        writeln!(w, "{:>4}  {:<width$}  {score:.6}", i + 1, key.to_string())?;
    }
    Ok(())
}

/// Print a named scalar metric.
pub fn render_scalar(
    w: &mut dyn Write,
    name: &str,
    value: f64,
    mode: OutputMode,
) -> io::Result<()> {
    if mode.is_json() {
        writeln!(w, "{}", serde_json::json!({ "metric": name, "value": value }))
    } else {
        writeln!(w, "{name}: {value:.6}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nnes_core::{EdgeKey, EdgeSignificance, Network};

    #[test]
    fn json_flag_wins_over_env() {
        assert_eq!(resolve_output_mode_inner(true, Some("text")), OutputMode::Json);
        assert_eq!(resolve_output_mode_inner(false, Some("JSON")), OutputMode::Json);
        assert_eq!(resolve_output_mode_inner(false, Some("bogus")), OutputMode::Text);
        assert_eq!(resolve_output_mode_inner(false, None), OutputMode::Text);
    }

    #[test]
    fn text_listing_is_ranked() {
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c")]);
        let s = Significance::new(
            &g,
            [("a".to_string(), 0.1), ("b".to_string(), 0.7), ("c".to_string(), 0.2)],
            "test",
            nnes_core::Params::new(),
        )
        .expect("valid keys");

        let mut out = Vec::new();
        render_significance(&mut out, &s, Some(2), OutputMode::Text).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# test (3 scored)");
        assert!(lines[1].contains('b'));
        assert!(lines[2].contains('c'));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn ranked_json_uses_wire_keys() {
        let g = Network::from_edges(false, &[("a", "b"), ("b", "c")]);
        let s = EdgeSignificance::new(
            &g,
            [
                (EdgeKey::undirected("a", "b"), 2.0),
                (EdgeKey::undirected("b", "c"), 1.0),
            ],
            "test",
            nnes_core::Params::new(),
        )
        .expect("valid keys");

        let mut out = Vec::new();
        render_significance(&mut out, &*s, Some(1), OutputMode::Json).expect("render");
        let rows: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(rows[0]["key"], "a|b");
        assert_eq!(rows[0]["rank"], 1);
    }

    #[test]
    fn scalar_json_shape() {
        let mut out = Vec::new();
        render_scalar(&mut out, "h", 0.5, OutputMode::Json).expect("render");
        let v: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(v["metric"], "h");
        assert!((v["value"].as_f64().expect("number") - 0.5).abs() < 1e-12);
    }
}
