//! E2E CLI tests for `nnes edge`, `nnes node`, `nnes index`,
//! `nnes topology`, `nnes cut` and `nnes compare`.
//!
//! Each test runs the `nnes` binary as a subprocess in an isolated temp
//! directory holding a small edge-list file.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the `nnes` binary, rooted in `dir`.
fn nnes_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("nnes").expect("nnes binary must exist");
    cmd.current_dir(dir);
    cmd.env("NNES_LOG", "error");
    cmd.env_remove("NNES_FORMAT");
    // Keep the user's own config file out of the way.
    cmd.env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

/// Two triangles joined by the bridge c-d.
const BARBELL: &str = "\
# barbell
a b
b c
c a
c d
d e
e f
f d
";

fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write graph");
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), "barbell.txt", BARBELL);
    (dir, graph)
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("nnes should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// Edge scoring
// ---------------------------------------------------------------------------

#[test]
fn edge_diffusion_prints_snapshot_json() {
    let (dir, graph) = setup();
    let json = json_stdout(nnes_cmd(dir.path()).arg("edge").arg("diffusion").arg(&graph).arg("--json"));

    assert_eq!(json["algorithm"], "diffusion_importance");
    assert!(json["params"].is_null());
    let scores = json["significance"].as_object().expect("mapping");
    assert_eq!(scores.len(), 7);
    assert!((scores["a|b"].as_f64().expect("score") - 1.0).abs() < 1e-12);
    assert!(scores["c|d"].as_f64().expect("score").abs() < 1e-12);
}

#[test]
fn edge_text_output_ranks_bridge_first() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .args(["edge", "betweenness"])
        .arg(&graph)
        .args(["--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# betweenness_centrality (7 scored)"))
        .stdout(predicate::str::contains("(c, d)"));
}

#[test]
fn edge_snapshot_written_to_file() {
    let (dir, graph) = setup();
    let out = dir.path().join("erw.json");
    nnes_cmd(dir.path())
        .args(["edge", "erw-kpath"])
        .arg(&graph)
        .args(["--seed", "11", "--walk-length", "3", "--walks", "10"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let saved: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("snapshot")).expect("json");
    assert_eq!(saved["algorithm"], "erw_kpath");
    assert_eq!(saved["params"]["k"], 3);
    assert_eq!(saved["params"]["ruo"], 10);
    assert_eq!(saved["params"]["seed"], 11);
}

#[test]
fn seeded_erw_runs_match() {
    let (dir, graph) = setup();
    let run = || {
        json_stdout(
            nnes_cmd(dir.path())
                .args(["edge", "erw-kpath", "--json", "--seed", "5"])
                .arg(&graph),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn edge_top_json_uses_wire_keys() {
    let (dir, graph) = setup();
    let json = json_stdout(
        nnes_cmd(dir.path())
            .args(["edge", "diffusion", "--top", "1", "--json"])
            .arg(&graph),
    );
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    // Ties on score 1 keep key order, so a|b ranks first.
    assert_eq!(rows[0]["key"], "a|b");
    assert!((rows[0]["score"].as_f64().expect("score") - 1.0).abs() < 1e-12);
}

#[test]
fn weighted_betweenness_avoids_heavy_edge() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), "square.txt", "a d 10\na b 1\nb c 1\nc d 1\n");
    let json = json_stdout(
        nnes_cmd(dir.path())
            .args(["edge", "betweenness", "--json", "--raw", "--weight", "weight"])
            .arg(&graph),
    );
    assert_eq!(json["params"]["weight"], "weight");
    assert!(json["significance"]["a|d"].as_f64().expect("score").abs() < 1e-12);
    assert!((json["significance"]["b|c"].as_f64().expect("score") - 4.0).abs() < 1e-12);
}

#[test]
fn degree_product_reads_weights_from_third_column() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), "w.txt", "a b 2\nb c 3\n");
    let json = json_stdout(
        nnes_cmd(dir.path())
            .args(["edge", "degree-product", "--json", "--weight", "weight"])
            .arg(&graph),
    );
    // deg(a) = 2, deg(b) = 5, deg(c) = 3.
    assert!((json["significance"]["a|b"].as_f64().expect("score") - 10.0).abs() < 1e-12);
    assert!((json["significance"]["b|c"].as_f64().expect("score") - 15.0).abs() < 1e-12);
    assert_eq!(json["params"]["weight"], "weight");
}

// ---------------------------------------------------------------------------
// Node scoring
// ---------------------------------------------------------------------------

#[test]
fn node_efficiency_top_json_is_ranked() {
    let (dir, graph) = setup();
    let json = json_stdout(
        nnes_cmd(dir.path())
            .args(["node", "efficiency", "--top", "2", "--json"])
            .arg(&graph),
    );
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    let top: Vec<&str> = rows.iter().map(|r| r["key"].as_str().expect("key")).collect();
    let mut sorted = top.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, ["c", "d"], "bridge endpoints are most critical");
    assert_eq!(rows[0]["rank"], 1);
}

#[test]
fn node_spectrum_uses_config_file() {
    let (dir, graph) = setup();
    std::fs::create_dir_all(dir.path().join(".nnes")).expect("mkdir");
    std::fs::write(
        dir.path().join(".nnes/config.toml"),
        "[spectral]\ncommunities_number = 3\n",
    )
    .expect("write config");

    let json = json_stdout(nnes_cmd(dir.path()).args(["node", "spectrum", "--json"]).arg(&graph));
    assert_eq!(json["params"]["communities_number"], 3);

    let total: f64 = json["significance"]
        .as_object()
        .expect("mapping")
        .values()
        .map(|v| v.as_f64().expect("score"))
        .sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn invalid_communities_reports_error_code() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .args(["node", "spectrum", "-c", "0"])
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001"));
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

#[test]
fn index_reports_removal_deltas() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .args(["index", "-c", "2", "--remove", "c"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("significance_index: "))
        .stdout(predicate::str::contains("delta[c]: "));
}

#[test]
fn topology_after_removing_bridge_node() {
    let (dir, graph) = setup();
    let output = nnes_cmd(dir.path())
        .args(["topology", "--json", "--remove", "c"])
        .arg(&graph)
        .output()
        .expect("run");
    assert!(output.status.success());

    let lines: Vec<Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(lines[0]["metric"], "giant_component_fraction");
    assert!((lines[0]["value"].as_f64().expect("gcf") - 0.6).abs() < 1e-12);
    // Remaining components: {d, e, f} and {a, b}; susceptibility = 4 / 5.
    assert!((lines[1]["value"].as_f64().expect("chi") - 0.8).abs() < 1e-12);
}

#[test]
fn cut_natural_split() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .arg("cut")
        .arg(&graph)
        .args(["--group", "a,b,c", "--group", "d,e,f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ratio_cut: 0.666667"));
}

#[test]
fn cut_unknown_node_fails() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .arg("cut")
        .arg(&graph)
        .args(["--group", "a,zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn compare_snapshots_by_top_nodes() {
    let (dir, graph) = setup();
    let left = dir.path().join("eff.json");
    let right = dir.path().join("eff2.json");
    for path in [&left, &right] {
        nnes_cmd(dir.path())
            .args(["node", "efficiency"])
            .arg(&graph)
            .arg("-o")
            .arg(path)
            .assert()
            .success();
    }

    nnes_cmd(dir.path())
        .arg("compare")
        .arg(&graph)
        .arg(&left)
        .arg(&right)
        .args(["--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "jaccard[efficiency_centrality vs efficiency_centrality]: 1.000000",
        ));
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[test]
fn malformed_edge_list_names_the_line() {
    let dir = TempDir::new().expect("tempdir");
    let graph = write_graph(dir.path(), "bad.txt", "a b\na b c d\n");
    nnes_cmd(dir.path())
        .args(["edge", "diffusion"])
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("E1003"));
}

#[test]
fn missing_graph_file_fails() {
    let dir = TempDir::new().expect("tempdir");
    nnes_cmd(dir.path())
        .args(["node", "efficiency", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_flag_enables_debug_logs() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .env_remove("NNES_LOG")
        .env_remove("DEBUG")
        .args(["-v", "node", "efficiency"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved configuration"));
}

#[test]
fn default_logging_hides_debug_events() {
    let (dir, graph) = setup();
    nnes_cmd(dir.path())
        .env_remove("NNES_LOG")
        .env_remove("DEBUG")
        .args(["node", "efficiency"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved configuration").not());
}
