//! End-to-end tests running the `rf` binary.
//!
//! Every test points `--config` at a temporary directory so the user's own
//! config never leaks in.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const PRESETS_CONFIG: &str = r#"
version = 1

[presets.services]
patterns = ["/-service$/", "/-api$/"]

[presets.billing]
operator = "and"
patterns = ["/^billing-/"]

[presets.broken]
operator = "xor"
patterns = ["/a/", "/b/", "/c/"]
"#;

fn rf_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rf"))
}

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn with_config(content: &str) -> Self {
        let env = Self::new();
        fs::write(env.config_path(), content).unwrap();
        env
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(rf_binary());
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--no-color")
            .args(args)
            .env_remove("RF_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).stdin(Stdio::null()).output().unwrap()
    }

    fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn lines(output: &Output) -> Vec<String> {
    stdout(output).lines().map(str::to_string).collect()
}

// ==================== Filter Tests ====================

#[test]
fn test_filter_and_of_patterns() {
    let env = TestEnv::new();
    let output = env.run(&["filter", "-p", "/^a/", "-p", "/z$/", "az", "ab", "bz"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(lines(&output), vec!["az"]);
}

#[test]
fn test_filter_or_of_patterns() {
    let env = TestEnv::new();
    let output = env.run(&[
        "filter", "-o", "or", "-p", "/^a/", "-p", "/z$/", "az", "ab", "bz", "bb",
    ]);

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["az", "ab", "bz"]);
}

#[test]
fn test_filter_xor_of_patterns() {
    let env = TestEnv::new();
    let output = env.run(&[
        "filter", "-o", "xor", "-p", "/^a/", "-p", "/z$/", "az", "ab", "bz", "bb",
    ]);

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["ab", "bz"]);
}

#[test]
fn test_filter_reads_stdin() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["filter", "-p", "/foo/i"], "FooBar\n\n  food  \nbaz\n");

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["FooBar", "food"]);
}

#[test]
fn test_filter_reads_input_file() {
    let env = TestEnv::new();
    let input = env.dir.path().join("repos.txt");
    fs::write(&input, "billing-api\nweb-frontend\nsearch-service\n").unwrap();

    let output = env.run(&[
        "filter",
        "--input",
        input.to_str().unwrap(),
        "-p",
        "/-(api|service)$/",
    ]);

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["billing-api", "search-service"]);
}

#[test]
fn test_filter_invert_and_count() {
    let env = TestEnv::new();
    let output = env.run(&[
        "filter", "--invert", "-p", "/^web-/", "web-a", "docs", "infra",
    ]);
    assert_eq!(lines(&output), vec!["docs", "infra"]);

    let output = env.run(&[
        "filter", "--count", "-p", "/^web-/", "web-a", "docs", "web-b",
    ]);
    assert_eq!(lines(&output), vec!["2"]);
}

#[test]
fn test_filter_without_filters_passes_everything() {
    let env = TestEnv::new();
    let output = env.run(&["filter", "one", "two"]);
    assert_eq!(lines(&output), vec!["one", "two"]);
}

#[test]
fn test_filter_json_output() {
    let env = TestEnv::new();
    let output = env.run(&[
        "--json", "filter", "-p", "/foo/", "-p", "/bar/", "-o", "or", "foobar", "baz",
    ]);

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["matched"], serde_json::json!(["foobar"]));
    assert_eq!(value["total"], 2);
    assert_eq!(value["matched_count"], 1);
}

// ==================== Preset Tests ====================

#[test]
fn test_filter_with_presets() {
    let env = TestEnv::with_config(PRESETS_CONFIG);
    let output = env.run(&[
        "filter",
        "-P",
        "billing",
        "-P",
        "services",
        "billing-api",
        "billing-docs",
        "search-service",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(lines(&output), vec!["billing-api"]);
}

#[test]
fn test_unknown_preset_suggests_name() {
    let env = TestEnv::with_config(PRESETS_CONFIG);
    let output = env.run(&["filter", "-P", "servics", "x"]);

    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("Did you mean 'services'?"));
}

#[test]
fn test_broken_preset_is_filter_error() {
    let env = TestEnv::with_config(PRESETS_CONFIG);
    let output = env.run(&["filter", "-P", "broken", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("XOR filter set can contain only 2 filters"));
}

#[test]
fn test_presets_listing() {
    let env = TestEnv::with_config(PRESETS_CONFIG);
    let output = env.run(&["--json", "presets"]);

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = value["presets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["billing", "broken", "services"]);
}

// ==================== Check Tests ====================

#[test]
fn test_check_table() {
    let env = TestEnv::new();
    let output = env.run(&["check", "-p", "/^a/", "az", "bz"]);

    assert!(output.status.success());
    assert_eq!(lines(&output), vec!["✓ az", "✗ bz", "1 of 2 passed"]);
}

#[test]
fn test_check_quiet_hides_summary() {
    let env = TestEnv::new();
    let output = env.run(&["-q", "check", "-p", "/^a/", "az"]);
    assert_eq!(lines(&output), vec!["✓ az"]);
}

// ==================== Error Tests ====================

#[test]
fn test_invalid_pattern_exit_code() {
    let env = TestEnv::new();
    let output = env.run(&["filter", "-p", "no-delimiters", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: filter error: invalid pattern"));
}

#[test]
fn test_json_error_output() {
    let env = TestEnv::new();
    let output = env.run(&[
        "--json", "filter", "-o", "xor", "-p", "/a/", "-p", "/b/", "-p", "/c/", "x",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_str(&stderr(&output)).unwrap();
    assert_eq!(value["error"]["code"], "FILTER_ERROR");
}

#[test]
fn test_missing_input_file_exit_code() {
    let env = TestEnv::new();
    let missing = env.dir.path().join("missing.txt");
    let output = env.run(&["filter", "--input", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_invalid_config_exit_code() {
    let env = TestEnv::with_config("presets = [");
    let output = env.run(&["presets"]);
    assert_eq!(output.status.code(), Some(5));
}

// ==================== Config Tests ====================

#[test]
fn test_config_path_and_init() {
    let env = TestEnv::new();

    let output = env.run(&["config", "path"]);
    assert_eq!(Path::new(stdout(&output).trim()), env.config_path());

    let output = env.run(&["config", "init"]);
    assert!(output.status.success());
    assert!(env.config_path().exists());

    let output = env.run(&["config", "init"]);
    assert_eq!(output.status.code(), Some(5));

    let output = env.run(&["config", "init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_config_default_operator_applies() {
    let env = TestEnv::with_config("default_operator = \"or\"\n");
    let output = env.run(&["filter", "-p", "/^a/", "-p", "/z$/", "ab", "bb"]);
    assert_eq!(lines(&output), vec!["ab"]);
}

#[test]
fn test_config_show_json() {
    let env = TestEnv::with_config(PRESETS_CONFIG);
    let output = env.run(&["--json", "config", "show"]);

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["presets"]["billing"]["operator"], "and");
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    let output = env.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("rf"));
}
