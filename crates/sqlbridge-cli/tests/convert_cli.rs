use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

const SQL_WINDOW: &str = "SELECT first_value(price) OVER (PARTITION BY region) FROM sales";
/// Invalid SQL used to verify parse errors fail the run.
const SQL_INVALID: &str = "SELECT (1 FROM t";

fn sqlbridge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sqlbridge"))
}

#[test]
fn test_convert_file_to_sql() {
    let dir = tempdir().expect("temp dir");
    let sql_path = dir.path().join("window.sql");
    std::fs::write(&sql_path, SQL_WINDOW).expect("write sql");

    let output = sqlbridge()
        .arg(sql_path.to_str().expect("sql path"))
        .output()
        .expect("run CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Expected exit 0, got: {stdout}");
    assert_eq!(
        stdout,
        "SELECT FIRST_VALUE(price) OVER (PARTITION BY region) FROM sales\n"
    );
}

#[test]
fn test_convert_from_stdin() {
    let mut child = sqlbridge()
        .args(["--format", "tree"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn CLI");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(SQL_WINDOW.as_bytes())
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait CLI");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Expected exit 0, got: {stdout}");
    assert!(
        stdout.contains("simple-identifier text=FIRST_VALUE value=FIRST_VALUE"),
        "Expected rewritten identifier: {stdout}"
    );
}

#[test]
fn test_disable_converter_flag() {
    let dir = tempdir().expect("temp dir");
    let sql_path = dir.path().join("window.sql");
    std::fs::write(&sql_path, SQL_WINDOW).expect("write sql");

    let output = sqlbridge()
        .args([
            "--disable-converter",
            "aggregate-over-expression",
            sql_path.to_str().expect("sql path"),
        ])
        .output()
        .expect("run CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains("first_value(price)"),
        "Expected untouched spelling: {stdout}"
    );
}

#[test]
fn test_config_file() {
    let dir = tempdir().expect("temp dir");
    let sql_path = dir.path().join("window.sql");
    let config_path = dir.path().join("bridge.json");
    std::fs::write(&sql_path, SQL_WINDOW).expect("write sql");
    std::fs::write(
        &config_path,
        r#"{"disabledConverters":["aggregate-over-expression"],"maxDepth":50}"#,
    )
    .expect("write config");

    let output = sqlbridge()
        .args([
            "--config",
            config_path.to_str().expect("config path"),
            sql_path.to_str().expect("sql path"),
        ])
        .output()
        .expect("run CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("first_value(price)"), "{stdout}");
}

#[test]
fn test_unknown_converter_is_config_error() {
    let output = sqlbridge()
        .args(["--disable-converter", "no-such-converter", "missing.sql"])
        .output()
        .expect("run CLI");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(66), "stderr: {stderr}");
    assert!(stderr.contains("unknown converter 'no-such-converter'"));
}

#[test]
fn test_invalid_sql_fails() {
    let dir = tempdir().expect("temp dir");
    let bad_path = dir.path().join("bad.sql");
    let good_path = dir.path().join("good.sql");
    std::fs::write(&bad_path, SQL_INVALID).expect("write sql");
    std::fs::write(&good_path, SQL_WINDOW).expect("write sql");

    let output = sqlbridge()
        .args([
            bad_path.to_str().expect("bad path"),
            good_path.to_str().expect("good path"),
        ])
        .output()
        .expect("run CLI");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Parse error"), "stderr: {stderr}");
    assert!(stdout.contains("FIRST_VALUE(price)"), "stdout: {stdout}");
}

#[test]
fn test_json_tree_input_and_output() {
    let dir = tempdir().expect("temp dir");
    let tree_path = dir.path().join("tree.json");
    let out_path = dir.path().join("out.json");
    let tree = serde_json::json!({
        "kind": "over-expression",
        "children": [
            {
                "kind": "identifier",
                "children": [
                    { "kind": "name-part", "attributes": { "text": "first_value" } },
                    {
                        "kind": "function-arguments",
                        "children": [{ "kind": "expression-list" }]
                    }
                ]
            },
            {
                "kind": "over-expression-params",
                "children": [{ "kind": "analytic-clause" }]
            }
        ]
    });
    std::fs::write(&tree_path, tree.to_string()).expect("write tree");

    let output = sqlbridge()
        .args([
            "--input",
            "json",
            "--format",
            "json",
            "--compact",
            "-o",
            out_path.to_str().expect("out path"),
            tree_path.to_str().expect("tree path"),
        ])
        .output()
        .expect("run CLI");
    assert!(output.status.success());

    let written = std::fs::read_to_string(&out_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    let function = &value[0]["root"]["children"][0]["children"][0];
    assert_eq!(function["kind"], "simple-identifier");
    assert_eq!(function["attributes"]["value"], "FIRST_VALUE");
}

#[test]
fn test_raw_statement_diagnostic_and_quiet() {
    let dir = tempdir().expect("temp dir");
    let sql_path = dir.path().join("grouped.sql");
    std::fs::write(&sql_path, "SELECT a FROM t GROUP BY a").expect("write sql");

    let output = sqlbridge()
        .arg(sql_path.to_str().expect("sql path"))
        .output()
        .expect("run CLI");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stderr.contains("RAW_STATEMENT"), "stderr: {stderr}");

    let output = sqlbridge()
        .args(["--quiet", sql_path.to_str().expect("sql path")])
        .output()
        .expect("run CLI");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
