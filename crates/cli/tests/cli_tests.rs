//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("feedtext")
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

const RULES_JSON: &str = r#"[{"from": " 開放 ", "to": "开放"}]"#;

#[test]
fn test_classify_stdin() {
    cmd()
        .args(["classify", "-"])
        .write_stdin("SELECT id FROM t WHERE id=1;")
        .assert()
        .success()
        .stdout(predicate::str::diff("sql\n"));
}

#[test]
fn test_classify_file_input() {
    let tmp = TempDir::new().unwrap();
    let path = write_fixture(&tmp, "snippet.txt", "export FOO=bar\nexport BAR=baz");

    cmd()
        .args(["classify", &path])
        .assert()
        .success()
        .stdout(predicate::str::diff("bash\n"));
}

#[test]
fn test_classify_json_output() {
    cmd()
        .args(["classify", "--json", "-"])
        .write_stdin(r#"{"a": 1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language":"json""#));
}

#[test]
fn test_classify_format_pretty_prints_json() {
    cmd()
        .args(["classify", "--format", "-"])
        .write_stdin(r#"{"b":2,"a":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("  \"a\": 1"));
}

#[test]
fn test_classify_format_leaves_non_json_unchanged() {
    cmd()
        .args(["classify", "--format", "-"])
        .write_stdin("SELECT 1;")
        .assert()
        .success()
        .stdout(predicate::str::diff("SELECT 1;"));
}

#[test]
fn test_classify_empty_input_is_text() {
    cmd()
        .args(["classify", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::diff("text\n"));
}

#[test]
fn test_convert_html_stdin() {
    cmd()
        .args(["convert", "--mode", "s2t", "-"])
        .write_stdin("<p>汉语测试</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>漢語測試</p>"));
}

#[test]
fn test_convert_text_mode() {
    cmd()
        .args(["convert", "--mode", "s2t", "--text", "-"])
        .write_stdin("汉语测试")
        .assert()
        .success()
        .stdout(predicate::str::diff("漢語測試"));
}

#[test]
fn test_convert_preserves_code_blocks() {
    cmd()
        .args(["convert", "--mode", "s2t", "-"])
        .write_stdin("<p>汉语</p><code>汉语</code>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<code>汉语</code>"));
}

#[test]
fn test_convert_with_rules_file() {
    let tmp = TempDir::new().unwrap();
    let rules = write_fixture(&tmp, "rules.json", RULES_JSON);

    cmd()
        .args(["convert", "--mode", "s2t", "--text", "--rules", &rules, "-"])
        .write_stdin("开放中文")
        .assert()
        .success()
        .stdout(predicate::str::diff("开放中文"));
}

#[test]
fn test_convert_off_is_identity() {
    cmd()
        .args(["convert", "--mode", "off", "-"])
        .write_stdin("<p>汉 <b>语")
        .assert()
        .success()
        .stdout(predicate::str::diff("<p>汉 <b>语"));
}

#[test]
fn test_convert_unknown_mode_fails() {
    cmd()
        .args(["convert", "--mode", "s2x", "-"])
        .write_stdin("汉")
        .assert()
        .failure()
        .stderr(predicate::str::contains("s2x"));
}

#[test]
fn test_convert_output_file() {
    let tmp = TempDir::new().unwrap();
    let input = write_fixture(&tmp, "input.html", "<p>汉语</p>");
    let output = tmp.path().join("out.html");

    cmd()
        .args(["convert", "--mode", "s2t", "-o", output.to_str().unwrap(), &input])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("漢語"));
}

#[test]
fn test_convert_invalid_rules_file_fails() {
    let tmp = TempDir::new().unwrap();
    let rules = write_fixture(&tmp, "rules.json", "{not json");

    cmd()
        .args(["convert", "--mode", "s2t", "--rules", &rules, "-"])
        .write_stdin("汉")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rules"));
}

#[test]
fn test_rules_fingerprint_deterministic() {
    let loose = cmd()
        .args(["rules", "fingerprint", "-"])
        .write_stdin(RULES_JSON)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tight = cmd()
        .args(["rules", "fingerprint", "-"])
        .write_stdin(r#"[{"from": "開放", "to": "开放"}]"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(loose, tight);
    assert_eq!(String::from_utf8(loose).unwrap().trim().len(), 64);
}

#[test]
fn test_missing_input_file_fails() {
    cmd().args(["classify", "nonexistent.txt"]).assert().failure();
}

#[test]
fn test_verbose_banner() {
    cmd()
        .args(["--verbose", "classify", "-"])
        .write_stdin("SELECT 1 FROM t;")
        .assert()
        .success()
        .stderr(predicate::str::contains("Feedtext"));
}
