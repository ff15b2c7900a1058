//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const SK: &str = "f43a0435f69529f310bbd1d6263d2fbf0977f54bfe2310cc37ae5904b83bb167";
const PK: &str = "cfa87f35acbde29ba1ab3ee42de527b2cad33ac487e80cf2d6405ea0042c8fef";
const ID: &str = "c7a702e6158744ca03508bbb4c90f9dbb0d6e88fefbfaa511d5ab24b4e3c48ad";
const SIG: &str = "83b71e15649c9e9da362c175f988c36404cabf357a976d869102a74451cfb8af486f6088b5631033b4927bd46cad7a0d90d7f624aefc0ac260364aa65c36071a";

fn known_event() -> Value {
    json!({
        "id": ID,
        "pubkey": PK,
        "created_at": 1760740551,
        "kind": 1,
        "tags": [],
        "content": "hello world",
        "sig": SIG
    })
}

fn tagged_event() -> Value {
    json!({
        "id": "c9a0f84fcaa889654da8992105eb122eb210c8cbd58210609a5ef7e170b51400",
        "pubkey": PK,
        "created_at": 1760740551,
        "kind": 1,
        "tags": [["a", "value"], ["b", "value", "optional"]],
        "content": "valid event",
        "sig": "668a715f1eb983172acf230d17bd283daedb2598adf8de4290bcc7eb0b802fdb60669d1e7d1104ac70393f4dbccd07e8abf897152af6ce6c0a75499874e27f14"
    })
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    run_cli_with_stdin(args, None)
}

fn run_cli_with_stdin(args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let binary = Path::new(env!("CARGO_BIN_EXE_roots"));
    let mut child = Command::new(binary)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

#[test]
fn test_canonicalize_command() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "event.json", &known_event());

    let (success, stdout, _) = run_cli(&["canonicalize", &path]);
    assert!(success);
    assert_eq!(
        stdout.trim_end(),
        format!(r#"[0,"{PK}",1760740551,1,[],"hello world"]"#)
    );
}

#[test]
fn test_canonicalize_from_stdin() {
    let input = serde_json::to_string(&tagged_event()).unwrap();
    let (success, stdout, _) = run_cli_with_stdin(&["canonicalize"], Some(&input));
    assert!(success);
    assert_eq!(
        stdout.trim_end(),
        format!(r#"[0,"{PK}",1760740551,1,[["a","value"],["b","value","optional"]],"valid event"]"#)
    );
}

#[test]
fn test_id_command() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "event.json", &known_event());

    let (success, stdout, _) = run_cli(&["id", &path]);
    assert!(success);
    assert_eq!(stdout.trim(), ID);
}

#[test]
fn test_id_of_unsigned_template() {
    let template = json!({
        "pubkey": PK,
        "created_at": 1760740551,
        "kind": 1,
        "tags": [],
        "content": "hello world"
    });
    let input = serde_json::to_string(&template).unwrap();
    let (success, stdout, _) = run_cli_with_stdin(&["id"], Some(&input));
    assert!(success);
    assert_eq!(stdout.trim(), ID);
}

#[test]
fn test_keygen_and_pubkey_commands() {
    let (success, stdout, _) = run_cli(&["keygen"]);
    assert!(success);
    let key = stdout.trim();
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));

    let (success, stdout, _) = run_cli(&["pubkey", key]);
    assert!(success);
    assert_eq!(stdout.trim().len(), 64);
}

#[test]
fn test_keygen_json_pairs_keys() {
    let (success, stdout, _) = run_cli(&["keygen", "--json"]);
    assert!(success);
    let pair: Value = serde_json::from_str(&stdout).unwrap();
    let private_key = pair["private_key"].as_str().unwrap();

    let (_, derived, _) = run_cli(&["pubkey", private_key]);
    assert_eq!(pair["public_key"].as_str().unwrap(), derived.trim());
}

#[test]
fn test_pubkey_known_pair() {
    let (success, stdout, _) = run_cli(&["pubkey", SK]);
    assert!(success);
    assert_eq!(stdout.trim(), PK);
}

#[test]
fn test_pubkey_rejects_malformed_key() {
    let (success, _, stderr) = run_cli(&["pubkey", "not-a-key"]);
    assert!(!success);
    assert!(stderr.contains("Error: private key must be 64 lowercase hex characters"));
}

#[test]
fn test_sign_then_verify() {
    let dir = TempDir::new().unwrap();
    let template = json!({
        "pubkey": "",
        "created_at": 1760740551,
        "kind": 1,
        "tags": [],
        "content": "hello world"
    });
    let path = write_json(&dir, "template.json", &template);

    let (success, stdout, _) = run_cli(&["sign", "--key", SK, &path]);
    assert!(success);
    let signed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(signed["id"], json!(ID));
    assert_eq!(signed["pubkey"], json!(PK));
    assert_eq!(signed["sig"].as_str().unwrap().len(), 128);

    let (success, stdout, _) =
        run_cli_with_stdin(&["verify", "--strict", "--json"], Some(stdout.trim()));
    assert!(success);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report[0]["valid"], json!(true));
}

#[test]
fn test_verify_table_output() {
    let dir = TempDir::new().unwrap();
    let path = write_json(&dir, "events.json", &json!([known_event(), tagged_event()]));

    let (success, stdout, _) = run_cli(&["verify", &path]);
    assert!(success);
    assert!(stdout.contains("EVENT_ID"));
    assert!(stdout.contains(ID));
    assert_eq!(stdout.lines().filter(|l| l.ends_with(" ok")).count(), 2);
}

#[test]
fn test_verify_reports_failures() {
    let dir = TempDir::new().unwrap();
    let mut tampered = known_event();
    tampered["content"] = json!("hello world!");
    let mut unsigned = known_event();
    unsigned["sig"] = json!("");
    let path = write_json(
        &dir,
        "events.json",
        &json!([known_event(), tampered, unsigned]),
    );

    let (success, stdout, _) = run_cli(&["verify", "--json", &path]);
    assert!(success, "non-strict verify always succeeds");
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 3);
    assert_eq!(report[0]["valid"], json!(true));
    assert_eq!(report[0]["error"], Value::Null);
    assert_eq!(report[1]["valid"], json!(false));
    assert!(report[1]["error"]
        .as_str()
        .unwrap()
        .contains("does not match computed id"));
    assert_eq!(
        report[2]["error"],
        json!("event signature must be 128 hex characters")
    );
}

#[test]
fn test_verify_strict_mode() {
    let dir = TempDir::new().unwrap();
    let mut bad = known_event();
    bad["sig"] = json!("9e43cbcf7e828a21c53fa35371ee79bffbfd7a3063ae46fc05ec623dd3186667c57e3d006488015e19247df35eb41c61013e051aa87860e23fa5ffbd44120482");
    let path = write_json(&dir, "event.json", &bad);

    let (success, stdout, _) = run_cli(&["verify", "--strict", &path]);
    assert!(!success);
    assert!(stdout.contains("event signature is invalid"));

    let good = write_json(&dir, "good.json", &known_event());
    let (success, _, _) = run_cli(&["verify", "--strict", &good]);
    assert!(success);
}

#[test]
fn test_verify_rejects_invalid_json() {
    let (success, _, stderr) = run_cli_with_stdin(&["verify"], Some("{not json"));
    assert!(!success);
    assert!(stderr.contains("Error: Invalid event"));
}

#[test]
fn test_match_command() {
    let dir = TempDir::new().unwrap();
    let events = write_json(&dir, "events.json", &json!([known_event(), tagged_event()]));
    let filter = write_json(&dir, "filter.json", &json!({"#a": ["value"], "kinds": [1]}));

    let (success, stdout, _) = run_cli(&["match", "--filter", &filter, &events]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let matched: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(matched, tagged_event());
}

#[test]
fn test_match_with_filter_set_and_stdin() {
    let dir = TempDir::new().unwrap();
    let filter = write_json(
        &dir,
        "filters.json",
        &json!([{"ids": ["c7a702e6"]}, {"#b": ["value"], "search": "ignored"}]),
    );
    let input = serde_json::to_string(&json!([known_event(), tagged_event()])).unwrap();

    let (success, stdout, _) = run_cli_with_stdin(&["match", "--filter", &filter], Some(&input));
    assert!(success);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_match_time_bounds_are_inclusive() {
    let dir = TempDir::new().unwrap();
    let events = write_json(&dir, "events.json", &json!([known_event()]));
    let filter = write_json(
        &dir,
        "filter.json",
        &json!({"since": 1760740551, "until": 1760740551}),
    );
    let (_, stdout, _) = run_cli(&["match", "--filter", &filter, &events]);
    assert_eq!(stdout.lines().count(), 1);

    let filter = write_json(&dir, "late.json", &json!({"since": 1760740552}));
    let (success, stdout, _) = run_cli(&["match", "--filter", &filter, &events]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_match_rejects_bad_filter() {
    let dir = TempDir::new().unwrap();
    let events = write_json(&dir, "events.json", &json!([known_event()]));
    let filter = write_json(&dir, "filter.json", &json!({"kinds": "one"}));

    let (success, _, stderr) = run_cli(&["match", "--filter", &filter, &events]);
    assert!(!success);
    assert!(stderr.contains("Error: Invalid filter"));
}

#[test]
fn test_missing_file_reports_path() {
    let (success, _, stderr) = run_cli(&["id", "/nonexistent/event.json"]);
    assert!(!success);
    assert!(stderr.contains("/nonexistent/event.json"));
}
