mod common;

use common::{FolioProcess, count};

#[test]
fn validate_builtin_catalog() {
    let output = FolioProcess::spawn_command(&["validate"]);
    assert!(
        output.status.success(),
        "built-in catalog should validate: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<built-in>: valid"), "{stdout}");
}

#[test]
fn validate_invalid_link_exits_with_config_error() {
    let catalog = FolioProcess::fixture("invalid_link.yaml");
    let output = FolioProcess::spawn_command(&["validate", "--catalog", &catalog]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("categories[0].projects[0].link"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"), "{stderr}");
}

#[test]
fn validate_reports_each_issue_once() {
    let catalog = FolioProcess::fixture("invalid_link.yaml");
    let output = FolioProcess::spawn_command(&["validate", "--catalog", &catalog]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let field = "categories[0].projects[0].link";
    assert_eq!(count(&stdout, field) + count(&stderr, field), 1, "{stdout}\n{stderr}");
}

#[test]
fn validate_warnings_pass_unless_strict() {
    let catalog = FolioProcess::fixture("warnings_only.yaml");

    let output = FolioProcess::spawn_command(&["validate", "--catalog", &catalog]);
    assert!(output.status.success());

    let output = FolioProcess::spawn_command(&["validate", "--strict", "--catalog", &catalog]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_json_output() {
    let catalog = FolioProcess::fixture("warnings_only.yaml");
    let output =
        FolioProcess::spawn_command(&["validate", "--format", "json", "--catalog", &catalog]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["summary"]["errors"], 0);
    assert_eq!(parsed["summary"]["warnings"], 2);
    assert_eq!(parsed["issues"][0]["severity"], "warning");
}

#[test]
fn validate_missing_file() {
    let output =
        FolioProcess::spawn_command(&["validate", "--catalog", "/tmp/nonexistent_folio_catalog.yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_malformed_yaml() {
    let catalog = FolioProcess::fixture("malformed.yaml");
    let output = FolioProcess::spawn_command(&["validate", "--catalog", &catalog]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse error"), "{stderr}");
}

#[test]
fn render_two_categories_end_to_end() {
    let catalog = FolioProcess::fixture("two_categories.yaml");
    let output = FolioProcess::spawn_command(&["render", "--catalog", &catalog]);
    assert!(output.status.success());

    let html = String::from_utf8_lossy(&output.stdout);
    assert_eq!(count(&html, "class=\"category-heading\""), 2);
    assert_eq!(count(&html, "<article class=\"card\""), 3);
    assert!(html.contains("<h2>Selected work</h2>"));

    let engines = html.find(">Engines</h3>").unwrap();
    let notes = html.find(">Notes</h3>").unwrap();
    assert!(engines < notes);
    assert_eq!(count(&html[engines..notes], "<article class=\"card\""), 1);
    assert_eq!(count(&html[notes..], "<article class=\"card\""), 2);

    let note_g = html.find(">Note G</h3>").unwrap();
    let note_a = html.find(">Note A</h3>").unwrap();
    assert!(note_g < note_a);
}

#[test]
fn render_accepts_historical_field_names() {
    let catalog = FolioProcess::fixture("two_categories.yaml");
    let output = FolioProcess::spawn_command(&["render", "--catalog", &catalog]);
    let html = String::from_utf8_lossy(&output.stdout);

    assert!(html.contains(
        "href=\"https://github.com/ada/note-g\" target=\"_blank\" rel=\"noopener noreferrer\""
    ));
    assert!(html.contains(">Bernoulli</span>"));
    assert!(html.contains(">Loops</span>"));
}

#[test]
fn render_builtin_is_deterministic() {
    let first = FolioProcess::spawn_command(&["render"]);
    let second = FolioProcess::spawn_command(&["render"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let html = String::from_utf8_lossy(&first.stdout);
    assert_eq!(count(&html, "<article class=\"card\""), 10);
}

#[test]
fn render_env_catalog() {
    let catalog = FolioProcess::fixture("two_categories.yaml");
    let output = FolioProcess::command(&["render"])
        .env("FOLIO_CATALOG", &catalog)
        .output()
        .expect("failed to run folio");
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("Ada Lovelace"));
}

#[test]
fn list_json_format() {
    let output = FolioProcess::spawn_command(&["list", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert!(parsed.is_array(), "JSON list output should be an array");
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn list_human_with_tag() {
    let output = FolioProcess::spawn_command(&["list", "--tag", "FAISS"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generative AI (2)"), "{stdout}");
    assert!(stdout.contains("Chat with online PDFs"));
    assert!(!stdout.contains("Cold Email Generator"));
}

#[test]
fn list_unknown_category_is_usage_error() {
    let output = FolioProcess::spawn_command(&["list", "--category", "Generativ AI"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("did you mean"), "{stderr}");
}

#[test]
fn version_json() {
    let output = FolioProcess::spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(parsed["name"], "folio");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn completions_bash() {
    let output = FolioProcess::spawn_command(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("folio"));
}
