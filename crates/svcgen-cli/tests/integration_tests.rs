//! Integration tests for the `generate` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command running in `dir` with no user config, no colors and no log
/// overrides leaking in from the environment.
fn generate(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("generate");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SVCGEN_GENERATION__SERVICES_DIR")
        .env_remove("SVCGEN_GENERATION__NAME_POLICY")
        .env_remove("SVCGEN_GENERATION__EXIT_POLICY")
        .env_remove("SVCGEN_OUTPUT__FORMAT");
    cmd
}

fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ── meta ─────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_both_generators() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("services"))
        .stdout(predicate::str::contains("api"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn api_without_name_is_usage_error() {
    let temp = TempDir::new().unwrap();
    generate(temp.path()).arg("api").assert().code(2);
    assert!(dir_names(temp.path()).is_empty());
}

// ── services ─────────────────────────────────────────────────────────────────

#[test]
fn services_creates_one_tree_per_name() {
    let temp = TempDir::new().unwrap();

    generate(temp.path())
        .arg("services")
        .write_stdin("2\nOrder\nUser\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "How many services do you want to create? ",
        ))
        .stdout(predicate::str::contains("Name of service 2: "))
        .stdout(predicate::str::contains("Done: 2 created, 0 skipped, 0 failed."));

    let base = temp.path().join("Services");
    assert_eq!(dir_names(&base), vec!["Order", "User"]);
    assert_eq!(
        dir_names(&base.join("User")),
        vec!["config", "controllers", "models", "routes"]
    );

    let routes = fs::read_to_string(base.join("Order/routes/Order.js")).unwrap();
    for line in [
        "router.post('/', OrderController.create);",
        "router.get('/', OrderController.findAll);",
        "router.get('/:id', OrderController.findOne);",
        "router.put('/:id', OrderController.update);",
        "router.delete('/:id', OrderController.delete);",
    ] {
        assert!(routes.contains(line), "missing {line}");
    }
    assert!(routes.contains("require('../controllers/OrderController')"));
}

#[test]
fn empty_name_is_asked_again() {
    let temp = TempDir::new().unwrap();

    let assert = generate(temp.path())
        .arg("services")
        .write_stdin("2\n\nA\nB\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The service name cannot be empty."));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert_eq!(stdout.matches("Name of service 1: ").count(), 2);
    assert_eq!(dir_names(&temp.path().join("Services")), vec!["A", "B"]);
}

#[test]
fn invalid_count_still_succeeds_with_empty_base() {
    for count in ["0", "abc", "-3"] {
        let temp = TempDir::new().unwrap();

        generate(temp.path())
            .arg("services")
            .write_stdin(format!("{count}\nNever\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Please enter a valid number"))
            .stdout(predicate::str::contains("Name of service").not());

        let base = temp.path().join("Services");
        assert!(base.is_dir(), "base missing for {count}");
        assert!(dir_names(&base).is_empty());
    }
}

#[test]
fn closed_input_generates_nothing() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .arg("services")
        .write_stdin("2\nOnly\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was generated"));
    assert!(dir_names(&temp.path().join("Services")).is_empty());
}

#[test]
fn second_run_preserves_first_run() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .arg("services")
        .write_stdin("1\nOrder\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("was created"));

    let model = temp.path().join("Services/Order/models/Order.js");
    fs::write(&model, "// hand edited").unwrap();

    generate(temp.path())
        .arg("services")
        .write_stdin("1\nOrder\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The folder Services already exists."))
        .stdout(predicate::str::contains("already exists; service 'Order' skipped"));

    assert_eq!(fs::read_to_string(&model).unwrap(), "// hand edited");
}

#[test]
fn existing_middle_service_is_skipped() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Services/B")).unwrap();

    generate(temp.path())
        .arg("services")
        .write_stdin("3\nA\nB\nC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: 2 created, 1 skipped, 0 failed."));

    let base = temp.path().join("Services");
    assert!(base.join("A/controllers/AController.js").is_file());
    assert!(dir_names(&base.join("B")).is_empty());
    assert!(base.join("C/models/C.js").is_file());
}

#[test]
fn services_dir_comes_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("svcgen.toml");
    fs::write(&config, "[generation]\nservices_dir = \"Backends\"\n").unwrap();

    generate(temp.path())
        .args(["--config", config.to_str().unwrap(), "services"])
        .write_stdin("1\nOrder\n")
        .assert()
        .success();

    assert!(temp.path().join("Backends/Order/routes/Order.js").is_file());
    assert!(!temp.path().join("Services").exists());
}

#[test]
fn missing_explicit_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .args(["--config", "nope.toml", "services"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── strict exit policy ───────────────────────────────────────────────────────

#[test]
fn strict_clean_run_exits_zero() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .args(["--strict", "services"])
        .write_stdin("1\nOrder\n")
        .assert()
        .code(0);
}

#[test]
fn strict_skip_and_abort_exit_two() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Services/B")).unwrap();

    generate(temp.path())
        .args(["--strict", "services"])
        .write_stdin("2\nA\nB\n")
        .assert()
        .code(2);

    generate(temp.path())
        .args(["--strict", "services"])
        .write_stdin("abc\n")
        .assert()
        .code(2);
}

#[test]
fn strict_failure_exits_one() {
    let temp = TempDir::new().unwrap();
    // A plain file where the services directory should be.
    fs::write(temp.path().join("Services"), "not a directory").unwrap();

    generate(temp.path())
        .arg("services")
        .write_stdin("1\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to create service 'A'"));

    generate(temp.path())
        .env("SVCGEN_GENERATION__EXIT_POLICY", "strict")
        .arg("services")
        .write_stdin("1\nA\n")
        .assert()
        .code(1);
}

// ── api ──────────────────────────────────────────────────────────────────────

#[test]
fn api_creates_widget_skeleton() {
    let temp = TempDir::new().unwrap();

    generate(temp.path())
        .args(["api", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The API 'Widget' was created"));

    let root = temp.path().join("Widget");
    assert_eq!(dir_names(&root), vec!["config", "controllers", "routes"]);

    let controller = fs::read_to_string(root.join("controllers/WidgetController.js")).unwrap();
    assert!(controller.contains(r#"res.json({ message: "Hello, World!" });"#));

    let routes = fs::read_to_string(root.join("routes/Widget.js")).unwrap();
    assert!(routes.contains("router.get('/hello', apiController.hello);"));

    let database = fs::read_to_string(root.join("config/database.js")).unwrap();
    assert!(database.contains("url: 'mongodb://localhost:27017/myDatabase'"));
}

#[test]
fn api_conflict_is_reported_not_failed() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Widget")).unwrap();

    generate(temp.path())
        .args(["api", "Widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(dir_names(&temp.path().join("Widget")).is_empty());

    generate(temp.path())
        .args(["api", "Widget", "--strict"])
        .assert()
        .code(2);
}

#[test]
fn path_safe_policy_rejects_traversal() {
    let temp = TempDir::new().unwrap();

    generate(temp.path())
        .env("SVCGEN_GENERATION__NAME_POLICY", "path-safe")
        .args(["api", "../escape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid name '../escape'"));

    assert!(dir_names(temp.path()).is_empty());
}

#[test]
fn json_summary_on_stdout() {
    let temp = TempDir::new().unwrap();

    let assert = generate(temp.path())
        .args(["--output-format", "json", "api", "Widget"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["command"], "api");
    assert_eq!(summary["created"], 1);
    assert_eq!(summary["entities"][0]["name"], "Widget");
    assert_eq!(summary["entities"][0]["status"], "created");
}

// ── config & completions ─────────────────────────────────────────────────────

#[test]
fn config_get_reports_defaults() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .args(["config", "get", "generation.services_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation.services_dir = Services"));
}

#[test]
fn config_get_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key 'nope'"));
}

#[test]
fn init_writes_requested_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf/svcgen.toml");
    let path_arg = path.to_str().unwrap();

    generate(temp.path())
        .args(["--config", path_arg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created at"));
    assert!(path.is_file());

    generate(temp.path())
        .args(["--config", path_arg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));

    generate(temp.path())
        .args(["--config", path_arg, "config", "get", "generation.exit_policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation.exit_policy = lenient"));
}

#[test]
fn completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    generate(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"));
}
