#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const PLUGIN_PREFIX: &str = "rwtest";

/// Temporary directory holding a fake runtime binary and plugin executables.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new(runtime_version: &str) -> Self {
        let sandbox = Sandbox {
            dir: tempfile::tempdir().unwrap(),
        };
        sandbox.script("node", &format!("echo {runtime_version}"));
        sandbox
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn script(&self, name: &str, body: &str) {
        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A plugin that echoes what it received.
    fn echo_plugin(&self, operation: &str) {
        self.script(
            &format!("{PLUGIN_PREFIX}-{operation}"),
            "echo \"args=$*\"\necho \"mode=$NODE_ENV\"\necho \"options=$RUNWAY_OPTIONS\"",
        );
    }

    fn cmd(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::cargo_bin("runway").unwrap();
        cmd.current_dir(self.path())
            .env("PATH", path)
            .env("RUNWAY_NODE", self.path().join("node"))
            .env("RUNWAY_PLUGIN_PREFIX", PLUGIN_PREFIX)
            .env("XDG_CONFIG_HOME", self.path())
            .env_remove("NODE_ENV")
            .env_remove("RUNWAY_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn help_prints_usage_without_dispatch() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("runway vite:dev"));
}

#[test]
fn version_prints_package_version() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .args(["-v"])
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn old_runtime_is_rejected() {
    let sandbox = Sandbox::new("v16.20.2");
    sandbox
        .cmd()
        .args(["--help"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("runtime version 18"));
}

#[test]
fn missing_runtime_is_reported() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .env("RUNWAY_NODE", sandbox.path().join("no-such-node"))
        .args(["dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not run runtime binary"));
}

#[test]
fn unknown_flag_fails() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .args(["dev", "--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn build_runs_plugin_in_production_mode() {
    let sandbox = Sandbox::new("v18.19.0");
    sandbox.echo_plugin("build");
    sandbox
        .cmd()
        .args(["build", "my-app", "--sourcemap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args=my-app"))
        .stdout(predicate::str::contains("mode=production"))
        .stdout(predicate::str::contains(r#"options={"sourcemap":true}"#));
}

#[test]
fn build_respects_existing_mode() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("build");
    sandbox
        .cmd()
        .env("NODE_ENV", "staging")
        .args(["build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=staging"));
}

#[test]
fn watch_runs_in_development_mode() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("watch");
    sandbox
        .cmd()
        .args(["watch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=development"));
}

#[test]
fn routes_json_has_no_directory() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("routes");
    sandbox
        .cmd()
        .args(["routes", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args=\n"))
        .stdout(predicate::str::contains(r#"options={"format":"json"}"#));
}

#[test]
fn bare_directory_runs_dev_plugin() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("dev");
    sandbox
        .cmd()
        .args(["my-project", "--port", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args=my-project"))
        .stdout(predicate::str::contains(
            r#"options={"interactive":true,"port":3000}"#,
        ));
}

#[test]
fn vite_dev_passes_delegated_flags() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("vite-dev");
    sandbox
        .cmd()
        .args(["vite:dev", "--host", "0.0.0.0", "--open"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""host":"0.0.0.0""#))
        .stdout(predicate::str::contains(r#""open":true"#));
}

#[test]
fn init_uses_root_variable() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.echo_plugin("init");
    sandbox
        .cmd()
        .env("RUNWAY_ROOT", "/srv/projects/site")
        .args(["init", "--no-delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("args=/srv/projects/site"))
        .stdout(predicate::str::contains(r#"options={"delete":false}"#));
}

#[test]
fn missing_plugin_fails() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .args(["setup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rwtest-setup"));
}

#[test]
fn failing_plugin_fails_the_run() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox.script(&format!("{PLUGIN_PREFIX}-setup"), "exit 4");
    sandbox
        .cmd()
        .args(["setup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 4"));
}

#[test]
fn no_command_fails() {
    let sandbox = Sandbox::new("v20.11.0");
    sandbox
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No command"));
}

#[test]
fn project_config_selects_plugin_prefix() {
    let sandbox = Sandbox::new("v20.11.0");
    std::fs::write(
        sandbox.path().join(".runway.toml"),
        "[toolchain]\nplugin_prefix = \"acme\"\n",
    )
    .unwrap();
    sandbox.script("acme-setup", "echo acme setup ran");
    sandbox
        .cmd()
        .env_remove("RUNWAY_PLUGIN_PREFIX")
        .args(["setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme setup ran"));
}
