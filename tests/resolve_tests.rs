//! Integration tests for `bower-concat resolve`

mod common;

use common::TestProject;
use predicates::prelude::*;

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}

/// app depends on lib, util stands alone
fn app_lib_util() -> TestProject {
    let mut project = TestProject::new();
    project.add_component("app", &["lib"], &["app.js"]);
    project.add_component("lib", &[], &["lib.js"]);
    project.add_component("util", &[], &["util.js"]);
    project
}

#[test]
fn test_resolve_orders_dependencies_first() {
    let project = app_lib_util();

    let output = project.cmd("resolve").output().expect("failed to run");
    assert!(output.status.success());

    assert_eq!(
        stdout_lines(&output),
        vec![
            "bower_components/util/util.js",
            "bower_components/lib/lib.js",
            "bower_components/app/app.js",
        ]
    );
}

#[test]
fn test_resolve_follows_reported_component_order() {
    let project = app_lib_util();
    project.save_listings();
    project.write_file(
        "paths.json",
        r#"{
  "util": "bower_components/util",
  "app": "bower_components/app",
  "lib": "bower_components/lib"
}"#,
    );

    common::bower_concat_cmd()
        .current_dir(&project.path)
        .env_remove("RUST_LOG")
        .args(["resolve", "--map-file", "map.json", "--paths-file", "paths.json"])
        .assert()
        .success()
        .stdout(
            "bower_components/lib/lib.js\nbower_components/app/app.js\nbower_components/util/util.js\n",
        );
}

#[test]
fn test_resolve_json_format() {
    let project = app_lib_util();

    let output = project
        .cmd("resolve")
        .args(["--format", "json"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());

    let files: Vec<String> = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(files.len(), 3);
    assert_eq!(files[2], "bower_components/app/app.js");
}

#[test]
fn test_resolve_declared_main_wins() {
    let mut project = TestProject::new();
    project.add_component_with_main(
        "widget",
        &[],
        &["bower_components/widget/dist/widget.css", "bower_components/widget/dist/widget.js"],
    );

    project
        .cmd("resolve")
        .assert()
        .success()
        .stdout("bower_components/widget/dist/widget.js\n");
}

#[test]
fn test_resolve_guesses_closest_file() {
    let mut project = TestProject::new();
    project.add_component("jquery", &[], &["jquery.js", "jquery.min.js"]);

    project
        .cmd("resolve")
        .assert()
        .success()
        .stdout("bower_components/jquery/jquery.js\n");
}

#[test]
fn test_resolve_exclude_and_include() {
    let project = app_lib_util();

    project
        .cmd("resolve")
        .args(["--exclude", "util"])
        .assert()
        .success()
        .stdout("bower_components/lib/lib.js\nbower_components/app/app.js\n");

    project
        .cmd("resolve")
        .args(["--include", "util"])
        .assert()
        .success()
        .stdout("bower_components/util/util.js\n");
}

#[test]
fn test_resolve_dependency_override_from_config() {
    let project = app_lib_util();
    project.write_file("bower-concat.yaml", "dependencies:\n  util: app\n");

    project
        .cmd("resolve")
        .assert()
        .success()
        .stdout(
            "bower_components/lib/lib.js\nbower_components/app/app.js\nbower_components/util/util.js\n",
        );
}

#[test]
fn test_resolve_dependency_override_flag() {
    let project = app_lib_util();

    project
        .cmd("resolve")
        .args(["--dependency", "util=app"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("bower_components/util/util.js\n"));
}

#[test]
fn test_resolve_unresolvable_component_aborts() {
    let mut project = app_lib_util();
    project.add_component("theme", &[], &[]);
    project.write_file("bower_components/theme/theme.css", "body {}");

    project
        .cmd("resolve")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Can't detect main file for \"theme\" component",
        ))
        .stderr(predicate::str::contains("add it manually"));
}

#[test]
fn test_resolve_excluding_unresolvable_component_succeeds() {
    let mut project = app_lib_util();
    project.add_component("theme", &[], &[]);

    project
        .cmd("resolve")
        .args(["--exclude", "theme"])
        .assert()
        .success();
}

#[test]
fn test_resolve_strict_order() {
    let mut project = TestProject::new();
    project.add_component("a", &["b"], &["a.js"]);
    project.add_component("b", &["c"], &["b.js"]);
    project.add_component("c", &[], &["c.js"]);

    project
        .cmd("resolve")
        .arg("--strict-order")
        .assert()
        .success()
        .stdout(
            "bower_components/c/c.js\nbower_components/b/b.js\nbower_components/a/a.js\n",
        );
}

#[test]
fn test_resolve_strict_order_cycle_fails() {
    let mut project = TestProject::new();
    project.add_component("a", &["b"], &["a.js"]);
    project.add_component("b", &["a"], &["b.js"]);

    project
        .cmd("resolve")
        .arg("--strict-order")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Circular dependency"));

    // The default ordering never fails on cycles
    project.cmd("resolve").assert().success();
}

#[test]
fn test_resolve_invalid_listing_fails() {
    let project = app_lib_util();
    project.save_listings();
    project.write_file("paths.json", "{ not json");

    let mut cmd = common::bower_concat_cmd();
    cmd.current_dir(&project.path)
        .args(["resolve", "--map-file", "map.json", "--paths-file", "paths.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bower query 'paths' failed"));
}

#[test]
fn test_resolve_bad_config_fails() {
    let project = app_lib_util();
    project.write_file("bower-concat.yaml", "include: [unclosed\n");

    project
        .cmd("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}
