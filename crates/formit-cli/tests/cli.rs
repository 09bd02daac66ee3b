use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn formit(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("formit-builder").expect("binary");
    cmd.current_dir(temp.path())
        .env_remove("FORMIT_PROJECT")
        .env_remove("FORMIT_OUTPUT_DIR")
        .env("FORMIT_LOG", "off");
    cmd
}

fn add_field(temp: &TempDir, kind: &str) -> String {
    let output = formit(temp)
        .args(["add", "--type", kind])
        .output()
        .expect("run add");
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .expect("utf8")
        .trim()
        .to_string()
}

fn project(temp: &TempDir) -> Value {
    let contents =
        fs::read_to_string(temp.path().join("formit.project.json")).expect("project file");
    serde_json::from_str(&contents).expect("project json")
}

#[test]
fn catalog_lists_groups() {
    let temp = TempDir::new().expect("temp dir");
    formit(&temp)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choice fields:"))
        .stdout(predicate::str::contains("radio"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().expect("temp dir");
    formit(&temp).arg("init").assert().success();
    temp.child("formit.project.json")
        .assert(predicate::str::contains("contact_form"));
    formit(&temp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    formit(&temp).args(["init", "--force"]).assert().success();
}

#[test]
fn edit_cycle_drives_snippet_output() {
    let temp = TempDir::new().expect("temp dir");
    let email = add_field(&temp, "email");
    let message = add_field(&temp, "textarea");

    formit(&temp)
        .args(["update", "--id", &email, "--required", "true"])
        .assert()
        .success();
    formit(&temp)
        .args([
            "update",
            "--id",
            &message,
            "--name",
            "msg",
            "--validation",
            "minlen:10",
        ])
        .assert()
        .success();

    formit(&temp)
        .args(["show", "--format", "snippet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "&validate=`email:required,email:email,msg:minlen:10`",
        ));

    formit(&temp)
        .args(["move", "--id", &message, "--direction", "up"])
        .assert()
        .success();
    let names = project(&temp)["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|field| field["name"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["msg", "email"]);
}

#[test]
fn duplicate_prints_new_id_and_lint_warns() {
    let temp = TempDir::new().expect("temp dir");
    let text = add_field(&temp, "text");
    let output = formit(&temp)
        .args(["duplicate", "--id", &text])
        .output()
        .expect("run duplicate");
    assert!(output.status.success());
    let copy = String::from_utf8(output.stdout).expect("utf8");
    assert_ne!(copy.trim(), text);
    assert_eq!(project(&temp)["fields"][1]["name"], "text_copy");

    formit(&temp)
        .args(["update", "--id", copy.trim(), "--name", "text"])
        .assert()
        .success();
    formit(&temp)
        .arg("lint")
        .assert()
        .success()
        .stderr(predicate::str::contains("name 'text' is used by 2 fields"));
}

#[test]
fn lint_reports_each_finding_once_with_default_logging() {
    let temp = TempDir::new().expect("temp dir");
    add_field(&temp, "text");
    add_field(&temp, "text");

    let output = formit(&temp)
        .env_remove("FORMIT_LOG")
        .arg("lint")
        .output()
        .expect("run lint");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stderr.matches("name 'text' is used by 2 fields").count(), 1);
    assert!(!stdout.contains("is used by"));
}

#[test]
fn export_and_verify_round_trip() {
    let temp = TempDir::new().expect("temp dir");
    add_field(&temp, "select");
    formit(&temp)
        .args(["settings", "--form-name", "quote"])
        .assert()
        .success();
    formit(&temp)
        .args(["export", "--out", "out"])
        .assert()
        .success();

    temp.child("out/quote_form.html")
        .assert(predicate::str::contains("<option value=\"\">Choose...</option>"));
    temp.child("out/quote_complete.json")
        .assert(predicate::str::contains("\"formit_code\""));

    formit(&temp)
        .args(["verify", "--bundle", "out/quote_complete.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is consistent"));

    let bundle_path = temp.path().join("out/quote_complete.json");
    let mut bundle: Value =
        serde_json::from_str(&fs::read_to_string(&bundle_path).expect("read")).expect("json");
    bundle["html"] = Value::String("edited".into());
    fs::write(&bundle_path, bundle.to_string()).expect("write");

    formit(&temp)
        .args(["verify", "--bundle", "out/quote_complete.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("html differs"));
}

#[test]
fn unknown_type_is_rejected() {
    let temp = TempDir::new().expect("temp dir");
    formit(&temp)
        .args(["add", "--type", "slider"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field type 'slider'"));
}
