use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn setup_fails_with_exit_code_one_when_a_directory_is_blocked() {
    let ctx = TestContext::new();
    // A regular file where the `data` directory should go.
    fs::write(ctx.work_dir().join("data"), "not a directory").unwrap();

    ctx.cli()
        .arg("--skip-install")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  ✓ Created: config"))
        .stdout(predicate::str::contains("SETUP COMPLETED").not())
        .stdout(predicate::str::contains("\nSetup failed with error: "))
        .stderr(predicate::str::contains("Setup failed").not());

    // Earlier steps are not rolled back.
    assert!(ctx.work_dir().join("config").is_dir());
    assert!(!ctx.work_dir().join(".gitignore").exists());
}

#[test]
fn conflicting_install_flags_are_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli().args(["--install", "--skip-install"]).assert().code(2);
    assert!(!ctx.work_dir().join("config").exists());
}
