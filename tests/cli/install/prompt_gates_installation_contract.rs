#![cfg(unix)]

use crate::harness::TestContext;
use predicates::prelude::*;

const PACKAGES: &str = "[install]\npackages = [\"numpy>=1.21.0\", \"tqdm\"]\n";

#[test]
fn answering_no_skips_installation() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli()
        .arg("--python")
        .arg(&python)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install required packages? (y/n): "))
        .stdout(predicate::str::contains("Installing required packages...").not())
        .stdout(predicate::str::contains("SETUP COMPLETED SUCCESSFULLY!"));

    assert!(ctx.pip_log_lines().is_empty());
}

#[test]
fn anything_but_y_declines() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli().arg("--python").arg(&python).write_stdin("yes\n").assert().success();

    assert!(ctx.pip_log_lines().is_empty());
}

#[test]
fn padded_y_declines() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli()
        .arg("--python")
        .arg(&python)
        .write_stdin(" y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing required packages...").not());

    assert!(ctx.pip_log_lines().is_empty());
}

#[test]
fn closed_stdin_declines() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli().arg("--python").arg(&python).write_stdin("").assert().success();

    assert!(ctx.pip_log_lines().is_empty());
}

#[test]
fn uppercase_y_installs_in_order() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli()
        .arg("--python")
        .arg(&python)
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Installed: numpy>=1.21.0"))
        .stdout(predicate::str::contains("  ✓ Installed: tqdm"))
        .stdout(predicate::str::contains("Package installation completed!"));

    assert_eq!(
        ctx.pip_log_lines(),
        ["-m pip install numpy>=1.21.0", "-m pip install tqdm"]
    );
}

#[test]
fn install_flag_skips_the_prompt() {
    let ctx = TestContext::new();
    ctx.write_config(PACKAGES);
    let python = ctx.fake_python("never-fails");

    ctx.cli()
        .arg("--install")
        .arg("--python")
        .arg(&python)
        .assert()
        .success()
        .stdout(predicate::str::contains("Install required packages?").not());

    assert_eq!(ctx.pip_log_lines().len(), 2);
}
