use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dataset_with_images_and_annotations_is_reported() {
    let ctx = TestContext::new();
    let dataset = ctx.create_dataset(4, true);

    ctx.cli()
        .arg("--skip-install")
        .arg("--data-root")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Images directory found with 4 images"))
        .stdout(predicate::str::contains("  ✓ Annotations directory found"))
        .stdout(predicate::str::contains("Dataset path verification failed").not());
}

#[test]
fn dot_prefixed_images_are_counted() {
    let ctx = TestContext::new();
    let dataset = ctx.create_dataset(1, true);
    std::fs::write(dataset.join("images/.crazing_0.jpg"), b"").unwrap();

    ctx.cli()
        .arg("--skip-install")
        .arg("--data-root")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Images directory found with 2 images"));
}

#[test]
fn missing_annotations_is_a_warning_only() {
    let ctx = TestContext::new();
    let dataset = ctx.create_dataset(2, false);

    ctx.cli()
        .arg("--skip-install")
        .arg("--data-root")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Images directory found with 2 images"))
        .stdout(predicate::str::contains("  ⚠ Annotations directory not found at:"))
        .stdout(predicate::str::contains("Dataset path verification failed").not());
}

#[test]
fn missing_dataset_prints_final_warning() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--skip-install")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✗ Dataset path not found:"))
        .stdout(predicate::str::contains("data/raw/NEU-DET"))
        .stdout(predicate::str::contains("⚠ Warning: Dataset path verification failed."));
}

#[test]
fn dataset_root_can_come_from_config() {
    let ctx = TestContext::new();
    let dataset = ctx.create_dataset(1, true);
    ctx.write_config(&format!("[dataset]\nroot = \"{}\"\n", dataset.display()));

    ctx.cli()
        .arg("--skip-install")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Images directory found with 1 images"));
}
