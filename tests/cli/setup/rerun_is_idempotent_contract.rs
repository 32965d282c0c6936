use crate::harness::TestContext;
use defectlab::domain::GITIGNORE_TEMPLATE;
use std::fs;

#[test]
fn setup_twice_succeeds_and_keeps_marker_content() {
    let ctx = TestContext::new();

    ctx.setup_skip_install();
    fs::write(ctx.work_dir().join("models/__init__.py"), "from .backbone import *\n").unwrap();
    fs::write(ctx.work_dir().join(".gitignore"), "local-edit\n").unwrap();

    ctx.setup_skip_install();

    let marker = fs::read_to_string(ctx.work_dir().join("models/__init__.py")).unwrap();
    assert_eq!(marker, "from .backbone import *\n");
    let gitignore = fs::read_to_string(ctx.work_dir().join(".gitignore")).unwrap();
    assert_eq!(gitignore, GITIGNORE_TEMPLATE);
}
