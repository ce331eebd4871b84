//! Assertion helpers for tests.

use imagelab_engine::Image;
use pretty_assertions::assert_eq;

use super::workspace::TestWorkspace;

/// Assert a registered image matches `expected` pixel for pixel
pub fn assert_image(workspace: &TestWorkspace, name: &str, expected: &Image) {
    let actual = workspace
        .interpreter
        .engine()
        .get_image(name)
        .unwrap_or_else(|e| panic!("Expected image {name}: {e}"));
    assert_eq!(actual, expected, "Image {name} differs");
}

/// Assert every printed line reports a successful command
pub fn assert_all_executed(workspace: &TestWorkspace) {
    for line in workspace.output() {
        assert!(
            line.starts_with("Executed command: "),
            "Unexpected output line: {line}"
        );
    }
}

/// Assert the bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
