use std::fs;
use tempfile::tempdir;

use envdoctor_core::header::directive_status;

const DIRECTIVE: &str = "#include <cstdint>";

#[test]
fn test_missing_header_reports_path() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("rasterizer_impl.h");

    let status = directive_status(&path, DIRECTIVE, 10).unwrap();
    assert!(status.contains("not found"));
    assert!(status.contains("rasterizer_impl.h"));
}

#[test]
fn test_directive_within_window_is_found() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("rasterizer_impl.h");
    fs::write(
        &path,
        "#pragma once\n#include <vector>\n#include <cstdint>\n#include <functional>\n",
    )
    .unwrap();

    let status = directive_status(&path, DIRECTIVE, 10).unwrap();
    assert_eq!(status, "#include <cstdint> present: true");
}

#[test]
fn test_directive_outside_window_is_missed() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("rasterizer_impl.h");

    // Eleven filler lines push the directive to line 12, past the window
    let mut contents = String::new();
    for i in 0..11 {
        contents.push_str(&format!("// filler {}\n", i));
    }
    contents.push_str("#include <cstdint>\n");
    fs::write(&path, contents).unwrap();

    let status = directive_status(&path, DIRECTIVE, 10).unwrap();
    assert_eq!(status, "#include <cstdint> present: false");
}

#[test]
fn test_window_size_is_honored() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("header.h");
    fs::write(&path, "first\nsecond\n#include <cstdint>\n").unwrap();

    let narrow = directive_status(&path, DIRECTIVE, 2).unwrap();
    assert!(narrow.ends_with("false"));

    let wide = directive_status(&path, DIRECTIVE, 3).unwrap();
    assert!(wide.ends_with("true"));
}
