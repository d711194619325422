use std::fs;
use tempfile::tempdir;

use envdoctor_core::config::DoctorConfig;
use envdoctor_core::probe::{Probe, ProbeRunner, FAILURE_PREFIX};
use envdoctor_core::{process, render_to_string, summary};

#[test]
fn test_standard_probe_set_order() {
    let runner = ProbeRunner::from_config(&DoctorConfig::default());
    let names: Vec<&str> = runner.probes().iter().map(Probe::name).collect();

    assert_eq!(names, vec!["Python", "torch", "nvcc", "nvidia-smi", "header"]);
}

#[test]
fn test_command_probe_with_missing_executable_never_raises() {
    let mut runner = ProbeRunner::new();
    runner.register(Probe::new("ghost", || {
        process::run_lenient("envdoctor-missing-tool", &[])
    }));
    runner.register(Probe::new("after", || Ok("still ran".to_string())));

    let results = runner.run_all();
    assert_eq!(results.len(), 2);
    assert!(!results[0].succeeded());
    assert!(results[0].output().starts_with(FAILURE_PREFIX));
    assert!(results[0].output().contains("envdoctor-missing-tool"));
    assert!(results[1].succeeded());
}

#[test]
fn test_config_driven_run_with_fixture_header() {
    let temp = tempdir().unwrap();
    let header = temp.path().join("rasterizer_impl.h");
    fs::write(&header, "#pragma once\n// types\n#include <cstdint>\n").unwrap();

    let mut config = DoctorConfig::default();
    config.header.path = header;
    // Point the external probes at tools that exist everywhere so this test
    // does not depend on a CUDA install
    config.compiler.program = "echo".to_string();
    config.compiler.args = vec!["compiler ok".to_string()];
    config.driver.program = "echo".to_string();
    config.driver.args = vec!["driver ok".to_string()];

    let results = ProbeRunner::from_config(&config).run_all();
    assert_eq!(results.len(), 5);

    // Command probes are named after the configured executable
    let rendered = render_to_string(&results);
    assert!(rendered.contains("echo: compiler ok"));
    assert!(rendered.contains("echo: driver ok"));
    assert!(rendered.contains("header: #include <cstdint> present: true"));

    // Whatever the interpreter and library probes did, the run completed
    let counts = summary(&results);
    assert_eq!(counts.total, 5);
    assert_eq!(counts.succeeded + counts.failed, 5);
}
