use std::fs;
use std::process::Command;

#[test]
#[ignore = "Requires pip-licenses installed in the host Python environment"]
fn test_against_real_pip_licenses() {
    let binary_path = env!("CARGO_BIN_EXE_py-license-report");

    let temp_dir = tempfile::tempdir().unwrap();

    // An intentionally empty manifest: every installed package should be
    // reported as undeclared, but the run must still succeed.
    fs::write(temp_dir.path().join("requirements.txt"), "").unwrap();

    let output = Command::new(binary_path)
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run py-license-report");

    if !output.status.success() {
        eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }

    assert!(output.status.success());
    let report = fs::read_to_string(temp_dir.path().join("LICENSE.txt")).unwrap();
    assert!(report.contains("Third-party package licenses"));
}
