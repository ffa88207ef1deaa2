use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_py-license-report").to_string();

        Self { dir, binary_path }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("Failed to write fixture file");
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).expect("Failed to read file")
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }

    /// Put a fake `pip-licenses` executable on PATH that prints the given
    /// JSON, so end-to-end runs do not need a real Python environment.
    #[cfg(unix)]
    pub fn install_fake_pip_licenses(&self, json: &str) {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();
        self.write_file("bin/packages.json", json);

        let stub = bin_dir.join("pip-licenses");
        fs::write(
            &stub,
            format!("#!/bin/sh\ncat '{}'\n", bin_dir.join("packages.json").display()),
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
    }

    pub fn run_report(&self, args: &[&str]) -> std::process::Output {
        let bin_dir = self.path().join("bin");
        let path_var = match std::env::var("PATH") {
            Ok(existing) => format!("{}:{}", bin_dir.display(), existing),
            Err(_) => bin_dir.display().to_string(),
        };

        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.path())
            .env("PATH", path_var)
            .output()
            .expect("Failed to run py-license-report")
    }
}
