//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated environment per test: a temporary working directory
//! for project configuration and a separate data directory for the user
//! config, with `CARPARK_*` variables cleared so the host cannot leak in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI or library read.
const CARPARK_ENV: [&str; 5] = [
    "CARPARK_CONFIG",
    "CARPARK_DATA_DIR",
    "CARPARK_OUTPUT_FORMAT",
    "CARPARK_SKIP_SEED",
    "CARPARK_LOG_MODE",
];

/// January 2023 occupancy plus one seeded reservation.
///
/// Spaces available on 2023-01-01..10 before the reservation are
/// 1, 2, 0, 1, 3, 10, 10, 10, 10, 9. Ian Richards then holds 01-06..01-09.
#[allow(dead_code)]
pub const JANUARY_SEED: &str = "\
seed:
  occupancy:
    - {date: 2023-01-01, reserved: 9}
    - {date: 2023-01-02, reserved: 8}
    - {date: 2023-01-03, reserved: 10}
    - {date: 2023-01-04, reserved: 9}
    - {date: 2023-01-05, reserved: 7}
    - {date: 2023-01-10, reserved: 1}
  reservations:
    - {name: Ian Richards, from: 2023-01-06, to: 2023-01-09}
";

/// Test environment with isolated working and data directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory commands run in
    pub work_dir: PathBuf,
    /// Data directory passed through `--data-dir`
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("site");
        let data_dir = temp_dir.path().join("carpark-data");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            work_dir,
            data_dir,
        }
    }

    /// Create an environment whose project config holds [`JANUARY_SEED`].
    pub fn january() -> Self {
        let env = Self::new();
        env.write_project_config(JANUARY_SEED);
        env
    }

    /// Get a bare command builder: isolated env vars and working directory,
    /// but no `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("carpark").expect("Failed to find carpark binary");
        for key in CARPARK_ENV {
            cmd.env_remove(key);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Write `carpark.yaml` in the working directory.
    pub fn write_project_config(&self, content: &str) -> PathBuf {
        self.write_file("carpark.yaml", content)
    }

    /// Write a file in the working directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Run a command and return stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run carpark");

        assert!(
            output.status.success(),
            "carpark {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
