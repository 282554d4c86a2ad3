// Integration test utilities and common code
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test fixture helper for creating temporary documents
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a document file with given content
    pub fn create_document<P: AsRef<Path>>(
        &self,
        relative_path: P,
        content: impl AsRef<[u8]>,
    ) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }

    pub fn read<P: AsRef<Path>>(&self, relative_path: P) -> String {
        fs::read_to_string(self.root_path.join(relative_path)).expect("Failed to read test file")
    }
}

/// Run the built binary with the given arguments
pub fn run_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_cli_with_log(None, args)
}

/// Run the binary with `RUST_LOG` set to `filter`, or unset when `None`
pub fn run_cli_with_log<I, S>(filter: Option<&str>, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut command = Command::new(env!("CARGO_BIN_EXE_concordance"));
    command.args(args).env_remove("RUST_LOG");
    if let Some(filter) = filter {
        command.env("RUST_LOG", filter);
    }
    command.output().expect("Failed to run concordance binary")
}

/// Compare output against golden text, showing both on mismatch
pub fn assert_golden(actual: &str, expected: &str, test_name: &str) {
    if actual != expected {
        panic!(
            "{test_name}: output does not match golden text\n\
             --- expected ---\n{expected}\n--- actual ---\n{actual}"
        );
    }
}
