//! Scratch directory plus an interpreter rooted in it.

use imagelab::models::AppConfig;
use imagelab::script::{Flow, Interpreter};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestWorkspace {
    pub dir: TempDir,
    pub interpreter: Interpreter<Vec<u8>>,
}

impl TestWorkspace {
    /// Interpreter with `base_dir` pointing at a fresh temp directory
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = AppConfig {
            base_dir: Some(dir.path().to_path_buf()),
            ..config
        };
        Self {
            dir,
            interpreter: Interpreter::new(config, Vec::new()),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file into the workspace
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("Failed to read output")
    }

    /// Run script text line by line
    pub fn run(&mut self, script: &str) -> Flow {
        self.interpreter
            .run_reader(script.as_bytes())
            .expect("Output sink failed")
    }

    /// Everything printed so far, one entry per line
    pub fn output(&self) -> Vec<String> {
        String::from_utf8_lossy(self.interpreter.output())
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
