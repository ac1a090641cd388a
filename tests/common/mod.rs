//! Shared testing utilities for promptopt CLI and library tests.

use assert_cmd::Command;
use serde_json::json;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const ENDPOINT: &str = "/models/gemini-2.5-flash:generateContent";

/// Testing harness providing an isolated working directory and config file.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the config file picked up by default.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join("promptopt.toml")
    }

    /// Point the default config file at `api_url` with a short timeout.
    pub fn write_config(&self, api_url: &str) {
        let content = format!("[gemini]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url);
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Build a command for the compiled `promptopt` binary without an API key.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptopt").expect("Failed to locate promptopt binary");
        cmd.current_dir(&self.work_dir).env_remove(API_KEY_ENV).env("RUST_LOG", "off");
        cmd
    }

    /// Build a command with a fake API key set.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env(API_KEY_ENV, "test-key");
        cmd
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

/// Sets an environment variable for the lifetime of the guard.
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: &'static str,
    original: Option<OsString>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let original = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self { key, original }
    }

    pub fn remove(key: &'static str) -> Self {
        let original = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => unsafe {
                env::set_var(self.key, value);
            },
            None => unsafe {
                env::remove_var(self.key);
            },
        }
    }
}

/// A `generateContent` response whose single candidate carries `text`.
#[allow(dead_code)]
pub fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

/// Envelope carrying a well-formed result.
#[allow(dead_code)]
pub fn result_envelope(prompt: &str, explanation: &str) -> String {
    envelope(&json!({"prompt": prompt, "explanation": explanation}).to_string())
}
