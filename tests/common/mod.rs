//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory holding a data file, an optional settings
/// file and the output directory.
pub struct TestProject {
    /// Temporary directory for the test workspace
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run bsp-metadoc in the workspace with an empty settings file
    pub fn run(&self, args: &[&str]) -> Output {
        let args: Vec<&OsStr> = args.iter().map(OsStr::new).collect();
        self.run_os(&args)
    }

    /// Run bsp-metadoc with arguments that need not be valid UTF-8
    pub fn run_os(&self, args: &[&OsStr]) -> Output {
        if !self.file_exists("config.toml") {
            self.create_file("config.toml", "");
        }
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bsp-metadoc"));
        cmd.current_dir(self.path());
        cmd.env("BSP_METADOC_CONFIG", self.path().join("config.toml"));
        cmd.env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute bsp-metadoc")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Two boards with consistent userspace package versions
#[allow(dead_code)]
pub const TWO_BOARDS: &str = r#"{
    "imx6qsabresd": {
        "soc-family": "mx6:mx6q",
        "image-bootloader": "",
        "recipes": {
            "virtual/kernel": {
                "recipe": "linux-imx",
                "version": "3.10.17-1.0.0",
                "layer": "meta-fsl-arm",
                "description": "Linux kernel for i.MX 6 boards"
            },
            "virtual/bootloader": {"recipe": "u-boot-imx", "version": "2013.04"},
            "gstreamer": {"recipe": "gstreamer", "version": "0.10.36"},
            "libdrm": {"recipe": "libdrm", "version": "2.4.46"},
            "udev": {"recipe": "udev", "version": "182"}
        }
    },
    "imx28evk": {
        "soc-family": "mxs:mx28",
        "image-bootloader": "barebox",
        "recipes": {
            "virtual/kernel": {
                "recipe": "linux-fslc",
                "version": "3.14+gitAUTOINC+c0ffee",
                "layer": "meta-fsl-arm",
                "description": "Mainline kernel"
            },
            "virtual/bootloader": {"recipe": "u-boot-fslc", "version": "2014.01"},
            "barebox": {"recipe": "barebox", "version": "2013.08.0"},
            "gstreamer": {"recipe": "gstreamer", "version": "0.10.36"},
            "libdrm": {"recipe": "libdrm", "version": "2.4.46"},
            "udev": {"recipe": "udev", "version": "182"}
        }
    }
}"#;

/// Settings restricting the SoC table to packages present in [`TWO_BOARDS`]
#[allow(dead_code)]
pub const TWO_BOARDS_SETTINGS: &str = r#"
[soc]
families = ["mx28", "mx6"]
packages = ["udev"]
"#;
