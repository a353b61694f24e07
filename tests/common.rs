#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary with colours off and a private config file inside `dir`.
pub fn tp(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("tourprog");
    cmd.env("NO_COLOR", "1")
        .env_remove("TOURPROG_LOG")
        .args(["--config", config_path(dir).to_str().expect("utf-8 path")]);
    cmd
}

pub fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tourprog.yaml")
}

/// Write a config with a known letterhead.
pub fn write_config(dir: &TempDir, default_ownership: &str) {
    let yaml = format!(
        "office_name: Office of the Electrical Inspector\n\
         office_address: Palakkad\n\
         officer_name: Test Officer\n\
         designation: Assistant Electrical Inspector\n\
         pen: \"833631\"\n\
         default_ownership: \"{default_ownership}\"\n\
         default_time: \"09:00\"\n\
         report_title: Monthly Tour Program\n\
         output_file: tour_program.pdf\n"
    );
    fs::write(config_path(dir), yaml).expect("write config");
}

/// Output path inside the temp dir, as a string for the command line.
pub fn out_file(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().to_string()
}

pub fn contains_bytes(path: &Path, needle: &str) -> bool {
    let bytes = fs::read(path).expect("read output");
    bytes.windows(needle.len()).any(|w| w == needle.as_bytes())
}
