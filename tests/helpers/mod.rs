//! Test helpers for csvsift integration tests
//!
//! Helpers to create CSV fixtures in temporary directories and to run the
//! csvsift binary against them.

#![allow(dead_code)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Phone catalogue used by most tests
pub const PHONES_CSV: &str = "name,brand,price,rating\n\
HOT 11S NFC,Infinix,302,4.9\n\
iphone 15 pro,apple,999,4.9\n\
galaxy s23 ultra,samsung,1199,4.8\n\
redmi note 12,xiaomi,199,4.6\n\
poco x5 pro,xiaomi,299,4.4\n";

/// Helper function to create a temp directory for tests, respecting CARGO_TARGET_TMPDIR if set
pub fn create_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    if let Ok(cargo_target_tmpdir) = env::var("CARGO_TARGET_TMPDIR") {
        fs::create_dir_all(&cargo_target_tmpdir)?;
        Ok(TempDir::new_in(cargo_target_tmpdir)?)
    } else {
        Ok(TempDir::new()?)
    }
}

/// Helper function to create a test CSV file with custom data
pub fn create_custom_csv(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Create the phone catalogue, returning the directory guard and file path
pub fn prepare_phones_file() -> Result<(TempDir, PathBuf), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let path = create_custom_csv(temp_dir.path(), "phones.csv", PHONES_CSV)?;
    Ok((temp_dir, path))
}

/// Build a csvsift command reading `path`
pub fn csvsift(path: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("csvsift")?;
    cmd.arg("--path").arg(path);
    Ok(cmd)
}
