//! Shared test utilities for riskmatrix integration tests.

use assert_cmd::Command;
use riskmatrix::matrix::{CustomBand, MatrixConfig, MatrixType};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a `Command` running the `riskmatrix` binary with colors off.
#[allow(dead_code, deprecated)]
pub fn riskmatrix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("riskmatrix").unwrap();
    cmd.env("NO_COLOR", "1").arg("--color").arg("never");
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the path.
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn builtin(matrix_type: MatrixType) -> MatrixConfig {
    MatrixConfig::builtin(matrix_type)
}

/// 5x5 config with two bands: Baixo 1..=4 and Alto 5..=25.
#[allow(dead_code)]
pub fn two_band_config() -> MatrixConfig {
    MatrixConfig::builtin(MatrixType::FiveByFive).with_custom_bands(vec![
        CustomBand::range("Baixo", Some("#00ff00"), 1, 4),
        CustomBand::range("Alto", Some("#ff0000"), 5, 25),
    ])
}
