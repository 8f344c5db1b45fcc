#![cfg(feature = "cli")]

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn update_version() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_update-version"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_version_prints_usage_and_exits_1() -> Result<()> {
    let output = update_version().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Usage: update-version <version>"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_patches_release_tree_under_root() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let release = temp_dir.path().join("release_building");
    fs::create_dir_all(&release)?;
    fs::write(release.join("installer.nsi"), "!define VERSION \"0.1\"\nName x\n")?;
    fs::write(release.join("win.bat"), "@echo off\r\nset \"_VERSION_=0.1\"\r\n")?;

    let output = update_version()
        .arg("0.2.0")
        .arg("--root")
        .arg(temp_dir.path())
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        fs::read_to_string(release.join("installer.nsi"))?,
        "!define VERSION \"0.2.0\"\nName x\n"
    );
    assert_eq!(
        fs::read_to_string(release.join("win.bat"))?,
        "@echo off\r\nset \"_VERSION_=0.2.0\"\r\n"
    );
    Ok(())
}

#[test]
fn test_strict_fails_when_prefix_missing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let release = temp_dir.path().join("release_building");
    fs::create_dir_all(&release)?;
    fs::write(release.join("installer.nsi"), "!define VERSION \"0.1\"\n")?;
    fs::write(release.join("win.bat"), "@echo off\r\n")?;

    let output = update_version()
        .args(["0.2.0", "--strict", "--root"])
        .arg(temp_dir.path())
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(fs::read_to_string(release.join("win.bat"))?, "@echo off\r\n");
    Ok(())
}
