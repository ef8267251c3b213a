//! Exit codes of the compiled binary
//!
//! HOME points at an empty temp dir so no user config is picked up.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_bin(args: &[&str], home: &Path, path_env: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_resume-booklet"));
    cmd.args(args)
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    if let Some(path) = path_env {
        cmd.env("PATH", path);
    }
    cmd.output().expect("failed to launch resume-booklet")
}

#[test]
fn test_wrong_argument_count_exits_1() {
    let home = tempdir().unwrap();
    let output = run_bin(&["only-one.csv"], home.path(), None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_0() {
    let home = tempdir().unwrap();
    let output = run_bin(&["--help"], home.path(), None);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("MEMBERS_CSV"));
}

#[test]
fn test_missing_csv_exits_1() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("missing.csv");
    let output = run_bin(
        &[csv.to_str().unwrap(), dir.path().to_str().unwrap()],
        dir.path(),
        None,
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Members CSV does not exist"));
}

#[test]
fn test_missing_folder_exits_1() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("members.csv");
    std::fs::write(&csv, "Name,a,b,Email\n").unwrap();
    let folder = dir.path().join("no-folder");
    let output = run_bin(
        &[csv.to_str().unwrap(), folder.to_str().unwrap()],
        dir.path(),
        None,
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resume folder does not exist"));
}

/// PATH holds `which` and a pdfunite stand-in but no converter, and the CSV
/// is not even valid UTF-8: the converter probe must fail first.
#[cfg(unix)]
#[test]
fn test_missing_converter_exits_1_before_parsing() {
    let which = ["/usr/bin/which", "/bin/which"]
        .iter()
        .map(Path::new)
        .find(|p| p.exists());
    let Some(which) = which else {
        eprintln!("which not installed, skipping");
        return;
    };

    let dir = tempdir().unwrap();
    let bin = dir.path().join("bin");
    std::fs::create_dir(&bin).unwrap();
    std::os::unix::fs::symlink(which, bin.join("which")).unwrap();

    let merger = bin.join("pdfunite");
    std::fs::write(&merger, "#!/bin/sh\nexit 0\n").unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&merger, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    let csv = dir.path().join("members.csv");
    std::fs::write(&csv, b"\xff\xfe\xfd\n\xff,\xfe\n").unwrap();
    let folder = dir.path().join("resumes");
    std::fs::create_dir(&folder).unwrap();

    let output = run_bin(
        &[csv.to_str().unwrap(), folder.to_str().unwrap()],
        dir.path(),
        Some(&bin),
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No command found to convert doc to pdf"), "stderr: {stderr}");
    assert!(stderr.contains("lowriter"));
    assert!(!folder.join(".working-pdfs").exists());
}

#[cfg(unix)]
#[test]
fn test_missing_merger_exits_1() {
    let dir = tempdir().unwrap();
    let empty_bin = dir.path().join("bin");
    std::fs::create_dir(&empty_bin).unwrap();

    let csv = dir.path().join("members.csv");
    std::fs::write(&csv, "Name,a,b,Email\n").unwrap();

    let output = run_bin(
        &[csv.to_str().unwrap(), dir.path().to_str().unwrap()],
        dir.path(),
        Some(&empty_bin),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("pdfunite not found"));
}
