use assert_fs::prelude::*;
use filetime::{FileTime, set_file_mtime};
use std::process::Command;

fn bin(config_dir: &std::path::Path) -> Command {
    let me = assert_cmd::cargo::cargo_bin!("media_sort");
    let mut cmd = Command::new(me);
    // Never pick up a real user config.
    cmd.env("MEDIA_SORT_CONFIG", config_dir.join("absent.xml"));
    cmd
}

#[test]
fn binary_print_config_succeeds() {
    let td = assert_fs::TempDir::new().unwrap();
    let out = bin(td.path()).arg("--print-config").output().expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("absent.xml"), "stdout: {stdout}");
}

#[test]
fn sweep_moves_file_by_mtime() {
    let td = assert_fs::TempDir::new().unwrap();
    let photos = td.child("photos");
    let note = photos.child("note.txt");
    note.write_str("hello").unwrap();
    // 2020-06-15 12:00:00 UTC; mid-month so any local offset stays in June.
    set_file_mtime(note.path(), FileTime::from_unix_time(1_592_222_400, 0)).unwrap();

    let out = bin(td.path())
        .arg("sweep")
        .arg(photos.path())
        .arg("--exiftool")
        .arg(td.path().join("no-exiftool"))
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(!note.path().exists());
    photos.child("2020").child("06").child("note.txt").assert("hello");
}

#[test]
fn dry_run_leaves_tree_alone() {
    let td = assert_fs::TempDir::new().unwrap();
    let photos = td.child("photos");
    let clip = photos.child("clip.mov");
    clip.write_binary(b"mov").unwrap();

    let out = bin(td.path())
        .args(["--dry-run", "sweep"])
        .arg(photos.path())
        .arg("--exiftool")
        .arg(td.path().join("no-exiftool"))
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(clip.path().is_file());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("would move"), "stdout: {stdout}");
}

#[test]
fn missing_source_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    let out = bin(td.path())
        .arg("reconcile")
        .arg(td.path().join("nope"))
        .arg(td.path().join("root"))
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "missing import directory must be fatal");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
}

#[test]
fn no_subcommand_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    let out = bin(td.path()).output().expect("spawn binary");
    assert!(!out.status.success());
}

#[test]
fn malformed_config_file_fails() {
    let td = assert_fs::TempDir::new().unwrap();
    let cfg = td.child("config.xml");
    cfg.write_str("<config><threads>lots</threads></config>").unwrap();
    td.child("photos").create_dir_all().unwrap();

    let out = Command::new(assert_cmd::cargo::cargo_bin!("media_sort"))
        .env("MEDIA_SORT_CONFIG", cfg.path())
        .arg("sweep")
        .arg(td.child("photos").path())
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("config.xml"), "stderr: {stderr}");
}
