mod common;

use std::fs;
use tempfile::tempdir;

use common::{FakeTool, jpeg_with_date_time_original, jpeg_without_exif, set_local_mtime, undated, write};
use media_sort::{Config, DateResolver, MediaSortError, MissingDatePolicy, sweep};

fn config(dir: &std::path::Path) -> Config {
    let mut cfg = Config::sweep(dir);
    cfg.threads = 4;
    cfg
}

#[test]
fn jpeg_with_exif_lands_in_year_month() {
    let td = tempdir().unwrap();
    let src = write(&td.path().join("a.jpg"), &jpeg_with_date_time_original("2022:03:15 10:00:00"));

    let summary = sweep(&config(td.path()), &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.moved, 1);
    assert!(!src.exists());
    assert!(td.path().join("2022").join("03").join("a.jpg").is_file());
}

#[test]
fn heic_without_tool_date_falls_back_to_mtime() {
    let td = tempdir().unwrap();
    let src = write(&td.path().join("b.heic"), b"heic");
    set_local_mtime(&src, 2021, 7, 1);

    let resolver = DateResolver::new(FakeTool::new().with_output("b.heic", ""));
    let summary = sweep(&config(td.path()), &resolver).unwrap();

    assert_eq!(summary.moved, 1);
    assert_eq!(summary.undated, 0);
    assert!(td.path().join("2021").join("07").join("b.heic").is_file());
}

#[test]
fn gif_and_unknown_files_use_mtime() {
    let td = tempdir().unwrap();
    let gif = write(&td.path().join("anim.gif"), b"GIF89a");
    let txt = write(&td.path().join("notes.txt"), b"hello");
    set_local_mtime(&gif, 2021, 7, 1);
    set_local_mtime(&txt, 2018, 12, 24);

    let summary = sweep(&config(td.path()), &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.moved, 2);
    assert!(td.path().join("2021").join("07").join("anim.gif").is_file());
    assert!(td.path().join("2018").join("12").join("notes.txt").is_file());
    assert!(!undated(td.path()).exists());
}

#[test]
fn sentinel_video_uses_mtime_in_sweep() {
    let td = tempdir().unwrap();
    let clip = write(&td.path().join("clip.mp4"), b"mp4");
    set_local_mtime(&clip, 2017, 5, 9);

    let resolver = DateResolver::new(FakeTool::new().with_output("clip.mp4", "0000:00:00 00:00:00"));
    sweep(&config(td.path()), &resolver).unwrap();

    assert!(td.path().join("2017").join("05").join("clip.mp4").is_file());
}

#[test]
fn subdirectories_are_not_descended_or_moved() {
    let td = tempdir().unwrap();
    let nested = write(
        &td.path().join("2020").join("01").join("old.jpg"),
        &jpeg_with_date_time_original("2022:03:15 10:00:00"),
    );
    write(&td.path().join("inbox").join("later.jpg"), &jpeg_without_exif());

    let summary = sweep(&config(td.path()), &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.total(), 0);
    assert!(nested.is_file());
    assert!(td.path().join("inbox").join("later.jpg").is_file());
}

#[test]
fn same_name_at_destination_is_skipped_and_source_kept() {
    let td = tempdir().unwrap();
    let dest_dir = td.path().join("2022").join("03");
    write(&dest_dir.join("a.jpg"), b"already organized");
    let src = write(&td.path().join("a.jpg"), &jpeg_with_date_time_original("2022:03:01 09:00:00"));

    let summary = sweep(&config(td.path()), &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.skipped_duplicate, 1);
    assert_eq!(summary.moved, 0);
    assert!(src.is_file());
    assert_eq!(fs::read(dest_dir.join("a.jpg")).unwrap(), b"already organized");
}

#[test]
fn second_run_moves_nothing() {
    let td = tempdir().unwrap();
    for i in 0..20 {
        write(
            &td.path().join(format!("img{i:02}.jpg")),
            &jpeg_with_date_time_original(&format!("2023:{:02}:10 12:00:00", i % 12 + 1)),
        );
    }
    let resolver = DateResolver::new(FakeTool::new());

    let first = sweep(&config(td.path()), &resolver).unwrap();
    let second = sweep(&config(td.path()), &resolver).unwrap();

    assert_eq!(first.moved, 20);
    assert_eq!(first.failed, 0);
    assert_eq!(second.moved, 0);
    for m in 1..=12 {
        assert!(td.path().join("2023").join(format!("{m:02}")).is_dir());
    }
}

#[test]
fn separate_root_receives_files() {
    let td = tempdir().unwrap();
    let source = td.path().join("camera");
    let root = td.path().join("library");
    fs::create_dir_all(&root).unwrap();
    write(&source.join("a.jpg"), &jpeg_with_date_time_original("2016:02:29 23:59:59"));

    let mut cfg = config(&source);
    cfg.root_dir = root.clone();
    sweep(&cfg, &DateResolver::new(FakeTool::new())).unwrap();

    assert!(root.join("2016").join("02").join("a.jpg").is_file());
    assert!(!source.join("2016").exists());
}

#[test]
fn undated_policy_override_applies_to_sweep() {
    let td = tempdir().unwrap();
    write(&td.path().join("anim.gif"), b"GIF89a");

    let mut cfg = config(td.path());
    cfg.missing_date = Some(MissingDatePolicy::Undated);
    let summary = sweep(&cfg, &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.undated, 1);
    assert!(undated(td.path()).join("anim.gif").is_file());
}

#[test]
fn dry_run_changes_nothing() {
    let td = tempdir().unwrap();
    let src = write(&td.path().join("a.jpg"), &jpeg_with_date_time_original("2022:03:15 10:00:00"));

    let mut cfg = config(td.path());
    cfg.dry_run = true;
    let summary = sweep(&cfg, &DateResolver::new(FakeTool::new())).unwrap();

    assert_eq!(summary.moved, 1);
    assert!(src.is_file());
    assert!(!td.path().join("2022").exists());
}

#[test]
fn missing_source_is_fatal() {
    let td = tempdir().unwrap();
    let err = sweep(&config(&td.path().join("nope")), &DateResolver::new(FakeTool::new())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MediaSortError>(),
        Some(MediaSortError::SourceRootMissing(_))
    ));
}
