//! Integration tests for the `pdfsift-images` binary.

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{jpeg_bytes, three_page_atlas, write_pdf};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pdfsift-images").unwrap();
    cmd.env_remove("PDFSIFT_BACKEND").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "pdfsift-images <pdf_file_path> [output_dir]",
        ));
}

#[test]
fn test_missing_file_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    cmd()
        .arg(dir.path().join("ghost.pdf"))
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("PDF file not found"))
        .stderr(predicate::str::contains("ghost.pdf"));

    assert!(!out.exists());
}

#[test]
fn test_three_page_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(dir.path(), "atlas.pdf", &three_page_atlas());
    let out = dir.path().join("out");

    cmd()
        .arg(&pdf)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete!"))
        .stdout(predicate::str::contains("Total pages: 3"))
        .stdout(predicate::str::contains("Total images: 2"))
        .stdout(predicate::str::contains("extracted_content.json"));

    let json = fs::read_to_string(out.join("extracted_content.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_images"], 2);
    assert_eq!(value["content"][1]["images"], serde_json::json!([]));
    assert_eq!(
        value["content"][0]["images"][0]["filename"],
        "anatomy-page-1-image-1.jpg"
    );

    let images = out.join("images");
    assert_eq!(fs::read_dir(&images).unwrap().count(), 2);
    assert_eq!(
        fs::read(images.join("anatomy-page-3-image-1.jpg")).unwrap(),
        jpeg_bytes(2)
    );
}

#[test]
fn test_default_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(dir.path(), "atlas.pdf", &three_page_atlas());

    cmd().current_dir(dir.path()).arg(&pdf).assert().success();

    let out = dir.path().join("extracted_content");
    assert!(out.join("extracted_content.json").is_file());
    assert!(out.join("images").is_dir());
}

#[test]
fn test_rerun_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(dir.path(), "atlas.pdf", &three_page_atlas());
    let out = dir.path().join("out");

    cmd().arg(&pdf).arg(&out).assert().success();
    cmd()
        .arg(&pdf)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total images: 2"));

    assert_eq!(fs::read_dir(out.join("images")).unwrap().count(), 2);
}

#[test]
fn test_extra_arguments_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = write_pdf(dir.path(), "atlas.pdf", &three_page_atlas());
    let out = dir.path().join("out");

    cmd()
        .arg(&pdf)
        .arg(&out)
        .arg("surplus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total images: 2"));

    assert!(out.join("extracted_content.json").is_file());
    assert!(!dir.path().join("surplus").exists());
}
