use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clipcast() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipcast"));
    // keep simulated delays short
    cmd.env("CLIPCAST_TIMING__GENERATION_MS", "10")
        .env("CLIPCAST_TIMING__UPLOAD_MS", "5")
        .env("CLIPCAST_TIMING__SHARE_MS", "5");
    cmd
}

#[test]
fn test_cli_help() {
    clipcast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Video Generator"));
}

#[test]
fn test_cli_platforms() {
    clipcast()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("youtube-shorts"))
        .stdout(predicate::str::contains("Instagram Reels"))
        .stdout(predicate::str::contains("1280×720"));
}

#[test]
fn test_cli_platforms_json() {
    let output = clipcast().arg("platforms").arg("--json").output().unwrap();
    assert!(output.status.success());

    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let profiles = profiles.as_array().unwrap();
    assert_eq!(profiles.len(), 6);
    assert_eq!(profiles[5]["id"], "youtube-video");
    assert_eq!(profiles[5]["max_duration_seconds"], 300);
}

#[test]
fn test_cli_describe() {
    clipcast()
        .arg("describe")
        .arg("youtube-video")
        .assert()
        .success()
        .stdout(predicate::str::contains("1920×1080 (16:9)"))
        .stdout(predicate::str::contains("YouTube Video Format"));
}

#[test]
fn test_cli_unknown_platform_rejected() {
    clipcast()
        .arg("describe")
        .arg("myspace")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_validate_clamps_duration() {
    clipcast()
        .arg("validate")
        .arg("a long landscape travel montage")
        .arg("--platform")
        .arg("youtube-video")
        .arg("--duration")
        .arg("400")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "YouTube Video maximum duration is 300 seconds",
        ))
        .stdout(predicate::str::contains("300 seconds"))
        .stdout(predicate::str::contains("1920×1080"))
        .stdout(predicate::str::contains("Validation complete"));
}

#[test]
fn test_cli_validate_short_prompt_fails() {
    clipcast()
        .arg("validate")
        .arg("short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10 characters"));
}

#[test]
fn test_cli_generate_writes_artifact() {
    let dir = TempDir::new().unwrap();

    clipcast()
        .arg("generate")
        .arg("a fox running through fresh snow")
        .arg("--platform")
        .arg("tiktok")
        .arg("--duration")
        .arg("90")
        .arg("--output")
        .arg(dir.path())
        .arg("--upload")
        .arg("--share")
        .assert()
        .success()
        .stdout(predicate::str::contains("Video Generated Successfully!"))
        .stdout(predicate::str::contains("Uploaded to YouTube Successfully!"))
        .stdout(predicate::str::contains("Shared to TikTok Successfully!"));

    let files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("ai-video-tiktok-"));

    let content = fs::read_to_string(dir.path().join(&files[0])).unwrap();
    assert!(content.starts_with("AI Video Generated for: a fox running throug..."));
    assert!(content.contains("Platform: TikTok"));
}

#[test]
fn test_cli_generate_no_download() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("never");

    clipcast()
        .arg("generate")
        .arg("a fox running through fresh snow")
        .arg("--output")
        .arg(&out)
        .arg("--no-download")
        .assert()
        .success();

    assert!(!out.exists());
}

#[test]
fn test_cli_config_env_override() {
    clipcast()
        .arg("config")
        .env("CLIPCAST_DEFAULTS__PLATFORM", "facebook-reels")
        .assert()
        .success()
        .stdout(predicate::str::contains("platform = \"facebook-reels\""))
        .stdout(predicate::str::contains("generation_ms = 10"));
}

#[test]
fn test_cli_explicit_duration_ignores_default_clamp() {
    clipcast()
        .env("CLIPCAST_DEFAULTS__PLATFORM", "youtube-video")
        .env("CLIPCAST_DEFAULTS__DURATION", "120")
        .arg("validate")
        .arg("a fox running through fresh snow")
        .arg("--platform")
        .arg("tiktok")
        .arg("--duration")
        .arg("45")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning").not())
        .stdout(predicate::str::contains("Duration: 45 seconds"));
}

#[test]
fn test_cli_default_duration_clamp_is_reported() {
    clipcast()
        .env("CLIPCAST_DEFAULTS__DURATION", "120")
        .arg("validate")
        .arg("a fox running through fresh snow")
        .arg("--platform")
        .arg("tiktok")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "TikTok maximum duration is 60 seconds",
        ))
        .stdout(predicate::str::contains("Duration reset from 120s to 60s"))
        .stdout(predicate::str::contains("Duration: 60 seconds"));
}
