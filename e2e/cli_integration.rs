// e2e/cli_integration.rs — CLI integration tests
//
// Drives the `smallz4` binary as a black box through std::process::Command:
// formats, levels, dictionaries, stdin/stdout, refusals and exit codes.

#[path = "../tests/support/mod.rs"]
mod support;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use support::{decode_frame, decode_frame_with_dict, decode_gameboy, decode_legacy, word_salad};

fn smallz4_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_smallz4"))
}

fn make_temp_input() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let content = word_salad(50_000, 40);
    fs::write(&input, &content).unwrap();
    (dir, input, content)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(smallz4_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run smallz4")
}

// ── Compression ──────────────────────────────────────────────────────────────

#[test]
fn compresses_a_file_to_a_modern_frame() {
    let (dir, _, content) = make_temp_input();
    let out = run(dir.path(), &["input.txt", "input.txt.lz4"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let compressed = fs::read(dir.path().join("input.txt.lz4")).unwrap();
    assert!(compressed.len() < content.len());
    assert_eq!(decode_frame(&compressed), content);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Compressed 50000 bytes into"), "stderr: {}", stderr);
}

#[test]
fn combined_flags_select_level_and_overwrite() {
    let (dir, _, content) = make_temp_input();
    fs::write(dir.path().join("out.lz4"), b"old").unwrap();

    let out = run(dir.path(), &["-f7", "input.txt", "out.lz4"]);
    assert!(out.status.success());
    let level7 = fs::read(dir.path().join("out.lz4")).unwrap();
    assert_eq!(decode_frame(&level7), content);

    let out = run(dir.path(), &["-f", "-1", "input.txt", "out.lz4"]);
    assert!(out.status.success());
    let level1 = fs::read(dir.path().join("out.lz4")).unwrap();
    assert_eq!(decode_frame(&level1), content);
    assert_ne!(level7, level1);
}

#[test]
fn level_zero_stores_the_input() {
    let (dir, _, content) = make_temp_input();
    let out = run(dir.path(), &["-0", "input.txt", "stored.lz4"]);
    assert!(out.status.success());
    let compressed = fs::read(dir.path().join("stored.lz4")).unwrap();
    assert_eq!(compressed.len(), content.len() + 15);
    assert_eq!(decode_frame(&compressed), content);
}

#[test]
fn legacy_and_gameboy_formats() {
    let (dir, _, content) = make_temp_input();

    let out = run(dir.path(), &["-l", "input.txt", "legacy.lz4"]);
    assert!(out.status.success());
    let legacy = fs::read(dir.path().join("legacy.lz4")).unwrap();
    assert_eq!(&legacy[..4], &[0x02, 0x21, 0x4C, 0x18]);
    assert_eq!(decode_legacy(&legacy), content);

    let out = run(dir.path(), &["-g", "input.txt", "gb.lz4"]);
    assert!(out.status.success());
    let gameboy = fs::read(dir.path().join("gb.lz4")).unwrap();
    assert_eq!(decode_gameboy(&gameboy, &[]), content);
}

#[test]
fn dictionary_flag_primes_the_first_block() {
    let (dir, _, content) = make_temp_input();
    fs::write(dir.path().join("dict.bin"), &content[10_000..40_000]).unwrap();

    let out = run(dir.path(), &["-D", "dict.bin", "input.txt", "primed.lz4"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let primed = fs::read(dir.path().join("primed.lz4")).unwrap();
    assert_eq!(decode_frame_with_dict(&primed, &content[10_000..40_000]), content);

    let out = run(dir.path(), &["input.txt", "plain.lz4"]);
    assert!(out.status.success());
    let plain = fs::read(dir.path().join("plain.lz4")).unwrap();
    assert!(primed.len() < plain.len());
}

#[test]
fn stdin_to_stdout() {
    let content = word_salad(20_000, 41);
    let mut child = Command::new(smallz4_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn smallz4");
    child.stdin.take().unwrap().write_all(&content).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert_eq!(decode_frame(&out.stdout), content);
    // the summary line is suppressed when stdout carries the data
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn dash_means_stdin() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(smallz4_bin())
        .args(["-", "piped.lz4"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"from a pipe").unwrap();
    assert!(child.wait().unwrap().success());
    let compressed = fs::read(dir.path().join("piped.lz4")).unwrap();
    assert_eq!(decode_frame(&compressed), b"from a pipe");
}

// ── Refusals ─────────────────────────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let (dir, _, _) = make_temp_input();
    let target = dir.path().join("exists.lz4");
    fs::write(&target, b"keep me").unwrap();

    let out = run(dir.path(), &["input.txt", "exists.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(&target).unwrap(), b"keep me");
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));
}

#[test]
fn legacy_with_dictionary_fails_before_opening_files() {
    let (dir, _, _) = make_temp_input();
    fs::write(dir.path().join("dict.bin"), b"some dictionary").unwrap();

    let out = run(dir.path(), &["-l", "-D", "dict.bin", "input.txt", "never.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("never.lz4").exists());
    assert!(String::from_utf8_lossy(&out.stderr).contains("dictionar"));
}

#[test]
fn legacy_level_zero_fails() {
    let (dir, _, _) = make_temp_input();
    let out = run(dir.path(), &["-l0", "input.txt", "never.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("never.lz4").exists());
}

#[test]
fn bad_usage_exits_with_one() {
    let (dir, _, _) = make_temp_input();
    for args in [&["-x", "input.txt"][..], &["-12", "input.txt"][..], &["a", "b", "c"][..], &["-D"][..]] {
        let out = run(dir.path(), args);
        assert_eq!(out.status.code(), Some(1), "args {:?}", args);
        assert!(String::from_utf8_lossy(&out.stderr).contains("ERROR"), "args {:?}", args);
    }
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["no-such-file", "out.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.lz4").exists());
}

// ── Help and verbosity ───────────────────────────────────────────────────────

#[test]
fn help_lists_the_flags() {
    let dir = TempDir::new().unwrap();
    let out = run(dir.path(), &["-h"]);
    assert!(out.status.success());
    let help = String::from_utf8_lossy(&out.stdout);
    for flag in ["-0", "-9", "-D", "-f", "-g", "-h", "-l"] {
        assert!(help.contains(flag), "help is missing {}", flag);
    }
}

#[test]
fn quiet_suppresses_the_summary() {
    let (dir, _, _) = make_temp_input();
    let out = run(dir.path(), &["-q", "input.txt", "quiet.lz4"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}
