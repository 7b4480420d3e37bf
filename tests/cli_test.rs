use assert_cmd::Command;
use phrasegen::manifest::Manifest;
use phrasegen::naming::audio_filename;
use phrasegen::phrases::PHRASES;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

// Connection refused immediately; no request ever leaves the machine.
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/translate_tts";

fn seed_phrase(out_dir: &Path, index: usize) {
    fs::create_dir_all(out_dir).unwrap();
    let filename = audio_filename(index, PHRASES[index]);
    fs::write(out_dir.join(filename), b"fake mp3 bytes").unwrap();
}

fn read_manifest(out_dir: &Path) -> Manifest {
    let raw = fs::read_to_string(out_dir.join("manifest.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn no_args_run_skips_existing_files_and_lists_them_all() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("audio");
    for index in 0..PHRASES.len() {
        seed_phrase(&out_dir, index);
    }

    Command::cargo_bin("phrasegen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("exists, skipping"))
        .stdout(predicate::str::contains(format!(
            "Complete: {n}/{n} audio files present",
            n = PHRASES.len()
        )));

    let manifest = read_manifest(&out_dir);
    assert_eq!(manifest.phrases.len(), PHRASES.len());
    for (i, entry) in manifest.phrases.iter().enumerate() {
        assert_eq!(entry.index, i);
        assert_eq!(entry.text, PHRASES[i]);
        assert_eq!(entry.file, format!("audio/{}", audio_filename(i, PHRASES[i])));
        assert_eq!(entry.size, "fake mp3 bytes".len() as u64);
    }
}

#[test]
fn failed_fetches_do_not_stop_the_run_or_enter_the_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("audio");
    seed_phrase(&out_dir, 0);
    seed_phrase(&out_dir, 12);

    Command::cargo_bin("phrasegen")
        .unwrap()
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--endpoint")
        .arg(UNREACHABLE_ENDPOINT)
        .arg("--delay-ms")
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::contains(format!(
            "Complete: 2/{} audio files present",
            PHRASES.len()
        )));

    let indices: Vec<usize> = read_manifest(&out_dir)
        .phrases
        .iter()
        .map(|e| e.index)
        .collect();
    assert_eq!(indices, vec![0, 12]);
}

#[test]
fn second_run_after_deleting_one_file_refetches_only_that_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("audio");
    for index in 0..PHRASES.len() {
        seed_phrase(&out_dir, index);
    }
    let deleted = audio_filename(5, PHRASES[5]);
    fs::remove_file(out_dir.join(&deleted)).unwrap();

    let output = Command::cargo_bin("phrasegen")
        .unwrap()
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--endpoint")
        .arg(UNREACHABLE_ENDPOINT)
        .arg("--delay-ms")
        .arg("0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("    error:").count(), 1);
    assert_eq!(
        stdout.matches("exists, skipping").count(),
        PHRASES.len() - 1
    );

    let manifest = read_manifest(&out_dir);
    assert_eq!(manifest.phrases.len(), PHRASES.len() - 1);
    assert!(manifest.phrases.iter().all(|e| e.index != 5));
}

#[test]
fn manifest_only_rebuilds_from_disk_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("audio");
    seed_phrase(&out_dir, 3);
    seed_phrase(&out_dir, 7);

    Command::cargo_bin("phrasegen")
        .unwrap()
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--manifest-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 entries)"));

    let indices: Vec<usize> = read_manifest(&out_dir)
        .phrases
        .iter()
        .map(|e| e.index)
        .collect();
    assert_eq!(indices, vec![3, 7]);
}

#[test]
fn manifest_only_on_empty_directory_writes_an_empty_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("audio");

    Command::cargo_bin("phrasegen")
        .unwrap()
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--manifest-only")
        .assert()
        .success();

    assert!(read_manifest(&out_dir).phrases.is_empty());
}
