use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const SINGLE_CAR: &str = "3 2 2 1 1\n0 1 A 1\n1 0 B 1\n1 A\n";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "traffic-sim-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn score(input: &PathBuf, schedule: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_score_schedule"))
        .args([
            "--input",
            input.to_str().unwrap(),
            "--schedule",
            schedule.to_str().unwrap(),
        ])
        .output()
        .expect("run score_schedule")
}

#[test]
fn score_schedule_prints_score_for_submission() {
    let dir = unique_temp_dir("score");
    let input = write_file(&dir, "single.txt", SINGLE_CAR);
    let green = write_file(&dir, "green.out", "1\n1\n1\nA 1\n");
    let none = write_file(&dir, "none.out", "0\n");

    let output = score(&input, &green);
    assert!(
        output.status.success(),
        "score_schedule failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "score=1 finished=1/1");

    let output = score(&input, &none);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "score=0 finished=0/1");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn score_schedule_rejects_invalid_submission() {
    let dir = unique_temp_dir("score-invalid");
    let input = write_file(&dir, "single.txt", SINGLE_CAR);
    // B 不在路口 1 结束
    let wrong = write_file(&dir, "wrong.out", "1\n1\n1\nB 1\n");
    let too_long = write_file(&dir, "long.out", "1\n1\n1\nA 9\n");

    for schedule in [&wrong, &too_long] {
        let output = score(&input, schedule);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
    }

    let _ = fs::remove_dir_all(&dir);
}
