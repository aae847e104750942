/*!
 * Workload Loader Tests
 * Reading process lists from JSON files on disk
 */

use kernel_sim::process::{load_from_file, load_from_str};
use kernel_sim::{LoaderError, Process, ProcessState, SchedulerBuilder};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"{
    "processes": [
        {"process_id": 1, "arrival_time": 0, "burst_time": 10, "memory_required": 150},
        {"process_id": 2, "arrival_time": 2, "burst_time": 4, "memory_required": 150},
        {"process_id": 3, "arrival_time": 4, "burst_time": 6, "memory_required": 200}
    ]
}"#;

fn workload_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_sample_workload() {
    let file = workload_file(SAMPLE);
    let processes = load_from_file(file.path()).unwrap();

    assert_eq!(
        processes,
        vec![
            Process::new(1, 0, 10, 150),
            Process::new(2, 2, 4, 150),
            Process::new(3, 4, 6, 200),
        ]
    );
    assert!(processes.iter().all(|p| p.state == ProcessState::Unarrived));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_from_file(&path).unwrap_err();

    assert!(matches!(err, LoaderError::NotFound(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_file(dir.path()).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = workload_file("{\"processes\": [");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, LoaderError::Parse(_)));
}

#[test]
fn test_extra_fields_are_ignored() {
    let processes = load_from_str(
        r#"{"processes": [{"process_id": 9, "arrival_time": 1, "burst_time": 2, "memory_required": 3, "name": "x"}]}"#,
    )
    .unwrap();
    assert_eq!(processes, vec![Process::new(9, 1, 2, 3)]);
}

#[test]
fn test_loaded_workload_runs() {
    let file = workload_file(SAMPLE);
    let processes = load_from_file(file.path()).unwrap();

    let mut sched = SchedulerBuilder::new().build();
    sched.run(processes).unwrap();

    let completions: Vec<_> = sched
        .completed()
        .iter()
        .map(|p| p.completion_time)
        .collect();
    assert_eq!(completions, vec![Some(10), Some(14), Some(20)]);
}
