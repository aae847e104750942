/*!
 * Process Loader
 * Read process lists from JSON workload files
 */

use super::types::Process;
use crate::core::errors::LoaderError;
use crate::core::types::{Pid, Size, Tick};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Loader operation result
pub type LoaderResult<T> = Result<T, LoaderError>;

/// One process entry of a workload file
#[derive(Debug, Clone, Deserialize)]
struct ProcessRecord {
    process_id: Pid,
    arrival_time: Tick,
    burst_time: Tick,
    memory_required: Size,
}

/// Workload file layout: `{"processes": [...]}`
#[derive(Debug, Deserialize)]
struct Workload {
    processes: Vec<ProcessRecord>,
}

/// Load processes from a JSON workload file
pub fn load_from_file(path: impl AsRef<Path>) -> LoaderResult<Vec<Process>> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoaderError::NotFound(display.clone())
        } else {
            LoaderError::Io {
                path: display.clone(),
                source,
            }
        }
    })?;

    let processes = load_from_str(&contents)?;
    info!("Loaded {} processes from {}", processes.len(), display);
    Ok(processes)
}

/// Load processes from a JSON workload string
pub fn load_from_str(json: &str) -> LoaderResult<Vec<Process>> {
    let workload: Workload = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(workload.processes.len());

    workload
        .processes
        .into_iter()
        .map(|record| {
            let process = Process::new(
                record.process_id,
                record.arrival_time,
                record.burst_time,
                record.memory_required,
            );
            let reason = process
                .invalid_reason()
                .or_else(|| (!seen.insert(process.pid)).then_some("duplicate process_id"));
            match reason {
                Some(reason) => Err(LoaderError::InvalidRecord {
                    pid: process.pid,
                    reason: reason.to_string(),
                }),
                None => Ok(process),
            }
        })
        .collect()
}
