/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use super::types::Pid;
use miette::Diagnostic;
use thiserror::Error;

/// Configuration result
pub type SimResult<T> = Result<T, ConfigError>;

/// Configuration errors, fatal at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Unknown allocation strategy: {0}")]
    #[diagnostic(
        code(config::unknown_strategy),
        help("Valid strategies: first_fit, best_fit")
    )]
    UnknownStrategy(String),

    #[error("Unknown scheduling algorithm: {0}")]
    #[diagnostic(
        code(config::unknown_policy),
        help("Valid algorithms: FCFS, RR")
    )]
    UnknownPolicy(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("Round-robin needs a quantum of at least one tick.")
    )]
    InvalidQuantum(u64),

    #[error("Invalid memory size: {0}")]
    #[diagnostic(
        code(config::invalid_memory_size),
        help("Total memory must be a positive number of units.")
    )]
    InvalidMemorySize(usize),

    #[error("Invalid memory layout: {0}")]
    #[diagnostic(
        code(config::invalid_layout),
        help("Blocks must be ascending, non-empty, contiguous and start at 0.")
    )]
    InvalidLayout(String),

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(config::invalid_process),
        help("Processes need a positive burst_time and memory_required.")
    )]
    InvalidProcess { pid: Pid, reason: String },
}

/// Process loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoaderError {
    #[error("File '{0}' not found")]
    #[diagnostic(
        code(loader::not_found),
        help("Check the path passed with --file.")
    )]
    NotFound(String),

    #[error("Failed to read '{path}': {source}")]
    #[diagnostic(code(loader::io_error))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse process list: {0}")]
    #[diagnostic(
        code(loader::parse_error),
        help("Expected an object with a \"processes\" array of process_id, arrival_time, burst_time and memory_required records.")
    )]
    Parse(#[from] serde_json::Error),

    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(code(loader::invalid_record))]
    InvalidRecord { pid: Pid, reason: String },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Loader error: {0}")]
    #[diagnostic(transparent)]
    Loader(#[from] LoaderError),
}
