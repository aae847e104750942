/*!
 * Process Module
 * Simulated processes and workload loading
 */

pub mod loader;
pub mod types;

pub use loader::{load_from_file, load_from_str, LoaderResult};
pub use types::{Process, ProcessState};
