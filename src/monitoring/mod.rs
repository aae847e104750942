/*!
 * Monitoring Module
 * Logging and tracing setup
 */

mod tracer;

pub use tracer::{init_tracing, span_simulation};
