//! Request execution and worker orchestration.
mod client;
mod execution;
mod generator;
mod outcome;
mod settings;
mod worker;

#[cfg(test)]
mod test_support;

pub use client::build_client;
pub use generator::run_load;
pub use outcome::{RequestOutcome, WorkerExit, WorkerReport};
pub use settings::{LoadSettings, RunMode};
