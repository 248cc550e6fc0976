//! Worker thread pool
//!
//! Builds the rayon pool the fan-out runs on. A requested thread count of 0
//! means one thread per CPU.

use crate::Result;
use anyhow::Context;
use rayon::ThreadPool;
use tracing::warn;

/// Get the number of CPU cores available on the system
///
/// # Example
///
/// ```
/// use gwsearch::worker::pool::num_cpus;
///
/// let cpus = num_cpus();
/// assert!(cpus > 0);
/// ```
pub fn num_cpus() -> usize {
    num_cpus::get()
}

/// Resolve a configured thread count (0 = all CPUs)
pub fn resolve_threads(requested: usize) -> usize {
    if requested == 0 {
        num_cpus()
    } else {
        requested
    }
}

/// Check if thread count exceeds CPU count and warn if so
///
/// # Returns
///
/// True if thread count exceeds CPU count, false otherwise.
pub fn warn_if_oversubscribed(thread_count: usize) -> bool {
    let cpu_count = num_cpus();
    if thread_count > cpu_count {
        warn!(
            threads = thread_count,
            cpus = cpu_count,
            "thread count exceeds CPU count, expect context switching overhead"
        );
        true
    } else {
        false
    }
}

/// Build the fan-out thread pool
///
/// # Errors
///
/// Fails if rayon cannot spawn the worker threads.
pub fn build_pool(requested: usize) -> Result<ThreadPool> {
    let threads = resolve_threads(requested);
    warn_if_oversubscribed(threads);

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("gwsearch-worker-{}", i))
        .build()
        .context("Failed to build worker thread pool")
}
