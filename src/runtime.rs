//! Shared Runtime
//!
//! Backs the blocking entrypoints so sync callers don't need their own.

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

const WORKER_THREADS: usize = 2;

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(WORKER_THREADS)
        .thread_name("metascrape-worker")
        .enable_all()
        .build()
        .expect("failed to build metascrape runtime")
});

/// Run a future to completion on the shared runtime.
pub(crate) fn block_on<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    RUNTIME.block_on(future)
}
