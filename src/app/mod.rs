//! Wherein application module: terminal handling and the async runtime.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers use `app::run(...)`.
pub use runtime::{HEADLESS_ENV, RunOptions, run};
