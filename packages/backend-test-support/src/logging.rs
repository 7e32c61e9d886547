//! Logging bootstrap for integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly subscriber exactly once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`. Output goes
/// through the libtest writer so it is captured unless `--nocapture` is set.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn,sqlx=error,sea_orm=error"));

        // try_init: a unit-test ctor may already have installed one
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
