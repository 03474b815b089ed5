pub mod builders;

use std::sync::Once;

use priodag::logging::{LOG_ENV_VAR, build_filter};

static INIT: Once = Once::new();

/// Install a test-writer subscriber using the crate's own filter rules.
///
/// Captured output only shows for failing tests. Directives come from
/// `PRIODAG_LOG`, e.g. `PRIODAG_LOG=priodag::dag=debug cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env_value = std::env::var(LOG_ENV_VAR).ok();
        let (filter, _) = build_filter(None, env_value.as_deref());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
