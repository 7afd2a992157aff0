use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::RBTree;

static TEST_SETUP: Once = Once::new();

/// Default filter when `RUST_LOG` is unset. Per-insert spans are trace level and
/// flood the output on large trees, so tests stop at debug.
const DEFAULT_TEST_FILTER: &str = "rbtree=debug";

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Builds a tree and checks every invariant, panicking with the rendered tree on failure.
pub fn valid_tree<I: IntoIterator<Item = i64>>(values: I) -> RBTree {
    let tree: RBTree = values.into_iter().collect();
    if let Err(e) = tree.validate() {
        panic!("invalid tree: {e}\n{tree}");
    }
    tree
}
