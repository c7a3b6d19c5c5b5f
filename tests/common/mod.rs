// tests/common/mod.rs

use std::fmt::Debug;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing**
///   tests (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.: `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Position of `node` in `order`, panicking with a readable message if the
/// node is missing.
pub fn index_of<N: PartialEq + Debug>(order: &[N], node: &N) -> usize {
    order
        .iter()
        .position(|n| n == node)
        .unwrap_or_else(|| panic!("{node:?} not found in {order:?}"))
}

/// Assert that `before` is placed earlier than `after` in `order`.
pub fn assert_precedes<N: PartialEq + Debug>(order: &[N], before: &N, after: &N) {
    let b = index_of(order, before);
    let a = index_of(order, after);
    assert!(
        b < a,
        "expected {before:?} (index {b}) before {after:?} (index {a}) in {order:?}"
    );
}
