//! Tracing support.
//!
//! When the `tracing` feature is enabled this module re-exports the `tracing`
//! macros used by the crate and provides [`init_tracing`] for tests.  When
//! it's disabled, the macros are replaced by no-ops so call sites stay the
//! same.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Environment variable naming the maximum level logged by
    /// [`init_tracing`], e.g. `trace` or `debug`.  Defaults to `warn`.
    pub const LOG_LEVEL_VAR: &str = "LIVEGRAPH_LOG";

    /// Installs a global `fmt` subscriber that writes through the test
    /// harness's captured output.  Safe to call more than once.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = std::env::var(LOG_LEVEL_VAR)
                .ok()
                .and_then(|value| value.parse::<Level>().ok())
                .unwrap_or(Level::WARN);
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_test_writer()
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! trace {
        ($($tt:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($tt:tt)*) => {{}};
    }

    macro_rules! info_span {
        ($($tt:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::{LOG_LEVEL_VAR, init_tracing};
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
