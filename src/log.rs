//! Crate-internal logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it
//! they swallow their arguments, so call sites must not compute values used
//! only for logging. The coordinate and shape layers never log; only the
//! canvas does.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($arg:tt)*) => {};
}

// `warn` alone would clash with the built-in `#[warn]` attribute.
#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, warn_ as warn};
