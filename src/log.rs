//! Logging shim for the optional `tracing` feature.
//!
//! The engine only logs from flow resolution (anchor cycles and unknown
//! anchors). With the feature disabled the macro expands to nothing, so
//! hosts that never enable it pay no runtime cost.

#[cfg(feature = "tracing")]
pub use tracing::warn;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::warn;
