//! Logging abstraction layer.
//!
//! Dispatches to either the [`log`](https://docs.rs/log) or the
//! [`tracing`](https://docs.rs/tracing) crate depending on which feature is
//! enabled. The two features are **mutually exclusive** — enable at most one.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! The guard pipeline logs at these levels:
//!
//! - `trace_log!` — per-guard decisions and cache lookups.
//! - `debug_log!` — classification results and redirects.
//! - `info_log!` — applied navigations.
//! - `warn_log!` — blocked navigations.
//! - `error_log!` — redirect loops and invalid pattern tables.
//!
//! All macros accept `format!`-style arguments:
//!
//! ```ignore
//! use wizard_guard::{debug_log, warn_log};
//!
//! debug_log!("'{}' classifies to {:?}", path, step);
//! warn_log!("Navigation to '{}' blocked", path);
//! ```

/// Backend dispatch shared by the level macros. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    };
}

/// Emit a **trace**-level log message through the enabled backend.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(trace, $($arg)*); };
}

/// Emit a **debug**-level log message through the enabled backend.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(debug, $($arg)*); };
}

/// Emit an **info**-level log message through the enabled backend.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(info, $($arg)*); };
}

/// Emit a **warn**-level log message through the enabled backend.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(warn, $($arg)*); };
}

/// Emit an **error**-level log message through the enabled backend.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => { $crate::__dispatch_log!(error, $($arg)*); };
}
