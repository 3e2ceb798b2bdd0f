//! Small crate-wide convenience macros.

/// `console.log` that only exists in debug builds.
///
/// Release builds still type-check the format arguments but never touch the
/// console, so chatty tracing around dispatch and requests costs nothing in
/// production bundles.
///
/// ```rust,ignore
/// debug_log!("upload {} started", request_id);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
