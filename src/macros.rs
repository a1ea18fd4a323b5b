/// Helper macro to log an event within a span that is not currently entered.
macro_rules! span_scoped {
    ($span:expr, $level:ident!($($arg:tt)*)) => {
        $span.in_scope(|| {
            ::tracing::$level!($($arg)*);
        })
    };
}

/// Helper macro to log a debug event within a span that is not currently
/// entered.
macro_rules! span_debug {
    ($span:expr, $($arg:tt)*) => {
        span_scoped!($span, debug!($($arg)*))
    };
}

/// Helper macro to log an info event within a span that is not currently
/// entered.
macro_rules! span_info {
    ($span:expr, $($arg:tt)*) => {
        span_scoped!($span, info!($($arg)*))
    };
}

/// Helper macro to log a warning event within a span that is not currently
/// entered.
macro_rules! span_warn {
    ($span:expr, $($arg:tt)*) => {
        span_scoped!($span, warn!($($arg)*))
    };
}
