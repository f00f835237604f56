//! Call-site macros
//!
//! `log_error!("I'm {}", "sollyu")` writes
//! `I'm sollyu (src/main.rs : main : 20 )` through the process logger. Info
//! messages carry no suffix. A leading `logger: <expr>;` targets an explicit
//! logger instead; the expression must dereference to a `Logger`
//! (`&EasyLog`, `Arc<dyn Logger>`, ...).

/// Extract the enclosing function from the type name of an item nested in it
pub fn enclosing_function(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__here").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logging::macros::enclosing_function(__type_name_of(__here))
    }};
}

/// Format a message, add the call site for non-Info severities and write it
#[macro_export]
macro_rules! write_log {
    (logger: $logger:expr; $severity:expr, $($arg:tt)+) => {{
        let __severity: $crate::Severity = $severity;
        let __message = $crate::types::compose_message(
            __severity,
            ::std::format_args!($($arg)+),
            $crate::types::CallSite::new(
                ::std::file!(),
                $crate::__function_name!(),
                ::std::line!(),
            ),
        );
        $crate::Logger::write_log(&*$logger, __severity, &__message);
    }};
    ($severity:expr, $($arg:tt)+) => {
        $crate::write_log!(logger: $crate::global::instance(); $severity, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_trace {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_alarm {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Alarm, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Alarm, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr; $($arg:tt)+) => {
        $crate::write_log!(logger: $logger; $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::write_log!($crate::Severity::Fatal, $($arg)+)
    };
}
