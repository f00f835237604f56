//! Logs a few lines to `EasyLog.log` and echoes each one through the observer.
//!
//! Run with `cargo run -p easylog-core --example basic`.

use easylog_core::{
    global, log_debug, log_error, log_info, wide_to_string, LogConfig, Logger, Severity,
};

fn main() {
    let _guard = match global::init(LogConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("logger setup failed: {e}");
            return;
        }
    };

    global::set_observer(|level: Severity, line: &str| {
        print!("{} {}", level as u8, line);
    });

    log_info!("i'm {}", "sollyu");
    log_error!("I'm {}", "sollyu");
    log_debug!("i'm {}", "sollyu");
    global::instance().write_log(Severity::Debug, "i'm sollyu");

    let wide: Vec<u16> = "wide text".encode_utf16().collect();
    log_info!("{}", wide_to_string(&wide));

    if let Some(e) = global::instance().open_error() {
        eprintln!("{e}; lines went to stdout");
    }
}
