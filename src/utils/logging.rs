//! File logging.
//!
//! The terminal belongs to the UI, so every event goes to
//! `<data dir>/goodtranslator.log`. `log` records (ours, reqwest's, rodio's)
//! are bridged into the same tracing subscriber.

use std::{env, fs, path::PathBuf};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor the app-specific variable is set.
/// The HTTP and audio stacks are chatty at info.
pub fn default_directives() -> String {
    format!("{}=info,reqwest=warn,rodio=warn", env!("CARGO_CRATE_NAME"))
}

/// `RUST_LOG` wins over the app-specific variable; blank values count as unset.
fn filter_directives(rust_log: Option<String>, app_level: Option<String>) -> String {
    rust_log
        .into_iter()
        .chain(app_level)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(default_directives)
}

/// Installs the global subscriber and returns the log file path.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = fs::File::create(&log_path)?;

    let directives = filter_directives(env::var("RUST_LOG").ok(), env::var(LOG_ENV.as_str()).ok());
    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(&directives));
    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    tracing::info!(filter = %directives, "Logging to {}", log_path.display());
    Ok(log_path)
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("debug"), Some("warn"), "debug")]
    #[case(None, Some("goodtranslator=trace"), "goodtranslator=trace")]
    #[case(Some("  "), Some("warn"), "warn")]
    fn test_filter_precedence(
        #[case] rust_log: Option<&str>,
        #[case] app_level: Option<&str>,
        #[case] expected: &str,
    ) {
        let directives = filter_directives(
            rust_log.map(str::to_string),
            app_level.map(str::to_string),
        );
        assert_eq!(directives, expected);
    }

    #[test]
    fn test_default_filter_quiets_dependencies() {
        let directives = filter_directives(None, None);
        assert!(directives.starts_with("goodtranslator=info"));
        assert!(directives.contains("reqwest=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
