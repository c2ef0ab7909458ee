//! Tracing initialization for hosts that embed these styles.
//!
//! A host binary (or a test harness) calls [`init`] once at startup. Events
//! from this crate are shown at the `IETF_STYLES_LOG` level; everything else
//! is held at `warn` so enabling debug output here does not flood the host's
//! own logs.

use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

static INIT: OnceLock<()> = OnceLock::new();

/// Environment variable selecting the log level
pub const LOG_ENV_VAR: &str = "IETF_STYLES_LOG";

/// Target prefix of every event this crate emits
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

fn parse_level(value: Option<&str>) -> Level {
    match value.unwrap_or("info").to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter that applies `level` to this crate and `warn` to the rest
fn style_filter(level: Level) -> Targets {
    Targets::new()
        .with_default(Level::WARN)
        .with_target(CRATE_TARGET, level)
}

/// Initialize tracing output from `IETF_STYLES_LOG`.
///
/// Safe to call multiple times; only the first call installs the subscriber.
/// Best-effort: if the host already installed one, this does nothing.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    let level = parse_level(std::env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(style_filter(level))
        .try_init();
    let _ = INIT.set(());
}
