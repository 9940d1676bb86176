/*!
 * Tracing setup for the simulator binary.
 *
 * Environment variables:
 * - RUST_LOG: filter directives (default: warn)
 * - PROCLIFE_LOG_JSON: `1` or `true` for JSON lines
 *
 * Output goes to stderr so the status lines on stdout stay clean.
 */

use std::io;

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("PROCLIFE_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .init();
    }

    debug!(json = use_json, "tracing initialized");
}
