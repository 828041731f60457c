//! Structured logging schema and subscriber setup for talentline.
//!
//! All crates log through `tracing` with the field names below so log
//! aggregation can query by standardized keys across every subsystem.

use tracing_subscriber::{fmt, EnvFilter};

/// Subsystem originating the log event.
/// Values: "store", "query", "manager"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "query_client", "provider", "fan_out"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch", "active_job_applications", "upcoming_interviews"
pub const OPERATION: &str = "op";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of documents or records returned by a fetch.
pub const RESULT_COUNT: &str = "result_count";

/// Number of pages drained for one call.
pub const PAGE_COUNT: &str = "page_count";

/// Install the default fmt subscriber with `RUST_LOG`-driven filtering.
///
/// Safe to call more than once; later calls are no-ops. Binaries call this
/// at startup, tests call it to surface spans on failure.
pub fn try_init() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();
}
