//! Limits and defaults for the Splunk HTTP Event Collector.
//!
//! The collector enforces a per-request payload cap; batches assembled by
//! [`crate::client::HecClient`] stay under these values so a drained queue
//! never produces a rejected-for-size request.

/// Maximum payload size per POST request, in bytes.
///
/// 256KB. The actual server-side limit is 512KB; batch sizing counts
/// serialized event bytes only (newline separators excluded), so the
/// conservative cap leaves headroom for the joined wire body.
pub const MAX_PAYLOAD_SIZE_BYTES: usize = 262_144;

/// Default port the collector listens on.
pub const DEFAULT_PORT: u16 = 8088;

/// Default collector endpoint path, appended after `/services/`.
pub const DEFAULT_ENDPOINT_PATH: &str = "collector/event";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
