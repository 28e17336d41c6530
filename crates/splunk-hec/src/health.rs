//! Health probe result classification.
//!
//! The collector answers a bodyless POST with the same acknowledgement
//! object it uses for event batches; the application-level status code
//! carries the actual health information. The mapping below is the fixed
//! table of codes the collector is known to emit.

/// Caller expectations for a health probe.
///
/// Each flag declares a condition the caller assumes to hold; a probe
/// result contradicting an expectation reports unhealthy, while a result
/// matching a lowered expectation reports healthy. With `connectivity:
/// false`, for example, a connection failure is the expected state and the
/// probe returns `true`.
#[derive(Debug, Clone, Copy)]
pub struct HealthExpectations {
    /// The endpoint is expected to be reachable.
    pub connectivity: bool,
    /// The configured token is expected to be valid.
    pub token: bool,
    /// The endpoint is expected to have capacity (not report busy).
    pub busy: bool,
}

impl Default for HealthExpectations {
    fn default() -> Self {
        Self {
            connectivity: true,
            token: true,
            busy: true,
        }
    }
}

/// Maps an application status code from the collector to a health verdict.
///
/// `Some(true)` is healthy, `Some(false)` unhealthy, and `None` means the
/// code is valid but says nothing useful about health (the caller should
/// treat it as "cannot determine"). Codes outside the known set count as
/// unhealthy.
pub(crate) fn classify_status(code: i64, expectations: &HealthExpectations) -> Option<bool> {
    match code {
        // Success
        0 => Some(true),
        // Token disabled, token required, invalid authorization, invalid token
        1..=4 => Some(!expectations.token),
        // No data (expected for a bodyless probe), invalid data format,
        // incorrect index
        5..=7 => Some(true),
        // Internal server error
        8 => Some(false),
        // Server is busy
        9 => Some(!expectations.busy),
        // Data channel is missing, invalid data channel
        10 | 11 => Some(false),
        // Event field, ACK and query-string authorization issues carry no
        // health signal
        12..=16 => None,
        // Unknown code
        _ => Some(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_probe_codes_are_healthy() {
        let expectations = HealthExpectations::default();
        for code in [0, 5, 6, 7] {
            assert_eq!(classify_status(code, &expectations), Some(true));
        }
    }

    #[test]
    fn test_token_codes_follow_expectation() {
        let expecting_valid = HealthExpectations::default();
        let expecting_invalid = HealthExpectations {
            token: false,
            ..HealthExpectations::default()
        };
        for code in 1..=4 {
            assert_eq!(classify_status(code, &expecting_valid), Some(false));
            assert_eq!(classify_status(code, &expecting_invalid), Some(true));
        }
    }

    #[test]
    fn test_busy_code_follows_expectation() {
        let expectations = HealthExpectations::default();
        assert_eq!(classify_status(9, &expectations), Some(false));

        let busy_expected = HealthExpectations {
            busy: false,
            ..HealthExpectations::default()
        };
        assert_eq!(classify_status(9, &busy_expected), Some(true));
    }

    #[test]
    fn test_server_side_codes_are_unhealthy() {
        let expectations = HealthExpectations::default();
        for code in [8, 10, 11] {
            assert_eq!(classify_status(code, &expectations), Some(false));
        }
    }

    #[test]
    fn test_field_and_ack_codes_are_indeterminate() {
        let expectations = HealthExpectations::default();
        for code in 12..=16 {
            assert_eq!(classify_status(code, &expectations), None);
        }
    }

    #[test]
    fn test_unknown_codes_are_unhealthy() {
        let expectations = HealthExpectations::default();
        for code in [-1, 17, 255, i64::MAX] {
            assert_eq!(classify_status(code, &expectations), Some(false));
        }
    }
}
