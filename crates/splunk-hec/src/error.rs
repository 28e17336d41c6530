// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Errors surfaced by the HEC client.
#[derive(Debug, thiserror::Error)]
pub enum HecError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Event payload could not be serialized. The queue is untouched.
    #[error("Failed to serialize event payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Connection failure or timeout. The batch was returned to the queue.
    #[error("Failed to reach HEC endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not a well-formed acknowledgement object.
    /// The batch was returned to the queue.
    #[error("HEC endpoint returned a malformed acknowledgement: {0}")]
    MalformedResponse(#[source] reqwest::Error),

    /// The collector acknowledged the request with a non-zero status code.
    #[error("HEC endpoint rejected payload with code {code} ({http_status}): {text}")]
    PayloadRejected {
        /// Application-level status code from the acknowledgement body.
        code: i64,
        /// Human-readable message from the acknowledgement body.
        text: String,
        /// HTTP status of the response carrying the rejection.
        http_status: StatusCode,
    },
}

impl HecError {
    /// Whether the failed batch goes back to the front of the queue.
    ///
    /// Server errors (5xx) and transport failures are transient; any other
    /// rejection will not change by resending the same bytes, so the batch
    /// is dropped instead of retried forever.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            HecError::Transport(_) | HecError::MalformedResponse(_) => true,
            HecError::PayloadRejected { http_status, .. } => http_status.is_server_error(),
            HecError::InvalidConfig(_) | HecError::Serialization(_) => false,
        }
    }
}
