// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # splunk-hec
//!
//! Buffering client for the Splunk HTTP Event Collector (HEC).
//!
//! Events are appended to an in-memory FIFO queue and shipped as
//! size-bounded, newline-joined batches over HTTP POST. At most one
//! delivery runs at a time; a running delivery drains the queue as it
//! exists at call time and as it grows underneath it. When a batch fails
//! for a reason that can pass (connection errors, timeouts, 5xx server
//! errors), it goes back to the front of the queue and is resent ahead of
//! newer events on the next delivery; client-side rejections drop the
//! batch instead, since resending the same bytes cannot succeed.
//!
//! The queue is unbounded and lives only in memory: nothing survives a
//! process restart, and producers that outrun the collector grow memory
//! without limit. Retry scheduling is the caller's job - `deliver()` stops
//! at the first error and resumes where it left off when called again.
//!
//! ## Example
//!
//! ```rust,no_run
//! use splunk_hec::{HecClient, HecConfig};
//!
//! # async fn run() -> Result<(), splunk_hec::HecError> {
//! let config = HecConfig::new("splunk.example.com", "00000000-0000-0000-0000-000000000000");
//! let client = HecClient::new(config)?;
//!
//! // Queue and ship immediately.
//! client.enqueue(r#"{"event":"service started"}"#, true).await?;
//!
//! // Queue several, ship once.
//! client.enqueue(r#"{"event":"step one"}"#, false).await?;
//! client.enqueue(r#"{"event":"step two"}"#, false).await?;
//! client.deliver().await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unreachable_pub)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

/// Event queueing, batch delivery and the health probe
pub mod client;

/// Endpoint configuration
pub mod config;

/// Collector limits and defaults
pub mod constants;

/// Error taxonomy
pub mod error;

/// Health probe expectations and status-code mapping
pub mod health;

mod queue;

pub use client::{HecClient, SendOutcome};
pub use config::HecConfig;
pub use error::HecError;
pub use health::HealthExpectations;
