// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Event delivery to the Splunk HTTP Event Collector.
//!
//! This module handles the whole delivery path: queueing serialized events,
//! draining the queue in size-bounded batches, and classifying failures.
//!
//! # Architecture
//!
//! ```text
//!   enqueue / enqueue_json
//!       │
//!       v
//!   ┌──────────────┐
//!   │ PendingQueue │ (FIFO, unbounded)
//!   └──────┬───────┘
//!          │ next-fit batches
//!          v
//!   ┌──────────────┐
//!   │  HTTP POST   │ (one in flight at a time)
//!   └──────┬───────┘
//!          │
//!          v
//!   ┌──────────────┐
//!   │   Requeue?   │ (transport / 5xx errors)
//!   └──────────────┘
//! ```
//!
//! Delivery is single-flight: a `deliver()` call that finds another drain
//! already running returns immediately instead of waiting, because the
//! running drain will pick up everything queued before and during it.

use crate::config::HecConfig;
use crate::error::HecError;
use crate::health::{classify_status, HealthExpectations};
use crate::queue::{Batch, PendingQueue};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, error};

/// Acknowledgement body returned by the collector.
#[derive(Debug, Deserialize)]
struct HecAck {
    code: i64,
    #[serde(default)]
    text: String,
}

/// Outcome of an enqueue or delivery call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The pending queue was fully drained.
    Drained,
    /// Another delivery already holds the flight guard; it owns everything
    /// queued before and during its drain, so this call did nothing.
    InFlight,
    /// The event was appended without triggering delivery.
    Queued,
}

/// Buffering client for a single Splunk HTTP Event Collector endpoint.
///
/// Cheap to clone; clones share the pending queue and the flight guard, so
/// a client can be handed to several tasks and still keep at most one
/// outbound request in flight.
#[derive(Debug, Clone)]
pub struct HecClient {
    config: Arc<HecConfig>,
    url: String,
    http: reqwest::Client,
    queue: Arc<Mutex<PendingQueue>>,
    flight: Arc<AsyncMutex<()>>,
}

impl HecClient {
    /// Creates a client for the configured endpoint.
    ///
    /// Fails with [`HecError::InvalidConfig`] when the configuration does
    /// not validate.
    pub fn new(config: HecConfig) -> Result<Self, HecError> {
        config.validate()?;
        let url = config.collector_url();
        let http = get_client(&config);
        Ok(HecClient {
            config: Arc::new(config),
            url,
            http,
            queue: Arc::new(Mutex::new(PendingQueue::default())),
            flight: Arc::new(AsyncMutex::new(())),
        })
    }

    /// Appends a pre-serialized event and, unless deferred, drains the queue.
    ///
    /// With `auto_send` the call returns the result of [`Self::deliver`];
    /// otherwise it returns [`SendOutcome::Queued`] and the event waits for
    /// a later delivery.
    pub async fn enqueue(
        &self,
        event: impl Into<String>,
        auto_send: bool,
    ) -> Result<SendOutcome, HecError> {
        {
            #[allow(clippy::expect_used)]
            let mut queue = self.queue.lock().expect("queue lock poisoned");
            queue.push(event.into());
        }

        if auto_send {
            self.deliver().await
        } else {
            Ok(SendOutcome::Queued)
        }
    }

    /// Serializes a structured event to its canonical JSON form and queues it.
    ///
    /// Serialization failure leaves the queue untouched.
    pub async fn enqueue_json<T>(&self, event: &T, auto_send: bool) -> Result<SendOutcome, HecError>
    where
        T: Serialize + ?Sized,
    {
        let serialized = serde_json::to_string(event)?;
        self.enqueue(serialized, auto_send).await
    }

    /// Drains the pending queue, one size-bounded batch per POST.
    ///
    /// Returns [`SendOutcome::InFlight`] without touching the network when
    /// a drain is already running. On failure the error propagates after
    /// the queue effect has been applied: transport failures, malformed
    /// acknowledgements and 5xx rejections put the batch back at the front
    /// of the queue; any other rejection drops it. The caller decides when
    /// to call again - previously requeued batches are retried first.
    pub async fn deliver(&self) -> Result<SendOutcome, HecError> {
        let Ok(_flight) = self.flight.try_lock() else {
            return Ok(SendOutcome::InFlight);
        };

        loop {
            let batch = {
                #[allow(clippy::expect_used)]
                let mut queue = self.queue.lock().expect("queue lock poisoned");
                queue.next_batch(self.config.max_payload_bytes)
            };
            let Some(batch) = batch else {
                return Ok(SendOutcome::Drained);
            };

            debug!("Posting batch of {} events", batch.len());
            if let Err(err) = self.post_batch(&batch).await {
                if err.is_retryable() {
                    #[allow(clippy::expect_used)]
                    let mut queue = self.queue.lock().expect("queue lock poisoned");
                    queue.requeue(batch);
                } else {
                    error!("Dropping batch of {} events: {err}", batch.len());
                }
                return Err(err);
            }
        }
    }

    /// Number of events currently waiting in the queue.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        #[allow(clippy::expect_used)]
        let queue = self.queue.lock().expect("queue lock poisoned");
        queue.len()
    }

    /// Probes the collector with a bodyless POST.
    ///
    /// Fully independent of the delivery queue. Returns `Some(true)` when
    /// healthy, `Some(false)` when unhealthy and `None` when the collector
    /// answered with a code that carries no health signal. Connection and
    /// timeout failures report against `expectations.connectivity`; any
    /// other failure, including an acknowledgement body that is not a
    /// well-formed object, reports unhealthy.
    pub async fn check(&self, expectations: HealthExpectations) -> Option<bool> {
        let response = match self
            .http
            .post(&self.url)
            .header(reqwest::header::AUTHORIZATION, self.config.auth_header())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if err.is_connect() || err.is_timeout() => {
                return Some(!expectations.connectivity);
            }
            Err(_) => return Some(false),
        };

        match response.json::<HecAck>().await {
            Ok(ack) => classify_status(ack.code, &expectations),
            Err(_) => Some(false),
        }
    }

    /// Sends one batch and classifies the collector's answer.
    async fn post_batch(&self, batch: &Batch) -> Result<(), HecError> {
        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::AUTHORIZATION, self.config.auth_header())
            .body(batch.body())
            .send()
            .await
            .map_err(HecError::Transport)?;

        let http_status = response.status();
        let ack: HecAck = response
            .json()
            .await
            .map_err(HecError::MalformedResponse)?;

        if ack.code == 0 {
            debug!("Collector accepted batch: {}", ack.text);
            return Ok(());
        }

        Err(HecError::PayloadRejected {
            code: ack.code,
            text: ack.text,
            http_status,
        })
    }
}

/// Creates the HTTP client for the configured endpoint.
///
/// Falls back to reqwest defaults when the builder fails, so a TLS setup
/// problem degrades to default transport behavior instead of preventing
/// construction.
fn get_client(config: &HecConfig) -> reqwest::Client {
    match build_client(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {e}, falling back to reqwest defaults");
            reqwest::Client::new()
        }
    }
}

fn build_client(config: &HecConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()
}
