// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Ordered buffer of pending events and batch assembly.
//!
//! Events wait in a FIFO queue as serialized strings. Delivery pulls them
//! out in size-bounded batches: events are taken from the front until the
//! next one would push the running payload size over the limit (next-fit
//! packing, one pass, one-item lookahead). A batch that fails a retryable
//! delivery goes back to the front of the queue in its original order, so
//! retried events are always resent before anything enqueued after the
//! failure.

use std::collections::VecDeque;
use tracing::warn;

/// A transient group of consecutive events popped for one delivery attempt.
///
/// Never persisted; lives only for the duration of a single POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Batch {
    events: Vec<String>,
}

impl Batch {
    /// Number of events in the batch.
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    /// Newline-joined wire body.
    pub(crate) fn body(&self) -> String {
        self.events.join("\n")
    }

    pub(crate) fn into_events(self) -> Vec<String> {
        self.events
    }
}

/// FIFO queue of serialized event strings.
///
/// Unbounded: `enqueue` never blocks and nothing is evicted. Events leave
/// only by being handed to a delivery attempt.
#[derive(Debug, Default)]
pub(crate) struct PendingQueue {
    events: VecDeque<String>,
}

impl PendingQueue {
    /// Appends an event at the tail.
    pub(crate) fn push(&mut self, event: String) {
        self.events.push_back(event);
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    /// Assembles the next batch with next-fit packing, or `None` when empty.
    ///
    /// The front event is always taken, even when it alone exceeds
    /// `max_payload_bytes` (an oversized singleton is shipped rather than
    /// blocking the queue forever). Further events are taken while the
    /// running sum of serialized lengths stays within the limit; the first
    /// event that does not fit stays queued for the following batch.
    pub(crate) fn next_batch(&mut self, max_payload_bytes: usize) -> Option<Batch> {
        let first = self.events.pop_front()?;
        if first.len() > max_payload_bytes {
            warn!(
                "Event size {} exceeds the {} byte payload limit, sending it in its own batch",
                first.len(),
                max_payload_bytes
            );
        }

        let mut size = first.len();
        let mut events = vec![first];
        while let Some(next) = self.events.pop_front() {
            if size + next.len() > max_payload_bytes {
                // Does not fit - return it for the next batch
                self.events.push_front(next);
                break;
            }
            size += next.len();
            events.push(next);
        }

        Some(Batch { events })
    }

    /// Returns a failed batch to the front, preserving original order.
    pub(crate) fn requeue(&mut self, batch: Batch) {
        for event in batch.into_events().into_iter().rev() {
            self.events.push_front(event);
        }
    }
}
