//! In-memory message history with a fixed retention cap.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use otpex_core::ExtractionResult;

/// One processed inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was received.
    pub timestamp: DateTime<Utc>,

    /// Sender phone number, when the webhook provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,

    /// Raw message body.
    pub body: String,

    /// Extraction outcome for the body.
    pub extracted: ExtractionResult,
}

/// Ring buffer of recent messages, oldest evicted first.
#[derive(Debug)]
pub struct MessageHistory {
    records: VecDeque<MessageRecord>,
    capacity: usize,
}

impl MessageHistory {
    /// Create a history retaining at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest when full.
    pub fn push(&mut self, record: MessageRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// The most recent `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<MessageRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).cloned().collect()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
