//! Append-only, in-memory event journal.

use stockbook_core::LedgerId;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// Records applied events in the order they happened.
///
/// Sequence numbers start at 1 and never repeat. Nothing is persisted; the
/// journal lives and dies with its owner.
#[derive(Debug, Clone)]
pub struct EventJournal<E: Event> {
    stream: &'static str,
    entries: Vec<EventEnvelope<E>>,
}

impl<E: Event> EventJournal<E> {
    pub fn new(stream: &'static str) -> Self {
        Self {
            stream,
            entries: Vec::new(),
        }
    }

    /// Append events for one ledger. Returns the last assigned sequence number.
    pub fn append(&mut self, ledger_id: LedgerId, events: impl IntoIterator<Item = E>) -> u64 {
        for payload in events {
            let sequence_number = self.last_sequence() + 1;
            self.entries.push(EventEnvelope::record(
                ledger_id,
                self.stream,
                sequence_number,
                payload,
            ));
        }
        self.last_sequence()
    }

    /// Sequence number of the newest entry (0 when empty).
    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence_number()).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.entries.iter()
    }

    /// Entries strictly after `sequence_number`.
    pub fn since(&self, sequence_number: u64) -> impl Iterator<Item = &EventEnvelope<E>> {
        self.entries
            .iter()
            .filter(move |e| e.sequence_number() > sequence_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
