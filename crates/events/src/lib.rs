//! Ledger events: the event trait, stream envelopes and an in-memory journal.

pub mod envelope;
pub mod event;
pub mod journal;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use journal::EventJournal;
