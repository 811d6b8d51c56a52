//! Public event log and expiring private records.

pub mod event;
pub mod private;

pub use event::{Event, EventDraft, EventId, EventKind, EventLog};
pub use private::{GovernmentSnapshot, PrivateContent, PrivateInfoRecord, PrivateInfoStore};
