//! Activity log: a chronological record of progression events for feeds and
//! notifications.

pub mod entry;
pub mod log;

pub use entry::ActivityEntry;
pub use log::ActivityLog;
