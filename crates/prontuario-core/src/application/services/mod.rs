//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "admit a record" or "list all nurses".

pub mod listing_service;
pub mod record_service;

pub use listing_service::{ListRow, ListTable, ListingService};
pub use record_service::RecordService;
