//! Citizen complaint submission and tracking core.
//!
//! Single source of truth is the [`store::ComplaintStore`], a synchronous
//! in-memory collection persisted as one JSON document under a fixed storage
//! key. The presentation layer (forms, dashboards, tracking views) consumes
//! the store operations, the [`workflow`] entry points, and the pure
//! [`helpers`] directly; it owns all rendering and dialog state.

pub mod config;
pub mod errors;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod query;
pub mod store;
pub mod workflow;

pub use config::Config;
pub use errors::AppError;
pub use models::{Complaint, ComplaintUpdate, NewComplaint, TimelineEntry};
pub use store::{ComplaintStore, FileStorage, MemoryStorage, StorageBackend};
