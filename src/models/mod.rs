//! Data models for the complaint tracking application.
//!
//! Serialized field names are camelCase so the persisted collection
//! round-trips with the JSON documents the frontend writes.

mod complaint;

pub use complaint::*;
