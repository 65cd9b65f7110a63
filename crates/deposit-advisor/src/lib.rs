//! Term deposit subscription scoring for telemarketing campaigns.
//!
//! A customer record is assembled from dashboard widgets, scored by the
//! exported subscription pipeline, and mapped to a HIGH / MEDIUM / LOW
//! contact priority with the narrative and charts shown to campaign managers.

pub mod config;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod scoring;
pub mod segmentation;
pub mod telemetry;
