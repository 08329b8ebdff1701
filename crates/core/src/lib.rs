//! # TalentSync Core
//!
//! Domain logic for the TalentSync interview platform. Everything in this
//! crate is synchronous and free of I/O, so it can be called from any
//! number of request handlers without coordination.
//!
//! The crate is organized around the interview lifecycle:
//!
//! - **Models**: interviews, users, comments, and code sessions
//! - **Lifecycle**: classification of an interview as upcoming, live, or
//!   completed from its timestamps and persisted status
//! - **Grouping**: partitioning interviews into dashboard buckets
//! - **Stats**: aggregate counts and the success rate derived from groups
//! - **Directory**: keyed lookup of participant display information

/// Keyed lookup of user display information with placeholder fallbacks
pub mod directory;
/// Shared error type for the TalentSync crates
pub mod errors;
/// Dashboard bucketing of interview collections
pub mod grouping;
/// Time-derived interview status classification
pub mod lifecycle;
/// Domain models and request/response types
pub mod models;
/// Aggregate dashboard statistics
pub mod stats;
