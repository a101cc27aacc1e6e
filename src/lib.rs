//! Domus Algo - housing recommendation service for the Domus student housing app
//!
//! This library ranks housing listings for a seeker by normalizing both
//! sides' lifestyle-preference attributes and scoring each pair under a fixed
//! rule table with veto and auto-match overrides.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{score_pair, RankOutcome, Ranker};
pub use models::{AttributeSet, ParticipantRecord, PetTolerance, RankedMatch};
pub use services::{AppwriteClient, InMemoryStore, ParticipantStore, StoreError};
