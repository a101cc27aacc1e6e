// Core algorithm exports
pub mod normalizer;
pub mod ranker;
pub mod scoring;

pub use normalizer::{from_record, normalize_attributes};
pub use ranker::{RankOutcome, Ranker};
pub use scoring::score_pair;
