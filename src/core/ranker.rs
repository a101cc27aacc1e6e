use crate::core::normalizer::normalize_attributes;
use crate::core::scoring::score_pair;
use crate::models::RankedMatch;
use crate::services::ParticipantStore;
use std::sync::Arc;

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Ranking engine: scores every housing listing against one seeker.
///
/// Holds nothing but an injected store handle; all per-request state lives on
/// the stack of `rank`, so instances are freely cloneable across workers.
#[derive(Clone)]
pub struct Ranker {
    store: Arc<dyn ParticipantStore>,
}

impl Ranker {
    pub fn new(store: Arc<dyn ParticipantStore>) -> Self {
        Self { store }
    }

    /// Rank all housing listings for a seeker, best score first.
    ///
    /// Every identifier the directory returns produces exactly one entry;
    /// listings whose record has vanished score against the empty attribute
    /// set instead of aborting the pass. A directory failure yields an empty
    /// ranking. Ties are broken by identifier so output is deterministic.
    pub async fn rank(&self, seeker_id: &str) -> RankOutcome {
        let housing_ids = match self.store.list_housing_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("Housing directory lookup failed: {}", e);
                return RankOutcome {
                    matches: Vec::new(),
                    total_candidates: 0,
                };
            }
        };

        let total_candidates = housing_ids.len();
        tracing::debug!(
            "Scoring {} housing listings for seeker {}",
            total_candidates,
            seeker_id
        );

        let mut matches = Vec::with_capacity(total_candidates);
        for housing_id in housing_ids {
            // The scorer consumes both attribute sets, so each side is
            // normalized fresh on every iteration.
            let candidate = normalize_attributes(self.store.as_ref(), &housing_id).await;
            let seeker = normalize_attributes(self.store.as_ref(), seeker_id).await;

            let score = score_pair(candidate, seeker);
            tracing::debug!("Listing {} scored {:.1} for seeker {}", housing_id, score, seeker_id);

            matches.push(RankedMatch {
                participant_id: housing_id,
                score,
            });
        }

        // Sort by score (descending), ties by identifier (ascending)
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.participant_id.cmp(&b.participant_id))
        });

        RankOutcome {
            matches,
            total_candidates,
        }
    }
}
