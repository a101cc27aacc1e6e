use crate::models::{ParticipantRecord, HOUSING_KIND};
use crate::services::store::{ParticipantStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory participant store for tests, benchmarks and local development.
///
/// Directory listings come from records tagged as housing plus any dangling
/// identifiers added explicitly, which lets callers simulate a listing whose
/// record has disappeared between directory scan and lookup.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    participants: HashMap<Uuid, ParticipantRecord>,
    dangling_listings: Vec<String>,
    fail_directory: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Uuid, record: ParticipantRecord) {
        self.participants.insert(id, record);
    }

    /// Add a directory entry with no backing record.
    pub fn push_dangling_listing(&mut self, id: impl Into<String>) {
        self.dangling_listings.push(id.into());
    }

    /// Make `list_housing_ids` fail, for exercising degraded paths.
    pub fn with_failing_directory(mut self) -> Self {
        self.fail_directory = true;
        self
    }
}

#[async_trait]
impl ParticipantStore for InMemoryStore {
    async fn fetch_participant(
        &self,
        id: &Uuid,
    ) -> Result<Option<ParticipantRecord>, StoreError> {
        Ok(self.participants.get(id).cloned())
    }

    async fn list_housing_ids(&self) -> Result<Vec<String>, StoreError> {
        if self.fail_directory {
            return Err(StoreError::Api("directory offline".to_string()));
        }

        let mut ids: Vec<String> = self
            .participants
            .values()
            .filter(|record| record.kind == HOUSING_KIND)
            .map(|record| record.participant_id.clone())
            .collect();
        ids.extend(self.dangling_listings.iter().cloned());
        ids.sort();

        Ok(ids)
    }
}
