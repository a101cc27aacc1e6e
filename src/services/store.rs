use crate::models::ParticipantRecord;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by participant store backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only access to participant records and the housing directory.
///
/// The ranking engine is handed one of these at construction; the composition
/// root picks the backend and owns its lifecycle. An unknown participant is
/// `Ok(None)`, not an error: missing data degrades, it does not abort.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Fetch the raw document for one participant.
    async fn fetch_participant(&self, id: &Uuid)
        -> Result<Option<ParticipantRecord>, StoreError>;

    /// Identifiers of every participant currently tagged as housing.
    /// No ordering is guaranteed.
    async fn list_housing_ids(&self) -> Result<Vec<String>, StoreError>;
}
