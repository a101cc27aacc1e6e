use crate::models::{ParticipantRecord, HOUSING_KIND};
use crate::services::store::{ParticipantStore, StoreError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

/// Appwrite-backed participant store.
///
/// Seekers and housing listings live in a single participants collection;
/// listings carry the `type = "housing"` tag. The client only ever reads.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    client: Client,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            client,
        }
    }

    /// Run one document query and return the raw document array.
    async fn fetch_documents(&self, queries: &[String]) -> Result<Vec<Value>, StoreError> {
        let queries_json = serde_json::to_string(queries).unwrap();
        let url = format!(
            "{}/databases/{}/collections/{}/documents?query={}",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id,
            urlencoding::encode(&queries_json)
        );

        tracing::debug!("Querying participant store: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(StoreError::Api(format!(
                "Document query failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        Ok(documents.clone())
    }
}

#[async_trait]
impl ParticipantStore for AppwriteClient {
    async fn fetch_participant(
        &self,
        id: &Uuid,
    ) -> Result<Option<ParticipantRecord>, StoreError> {
        let queries = vec![format!("equal(\"participantId\", \"{}\")", id)];
        let documents = self.fetch_documents(&queries).await?;

        let doc = match documents.first() {
            Some(doc) => doc,
            None => {
                tracing::debug!("Participant {} not found", id);
                return Ok(None);
            }
        };

        // Appwrite wraps user attributes in a "data" object on some plans
        let data = doc.get("data").unwrap_or(doc);

        let record = serde_json::from_value(data.clone()).map_err(|e| {
            StoreError::InvalidResponse(format!("Failed to parse participant: {}", e))
        })?;

        Ok(Some(record))
    }

    async fn list_housing_ids(&self) -> Result<Vec<String>, StoreError> {
        let queries = vec![format!("equal(\"type\", \"{}\")", HOUSING_KIND)];
        let documents = self.fetch_documents(&queries).await?;

        let ids: Vec<String> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                data.get("participantId")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .collect();

        tracing::debug!("Directory returned {} housing listings", ids.len());

        Ok(ids)
    }
}
