use crate::models::{AttributeSet, ParticipantRecord, PetTolerance};
use crate::services::ParticipantStore;
use serde_json::Value;
use uuid::Uuid;

/// Build the canonical attribute set for a participant.
///
/// A malformed identifier, an unknown participant and a store failure all
/// degrade to the empty set: one bad record must never abort a ranking pass.
pub async fn normalize_attributes(store: &dyn ParticipantStore, identifier: &str) -> AttributeSet {
    let uuid = match Uuid::parse_str(identifier) {
        Ok(uuid) => uuid,
        Err(_) => {
            tracing::warn!("Invalid participant UUID: {}", identifier);
            return AttributeSet::empty();
        }
    };

    let record = match store.fetch_participant(&uuid).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::debug!("No participant found for {}", uuid);
            return AttributeSet::empty();
        }
        Err(e) => {
            tracing::error!("Participant lookup failed for {}: {}", uuid, e);
            return AttributeSet::empty();
        }
    };

    from_record(&record)
}

/// Flatten a raw record into comparison-ready values.
pub fn from_record(record: &ParticipantRecord) -> AttributeSet {
    AttributeSet {
        pet_tolerance: PetTolerance::parse(&clean_field(&record.pet_tolerance)),
        gender_preference: Some(clean_field(&record.gender_preference)),
        max_occupants: clean_field(&record.max_occupants),
        smoking_frequency: clean_field(&record.smoking_frequency),
        drinking_frequency: clean_field(&record.drinking_frequency),
    }
}

/// Extract one field as text, stripping the bracket syntax used by
/// pseudo-list fields. Numbers pass through as their decimal text; anything
/// else (absent, null, unexpected shapes) normalizes to empty.
fn clean_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.replace(['[', ']'], ""),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
