// Integration tests for Domus Algo

use domus_algo::models::ParticipantRecord;
use domus_algo::services::InMemoryStore;
use domus_algo::Ranker;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn participant(
    id: Uuid,
    kind: &str,
    pets: &str,
    gender: &str,
    occupants: i64,
    smoking: &str,
    drinking: &str,
) -> ParticipantRecord {
    ParticipantRecord {
        participant_id: id.to_string(),
        kind: kind.to_string(),
        pet_tolerance: json!(pets),
        gender_preference: json!(gender),
        max_occupants: json!(occupants),
        smoking_frequency: json!(smoking),
        drinking_frequency: json!(drinking),
    }
}

#[tokio::test]
async fn test_end_to_end_ranking() {
    let mut store = InMemoryStore::new();

    let seeker_id = Uuid::new_v4();
    store.insert(
        seeker_id,
        participant(seeker_id, "seeker", "No preference", "No preference", 3, "Never", "Occasionally"),
    );

    // Matches the documented example: 4 of 5 dimensions -> 80
    let strong = Uuid::new_v4();
    store.insert(
        strong,
        participant(strong, "housing", "[Love it]", "Women only", 2, "Never", "Never"),
    );

    // Allergy on the listing side vetoes the pair
    let vetoed = Uuid::new_v4();
    store.insert(
        vetoed,
        participant(vetoed, "housing", "[Allergy]", "No preference", 2, "Never", "Occasionally"),
    );

    // Over capacity and a smoker: pets + gender wildcard + drinking of 5
    let crowded = Uuid::new_v4();
    store.insert(
        crowded,
        participant(crowded, "housing", "[Love it]", "Men only", 8, "Often", "Occasionally"),
    );

    let ranker = Ranker::new(Arc::new(store));
    let outcome = ranker.rank(&seeker_id.to_string()).await;

    assert_eq!(outcome.total_candidates, 3);
    assert_eq!(outcome.matches.len(), 3);

    assert_eq!(outcome.matches[0].participant_id, strong.to_string());
    assert_eq!(outcome.matches[0].score, 80.0);

    assert_eq!(outcome.matches[1].participant_id, crowded.to_string());
    assert_eq!(outcome.matches[1].score, 60.0);

    assert_eq!(outcome.matches[2].participant_id, vetoed.to_string());
    assert_eq!(outcome.matches[2].score, 0.0);

    for pair in outcome.matches.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking not sorted by score");
    }
}

#[tokio::test]
async fn test_listing_without_record_degrades_to_empty_attributes() {
    let mut store = InMemoryStore::new();

    let seeker_id = Uuid::new_v4();
    store.insert(
        seeker_id,
        participant(seeker_id, "seeker", "", "No preference", 4, "Never", "Never"),
    );

    let live = Uuid::new_v4();
    store.insert(
        live,
        participant(live, "housing", "", "No preference", 2, "Never", "Never"),
    );
    store.push_dangling_listing(Uuid::new_v4().to_string());

    let ranker = Ranker::new(Arc::new(store));
    let outcome = ranker.rank(&seeker_id.to_string()).await;

    // Both the live and the vanished listing produce exactly one entry each
    assert_eq!(outcome.matches.len(), 2);
    assert_eq!(outcome.matches[0].participant_id, live.to_string());
    assert_eq!(outcome.matches[0].score, 100.0);
    assert!(outcome.matches[1].score < outcome.matches[0].score);
}

#[tokio::test]
async fn test_unknown_seeker_still_ranks_all_listings() {
    let mut store = InMemoryStore::new();

    for _ in 0..5 {
        let id = Uuid::new_v4();
        store.insert(
            id,
            participant(id, "housing", "", "Men only", 2, "Never", "Never"),
        );
    }

    let ranker = Ranker::new(Arc::new(store));
    let outcome = ranker.rank(&Uuid::new_v4().to_string()).await;

    assert_eq!(outcome.matches.len(), 5);
    for m in &outcome.matches {
        assert!((0.0..=100.0).contains(&m.score));
    }
}

#[tokio::test]
async fn test_malformed_seeker_identifier_is_tolerated() {
    let mut store = InMemoryStore::new();
    let id = Uuid::new_v4();
    store.insert(
        id,
        participant(id, "housing", "", "No preference", 2, "Never", "Never"),
    );

    let ranker = Ranker::new(Arc::new(store));
    let outcome = ranker.rank("definitely-not-a-uuid").await;

    // The engine degrades to empty seeker attributes instead of raising
    assert_eq!(outcome.matches.len(), 1);
}

#[tokio::test]
async fn test_directory_failure_is_an_empty_ranking() {
    let store = InMemoryStore::new().with_failing_directory();
    let ranker = Ranker::new(Arc::new(store));

    let outcome = ranker.rank(&Uuid::new_v4().to_string()).await;

    assert!(outcome.matches.is_empty());
}
