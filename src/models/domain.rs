use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Pet-tolerance label that vetoes a pairing outright.
pub const ALLERGY: &str = "Allergy";
/// Pet-tolerance labels that auto-satisfy the dimension for both sides.
pub const LOVES_PETS: &str = "Love it";
pub const NO_PET_BUT_LOVES_THEM: &str = "Don't have one but love them";
/// Gender-preference wildcard label.
pub const NO_PREFERENCE: &str = "No preference";
/// Type tag marking a participant as a housing listing.
pub const HOUSING_KIND: &str = "housing";

/// Set of pet-tolerance category labels for one participant.
///
/// The upstream collection stores this dimension as a pseudo-list
/// (`"[Love it, Allergy]"`); after bracket stripping the normalizer splits it
/// into distinct labels. The scorer works on label membership over the union
/// of both sides, never on raw text comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTolerance(BTreeSet<String>);

impl PetTolerance {
    /// Parse the bracket-stripped text of the pseudo-list field.
    pub fn parse(raw: &str) -> Self {
        let labels = raw
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();
        Self(labels)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Labels present on either side.
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }
}

/// Normalized preference attributes for one participant.
///
/// All five dimensions are always present; unknown participants and failed
/// lookups yield the empty set rather than an error. `gender_preference` is
/// `None` only once the scorer has consumed it via the wildcard override, so
/// the remaining-scalars stage can tell a settled dimension from an empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    pub pet_tolerance: PetTolerance,
    pub gender_preference: Option<String>,
    pub max_occupants: String,
    pub smoking_frequency: String,
    pub drinking_frequency: String,
}

impl AttributeSet {
    /// The "no data" attribute set: every dimension present but empty.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            pet_tolerance: PetTolerance::default(),
            gender_preference: Some(String::new()),
            max_occupants: String::new(),
            smoking_frequency: String::new(),
            drinking_frequency: String::new(),
        }
    }
}

/// Raw participant document as returned by the store.
///
/// Preference fields are loosely typed: the collection holds strings or
/// numbers depending on which client wrote the document. Fields outside the
/// recognized set are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantRecord {
    #[serde(rename = "participantId", default)]
    pub participant_id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "petTolerance", default)]
    pub pet_tolerance: Value,
    #[serde(rename = "genderPreference", default)]
    pub gender_preference: Value,
    #[serde(rename = "maxOccupants", default)]
    pub max_occupants: Value,
    #[serde(rename = "smokingFrequency", default)]
    pub smoking_frequency: Value,
    #[serde(rename = "drinkingFrequency", default)]
    pub drinking_frequency: Value,
}

/// Scored housing listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "participantId")]
    pub participant_id: String,
    pub score: f64,
}
