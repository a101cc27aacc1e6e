// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AttributeSet, ParticipantRecord, PetTolerance, RankedMatch, ALLERGY, HOUSING_KIND, LOVES_PETS,
    NO_PET_BUT_LOVES_THEM, NO_PREFERENCE,
};
pub use requests::RecommendationsRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendationsResponse};
