use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, RecommendationsRequest, RecommendationsResponse};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(find_recommendations));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Ranked housing recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "seekerId": "592f7f4a-ebd2-4b3a-8e46-7e1af20de594"
/// }
/// ```
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // The engine itself tolerates malformed identifiers by scoring against
    // empty attributes; the transport rejects them up front.
    if Uuid::parse_str(&req.seeker_id).is_err() {
        tracing::info!("Rejecting malformed seekerId: {}", req.seeker_id);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid seekerId".to_string(),
            message: "seekerId must be a valid UUID".to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Finding recommendations for seeker: {}", req.seeker_id);

    let outcome = state.ranker.rank(&req.seeker_id).await;

    tracing::info!(
        "Returning {} recommendations for seeker {} ({} listings considered)",
        outcome.matches.len(),
        req.seeker_id,
        outcome.total_candidates
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
    })
}
