use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    CompatibilityRequest, CompatibilityResponse, ErrorResponse, FindMatchesRequest,
    FindMatchesResponse, HealthResponse, Profile,
};
use crate::services::{CacheKey, CacheManager, ProfileStoreClient, ProfileStoreError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub profile_store: Arc<ProfileStoreClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub candidate_pool_size: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/compatibility", web::post().to(compatibility))
        .route("/debug/echo", web::post().to(debug_echo));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Debug endpoint to echo raw JSON for debugging
async fn debug_echo(
    body: web::Bytes,
    req: actix_web::HttpRequest,
) -> impl Responder {
    let body_str = String::from_utf8_lossy(&body);
    tracing::info!("DEBUG echo - path: {}, method: {}, body: {}", req.path(), req.method(), body_str);
    HttpResponse::Ok().json(serde_json::json!({
        "path": req.path(),
        "method": req.method().to_string(),
        "body": body_str,
    }))
}

/// Fetch a profile through the cache, falling back to the profile store and
/// populating the cache on miss
async fn get_profile_cached(
    state: &AppState,
    user_id: &str,
) -> Result<Profile, ProfileStoreError> {
    let cache_key = CacheKey::profile(user_id);

    if let Ok(profile) = state.cache.get::<Profile>(&cache_key).await {
        return Ok(profile);
    }

    let profile = state.profile_store.get_profile(user_id).await?;

    if let Err(e) = state.cache.set(&cache_key, &profile).await {
        tracing::warn!("Failed to cache profile {}: {}", user_id, e);
    }

    Ok(profile)
}

fn profile_store_error_response(user_id: &str, error: ProfileStoreError) -> HttpResponse {
    match error {
        ProfileStoreError::NotFound(message) => {
            tracing::info!("Profile not found: {}", message);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message,
                status_code: 404,
            })
        }
        other => {
            tracing::error!("Profile store failure for {}: {}", user_id, other);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Profile store unavailable".to_string(),
                message: other.to_string(),
                status_code: 502,
            })
        }
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20,
///   "filters": { "minCompatibility": 50, "skills": ["rust"] }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let user_id = &req.user_id;
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "[{}] Finding matches for user: {}, limit: {}",
        request_id,
        user_id,
        limit
    );

    // Fetch the requester's profile (cache-assisted)
    let requester = match get_profile_cached(&state, user_id).await {
        Ok(profile) => profile,
        Err(e) => return profile_store_error_response(user_id, e),
    };

    // Candidate pools are fetched fresh on every request so newly onboarded
    // founders show up immediately
    let candidates = match state
        .profile_store
        .query_candidates(user_id, state.candidate_pool_size)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => return profile_store_error_response(user_id, e),
    };

    tracing::debug!(
        "[{}] Scoring {} candidates for {}",
        request_id,
        candidates.len(),
        user_id
    );

    // Run the matching engine
    let filters = req.filters.clone().unwrap_or_default();
    let outcome = state.matcher.match_profiles(&requester, candidates, &filters);

    // The engine returns the full ranked list; pagination happens here
    let mut matches = outcome.matches;
    matches.truncate(limit);

    let response = FindMatchesResponse {
        matches,
        total_candidates: outcome.total_candidates,
    };

    tracing::info!(
        "[{}] Returning {} matches for user {} (from {} candidates)",
        request_id,
        response.matches.len(),
        user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Single-pair compatibility endpoint, backing the "why this match" view
///
/// POST /api/v1/matches/compatibility
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "targetUserId": "string"
/// }
/// ```
async fn compatibility(
    state: web::Data<AppState>,
    req: web::Json<CompatibilityRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.user_id == req.target_user_id {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid target".to_string(),
            message: "Cannot compute compatibility of a profile with itself".to_string(),
            status_code: 400,
        });
    }

    let requester = match get_profile_cached(&state, &req.user_id).await {
        Ok(profile) => profile,
        Err(e) => return profile_store_error_response(&req.user_id, e),
    };

    let target = match get_profile_cached(&state, &req.target_user_id).await {
        Ok(profile) => profile,
        Err(e) => return profile_store_error_response(&req.target_user_id, e),
    };

    let result = state.matcher.calculate_compatibility(&requester, &target);

    tracing::debug!(
        "Compatibility {} -> {}: {}%",
        req.user_id,
        req.target_user_id,
        result.compatibility_score
    );

    HttpResponse::Ok().json(CompatibilityResponse {
        requester_id: req.user_id.clone(),
        result,
    })
}
