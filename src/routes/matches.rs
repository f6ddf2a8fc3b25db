use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use crate::core::{slug_match, Slug};
use crate::error::ApiError;
use crate::models::{HealthResponse, SlugMatchRequest, SlugMatchResponse};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/slug/match", web::post().to(match_slugs));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Slug match endpoint
///
/// POST /api/v1/slug/match
///
/// Request body:
/// ```json
/// {
///   "patient_slug": "A*01:01+A*02:01",
///   "donor_slug": "A*01:01+A*02:01"
/// }
/// ```
///
/// The body is read raw so that a missing or unreadable payload can be told
/// apart from a payload with missing keys. Payload extraction failures
/// (e.g. exceeding the configured size limit) are rendered as JSON too.
async fn match_slugs(
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = body.map_err(ApiError::Payload)?;
    let request = parse_request(&body)?;
    let response = evaluate(&request)?;

    tracing::debug!(
        "Compared {} against {}: {:?}",
        response.patient_slug,
        response.donor_slug,
        response.matched
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Read a match request from a raw body
///
/// An empty body, invalid JSON or a falsy JSON value (`null`, `false`, `0`,
/// `""`, `[]`) counts as no input. An empty object is input with missing
/// keys. Any other value must be an object with string fields.
///
/// The `Content-Type` header is not consulted; the body is parsed as JSON
/// whatever it declares.
pub fn parse_request(body: &[u8]) -> Result<SlugMatchRequest, ApiError> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) if !is_falsy(&value) => value,
        _ => return Err(ApiError::NoInput),
    };

    if !value.is_object() {
        return Err(ApiError::InvalidData);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Rejected slug match payload: {}", e);
        ApiError::InvalidData
    })
}

/// Whether a JSON body carries no usable input
///
/// Objects are never falsy: `{}` is a present body missing both keys.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(_) => false,
    }
}

/// Parse both GL strings and run the match predicate
pub fn evaluate(request: &SlugMatchRequest) -> Result<SlugMatchResponse, ApiError> {
    let (patient_glstring, donor_glstring) = request.slugs().ok_or(ApiError::InvalidData)?;

    let patient = Slug::from_glstring(patient_glstring)?;
    let donor = Slug::from_glstring(donor_glstring)?;
    let matched = slug_match(&patient, &donor)?;

    Ok(SlugMatchResponse {
        matched: matched.into(),
        patient_slug: patient.to_string(),
        donor_slug: donor.to_string(),
    })
}
