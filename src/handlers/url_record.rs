use actix_web::{
    http::header::{HeaderValue, LOCATION},
    web, HttpResponse, Responder,
};
use log::{debug, info, warn};
use percent_encoding::{utf8_percent_encode, CONTROLS};

use crate::{
    errors::AppError,
    models::{ShortenUrlRequest, ShortenUrlResponse},
    services::UrlShortenerServiceTrait,
    types::{Result, UrlShortenerServiceType, WELCOME_MESSAGE},
};

/// Welcome route handler
pub async fn index_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

/// Shorten route handler
pub async fn shorten_handler(
    body: web::Json<ShortenUrlRequest>,
    service: web::Data<UrlShortenerServiceType>,
) -> Result<impl Responder> {
    let ShortenUrlRequest { url } = body.into_inner();
    let short_url = service.shorten(url).await?;

    Ok(HttpResponse::Ok().json(ShortenUrlResponse { short_url }))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    service: web::Data<UrlShortenerServiceType>,
) -> Result<impl Responder> {
    let id = path.into_inner();
    debug!("Redirect requested for id: {}", id);

    // Fails with NotFound for unknown ids
    let record = service.resolve(&id).await?;

    info!("Redirecting '{}' to '{}'", id, record.original_url);

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, location_value(&record.original_url)?))
        .finish())
}

// Stored URLs are not validated, so control characters are percent-encoded
// before they reach the Location header.
fn location_value(url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(url) {
        return Ok(value);
    }

    let encoded = utf8_percent_encode(url, CONTROLS).to_string();
    warn!("Percent-encoded redirect target '{}'", encoded);
    HeaderValue::from_str(&encoded)
        .map_err(|e| AppError::Internal(format!("Invalid redirect target: {}", e)))
}
