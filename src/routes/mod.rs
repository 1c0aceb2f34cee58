use actix_web::{error::JsonPayloadError, web, HttpRequest};
use log::debug;

use crate::{
    errors::AppError,
    handlers::{index_handler, redirect_handler, shorten_handler},
};

// Malformed or missing JSON bodies become 400 InvalidRequest
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    AppError::InvalidRequest(format!("Invalid request body: {}", err)).into()
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    );

    cfg.route("/", web::get().to(index_handler));
    cfg.route("/shorten", web::post().to(shorten_handler));
    cfg.route("/redirect/{id}", web::get().to(redirect_handler));
}
