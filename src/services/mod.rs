use std::sync::Arc;

use actix_web::web;

mod url_record;

pub use url_record::{UrlShortenerService, UrlShortenerServiceTrait};

use crate::repositories::InMemoryUrlRecordRepository;

/// Service Register
///
/// `repository` must be created once, outside the per-worker app factory,
/// so every worker shares the same store.
pub fn register(repository: Arc<InMemoryUrlRecordRepository>, cfg: &mut web::ServiceConfig) {
    let url_shortener_service = UrlShortenerService::new(repository);
    cfg.app_data(web::Data::new(url_shortener_service));
}
