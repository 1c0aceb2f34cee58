mod url_record;

pub use url_record::{ShortenUrlRequest, ShortenUrlResponse, UrlRecord};
