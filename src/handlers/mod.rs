mod url_record;

pub use url_record::{index_handler, redirect_handler, shorten_handler};
