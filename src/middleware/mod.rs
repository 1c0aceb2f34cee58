mod request_id;
mod request_logger;

pub use request_id::RequestId;
pub use request_logger::RequestLogger;
