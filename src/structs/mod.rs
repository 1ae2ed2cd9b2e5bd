pub mod assignment;
pub mod log_request;
