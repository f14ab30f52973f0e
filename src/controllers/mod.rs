mod http;

pub use http::{AppHttpController, init_http_controller};
