pub mod connection;
pub mod controller;
pub mod headers;
pub mod routes;
pub mod server;

pub use connection::HttpConnection;
pub use controller::HelloHttpController;
pub use headers::{
    ContentHeaders,
    ContentType,
    HttpMethod,
    ResponseHeaders,
    StatusCode,
    TextEncoding,
};
pub use routes::Route;
pub use server::{HttpHandler, HttpServer};

#[derive(Debug)]
pub enum Error {
    /// The peer closed the connection or a socket operation failed.
    Closed,
    /// The request line could not be parsed.
    Parse,
    /// A response header could not be formatted.
    FormatHeaders,
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::FormatHeaders
    }
}

pub type HttpResult = Result<(), Error>;
