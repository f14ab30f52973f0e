use embedded_io_async::{Read, Write};
use heapless::{String, Vec};

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        ResponseHeaders,
        StatusCode,
        TargetWriter as _,
        TextEncoding,
        parse_request_line,
        read_heading,
    },
    HttpMethod,
};

const HEADER_BUFFER_SIZE: usize = 512;
const STREAM_CHUNK_SIZE: usize = 1024;

/// HTTP connection context
///
/// Generic over the transport so tests can drive it with an in-memory
/// socket; the firmware instantiates it with `embassy_net::tcp::TcpSocket`.
pub struct HttpConnection<S> {
    pub method: HttpMethod,
    pub path: String<64>,

    socket: S,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
}

impl<S: Read + Write> HttpConnection<S> {
    /// Create a new HTTP connection from a socket.
    ///
    /// Reads the heading block and parses the request line. The surface is
    /// GET-only, so any request body is left unread on the socket.
    pub async fn from_socket(mut socket: S) -> Result<Self, Error> {
        let mut header_buf = Vec::<u8, HEADER_BUFFER_SIZE>::new();
        header_buf
            .resize_default(header_buf.capacity())
            .map_err(|()| Error::Parse)?;
        let (header_end, header_len) =
            read_heading(header_buf.as_mut_slice(), &mut socket).await?;
        header_buf.truncate(header_len);

        let headers_only = &header_buf.as_slice()[..header_end];
        let header_str =
            core::str::from_utf8(headers_only).map_err(|_| Error::Parse)?;
        let (method, raw_path) =
            parse_request_line(header_str).ok_or(Error::Parse)?;

        let mut path = String::new();
        let _ = path.push_str(raw_path);
        Ok(Self {
            method,
            path,
            socket,
            header_buf,
        })
    }

    /// Get request method and path
    pub fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.path.as_str())
    }

    /// Write the headers to the connection
    pub async fn write_headers(&mut self, headers: &ResponseHeaders) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut self.header_buf)?;
        self.socket
            .write_all(self.header_buf.as_slice())
            .await
            .map_err(|_| Error::Closed)?;
        self.socket.flush().await.map_err(|_| Error::Closed)?;
        Ok(())
    }

    /// Write the body to the connection
    pub async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.write_all(chunk).await?;
        }
        Ok(())
    }

    /// Serve a complete HTML response.
    ///
    /// Writes both headers and body.
    pub async fn serve_html(&mut self, html: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(html.len());
        let headers = ResponseHeaders::success().with_content(content);
        self.write_headers(&headers).await?;
        self.write_body(html.as_bytes()).await
    }

    /// Serve a complete plain-text response with the given status code.
    pub async fn serve_text(&mut self, code: StatusCode, body: &str) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextPlain)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(body.len());
        let headers = ResponseHeaders::from_code(code).with_content(content);
        self.write_headers(&headers).await?;
        self.write_body(body.as_bytes()).await
    }

    async fn write_all(&mut self, buf: &[u8]) -> HttpResult {
        self.socket
            .write_all(buf)
            .await
            .map_err(|_| Error::Closed)?;
        self.socket.flush().await.map_err(|_| Error::Closed)?;
        Ok(())
    }
}
