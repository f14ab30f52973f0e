use embassy_net::{Stack, tcp::TcpSocket};
use embassy_time::Duration;
use embedded_io_async::{Read, Write};
use log::warn;

use super::{HttpResult, connection::HttpConnection};

const SOCKET_TIMEOUT: Duration = Duration::from_secs(30);

pub trait HttpHandler {
    fn handle_request<S: Read + Write>(
        &self,
        conn: HttpConnection<S>,
    ) -> impl Future<Output = HttpResult>;
}

/// Single-connection HTTP server.
///
/// Accepts one TCP connection at a time and hands it to the handler. A
/// request arriving while a handler runs (a hello sequence, for instance)
/// waits at the TCP layer until the current one is answered.
pub struct HttpServer<'a, T: HttpHandler> {
    handler: &'a T,
}

impl<'a, T: HttpHandler> HttpServer<'a, T> {
    pub fn new(handler: &'a T) -> Self {
        Self { handler }
    }

    pub async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> HttpResult {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(SOCKET_TIMEOUT));

            if socket.accept(port).await.is_err() {
                continue;
            }

            let conn = match HttpConnection::from_socket(socket).await {
                Ok(connection) => connection,
                Err(e) => {
                    warn!("http_server: connection startup error: {:?}", e);
                    continue;
                }
            };

            if let Err(e) = self.handler.handle_request(conn).await {
                warn!("http_server: connection error: {:?}", e);
            }
        }
    }
}
