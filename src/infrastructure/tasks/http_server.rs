//! HTTP server task.
//!
//! Owns the TCP buffers for the single server connection and runs the
//! accept loop against the firmware's controller. The buffers live on the
//! task stack, 8KB in total.

use embassy_net::Stack;
use hellostick_net::http::HttpServer;
use log::warn;

use crate::config::HTTP_PORT;
use crate::controllers::AppHttpController;

const RX_BUFFER_SIZE: usize = 4096;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task]
pub async fn http_server_task(
    stack: Stack<'static>,
    controller: &'static AppHttpController,
) {
    let server = HttpServer::new(controller);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    if let Err(e) = server
        .listen_and_serve(stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await
    {
        warn!("http_server: connection error: {:?}", e);
    }
}
