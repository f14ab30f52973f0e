//! Network logic for the HelloStick firmware.
//!
//! - `http` - Minimal HTTP/1.1 server core: request-line parsing, response
//!   header rendering, a connection type generic over `embedded_io_async`
//!   streams, and the request controller that binds the route table to the
//!   screen service, so the whole path runs on the host in tests.
//! - `dhcp` - DHCP message parsing and response building for the access
//!   point's stateless address server, plus the lease table that backs the
//!   connected-client count on the status screen.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod dhcp;
pub mod http;
