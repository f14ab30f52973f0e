//! Static webpage served by the HelloStick firmware.
//!
//! The page content lives in `assets/index.html` and is embedded at build
//! time, keeping markup out of the route handler code. The page must be
//! byte-identical on every request.

#![no_std]

/// The landing page, served on `GET /`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
