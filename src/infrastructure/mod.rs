//! Infrastructure layer
//!
//! Hardware drivers, the screen mutex, and the embassy tasks that keep the
//! access point and HTTP server running.

pub mod drivers;
pub mod services;
pub mod tasks;
