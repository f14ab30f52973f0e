//! The fixed route table and its canonical response bodies.
//!
//! Selection is by exact path match only; handlers are bound to paths
//! regardless of method. No path parameters, no query strings, no
//! authentication.

/// Body returned by the hello route.
pub const HELLO_BODY: &str = "Hello sent to M5StickC Plus!";

/// Body returned for any unregistered path.
pub const NOT_FOUND_BODY: &str = "404: Not Found";

/// Routes served by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - the static landing page.
    Index,
    /// `/hello` - flash the screen, then acknowledge.
    Hello,
    /// Everything else.
    NotFound,
}

impl Route {
    /// Resolve a request path to a route by exact match.
    pub fn resolve(path: &str) -> Self {
        match path {
            "/" => Route::Index,
            "/hello" => Route::Hello,
            _ => Route::NotFound,
        }
    }
}
