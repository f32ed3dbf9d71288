//! Middleware for the HTTP server.
//!
//! Ordering matters: the request ID layer must run outside the access
//! logger so the log line carries the ID.

pub mod logging;
pub mod request_id;
