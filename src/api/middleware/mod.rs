// Middleware module
// Request-level concerns applied before handlers run

pub mod auth;
