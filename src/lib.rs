// Public API exports (shared between client and server)
pub mod app;
pub mod config;
pub mod domain;
pub mod shared;
