//! Server-side access to the article search API.

pub mod api;
pub mod config;
