//! Core infrastructure: result caching and board filtering.

pub mod cache;
pub mod filters;
