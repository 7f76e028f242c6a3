//! HTTP API
//!
//! Client for the Outlay REST API.

pub mod client;

pub use client::{stored_api_base, store_api_base, ApiClient, DEFAULT_API_BASE};
