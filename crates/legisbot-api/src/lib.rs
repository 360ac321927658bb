//! HTTP client for the LegisBot service.
//!
//! Implements the `LegisApi` trait from the core crate over reqwest.
//! Every authenticated request attaches the bearer token read from the
//! client's shared token slot at send time.

mod client;
mod dto;

pub use client::ApiClient;
pub use dto::{ChatQueryRequest, ContextsResponse, RegisterRequest, TokenResponse};
