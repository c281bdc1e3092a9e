//! Test utilities for simple_openai_client tests.
//!
//! This module provides a fake transport that serves canned responses.

#![allow(dead_code)]

pub mod fixture_transport;

pub use fixture_transport::FixtureTransport;

use simple_openai_client::SimpleOpenAI;
use std::sync::Arc;

/// Reads a JSON fixture from `tests/fixtures/`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {}: {}", path, e))
}

/// Builds a client wired to `transport`.
pub fn client_with(transport: &Arc<FixtureTransport>) -> SimpleOpenAI {
    SimpleOpenAI::builder()
        .api_key("apiKey")
        .transport(transport.clone())
        .build()
        .expect("Valid client")
}
