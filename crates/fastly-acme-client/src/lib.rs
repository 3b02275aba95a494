//! HTTP client for the Fastly API.
//!
//! This crate provides [`FastlyClient`] and the TLS subscriptions endpoints
//! the ACME source reads challenges from.

#![doc(html_root_url = "https://docs.rs/fastly-acme-client/0.3.0")]

mod client;
pub mod api;

pub use client::{FastlyClient, FastlyClientBuilder, DEFAULT_BASE_URL};
pub use fastly_acme_core::{AcmeError, Result};
