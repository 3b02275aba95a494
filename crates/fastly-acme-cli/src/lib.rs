//! # fastly-acme-cli
//!
//! Command-line front end for the Fastly ACME source.
//!
//! ## Features
//!
//! - **Records**: Populate one or more zones and print the challenge records
//! - **Config file**: Token, default TTL and per-zone sub-zones in TOML
//! - **Multiple output formats**: Plain listing, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
