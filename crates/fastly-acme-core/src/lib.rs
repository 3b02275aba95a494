//! Core types and traits for the Fastly ACME DNS source.
//!
//! This crate provides the foundational types shared by the client, the
//! source and the command-line front end:
//!
//! - **Types**: Strongly-typed TLS subscription responses and DNS records
//! - **Zone**: The record container a source populates
//! - **Source**: The trait zone managers drive
//! - **Errors**: [`AcmeError`] and [`ZoneError`]
//!
//! # Example
//!
//! ```rust
//! use fastly_acme_core::{Record, Zone};
//!
//! let mut zone = Zone::new("example.com.", ["internal"]).unwrap();
//! zone.add_record(Record::cname("_acme-challenge", "abc.fastly-validations.com.", 3600), false)
//!     .unwrap();
//! assert_eq!(zone.len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/fastly-acme-core/0.3.0")]

mod error;
mod source;
pub mod types;
mod zone;

pub use error::{AcmeError, Result, ZoneError};
pub use source::Source;
pub use types::*;
pub use zone::Zone;
