//! Publish the ACME DNS challenges of Fastly TLS subscriptions as CNAME records.
//!
//! Fastly's managed certificates are validated through a CNAME at
//! `_acme-challenge.<domain>`. [`FastlyAcmeSource`] reads those challenges from
//! the TLS subscriptions API and adds them to a [`Zone`], so a zone manager
//! can publish them alongside the rest of the zone.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fastly_acme::{FastlyAcmeSource, Source, Zone};
//!
//! #[tokio::main]
//! async fn main() -> fastly_acme::Result<()> {
//!     let source = FastlyAcmeSource::new("fastly", std::env::var("FASTLY_API_TOKEN").unwrap())?;
//!
//!     let mut zone = Zone::new("example.com.", ["internal"])?;
//!     source.populate(&mut zone, false, false).await?;
//!
//!     for record in zone.records() {
//!         println!("{record}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/fastly-acme/0.3.0")]

mod challenges;
mod populate;
mod source;

pub use challenges::{challenges_for_zone, extract_challenges, relative_name, ZoneChallenge};
pub use populate::populate_zone;
pub use source::{FastlyAcmeSource, FastlyAcmeSourceBuilder, DEFAULT_TTL};

// Re-export core types
pub use fastly_acme_core::*;

// Re-export client
pub use fastly_acme_client::{FastlyClient, FastlyClientBuilder};
