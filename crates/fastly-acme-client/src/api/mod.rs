//! API endpoint modules.

mod tls;

pub use tls::{ListSubscriptionsRequest, TlsSubscriptionsApi};
