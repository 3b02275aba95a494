mod record;
mod tls;

pub use record::*;
pub use tls::*;
