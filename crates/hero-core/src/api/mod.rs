//! Hero API: typed records, endpoints, HTTP transport and client.

mod client;
mod endpoint;
mod error;
mod transport;
mod types;

pub use client::HeroClient;
pub use endpoint::{parse_base_url, Endpoint};
pub use error::ApiError;
pub use transport::{CurlTransport, HttpResponse, HttpTransport};
pub use types::{HeroId, HeroImage, HeroOccupation, HeroPowerStats, HeroSummary, Validate};

#[cfg(test)]
pub(crate) use transport::fake::FakeTransport;
