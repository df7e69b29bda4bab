//! HTTP client for the Push Lap Growth REST API.
//!
//! This module provides a type-safe client for recording sales and referrals
//! against the Push Lap Growth affiliate tracking API.
//!
//! # Example
//!
//! ```rust,ignore
//! use pushlapgrowth_sdk::client::PushLapGrowthClient;
//! use pushlapgrowth_sdk::types::NewSale;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PushLapGrowthClient::new("api-token")?;
//!
//!     let sale = NewSale::new(100.0).with_referral_id("ref123");
//!     let created = client.create_sale(&sale).await?;
//!     println!("created sale: {created}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, FieldErrors};
pub use http::PushLapGrowthClient;
pub use transport::{HttpTransport, RawRequest, RawResponse, Transport, TransportError};
