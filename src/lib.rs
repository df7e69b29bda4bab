//! Push Lap Growth SDK - Rust client library for the Push Lap Growth API.
//!
//! This crate provides typed request payloads and an HTTP client for the
//! Push Lap Growth affiliate tracking API: recording sales, updating and
//! deleting them (directly or by external identifier) and creating referrals.
//!
//! # Payload Types
//!
//! - [`NewSale`] — sale creation payload
//! - [`SaleUpdate`] — sale update payload
//! - [`NewReferral`] — referral creation payload
//!
//! Optional fields left unset are omitted from the request body.
//!
//! # Client
//!
//! - [`PushLapGrowthClient`] — the API client
//! - [`ClientConfig`] — token, base URL, timeout, user agent
//! - [`ClientError`] — typed failure taxonomy; match on the variant to tell
//!   "not found" and "validation" apart from other failures
//! - [`client::Transport`] — injectable transport seam, used by tests to run
//!   the client against canned responses
//!
//! # Example
//!
//! ```rust
//! use pushlapgrowth_sdk::types::NewSale;
//!
//! let sale = NewSale::new(100.0)
//!     .with_referral_id("ref123")
//!     .with_email("customer@example.com");
//! assert_eq!(sale.total_earned, 100.0);
//! ```

pub mod client;
pub mod types;

pub use client::{ClientConfig, ClientError, FieldErrors, PushLapGrowthClient};
pub use types::{NewReferral, NewSale, SaleUpdate};
