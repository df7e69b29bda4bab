//! Request payload types for the Push Lap Growth SDK.
//!
//! Each payload serializes to the camelCase JSON shape the API expects.
//! Optional fields that were never set are omitted from the serialized
//! body entirely, never emitted as `null`.

pub mod referral;
pub mod sale;

pub use referral::NewReferral;
pub use sale::{NewSale, SaleUpdate};
