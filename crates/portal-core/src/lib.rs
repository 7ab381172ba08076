//! Core types and traits for the portal URL shortener.
//!
//! This crate provides the base-62 codec, the [`ShortCode`] type, the
//! [`Sequence`] counter and the [`KeyStore`] contract shared by the storage
//! backend and the HTTP gateway.

pub mod base62;
pub mod error;
pub mod sequence;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, Result};
pub use sequence::Sequence;
pub use shortcode::ShortCode;
pub use store::KeyStore;
