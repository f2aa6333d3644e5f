//! Core components of the `xau-sentiment` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`Client`] handle and its builder.
//! - The primary [`Error`] type.
//! - Internal networking helpers.

/// The client (`Client`), builder, and configuration.
pub mod client;
/// The primary error type (`Error`) for the crate.
pub mod error;

/// Polars export of sentiment rows.
#[cfg(feature = "dataframe")]
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::Client`
pub use client::{API_TOKEN_ENV, Client, ClientBuilder};
pub use error::Error;
