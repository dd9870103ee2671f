//! Cookie sampling over HTTP.
//!
//! Issues the repeated requests whose `Set-Cookie` headers feed the analysis.

mod client;

pub use client::{normalize_url, CookieFetcher, FetchError};
