//! cookieget - Estimate how random a server's session cookies look.
//!
//! Samples the cookies a server sets over repeated requests and scores each
//! cookie by how much its values differ from one another:
//!
//! - **analysis**: grouping, shared-character mask, embedded timestamp
//!   search, pairwise edit distance and the randomness score
//! - **config**: Configuration from environment variables, login payloads
//! - **fetch**: Repeated GET/POST sampling over HTTP
//! - **render**: Terminal presentation of a report
//! - **bootstrap**: Tracing initialization utilities
//!
//! The score is a heuristic, not a proof of cryptographic strength.
//!
//! # Features
//!
//! - `config` - Configuration utilities
//! - `fetch` - HTTP sampling (implies `config`)
//! - `render` - Text report rendering
//! - `bootstrap` - Tracing setup
//! - `cli` - The `cookieget` binary
//! - `full` - All features (default)
//!
//! # Example
//!
//! ```rust,ignore
//! use cookieget::{init_tracing, reference_timestamp, AnalysisReport, CookieFetcher, SamplerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing("cookieget=info");
//!     let config = SamplerConfig::from_env();
//!     let now = reference_timestamp();
//!
//!     let fetches = CookieFetcher::new(&config)?
//!         .fetch_samples("example.com", config.count, None)
//!         .await?;
//!     let report = AnalysisReport::from_fetches(fetches, &now)?;
//!     for record in &report.records {
//!         println!("{}: ~{:.2}%", record.name, record.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "fetch")]
pub mod fetch;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
pub use analysis::{
    AnalysisRecord, AnalysisReport, FetchedCookies, SampleError, SampleStore, TimestampMatch,
    TokenSampleSet,
};

#[cfg(feature = "config")]
pub use config::{reference_timestamp, Credentials, CredentialsError, PayloadEncoding, SamplerConfig};

#[cfg(feature = "fetch")]
pub use fetch::{normalize_url, CookieFetcher, FetchError};

#[cfg(feature = "render")]
pub use render::{render_report, RenderOptions};

#[cfg(feature = "bootstrap")]
pub use bootstrap::{init_tracing, verbosity_filter};
