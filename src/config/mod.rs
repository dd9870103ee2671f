//! Run configuration: environment settings, login payloads and the reference clock.

mod base;
mod credentials;
mod timestamp;

pub use base::SamplerConfig;
pub use credentials::{Credentials, CredentialsError, PayloadEncoding};
pub use timestamp::reference_timestamp;
