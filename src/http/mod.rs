//! HTTP client module
//!
//! Provides the HTTP client used by the item source.
//!
//! # Features
//!
//! - **Timeouts**: every request carries a deadline; expiry is a typed error
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **No Retries**: failures surface to the caller on the first attempt

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
