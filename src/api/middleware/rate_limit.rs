//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Token bucket parameters for a per-IP limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Interval in seconds after which one token is replenished.
    pub per_second: u64,
    /// Bucket size.
    pub burst: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst: 100,
        }
    }
}

/// Creates a per-IP rate limiter for the URL endpoints.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Panics
///
/// Panics if `per_second` or `burst` is zero; both are rejected by
/// [`crate::config::Config::validate`] before the router is built.
pub fn layer(
    limit: RateLimit,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(limit.per_second)
            .burst_size(limit.burst)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
