//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests per second replenished per client.
const PER_SECOND: u64 = 2;

/// Burst allowance per client.
const BURST_SIZE: u32 = 50;

/// Creates a rate limiter keyed on the socket peer address.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
/// Requires the router to be served with `ConnectInfo<SocketAddr>`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter keyed on the forwarded client IP.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back to
/// the peer address. Use only behind a trusted reverse proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}
