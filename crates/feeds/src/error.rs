/// Failures a fetcher can hit before producing data.
///
/// Most call sites swallow these after logging and substitute simulated
/// readings; only satellite granule decoding lets a `Payload` error
/// escape to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    /// Transport-level failure before any payload arrived.
    Relay(String),
    /// Upstream answered with a non-success HTTP status.
    Upstream(u16),
    /// A payload arrived but could not be decoded.
    Payload(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Relay(msg) => write!(f, "feed transport failed: {msg}"),
            FeedError::Upstream(status) => write!(f, "feed upstream returned HTTP {status}"),
            FeedError::Payload(msg) => write!(f, "feed payload undecodable: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}

#[cfg(test)]
mod tests {
    use super::FeedError;

    #[test]
    fn errors_render_their_context() {
        assert_eq!(
            FeedError::Upstream(429).to_string(),
            "feed upstream returned HTTP 429"
        );
        assert!(
            FeedError::Payload("not a granule".into())
                .to_string()
                .contains("not a granule")
        );
    }
}
