//! Live environmental data feeds with simulated fallbacks.
//!
//! Each fetcher performs one outbound request and always resolves to
//! usable data: transport and HTTP failures downgrade to the
//! deterministic generator instead of surfacing errors. The one
//! exception is satellite granule decoding, which reports a corrupt
//! payload to the caller rather than inventing chemistry for it.

pub mod air_quality;
pub mod error;
pub mod queue;
pub mod relay;
pub mod tempo;
pub mod weather;
pub mod wildfire;

pub use air_quality::*;
pub use error::*;
pub use queue::*;
pub use tempo::*;
pub use weather::*;
pub use wildfire::*;
