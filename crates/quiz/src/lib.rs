//! Climate-awareness quiz: fixed question bank, linear session state
//! machine, and persisted run statistics.

pub mod questions;
pub mod session;
pub mod stats;

pub use questions::*;
pub use session::*;
pub use stats::*;
