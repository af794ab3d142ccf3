pub mod math;
pub mod time;

pub use time::*;
