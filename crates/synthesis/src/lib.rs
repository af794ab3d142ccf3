pub mod bases;
pub mod catalog;
pub mod generator;

pub use bases::*;
pub use catalog::*;
pub use generator::*;
