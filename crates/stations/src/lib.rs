pub mod obs;
pub mod point;
pub mod reading;
pub mod registry;
pub mod seeds;
pub mod summary;

pub use obs::*;
pub use point::*;
pub use reading::*;
pub use registry::*;
pub use summary::*;
