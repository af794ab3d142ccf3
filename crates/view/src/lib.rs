//! Camera-side view math: the click-to-focus flight and the pointer
//! ray picking the host renderer calls into.

pub mod camera;
pub mod picking;

pub use camera::*;
pub use picking::*;
