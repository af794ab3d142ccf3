//! Marker overlay: resolves what each globe point should display and
//! projects it into billboarded labels and hover tooltips.

pub mod markers;
pub mod resolver;
pub mod tooltip;

pub use markers::*;
pub use resolver::*;
pub use tooltip::*;
