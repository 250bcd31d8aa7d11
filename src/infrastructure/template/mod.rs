//! Template-based config rendering

mod renderer;

pub use renderer::{ConfigRenderer, DEFAULT_TEMPLATE};
