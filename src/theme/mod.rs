//! Visual theme for Hostboard.

mod styles;

pub use styles::GLOBAL_STYLES;
