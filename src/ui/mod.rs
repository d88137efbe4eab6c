pub mod render;
pub mod style;

pub use style::{Color, Style, Theme};
