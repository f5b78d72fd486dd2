pub mod color_wheel;

pub use color_wheel::{color_wheel, to_color32};
