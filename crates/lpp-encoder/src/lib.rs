#![warn(clippy::pedantic)]

pub mod buffer;
pub mod encoder;
pub mod error;

pub use buffer::FrameBuffer;
pub use encoder::LppEncoder;
pub use error::EncodeError;
