#![warn(clippy::pedantic)]

pub mod error;
pub mod fill;
pub mod fixed;
pub mod unit;

pub use error::WireError;
pub use fill::{Fill, fill_exact};
