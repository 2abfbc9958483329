#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;

pub use config::DecoderConfig;
pub use decoder::{LppDecoder, Ports, Readings};
pub use error::DecodeError;
