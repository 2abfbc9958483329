#![warn(clippy::pedantic)]

pub mod error;
pub mod channel_type;
pub mod generation;
pub mod registry;
pub mod reading;
pub mod target;

pub use channel_type::ChannelType;
pub use error::TypeError;
pub use generation::Generation;
pub use reading::{PortValue, Reading};
pub use registry::{FieldSpec, TypeDescriptor};
pub use target::{DownlinkTarget, UplinkTarget};
