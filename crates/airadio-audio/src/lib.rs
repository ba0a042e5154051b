#![allow(clippy::must_use_candidate)]

mod bridge;
mod error;
mod transport;
mod types;

pub use bridge::AudioBridge;
pub use error::BridgeError;
pub use transport::{EngineTransport, TcpTransport};
pub use types::EffectParameters;
