use std::net::SocketAddr;

use serde::Deserialize;

/// Audio engine gateway configuration
///
/// The engine runs as a separate process and exposes its processor over a
/// local RPC gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioConfig {
    /// Address of the engine gateway
    #[serde(default = "default_gateway_address")]
    pub gateway_address: SocketAddr,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            gateway_address: default_gateway_address(),
        }
    }
}

fn default_gateway_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 25333))
}
