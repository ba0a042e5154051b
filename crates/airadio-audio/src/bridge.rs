use std::net::SocketAddr;

use serde_json::{Value, json};

use crate::error::BridgeError;
use crate::transport::{EngineTransport, TcpTransport};
use crate::types::EffectParameters;

/// Client for the out-of-process audio engine
///
/// Owns one gateway connection for its lifetime: opened by
/// [`AudioBridge::connect`], released when the bridge is dropped. Every
/// operation forwards its arguments unchanged and reports success as a
/// `bool`; gateway and engine errors are logged and swallowed, never raised
/// past the bridge. No retry, no timeout, no parameter validation.
pub struct AudioBridge {
    transport: Box<dyn EngineTransport>,
}

impl AudioBridge {
    /// Connect to the engine gateway and bind its audio processor
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway is unreachable or the processor
    /// handshake fails
    pub async fn connect(addr: SocketAddr) -> Result<Self, BridgeError> {
        let mut transport = TcpTransport::connect(addr).await?;
        transport.invoke("getAudioProcessor", &[]).await?;

        tracing::info!(%addr, "audio engine bridge connected");

        Ok(Self {
            transport: Box::new(transport),
        })
    }

    /// Wrap an already-established transport
    pub fn with_transport(transport: Box<dyn EngineTransport>) -> Self {
        Self { transport }
    }

    /// Run the effect chain over an input file
    pub async fn process_audio(&mut self, input_file: &str, output_file: &str) -> bool {
        self.call("processAudio", &[json!(input_file), json!(output_file)]).await
    }

    /// Update delay/flanger parameters in real time
    pub async fn set_effect_parameters(&mut self, params: &EffectParameters) -> bool {
        self.call(
            "setEffectParameters",
            &[
                json!(params.delay_time),
                json!(params.delay_feedback),
                json!(params.flanger_length),
                json!(params.flanger_frequency),
            ],
        )
        .await
    }

    /// Mix background music under the main audio, with optional fades
    pub async fn process_audio_with_bgm(
        &mut self,
        main_audio: &str,
        bgm_audio: &str,
        output_file: &str,
        fade_in: bool,
        fade_out: bool,
    ) -> bool {
        self.call(
            "processAudioWithBGM",
            &[
                json!(main_audio),
                json!(bgm_audio),
                json!(output_file),
                json!(fade_in),
                json!(fade_out),
            ],
        )
        .await
    }

    /// Set background music volume (expected range 0.0 to 1.0; not enforced)
    pub async fn set_bgm_volume(&mut self, volume: f64) -> bool {
        self.call("setBGMVolume", &[json!(volume)]).await
    }

    /// Set main audio volume (expected range 0.0 to 1.0; not enforced)
    pub async fn set_main_volume(&mut self, volume: f64) -> bool {
        self.call("setMainVolume", &[json!(volume)]).await
    }

    /// Stop audio processing
    pub async fn stop(&mut self) -> bool {
        self.call("stop", &[]).await
    }

    async fn call(&mut self, method: &str, params: &[Value]) -> bool {
        match self.transport.invoke(method, params).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(method, error = %e, "audio engine call failed");
                false
            }
        }
    }
}
