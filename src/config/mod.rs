use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;
use crate::instruments::VsiScale;
use crate::resilience::BackoffPolicy;

/// Top-level panel configuration, usually read from a JSON file.
///
/// Every field has a default, so an empty object (or no file at all) yields
/// the reference 1024x600 panel talking to a local simulator bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub endpoint: String,
    pub window: WindowConfig,
    pub reconnect: BackoffPolicy,
    pub vsi: VsiScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub tick_rate_hz: u32,
    pub instrument_size: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: "ws://localhost:8080/simconnect".to_string(),
            window: WindowConfig::default(),
            reconnect: BackoffPolicy::default(),
            vsi: VsiScale::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 600,
            title: "Aviation Six-Pack".to_string(),
            tick_rate_hz: 30,
            instrument_size: 200,
        }
    }
}

impl PanelConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: PanelConfig = serde_json::from_str(content)
            .context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.endpoint_url()?;

        if self.window.tick_rate_hz == 0 {
            return Err(anyhow!("tick_rate_hz must be greater than zero"));
        }
        if self.window.instrument_size < 50 {
            return Err(anyhow!(
                "instrument_size {} is too small to draw a dial",
                self.window.instrument_size
            ));
        }
        if self.vsi.gain_fpm == 0.0 || !self.vsi.gain_fpm.is_finite() {
            return Err(anyhow!("vsi.gain_fpm must be a finite, non-zero value"));
        }
        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint))?;
        match url.scheme() {
            "ws" | "wss" => Ok(url),
            other => Err(anyhow!("Unsupported endpoint scheme: {}", other)),
        }
    }
}
