//! Panel config: bundled default via include_str! (bare-metal, no external deps).

use glowrig_core::{LinkConfig, SettingsTransport};
use serde::Deserialize;

/// Bundled default config so the panel runs with no external files. Overridden
/// by a local file if present.
const DEFAULT_PANEL_CONFIG: &str = include_str!("../assets/panel_config.json");

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Rig address, host:port.
    #[serde(default = "default_host")]
    pub host: String,
    /// Use wss/https instead of ws/http.
    #[serde(default)]
    pub secure: bool,
    /// Settings transport: "http" posts settings one-shot, "socket" frames
    /// them over the device socket.
    #[serde(default)]
    pub settings_transport: SettingsTransport,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_host() -> String {
    "127.0.0.1:14444".to_string()
}
fn default_window_width() -> f32 {
    440.0
}
fn default_window_height() -> f32 {
    640.0
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            secure: false,
            settings_transport: SettingsTransport::default(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl PanelConfig {
    /// Load config: local file (relative to manifest or current_dir) if present,
    /// else bundled default.
    pub fn load() -> Self {
        let manifest_assets = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let cwd_assets = std::env::current_dir()
            .ok()
            .map(|p| p.join("add-ons").join("glowrig-panel").join("assets"));

        let path = [manifest_assets, cwd_assets.unwrap_or_default()]
            .into_iter()
            .find(|b| b.join("panel_config.json").exists())
            .map(|b| b.join("panel_config.json"));

        let s = match path {
            Some(p) => std::fs::read_to_string(&p).ok(),
            None => None,
        };
        let s = s.unwrap_or_else(|| DEFAULT_PANEL_CONFIG.to_string());
        serde_json::from_str(&s).unwrap_or_default()
    }

    fn schemes(&self) -> (&'static str, &'static str) {
        if self.secure {
            ("wss", "https")
        } else {
            ("ws", "http")
        }
    }

    pub fn ws_url(&self) -> String {
        format!("{}://{}/ws", self.schemes().0, self.host)
    }

    pub fn settings_url(&self) -> String {
        format!("{}://{}/led/settings", self.schemes().1, self.host)
    }

    pub fn sound_base(&self) -> String {
        format!("{}://{}/sounds/", self.schemes().1, self.host)
    }

    pub fn link_config(&self) -> LinkConfig {
        LinkConfig {
            ws_url: self.ws_url(),
            settings_url: self.settings_url(),
            sound_base: self.sound_base(),
            settings_transport: self.settings_transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_default_parses() {
        let config: PanelConfig = serde_json::from_str(DEFAULT_PANEL_CONFIG).unwrap();
        assert_eq!(config.settings_transport, SettingsTransport::Http);
        assert!(!config.secure);
    }

    #[test]
    fn urls_follow_the_host_and_scheme() {
        let config = PanelConfig {
            host: "rig.local:14444".into(),
            ..PanelConfig::default()
        };
        assert_eq!(config.ws_url(), "ws://rig.local:14444/ws");
        assert_eq!(config.settings_url(), "http://rig.local:14444/led/settings");
        assert_eq!(config.sound_base(), "http://rig.local:14444/sounds/");

        let secure = PanelConfig {
            secure: true,
            ..config
        };
        assert_eq!(secure.ws_url(), "wss://rig.local:14444/ws");
        assert_eq!(secure.settings_url(), "https://rig.local:14444/led/settings");
    }

    #[test]
    fn socket_variant_is_selectable() {
        let config: PanelConfig =
            serde_json::from_str(r#"{ "settings_transport": "socket" }"#).unwrap();
        assert_eq!(config.settings_transport, SettingsTransport::Socket);
        assert_eq!(config.host, "127.0.0.1:14444");
    }
}
