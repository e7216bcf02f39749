//! One-shot HTTP submission of LED settings.
//!
//! Fire-and-forget: the rig's settings endpoint answers, but nothing here reads
//! the answer. The status is logged at debug level, failures at warn, and
//! nothing is retried or surfaced.

use tracing::{debug, warn};

use crate::protocol::LedSettings;

pub struct SettingsPoster {
    client: reqwest::Client,
    url: String,
}

impl SettingsPoster {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// POST the settings as a JSON body. Fire-and-forget.
    pub async fn post(&self, settings: &LedSettings) {
        match self.client.post(&self.url).json(settings).send().await {
            Ok(resp) => debug!(status = %resp.status(), "settings posted"),
            Err(e) => warn!("settings post failed, dropping: {}", e),
        }
    }
}
