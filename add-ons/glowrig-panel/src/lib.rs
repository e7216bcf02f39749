//! glowrig-panel: bare-metal egui Control Panel for the Glowrig LED rig.
//!
//! Single binary; talks to the rig through glowrig-core's device link
//! (fire-and-forget commands out, live counter/status and sound cues in).

pub mod config;
pub mod glowrig_panel;

pub use glowrig_panel::{
    event_channel, panel_channel, GlowrigPanel, LinkEvent, PanelCommand, Trigger,
};
