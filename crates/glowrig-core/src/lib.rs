//! Glowrig panel core: wire protocol, device link and sound playback.
//!
//! The rig (LED strip, stepper motor, sound cues, player table) exposes a
//! device socket at `/ws` and a one-shot settings endpoint at `/led/settings`.
//! This crate owns everything below the UI: the JSON frame shapes, the
//! fire-and-forget transports, the preview formatting, and the rodio-backed
//! sound player. The egui panel lives in `add-ons/glowrig-panel`.

pub mod error;
pub mod link;
pub mod preview;
pub mod protocol;
pub mod sound;

pub use error::{PanelError, PanelResult};
pub use link::{
    run_link, CommandReceiver, CommandSender, EventReceiver, EventSender, LinkConfig, LinkEvent,
    PanelCommand, SettingsTransport, Trigger,
};
pub use protocol::{
    value_text, ClientCommand, LedSettings, PlayerColor, ServerEvent, WorkMode,
};
pub use sound::SoundPlayer;
